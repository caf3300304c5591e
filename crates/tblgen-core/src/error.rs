// tblgen - FORTRAN NAMELIST lookup-table to C translator
//
// Copyright (c) 2026 tblgen contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for table parsing and validation.

use thiserror::Error;

use crate::lex::LexError;

/// An error raised while parsing or validating table records.
///
/// Every error aborts the whole run; the tool never produces partial or
/// best-effort output.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TblError {
    /// Scan-level failure inside a record body.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A `$INPUT`/`$INPUTA` header without an extractable quoted name.
    #[error("line {line}: table record is missing a quoted name")]
    MissingTableName { line: usize },

    /// A table name longer than the configured maximum.
    #[error("line {line}: table name '{name}' exceeds maximum length {max}")]
    NameTooLong {
        name: String,
        max: usize,
        line: usize,
    },

    /// More records of one kind than the configured ceiling.
    #[error("line {line}: number of tables exceeds maximum {max}")]
    TooManyTables { max: usize, line: usize },

    /// A coordinate array grew past the configured maximum point count.
    #[error("table {table}: number of {axis} points exceeds maximum {max}")]
    CapacityExceeded {
        axis: char,
        table: String,
        max: usize,
    },

    /// A token that is illegal for the current field selector.
    #[error("table {table}: {message}")]
    UnexpectedToken { table: String, message: String },

    /// A dimensional invariant violation found during validation.
    #[error("table {table}: {detail}: expected {expected}, got {actual}")]
    DimensionMismatch {
        table: String,
        detail: String,
        expected: usize,
        actual: usize,
    },
}

/// Result type for parsing operations.
pub type TblResult<T> = Result<T, TblError>;
