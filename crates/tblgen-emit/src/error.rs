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

//! Error types for artifact rendering and writing.

use std::path::PathBuf;
use thiserror::Error;

/// An error raised while rendering or writing the C artifacts.
#[derive(Debug, Error)]
pub enum EmitError {
    /// A 4-D entry names a table that was never defined.
    #[error("table {table}: reference to undefined table '{name}'")]
    UnresolvedReference { table: String, name: String },

    /// A 4-D entry names a 2-D table; the generated `&NAME_X/_Y/_Z`
    /// symbols only exist for 3-D tables.
    #[error("table {table}: reference '{name}' is not a 3-D table")]
    ReferenceNotThreeD { table: String, name: String },

    /// An output file could not be written.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for emission operations.
pub type EmitResult<T> = Result<T, EmitError>;
