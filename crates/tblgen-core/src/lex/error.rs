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

//! Error types for record scanning.

use thiserror::Error;

pub use crate::lex::span::SourcePos;

/// An error raised while tokenizing a table record.
///
/// Every scan error is fatal to the whole run; the driver aborts without
/// writing any output artifact.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LexError {
    /// A character outside every token alphabet.
    #[error("{pos}: unexpected character '{ch}'")]
    UnexpectedCharacter { ch: char, pos: SourcePos },

    /// A keyword buffer that matched no axis keyword when `=` was reached.
    #[error("{pos}: unknown axis keyword '{keyword}'")]
    UnknownKeyword { keyword: String, pos: SourcePos },

    /// Accumulated numeric text that does not parse as a float.
    #[error("{pos}: invalid number '{text}'")]
    InvalidNumber { text: String, pos: SourcePos },

    /// A quoted table name left open at the end of the record.
    #[error("{pos}: unclosed quoted name")]
    UnclosedQuote { pos: SourcePos },

    /// Input ended before the `$` record terminator.
    #[error("{pos}: unexpected end of input inside a table record")]
    UnexpectedEof { pos: SourcePos },
}

impl LexError {
    /// The position where the error occurred.
    pub fn pos(&self) -> SourcePos {
        match self {
            Self::UnexpectedCharacter { pos, .. }
            | Self::UnknownKeyword { pos, .. }
            | Self::InvalidNumber { pos, .. }
            | Self::UnclosedQuote { pos }
            | Self::UnexpectedEof { pos } => *pos,
        }
    }
}

/// Result type for scanner operations.
pub type LexResult<T> = Result<T, LexError>;
