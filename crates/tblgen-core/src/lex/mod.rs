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

//! Lexical analysis for NAMELIST table records.
//!
//! - [`scanner`] - the character-level finite-state tokenizer
//! - [`span`] - source positions for error reporting
//! - [`error`] - scan error types

pub mod error;
pub mod scanner;
pub mod span;

pub use error::{LexError, LexResult};
pub use scanner::{ScanMode, Scanner, Token};
pub use span::SourcePos;
