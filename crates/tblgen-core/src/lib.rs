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

//! Scanner, record model and validation for FORTRAN NAMELIST-style
//! lookup-table definitions.
//!
//! An input is a sequence of `$INPUT ... $` (2-D/3-D) and `$INPUTA ... $`
//! (4-D) records. This crate parses them into a [`TableSet`] and checks
//! the per-record dimensional invariants; rendering the C artifacts lives
//! in the `tblgen-emit` crate.
//!
//! # Examples
//!
//! ```
//! use tblgen_core::{parse, validate};
//!
//! let input = "\
//! $INPUT TBL='CTAB'
//! X=1.0,2.0,3.0
//! Z=10.0,20.0,30.0
//! $
//! ";
//! let set = parse(input).unwrap();
//! validate(&set).unwrap();
//! assert_eq!(set.tables[0].x.len(), 3);
//! ```

mod error;
pub mod lex;
mod limits;
mod parser;
mod record;
mod validate;

pub use error::{TblError, TblResult};
pub use limits::Limits;
pub use parser::{parse, parse_with_limits};
pub use record::{Table2D3D, Table4D, TableSet};
pub use validate::validate;
