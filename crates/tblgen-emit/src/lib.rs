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

//! C source artifact rendering for parsed lookup tables.
//!
//! Takes a validated [`TableSet`](tblgen_core::TableSet) and produces the
//! three build artifacts: constant initializers (`tables_def.h`), extern
//! declarations (`tables.h`) and the 4-D RAM pointer externs
//! (`general_ram.tbl`).
//!
//! # Examples
//!
//! ```
//! use tblgen_emit::{render_definitions, EmitOptions};
//!
//! let set = tblgen_core::parse("$INPUT TBL='CTAB'\nX=1,2\nZ=3,4\n$\n").unwrap();
//! let defs = render_definitions(&set, &EmitOptions::default()).unwrap();
//! assert!(defs.contains("const FLT_univariate_table_point CTAB[3]"));
//! ```

mod artifacts;
mod error;
mod writer;

pub use artifacts::{render_declarations, render_definitions, render_ram_pointers, EmitOptions};
pub use error::{EmitError, EmitResult};
pub use writer::{
    write_artifacts, WrittenArtifacts, DECLARATIONS_FILE, DEFINITIONS_FILE, RAM_POINTERS_FILE,
};
