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

//! Dimensional consistency checks.
//!
//! Runs once over the complete [`TableSet`], before any output file is
//! opened, so a violation in the last record still aborts cleanly.

use crate::error::{TblError, TblResult};
use crate::record::TableSet;

/// Checks every record's dimensional invariant.
///
/// - 2-D: `x` and `z` must have the same length.
/// - 3-D: `len(x) * len(y)` must equal `len(z)`.
/// - 4-D: `w` and `refs` must have the same length.
pub fn validate(set: &TableSet) -> TblResult<()> {
    for t in &set.tables {
        if t.is_2d() {
            if t.x.len() != t.z.len() {
                return Err(TblError::DimensionMismatch {
                    table: t.name.clone(),
                    detail: "number of X points must equal number of Z points".to_string(),
                    expected: t.x.len(),
                    actual: t.z.len(),
                });
            }
        } else if t.x.len() * t.y.len() != t.z.len() {
            return Err(TblError::DimensionMismatch {
                table: t.name.clone(),
                detail: "number of X points times number of Y points must equal number of Z points"
                    .to_string(),
                expected: t.x.len() * t.y.len(),
                actual: t.z.len(),
            });
        }
    }
    for t in &set.tables_4d {
        if t.w.len() != t.refs.len() {
            return Err(TblError::DimensionMismatch {
                table: t.name.clone(),
                detail: "number of W points must equal number of S names".to_string(),
                expected: t.w.len(),
                actual: t.refs.len(),
            });
        }
    }
    Ok(())
}
