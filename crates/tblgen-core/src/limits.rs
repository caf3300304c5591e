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

//! Capacity limits for table parsing.

/// Configurable parsing limits.
///
/// The defaults match the fixed-capacity ceilings of the legacy tool, but
/// violations are typed errors instead of silent buffer overruns.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum points per coordinate array (default: 10,000).
    pub max_points: usize,
    /// Maximum number of table records per input, counted separately for
    /// 2-D/3-D and 4-D records (default: 2,000).
    pub max_tables: usize,
    /// Maximum table name length in bytes (default: 31).
    pub max_name_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_points: 10_000,
            max_tables: 2_000,
            max_name_len: 31,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_points: usize::MAX,
            max_tables: usize::MAX,
            max_name_len: usize::MAX,
        }
    }
}
