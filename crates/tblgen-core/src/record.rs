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

//! The parsed table data model.

use std::collections::HashMap;

/// A 2-D or 3-D lookup table record.
///
/// A record with an empty `y` axis is a 2-D table (one breakpoint axis,
/// paired output); a non-empty `y` makes it a 3-D table (two breakpoint
/// axes, parallel arrays). Each axis carries a scale/offset pair applied
/// at emission as `raw * scale + offset`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table2D3D {
    pub name: String,
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
    pub scale_x: f32,
    pub offset_x: f32,
    pub scale_y: f32,
    pub offset_y: f32,
    pub scale_z: f32,
    pub offset_z: f32,
}

impl Table2D3D {
    /// Creates an empty record with identity transforms (scale 1, offset 0).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
            scale_x: 1.0,
            offset_x: 0.0,
            scale_y: 1.0,
            offset_y: 0.0,
            scale_z: 1.0,
            offset_z: 0.0,
        }
    }

    /// Returns `true` if this record is 2-D (no `y` axis).
    #[inline]
    pub fn is_2d(&self) -> bool {
        self.y.is_empty()
    }
}

/// A 4-D table-of-tables record.
///
/// Each `w` breakpoint pairs with the name of a 3-D table in `refs`.
/// References are plain strings, resolved against the containing
/// [`TableSet`] only at emission time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table4D {
    pub name: String,
    pub w: Vec<f32>,
    pub refs: Vec<String>,
}

impl Table4D {
    /// Creates an empty 4-D record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            w: Vec::new(),
            refs: Vec::new(),
        }
    }
}

/// All records parsed from one input, in declaration order.
///
/// Insertion order is emission order; downstream build steps depend on
/// the declaration order of the extern files.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSet {
    pub tables: Vec<Table2D3D>,
    pub tables_4d: Vec<Table4D>,
}

impl TableSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records of both kinds.
    pub fn len(&self) -> usize {
        self.tables.len() + self.tables_4d.len()
    }

    /// Returns `true` if no records were parsed.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.tables_4d.is_empty()
    }

    /// Builds a name-to-record index over the 2-D/3-D tables.
    ///
    /// Used by the emitter to resolve 4-D references. Built once per
    /// emission; later records shadow earlier ones with the same name.
    pub fn name_index(&self) -> HashMap<&str, &Table2D3D> {
        self.tables
            .iter()
            .map(|t| (t.name.as_str(), t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_defaults() {
        let t = Table2D3D::new("CTAB");
        assert_eq!(t.name, "CTAB");
        assert!(t.x.is_empty());
        assert_eq!(t.scale_x, 1.0);
        assert_eq!(t.offset_x, 0.0);
        assert_eq!(t.scale_z, 1.0);
        assert_eq!(t.offset_z, 0.0);
    }

    #[test]
    fn test_is_2d() {
        let mut t = Table2D3D::new("CTAB");
        assert!(t.is_2d());
        t.y.push(1.0);
        assert!(!t.is_2d());
    }

    #[test]
    fn test_set_len_and_order() {
        let mut set = TableSet::new();
        assert!(set.is_empty());
        set.tables.push(Table2D3D::new("B"));
        set.tables.push(Table2D3D::new("A"));
        set.tables_4d.push(Table4D::new("Q"));
        assert_eq!(set.len(), 3);
        assert_eq!(set.tables[0].name, "B");
        assert_eq!(set.tables[1].name, "A");
    }

    #[test]
    fn test_name_index() {
        let mut set = TableSet::new();
        set.tables.push(Table2D3D::new("CTAB_A"));
        set.tables.push(Table2D3D::new("CTAB_B"));
        let index = set.name_index();
        assert!(index.contains_key("CTAB_A"));
        assert!(index.contains_key("CTAB_B"));
        assert!(!index.contains_key("CTAB_C"));
    }
}
