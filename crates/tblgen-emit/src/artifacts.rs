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

//! Rendering of the three C artifacts.
//!
//! Everything here is pure string building; file I/O lives in
//! [`writer`](crate::writer). The emitted syntax is fixed by the
//! downstream runtime: a 2-D table becomes one array of `{x,z}` pairs, a
//! 3-D table becomes three parallel `NAME_X/_Y/_Z` arrays, and a 4-D
//! table becomes an array of `{w, &ref_X, &ref_Y, &ref_Z}` tuples. Every
//! array is sentinel-prefixed with its own real element count.

use tblgen_core::{Table2D3D, Table4D, TableSet};

use crate::error::{EmitError, EmitResult};

/// Configuration for artifact rendering.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Require every 4-D reference to name a defined 3-D table
    /// (default: `true`). Disabling restores the legacy behavior of
    /// emitting dangling `&NAME_X` references as-is.
    pub strict_refs: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { strict_refs: true }
    }
}

/// Renders the definitions artifact (`tables_def.h`).
///
/// All 2-D/3-D tables are emitted first, in declaration order, then all
/// 4-D tables: their entries take the address of the 3-D arrays. Axis
/// values are transformed as `raw * scale + offset` during rendering.
///
/// # Errors
///
/// With [`EmitOptions::strict_refs`], fails when a 4-D entry names an
/// undefined table or a 2-D table.
pub fn render_definitions(set: &TableSet, options: &EmitOptions) -> EmitResult<String> {
    if options.strict_refs {
        check_references(set)?;
    }
    let mut out = String::new();
    out.push_str("#include \"be_tbls.h\"\n");
    out.push_str("#include \"AS_GLOBALS.h\"\n");
    for t in &set.tables {
        if t.is_2d() {
            render_2d(&mut out, t);
        } else {
            render_3d(&mut out, t);
        }
    }
    for t in &set.tables_4d {
        render_4d(&mut out, t);
    }
    Ok(out)
}

/// Renders the declarations artifact (`tables.h`).
///
/// Extern declarations mirroring the definitions, guarded by an
/// include-once marker. The 2-D/3-D arrays are deliberately not declared
/// `const` here; generated C modules carry their own non-const externs.
pub fn render_declarations(set: &TableSet) -> String {
    let mut out = String::new();
    out.push_str("#ifndef _TABLES_H\n");
    out.push_str("#define _TABLES_H\n");
    out.push_str("#include \"be_tbls.h\"\n");
    for t in &set.tables {
        if t.is_2d() {
            out.push_str(&format!(
                "extern FLT_univariate_table_point {}[{}];\n",
                t.name,
                t.x.len() + 1
            ));
        } else {
            out.push_str(&format!("extern float32 {}_X[{}];\n", t.name, t.x.len() + 1));
            out.push_str(&format!("extern float32 {}_Y[{}];\n", t.name, t.y.len() + 1));
            out.push_str(&format!("extern float32 {}_Z[{}];\n", t.name, t.z.len() + 1));
        }
    }
    for t in &set.tables_4d {
        out.push_str(&format!(
            "extern const FLT_4D_table_point {}[{}];\n",
            t.name,
            t.w.len() + 1
        ));
    }
    out.push_str("#endif\n");
    out
}

/// Renders the auxiliary pointer artifact (`general_ram.tbl`).
///
/// Three extern index pointers per 4-D table, named after the table with
/// its second character forced to `V`. The runtime indexing scheme keys
/// its RAM slots off these names.
pub fn render_ram_pointers(set: &TableSet) -> String {
    let mut out = String::new();
    for t in &set.tables_4d {
        let v = v_name(&t.name);
        out.push_str(&format!("extern int16 {v}WPTR;\n"));
        out.push_str(&format!("extern int16 {v}XPTR;\n"));
        out.push_str(&format!("extern int16 {v}YPTR;\n"));
    }
    out
}

fn check_references(set: &TableSet) -> EmitResult<()> {
    let index = set.name_index();
    for t in &set.tables_4d {
        for r in &t.refs {
            match index.get(r.as_str()) {
                None => {
                    return Err(EmitError::UnresolvedReference {
                        table: t.name.clone(),
                        name: r.clone(),
                    })
                }
                Some(target) if target.is_2d() => {
                    return Err(EmitError::ReferenceNotThreeD {
                        table: t.name.clone(),
                        name: r.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

fn render_2d(out: &mut String, t: &Table2D3D) {
    out.push_str(&format!(
        "\nconst FLT_univariate_table_point {}[{}] = {{\n",
        t.name,
        t.x.len() + 1
    ));
    out.push_str(&format!("{{{:.6},0.0}},\n", t.x.len() as f32));
    for (x, z) in t.x.iter().zip(&t.z) {
        out.push_str(&format!(
            "{{{:.6},{:.8}}},\n",
            x * t.scale_x + t.offset_x,
            z * t.scale_z + t.offset_z
        ));
    }
    out.push_str("};\n");
}

fn render_3d(out: &mut String, t: &Table2D3D) {
    render_axis(out, &t.name, "X", &t.x, t.scale_x, t.offset_x);
    render_axis(out, &t.name, "Y", &t.y, t.scale_y, t.offset_y);
    render_axis(out, &t.name, "Z", &t.z, t.scale_z, t.offset_z);
}

fn render_axis(out: &mut String, name: &str, axis: &str, data: &[f32], scale: f32, offset: f32) {
    out.push_str(&format!(
        "\nconst float32 {}_{}[{}] = {{\n",
        name,
        axis,
        data.len() + 1
    ));
    out.push_str(&format!("{:.6},\n", data.len() as f32));
    for v in data {
        out.push_str(&format!("{:.8},\n", v * scale + offset));
    }
    out.push_str("};\n");
}

fn render_4d(out: &mut String, t: &Table4D) {
    let v = v_name(&t.name);
    out.push_str(&format!(
        "const FLT_4D_table_point {}[{}] = {{\n",
        t.name,
        t.w.len() + 1
    ));
    out.push_str(&format!(
        "  {{ {:.6}, &{v}WPTR, &{v}XPTR, &{v}YPTR }},\n",
        t.w.len() as f32
    ));
    for (w, r) in t.w.iter().zip(&t.refs) {
        out.push_str(&format!("  {{ {w:.6}, &{r}_X, &{r}_Y, &{r}_Z }},\n"));
    }
    out.push_str("};\n");
}

/// Derives the RAM pointer prefix: the table name with its second
/// character replaced by `V` (appended for one-character names).
fn v_name(name: &str) -> String {
    let mut chars: Vec<char> = name.chars().collect();
    if chars.len() >= 2 {
        chars[1] = 'V';
    } else {
        chars.push('V');
    }
    chars.into_iter().collect()
}
