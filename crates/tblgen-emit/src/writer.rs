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

//! Writing the three artifacts as one atomic unit.
//!
//! Rendering happens entirely in memory before the first file is opened,
//! and a drop guard removes every already-written file if a later write
//! fails. A downstream build system therefore never sees a stale or
//! truncated artifact.

use std::fs;
use std::path::{Path, PathBuf};

use tblgen_core::TableSet;

use crate::artifacts::{render_declarations, render_definitions, render_ram_pointers, EmitOptions};
use crate::error::{EmitError, EmitResult};

/// Conventional name of the definitions artifact.
pub const DEFINITIONS_FILE: &str = "tables_def.h";
/// Conventional name of the extern-declarations artifact.
pub const DECLARATIONS_FILE: &str = "tables.h";
/// Conventional name of the RAM pointer-declarations artifact.
pub const RAM_POINTERS_FILE: &str = "general_ram.tbl";

/// Paths of the artifacts produced by [`write_artifacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifacts {
    pub definitions: PathBuf,
    pub declarations: PathBuf,
    pub ram_pointers: PathBuf,
}

/// Renders and writes all three artifacts into `out_dir`.
///
/// # Errors
///
/// Fails on an unresolved 4-D reference (under
/// [`EmitOptions::strict_refs`]) or on any write error. On failure no
/// artifact remains on disk.
pub fn write_artifacts(
    set: &TableSet,
    out_dir: &Path,
    options: &EmitOptions,
) -> EmitResult<WrittenArtifacts> {
    let definitions = render_definitions(set, options)?;
    let declarations = render_declarations(set);
    let ram_pointers = render_ram_pointers(set);

    let paths = WrittenArtifacts {
        definitions: out_dir.join(DEFINITIONS_FILE),
        declarations: out_dir.join(DECLARATIONS_FILE),
        ram_pointers: out_dir.join(RAM_POINTERS_FILE),
    };

    let mut guard = OutputGuard::default();
    guard.write(&paths.definitions, &definitions)?;
    guard.write(&paths.declarations, &declarations)?;
    guard.write(&paths.ram_pointers, &ram_pointers)?;
    guard.commit();
    Ok(paths)
}

/// Removes every written file on drop unless committed.
#[derive(Default)]
struct OutputGuard {
    written: Vec<PathBuf>,
    committed: bool,
}

impl OutputGuard {
    fn write(&mut self, path: &Path, content: &str) -> EmitResult<()> {
        fs::write(path, content).map_err(|source| EmitError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.written.push(path.to_path_buf());
        Ok(())
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for OutputGuard {
    fn drop(&mut self) {
        if !self.committed {
            for path in &self.written {
                let _ = fs::remove_file(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tblgen_core::{Table2D3D, Table4D};

    fn sample_set() -> TableSet {
        let mut t2 = Table2D3D::new("TBLA");
        t2.x = vec![1.0, 2.0];
        t2.z = vec![10.0, 20.0];
        let mut t3 = Table2D3D::new("CMAP_A");
        t3.x = vec![0.0, 1.0];
        t3.y = vec![0.0, 1.0];
        t3.z = vec![1.0, 2.0, 3.0, 4.0];
        let mut t4 = Table4D::new("FTAB");
        t4.w = vec![1.0];
        t4.refs = vec!["CMAP_A".to_string()];
        TableSet {
            tables: vec![t2, t3],
            tables_4d: vec![t4],
        }
    }

    #[test]
    fn test_write_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let written =
            write_artifacts(&sample_set(), dir.path(), &EmitOptions::default()).unwrap();
        assert!(written.definitions.exists());
        assert!(written.declarations.exists());
        assert!(written.ram_pointers.exists());
        let defs = fs::read_to_string(&written.definitions).unwrap();
        assert!(defs.starts_with("#include \"be_tbls.h\"\n"));
    }

    #[test]
    fn test_render_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut set = sample_set();
        set.tables_4d[0].refs = vec!["MISSING".to_string()];
        let err = write_artifacts(&set, dir.path(), &EmitOptions::default()).unwrap_err();
        assert!(matches!(err, EmitError::UnresolvedReference { .. }));
        assert!(!dir.path().join(DEFINITIONS_FILE).exists());
        assert!(!dir.path().join(DECLARATIONS_FILE).exists());
        assert!(!dir.path().join(RAM_POINTERS_FILE).exists());
    }

    #[test]
    fn test_write_failure_removes_earlier_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        // A directory squatting on the RAM pointer file name makes the
        // third write fail after the first two succeeded.
        fs::create_dir(dir.path().join(RAM_POINTERS_FILE)).unwrap();
        let err = write_artifacts(&sample_set(), dir.path(), &EmitOptions::default()).unwrap_err();
        assert!(matches!(err, EmitError::Io { .. }));
        assert!(!dir.path().join(DEFINITIONS_FILE).exists());
        assert!(!dir.path().join(DECLARATIONS_FILE).exists());
    }

    #[test]
    fn test_missing_out_dir_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_dir");
        let err = write_artifacts(&sample_set(), &missing, &EmitOptions::default()).unwrap_err();
        assert!(matches!(err, EmitError::Io { .. }));
    }
}
