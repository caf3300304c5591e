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

//! Command-line interface for the NAMELIST table translator.

use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use tblgen_core::{parse_with_limits, validate, Limits};
use tblgen_emit::{write_artifacts, EmitOptions};

/// Default maximum input file size (64 MB).
///
/// Can be overridden via the `TBLGEN_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Translate FORTRAN NAMELIST lookup-table definitions to C sources.
///
/// Reads one table-definition file and writes three artifacts with fixed
/// conventional names: `tables_def.h` (constant initializers), `tables.h`
/// (extern declarations) and `general_ram.tbl` (4-D RAM pointer externs).
/// On any error no artifact is left behind.
#[derive(Parser)]
#[command(
    name = "tblgen",
    version,
    about = "FORTRAN NAMELIST lookup-table to C translator"
)]
pub struct Cli {
    /// Input table-definition file
    #[arg(value_name = "FILE")]
    pub input: String,

    /// Directory the three artifacts are written into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Emit dangling 4-D references as-is instead of failing
    #[arg(long)]
    pub allow_unresolved: bool,

    /// Maximum points per coordinate array
    #[arg(long, value_name = "N")]
    pub max_points: Option<usize>,

    /// Maximum number of tables per input
    #[arg(long, value_name = "N")]
    pub max_tables: Option<usize>,
}

/// Runs one translation: parse, validate, emit.
pub fn run(cli: &Cli) -> Result<(), String> {
    let content = read_file(&cli.input)?;

    let mut limits = Limits::default();
    if let Some(n) = cli.max_points {
        limits.max_points = n;
    }
    if let Some(n) = cli.max_tables {
        limits.max_tables = n;
    }

    let set = parse_with_limits(&content, &limits).map_err(|e| e.to_string())?;
    validate(&set).map_err(|e| e.to_string())?;

    let options = EmitOptions {
        strict_refs: !cli.allow_unresolved,
    };
    let written = write_artifacts(&set, &cli.out_dir, &options).map_err(|e| e.to_string())?;

    println!("{} {}", "✓".green().bold(), cli.input);
    println!("  2-D/3-D tables: {}", set.tables.len());
    println!("  4-D tables: {}", set.tables_4d.len());
    println!("  Wrote: {}", written.definitions.display());
    println!("  Wrote: {}", written.declarations.display());
    println!("  Wrote: {}", written.ram_pointers.display());
    Ok(())
}

fn get_max_file_size() -> u64 {
    std::env::var("TBLGEN_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Reads the input file with a size check before allocation.
pub fn read_file(path: &str) -> Result<String, String> {
    let metadata = fs::metadata(path)
        .map_err(|e| format!("Failed to get metadata for '{}': {}", path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(format!(
            "File '{}' is too large ({} bytes). Maximum allowed size is {} bytes.\n\
             To process larger files, set TBLGEN_MAX_FILE_SIZE (in bytes).",
            path,
            metadata.len(),
            max_file_size
        ));
    }

    fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))
}
