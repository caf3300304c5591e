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

//! Record builders and the top-level parse driver.
//!
//! The driver walks the input line by line looking for `$INPUT` (2-D/3-D)
//! and `$INPUTA` (4-D) record headers, tokenizes each record body with the
//! [`Scanner`](crate::lex::Scanner), and folds the tokens into immutable
//! records through a per-kind builder. Lines outside records are ignored,
//! so inputs may carry commentary between tables.

use crate::error::{TblError, TblResult};
use crate::lex::{ScanMode, Scanner, Token};
use crate::limits::Limits;
use crate::record::{Table2D3D, Table4D, TableSet};

/// Parses a complete table-definition input with default [`Limits`].
///
/// # Examples
///
/// ```
/// let input = "\
/// $INPUT TBL='CTAB'
/// X=1.0,2.0,3.0
/// Z=10.0,20.0,30.0
/// $
/// ";
/// let set = tblgen_core::parse(input).unwrap();
/// assert_eq!(set.tables.len(), 1);
/// assert!(set.tables[0].is_2d());
/// ```
pub fn parse(input: &str) -> TblResult<TableSet> {
    parse_with_limits(input, &Limits::default())
}

/// Parses a complete table-definition input under the given limits.
pub fn parse_with_limits(input: &str, limits: &Limits) -> TblResult<TableSet> {
    let mut set = TableSet::new();
    let mut lines = input.lines().enumerate();
    while let Some((idx, line)) = lines.next() {
        let line_no = idx + 1;
        let Some(header) = parse_header(line, line_no)? else {
            continue;
        };
        if header.name.len() > limits.max_name_len {
            return Err(TblError::NameTooLong {
                name: header.name,
                max: limits.max_name_len,
                line: line_no,
            });
        }
        match header.kind {
            RecordKind::TwoThreeD => {
                if set.tables.len() >= limits.max_tables {
                    return Err(TblError::TooManyTables {
                        max: limits.max_tables,
                        line: line_no,
                    });
                }
                let tokens = scan_record(&mut lines, ScanMode::TwoThreeD)?;
                let mut builder = TableBuilder::new(header.name, limits);
                for token in tokens {
                    builder.feed(token)?;
                }
                set.tables.push(builder.finish());
            }
            RecordKind::FourD => {
                if set.tables_4d.len() >= limits.max_tables {
                    return Err(TblError::TooManyTables {
                        max: limits.max_tables,
                        line: line_no,
                    });
                }
                let tokens = scan_record(&mut lines, ScanMode::FourD)?;
                let mut builder = Table4DBuilder::new(header.name, limits);
                for token in tokens {
                    builder.feed(token)?;
                }
                set.tables_4d.push(builder.finish());
            }
        }
    }
    Ok(set)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordKind {
    TwoThreeD,
    FourD,
}

struct RecordHeader {
    kind: RecordKind,
    name: String,
}

/// Recognizes a record header line.
///
/// Returns `Ok(None)` for lines that do not start a record. The name is
/// the text between the first pair of single quotes with surrounding
/// blanks trimmed; legacy inputs pad names with trailing spaces.
fn parse_header(line: &str, line_no: usize) -> TblResult<Option<RecordHeader>> {
    let kind = match line.split_whitespace().next() {
        Some("$INPUT") => RecordKind::TwoThreeD,
        Some("$INPUTA") => RecordKind::FourD,
        _ => return Ok(None),
    };
    let name = line
        .split('\'')
        .nth(1)
        .map(str::trim)
        .filter(|s| !s.is_empty());
    match name {
        Some(n) => Ok(Some(RecordHeader {
            kind,
            name: n.to_string(),
        })),
        None => Err(TblError::MissingTableName { line: line_no }),
    }
}

/// Tokenizes one record body, consuming lines up to the `$` terminator.
fn scan_record<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    mode: ScanMode,
) -> TblResult<Vec<Token>> {
    let mut scanner = Scanner::new(mode);
    for (idx, line) in lines {
        if scanner.feed_line(line, idx + 1)? {
            break;
        }
    }
    Ok(scanner.finish()?)
}

/// The field a 2-D/3-D record is currently assigning into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    X,
    Y,
    Z,
    ScaleX,
    OffsetX,
    ScaleY,
    OffsetY,
    ScaleZ,
    OffsetZ,
}

impl Field {
    fn from_keyword(kw: &str) -> Option<Self> {
        match kw {
            "X" => Some(Self::X),
            "Y" => Some(Self::Y),
            "Z" => Some(Self::Z),
            "SX" => Some(Self::ScaleX),
            "AX" => Some(Self::OffsetX),
            "SY" => Some(Self::ScaleY),
            "AY" => Some(Self::OffsetY),
            "SZ" => Some(Self::ScaleZ),
            "AZ" => Some(Self::OffsetZ),
            _ => None,
        }
    }
}

/// Builds one [`Table2D3D`] from a record token stream.
struct TableBuilder<'a> {
    table: Table2D3D,
    field: Option<Field>,
    limits: &'a Limits,
}

impl<'a> TableBuilder<'a> {
    fn new(name: String, limits: &'a Limits) -> Self {
        Self {
            table: Table2D3D::new(name),
            field: None,
            limits,
        }
    }

    fn feed(&mut self, token: Token) -> TblResult<()> {
        match token {
            Token::AxisKey(kw) => {
                self.field = Some(Field::from_keyword(&kw).ok_or_else(|| {
                    TblError::UnexpectedToken {
                        table: self.table.name.clone(),
                        message: format!("unknown axis keyword '{kw}'"),
                    }
                })?);
                Ok(())
            }
            Token::Number(v) => self.store(v),
            Token::QuotedIdent(_) => Err(TblError::UnexpectedToken {
                table: self.table.name.clone(),
                message: "quoted name in a 2-D/3-D record".to_string(),
            }),
            Token::End => Ok(()),
        }
    }

    fn store(&mut self, v: f32) -> TblResult<()> {
        match self.field {
            Some(Field::X) => {
                self.check_capacity(self.table.x.len(), 'X')?;
                self.table.x.push(v);
            }
            Some(Field::Y) => {
                self.check_capacity(self.table.y.len(), 'Y')?;
                self.table.y.push(v);
            }
            Some(Field::Z) => {
                self.check_capacity(self.table.z.len(), 'Z')?;
                self.table.z.push(v);
            }
            Some(Field::ScaleX) => self.table.scale_x = v,
            Some(Field::OffsetX) => self.table.offset_x = v,
            Some(Field::ScaleY) => self.table.scale_y = v,
            Some(Field::OffsetY) => self.table.offset_y = v,
            Some(Field::ScaleZ) => self.table.scale_z = v,
            Some(Field::OffsetZ) => self.table.offset_z = v,
            None => {
                return Err(TblError::UnexpectedToken {
                    table: self.table.name.clone(),
                    message: "numeric value before any axis selector".to_string(),
                })
            }
        }
        Ok(())
    }

    fn check_capacity(&self, len: usize, axis: char) -> TblResult<()> {
        if len >= self.limits.max_points {
            return Err(TblError::CapacityExceeded {
                axis,
                table: self.table.name.clone(),
                max: self.limits.max_points,
            });
        }
        Ok(())
    }

    fn finish(self) -> Table2D3D {
        self.table
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field4D {
    W,
    S,
}

/// Builds one [`Table4D`] from a record token stream.
struct Table4DBuilder<'a> {
    table: Table4D,
    field: Option<Field4D>,
    limits: &'a Limits,
}

impl<'a> Table4DBuilder<'a> {
    fn new(name: String, limits: &'a Limits) -> Self {
        Self {
            table: Table4D::new(name),
            field: None,
            limits,
        }
    }

    fn feed(&mut self, token: Token) -> TblResult<()> {
        match token {
            Token::AxisKey(kw) => {
                self.field = match kw.as_str() {
                    "W" => Some(Field4D::W),
                    "S" => Some(Field4D::S),
                    _ => {
                        return Err(TblError::UnexpectedToken {
                            table: self.table.name.clone(),
                            message: format!("unknown axis keyword '{kw}'"),
                        })
                    }
                };
                Ok(())
            }
            Token::Number(v) => match self.field {
                Some(Field4D::W) => {
                    if self.table.w.len() >= self.limits.max_points {
                        return Err(TblError::CapacityExceeded {
                            axis: 'W',
                            table: self.table.name.clone(),
                            max: self.limits.max_points,
                        });
                    }
                    self.table.w.push(v);
                    Ok(())
                }
                _ => Err(TblError::UnexpectedToken {
                    table: self.table.name.clone(),
                    message: "numeric value outside the W selector".to_string(),
                }),
            },
            Token::QuotedIdent(name) => match self.field {
                Some(Field4D::S) => {
                    if self.table.refs.len() >= self.limits.max_points {
                        return Err(TblError::CapacityExceeded {
                            axis: 'S',
                            table: self.table.name.clone(),
                            max: self.limits.max_points,
                        });
                    }
                    self.table.refs.push(name);
                    Ok(())
                }
                _ => Err(TblError::UnexpectedToken {
                    table: self.table.name.clone(),
                    message: "quoted name outside the S selector".to_string(),
                }),
            },
            Token::End => Ok(()),
        }
    }

    fn finish(self) -> Table4D {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_D: &str = "\
$INPUT TBL='CTAB'
X=1.0,2.0,3.0
Z=10.0,20.0,30.0
$
";

    // ==================== 2-D/3-D record tests ====================

    #[test]
    fn test_parse_2d_record() {
        let set = parse(TWO_D).unwrap();
        assert_eq!(set.tables.len(), 1);
        let t = &set.tables[0];
        assert_eq!(t.name, "CTAB");
        assert!(t.is_2d());
        assert_eq!(t.x, vec![1.0, 2.0, 3.0]);
        assert_eq!(t.z, vec![10.0, 20.0, 30.0]);
        assert_eq!(t.scale_x, 1.0);
        assert_eq!(t.offset_z, 0.0);
    }

    #[test]
    fn test_parse_3d_record_with_transforms() {
        let input = "\
$INPUT TBL='CMAP'
X=0.0,1.0
Y=0.0,1.0,2.0
Z=1,2,3,4,5,6
SX=2.0, AX=1.0
SZ=0.5
$
";
        let set = parse(input).unwrap();
        let t = &set.tables[0];
        assert!(!t.is_2d());
        assert_eq!(t.x.len(), 2);
        assert_eq!(t.y.len(), 3);
        assert_eq!(t.z.len(), 6);
        assert_eq!(t.scale_x, 2.0);
        assert_eq!(t.offset_x, 1.0);
        assert_eq!(t.scale_z, 0.5);
        assert_eq!(t.offset_y, 0.0);
    }

    #[test]
    fn test_name_trailing_blanks_trimmed() {
        let input = "$INPUT TBL='CTAB  '\nX=1\nZ=1\n$\n";
        let set = parse(input).unwrap();
        assert_eq!(set.tables[0].name, "CTAB");
    }

    #[test]
    fn test_lines_outside_records_ignored() {
        let input = format!("! legacy comment line\n\n{TWO_D}\ntrailing prose\n");
        let set = parse(&input).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let input = "\
$INPUT TBL='B_TAB'
X=1
Z=1
$
$INPUT TBL='A_TAB'
X=1
Z=1
$
";
        let set = parse(input).unwrap();
        assert_eq!(set.tables[0].name, "B_TAB");
        assert_eq!(set.tables[1].name, "A_TAB");
    }

    #[test]
    fn test_missing_table_name() {
        let err = parse("$INPUT TBL=\nX=1\n$\n").unwrap_err();
        assert!(matches!(err, TblError::MissingTableName { line: 1 }));
    }

    #[test]
    fn test_number_before_selector() {
        let err = parse("$INPUT TBL='CTAB'\n1.0,2.0\n$\n").unwrap_err();
        assert!(matches!(err, TblError::UnexpectedToken { .. }));
    }

    // ==================== 4-D record tests ====================

    #[test]
    fn test_parse_4d_record() {
        let input = "\
$INPUTA TBLA='FTAB'
W=0.5,1.5
S='CTAB_A','CTAB_B'
$
";
        let set = parse(input).unwrap();
        assert_eq!(set.tables_4d.len(), 1);
        let t = &set.tables_4d[0];
        assert_eq!(t.name, "FTAB");
        assert_eq!(t.w, vec![0.5, 1.5]);
        assert_eq!(t.refs, vec!["CTAB_A".to_string(), "CTAB_B".to_string()]);
    }

    #[test]
    fn test_4d_number_under_s_selector() {
        let input = "$INPUTA TBLA='FTAB'\nS=1.0\n$\n";
        let err = parse(input).unwrap_err();
        assert!(matches!(err, TblError::UnexpectedToken { .. }));
    }

    // ==================== Limit tests ====================

    #[test]
    fn test_capacity_boundary() {
        let limits = Limits {
            max_points: 3,
            ..Limits::default()
        };
        // Exactly at the maximum: accepted.
        assert!(parse_with_limits(TWO_D, &limits).is_ok());

        let over = "$INPUT TBL='CTAB'\nX=1,2,3,4\nZ=1,2,3,4\n$\n";
        let err = parse_with_limits(over, &limits).unwrap_err();
        match err {
            TblError::CapacityExceeded { axis, table, max } => {
                assert_eq!(axis, 'X');
                assert_eq!(table, "CTAB");
                assert_eq!(max, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_too_many_tables() {
        let limits = Limits {
            max_tables: 1,
            ..Limits::default()
        };
        let input = format!("{TWO_D}{TWO_D}");
        let err = parse_with_limits(&input, &limits).unwrap_err();
        assert!(matches!(err, TblError::TooManyTables { max: 1, .. }));
    }

    #[test]
    fn test_name_too_long() {
        let limits = Limits {
            max_name_len: 4,
            ..Limits::default()
        };
        let input = "$INPUT TBL='TOOLONG'\nX=1\nZ=1\n$\n";
        let err = parse_with_limits(input, &limits).unwrap_err();
        assert!(matches!(err, TblError::NameTooLong { .. }));
    }

    #[test]
    fn test_max_tables_counted_per_kind() {
        let limits = Limits {
            max_tables: 1,
            ..Limits::default()
        };
        let input = format!("{TWO_D}$INPUTA TBLA='FTAB'\nW=1\nS='CTAB'\n$\n");
        assert!(parse_with_limits(&input, &limits).is_ok());
    }
}
