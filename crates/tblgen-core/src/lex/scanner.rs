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

//! Character-level finite-state tokenizer for table records.
//!
//! A record body is a stream of `KEY=value,value,...` assignments terminated
//! by `$`. The scanner is fed one line at a time and classifies characters
//! into axis keywords, numeric literals and (in 4-D mode) quoted table
//! names. Tokens may span lines: a keyword buffer survives a line break,
//! and a value list may continue on the next line.
//!
//! # Examples
//!
//! ```
//! use tblgen_core::lex::{ScanMode, Scanner, Token};
//!
//! let mut scanner = Scanner::new(ScanMode::TwoThreeD);
//! assert!(!scanner.feed_line("X=1.0,2.0", 1).unwrap());
//! assert!(scanner.feed_line("$", 2).unwrap());
//! let tokens = scanner.finish().unwrap();
//! assert_eq!(tokens[0], Token::AxisKey("X".to_string()));
//! assert_eq!(tokens[1], Token::Number(1.0));
//! ```

use crate::lex::error::{LexError, LexResult};
use crate::lex::span::SourcePos;

/// A classified token produced by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// An axis keyword resolved at `=` (e.g. `X`, `SZ`, `W`).
    AxisKey(String),
    /// A numeric literal.
    Number(f32),
    /// A single-quoted table name (4-D mode only).
    QuotedIdent(String),
    /// The `$` record terminator.
    End,
}

/// Which keyword alphabet the scanner accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// 2-D/3-D records: keywords `X,Y,Z,SX,AX,SY,AY,SZ,AZ`.
    TwoThreeD,
    /// 4-D records: keywords `W,S`, with quoted names under `S`.
    FourD,
}

/// Scanner state, one per token class being accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Between tokens.
    Seeking,
    /// Accumulating keyword letters, waiting for `=`.
    Keyword,
    /// Accumulating numeric text, waiting for a delimiter.
    Number,
    /// Inside a single-quoted table name.
    QuotedName,
}

/// The record tokenizer.
///
/// Feed lines with [`feed_line`](Scanner::feed_line) until it reports the
/// `$` terminator, then take the tokens with [`finish`](Scanner::finish).
#[derive(Debug)]
pub struct Scanner {
    mode: ScanMode,
    state: ScanState,
    buf: String,
    tokens: Vec<Token>,
    /// Quotes are only legal in 4-D mode while the `S` selector is active.
    name_ok: bool,
    done: bool,
    pos: SourcePos,
}

impl Scanner {
    /// Creates a scanner for one record in the given mode.
    pub fn new(mode: ScanMode) -> Self {
        Self {
            mode,
            state: ScanState::Seeking,
            buf: String::new(),
            tokens: Vec::new(),
            name_ok: false,
            done: false,
            pos: SourcePos::start(),
        }
    }

    /// Processes one input line.
    ///
    /// Returns `true` once the `$` record terminator has been consumed;
    /// the remainder of that line is discarded. The end of a line delimits
    /// a pending number but keeps a keyword buffer alive, so assignments
    /// may span lines.
    pub fn feed_line(&mut self, line: &str, line_no: usize) -> LexResult<bool> {
        if self.done {
            return Ok(true);
        }
        let mut col = 0;
        for ch in line.chars() {
            col += 1;
            self.pos = SourcePos::new(line_no, col);
            if self.step(ch)? {
                self.done = true;
                return Ok(true);
            }
        }
        self.pos = SourcePos::new(line_no, col + 1);
        if self.state == ScanState::Number {
            self.flush_number()?;
        }
        Ok(false)
    }

    /// Consumes the scanner, yielding the token stream for the record.
    ///
    /// Fails if the input ended before the `$` terminator was seen.
    pub fn finish(self) -> LexResult<Vec<Token>> {
        if !self.done {
            if self.state == ScanState::QuotedName {
                return Err(LexError::UnclosedQuote { pos: self.pos });
            }
            return Err(LexError::UnexpectedEof { pos: self.pos });
        }
        Ok(self.tokens)
    }

    /// The position of the last character examined.
    pub fn pos(&self) -> SourcePos {
        self.pos
    }

    /// Transition on one character. Returns `true` on the record terminator.
    fn step(&mut self, ch: char) -> LexResult<bool> {
        if self.state == ScanState::QuotedName {
            if ch == '\'' {
                let name = std::mem::take(&mut self.buf);
                self.tokens.push(Token::QuotedIdent(name));
                self.state = ScanState::Seeking;
            } else if ch.is_ascii_alphanumeric() || ch == '_' {
                self.buf.push(ch);
            } else {
                return Err(LexError::UnexpectedCharacter { ch, pos: self.pos });
            }
            return Ok(false);
        }

        if ch == '\'' && self.mode == ScanMode::FourD && self.name_ok {
            if self.state == ScanState::Number {
                self.flush_number()?;
            }
            self.buf.clear();
            self.state = ScanState::QuotedName;
            return Ok(false);
        }

        if is_number_char(ch) {
            // A digit inside a keyword buffer joins it and fails keyword
            // resolution at `=`; everything else starts or extends a number.
            self.buf.push(ch);
            if self.state != ScanState::Keyword {
                self.state = ScanState::Number;
            }
            return Ok(false);
        }

        if self.is_keyword_char(ch) {
            // A keyword letter inside a numeric buffer joins it and fails
            // the float parse when the number is delimited.
            self.buf.push(ch);
            if self.state == ScanState::Seeking {
                self.state = ScanState::Keyword;
            }
            return Ok(false);
        }

        match ch {
            '=' => {
                self.resolve_keyword()?;
                Ok(false)
            }
            ' ' | '\t' | ',' => {
                // Blanks and commas delimit numbers; a keyword buffer
                // tolerates blanks before its `=`.
                if self.state == ScanState::Number {
                    self.flush_number()?;
                }
                Ok(false)
            }
            '$' => {
                if self.state == ScanState::Number {
                    self.flush_number()?;
                }
                self.tokens.push(Token::End);
                Ok(true)
            }
            _ => Err(LexError::UnexpectedCharacter { ch, pos: self.pos }),
        }
    }

    fn is_keyword_char(&self, ch: char) -> bool {
        match self.mode {
            ScanMode::TwoThreeD => matches!(ch, 'X' | 'Y' | 'Z' | 'A' | 'S'),
            ScanMode::FourD => matches!(ch, 'W' | 'S'),
        }
    }

    fn resolve_keyword(&mut self) -> LexResult<()> {
        let kw = std::mem::take(&mut self.buf);
        self.state = ScanState::Seeking;
        let known = match self.mode {
            ScanMode::TwoThreeD => matches!(
                kw.as_str(),
                "X" | "Y" | "Z" | "SX" | "AX" | "SY" | "AY" | "SZ" | "AZ"
            ),
            ScanMode::FourD => matches!(kw.as_str(), "W" | "S"),
        };
        if !known {
            return Err(LexError::UnknownKeyword {
                keyword: kw,
                pos: self.pos,
            });
        }
        self.name_ok = self.mode == ScanMode::FourD && kw == "S";
        self.tokens.push(Token::AxisKey(kw));
        Ok(())
    }

    fn flush_number(&mut self) -> LexResult<()> {
        let text = std::mem::take(&mut self.buf);
        self.state = ScanState::Seeking;
        match text.parse::<f32>() {
            Ok(v) => {
                self.tokens.push(Token::Number(v));
                Ok(())
            }
            Err(_) => Err(LexError::InvalidNumber {
                text,
                pos: self.pos,
            }),
        }
    }
}

fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'E' | 'e')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(mode: ScanMode, lines: &[&str]) -> LexResult<Vec<Token>> {
        let mut scanner = Scanner::new(mode);
        for (i, line) in lines.iter().enumerate() {
            if scanner.feed_line(line, i + 1)? {
                break;
            }
        }
        scanner.finish()
    }

    fn key(s: &str) -> Token {
        Token::AxisKey(s.to_string())
    }

    // ==================== 2-D/3-D mode tests ====================

    #[test]
    fn test_simple_assignment() {
        let tokens = scan(ScanMode::TwoThreeD, &["X=1.0,2.0,3.0", "$"]).unwrap();
        assert_eq!(
            tokens,
            vec![
                key("X"),
                Token::Number(1.0),
                Token::Number(2.0),
                Token::Number(3.0),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_values_span_lines() {
        let tokens = scan(ScanMode::TwoThreeD, &["Z=10,20,", "30,40", "$"]).unwrap();
        let numbers: Vec<f32> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Number(v) => Some(*v),
                _ => None,
            })
            .collect();
        assert_eq!(numbers, vec![10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_two_letter_keywords() {
        let tokens =
            scan(ScanMode::TwoThreeD, &["SX=2.0, AX=-1.0, SZ=0.5, AZ=0.0", "$"]).unwrap();
        assert_eq!(
            tokens,
            vec![
                key("SX"),
                Token::Number(2.0),
                key("AX"),
                Token::Number(-1.0),
                key("SZ"),
                Token::Number(0.5),
                key("AZ"),
                Token::Number(0.0),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_blanks_between_keyword_and_equals() {
        let tokens = scan(ScanMode::TwoThreeD, &["SY = 3.0", "$"]).unwrap();
        assert_eq!(tokens, vec![key("SY"), Token::Number(3.0), Token::End]);
    }

    #[test]
    fn test_exponent_numbers() {
        let tokens = scan(ScanMode::TwoThreeD, &["X=1.5E+3,-2.5e-2", "$"]).unwrap();
        assert_eq!(
            tokens,
            vec![key("X"), Token::Number(1500.0), Token::Number(-0.025), Token::End]
        );
    }

    #[test]
    fn test_number_terminated_by_dollar() {
        let tokens = scan(ScanMode::TwoThreeD, &["X=7$"]).unwrap();
        assert_eq!(tokens, vec![key("X"), Token::Number(7.0), Token::End]);
    }

    #[test]
    fn test_unknown_keyword_is_fatal() {
        let err = scan(ScanMode::TwoThreeD, &["XY=1.0", "$"]).unwrap_err();
        assert!(matches!(err, LexError::UnknownKeyword { ref keyword, .. } if keyword == "XY"));
    }

    #[test]
    fn test_unexpected_character_reports_position() {
        let err = scan(ScanMode::TwoThreeD, &["X=1.0", "  #"]).unwrap_err();
        match err {
            LexError::UnexpectedCharacter { ch, pos } => {
                assert_eq!(ch, '#');
                assert_eq!(pos.line(), 2);
                assert_eq!(pos.column(), 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_number_is_fatal() {
        let err = scan(ScanMode::TwoThreeD, &["X=1.0.2", "$"]).unwrap_err();
        assert!(matches!(err, LexError::InvalidNumber { ref text, .. } if text == "1.0.2"));
    }

    #[test]
    fn test_eof_inside_record() {
        let err = scan(ScanMode::TwoThreeD, &["X=1.0,2.0"]).unwrap_err();
        assert!(matches!(err, LexError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_quote_rejected_in_2d3d_mode() {
        let err = scan(ScanMode::TwoThreeD, &["X='NAME'", "$"]).unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { ch: '\'', .. }));
    }

    // ==================== 4-D mode tests ====================

    #[test]
    fn test_4d_w_and_s_assignments() {
        let tokens = scan(
            ScanMode::FourD,
            &["W=0.5,1.5", "S='CTAB_A','CTAB_B'", "$"],
        )
        .unwrap();
        assert_eq!(
            tokens,
            vec![
                key("W"),
                Token::Number(0.5),
                Token::Number(1.5),
                key("S"),
                Token::QuotedIdent("CTAB_A".to_string()),
                Token::QuotedIdent("CTAB_B".to_string()),
                Token::End,
            ]
        );
    }

    #[test]
    fn test_quoted_name_requires_s_selector() {
        let err = scan(ScanMode::FourD, &["W='CTAB_A'", "$"]).unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { ch: '\'', .. }));
    }

    #[test]
    fn test_4d_rejects_axis_keywords() {
        // 'X' is not in the 4-D keyword alphabet
        let err = scan(ScanMode::FourD, &["X=1.0", "$"]).unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { ch: 'X', .. }));
    }

    #[test]
    fn test_unclosed_quote() {
        let err = scan(ScanMode::FourD, &["S='CTAB"]).unwrap_err();
        assert!(matches!(err, LexError::UnclosedQuote { .. }));
    }

    #[test]
    fn test_feed_after_end_is_inert() {
        let mut scanner = Scanner::new(ScanMode::TwoThreeD);
        assert!(scanner.feed_line("X=1$", 1).unwrap());
        assert!(scanner.feed_line("garbage that would error", 2).unwrap());
        let tokens = scanner.finish().unwrap();
        assert_eq!(tokens.last(), Some(&Token::End));
    }
}
