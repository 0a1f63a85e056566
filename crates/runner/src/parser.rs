//! Puzzle text parser.
//!
//! The input holds a catalog of present drawings followed by one line per
//! space:
//!
//! ```text
//! 0:
//! ###
//! ##.
//! ##.
//!
//! 1:
//! ...
//!
//! 12x5: 1 0 1 0 2 2
//! ```
//!
//! Each present block starts with its index and a colon, then one to three
//! rows of `#` (occupied) and `.` (free). A space line gives the width and
//! height, then one count per present.

use polypack_core::Error as CoreError;
use polypack_d2::{Present, Space, WINDOW};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when parsing a puzzle.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid puzzle: {0}")]
    Core(#[from] CoreError),

    #[error("line {line}: present {index}: {source}")]
    InvalidPresent {
        line: usize,
        index: usize,
        #[source]
        source: CoreError,
    },

    #[error("line {line}: expected present {expected}, found {found}")]
    UnexpectedIndex {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: expected {expected} counts, found {found}")]
    CountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

impl ParseError {
    fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}

/// A parsed puzzle: the present catalog and the spaces to test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Puzzle {
    pub presents: Vec<Present>,
    pub spaces: Vec<Space>,
}

impl Puzzle {
    /// Total number of unit placements requested across all spaces.
    pub fn unit_count(&self) -> usize {
        self.spaces.iter().map(Space::unit_count).sum()
    }
}

/// Parser for the puzzle text format.
#[derive(Debug, Default)]
pub struct PuzzleParser;

/// A present block that is still collecting rows.
struct PendingPresent {
    line: usize,
    index: usize,
    rows: Vec<String>,
}

impl PuzzleParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a puzzle from a file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Puzzle, ParseError> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses a puzzle from a string.
    pub fn parse_str(&self, text: &str) -> Result<Puzzle, ParseError> {
        let mut puzzle = Puzzle::default();
        let mut pending: Option<PendingPresent> = None;

        for (n, raw) in text.lines().enumerate() {
            let line_no = n + 1;
            let line = raw.trim();

            if line.is_empty() {
                Self::finish_present(&mut puzzle, pending.take())?;
                continue;
            }

            if let Some((head, tail)) = line.split_once(':') {
                let head = head.trim();
                if head.contains('x') {
                    Self::finish_present(&mut puzzle, pending.take())?;
                    let space = self.parse_space(line_no, head, tail, puzzle.presents.len())?;
                    puzzle.spaces.push(space);
                    continue;
                }

                if !tail.trim().is_empty() {
                    return Err(ParseError::syntax(
                        line_no,
                        format!("unexpected text after present header: '{}'", tail.trim()),
                    ));
                }
                if !puzzle.spaces.is_empty() {
                    return Err(ParseError::syntax(
                        line_no,
                        "present header after the first space line",
                    ));
                }

                Self::finish_present(&mut puzzle, pending.take())?;
                let index: usize = head.parse().map_err(|_| {
                    ParseError::syntax(line_no, format!("invalid present index '{}'", head))
                })?;
                if index != puzzle.presents.len() {
                    return Err(ParseError::UnexpectedIndex {
                        line: line_no,
                        expected: puzzle.presents.len(),
                        found: index,
                    });
                }
                pending = Some(PendingPresent {
                    line: line_no,
                    index,
                    rows: Vec::with_capacity(WINDOW),
                });
                continue;
            }

            match pending.as_mut() {
                Some(present) if present.rows.len() < WINDOW => {
                    present.rows.push(line.to_string());
                }
                Some(present) => {
                    return Err(ParseError::syntax(
                        line_no,
                        format!("present {} has more than {} rows", present.index, WINDOW),
                    ));
                }
                None => {
                    return Err(ParseError::syntax(
                        line_no,
                        format!("unexpected line '{}'", line),
                    ));
                }
            }
        }

        Self::finish_present(&mut puzzle, pending.take())?;
        for space in &puzzle.spaces {
            space.validate(&puzzle.presents)?;
        }

        log::debug!(
            "parsed {} presents and {} spaces",
            puzzle.presents.len(),
            puzzle.spaces.len()
        );
        Ok(puzzle)
    }

    fn finish_present(
        puzzle: &mut Puzzle,
        pending: Option<PendingPresent>,
    ) -> Result<(), ParseError> {
        let Some(pending) = pending else {
            return Ok(());
        };
        let present =
            Present::from_rows(&pending.rows).map_err(|source| ParseError::InvalidPresent {
                line: pending.line,
                index: pending.index,
                source,
            })?;
        puzzle.presents.push(present);
        Ok(())
    }

    fn parse_space(
        &self,
        line: usize,
        dims: &str,
        counts: &str,
        present_count: usize,
    ) -> Result<Space, ParseError> {
        let (cols, rows) = dims
            .split_once('x')
            .ok_or_else(|| ParseError::syntax(line, format!("invalid dimensions '{}'", dims)))?;
        let cols = parse_dimension(line, cols)?;
        let rows = parse_dimension(line, rows)?;

        let counts = counts
            .split_whitespace()
            .map(|token| {
                token.parse::<usize>().map_err(|_| {
                    ParseError::syntax(line, format!("invalid count '{}'", token))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if counts.len() != present_count {
            return Err(ParseError::CountMismatch {
                line,
                expected: present_count,
                found: counts.len(),
            });
        }

        Ok(Space::new(rows, cols, counts))
    }
}

fn parse_dimension(line: usize, token: &str) -> Result<usize, ParseError> {
    match token.trim().parse::<usize>() {
        Ok(0) => Err(ParseError::syntax(line, "dimensions must be positive")),
        Ok(value) => Ok(value),
        Err(_) => Err(ParseError::syntax(
            line,
            format!("invalid dimension '{}'", token.trim()),
        )),
    }
}
