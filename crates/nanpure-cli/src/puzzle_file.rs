//! Parsing for puzzle collection files.
//!
//! A collection is plain text holding any number of puzzles:
//!
//! - A line starting with an alphabetic character (`Grid 01`) labels the
//!   puzzle that follows; subsequent cell lines are its rows, and the
//!   puzzle is complete when the row count equals the row length.
//! - Outside a labeled block, a single line whose length is a fourth
//!   power of at least 16 (16 cells for 4x4, 81 for 9x9) is one whole
//!   puzzle.
//! - Cells are `0`-`9`, with `.` and `_` as blank aliases. Blank lines
//!   are ignored and `#` starts a comment line.
//!
//! Puzzles without a label are named `Grid <ordinal>` by position in the
//! collection.

use nanpure_core::{Grid, GridError};

/// One puzzle from a collection file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Label from the collection file, or the assigned ordinal name.
    pub label: String,
    /// The parsed, validated grid.
    pub grid: Grid,
}

/// Why a collection file could not be parsed.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// A line held something other than cell characters.
    #[display("unexpected character {found:?} on line {line}")]
    UnexpectedCharacter {
        /// Line the character appeared on.
        line: usize,
        /// The offending character.
        found: char,
    },
    /// A row inside a block did not match the block's first row.
    #[display("line {line} has {found} cells, expected {expected}")]
    RowLengthMismatch {
        /// Line the row appeared on.
        line: usize,
        /// Cell count of the block's first row.
        expected: usize,
        /// Cell count actually found.
        found: usize,
    },
    /// The file or a following label cut a puzzle short.
    #[display("puzzle {label:?} ends before all of its rows are given")]
    TruncatedPuzzle {
        /// Label of the incomplete puzzle.
        label: String,
    },
    /// The collected rows failed grid validation.
    #[display("puzzle {label:?}: {source}")]
    Grid {
        /// Label of the rejected puzzle.
        label: String,
        /// The underlying validation failure.
        source: GridError,
    },
}

/// Parses a whole collection file.
///
/// Returns the puzzles in file order. An empty file parses to an empty
/// collection; whether that is acceptable is the caller's call.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered, with the line number or
/// puzzle label it concerns.
pub fn parse_collection(text: &str) -> Result<Vec<Puzzle>, ParseError> {
    let mut puzzles = Vec::new();
    let mut pending: Option<Pending> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.chars().next().is_some_and(char::is_alphabetic) {
            if let Some(unfinished) = pending.take() {
                return Err(unfinished.truncated(puzzles.len() + 1));
            }
            pending = Some(Pending::labeled(trimmed));
            continue;
        }

        let row = parse_cells(trimmed, line)?;
        let mut block = match pending.take() {
            Some(block) => block,
            None => {
                if let Some(side) = whole_puzzle_side(row.len()) {
                    let rows: Vec<Vec<u8>> = row.chunks(side).map(<[u8]>::to_vec).collect();
                    puzzles.push(build_puzzle(None, &rows, puzzles.len() + 1)?);
                    continue;
                }
                Pending::unlabeled()
            }
        };

        let expected = block.rows.first().map_or(row.len(), Vec::len);
        if row.len() != expected {
            return Err(ParseError::RowLengthMismatch {
                line,
                expected,
                found: row.len(),
            });
        }
        block.rows.push(row);

        if block.rows.len() == expected {
            puzzles.push(build_puzzle(block.label, &block.rows, puzzles.len() + 1)?);
        } else {
            pending = Some(block);
        }
    }

    if let Some(unfinished) = pending.take() {
        return Err(unfinished.truncated(puzzles.len() + 1));
    }
    Ok(puzzles)
}

/// A puzzle whose rows are still being collected.
#[derive(Debug)]
struct Pending {
    label: Option<String>,
    rows: Vec<Vec<u8>>,
}

impl Pending {
    fn labeled(label: &str) -> Self {
        Self {
            label: Some(label.to_owned()),
            rows: Vec::new(),
        }
    }

    fn unlabeled() -> Self {
        Self {
            label: None,
            rows: Vec::new(),
        }
    }

    fn truncated(self, ordinal: usize) -> ParseError {
        ParseError::TruncatedPuzzle {
            label: self.label.unwrap_or_else(|| auto_label(ordinal)),
        }
    }
}

fn build_puzzle(
    label: Option<String>,
    rows: &[Vec<u8>],
    ordinal: usize,
) -> Result<Puzzle, ParseError> {
    let label = label.unwrap_or_else(|| auto_label(ordinal));
    match Grid::from_rows(rows) {
        Ok(grid) => Ok(Puzzle { label, grid }),
        Err(source) => Err(ParseError::Grid { label, source }),
    }
}

fn auto_label(ordinal: usize) -> String {
    format!("Grid {ordinal}")
}

fn parse_cells(text: &str, line: usize) -> Result<Vec<u8>, ParseError> {
    text.chars()
        .map(|c| cell_digit(c).ok_or(ParseError::UnexpectedCharacter { line, found: c }))
        .collect()
}

const fn cell_digit(c: char) -> Option<u8> {
    match c {
        '0' | '.' | '_' => Some(0),
        '1' => Some(1),
        '2' => Some(2),
        '3' => Some(3),
        '4' => Some(4),
        '5' => Some(5),
        '6' => Some(6),
        '7' => Some(7),
        '8' => Some(8),
        '9' => Some(9),
        _ => None,
    }
}

/// Side length of a grid that fits on one line of `len` cells, when
/// `len` is a fourth power large enough to be unambiguous.
fn whole_puzzle_side(len: usize) -> Option<usize> {
    if len < 16 {
        return None;
    }
    let side = len.isqrt();
    if side * side != len {
        return None;
    }
    let box_len = side.isqrt();
    (box_len * box_len == side).then_some(side)
}

#[cfg(test)]
mod tests {
    use nanpure_core::Position;

    use super::*;

    const CLASSIC_LINE: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn test_parses_labeled_block() {
        let text = "Easy one\n1234\n3412\n2143\n4321\n";
        let puzzles = parse_collection(text).unwrap();

        assert_eq!(puzzles.len(), 1);
        assert_eq!(puzzles[0].label, "Easy one");
        assert_eq!(puzzles[0].grid.side(), 4);
        assert_eq!(puzzles[0].grid.value(Position::new(1, 0)), 3);
    }

    #[test]
    fn test_parses_whole_line_puzzles() {
        let text = format!("1234341221434321\n{CLASSIC_LINE}\n");
        let puzzles = parse_collection(&text).unwrap();

        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].label, "Grid 1");
        assert_eq!(puzzles[0].grid.side(), 4);
        assert_eq!(puzzles[1].label, "Grid 2");
        assert_eq!(puzzles[1].grid.side(), 9);
        assert_eq!(puzzles[1].grid.value(Position::new(0, 0)), 5);
    }

    #[test]
    fn test_parses_unlabeled_row_block() {
        let text = ".234\n3412\n2143\n432.\n";
        let puzzles = parse_collection(text).unwrap();

        assert_eq!(puzzles.len(), 1);
        assert_eq!(puzzles[0].label, "Grid 1");
        assert_eq!(puzzles[0].grid.value(Position::new(0, 0)), 0);
        assert_eq!(puzzles[0].grid.value(Position::new(3, 3)), 0);
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let text = "# collection header\n\nGrid 01\n1234\n# halfway note\n3412\n\n2143\n4321\n";
        let puzzles = parse_collection(text).unwrap();

        assert_eq!(puzzles.len(), 1);
        assert_eq!(puzzles[0].label, "Grid 01");
    }

    #[test]
    fn test_mixed_labels_keep_ordinals_by_position() {
        let text = format!("Opener\n1234\n3412\n2143\n4321\n\n{CLASSIC_LINE}\n");
        let puzzles = parse_collection(&text).unwrap();

        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].label, "Opener");
        assert_eq!(puzzles[1].label, "Grid 2");
    }

    #[test]
    fn test_empty_and_comment_only_files_hold_no_puzzles() {
        assert_eq!(parse_collection("").unwrap(), vec![]);
        assert_eq!(parse_collection("# nothing here\n\n").unwrap(), vec![]);
    }

    #[test]
    fn test_rejects_unexpected_character() {
        let err = parse_collection("# collection\n12x4\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedCharacter {
                line: 2,
                found: 'x'
            }
        );
        assert_eq!(err.to_string(), "unexpected character 'x' on line 2");
    }

    #[test]
    fn test_rejects_row_length_mismatch() {
        let err = parse_collection("Grid 01\n1234\n341\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::RowLengthMismatch {
                line: 3,
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_rejects_puzzle_truncated_at_end_of_file() {
        let err = parse_collection("Grid 07\n1234\n3412\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::TruncatedPuzzle {
                label: "Grid 07".to_owned()
            }
        );
    }

    #[test]
    fn test_rejects_puzzle_truncated_by_next_label() {
        let err = parse_collection("First\n1234\nSecond\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::TruncatedPuzzle {
                label: "First".to_owned()
            }
        );
    }

    #[test]
    fn test_grid_validation_failures_carry_the_label() {
        let err = parse_collection("Bad digits\n1234\n3412\n2143\n4325\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::Grid {
                label: "Bad digits".to_owned(),
                source: GridError::ValueOutOfRange {
                    pos: Position::new(3, 3),
                    value: 5,
                    side: 4
                }
            }
        );
    }

    #[test]
    fn test_single_cell_lines_form_single_cell_puzzles() {
        let puzzles = parse_collection(".\n").unwrap();
        assert_eq!(puzzles.len(), 1);
        assert_eq!(puzzles[0].grid.side(), 1);
    }
}
