//! Life 1.06 reader and writer.
//!
//! The format is an optional header line (`#Life 1.06`) followed by one live
//! cell per line as two whitespace-separated integers. Reading stops at the
//! first line that is not a cell; everything collected up to that point is
//! the board.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::{Board, Coord};

/// Header token written by most Life 1.06 producers.
pub const DEFAULT_HEADER: &str = "#Life 1.06";

/// Whether the first input line must be the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// A non-empty input must start with the header line.
    Required,
    /// The header is skipped when present; otherwise the first line is data.
    Optional,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input header mismatch: expected {expected:?}, found {found:?}")]
    HeaderMismatch { expected: String, found: String },
    #[error("read input line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Result of a successful read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub board: Board,
    /// Cell lines accepted, duplicates included.
    pub cells_read: usize,
    /// 1-based line number of the first line that was not a cell, if any.
    pub stopped_at: Option<usize>,
}

/// Read a board from Life 1.06 text.
pub fn parse_board<R: BufRead>(
    reader: R,
    header: &str,
    policy: HeaderPolicy,
) -> Result<Parsed, ParseError> {
    let mut cells = Vec::new();
    let mut stopped_at = None;

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let line_no = idx + 1;
        let raw = raw.map_err(|source| ParseError::Io {
            line: line_no,
            source,
        })?;
        // Bytes that are not UTF-8 cannot be a header or a cell.
        let line = std::str::from_utf8(&raw).ok().map(str::trim_end);

        if line_no == 1 && line == Some(header) {
            continue;
        }
        if line_no == 1 && policy == HeaderPolicy::Required {
            return Err(ParseError::HeaderMismatch {
                expected: header.to_string(),
                found: String::from_utf8_lossy(&raw).trim_end().to_string(),
            });
        }

        match line.and_then(parse_cell) {
            Some(cell) => cells.push(cell),
            None => {
                stopped_at = Some(line_no);
                break;
            }
        }
    }

    if let Some(line_no) = stopped_at {
        warn!(
            line = line_no,
            cells = cells.len(),
            "stopped reading at a line that is not a cell"
        );
    }
    debug!(cells = cells.len(), "parsed life 1.06 input");

    Ok(Parsed {
        cells_read: cells.len(),
        board: cells.into_iter().collect(),
        stopped_at,
    })
}

/// [`parse_board`] over an in-memory string.
pub fn parse_str(input: &str, header: &str, policy: HeaderPolicy) -> Result<Parsed, ParseError> {
    parse_board(input.as_bytes(), header, policy)
}

/// Parse `x y` from the start of a line.
///
/// `x` must be a whole token. `y` only needs to start with an integer, so
/// `1 2x` reads as `(1, 2)`; anything after it is ignored.
fn parse_cell(line: &str) -> Option<Coord> {
    let mut tokens = line.split_whitespace();
    let x = tokens.next()?.parse().ok()?;
    let y = leading_int(tokens.next()?)?;
    Some(Coord::new(x, y))
}

/// The optionally signed integer at the start of `token`.
fn leading_int(token: &str) -> Option<i64> {
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits = token[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    token[..sign_len + digits].parse().ok()
}

/// Output layout for [`write_board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions<'a> {
    /// Header line written before the cells.
    pub header: Option<&'a str>,
    /// Order cells by `(x, y)` instead of board iteration order.
    pub sort: bool,
    /// When set, a `Result of N generations:` line is written first.
    pub banner_generations: Option<u32>,
}

impl Default for FormatOptions<'_> {
    fn default() -> Self {
        Self {
            header: Some(DEFAULT_HEADER),
            sort: true,
            banner_generations: None,
        }
    }
}

/// Write `board` as Life 1.06 text.
pub fn write_board<W: Write>(mut out: W, board: &Board, opts: &FormatOptions<'_>) -> io::Result<()> {
    if let Some(generations) = opts.banner_generations {
        writeln!(out, "Result of {generations} generations:")?;
    }
    if let Some(header) = opts.header {
        writeln!(out, "{header}")?;
    }
    if opts.sort {
        for cell in board.sorted() {
            writeln!(out, "{cell}")?;
        }
    } else {
        for cell in board {
            writeln!(out, "{cell}")?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cells, glider, life106};

    fn render_board(board: &Board, opts: &FormatOptions<'_>) -> String {
        let mut buf = Vec::new();
        write_board(&mut buf, board, opts).expect("write to vec");
        String::from_utf8(buf).expect("utf8 output")
    }

    fn required(input: &str) -> Result<Parsed, ParseError> {
        parse_str(input, DEFAULT_HEADER, HeaderPolicy::Required)
    }

    #[test]
    fn parses_header_and_cells() {
        let parsed = required("#Life 1.06\n0 1\n1 2\n2 0\n").expect("parse");
        assert_eq!(parsed.board, cells(&[(0, 1), (1, 2), (2, 0)]));
        assert_eq!(parsed.cells_read, 3);
        assert_eq!(parsed.stopped_at, None);
    }

    #[test]
    fn missing_header_is_rejected_when_required() {
        let err = required("0 1\n1 2\n").expect_err("header mismatch");
        match err {
            ParseError::HeaderMismatch { expected, found } => {
                assert_eq!(expected, DEFAULT_HEADER);
                assert_eq!(found, "0 1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn optional_header_is_skipped_or_read_as_data() {
        let with = parse_str("#Life 1.06\n5 5\n", DEFAULT_HEADER, HeaderPolicy::Optional)
            .expect("with header");
        let without =
            parse_str("5 5\n", DEFAULT_HEADER, HeaderPolicy::Optional).expect("without header");
        assert_eq!(with.board, cells(&[(5, 5)]));
        assert_eq!(without.board, with.board);
    }

    #[test]
    fn empty_input_is_an_empty_board() {
        let parsed = required("").expect("parse");
        assert!(parsed.board.is_empty());
        assert_eq!(parsed.stopped_at, None);
    }

    #[test]
    fn stops_at_first_line_that_is_not_a_cell() {
        let parsed = required("#Life 1.06\n1 1\n2 two\n3 3\n").expect("parse");
        assert_eq!(parsed.board, cells(&[(1, 1)]));
        assert_eq!(parsed.stopped_at, Some(3));
    }

    #[test]
    fn non_utf8_line_ends_input() {
        let input: &[u8] = b"#Life 1.06\n1 1\n\xff\xfe 2\n3 3\n";
        let parsed =
            parse_board(input, DEFAULT_HEADER, HeaderPolicy::Required).expect("parse");
        assert_eq!(parsed.board, cells(&[(1, 1)]));
        assert_eq!(parsed.stopped_at, Some(3));
    }

    #[test]
    fn non_utf8_first_line_is_a_header_mismatch() {
        let input: &[u8] = b"\xffLife\n0 0\n";
        let err = parse_board(input, DEFAULT_HEADER, HeaderPolicy::Required)
            .expect_err("header mismatch");
        assert!(matches!(err, ParseError::HeaderMismatch { .. }));

        let parsed =
            parse_board(input, DEFAULT_HEADER, HeaderPolicy::Optional).expect("optional header");
        assert!(parsed.board.is_empty());
        assert_eq!(parsed.stopped_at, Some(1));
    }

    #[test]
    fn second_number_may_carry_trailing_junk() {
        let parsed = required("#Life 1.06\n1 2x\n-3 -4;\n5x 6\n").expect("parse");
        assert_eq!(parsed.board, cells(&[(1, 2), (-3, -4)]));
        assert_eq!(parsed.stopped_at, Some(4));
    }

    #[test]
    fn sign_without_digits_is_not_a_cell() {
        let parsed = required("#Life 1.06\n1 -\n").expect("parse");
        assert!(parsed.board.is_empty());
        assert_eq!(parsed.stopped_at, Some(2));
    }

    #[test]
    fn blank_line_ends_input() {
        let parsed = required("#Life 1.06\n1 1\n\n3 3\n").expect("parse");
        assert_eq!(parsed.board, cells(&[(1, 1)]));
        assert_eq!(parsed.stopped_at, Some(3));
    }

    #[test]
    fn accepts_negative_large_and_padded_values() {
        let input = "#Life 1.06\n  -5\t-7\n-9223372036854775808 9223372036854775807\n4 4 extra\n";
        let parsed = required(input).expect("parse");
        assert_eq!(
            parsed.board,
            cells(&[(-5, -7), (i64::MIN, i64::MAX), (4, 4)])
        );
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let parsed = required("#Life 1.06\r\n1 2\r\n3 4\r\n").expect("parse");
        assert_eq!(parsed.board, cells(&[(1, 2), (3, 4)]));
    }

    #[test]
    fn duplicate_cells_collapse() {
        let parsed = required("#Life 1.06\n1 1\n1 1\n").expect("parse");
        assert_eq!(parsed.cells_read, 2);
        assert_eq!(parsed.board.len(), 1);
    }

    #[test]
    fn custom_header_token() {
        let parsed = parse_str("#Cells\n0 0\n", "#Cells", HeaderPolicy::Required).expect("parse");
        assert_eq!(parsed.board, cells(&[(0, 0)]));
        assert!(parse_str("#Life 1.06\n0 0\n", "#Cells", HeaderPolicy::Required).is_err());
    }

    #[test]
    fn writes_sorted_with_header() {
        let out = render_board(&cells(&[(2, 0), (0, 1), (0, -1)]), &FormatOptions::default());
        assert_eq!(out, "#Life 1.06\n0 -1\n0 1\n2 0\n");
    }

    #[test]
    fn writes_banner_before_header() {
        let opts = FormatOptions {
            banner_generations: Some(10),
            ..FormatOptions::default()
        };
        let out = render_board(&cells(&[(0, 0)]), &opts);
        assert_eq!(out, "Result of 10 generations:\n#Life 1.06\n0 0\n");
    }

    #[test]
    fn unsorted_output_without_header_has_every_cell() {
        let board = glider();
        let opts = FormatOptions {
            header: None,
            sort: false,
            banner_generations: None,
        };
        let out = render_board(&board, &opts);
        let reparsed =
            parse_str(&out, DEFAULT_HEADER, HeaderPolicy::Optional).expect("reparse output");
        assert_eq!(out.lines().count(), board.len());
        assert_eq!(reparsed.board, board);
    }

    #[test]
    fn fixture_text_parses_back() {
        let parsed = required(&life106(&glider())).expect("parse");
        assert_eq!(parsed.board, glider());
    }
}
