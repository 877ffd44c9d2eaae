//! Polygon literal format `N x1 y1 ... xN yN` (whitespace separated integers).
//!
//! - `parse_polygon` consumes exactly one literal from a token stream; callers
//!   decide whether leftover tokens are an error.
//! - `load_polygons` reads one literal per line and skips malformed lines,
//!   recording their 1-based line numbers.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::geom::{Point, Polygon, MIN_VERTICES};

/// Why a polygon literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// Stream ended before the literal was complete.
    Truncated { expected: usize, found: usize },
    /// A token is not an integer of the expected kind.
    BadInteger { token: String },
    /// Declared vertex count below three.
    TooFewVertices { declared: usize },
    /// Extra tokens after a complete literal.
    Trailing { token: String },
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { expected, found } => {
                write!(f, "literal truncated: expected {expected} tokens, found {found}")
            }
            Self::BadInteger { token } => write!(f, "not an integer: {token:?}"),
            Self::TooFewVertices { declared } => {
                write!(f, "polygon needs >= {MIN_VERTICES} vertices, got {declared}")
            }
            Self::Trailing { token } => write!(f, "unexpected trailing token {token:?}"),
        }
    }
}

impl std::error::Error for LiteralError {}

/// Parse one literal from `tokens`, leaving any remaining tokens unread.
pub fn parse_polygon<'a, I>(tokens: &mut I) -> Result<Polygon, LiteralError>
where
    I: Iterator<Item = &'a str>,
{
    let head = tokens.next().ok_or(LiteralError::Truncated {
        expected: 1,
        found: 0,
    })?;
    let declared: usize = parse_int(head)?;
    if declared < MIN_VERTICES {
        return Err(LiteralError::TooFewVertices { declared });
    }
    let expected = declared.saturating_mul(2).saturating_add(1);
    let mut points = Vec::with_capacity(declared.min(1024));
    for k in 0..declared {
        let x = next_int(tokens, expected, 1 + 2 * k)?;
        let y = next_int(tokens, expected, 2 + 2 * k)?;
        points.push(Point::new(x, y));
    }
    // `declared >= MIN_VERTICES` was checked above.
    Polygon::new(points).ok_or(LiteralError::TooFewVertices { declared })
}

/// Next coordinate; `found` is the number of tokens consumed so far.
fn next_int<'a, I>(tokens: &mut I, expected: usize, found: usize) -> Result<i32, LiteralError>
where
    I: Iterator<Item = &'a str>,
{
    let tok = tokens
        .next()
        .ok_or(LiteralError::Truncated { expected, found })?;
    parse_int(tok)
}

/// Parse a whole line (or argument tail) as exactly one literal.
pub fn parse_polygon_exact<'a, I>(tokens: I) -> Result<Polygon, LiteralError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut it = tokens.into_iter();
    let poly = parse_polygon(&mut it)?;
    match it.next() {
        Some(tok) => Err(LiteralError::Trailing {
            token: tok.to_string(),
        }),
        None => Ok(poly),
    }
}

fn parse_int<T: std::str::FromStr>(tok: &str) -> Result<T, LiteralError> {
    tok.parse().map_err(|_| LiteralError::BadInteger {
        token: tok.to_string(),
    })
}

/// Result of loading a polygon file.
#[derive(Clone, Debug, Default)]
pub struct Loaded {
    pub polygons: Vec<Polygon>,
    /// 1-based numbers of non-blank lines that failed to parse.
    pub skipped: Vec<usize>,
}

/// Read one literal per line; blank lines are ignored, malformed ones skipped.
///
/// A line that is not valid UTF-8 counts as malformed. Only read errors abort.
pub fn load_polygons<R: BufRead>(mut reader: R) -> io::Result<Loaded> {
    let mut out = Loaded::default();
    let mut buf = Vec::new();
    let mut lineno = 0;
    while read_line_bytes(&mut reader, &mut buf)? {
        lineno += 1;
        let Ok(line) = std::str::from_utf8(&buf) else {
            out.skipped.push(lineno);
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_polygon_exact(line.split_whitespace()) {
            Ok(poly) => out.polygons.push(poly),
            Err(_) => out.skipped.push(lineno),
        }
    }
    Ok(out)
}

/// Fill `buf` with the next line minus its `\n` / `\r\n` terminator.
/// Returns `false` at end of input.
pub(crate) fn read_line_bytes<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(true)
}

/// Write polygons one literal per line (the format `load_polygons` reads).
pub fn write_polygons<'a, W, I>(mut out: W, polys: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Polygon>,
{
    for p in polys {
        writeln!(out, "{p}")?;
    }
    out.flush()
}
