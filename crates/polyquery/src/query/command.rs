//! Typed commands: parsing (one line → `Command`) and execution against a store.

use std::fmt;

use crate::geom::{
    area_mean, area_of, area_sum, count_matching, count_permutations, count_smaller_area,
    extremum_by_area, extremum_by_vertices, Direction, Polygon, Rect, VertexFilter,
};
use crate::store::{parse_polygon_exact, PolygonStore};

use super::error::QueryError;

/// Argument of `AREA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AreaArg {
    Filter(VertexFilter),
    Mean,
}

/// Criterion of `MAX` / `MIN`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtremumKey {
    Area,
    Vertexes,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Area(AreaArg),
    Extremum { dir: Direction, key: ExtremumKey },
    Count(VertexFilter),
    LessArea(Polygon),
    InFrame(Polygon),
    Perms(Polygon),
}

/// Successful command output, rendered as one line.
///
/// `Area` honours the formatter precision (`{:.1}` by default); the other
/// variants ignore it, so no formatting state leaks between responses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Response {
    Area(f64),
    Count(usize),
    Verdict(bool),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Response::Area(a) => {
                let prec = f.precision().unwrap_or(1);
                write!(f, "{a:.prec$}")
            }
            Response::Count(n) => write!(f, "{n}"),
            Response::Verdict(true) => f.write_str("<TRUE>"),
            Response::Verdict(false) => f.write_str("<FALSE>"),
        }
    }
}

impl Command {
    /// Parse one command line. Every token must be consumed.
    pub fn parse(line: &str) -> Result<Command, QueryError> {
        let mut toks = line.split_whitespace();
        let verb = toks.next().ok_or_else(|| QueryError::unknown(""))?;
        let cmd = match verb {
            "AREA" => {
                let arg = next_arg(&mut toks, "AREA")?;
                match arg {
                    "MEAN" => Command::Area(AreaArg::Mean),
                    other => Command::Area(AreaArg::Filter(parity_or_count(other)?)),
                }
            }
            "COUNT" => Command::Count(parity_or_count(next_arg(&mut toks, "COUNT")?)?),
            "MAX" => Command::Extremum {
                dir: Direction::Max,
                key: extremum_key(next_arg(&mut toks, "MAX")?)?,
            },
            "MIN" => Command::Extremum {
                dir: Direction::Min,
                key: extremum_key(next_arg(&mut toks, "MIN")?)?,
            },
            // Polygon literals consume the rest of the line themselves.
            "LESSAREA" => return Ok(Command::LessArea(literal(toks, "LESSAREA")?)),
            "INFRAME" => return Ok(Command::InFrame(literal(toks, "INFRAME")?)),
            "PERMS" => return Ok(Command::Perms(literal(toks, "PERMS")?)),
            other => return Err(QueryError::unknown(other)),
        };
        match toks.next() {
            Some(extra) => Err(QueryError::unknown(extra)),
            None => Ok(cmd),
        }
    }

    /// Run against the store. Read-only; the store is never modified.
    pub fn execute(&self, store: &PolygonStore) -> Result<Response, QueryError> {
        let polys = store.polygons();
        let resp = match self {
            Command::Area(AreaArg::Filter(f)) => Response::Area(area_sum(polys, *f)),
            Command::Area(AreaArg::Mean) => {
                Response::Area(area_mean(polys).ok_or(QueryError::EmptyCollection)?)
            }
            Command::Extremum { dir, key } => match key {
                ExtremumKey::Area => {
                    let p = extremum_by_area(polys, *dir).ok_or(QueryError::EmptyCollection)?;
                    Response::Area(area_of(p))
                }
                ExtremumKey::Vertexes => Response::Count(
                    extremum_by_vertices(polys, *dir).ok_or(QueryError::EmptyCollection)?,
                ),
            },
            Command::Count(f) => Response::Count(count_matching(polys, *f)),
            Command::LessArea(reference) => Response::Count(count_smaller_area(polys, reference)),
            Command::InFrame(candidate) => {
                let frame = Rect::union_of(polys).ok_or(QueryError::EmptyCollection)?;
                Response::Verdict(frame.contains_polygon(candidate))
            }
            Command::Perms(reference) => Response::Count(count_permutations(polys, reference)),
        };
        Ok(resp)
    }
}

fn next_arg<'a, I>(toks: &mut I, verb: &'static str) -> Result<&'a str, QueryError>
where
    I: Iterator<Item = &'a str>,
{
    toks.next().ok_or(QueryError::MissingArgument { verb })
}

fn parity_or_count(arg: &str) -> Result<VertexFilter, QueryError> {
    match arg {
        "EVEN" => Ok(VertexFilter::Even),
        "ODD" => Ok(VertexFilter::Odd),
        other => {
            let n: i64 = other.parse().map_err(|_| QueryError::MalformedArgument {
                reason: format!("expected EVEN, ODD or a vertex count, got {other:?}"),
            })?;
            usize::try_from(n)
                .ok()
                .and_then(VertexFilter::exactly)
                .ok_or(QueryError::OutOfRange { value: n })
        }
    }
}

fn extremum_key(arg: &str) -> Result<ExtremumKey, QueryError> {
    match arg {
        "AREA" => Ok(ExtremumKey::Area),
        "VERTEXES" => Ok(ExtremumKey::Vertexes),
        other => Err(QueryError::unknown(other)),
    }
}

fn literal<'a, I>(toks: I, verb: &'static str) -> Result<Polygon, QueryError>
where
    I: Iterator<Item = &'a str>,
{
    let mut toks = toks.peekable();
    if toks.peek().is_none() {
        return Err(QueryError::MissingArgument { verb });
    }
    Ok(parse_polygon_exact(toks)?)
}
