//! Query dispatcher: AREA, MAX, MIN, COUNT, LESSAREA, INFRAME, PERMS.
//!
//! Flow per line: tokens → `Command::parse` → `Command::execute` against a
//! `PolygonStore` → `Response` (one output line) or `QueryError` (marker line).
//!
//! Code cross-refs: `geom::{area_sum, extremum_by, Rect::union_of}`, `store::parse_polygon`

mod command;
mod error;
mod session;

pub use command::{AreaArg, Command, ExtremumKey, Response};
pub use error::QueryError;
pub use session::{Session, SessionCfg, SessionStats, INVALID_COMMAND};

#[cfg(test)]
mod tests;
