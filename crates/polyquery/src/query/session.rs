//! Line-oriented command loop.
//!
//! One input line is one command. Failures write the invalid marker instead of
//! a result and never affect the following lines.

use std::io::{self, BufRead, Write};

use crate::store::{read_line_bytes, PolygonStore};

use super::command::{Command, Response};
use super::error::QueryError;

/// Marker written for a rejected command.
pub const INVALID_COMMAND: &str = "<INVALID COMMAND>";

/// Session output settings.
#[derive(Clone, Debug)]
pub struct SessionCfg {
    pub invalid_marker: String,
    /// Fractional digits for area responses.
    pub area_precision: usize,
}

impl Default for SessionCfg {
    fn default() -> Self {
        Self {
            invalid_marker: INVALID_COMMAND.to_string(),
            area_precision: 1,
        }
    }
}

/// Per-session counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub answered: usize,
    pub rejected: usize,
}

/// Command loop over a borrowed, read-only store.
pub struct Session<'s> {
    store: &'s PolygonStore,
    cfg: SessionCfg,
    stats: SessionStats,
}

impl<'s> Session<'s> {
    pub fn new(store: &'s PolygonStore, cfg: SessionCfg) -> Self {
        Self {
            store,
            cfg,
            stats: SessionStats::default(),
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Parse and execute one line; `None` for blank lines.
    pub fn eval(&self, line: &str) -> Option<Result<Response, QueryError>> {
        if line.trim().is_empty() {
            return None;
        }
        Some(Command::parse(line).and_then(|cmd| cmd.execute(self.store)))
    }

    /// Evaluate one line and write its result or the invalid marker.
    pub fn handle_line<W: Write>(&mut self, line: &str, mut out: W) -> io::Result<()> {
        match self.eval(line) {
            None => Ok(()),
            Some(Ok(resp)) => {
                self.stats.answered += 1;
                writeln!(out, "{:.*}", self.cfg.area_precision, resp)
            }
            Some(Err(err)) => self.reject(line, &err, out),
        }
    }

    fn reject<W: Write>(&mut self, line: &str, err: &QueryError, mut out: W) -> io::Result<()> {
        self.stats.rejected += 1;
        tracing::debug!(line, error = %err, "command rejected");
        writeln!(out, "{}", self.cfg.invalid_marker)
    }

    /// Drive the loop until end of input. Only read/write errors abort; a line
    /// that is not valid UTF-8 is rejected like any other malformed command.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<SessionStats> {
        let mut buf = Vec::new();
        while read_line_bytes(&mut input, &mut buf)? {
            match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line, &mut out)?,
                Err(e) => {
                    let err = QueryError::MalformedArgument {
                        reason: format!("line is not valid UTF-8: {e}"),
                    };
                    self.reject(&String::from_utf8_lossy(&buf), &err, &mut out)?;
                }
            }
        }
        out.flush()?;
        Ok(self.stats)
    }
}
