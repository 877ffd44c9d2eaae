use std::fmt;

use crate::store::LiteralError;

/// Per-command failure. Every variant is recoverable: the session reports it
/// and moves on to the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Unparseable number or polygon literal.
    MalformedArgument { reason: String },
    /// Vertex-count argument below three.
    OutOfRange { value: i64 },
    /// Extremum, frame or mean requested on zero polygons.
    EmptyCollection,
    /// Unknown verb, unknown keyword, or trailing tokens.
    UnknownVerbOrArgument { token: String },
    /// Verb given without its argument.
    MissingArgument { verb: &'static str },
}

impl QueryError {
    pub(crate) fn unknown(token: impl Into<String>) -> Self {
        Self::UnknownVerbOrArgument {
            token: token.into(),
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedArgument { reason } => write!(f, "malformed argument: {reason}"),
            Self::OutOfRange { value } => {
                write!(f, "vertex count {value} out of range (needs >= 3)")
            }
            Self::EmptyCollection => write!(f, "no polygons loaded"),
            Self::UnknownVerbOrArgument { token } => write!(f, "unknown token {token:?}"),
            Self::MissingArgument { verb } => write!(f, "{verb} needs an argument"),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<LiteralError> for QueryError {
    fn from(e: LiteralError) -> Self {
        match e {
            LiteralError::Trailing { token } => Self::UnknownVerbOrArgument { token },
            other => Self::MalformedArgument {
                reason: other.to_string(),
            },
        }
    }
}
