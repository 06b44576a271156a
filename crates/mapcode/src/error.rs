//! Errors of the wrapper operations.

use std::error::Error;
use std::fmt;

/// Why an encode or decode request failed.
///
/// Malformed input is reported as [`IllegalArgument`](Self::IllegalArgument);
/// well-formed input the data does not cover gets one of the other variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapcodeError {
    /// The input is not a valid coordinate, precision or mapcode string.
    IllegalArgument {
        /// What was wrong with it.
        reason: String,
    },
    /// The mapcode is well formed but does not denote an area in its
    /// territory.
    UnknownMapcode {
        /// The code as given.
        code: String,
    },
    /// The territory name does not resolve.
    UnknownTerritory {
        /// The name as given.
        name: String,
    },
    /// The territory does not cover the point.
    NotCovered,
}

impl MapcodeError {
    pub(crate) fn illegal(reason: impl Into<String>) -> Self {
        Self::IllegalArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MapcodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalArgument { reason } => write!(f, "illegal argument: {reason}"),
            Self::UnknownMapcode { code } => write!(f, "unknown mapcode '{code}'"),
            Self::UnknownTerritory { name } => write!(f, "unknown territory '{name}'"),
            Self::NotCovered => write!(f, "territory does not cover the point"),
        }
    }
}

impl Error for MapcodeError {}
