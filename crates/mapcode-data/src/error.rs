//! Error types for loading the data model.

use std::fmt;
use std::io;

/// Errors detected while loading or writing a data model.
///
/// Every variant is fatal: a model that fails validation is never
/// partially used.
#[derive(Debug)]
pub enum DataError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The blob does not start with the expected `b"MC"` magic bytes.
    InvalidMagic,
    /// The format version is older than this build accepts.
    UnsupportedVersion {
        /// The version found in the blob.
        found: u16,
        /// The oldest accepted version.
        minimum: u16,
    },
    /// The blob's territory count differs from the territory catalog.
    TerritoryCountMismatch {
        /// Territory count stored in the blob.
        found: usize,
        /// Territory count of the catalog.
        expected: usize,
    },
    /// The blob length differs from the length implied by its header.
    SizeMismatch {
        /// Length implied by the header counts.
        expected: usize,
        /// Actual blob length.
        actual: usize,
    },
    /// The first-record table is not a valid partition of the records.
    InvalidIndex {
        /// The territory whose entry is wrong.
        territory: usize,
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The blob ended inside the fixed header.
    Truncated,
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"MC\")"),
            Self::UnsupportedVersion { found, minimum } => {
                write!(f, "unsupported data version {found} (minimum {minimum})")
            }
            Self::TerritoryCountMismatch { found, expected } => {
                write!(
                    f,
                    "data has {found} territories, catalog has {expected}"
                )
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "data size mismatch: expected {expected} bytes, got {actual}")
            }
            Self::InvalidIndex { territory, detail } => {
                write!(f, "invalid record index for territory {territory}: {detail}")
            }
            Self::Truncated => write!(f, "data truncated inside header"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DataError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
