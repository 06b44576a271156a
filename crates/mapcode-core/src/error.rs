//! Error types for territory catalog construction.

use std::error::Error;
use std::fmt;

/// Errors detected while building or parsing a [`TerritoryCatalog`](crate::TerritoryCatalog).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// A catalog line could not be parsed.
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// Two territories share a code or alias.
    DuplicateName {
        /// The repeated name.
        name: String,
    },
    /// A parent code does not name an earlier-declared or later territory.
    UnknownParent {
        /// The territory declaring the parent.
        territory: String,
        /// The unresolved parent code.
        parent: String,
    },
    /// A subdivision names another subdivision as its parent.
    NestedSubdivision {
        /// The offending territory.
        territory: String,
    },
    /// The international territory `AAA` is missing or not last.
    MissingInternational,
    /// The catalog has more territories than a 16-bit index can address.
    TooManyTerritories {
        /// Number of territories supplied.
        count: usize,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { line, reason } => {
                write!(f, "catalog line {line}: {reason}")
            }
            Self::DuplicateName { name } => write!(f, "duplicate territory name '{name}'"),
            Self::UnknownParent { territory, parent } => {
                write!(f, "territory '{territory}' names unknown parent '{parent}'")
            }
            Self::NestedSubdivision { territory } => {
                write!(f, "territory '{territory}' has a subdivision as parent")
            }
            Self::MissingInternational => {
                write!(f, "the international territory AAA must be the last entry")
            }
            Self::TooManyTerritories { count } => {
                write!(f, "{count} territories exceed the 16-bit territory index")
            }
        }
    }
}

impl Error for CatalogError {}
