//! Context configuration and construction errors.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use mapcode_core::CatalogError;
use mapcode_data::{DataError, MIN_VERSION};

/// Environment variable naming the binary data file.
pub const DATA_ENV: &str = "MAPCODE_DATA";

/// Environment variable naming the territory catalog file.
pub const TERRITORIES_ENV: &str = "MAPCODE_TERRITORIES";

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`ContextConfig`] or building a
/// [`MapcodeContext`](crate::MapcodeContext) from it.
#[derive(Debug)]
pub enum ConfigError {
    /// A required path was left empty.
    MissingPath {
        /// Name of the configuration field.
        field: &'static str,
    },
    /// A required environment variable is not set.
    MissingEnv {
        /// Name of the variable.
        var: &'static str,
    },
    /// The configured minimum version is below what the engine reads.
    InvalidVersion {
        /// The configured value.
        found: u16,
        /// The lowest supported version.
        minimum: u16,
    },
    /// A file could not be read.
    Io {
        /// The file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The data blob is corrupt or does not match the catalog.
    Data(DataError),
    /// The territory catalog is malformed.
    Catalog(CatalogError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPath { field } => write!(f, "{field} is not set"),
            Self::MissingEnv { var } => write!(f, "environment variable {var} is not set"),
            Self::InvalidVersion { found, minimum } => {
                write!(f, "minimum_version {found} is below the supported {minimum}")
            }
            Self::Io { path, source } => write!(f, "reading {}: {source}", path.display()),
            Self::Data(e) => write!(f, "data: {e}"),
            Self::Catalog(e) => write!(f, "catalog: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Data(e) => Some(e),
            Self::Catalog(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DataError> for ConfigError {
    fn from(e: DataError) -> Self {
        Self::Data(e)
    }
}

impl From<CatalogError> for ConfigError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

// ── ContextConfig ──────────────────────────────────────────────────

/// Where to load a [`MapcodeContext`](crate::MapcodeContext) from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextConfig {
    /// The binary data file.
    pub data_path: PathBuf,
    /// The territory catalog text file.
    pub catalog_path: PathBuf,
    /// Data files older than this are rejected.
    pub minimum_version: u16,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::new(),
            catalog_path: PathBuf::new(),
            minimum_version: MIN_VERSION,
        }
    }
}

impl ContextConfig {
    /// Configuration naming both files.
    pub fn new(data_path: impl Into<PathBuf>, catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            catalog_path: catalog_path.into(),
            ..Self::default()
        }
    }

    /// Read the paths from [`DATA_ENV`] and [`TERRITORIES_ENV`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let data = std::env::var_os(DATA_ENV).ok_or(ConfigError::MissingEnv { var: DATA_ENV })?;
        let catalog = std::env::var_os(TERRITORIES_ENV).ok_or(ConfigError::MissingEnv {
            var: TERRITORIES_ENV,
        })?;
        Ok(Self::new(data, catalog))
    }

    /// Check the configuration without touching the filesystem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingPath { field: "data_path" });
        }
        if self.catalog_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingPath {
                field: "catalog_path",
            });
        }
        if self.minimum_version < MIN_VERSION {
            return Err(ConfigError::InvalidVersion {
                found: self.minimum_version,
                minimum: MIN_VERSION,
            });
        }
        Ok(())
    }
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, ConfigError> {
    std::fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
