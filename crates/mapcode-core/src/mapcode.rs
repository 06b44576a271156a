//! The [`Mapcode`] result type and precision tables.

use std::fmt;

use crate::territory::{TerritoryCatalog, TerritoryId};

/// Highest number of extension digits the encoder produces.
pub const MAX_PRECISION: usize = 8;

/// Largest distance between an encoded point and the center of its decoded
/// zone, per precision.
const SAFE_MAX_OFFSET_METERS: [f64; MAX_PRECISION + 1] = [
    7.49, 1.39, 0.251, 0.0462, 0.00837, 0.00154, 0.000279, 0.0000514, 0.0000093,
];

/// Worst-case distance in meters between a point and the decoded center
/// of any of its mapcodes at `precision`. Precisions beyond
/// [`MAX_PRECISION`] are treated as [`MAX_PRECISION`].
pub fn safe_max_offset_in_meters(precision: usize) -> f64 {
    SAFE_MAX_OFFSET_METERS[precision.min(MAX_PRECISION)]
}

/// One encoding of a point: a code plus the territory it is valid in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mapcode {
    code: String,
    territory: TerritoryId,
}

impl Mapcode {
    /// Pair a code (with its optional `-extension`) with a territory.
    pub fn new(code: impl Into<String>, territory: TerritoryId) -> Self {
        Self {
            code: code.into(),
            territory,
        }
    }

    /// The code, e.g. `49.4V` or `49.4V-K2`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The territory the code is valid in.
    pub fn territory(&self) -> TerritoryId {
        self.territory
    }

    /// The code without its extension.
    pub fn code_without_extension(&self) -> &str {
        match self.code.split_once('-') {
            Some((base, _)) => base,
            None => &self.code,
        }
    }

    /// Number of extension digits.
    pub fn precision(&self) -> usize {
        self.code
            .split_once('-')
            .map_or(0, |(_, ext)| ext.chars().count())
    }

    /// `TERRITORY CODE`, e.g. `NLD 49.4V`.
    pub fn code_with_territory(&self, catalog: &TerritoryCatalog) -> String {
        format!("{} {}", catalog.code(self.territory), self.code)
    }
}

impl fmt::Display for Mapcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
