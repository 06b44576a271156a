//! Core types for the Mapcode engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! geometric value types shared by the data model, the spatial index, the
//! encoder and the decoder:
//!
//! - [`Point`] / [`MicroPoint`]: degrees and the microdegree-plus-fraction
//!   representation the numbering schemes operate on
//! - [`Boundary`]: a record rectangle with longitude-wraparound containment
//! - [`MapcodeZone`]: the fractional rectangle produced by a decode
//! - [`TerritoryCatalog`]: territory codes, parents and aliases
//! - [`Mapcode`]: an encoded result

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod boundary;
pub mod error;
pub mod mapcode;
pub mod point;
pub mod territory;
pub mod zone;

pub use alphabet::Alphabet;
pub use boundary::Boundary;
pub use error::CatalogError;
pub use mapcode::{safe_max_offset_in_meters, Mapcode, MAX_PRECISION};
pub use point::{MicroPoint, Point};
pub use territory::{TerritoryCatalog, TerritoryId, TerritoryInfo};
pub use zone::{MapcodeZone, Rectangle};
