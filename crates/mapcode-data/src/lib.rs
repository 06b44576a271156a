//! Binary data model for the Mapcode engine.
//!
//! The data model is a flat array of territory records (rectangles plus
//! packed scheme flags) and a first-record table giving each territory a
//! contiguous run of records. It is loaded once and never mutated.
//!
//! # Architecture
//!
//! - [`decode_model`] parses and validates a blob into a [`DataModel`]
//! - [`encode_model`] writes a [`DataModel`] back out byte-for-byte
//! - [`RecordFlags`] is the packed flags word decoded into named fields
//!
//! # Format
//!
//! All integers are little-endian.
//!
//! ```text
//! [MAGIC "MC"] [VERSION u16] [RECORD COUNT u16] [TERRITORY COUNT u16]
//! [FIRST RECORD u16] x (TERRITORY COUNT + 1)
//! [lonMin i32] [latMin i32] [lonMax i32] [latMax i32] [flags u16 | smartDiv u16] x RECORD COUNT
//! ```
//!
//! The last first-record entry equals the record count, so the last record
//! of territory `t` is `first[t + 1] - 1`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod model;
pub mod record;

pub use codec::{decode_model, encode_model};
pub use error::DataError;
pub use model::DataModel;
pub use record::{RecordFlags, RecordType, TerritoryRecord};

/// Magic bytes at the start of every data file.
pub const MAGIC: [u8; 2] = *b"MC";

/// Oldest data format version this build understands.
pub const MIN_VERSION: u16 = 220;

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 8;

/// Size of one record in bytes.
pub const RECORD_LEN: usize = 20;
