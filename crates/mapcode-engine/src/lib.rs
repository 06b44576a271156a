//! Mapcode encoder and decoder.
//!
//! A [`MapcodeContext`] bundles the territory catalog, the record model
//! and the spatial index. [`encoder::encode`] turns a coordinate into all
//! of its mapcodes and [`decoder::decode_to_zone`] turns a code back into
//! the area it stands for. Both are pure functions of the context.
//!
//! Records are encoded by one of three schemes, chosen by their flags:
//! grid (optionally with a header letter), nameless runs and auto-header
//! runs. Every scheme can append up to eight extension characters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod autoheader;
pub mod border;
pub mod config;
pub mod context;
pub mod decoder;
mod digits;
pub mod encoder;
mod extension;
mod grid;
mod nameless;
mod repack;

pub use border::is_near_multiple_borders;
pub use config::{ConfigError, ContextConfig};
pub use context::MapcodeContext;
pub use decoder::decode_to_zone;
pub use encoder::{encode, encode_point, encode_to_international, encode_to_shortest, EncodeOptions};
