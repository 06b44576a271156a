//! Mapcode: short codes for locations on Earth.
//!
//! A mapcode such as `NLD 49.4V` names a small rectangle within a
//! territory; the same point also has a longer international code that
//! needs no territory. This facade crate re-exports the sub-crates and
//! adds input-checked wrappers with typed errors.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use mapcode::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = MapcodeContext::from_config(&ContextConfig::from_env()?)?;
//! let nld = territory_from_name(&ctx, "NLD", None)?;
//! let code = encode_to_shortest(&ctx, 52.376514, 4.908542, nld, 0)?;
//! println!("{}", code.code_with_territory(ctx.catalog()));
//! let point = decode(&ctx, "NLD 49.4V", None)?;
//! println!("{point}");
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mapcode-core` | points, boundaries, zones, territories, [`Mapcode`](types::Mapcode) |
//! | [`data`] | `mapcode-data` | the binary record model and its codec |
//! | [`index`] | `mapcode-index` | the spatial sub-area index |
//! | [`engine`] | `mapcode-engine` | the context, encoder and decoder |
//! | [`alphabet`] | `mapcode-alphabet` | transliteration into 28 scripts |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod parse;
pub mod shared;

pub use api::{
    code_in_alphabet, decode, decode_to_rectangle, encode, encode_to_international,
    encode_to_shortest, encode_with_precision, territory_from_name,
};
pub use error::MapcodeError;
pub use parse::{is_valid_mapcode_format, parse_mapcode, ParsedMapcode};

/// Geometry, territory and result types (`mapcode-core`).
pub use mapcode_core as types;

/// The binary record model (`mapcode-data`).
pub use mapcode_data as data;

/// The spatial index (`mapcode-index`).
pub use mapcode_index as index;

/// Context, encoder and decoder without input checking (`mapcode-engine`).
pub use mapcode_engine as engine;

/// Transliteration (`mapcode-alphabet`).
pub use mapcode_alphabet as alphabet;

/// Common imports.
///
/// ```rust
/// use mapcode::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mapcode_core::{
        safe_max_offset_in_meters, Alphabet, Mapcode, Point, Rectangle, TerritoryId,
        MAX_PRECISION,
    };

    // Context
    pub use mapcode_engine::{ConfigError, ContextConfig, MapcodeContext};

    // Operations
    pub use crate::api::{
        code_in_alphabet, decode, decode_to_rectangle, encode, encode_to_international,
        encode_to_shortest, encode_with_precision, territory_from_name,
    };

    // Scripts
    pub use mapcode_alphabet::WriteIn;

    // Errors
    pub use crate::error::MapcodeError;
}
