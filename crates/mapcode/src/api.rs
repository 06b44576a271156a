//! Encode and decode with input checking and typed errors.
//!
//! The engine functions never fail: they return an empty list or zone.
//! These wrappers validate their input first and turn "nothing found"
//! into a [`MapcodeError`].
//!
//! The checks are stricter than the engine: a latitude outside
//! `[-90, 90]` is an [`MapcodeError::IllegalArgument`] here, while the
//! engine clamps it to the pole.

use mapcode_alphabet::{Alphabet, WriteIn};
use mapcode_core::{Mapcode, MapcodeZone, Point, Rectangle, TerritoryId, MAX_PRECISION};
use mapcode_engine::{encoder, EncodeOptions, MapcodeContext};
use tracing::debug;

use crate::error::MapcodeError;
use crate::parse::parse_mapcode;

// ── Argument checks ─────────────────────────────────────────────

fn check_coordinate(lat_deg: f64, lon_deg: f64) -> Result<(), MapcodeError> {
    if !lat_deg.is_finite() || !(-90.0..=90.0).contains(&lat_deg) {
        return Err(MapcodeError::illegal(format!(
            "latitude {lat_deg} is outside [-90, 90]"
        )));
    }
    if !lon_deg.is_finite() {
        return Err(MapcodeError::illegal(format!("longitude {lon_deg} is not finite")));
    }
    Ok(())
}

fn check_precision(precision: usize) -> Result<(), MapcodeError> {
    if precision > MAX_PRECISION {
        return Err(MapcodeError::illegal(format!(
            "precision {precision} is above {MAX_PRECISION}"
        )));
    }
    Ok(())
}

/// Resolve a territory name (code, alias or number) in the context's
/// catalog.
pub fn territory_from_name(
    ctx: &MapcodeContext,
    name: &str,
    context: Option<TerritoryId>,
) -> Result<TerritoryId, MapcodeError> {
    ctx.catalog()
        .lookup(name, context)
        .ok_or_else(|| MapcodeError::UnknownTerritory {
            name: name.to_string(),
        })
}

// ── Encoding ────────────────────────────────────────────────────

/// All mapcodes of a point, most specific first and the international
/// code last. With `filter`, only that territory's codes (possibly none).
///
/// Fails with [`MapcodeError::IllegalArgument`] for a latitude outside
/// `[-90, 90]` (the engine would clamp it) or a non-finite coordinate.
pub fn encode(
    ctx: &MapcodeContext,
    lat_deg: f64,
    lon_deg: f64,
    filter: Option<TerritoryId>,
) -> Result<Vec<Mapcode>, MapcodeError> {
    encode_with_precision(ctx, lat_deg, lon_deg, filter, 0)
}

/// [`encode`] with `precision` extension characters on every code.
pub fn encode_with_precision(
    ctx: &MapcodeContext,
    lat_deg: f64,
    lon_deg: f64,
    filter: Option<TerritoryId>,
    precision: usize,
) -> Result<Vec<Mapcode>, MapcodeError> {
    check_coordinate(lat_deg, lon_deg)?;
    check_precision(precision)?;
    Ok(encoder::encode(
        ctx,
        lat_deg,
        lon_deg,
        filter,
        EncodeOptions::with_precision(precision),
    ))
}

/// The shortest mapcode of a point in `territory`.
pub fn encode_to_shortest(
    ctx: &MapcodeContext,
    lat_deg: f64,
    lon_deg: f64,
    territory: TerritoryId,
    precision: usize,
) -> Result<Mapcode, MapcodeError> {
    check_coordinate(lat_deg, lon_deg)?;
    check_precision(precision)?;
    encoder::encode_to_shortest(ctx, lat_deg, lon_deg, territory, precision)
        .ok_or(MapcodeError::NotCovered)
}

/// The international mapcode of a point.
pub fn encode_to_international(
    ctx: &MapcodeContext,
    lat_deg: f64,
    lon_deg: f64,
    precision: usize,
) -> Result<Mapcode, MapcodeError> {
    check_coordinate(lat_deg, lon_deg)?;
    check_precision(precision)?;
    encoder::encode_to_international(ctx, lat_deg, lon_deg, precision)
        .ok_or(MapcodeError::NotCovered)
}

/// A mapcode's code written in `alphabet`.
pub fn code_in_alphabet(mapcode: &Mapcode, alphabet: Alphabet) -> String {
    mapcode.code_in(alphabet)
}

// ── Decoding ────────────────────────────────────────────────────

fn decode_zone(
    ctx: &MapcodeContext,
    text: &str,
    default_territory: Option<TerritoryId>,
) -> Result<MapcodeZone, MapcodeError> {
    let parsed = parse_mapcode(text)?;
    let territory = match &parsed.territory {
        Some(name) => territory_from_name(ctx, name, default_territory)?,
        None => default_territory.unwrap_or_else(|| ctx.catalog().international()),
    };
    let zone = ctx.decode_to_zone(&parsed.code, territory);
    if zone.is_empty() {
        debug!(text, territory = territory.0, "mapcode does not decode");
        return Err(MapcodeError::UnknownMapcode {
            code: text.to_string(),
        });
    }
    Ok(zone)
}

/// The center of the area a mapcode denotes.
///
/// `text` may carry its own territory (`"NLD 49.4V"`); otherwise
/// `default_territory` applies, and without either the code is taken to
/// be international. A territory prefix that names a subdivision's short
/// code is resolved relative to `default_territory`.
pub fn decode(
    ctx: &MapcodeContext,
    text: &str,
    default_territory: Option<TerritoryId>,
) -> Result<Point, MapcodeError> {
    decode_zone(ctx, text, default_territory)?
        .center()
        .ok_or_else(|| MapcodeError::UnknownMapcode {
            code: text.to_string(),
        })
}

/// The area a mapcode denotes.
pub fn decode_to_rectangle(
    ctx: &MapcodeContext,
    text: &str,
    default_territory: Option<TerritoryId>,
) -> Result<Rectangle, MapcodeError> {
    decode_zone(ctx, text, default_territory)?
        .to_rectangle()
        .ok_or_else(|| MapcodeError::UnknownMapcode {
            code: text.to_string(),
        })
}
