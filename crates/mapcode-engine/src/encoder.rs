//! Point to mapcodes.

use mapcode_core::{Mapcode, MicroPoint, TerritoryId, MAX_PRECISION};
use smallvec::{smallvec, SmallVec};
use tracing::trace;

use crate::context::MapcodeContext;
use crate::digits::to_string;
use crate::extension::encode_extension;
use crate::{autoheader, grid, nameless, repack};

/// Options for [`encode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Extension characters to append, `0..=8`. Larger values are capped.
    pub precision: usize,
    /// Return after the first code found.
    pub stop_at_first: bool,
}

impl EncodeOptions {
    /// Options with the given precision.
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision: precision.min(MAX_PRECISION),
            ..Self::default()
        }
    }

    /// The same options, stopping at the first code.
    pub fn first_only(mut self) -> Self {
        self.stop_at_first = true;
        self
    }
}

/// All mapcodes of a point, most specific territory first and the
/// international code last.
///
/// With a `filter` only that territory's codes are returned (for a
/// subdivision, including the codes its parent yields for it). The
/// result is empty for a non-finite coordinate or when the filter does
/// not cover the point.
pub fn encode(
    ctx: &MapcodeContext,
    lat_deg: f64,
    lon_deg: f64,
    filter: Option<TerritoryId>,
    options: EncodeOptions,
) -> Vec<Mapcode> {
    match MicroPoint::from_deg(lat_deg, lon_deg) {
        Some(p) => encode_point(ctx, &p, filter, options),
        None => Vec::new(),
    }
}

/// [`encode`] for a point already split into microdegrees and fractions.
pub fn encode_point(
    ctx: &MapcodeContext,
    p: &MicroPoint,
    filter: Option<TerritoryId>,
    options: EncodeOptions,
) -> Vec<Mapcode> {
    let mut out = Vec::new();
    encode_into(ctx, p, filter, None, options, &mut out);
    trace!(
        lat = p.lat_micro,
        lon = p.lon_micro,
        codes = out.len(),
        "encoded point"
    );
    out
}

/// The single international mapcode of a point.
pub fn encode_to_international(
    ctx: &MapcodeContext,
    lat_deg: f64,
    lon_deg: f64,
    precision: usize,
) -> Option<Mapcode> {
    let international = ctx.catalog().international();
    encode_to_shortest(ctx, lat_deg, lon_deg, international, precision)
}

/// The shortest mapcode of a point within `territory`, `None` if the
/// territory does not cover the point.
pub fn encode_to_shortest(
    ctx: &MapcodeContext,
    lat_deg: f64,
    lon_deg: f64,
    territory: TerritoryId,
    precision: usize,
) -> Option<Mapcode> {
    let options = EncodeOptions::with_precision(precision).first_only();
    encode(ctx, lat_deg, lon_deg, Some(territory), options)
        .into_iter()
        .next()
}

/// Append the codes of `p` to `out`, labelled with `label` when set.
fn encode_into(
    ctx: &MapcodeContext,
    p: &MicroPoint,
    filter: Option<TerritoryId>,
    label: Option<TerritoryId>,
    options: EncodeOptions,
    out: &mut Vec<Mapcode>,
) {
    let model = ctx.model();
    let territories: SmallVec<[TerritoryId; 8]> = match filter {
        Some(t) => smallvec![t],
        None => ctx.index().candidate_territories(p),
    };

    for t in territories {
        if t.index() >= model.territory_count() {
            continue;
        }
        let from = model.first_record(t);
        let upto = model.last_record(t);
        if !model.boundary(upto).contains(p) {
            continue;
        }
        let mut found = 0usize;
        for i in from..=upto {
            let rec = model.record(i);
            if !rec.boundary.contains(p) {
                continue;
            }
            let encoded = if rec.flags.nameless {
                nameless::encode(model, i, from, upto, p)
            } else if rec.flags.record_type.is_auto_header() {
                autoheader::encode(model, i, from, upto, p)
            } else if let (true, Some(parent)) = (i == upto, ctx.catalog().parent(t)) {
                // A subdivision's outer record is covered by its parent.
                encode_into(ctx, p, Some(parent), Some(t), options, out);
                if options.stop_at_first && !out.is_empty() {
                    return;
                }
                continue;
            } else if !rec.flags.restricted || found > 0 {
                grid::encode(rec, p)
            } else {
                None
            };

            let Some(encoded) = encoded else { continue };
            let mut code = encoded.code;
            repack::pack(&mut code);
            encode_extension(&mut code, p, encoded.cell, options.precision);
            let mapcode = Mapcode::new(to_string(&code), label.unwrap_or(t));
            if !out.contains(&mapcode) {
                out.push(mapcode);
            }
            found += 1;
            if options.stop_at_first {
                return;
            }
        }
    }
}
