//! Mapcode to zone.

use mapcode_alphabet::to_ascii;
use mapcode_core::{MapcodeZone, TerritoryId, MAX_PRECISION};
use mapcode_data::{DataModel, RecordType};
use tracing::trace;

use crate::context::MapcodeContext;
use crate::digits::{decode_char, ENCODE_CHARS};
use crate::{autoheader, grid, nameless, repack};

/// Codes with at least this many characters (dot excluded) are always
/// international.
const INTERNATIONAL_CODE_LEN: usize = 9;

/// Decode `code` within `territory` to the zone it denotes.
///
/// `code` is the bare code with an optional `-extension`, without a
/// territory prefix, in any alphabet; case is ignored. Anything that does
/// not name an area in the territory, malformed input included, gives an
/// empty zone.
pub fn decode_to_zone(ctx: &MapcodeContext, code: &str, territory: TerritoryId) -> MapcodeZone {
    let zone = decode_checked(ctx, code, territory).unwrap_or_else(MapcodeZone::empty);
    trace!(code, territory = territory.0, empty = zone.is_empty(), "decoded mapcode");
    zone
}

fn decode_checked(ctx: &MapcodeContext, code: &str, territory: TerritoryId) -> Option<MapcodeZone> {
    let model = ctx.model();
    if territory.index() >= model.territory_count() {
        return None;
    }
    let upper = to_ascii(code);
    let (base, extension) = match upper.split_once('-') {
        Some((base, ext)) => {
            if ext.is_empty() || ext.len() > MAX_PRECISION || ext.contains('Z') {
                return None;
            }
            (base, ext.as_bytes())
        }
        None => (upper.as_str(), &b""[..]),
    };

    let base = repack::unpack(base.as_bytes())?;
    let dot = base.iter().position(|&c| c == b'.')?;
    if base.iter().filter(|&&c| c == b'.').count() != 1 {
        return None;
    }
    if base.iter().any(|&c| c != b'.' && decode_char(c) < 0) {
        return None;
    }

    let code_len = base.len() - 1;
    let mut territory = territory;
    if code_len >= INTERNATIONAL_CODE_LEN {
        territory = ctx.catalog().international();
    } else if let Some(parent) = ctx.catalog().parent(territory) {
        let long = ctx.catalog().get(parent).long_code_length;
        if long.is_some_and(|n| code_len >= usize::from(n)) {
            territory = parent;
        }
    }
    if dot > 9 || code_len - dot > 9 {
        return None;
    }
    let codex = (10 * dot + code_len - dot) as u8;

    let from = model.first_record(territory);
    let upto = model.last_record(territory);
    let zone = decode_in_range(model, &base, codex, from, upto, extension);
    if zone.is_empty() {
        return Some(zone);
    }
    Some(zone.restrict_to(&model.boundary(upto)))
}

/// Find the first record of `from..=upto` that can have produced a code
/// of shape `codex` and decode with its scheme.
fn decode_in_range(
    model: &DataModel,
    code: &[u8],
    codex: u8,
    from: usize,
    upto: usize,
    extension: &[u8],
) -> MapcodeZone {
    for i in from..=upto {
        let rec = model.record(i);
        let rec_codex = rec.flags.codex;
        match rec.flags.record_type {
            RecordType::None if rec.flags.nameless => {
                if matches!((rec_codex, codex), (21, 22) | (22, 32) | (13, 23)) {
                    return nameless::decode(model, code, i, from, upto, extension);
                }
            }
            RecordType::None => {
                if rec_codex == codex || (codex == 22 && rec_codex == 21) {
                    let zone = grid::decode(rec, code, extension).restrict_to(&model.boundary(upto));
                    if rec.flags.restricted && !zone.is_empty() {
                        return resolve_restricted(model, zone, i, from);
                    }
                    return zone;
                }
            }
            RecordType::Pipe => {
                let letter = ENCODE_CHARS[usize::from(rec.flags.header_letter)];
                if codex == rec_codex + 10 && code.first() == Some(&letter) {
                    return grid::decode(rec, &code[1..], extension);
                }
            }
            RecordType::Plus | RecordType::Star => {
                if matches!((codex, rec_codex), (23, 22) | (33, 23)) {
                    return autoheader::decode(model, code, i, upto, extension);
                }
            }
        }
    }
    MapcodeZone::empty()
}

/// A restricted record's codes only stand for area of exactly one
/// earlier non-restricted sibling.
///
/// If the zone's midpoint lies in such a sibling the zone is kept as is.
/// Otherwise the zone is clipped to the one sibling it overlaps; no
/// overlap, or overlap with several siblings, leaves nothing.
fn resolve_restricted(model: &DataModel, zone: MapcodeZone, i: usize, from: usize) -> MapcodeZone {
    let Some(center) = zone.center_micro() else {
        return MapcodeZone::empty();
    };
    let open = |j: &usize| !model.record(*j).flags.restricted;
    if (from..i)
        .rev()
        .filter(open)
        .any(|j| model.boundary(j).contains(&center))
    {
        return zone;
    }

    let mut overlaps = (from..i)
        .filter(open)
        .map(|j| zone.restrict_to(&model.boundary(j)))
        .filter(|z| !z.is_empty());
    match (overlaps.next(), overlaps.next()) {
        (Some(only), None) => only,
        _ => MapcodeZone::empty(),
    }
}
