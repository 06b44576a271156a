//! High-precision extension digits.
//!
//! Each extension character refines the remaining offset inside a cell.
//! Characters come in pairs: the first splits the cell 5 x 6 (lat x lon),
//! the second splits each of those parts 6 x 5, so a pair divides the
//! cell 30 x 30. Eight characters refine one microdegree exactly into
//! fractions (30^4 x 4*30^4).

use mapcode_core::point::{LAT_FRACTIONS_PER_MICRODEG, LON_FRACTIONS_PER_MICRODEG};
use mapcode_core::{MapcodeZone, MicroPoint, MAX_PRECISION};

use crate::digits::{decode_char, ENCODE_CHARS};

/// Direction of the latitude axis inside a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LatDirection {
    /// Cell numbered from its southern edge.
    North,
    /// Cell numbered from its northern edge.
    South,
}

/// A cell and the point's offset inside it, ready for refinement.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ExtensionCell {
    /// Longitude offset into the cell in quarter microdegrees.
    pub extra_x4: i64,
    /// Latitude offset into the cell in microdegrees.
    pub extra_y: i64,
    /// Cell width in quarter microdegrees.
    pub divider_x4: i64,
    /// Cell height in microdegrees.
    pub divider_y: i64,
    /// Axis direction of `extra_y`.
    pub direction: LatDirection,
}

/// A base code from one scheme and the cell its extension refines.
#[derive(Clone, Debug)]
pub(crate) struct CellCode {
    /// ASCII code with its dot, before repacking.
    pub code: Vec<u8>,
    /// Where the point lies inside the code's cell.
    pub cell: ExtensionCell,
}

/// Append `-` and `precision` extension characters for `p` in `cell`.
/// Nothing is appended for precision 0.
pub(crate) fn encode_extension(out: &mut Vec<u8>, p: &MicroPoint, cell: ExtensionCell, precision: usize) {
    let mut digits = precision.min(MAX_PRECISION);
    if digits == 0 {
        return;
    }
    let mut factor_x = LAT_FRACTIONS_PER_MICRODEG * cell.divider_x4;
    let mut factor_y = LAT_FRACTIONS_PER_MICRODEG * cell.divider_y;
    let lat_fraction = match cell.direction {
        LatDirection::North => p.lat_fraction,
        LatDirection::South => -p.lat_fraction,
    };
    let mut vx = (LAT_FRACTIONS_PER_MICRODEG * cell.extra_x4 + p.lon_fraction).clamp(0, factor_x - 1);
    let mut vy = (LAT_FRACTIONS_PER_MICRODEG * cell.extra_y + lat_fraction).clamp(0, factor_y - 1);

    out.push(b'-');
    loop {
        factor_x /= 30;
        let gx = vx / factor_x;
        factor_y /= 30;
        let gy = vy / factor_y;
        out.push(ENCODE_CHARS[((gy / 5) * 5 + gx / 6) as usize]);
        digits -= 1;
        if digits == 0 {
            break;
        }
        out.push(ENCODE_CHARS[((gy % 5) * 6 + gx % 6) as usize]);
        digits -= 1;
        if digits == 0 {
            break;
        }
        vx -= factor_x * gx;
        vy -= factor_y * gy;
    }
}

/// Geometry of a decoded cell, the inverse of [`ExtensionCell`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct DecodedCell {
    /// Latitude of the numbering edge (south edge, or north edge when
    /// `divider_y` is negative), microdegrees.
    pub lat: i32,
    /// West edge, microdegrees.
    pub lon: i32,
    /// Cell width in quarter microdegrees.
    pub divider_x4: i64,
    /// Signed cell height in microdegrees; negative grows southward.
    pub divider_y: i64,
    /// Sub-microdegree west-edge offset in quarter microdegrees.
    pub lon_offset4: i64,
    /// Latitude the zone must not cross, microdegrees.
    pub extreme_lat: i32,
    /// East limit of the zone, microdegrees.
    pub max_lon: i32,
}

/// The zone of `cell` refined by the extension characters. An invalid
/// extension character gives an empty zone.
pub(crate) fn decode_extension(cell: DecodedCell, extension: &[u8]) -> MapcodeZone {
    let mut proc: i64 = 1;
    let mut lon32: i64 = 0;
    let mut lat32: i64 = 0;
    let mut odd = false;

    let extension = &extension[..extension.len().min(MAX_PRECISION)];
    for pair in extension.chunks(2) {
        let c1 = decode_char(pair[0]);
        if c1 < 0 || c1 == 30 {
            return MapcodeZone::empty();
        }
        let (y1, x1) = (i64::from(c1 / 5), i64::from(c1 % 5));
        let (y2, x2) = match pair.get(1) {
            Some(&c) => {
                let c2 = decode_char(c);
                if c2 < 0 || c2 == 30 {
                    return MapcodeZone::empty();
                }
                (i64::from(c2 / 6), i64::from(c2 % 6))
            }
            None => {
                odd = true;
                (0, 0)
            }
        };
        proc *= 30;
        lon32 = lon32 * 30 + x1 * 6 + x2;
        lat32 = lat32 * 30 + y1 * 5 + y2;
    }

    let scale = LAT_FRACTIONS_PER_MICRODEG / proc;
    let dx4 = cell.divider_x4 * scale;
    let dy = cell.divider_y * scale;
    let lon4 = i64::from(cell.lon) * LON_FRACTIONS_PER_MICRODEG
        + lon32 * dx4
        + cell.lon_offset4 * LAT_FRACTIONS_PER_MICRODEG;
    let lat1 = i64::from(cell.lat) * LAT_FRACTIONS_PER_MICRODEG + lat32 * dy;

    let (lat_delta, lon_delta) = if odd { (5 * dy, 6 * dx4) } else { (dy, dx4) };
    let mut zone = MapcodeZone::from_fractions(lat1 as f64, lon4 as f64, lat_delta as f64, lon_delta as f64);
    zone.clip_lon_max((i64::from(cell.max_lon) * LON_FRACTIONS_PER_MICRODEG) as f64);
    let extreme = (i64::from(cell.extreme_lat) * LAT_FRACTIONS_PER_MICRODEG) as f64;
    if cell.divider_y >= 0 {
        zone.clip_lat_max(extreme);
    } else {
        zone.clip_lat_min(extreme);
    }
    zone
}
