//! Auto-header codes.
//!
//! A run of adjacent plus/star records with the same codex is one linear
//! number space. Each record takes a block of `961 * 31` codes per
//! 168 x 176 cell group it covers; a plus record then rounds its end up
//! to the next multiple of the run modulus. The prefix numbers the cell
//! group across the whole run and the three-character postfix the cell
//! inside it.

use mapcode_core::{MapcodeZone, MicroPoint};
use mapcode_data::{DataModel, RecordType, TerritoryRecord};

use crate::digits::{decode_base31, decode_triple, encode_base31, encode_triple, x_divider};
use crate::extension::{decode_extension, CellCode, DecodedCell, ExtensionCell, LatDirection};
use crate::grid::wrap_offset;

const GROUP: i64 = 961 * 31;
const GROUP_X: i64 = 168;
const GROUP_Y: i64 = 176;

fn in_run(rec: &TerritoryRecord, codex: u8) -> bool {
    rec.flags.record_type.is_auto_header() && rec.flags.codex == codex
}

fn ceil_div(a: i64, b: i64) -> i64 {
    (a + b - 1) / b
}

/// Cell counts and code capacity of one record of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Dims {
    /// Rows, a multiple of 176.
    rows: i64,
    /// Columns, a multiple of 168.
    cols: i64,
    /// Codes the record takes from the run's number space.
    product: i64,
}

fn dims(rec: &TerritoryRecord, codex: u8, storage: i64) -> Dims {
    let b = rec.boundary;
    let rows = ceil_div(i64::from(b.height()), 90);
    let x_div = i64::from(x_divider(b.lat_min, b.lat_max));
    let cols = ceil_div(i64::from(b.width()) * 4, x_div);
    let rows = GROUP_Y * ceil_div(rows, GROUP_Y);
    let cols = GROUP_X * ceil_div(cols, GROUP_X);
    let mut product = (cols / GROUP_X) * (rows / GROUP_Y) * GROUP;
    if rec.flags.record_type == RecordType::Plus {
        let modulus = if codex >= 23 { 961 * 961 * 31 } else { 961 * 961 };
        product = ceil_div(storage + product, modulus) * modulus - storage;
    }
    Dims { rows, cols, product }
}

/// Auto-header code of `p` in record `m` of the territory spanning
/// `from..=upto`.
pub(crate) fn encode(model: &DataModel, m: usize, from: usize, upto: usize, p: &MicroPoint) -> Option<CellCode> {
    let codex = model.record(m).flags.codex;
    let code_len = model.record(m).flags.code_len();
    if code_len < 3 {
        return None;
    }
    let mut first = m;
    while first > from && in_run(model.record(first - 1), codex) {
        first -= 1;
    }

    let mut storage = 0i64;
    for i in first..=upto {
        let rec = model.record(i);
        if !in_run(rec, codex) {
            break;
        }
        let d = dims(rec, codex, storage);
        if i != m {
            storage += d.product;
            continue;
        }

        let b = rec.boundary;
        let dvx = ceil_div(i64::from(b.width()), d.cols);
        let lon = i64::from(wrap_offset(p.lon_micro - b.lon_min));
        let vx = lon / dvx;
        let extra_x = lon % dvx;
        let dvy = ceil_div(i64::from(b.height()), d.rows);
        let from_top = i64::from(b.lat_max - p.lat_micro);
        let mut vy = from_top / dvy;
        let mut extra_y = from_top % dvy;
        if extra_y == 0 && p.lat_fraction > 0 {
            vy -= 1;
            extra_y += dvy;
        }
        let value = (vx / GROUP_X) * (d.rows / GROUP_Y) + vy / GROUP_Y;

        let mut code = Vec::with_capacity(code_len + 1);
        encode_base31(&mut code, storage / GROUP + value, code_len - 2);
        code.push(b'.');
        encode_triple(&mut code, (vx % GROUP_X) as i32, (vy % GROUP_Y) as i32);
        return Some(CellCode {
            code,
            cell: ExtensionCell {
                extra_x4: extra_x << 2,
                extra_y,
                divider_x4: dvx << 2,
                divider_y: dvy,
                direction: LatDirection::South,
            },
        });
    }
    None
}

/// Zone of an auto-header `code` for the run starting at record `m`.
pub(crate) fn decode(model: &DataModel, code: &[u8], m: usize, upto: usize, extension: &[u8]) -> MapcodeZone {
    decode_cell(model, code, m, upto, extension).unwrap_or_else(MapcodeZone::empty)
}

fn decode_cell(model: &DataModel, code: &[u8], m: usize, upto: usize, extension: &[u8]) -> Option<MapcodeZone> {
    let codex = model.record(m).flags.codex;
    let value = decode_base31(code)? * GROUP;
    let (tri_lat, tri_lon) = decode_triple(code.get(code.len().checked_sub(3)?..)?)?;

    let mut storage = 0i64;
    for i in m..=upto {
        let rec = model.record(i);
        if !in_run(rec, codex) {
            break;
        }
        let d = dims(rec, codex, storage);
        if value < storage || value >= storage + d.product {
            storage += d.product;
            continue;
        }

        let b = rec.boundary;
        let dvx = ceil_div(i64::from(b.width()), d.cols);
        let dvy = ceil_div(i64::from(b.height()), d.rows);
        let group = (value - storage) / GROUP;
        let groups_y = d.rows / GROUP_Y;
        let vx = i64::from(tri_lon) + GROUP_X * (group / groups_y);
        let vy = i64::from(tri_lat) + GROUP_Y * (group % groups_y);
        let lat = i64::from(b.lat_max) - vy * dvy;
        let lon = i64::from(b.lon_min) + vx * dvx;
        if lon < i64::from(b.lon_min)
            || lon >= i64::from(b.lon_max)
            || lat < i64::from(b.lat_min)
            || lat > i64::from(b.lat_max)
        {
            return None;
        }
        return Some(decode_extension(
            DecodedCell {
                lat: lat as i32,
                lon: lon as i32,
                divider_x4: dvx << 2,
                divider_y: -dvy,
                lon_offset4: 0,
                extreme_lat: b.lat_min,
                max_lon: b.lon_max,
            },
            extension,
        ));
    }
    None
}
