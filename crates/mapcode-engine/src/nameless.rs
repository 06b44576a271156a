//! Nameless codes.
//!
//! A run of adjacent nameless records with the same codex shares one
//! number space. The space is split so that every record of the run gets
//! some leading characters of its own, however many records there are:
//!
//! * up to 31 records: each gets `31 / A` leading characters, and the
//!   first `31 % A` get one more;
//! * up to 61 records: the first `62 - A` get a full leading character,
//!   the rest share one between two (the second half starting at
//!   `16 * 961 * 31`);
//! * otherwise (and always for codex 21) the space is cut into equal
//!   slices of a derived size.
//!
//! Cells are 90 microdegrees high and `x_divider / 4` wide, numbered
//! down from the record's northern edge.

use mapcode_core::{MapcodeZone, MicroPoint};
use mapcode_data::{DataModel, TerritoryRecord};

use crate::digits::{
    decode_base31, decode_char, decode_six_wide, encode_base31, encode_six_wide, insert_dot, swap,
    x_divider,
};
use crate::extension::{decode_extension, CellCode, DecodedCell, ExtensionCell, LatDirection};
use crate::grid::wrap_offset;

const SQUARE: i64 = 961 * 961;
const HALF_SHARE: i64 = 16 * 961 * 31;
const CELL_HEIGHT: i32 = 90;

fn in_run(rec: &TerritoryRecord, codex: u8) -> bool {
    rec.flags.nameless && rec.flags.codex == codex
}

/// First record of the nameless run holding `m`, not before `from`.
fn run_start(model: &DataModel, m: usize, from: usize) -> usize {
    let codex = model.record(m).flags.codex;
    let mut i = m;
    while i > from && in_run(model.record(i - 1), codex) {
        i -= 1;
    }
    i
}

/// Number of records in the run holding `m`, not past `upto`.
fn run_len(model: &DataModel, m: usize, from: usize, upto: usize) -> usize {
    let start = run_start(model, m, from);
    let codex = model.record(start).flags.codex;
    (start..=upto)
        .take_while(|&j| in_run(model.record(j), codex))
        .count()
}

/// Size of the slice of each record when the space is cut evenly.
fn base_per_record(codex: u8, count: i64) -> i64 {
    let base = if codex == 21 { SQUARE } else { SQUARE * 31 };
    let per = base / count;
    if count == 62 {
        per + 1
    } else {
        961 * (per / 961)
    }
}

/// Number space used by the records of the run before record `index`.
fn storage_before(codex: u8, count: i64, index: i64) -> i64 {
    let p = 31 / count;
    let r = 31 % count;
    if codex != 21 && count <= 31 {
        (index * p + index.min(r)) * SQUARE
    } else if codex != 21 && count < 62 {
        if index < 62 - count {
            index * SQUARE
        } else {
            let mut s = ((62 - count) + (index - 62 + count) / 2) * SQUARE;
            if (index + count) & 1 == 1 {
                s += HALF_SHARE;
            }
            s
        }
    } else {
        index * base_per_record(codex, count)
    }
}

/// Cell layout of a record: `(rows, columns)`.
fn sides(rec: &TerritoryRecord) -> Option<(i32, i32)> {
    let side = i32::from(rec.smart_div);
    if side <= 0 {
        return None;
    }
    if rec.flags.special_shape {
        let rows = 1 + rec.boundary.height() / CELL_HEIGHT;
        Some((rows, side * side / rows))
    } else {
        Some((side, side))
    }
}

/// Nameless code of `p` in record `m` of the territory spanning
/// `from..=upto`.
pub(crate) fn encode(model: &DataModel, m: usize, from: usize, upto: usize, p: &MicroPoint) -> Option<CellCode> {
    let rec = model.record(m);
    let codex = rec.flags.codex;
    let code_len = rec.flags.code_len();
    let first = run_start(model, m, from);
    let count = run_len(model, m, from, upto) as i64;
    let storage = storage_before(codex, count, (m - first) as i64);

    let (rows, cols) = sides(rec)?;
    let b = rec.boundary;
    let dx4 = i64::from(x_divider(b.lat_min, b.lat_max));
    let lon_quarter = p.lon_fraction / 810_000;
    let lon = i64::from(wrap_offset(p.lon_micro - b.lon_min));
    let dx = (4 * lon + lon_quarter) / dx4;
    let extra_x4 = lon * 4 - dx * dx4;
    let from_top = b.lat_max - p.lat_micro;
    let mut dy = from_top / CELL_HEIGHT;
    let mut extra_y = from_top % CELL_HEIGHT;
    if extra_y == 0 && p.lat_fraction > 0 {
        dy -= 1;
        extra_y += CELL_HEIGHT;
    }

    let v = storage
        + if rec.flags.special_shape {
            encode_six_wide(dx as i32, rows - 1 - dy, cols, rows)
        } else {
            dx * i64::from(rows) + i64::from(dy)
        };
    let mut code = Vec::with_capacity(code_len + 2);
    encode_base31(&mut code, v, code_len + 1);
    match code_len {
        3 => insert_dot(&mut code, 2),
        4 => {
            if codex == 22 && count < 62 && rec.smart_div == 961 && !rec.flags.special_shape {
                swap(&mut code, 2, 3);
            }
            insert_dot(&mut code, if codex == 13 { 2 } else { 3 });
        }
        _ => return None,
    }

    Some(CellCode {
        code,
        cell: ExtensionCell {
            extra_x4,
            extra_y: i64::from(extra_y),
            divider_x4: dx4,
            divider_y: i64::from(CELL_HEIGHT),
            direction: LatDirection::South,
        },
    })
}

/// Zone of a nameless `code` for the run starting at record `m`.
pub(crate) fn decode(
    model: &DataModel,
    code: &[u8],
    m: usize,
    from: usize,
    upto: usize,
    extension: &[u8],
) -> MapcodeZone {
    decode_cell(model, code, m, from, upto, extension).unwrap_or_else(MapcodeZone::empty)
}

fn decode_cell(
    model: &DataModel,
    code: &[u8],
    m: usize,
    from: usize,
    upto: usize,
    extension: &[u8],
) -> Option<MapcodeZone> {
    let codex = model.record(m).flags.codex;
    let mut digits = code.to_vec();
    let dot = if codex == 22 { 3 } else { 2 };
    if digits.get(dot) != Some(&b'.') {
        return None;
    }
    digits.remove(dot);

    let count = run_len(model, m, from, upto) as i64;
    let p = 31 / count;
    let r = 31 % count;
    let mut needs_swap = false;
    let mut value = 0i64;
    let mut index: i64;
    if codex != 21 && count <= 31 {
        let offset = i64::from(decode_char(digits[0]));
        if offset < r * (p + 1) {
            index = offset / (p + 1);
        } else {
            needs_swap = p == 1 && codex == 22;
            index = r + (offset - r * (p + 1)) / p;
        }
    } else if codex != 21 && count < 62 {
        index = i64::from(decode_char(digits[0]));
        if index < 62 - count {
            needs_swap = codex == 22;
        } else {
            index = index + index - 62 + count;
        }
    } else {
        let per = base_per_record(codex, count);
        let v = decode_base31(&digits)?;
        index = v / per;
        value = v % per;
    }
    if index < 0 || index >= count {
        return None;
    }

    let first = run_start(model, m, from);
    if needs_swap && !model.record(first + index as usize).flags.special_shape {
        swap(&mut digits, 2, 3);
    }
    if codex != 21 && count <= 31 {
        value = decode_base31(&digits)? - storage_before(codex, count, index);
    } else if codex != 21 && count < 62 {
        value = decode_base31(&digits[1..])?;
        if index >= 62 - count && value >= HALF_SHARE {
            value -= HALF_SHARE;
            index += 1;
        }
    }
    if index >= count || value < 0 {
        return None;
    }

    let rec = model.record(first + index as usize);
    let (rows, cols) = sides(rec)?;
    let (dx, dy) = if rec.flags.special_shape {
        let (y, x) = decode_six_wide(value, cols, rows);
        (i64::from(x), i64::from(rows - 1 - y))
    } else {
        (value / i64::from(rows), value % i64::from(rows))
    };
    if dx >= i64::from(cols) {
        return None;
    }

    let b = rec.boundary;
    let dx4 = i64::from(x_divider(b.lat_min, b.lat_max));
    let lon = i64::from(b.lon_min) + dx * dx4 / 4;
    let lat = i64::from(b.lat_max) - dy * i64::from(CELL_HEIGHT);
    Some(decode_extension(
        DecodedCell {
            lat: lat as i32,
            lon: lon as i32,
            divider_x4: dx4,
            divider_y: -i64::from(CELL_HEIGHT),
            lon_offset4: dx * dx4 % 4,
            extreme_lat: b.lat_min,
            max_lon: b.lon_max,
        },
        extension,
    ))
}
