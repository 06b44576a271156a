//! Grid codes.
//!
//! A record is divided into `div_x` x `div_y` cells numbered by the
//! prefix; each cell is divided again by the postfix. The divisors come
//! from the code shape unless the record stores its own Y divisor.

use mapcode_core::point::MICRODEG_360;
use mapcode_core::{MapcodeZone, MicroPoint};
use mapcode_data::{RecordType, TerritoryRecord};

use crate::digits::{
    decode_base31, decode_six_wide, decode_triple, encode_base31, encode_six_wide, encode_triple,
    insert_dot, swap, ENCODE_CHARS, NC, X_SIDE, Y_SIDE,
};
use crate::extension::{decode_extension, CellCode, DecodedCell, ExtensionCell, LatDirection};

pub(crate) fn div_ceil(a: i32, b: i32) -> i32 {
    (a + b - 1) / b
}

/// Bring a longitude offset from a record's west edge into `0..360°`
/// when it is off by one turn.
pub(crate) fn wrap_offset(offset: i32) -> i32 {
    if offset < 0 {
        offset + MICRODEG_360
    } else if offset >= MICRODEG_360 {
        offset - MICRODEG_360
    } else {
        offset
    }
}

/// Prefix divisors `(div_x, div_y)`. `None` for an unusable record.
fn divisors(rec: &TerritoryRecord, prefix_len: usize) -> Option<(i32, i32)> {
    match i32::from(rec.smart_div) {
        0 => None,
        1 => {
            let sides = (*X_SIDE.get(prefix_len)?, *Y_SIDE.get(prefix_len)?);
            (sides.0 > 0 && sides.1 > 0).then_some(sides)
        }
        div_y => {
            let div_x = NC.get(prefix_len)? / i64::from(div_y);
            (div_x > 0).then_some((div_x as i32, div_y))
        }
    }
}

/// Postfix divisors `(x, y)` for a postfix length.
fn postfix_sides(postfix_len: usize) -> Option<(i32, i32)> {
    match postfix_len {
        1..=5 => Some((X_SIDE[postfix_len], Y_SIDE[postfix_len])),
        _ => None,
    }
}

/// Grid code of `p` in `rec`, header letter included.
pub(crate) fn encode(rec: &TerritoryRecord, p: &MicroPoint) -> Option<CellCode> {
    let org_codex = rec.flags.codex;
    // Codex 21 codes are 22 codes, and 14 codes are 23 codes with the
    // dot moved one place left.
    let codex = match org_codex {
        21 => 22,
        14 => 23,
        c => c,
    };
    let prefix_len = usize::from(codex / 10);
    let postfix_len = usize::from(codex % 10);
    let (div_x, div_y) = divisors(rec, prefix_len)?;
    let (side_x, side_y) = postfix_sides(postfix_len)?;
    let b = rec.boundary;

    let ygs = div_ceil(b.height(), div_y);
    let xgs = div_ceil(b.width(), div_x);
    if ygs <= 0 || xgs <= 0 {
        return None;
    }
    let rely = (p.lat_micro - b.lat_min).div_euclid(ygs);
    let relx = wrap_offset(p.lon_micro - b.lon_min);
    if relx < 0 {
        return None;
    }
    let relx = relx / xgs;
    if relx >= div_x || rely >= div_y || rely < 0 {
        return None;
    }

    let v = if div_x != div_y && prefix_len > 2 {
        encode_six_wide(relx, rely, div_x, div_y)
    } else {
        i64::from(relx) * i64::from(div_y) + i64::from(div_y - 1 - rely)
    };
    let mut code = Vec::with_capacity(prefix_len + postfix_len + 2);
    encode_base31(&mut code, v, prefix_len);
    if prefix_len == 4 && div_x == 961 && div_y == 961 {
        swap(&mut code, 1, 2);
    }

    let cell_lat = b.lat_min + rely * ygs;
    let cell_lon = b.lon_min + relx * xgs;
    let dvy = div_ceil(ygs, side_y);
    let dvx = div_ceil(xgs, side_x);
    code.push(b'.');

    let difx = wrap_offset(p.lon_micro - cell_lon);
    let dify = p.lat_micro - cell_lat;
    let extra_x = difx % dvx;
    let extra_y = dify % dvy;
    let difx = difx / dvx;
    let dify = side_y - 1 - dify / dvy;

    if postfix_len == 3 {
        encode_triple(&mut code, difx, dify);
    } else {
        let start = code.len();
        encode_base31(&mut code, i64::from(difx) * i64::from(side_y) + i64::from(dify), postfix_len);
        if postfix_len == 4 {
            swap(&mut code[start..], 1, 2);
        }
    }

    if org_codex == 14 {
        // "ab.cde" -> "a.bcde"
        code.remove(2);
        insert_dot(&mut code, 1);
    }
    if rec.flags.record_type == RecordType::Pipe {
        code.insert(0, ENCODE_CHARS[usize::from(rec.flags.header_letter)]);
    }

    Some(CellCode {
        code,
        cell: ExtensionCell {
            extra_x4: i64::from(extra_x) << 2,
            extra_y: i64::from(extra_y),
            divider_x4: i64::from(dvx) << 2,
            divider_y: i64::from(dvy),
            direction: LatDirection::North,
        },
    })
}

/// Zone of a grid `code` (header letter removed) in `rec`.
pub(crate) fn decode(rec: &TerritoryRecord, code: &[u8], extension: &[u8]) -> MapcodeZone {
    decode_cell(rec, code, extension).unwrap_or_else(MapcodeZone::empty)
}

fn decode_cell(rec: &TerritoryRecord, code: &[u8], extension: &[u8]) -> Option<MapcodeZone> {
    let mut code = code.to_vec();
    let mut dot = code.iter().position(|&c| c == b'.')?;
    let code_len = code.len() - 1;
    if dot == 1 && code_len == 5 {
        // "a.bcde" -> "ab.cde"
        swap(&mut code, 1, 2);
        dot = 2;
    }
    let postfix_len = code_len - dot;
    let (div_x, div_y) = divisors(rec, dot)?;
    let (side_x, side_y) = postfix_sides(postfix_len)?;
    if dot == 4 && div_x == 961 && div_y == 961 {
        swap(&mut code, 1, 2);
    }

    let v = decode_base31(&code)?;
    let (rely, relx) = if div_x != div_y && dot > 2 {
        let (y, x) = decode_six_wide(v, div_x, div_y);
        (i64::from(y), i64::from(x))
    } else {
        (i64::from(div_y) - 1 - v % i64::from(div_y), v / i64::from(div_y))
    };
    if relx < 0 || rely < 0 || relx >= i64::from(div_x) || rely >= i64::from(div_y) {
        return None;
    }
    let (relx, rely) = (relx as i32, rely as i32);

    let b = rec.boundary;
    let ygs = div_ceil(b.height(), div_y);
    let xgs = div_ceil(b.width(), div_x);
    let cell_lat = b.lat_min + rely * ygs;
    let cell_lon = b.lon_min + relx * xgs;
    let dvy = div_ceil(ygs, side_y);
    let dvx = div_ceil(xgs, side_x);

    let mut rest = code[dot + 1..].to_vec();
    let (difx, dify) = if postfix_len == 3 {
        let (y, x) = decode_triple(&rest)?;
        (x, y)
    } else {
        if postfix_len == 4 {
            swap(&mut rest, 1, 2);
        }
        let v2 = decode_base31(&rest)?;
        (
            (v2 / i64::from(side_y)) as i32,
            (v2 % i64::from(side_y)) as i32,
        )
    };
    let dify = side_y - 1 - dify;

    let corner_lat = cell_lat + dify * dvy;
    let corner_lon = cell_lon + difx * dvx;
    if !b.contains(&MicroPoint::from_micro(corner_lat, corner_lon)) {
        return None;
    }
    Some(decode_extension(
        DecodedCell {
            lat: corner_lat,
            lon: corner_lon,
            divider_x4: i64::from(dvx) << 2,
            divider_y: i64::from(dvy),
            lon_offset4: 0,
            extreme_lat: (cell_lat + ygs).min(b.lat_max),
            max_lon: (cell_lon + xgs).min(b.lon_max),
        },
        extension,
    ))
}
