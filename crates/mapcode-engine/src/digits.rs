//! Character tables and the positional numbering primitives shared by
//! every scheme.
//!
//! Codes are handled as ASCII byte buffers. Digits are base 31 over
//! `0-9` and the consonants; the vowels `A`, `E`, `U` only appear in
//! extension digits and in repacked all-digit codes.

/// Encoding alphabet. Positions 31..=33 are the vowels used by repacking.
pub(crate) const ENCODE_CHARS: &[u8; 34] = b"0123456789BCDFGHJKLMNPQRSTVWXYZAEU";

/// Value returned by [`decode_char`] for a character outside the alphabet.
pub(crate) const INVALID: i32 = -1;

/// Number of codes per prefix length: 31^n.
pub(crate) const NC: [i64; 7] = [1, 31, 961, 29_791, 923_521, 28_629_151, 887_503_681];

/// Grid columns per code length when the record has no stored divisor.
pub(crate) const X_SIDE: [i32; 8] = [0, 5, 31, 168, 961, 168 * 31, 29_791, 923_521];

/// Grid rows per code length when the record has no stored divisor.
pub(crate) const Y_SIDE: [i32; 8] = [0, 6, 31, 176, 961, 176 * 31, 29_791, 923_521];

/// Quarter-microdegree width of a roughly square cell, by latitude band of
/// 0.524288 degrees (2^19 microdegrees): `round(360 / cos(band))`.
const X_DIVIDER: [i32; 172] = [
    360, 360, 360, 360, 360, 360, 361, 361, 361, 361,
    362, 362, 362, 363, 363, 363, 364, 364, 365, 366,
    366, 367, 367, 368, 369, 370, 370, 371, 372, 373,
    374, 375, 376, 377, 378, 379, 380, 382, 383, 384,
    386, 387, 388, 390, 391, 393, 394, 396, 398, 399,
    401, 403, 405, 407, 409, 411, 413, 415, 417, 420,
    422, 424, 427, 429, 432, 435, 437, 440, 443, 446,
    449, 452, 455, 459, 462, 465, 469, 473, 476, 480,
    484, 488, 492, 496, 501, 505, 510, 515, 520, 525,
    530, 535, 540, 546, 552, 558, 564, 570, 577, 583,
    590, 598, 605, 612, 620, 628, 637, 645, 654, 664,
    673, 683, 693, 704, 715, 726, 738, 751, 763, 777,
    791, 805, 820, 836, 852, 869, 887, 906, 925, 946,
    968, 990, 1014, 1039, 1066, 1094, 1123, 1154, 1187, 1223,
    1260, 1300, 1343, 1389, 1438, 1490, 1547, 1609, 1676, 1749,
    1828, 1916, 2012, 2118, 2237, 2370, 2521, 2691, 2887, 3114,
    3380, 3696, 4077, 4547, 5139, 5910, 6952, 8443, 10747, 14784,
    23681, 59485,
];

/// Value of a code character.
///
/// Digits and consonants map to `0..=30` (with `I` read as `1` and `O`
/// as `0`); `A`, `E`, `U` map to `-2`, `-3`, `-4`; anything else is
/// [`INVALID`]. Case-insensitive.
pub(crate) fn decode_char(c: u8) -> i32 {
    match c.to_ascii_uppercase() {
        b @ b'0'..=b'9' => i32::from(b - b'0'),
        b'I' => 1,
        b'O' => 0,
        b'A' => -2,
        b'E' => -3,
        b'U' => -4,
        b => ENCODE_CHARS[10..31]
            .iter()
            .position(|&e| e == b)
            .map_or(INVALID, |p| p as i32 + 10),
    }
}

/// Whether `c` is one of the repacking vowels.
pub(crate) fn is_vowel(c: u8) -> bool {
    matches!(c.to_ascii_uppercase(), b'A' | b'E' | b'U')
}

/// Append `v` as `n` big-endian base-31 digits.
pub(crate) fn encode_base31(out: &mut Vec<u8>, mut v: i64, n: usize) {
    let start = out.len();
    out.resize(start + n, b'0');
    for slot in out[start..].iter_mut().rev() {
        *slot = ENCODE_CHARS[(v % 31) as usize];
        v /= 31;
    }
}

/// Base-31 value of the leading digits of `s`, stopping at a dot or the
/// end. `None` if a non-digit character comes first.
pub(crate) fn decode_base31(s: &[u8]) -> Option<i64> {
    let mut v: i64 = 0;
    for &c in s {
        if c == b'.' {
            break;
        }
        let d = decode_char(c);
        if d < 0 {
            return None;
        }
        v = v * 31 + i64::from(d);
    }
    Some(v)
}

/// Append a three-character postfix for a cell in a 168 x 176 block.
///
/// The block is split into a lower 6 x 4 arrangement of 28 x 34 sub-blocks
/// and an upper row of 24 x 40 sub-blocks; the first character picks the
/// sub-block and the next two number the cell inside it.
pub(crate) fn encode_triple(out: &mut Vec<u8>, difx: i32, dify: i32) {
    if dify < 4 * 34 {
        out.push(ENCODE_CHARS[(difx / 28 + 6 * (dify / 34)) as usize]);
        encode_base31(out, i64::from((difx % 28) * 34 + dify % 34), 2);
    } else {
        out.push(ENCODE_CHARS[(difx / 24 + 24) as usize]);
        encode_base31(out, i64::from((difx % 24) * 40 + dify - 136), 2);
    }
}

/// Inverse of [`encode_triple`]: `(dify, difx)`.
pub(crate) fn decode_triple(s: &[u8]) -> Option<(i32, i32)> {
    if s.len() < 3 {
        return None;
    }
    let c1 = decode_char(s[0]);
    if c1 < 0 {
        return None;
    }
    let x = decode_base31(&s[1..3])? as i32;
    if c1 < 24 {
        Some(((c1 / 6) * 34 + x % 34, (c1 % 6) * 28 + x / 34))
    } else {
        Some((x % 40 + 136, x / 40 + 24 * (c1 - 24)))
    }
}

/// Number a cell of a `width` x `height` grid column-by-column in strips
/// six cells wide. The last strip absorbs the remainder (4 to 9 wide).
pub(crate) fn encode_six_wide(x: i32, y: i32, width: i32, height: i32) -> i64 {
    let max_col = (width - 4).div_euclid(6);
    let (col, d) = if x / 6 >= max_col {
        (max_col, width - max_col * 6)
    } else {
        (x / 6, 6)
    };
    i64::from(height) * 6 * i64::from(col) + i64::from((height - 1 - y) * d + x - col * 6)
}

/// Inverse of [`encode_six_wide`]: `(y, x)`.
pub(crate) fn decode_six_wide(v: i64, width: i32, height: i32) -> (i32, i32) {
    let max_col = (width - 4).div_euclid(6);
    let strip = i64::from(height) * 6;
    let (col, d) = if v / strip >= i64::from(max_col) {
        (max_col, width - max_col * 6)
    } else {
        ((v / strip) as i32, 6)
    };
    let w = (v - i64::from(col) * strip) as i32;
    (height - 1 - w / d, col * 6 + w % d)
}

/// Quarter-microdegree cell width for a record spanning `min_y..max_y`,
/// taken at the record's latitude nearest the equator.
pub(crate) fn x_divider(min_y: i32, max_y: i32) -> i32 {
    let band = if min_y >= 0 {
        min_y >> 19
    } else if max_y >= 0 {
        0
    } else {
        (-max_y) >> 19
    };
    X_DIVIDER[(band as usize).min(X_DIVIDER.len() - 1)]
}

/// Swap two positions of a code buffer.
///
/// Several shapes exchange a fixed pair of characters so that consecutive
/// numbers do not produce codes differing only in their last digit.
pub(crate) fn swap(code: &mut [u8], i: usize, j: usize) {
    if i < code.len() && j < code.len() {
        code.swap(i, j);
    }
}

/// Insert a dot at `pos`.
pub(crate) fn insert_dot(code: &mut Vec<u8>, pos: usize) {
    code.insert(pos.min(code.len()), b'.');
}

/// The buffer as a `String`. Code buffers only ever hold ASCII.
pub(crate) fn to_string(code: &[u8]) -> String {
    code.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decode_char_maps_alphabet_and_lookalikes() {
        assert_eq!(decode_char(b'0'), 0);
        assert_eq!(decode_char(b'9'), 9);
        assert_eq!(decode_char(b'B'), 10);
        assert_eq!(decode_char(b'z'), 30);
        assert_eq!(decode_char(b'I'), 1);
        assert_eq!(decode_char(b'o'), 0);
        assert_eq!(decode_char(b'A'), -2);
        assert_eq!(decode_char(b'e'), -3);
        assert_eq!(decode_char(b'U'), -4);
        assert_eq!(decode_char(b'.'), INVALID);
        assert_eq!(decode_char(b'-'), INVALID);
    }

    #[test]
    fn base31_is_big_endian_and_zero_padded() {
        let mut out = Vec::new();
        encode_base31(&mut out, 961, 3);
        assert_eq!(out, b"100");
        out.clear();
        encode_base31(&mut out, 30, 2);
        assert_eq!(out, b"0Z");
        assert_eq!(decode_base31(b"100.XY"), Some(961));
        assert_eq!(decode_base31(b"1A"), None);
    }

    #[test]
    fn x_divider_grows_towards_the_poles() {
        assert_eq!(x_divider(0, 1_000_000), 360);
        assert_eq!(x_divider(-1_000_000, 1_000_000), 360);
        assert_eq!(x_divider(10_005_000, 10_035_000), 366);
        assert_eq!(x_divider(-90_000_000, -60_000_000), x_divider(60_000_000, 90_000_000));
        assert_eq!(x_divider(89_999_999, 90_000_000), 59_485);
    }

    #[test]
    fn swap_ignores_out_of_range() {
        let mut c = b"ABCD".to_vec();
        swap(&mut c, 1, 2);
        assert_eq!(c, b"ACBD");
        swap(&mut c, 1, 9);
        assert_eq!(c, b"ACBD");
    }

    proptest! {
        #[test]
        fn base31_roundtrip(v in 0i64..28_629_151) {
            let mut out = Vec::new();
            encode_base31(&mut out, v, 5);
            prop_assert_eq!(out.len(), 5);
            prop_assert_eq!(decode_base31(&out), Some(v));
        }

        #[test]
        fn triple_roundtrip(x in 0i32..168, y in 0i32..176) {
            let mut out = Vec::new();
            encode_triple(&mut out, x, y);
            prop_assert_eq!(decode_triple(&out), Some((y, x)));
        }

        #[test]
        fn six_wide_roundtrip(w in 4i32..400, h in 1i32..400, xs in 0.0f64..1.0, ys in 0.0f64..1.0) {
            let x = ((w as f64) * xs) as i32 % w;
            let y = ((h as f64) * ys) as i32 % h;
            let v = encode_six_wide(x, y, w, h);
            prop_assert!(v < i64::from(w) * i64::from(h));
            prop_assert_eq!(decode_six_wide(v, w, h), (y, x));
        }
    }
}
