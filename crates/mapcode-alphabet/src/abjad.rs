//! Re-packing for scripts written without vowels.
//!
//! In Greek, Hebrew, Arabic and Korean a run of letters is hard to read
//! back, so a code with two adjacent letters (the dot does not separate
//! them) is rewritten before transliteration. The first character after
//! the dot, with value `v` in the 34-character code alphabet, becomes the
//! digit `v / 10` followed by the consonant at position `10 + v % 10`.
//! The code grows by one character and its dot moves so that the new
//! shape is one a plain code never has:
//!
//! | shape | 22 | 23 | 32 | 33 | 42 | 43 |
//! |-------|----|----|----|----|----|----|
//! | packed| 41 | 51 | 15 | 61 | 16 | 71 |
//!
//! Codes of any other shape, and codes without a letter pair, are left
//! unchanged. The extension is never touched.

/// Code alphabet: digits, consonants, then the three vowels.
const CODE_CHARS: &[u8; 34] = b"0123456789BCDFGHJKLMNPQRSTVWXYZAEU";

/// (plain shape, packed shape).
const SHAPES: [(u8, u8); 6] = [(22, 41), (23, 51), (32, 15), (33, 61), (42, 16), (43, 71)];

fn value(c: u8) -> Option<usize> {
    CODE_CHARS.iter().position(|&x| x == c)
}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// Split `code` into (characters without dot, prefix length, extension).
fn split(code: &str) -> Option<(Vec<u8>, usize, &str)> {
    let (base, ext) = match code.find('-') {
        Some(i) => code.split_at(i),
        None => (code, ""),
    };
    let dot = base.find('.')?;
    if base[dot + 1..].contains('.') {
        return None;
    }
    let chars: Vec<u8> = base.bytes().filter(|&c| c != b'.').collect();
    Some((chars, dot, ext))
}

fn join(chars: &[u8], prefix_len: usize, ext: &str) -> String {
    let mut out = String::with_capacity(chars.len() + 1 + ext.len());
    out.extend(chars[..prefix_len].iter().map(|&c| c as char));
    out.push('.');
    out.extend(chars[prefix_len..].iter().map(|&c| c as char));
    out.push_str(ext);
    out
}

fn shape(prefix_len: usize, total: usize) -> Option<u8> {
    let postfix = total.checked_sub(prefix_len)?;
    u8::try_from(10 * prefix_len + postfix).ok()
}

/// Re-pack an upper-case ASCII code for an abjad script. Returns the
/// code unchanged if it does not need or support re-packing.
pub fn pack(code: &str) -> String {
    let Some((chars, dot, ext)) = split(code) else {
        return code.to_string();
    };
    if !chars.windows(2).any(|w| is_letter(w[0]) && is_letter(w[1])) {
        return code.to_string();
    }
    let Some(packed_shape) = shape(dot, chars.len()).and_then(|s| {
        SHAPES
            .iter()
            .find(|(plain, _)| *plain == s)
            .map(|&(_, packed)| packed)
    }) else {
        return code.to_string();
    };
    let Some(v) = chars.get(dot).and_then(|&c| value(c)) else {
        return code.to_string();
    };

    let mut out = Vec::with_capacity(chars.len() + 1);
    out.extend_from_slice(&chars[..dot]);
    out.push(b'0' + (v / 10) as u8);
    out.push(CODE_CHARS[10 + v % 10]);
    out.extend_from_slice(&chars[dot + 1..]);
    join(&out, usize::from(packed_shape / 10), ext)
}

/// Undo [`pack`]. Codes not in a packed shape are returned unchanged;
/// a packed shape with an impossible digit pair is returned unchanged
/// too, and will fail to decode.
pub fn unpack(code: &str) -> String {
    let Some((chars, dot, ext)) = split(code) else {
        return code.to_string();
    };
    let Some(plain_shape) = shape(dot, chars.len()).and_then(|s| {
        SHAPES
            .iter()
            .find(|(_, packed)| *packed == s)
            .map(|&(plain, _)| plain)
    }) else {
        return code.to_string();
    };

    let at = usize::from(plain_shape / 10);
    let (Some(&digit), Some(&consonant)) = (chars.get(at), chars.get(at + 1)) else {
        return code.to_string();
    };
    let tens = match digit {
        b'0'..=b'3' => usize::from(digit - b'0'),
        _ => return code.to_string(),
    };
    let units = match value(consonant) {
        Some(c) if (10..20).contains(&c) => c - 10,
        _ => return code.to_string(),
    };
    let v = 10 * tens + units;
    if v >= CODE_CHARS.len() {
        return code.to_string();
    }

    let mut out = Vec::with_capacity(chars.len() - 1);
    out.extend_from_slice(&chars[..at]);
    out.push(CODE_CHARS[v]);
    out.extend_from_slice(&chars[at + 2..]);
    join(&out, at, ext)
}
