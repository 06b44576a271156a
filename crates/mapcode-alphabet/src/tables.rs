//! Glyph tables.
//!
//! Each alphabet has 36 glyphs: one per ASCII letter `A..=Z` followed by
//! one per digit `0..=9`. Digits are written as ASCII in every script.

use std::sync::OnceLock;

use mapcode_core::Alphabet;

/// Glyphs per alphabet.
pub const GLYPH_COUNT: usize = 36;

const fn with_digits(letters: [u32; 26]) -> [char; GLYPH_COUNT] {
    let mut out = ['?'; GLYPH_COUNT];
    let mut i = 0;
    while i < 26 {
        out[i] = match char::from_u32(letters[i]) {
            Some(c) => c,
            None => '?',
        };
        i += 1;
    }
    let mut d = 0;
    while d < 10 {
        out[26 + d] = (b'0' + d as u8) as char;
        d += 1;
    }
    out
}

/// 26 consecutive code points from `start`.
const fn run(start: u32) -> [u32; 26] {
    let mut out = [0; 26];
    let mut i = 0;
    while i < 26 {
        out[i] = start + i as u32;
        i += 1;
    }
    out
}

/// The 20 code points from `first`, then 6 from `second`. Indic blocks
/// leave an unassigned slot after their twentieth consonant.
const fn split_run(first: u32, second: u32) -> [u32; 26] {
    let mut out = [0; 26];
    let mut i = 0;
    while i < 20 {
        out[i] = first + i as u32;
        i += 1;
    }
    while i < 26 {
        out[i] = second + (i - 20) as u32;
        i += 1;
    }
    out
}

// ── Tables ──────────────────────────────────────────────────────

const ROMAN: [char; GLYPH_COUNT] = with_digits(run(0x41));

const GREEK: [char; GLYPH_COUNT] = with_digits([
    0x0391, 0x0392, 0x039E, 0x0394, 0x0395, 0x03A6, 0x0393, 0x0397, 0x0399, 0x03D8, 0x039A,
    0x039B, 0x039C, 0x039D, 0x039F, 0x03A0, 0x0398, 0x03A1, 0x03A3, 0x03A4, 0x03A5, 0x03DC,
    0x03A9, 0x03A7, 0x03A8, 0x0396,
]);

const CYRILLIC: [char; GLYPH_COUNT] = with_digits([
    0x0410, 0x0411, 0x0426, 0x0414, 0x0415, 0x0424, 0x0413, 0x0427, 0x0418, 0x0419, 0x041A,
    0x041B, 0x041C, 0x041D, 0x041E, 0x041F, 0x0429, 0x0420, 0x0421, 0x0422, 0x0423, 0x0412,
    0x0428, 0x0425, 0x042B, 0x0417,
]);

/// The 22 base letters (no final forms). `I` and `O`, which never occur
/// in a code, and `Y`, `Z` take the triangle yod and Yiddish ligatures.
const HEBREW: [char; GLYPH_COUNT] = with_digits([
    0x05D0, 0x05D1, 0x05D2, 0x05D3, 0x05D4, 0x05D5, 0x05D6, 0x05D7, 0x05F2, 0x05D8, 0x05D9,
    0x05DB, 0x05DC, 0x05DE, 0x05EF, 0x05E0, 0x05E1, 0x05E2, 0x05E4, 0x05E6, 0x05E7, 0x05E8,
    0x05E9, 0x05EA, 0x05F0, 0x05F1,
]);
const DEVANAGARI: [char; GLYPH_COUNT] = with_digits(run(0x0915));
const MALAYALAM: [char; GLYPH_COUNT] = with_digits(run(0x0D15));
const GEORGIAN: [char; GLYPH_COUNT] = with_digits(run(0x10D0));

const KATAKANA: [char; GLYPH_COUNT] = with_digits([
    0x30AB, 0x30AD, 0x30AF, 0x30B1, 0x30B3, 0x30B5, 0x30B7, 0x30B9, 0x30BB, 0x30BD, 0x30BF,
    0x30C1, 0x30C4, 0x30C6, 0x30C8, 0x30CA, 0x30CB, 0x30CC, 0x30CD, 0x30CE, 0x30CF, 0x30D2,
    0x30D5, 0x30D8, 0x30DB, 0x30DE,
]);

const THAI: [char; GLYPH_COUNT] = with_digits(run(0x0E01));

const LAO: [char; GLYPH_COUNT] = with_digits([
    0x0E81, 0x0E82, 0x0E84, 0x0E87, 0x0E88, 0x0E8A, 0x0E8D, 0x0E94, 0x0E95, 0x0E96, 0x0E97,
    0x0E99, 0x0E9A, 0x0E9B, 0x0E9C, 0x0E9D, 0x0E9E, 0x0E9F, 0x0EA1, 0x0EA2, 0x0EA3, 0x0EA5,
    0x0EA7, 0x0EAA, 0x0EAB, 0x0EAD,
]);

const ARMENIAN: [char; GLYPH_COUNT] = with_digits(run(0x0531));
const BENGALI: [char; GLYPH_COUNT] = with_digits(split_run(0x0995, 0x09AA));
const GURMUKHI: [char; GLYPH_COUNT] = with_digits(split_run(0x0A15, 0x0A2A));

const TIBETAN: [char; GLYPH_COUNT] = with_digits([
    0x0F40, 0x0F41, 0x0F42, 0x0F44, 0x0F45, 0x0F46, 0x0F47, 0x0F49, 0x0F4A, 0x0F4B, 0x0F4C,
    0x0F4E, 0x0F4F, 0x0F50, 0x0F51, 0x0F53, 0x0F54, 0x0F55, 0x0F56, 0x0F58, 0x0F59, 0x0F5A,
    0x0F5B, 0x0F5E, 0x0F5F, 0x0F60,
]);

const ARABIC: [char; GLYPH_COUNT] = with_digits(split_run(0x0627, 0x0641));

const KOREAN: [char; GLYPH_COUNT] = with_digits([
    0xAC00, 0xB098, 0xB2E4, 0xB77C, 0xB9C8, 0xBC14, 0xC0AC, 0xC544, 0xC790, 0xCC28, 0xCE74,
    0xD0C0, 0xD30C, 0xD558, 0xAC70, 0xB108, 0xB354, 0xB7EC, 0xBA38, 0xBC84, 0xC11C, 0xC5B4,
    0xC800, 0xCC98, 0xCEE4, 0xD130,
]);

const BURMESE: [char; GLYPH_COUNT] = with_digits(run(0x1000));
const KHMER: [char; GLYPH_COUNT] = with_digits(run(0x1780));

const SINHALESE: [char; GLYPH_COUNT] = with_digits([
    0x0D9A, 0x0D9B, 0x0D9C, 0x0D9D, 0x0D9E, 0x0D9F, 0x0DA0, 0x0DA1, 0x0DA2, 0x0DA3, 0x0DA4,
    0x0DA5, 0x0DA6, 0x0DA7, 0x0DA8, 0x0DA9, 0x0DAA, 0x0DAB, 0x0DAC, 0x0DAD, 0x0DAE, 0x0DAF,
    0x0DB0, 0x0DB1, 0x0DB3, 0x0DB4,
]);

const THAANA: [char; GLYPH_COUNT] = with_digits(run(0x0780));

const CHINESE: [char; GLYPH_COUNT] = with_digits([
    0x4EBA, 0x5927, 0x5929, 0x5C71, 0x5DDD, 0x65E5, 0x6708, 0x6728, 0x6C34, 0x706B, 0x571F,
    0x91D1, 0x77F3, 0x7530, 0x4E2D, 0x4E0A, 0x4E0B, 0x5DE6, 0x53F3, 0x53E3, 0x76EE, 0x624B,
    0x5FC3, 0x9580, 0x96E8, 0x98A8,
]);

const TIFINAGH: [char; GLYPH_COUNT] = with_digits(run(0x2D30));

const TAMIL: [char; GLYPH_COUNT] = with_digits([
    0x0B85, 0x0B86, 0x0B87, 0x0B95, 0x0B99, 0x0B9A, 0x0B9C, 0x0B9E, 0x0B9F, 0x0BA3, 0x0BA4,
    0x0BA8, 0x0BA9, 0x0BAA, 0x0BAE, 0x0BAF, 0x0BB0, 0x0BB1, 0x0BB2, 0x0BB3, 0x0BB4, 0x0BB5,
    0x0BB6, 0x0BB7, 0x0BB8, 0x0BB9,
]);

const AMHARIC: [char; GLYPH_COUNT] = with_digits([
    0x1200, 0x1208, 0x1210, 0x1218, 0x1220, 0x1228, 0x1230, 0x1238, 0x1240, 0x1260, 0x1268,
    0x1270, 0x1278, 0x1280, 0x1290, 0x1298, 0x12A0, 0x12A8, 0x12C8, 0x12D0, 0x12D8, 0x12E0,
    0x12E8, 0x12F0, 0x1300, 0x1308,
]);

const TELUGU: [char; GLYPH_COUNT] = with_digits(split_run(0x0C15, 0x0C2A));
const ODIA: [char; GLYPH_COUNT] = with_digits(split_run(0x0B15, 0x0B2A));
const KANNADA: [char; GLYPH_COUNT] = with_digits(split_run(0x0C95, 0x0CAA));
const GUJARATI: [char; GLYPH_COUNT] = with_digits(split_run(0x0A95, 0x0AAA));

/// All tables in [`Alphabet::ALL`] order.
static TABLES: [[char; GLYPH_COUNT]; 28] = [
    ROMAN, GREEK, CYRILLIC, HEBREW, DEVANAGARI, MALAYALAM, GEORGIAN, KATAKANA, THAI, LAO,
    ARMENIAN, BENGALI, GURMUKHI, TIBETAN, ARABIC, KOREAN, BURMESE, KHMER, SINHALESE, THAANA,
    CHINESE, TIFINAGH, TAMIL, AMHARIC, TELUGU, ODIA, KANNADA, GUJARATI,
];

// ── Lookup ──────────────────────────────────────────────────────

/// The 36 glyphs of `alphabet`: `A..=Z` then `0..=9`.
pub fn glyphs(alphabet: Alphabet) -> &'static [char; GLYPH_COUNT] {
    &TABLES[alphabet.index()]
}

/// Table slot of an ASCII letter or digit.
pub(crate) fn slot(c: u8) -> Option<usize> {
    match c.to_ascii_uppercase() {
        b @ b'A'..=b'Z' => Some(usize::from(b - b'A')),
        b @ b'0'..=b'9' => Some(26 + usize::from(b - b'0')),
        _ => None,
    }
}

/// ASCII character of a table slot.
pub(crate) fn ascii_of(slot: usize) -> char {
    if slot < 26 {
        (b'A' + slot as u8) as char
    } else {
        (b'0' + (slot - 26) as u8) as char
    }
}

/// A non-ASCII glyph with the alphabet it belongs to and its slot.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ReverseEntry {
    pub glyph: char,
    pub alphabet: Alphabet,
    pub slot: u8,
}

/// Every non-ASCII glyph, sorted by code point.
fn reverse() -> &'static [ReverseEntry] {
    static REVERSE: OnceLock<Vec<ReverseEntry>> = OnceLock::new();
    REVERSE.get_or_init(|| {
        let mut entries: Vec<ReverseEntry> = Alphabet::ALL
            .iter()
            .flat_map(|&alphabet| {
                glyphs(alphabet)
                    .iter()
                    .enumerate()
                    .filter(|(_, g)| !g.is_ascii())
                    .map(move |(slot, &glyph)| ReverseEntry {
                        glyph,
                        alphabet,
                        slot: slot as u8,
                    })
            })
            .collect();
        entries.sort_by_key(|e| e.glyph);
        entries
    })
}

/// Find the table entry for a non-ASCII glyph.
pub(crate) fn lookup(glyph: char) -> Option<ReverseEntry> {
    let entries = reverse();
    entries
        .binary_search_by_key(&glyph, |e| e.glyph)
        .ok()
        .map(|i| entries[i])
}
