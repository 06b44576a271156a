//! Mapcodes in other scripts.
//!
//! A mapcode is plain ASCII, but it can be written in any of the 28
//! [`Alphabet`]s: every letter and digit has one glyph per script (see
//! [`glyphs`]). [`to_alphabet`] writes a code in a script and
//! [`to_ascii`] reads one back, whatever script it is in. For the abjad
//! scripts (Greek, Hebrew, Arabic, Korean) codes with adjacent letters are
//! re-packed first; [`to_ascii`] undoes that automatically.
//!
//! Territory codes are never transliterated: in `"VAL 02.60L"` only the
//! part after the last space changes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod abjad;
pub mod tables;

pub use mapcode_core::Alphabet;
pub use tables::{glyphs, GLYPH_COUNT};

use mapcode_core::Mapcode;

use tracing::trace;

/// Replacement for characters no table knows.
pub const UNKNOWN_GLYPH: char = '?';

/// Split off a leading territory code, if any.
fn split_territory(text: &str) -> (&str, &str) {
    match text.rsplit_once(' ') {
        Some((territory, code)) => (&text[..territory.len() + 1], code),
        None => ("", text),
    }
}

/// Write an ASCII mapcode in `alphabet`.
///
/// Letters and digits are replaced by their glyphs; the dot, the
/// extension hyphen and anything outside the code alphabet pass through.
pub fn to_alphabet(code: &str, alphabet: Alphabet) -> String {
    let (territory, code) = split_territory(code);
    let mut ascii = code.to_ascii_uppercase();
    if alphabet.is_abjad() {
        ascii = abjad::pack(&ascii);
    }
    let table = glyphs(alphabet);
    let mut out = String::with_capacity(territory.len() + ascii.len() * 3);
    out.push_str(territory);
    out.extend(ascii.chars().map(|c| {
        u8::try_from(c)
            .ok()
            .and_then(tables::slot)
            .map_or(c, |slot| table[slot])
    }));
    out
}

/// Read a mapcode written in any alphabet back to upper-case ASCII.
///
/// Glyphs from different scripts may be mixed. Characters no table knows
/// become [`UNKNOWN_GLYPH`], which makes the code fail to decode.
pub fn to_ascii(text: &str) -> String {
    let (territory, code) = split_territory(text);
    let mut from_abjad = false;
    let mut unknown = 0usize;
    let mut ascii = String::with_capacity(code.len());
    for c in code.chars() {
        if c.is_ascii() {
            ascii.push(c.to_ascii_uppercase());
            continue;
        }
        match tables::lookup(c) {
            Some(entry) => {
                from_abjad |= entry.alphabet.is_abjad();
                ascii.push(tables::ascii_of(usize::from(entry.slot)));
            }
            None => {
                unknown += 1;
                ascii.push(UNKNOWN_GLYPH);
            }
        }
    }
    if unknown > 0 {
        trace!(text, unknown, "unmapped glyphs in mapcode");
    }
    if from_abjad {
        ascii = abjad::unpack(&ascii);
    }
    let mut out = String::with_capacity(territory.len() + ascii.len());
    out.push_str(territory);
    out.push_str(&ascii);
    out
}

/// The script of the first non-ASCII glyph in `text`, or `None` if the
/// text has none.
pub fn detect_alphabet(text: &str) -> Option<Alphabet> {
    text.chars()
        .filter(|c| !c.is_ascii())
        .find_map(tables::lookup)
        .map(|e| e.alphabet)
}

/// Writing a [`Mapcode`] in another script.
pub trait WriteIn {
    /// The code (with its extension, without territory) in `alphabet`.
    fn code_in(&self, alphabet: Alphabet) -> String;
}

impl WriteIn for Mapcode {
    fn code_in(&self, alphabet: Alphabet) -> String {
        to_alphabet(self.code(), alphabet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn greek_code() {
        assert_eq!(to_alphabet("49.4V", Alphabet::Greek), "49.4\u{03DC}");
        assert_eq!(to_ascii("49.4\u{03DC}"), "49.4V");
    }

    #[test]
    fn territory_is_kept() {
        let written = to_alphabet("VAL 02.60L-S4", Alphabet::Cyrillic);
        assert!(written.starts_with("VAL 02.60"));
        assert_eq!(to_ascii(&written), "VAL 02.60L-S4");
    }

    #[test]
    fn abjad_codes_are_repacked() {
        let hebrew = to_alphabet("HH.VH", Alphabet::Hebrew);
        assert_eq!(hebrew.chars().filter(|&c| c == '.').count(), 1);
        assert_eq!(hebrew.chars().position(|c| c == '.'), Some(4));
        assert_eq!(to_ascii(&hebrew), "HH.VH");

        let cyrillic = to_alphabet("HH.VH", Alphabet::Cyrillic);
        assert_eq!(cyrillic.chars().position(|c| c == '.'), Some(2));
    }

    #[test]
    fn mapcode_in_script() {
        let m = Mapcode::new("49.4V", mapcode_core::TerritoryId(0));
        assert_eq!(m.code_in(Alphabet::Greek), "49.4\u{03DC}");
        assert_eq!(m.code_in(Alphabet::Roman), "49.4V");
    }

    #[test]
    fn lower_case_input() {
        assert_eq!(to_ascii("hh.vh"), "HH.VH");
        assert_eq!(to_alphabet("hh.vh", Alphabet::Roman), "HH.VH");
    }

    #[test]
    fn unknown_glyphs_are_marked() {
        assert_eq!(to_ascii("49.4\u{00E9}"), "49.4?");
    }

    #[test]
    fn detects_script() {
        assert_eq!(detect_alphabet("49.4V"), None);
        let thai = to_alphabet("49.4V", Alphabet::Thai);
        assert_eq!(detect_alphabet(&thai), Some(Alphabet::Thai));
    }

    fn code_strategy() -> impl Strategy<Value = String> {
        let chars = "[0-9BCDFGHJKLMNPQRSTVWXYZ]";
        (
            proptest::string::string_regex(&format!("{chars}{{2,5}}")).unwrap(),
            proptest::string::string_regex(&format!("{chars}{{2,4}}")).unwrap(),
            proptest::string::string_regex("(-[0-9BCDFGHJKLMNPQRSTVWXY]{1,8})?").unwrap(),
        )
            .prop_map(|(pre, post, ext)| format!("{pre}.{post}{ext}"))
    }

    proptest! {
        #[test]
        fn transliteration_round_trips(
            code in code_strategy(),
            alphabet in proptest::sample::select(Alphabet::ALL.to_vec()),
        ) {
            let written = to_alphabet(&code, alphabet);
            prop_assert_eq!(to_ascii(&written), code);
        }

        #[test]
        fn vowel_packed_codes_round_trip(
            prefix in proptest::string::string_regex("[0-9]{2,4}").unwrap(),
            tail in proptest::string::string_regex("[0-9]?[AEU][AEU0-9]").unwrap(),
            alphabet in proptest::sample::select(Alphabet::ALL.to_vec()),
        ) {
            let code = format!("{prefix}.{tail}");
            let written = to_alphabet(&code, alphabet);
            prop_assert_eq!(to_ascii(&written), code);
        }
    }
}
