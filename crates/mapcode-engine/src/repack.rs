//! Vowel repacking of all-digit codes.
//!
//! A code made only of digits would read as a number, so its last two
//! digits `dd` (a value 0..=99) are rewritten as a vowel followed by a
//! character: `A`, `E` or `U` selects `dd / 34`, the second character is
//! `dd % 34` from the full encoding alphabet. Decoding reverses this and
//! rejects vowels anywhere else.

use crate::digits::{decode_char, is_vowel, ENCODE_CHARS};

const VOWELS: &[u8; 3] = b"AEU";

fn vowel_index(c: u8) -> Option<i32> {
    VOWELS
        .iter()
        .position(|&v| v == c.to_ascii_uppercase())
        .map(|i| i as i32)
}

/// Repack an all-digit code in place. Codes with any letter, without a
/// dot, or with fewer than two characters on either side of the dot are
/// left alone.
pub(crate) fn pack(code: &mut Vec<u8>) {
    let mut dot = None;
    for (i, &c) in code.iter().enumerate() {
        if c == b'.' {
            if dot.is_some() {
                return;
            }
            dot = Some(i);
        } else if !c.is_ascii_digit() {
            return;
        }
    }
    let Some(dot) = dot else { return };
    if dot < 2 || code.len() - dot - 1 < 2 {
        return;
    }
    let n = code.len();
    let v = usize::from(code[n - 2] - b'0') * 10 + usize::from(code[n - 1] - b'0');
    code[n - 2] = ENCODE_CHARS[v / 34 + 31];
    code[n - 1] = ENCODE_CHARS[v % 34];
}

/// Undo [`pack`]. Returns `None` when the vowels cannot come from
/// repacking. Codes without vowels are returned unchanged.
pub(crate) fn unpack(code: &[u8]) -> Option<Vec<u8>> {
    if !code.iter().any(|&c| is_vowel(c)) {
        return Some(code.to_vec());
    }
    let dot = code.iter().position(|&c| c == b'.')?;
    let last = code.len() - 1;
    if dot < 2 || last < dot + 2 {
        return None;
    }

    let mut out = code.to_vec();
    let mut voweled = false;
    if let Some(v1) = vowel_index(code[last - 1]) {
        let v2 = match vowel_index(code[last]) {
            Some(i) => 31 + i,
            None => {
                let d = decode_char(code[last]);
                if d < 0 {
                    return None;
                }
                d
            }
        };
        let v = v1 * 34 + v2;
        if v > 99 {
            return None;
        }
        out[last - 1] = ENCODE_CHARS[(v / 10) as usize];
        out[last] = ENCODE_CHARS[(v % 10) as usize];
        voweled = true;
    }

    for (i, &c) in out.iter().enumerate() {
        if i == dot {
            continue;
        }
        if (voweled && !c.is_ascii_digit()) || is_vowel(c) {
            return None;
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed(s: &str) -> String {
        let mut v = s.as_bytes().to_vec();
        pack(&mut v);
        String::from_utf8(v).unwrap()
    }

    fn unpacked(s: &str) -> Option<String> {
        unpack(s.as_bytes()).map(|v| String::from_utf8(v).unwrap())
    }

    #[test]
    fn pack_rewrites_last_two_digits() {
        assert_eq!(packed("4013.685"), "4013.6UK");
        assert_eq!(packed("008.416"), "008.4AJ");
        assert_eq!(packed("12.00"), "12.A0");
        assert_eq!(packed("12.99"), "12.UA");
    }

    #[test]
    fn pack_leaves_other_codes_alone() {
        assert_eq!(packed("49.4V"), "49.4V");
        assert_eq!(packed("1.23"), "1.23");
        assert_eq!(packed("12.3"), "12.3");
        assert_eq!(packed("1234"), "1234");
    }

    #[test]
    fn unpack_restores_digits() {
        assert_eq!(unpacked("4013.6UK").as_deref(), Some("4013.685"));
        assert_eq!(unpacked("008.4AJ").as_deref(), Some("008.416"));
        assert_eq!(unpacked("12.ua").as_deref(), Some("12.99"));
    }

    #[test]
    fn unpack_passes_codes_without_vowels() {
        assert_eq!(unpacked("49.4V").as_deref(), Some("49.4V"));
        assert_eq!(unpacked("B.CD").as_deref(), Some("B.CD"));
    }

    #[test]
    fn unpack_rejects_stray_vowels() {
        assert_eq!(unpacked("4A.4V"), None);
        assert_eq!(unpacked("12.BAK"), None);
        assert_eq!(unpacked("1.AK"), None);
        assert_eq!(unpacked("12.UE"), None);
    }

    #[test]
    fn every_two_digit_tail_round_trips() {
        for v in 0..100 {
            let code = format!("12.{v:02}");
            let p = packed(&code);
            assert_ne!(p, code);
            assert_eq!(unpacked(&p), Some(code));
        }
    }
}
