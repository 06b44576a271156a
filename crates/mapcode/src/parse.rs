//! Mapcode string grammar.
//!
//! `[TERRITORY ]PREFIX.POSTFIX[-EXTENSION]`, case-insensitive, in any
//! alphabet. TERRITORY is 2-3 alphanumerics, optionally joined by `-` or
//! `_` to a second 2-3 alphanumeric part. PREFIX has 2-5 characters,
//! POSTFIX 2-4 and EXTENSION 1-8 (no `Z`).

use mapcode_alphabet::to_ascii;

use crate::error::MapcodeError;

/// A mapcode string split into its parts, in upper-case ASCII.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedMapcode {
    /// The territory prefix, if one was given.
    pub territory: Option<String>,
    /// The code with its extension.
    pub code: String,
}

fn alnum_len(s: &str, range: std::ops::RangeInclusive<usize>) -> bool {
    range.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_territory(s: &str) -> bool {
    match s.split_once(['-', '_']) {
        Some((a, b)) => alnum_len(a, 2..=3) && alnum_len(b, 2..=3),
        None => alnum_len(s, 2..=3),
    }
}

fn check_code(code: &str) -> Result<(), String> {
    let (base, ext) = match code.split_once('-') {
        Some((base, ext)) => (base, Some(ext)),
        None => (code, None),
    };
    let Some((prefix, postfix)) = base.split_once('.') else {
        return Err(format!("'{code}' has no dot"));
    };
    if !alnum_len(prefix, 2..=5) {
        return Err(format!("'{prefix}' is not 2 to 5 letters or digits"));
    }
    if !alnum_len(postfix, 2..=4) {
        return Err(format!("'{postfix}' is not 2 to 4 letters or digits"));
    }
    if let Some(ext) = ext {
        if !alnum_len(ext, 1..=8) || ext.contains('Z') {
            return Err(format!("extension '{ext}' is not 1 to 8 letters or digits without Z"));
        }
    }
    Ok(())
}

/// Split and validate a mapcode string.
pub fn parse_mapcode(text: &str) -> Result<ParsedMapcode, MapcodeError> {
    let ascii = to_ascii(text.trim());
    let mut parts = ascii.split_whitespace();
    let (territory, code) = match (parts.next(), parts.next(), parts.next()) {
        (Some(code), None, None) => (None, code),
        (Some(territory), Some(code), None) => (Some(territory), code),
        _ => {
            return Err(MapcodeError::illegal(format!(
                "'{text}' is not [TERRITORY ]CODE"
            )))
        }
    };
    if let Some(t) = territory {
        if !is_territory(t) {
            return Err(MapcodeError::illegal(format!("'{t}' is not a territory code")));
        }
    }
    check_code(code).map_err(MapcodeError::illegal)?;
    Ok(ParsedMapcode {
        territory: territory.map(|t| t.to_ascii_uppercase()),
        code: code.to_string(),
    })
}

/// Whether `text` follows the mapcode grammar. Says nothing about
/// whether it decodes.
pub fn is_valid_mapcode_format(text: &str) -> bool {
    parse_mapcode(text).is_ok()
}
