//! Script identifiers.
//!
//! The glyph tables live in `mapcode-alphabet`; this enum is here so the
//! territory catalog can name each territory's preferred scripts.

use std::fmt;
use std::str::FromStr;

/// A script a mapcode can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Alphabet {
    Roman,
    Greek,
    Cyrillic,
    Hebrew,
    Devanagari,
    Malayalam,
    Georgian,
    Katakana,
    Thai,
    Lao,
    Armenian,
    Bengali,
    Gurmukhi,
    Tibetan,
    Arabic,
    Korean,
    Burmese,
    Khmer,
    Sinhalese,
    Thaana,
    Chinese,
    Tifinagh,
    Tamil,
    Amharic,
    Telugu,
    Odia,
    Kannada,
    Gujarati,
}

impl Alphabet {
    /// Every supported alphabet, in table order.
    pub const ALL: [Alphabet; 28] = [
        Alphabet::Roman,
        Alphabet::Greek,
        Alphabet::Cyrillic,
        Alphabet::Hebrew,
        Alphabet::Devanagari,
        Alphabet::Malayalam,
        Alphabet::Georgian,
        Alphabet::Katakana,
        Alphabet::Thai,
        Alphabet::Lao,
        Alphabet::Armenian,
        Alphabet::Bengali,
        Alphabet::Gurmukhi,
        Alphabet::Tibetan,
        Alphabet::Arabic,
        Alphabet::Korean,
        Alphabet::Burmese,
        Alphabet::Khmer,
        Alphabet::Sinhalese,
        Alphabet::Thaana,
        Alphabet::Chinese,
        Alphabet::Tifinagh,
        Alphabet::Tamil,
        Alphabet::Amharic,
        Alphabet::Telugu,
        Alphabet::Odia,
        Alphabet::Kannada,
        Alphabet::Gujarati,
    ];

    /// Position in [`Alphabet::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Upper-case name as used in catalog files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Roman => "ROMAN",
            Self::Greek => "GREEK",
            Self::Cyrillic => "CYRILLIC",
            Self::Hebrew => "HEBREW",
            Self::Devanagari => "DEVANAGARI",
            Self::Malayalam => "MALAYALAM",
            Self::Georgian => "GEORGIAN",
            Self::Katakana => "KATAKANA",
            Self::Thai => "THAI",
            Self::Lao => "LAO",
            Self::Armenian => "ARMENIAN",
            Self::Bengali => "BENGALI",
            Self::Gurmukhi => "GURMUKHI",
            Self::Tibetan => "TIBETAN",
            Self::Arabic => "ARABIC",
            Self::Korean => "KOREAN",
            Self::Burmese => "BURMESE",
            Self::Khmer => "KHMER",
            Self::Sinhalese => "SINHALESE",
            Self::Thaana => "THAANA",
            Self::Chinese => "CHINESE",
            Self::Tifinagh => "TIFINAGH",
            Self::Tamil => "TAMIL",
            Self::Amharic => "AMHARIC",
            Self::Telugu => "TELUGU",
            Self::Odia => "ODIA",
            Self::Kannada => "KANNADA",
            Self::Gujarati => "GUJARATI",
        }
    }

    /// Scripts without a full set of vowel glyphs. Codes written in them
    /// go through an extra re-packing step.
    pub fn is_abjad(self) -> bool {
        matches!(
            self,
            Self::Greek | Self::Hebrew | Self::Arabic | Self::Korean
        )
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown alphabet name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlphabet(pub String);

impl fmt::Display for UnknownAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown alphabet '{}'", self.0)
    }
}

impl std::error::Error for UnknownAlphabet {}

impl FromStr for Alphabet {
    type Err = UnknownAlphabet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name() == upper)
            .ok_or(UnknownAlphabet(s.to_string()))
    }
}
