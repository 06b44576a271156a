//! Territory records and their packed flags.
//!
//! The on-disk flags word is a 16-bit bit field. It is decoded once at
//! load time into [`RecordFlags`] so that the engine never shifts bits.
//!
//! ```text
//! bits 0-4   codex    (prefix * 5 + postfix - 1)
//! bit  6     nameless
//! bits 7-8   record type (0 none, 1 pipe, 2 plus, 3 star)
//! bit  9     restricted
//! bit  10    special shape
//! bits 11-15 header letter (pipe records only)
//! ```

use mapcode_core::Boundary;

const CODEX_MASK: u16 = 0x1f;
const NAMELESS_BIT: u16 = 1 << 6;
const TYPE_SHIFT: u16 = 7;
const RESTRICTED_BIT: u16 = 1 << 9;
const SPECIAL_SHAPE_BIT: u16 = 1 << 10;
const LETTER_SHIFT: u16 = 11;

/// How a record's codes are numbered, beyond its codex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// Plain grid or nameless record.
    None,
    /// Grid record whose codes carry a leading header letter.
    Pipe,
    /// Auto-header record; capacity rounded to the run modulus.
    Plus,
    /// Auto-header record without extra rounding.
    Star,
}

impl RecordType {
    fn from_bits(bits: u16) -> Self {
        match bits & 3 {
            0 => Self::None,
            1 => Self::Pipe,
            2 => Self::Plus,
            _ => Self::Star,
        }
    }

    fn bits(self) -> u16 {
        match self {
            Self::None => 0,
            Self::Pipe => 1,
            Self::Plus => 2,
            Self::Star => 3,
        }
    }

    /// Plus or star.
    pub fn is_auto_header(self) -> bool {
        matches!(self, Self::Plus | Self::Star)
    }
}

/// The packed flags word as named fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordFlags {
    /// Code shape: ten times the characters before the dot plus the
    /// characters after it.
    pub codex: u8,
    /// Record numbering variant.
    pub record_type: RecordType,
    /// Auto-numbered record without its own name.
    pub nameless: bool,
    /// Grid codes are only valid where no earlier sibling applies.
    pub restricted: bool,
    /// Nameless cells are laid out with the six-wide fold.
    pub special_shape: bool,
    /// Index into the encoding alphabet of the header letter.
    pub header_letter: u8,
}

impl RecordFlags {
    /// Plain flags for a codex. Returns `None` if the codex cannot be
    /// packed (postfix outside `1..=5` or field overflow).
    pub fn new(codex: u8) -> Option<Self> {
        let (pre, post) = (codex / 10, codex % 10);
        if !(1..=5).contains(&post) || pre * 5 + post - 1 > CODEX_MASK as u8 {
            return None;
        }
        Some(Self {
            codex,
            record_type: RecordType::None,
            nameless: false,
            restricted: false,
            special_shape: false,
            header_letter: 0,
        })
    }

    /// Decode a packed flags word.
    pub fn from_raw(raw: u16) -> Self {
        let cf = (raw & CODEX_MASK) as u8;
        Self {
            codex: 10 * (cf / 5) + cf % 5 + 1,
            record_type: RecordType::from_bits(raw >> TYPE_SHIFT),
            nameless: raw & NAMELESS_BIT != 0,
            restricted: raw & RESTRICTED_BIT != 0,
            special_shape: raw & SPECIAL_SHAPE_BIT != 0,
            header_letter: ((raw >> LETTER_SHIFT) & 31) as u8,
        }
    }

    /// Pack back into the on-disk word.
    pub fn to_raw(self) -> u16 {
        let cf = u16::from((self.codex / 10) * 5 + (self.codex % 10).saturating_sub(1));
        let mut raw = cf & CODEX_MASK;
        if self.nameless {
            raw |= NAMELESS_BIT;
        }
        raw |= self.record_type.bits() << TYPE_SHIFT;
        if self.restricted {
            raw |= RESTRICTED_BIT;
        }
        if self.special_shape {
            raw |= SPECIAL_SHAPE_BIT;
        }
        raw | (u16::from(self.header_letter & 31) << LETTER_SHIFT)
    }

    /// Characters before the dot.
    pub fn prefix_len(&self) -> usize {
        (self.codex / 10) as usize
    }

    /// Characters after the dot.
    pub fn postfix_len(&self) -> usize {
        (self.codex % 10) as usize
    }

    /// Total characters, dot excluded.
    pub fn code_len(&self) -> usize {
        self.prefix_len() + self.postfix_len()
    }

    /// Mark as nameless.
    pub fn nameless(mut self) -> Self {
        self.nameless = true;
        self
    }

    /// Mark as restricted.
    pub fn restricted(mut self) -> Self {
        self.restricted = true;
        self
    }

    /// Mark as special shape.
    pub fn special_shape(mut self) -> Self {
        self.special_shape = true;
        self
    }

    /// Set the record type.
    pub fn with_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    /// Make this a pipe record with the given header letter index.
    pub fn with_header_letter(mut self, letter: u8) -> Self {
        self.record_type = RecordType::Pipe;
        self.header_letter = letter & 31;
        self
    }
}

/// One rectangle of a territory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TerritoryRecord {
    /// Rectangle in microdegrees.
    pub boundary: Boundary,
    /// Decoded flags.
    pub flags: RecordFlags,
    /// Stored divisor for the grid Y axis; 1 selects the fixed side tables.
    pub smart_div: u16,
}

impl TerritoryRecord {
    /// Bundle a record.
    pub fn new(boundary: Boundary, flags: RecordFlags, smart_div: u16) -> Self {
        Self {
            boundary,
            flags,
            smart_div,
        }
    }

    /// The fifth on-disk word: flags in the low half, divisor in the high.
    pub fn packed_word(&self) -> u32 {
        u32::from(self.flags.to_raw()) | (u32::from(self.smart_div) << 16)
    }
}
