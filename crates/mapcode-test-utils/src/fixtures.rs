//! A miniature world covering every record scheme.
//!
//! | id | code  | records                                              |
//! |----|-------|------------------------------------------------------|
//! | 0  | MON   | one 22 grid                                          |
//! | 1  | UT-NO | 33 grid, outer 44 grid (subdivision of UTL)          |
//! | 2  | VAL   | two nameless 13, restricted 22, two auto-header 23,  |
//! |    |       | pipe 32 with letter X, outer 43 grid                 |
//! | 3  | UTL   | one 44 grid, long code length 8                      |
//! | 4  | FJX   | one 43 grid crossing the antimeridian                |
//! | 5  | ATA   | one 44 grid touching the south pole                  |
//! | 6  | AAA   | the international 54 grid                            |

use mapcode_core::{Boundary, TerritoryCatalog};
use mapcode_data::{encode_model, DataModel, RecordFlags, RecordType, TerritoryRecord, MIN_VERSION};

/// Catalog text for [`fixture_model`].
pub const FIXTURE_CATALOG: &str = "\
# code  parent  alphabets     aliases  long
MON     -       ROMAN         -        -
UT-NO   UTL     ROMAN         -        -
VAL     -       ROMAN,GREEK   VLX      -
UTL     -       ROMAN         UTO      8
FJX     -       ROMAN,ARABIC  -        -
ATA     -       ROMAN         -        -
AAA     -       ROMAN         -        -
";

// ── Territory ids ───────────────────────────────────────────────

pub const MON: u16 = 0;
pub const UT_NO: u16 = 1;
pub const VAL: u16 = 2;
pub const UTL: u16 = 3;
pub const FJX: u16 = 4;
pub const ATA: u16 = 5;
pub const AAA: u16 = 6;

/// Global index of VAL's restricted grid record.
pub const VAL_RESTRICTED_RECORD: usize = 5;

// ── Points of interest (degrees) ────────────────────────────────

/// Inside VAL's first nameless record.
pub const VAL_NAMELESS: (f64, f64) = (10.02, 20.02);
/// Inside VAL's restricted grid, between the two nameless records.
pub const VAL_GAP: (f64, f64) = (10.037, 20.037);
/// Inside VAL's pipe record.
pub const VAL_PIPE: (f64, f64) = (10.4, 19.6);
/// Inside VAL's first auto-header record.
pub const VAL_PLUS: (f64, f64) = (9.3, 19.3);
/// Inside VAL's second auto-header record.
pub const VAL_STAR: (f64, f64) = (9.55, 19.55);
/// Centre of MON.
pub const MON_CENTER: (f64, f64) = (43.74, 7.42);
/// Inside UT-NO's inner record.
pub const UT_NO_INNER: (f64, f64) = (41.75, -111.85);
/// Inside UTL but outside UT-NO.
pub const UTL_ONLY: (f64, f64) = (38.0, -110.0);

// ── Construction ────────────────────────────────────────────────

fn deg(lat_min: f64, lon_min: f64, lat_max: f64, lon_max: f64) -> Boundary {
    let m = |d: f64| (d * 1_000_000.0).round() as i32;
    Boundary::new(m(lat_min), m(lon_min), m(lat_max), m(lon_max))
}

fn flags(codex: u8) -> RecordFlags {
    match RecordFlags::new(codex) {
        Some(f) => f,
        None => panic!("fixture codex {codex} cannot be packed"),
    }
}

fn rec(boundary: Boundary, flags: RecordFlags, smart_div: u16) -> TerritoryRecord {
    TerritoryRecord::new(boundary, flags, smart_div)
}

/// The fixture catalog.
pub fn fixture_catalog() -> TerritoryCatalog {
    match TerritoryCatalog::parse(FIXTURE_CATALOG) {
        Ok(c) => c,
        Err(e) => panic!("fixture catalog does not parse: {e}"),
    }
}

/// Records for each territory of [`FIXTURE_CATALOG`], in order.
pub fn fixture_territories() -> Vec<Vec<TerritoryRecord>> {
    vec![
        // MON
        vec![rec(deg(43.72, 7.40, 43.76, 7.44), flags(22), 31)],
        // UT-NO
        vec![
            rec(deg(41.70, -111.90, 41.80, -111.80), flags(33), 1),
            rec(deg(41.0, -112.5, 42.0, -111.0), flags(44), 1),
        ],
        // VAL
        vec![
            rec(deg(10.005, 20.005, 10.035, 20.035), flags(13).nameless(), 400),
            rec(
                deg(10.040, 20.040, 10.065, 20.065),
                flags(13).nameless().special_shape(),
                400,
            ),
            rec(deg(10.0, 20.0, 10.07, 20.07), flags(22).restricted(), 31),
            rec(deg(9.2, 19.2, 9.4, 19.4), flags(23).with_type(RecordType::Plus), 0),
            rec(deg(9.5, 19.5, 9.6, 19.6), flags(23).with_type(RecordType::Star), 0),
            rec(
                deg(10.3, 19.5, 10.5, 19.7),
                flags(32).with_type(RecordType::Pipe).with_header_letter(28),
                1,
            ),
            rec(deg(9.0, 19.0, 11.0, 21.0), flags(43), 1),
        ],
        // UTL
        vec![rec(deg(37.0, -114.0, 42.0, -109.0), flags(44), 1000)],
        // FJX
        vec![rec(deg(-20.0, 177.0, -15.0, 182.0), flags(43), 1)],
        // ATA
        vec![rec(deg(-90.0, -180.0, -60.0, 180.0), flags(44), 500)],
        // AAA
        vec![rec(
            Boundary::new(-90_000_000, -180_000_000, 90_000_001, 180_000_000),
            flags(54),
            1,
        )],
    ]
}

/// The fixture record model.
pub fn fixture_model() -> DataModel {
    match DataModel::from_territories(MIN_VERSION, fixture_territories()) {
        Ok(m) => m,
        Err(e) => panic!("fixture model is inconsistent: {e}"),
    }
}

/// [`fixture_model`] as a data blob.
pub fn fixture_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    if let Err(e) = encode_model(&mut bytes, &fixture_model()) {
        panic!("fixture model does not encode: {e}");
    }
    bytes
}
