//! Encode and decode against the fixture world.
//!
//! Expected codes were worked out by hand from the record layout in
//! `mapcode_test_utils::fixtures`.

use mapcode_alphabet::{to_alphabet, Alphabet};
use mapcode_core::{Boundary, MicroPoint, Point, TerritoryId};
use mapcode_data::{DataModel, RecordFlags, TerritoryRecord, MIN_VERSION};
use mapcode_engine::{
    encode, encode_to_international, encode_to_shortest, is_near_multiple_borders, EncodeOptions,
    MapcodeContext,
};
use mapcode_test_utils::fixtures::{self, AAA, ATA, FJX, MON, UTL, UT_NO, VAL};
use mapcode_test_utils::{fixture_bytes, fixture_catalog};

// ── Helpers ─────────────────────────────────────────────────────

fn ctx() -> MapcodeContext {
    MapcodeContext::new(fixture_catalog(), &fixture_bytes()).unwrap()
}

fn codes(ctx: &MapcodeContext, (lat, lon): (f64, f64)) -> Vec<(String, String)> {
    codes_with(ctx, (lat, lon), None, EncodeOptions::default())
}

fn codes_with(
    ctx: &MapcodeContext,
    (lat, lon): (f64, f64),
    filter: Option<u16>,
    options: EncodeOptions,
) -> Vec<(String, String)> {
    encode(ctx, lat, lon, filter.map(TerritoryId), options)
        .into_iter()
        .map(|m| {
            (
                m.code().to_string(),
                ctx.catalog().code(m.territory()).to_string(),
            )
        })
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(c, t)| (c.to_string(), t.to_string()))
        .collect()
}

fn center(ctx: &MapcodeContext, code: &str, territory: u16) -> Point {
    ctx.decode_to_zone(code, TerritoryId(territory))
        .center()
        .unwrap_or_else(|| panic!("{code} decodes to nothing"))
}

// ── Encoding ────────────────────────────────────────────────────

#[test]
fn every_vals_scheme_in_one_point() {
    let ctx = ctx();
    assert_eq!(
        codes(&ctx, fixtures::VAL_NAMELESS),
        pairs(&[
            ("02.60L", "VAL"),
            ("8Q.V4", "VAL"),
            ("HHS6.574", "VAL"),
            ("K3476.LCJD", "AAA"),
        ])
    );
}

#[test]
fn special_shape_nameless_record() {
    let ctx = ctx();
    assert_eq!(
        codes(&ctx, (10.05, 20.05)),
        pairs(&[
            ("J1.18P", "VAL"),
            ("Q8.4V", "VAL"),
            ("JG8Q.MTS", "VAL"),
            ("K3471.1G05", "AAA"),
        ])
    );
}

#[test]
fn pipe_and_auto_header_records() {
    let ctx = ctx();
    assert_eq!(
        codes(&ctx, fixtures::VAL_PIPE),
        pairs(&[("XGV1.Y1", "VAL"), ("9999.F25", "VAL"), ("K212W.JV52", "AAA")])
    );
    assert_eq!(
        codes(&ctx, fixtures::VAL_PLUS),
        pairs(&[("02Q.KHR", "VAL"), ("4VNB.SLT", "VAL"), ("K0Y7J.56N1", "AAA")])
    );
    assert_eq!(
        codes(&ctx, fixtures::VAL_STAR),
        pairs(&[("10S.GRG", "VAL"), ("8QJG.T46", "VAL"), ("K217W.SLRW", "AAA")])
    );
}

#[test]
fn single_record_territory() {
    let ctx = ctx();
    assert_eq!(
        codes(&ctx, fixtures::MON_CENTER),
        pairs(&[("HH.HH", "MON"), ("HZVVJ.99XD", "AAA")])
    );
}

#[test]
fn subdivision_outer_record_is_encoded_by_parent() {
    let ctx = ctx();
    assert_eq!(
        codes(&ctx, fixtures::UT_NO_INNER),
        pairs(&[
            ("GV1.BRL", "UT-NO"),
            ("F9CP.SZ1Z", "UT-NO"),
            ("F9CP.SZ1Z", "UTL"),
            ("5THQ0.WMQ2", "AAA"),
        ])
    );
    assert_eq!(
        codes(&ctx, fixtures::UTL_ONLY),
        pairs(&[("SXY3.8Z4Z", "UTL"), ("5YXP5.N8CV", "AAA")])
    );
}

#[test]
fn filter_selects_one_territory() {
    let ctx = ctx();
    let opts = EncodeOptions::default();
    assert_eq!(
        codes_with(&ctx, fixtures::UT_NO_INNER, Some(UT_NO), opts),
        pairs(&[("GV1.BRL", "UT-NO"), ("F9CP.SZ1Z", "UT-NO")])
    );
    assert_eq!(
        codes_with(&ctx, fixtures::UT_NO_INNER, Some(UTL), opts),
        pairs(&[("F9CP.SZ1Z", "UTL")])
    );
    assert!(codes_with(&ctx, fixtures::UTL_ONLY, Some(UT_NO), opts).is_empty());
    assert!(codes_with(&ctx, fixtures::MON_CENTER, Some(VAL), opts).is_empty());
}

#[test]
fn shortest_and_international() {
    let ctx = ctx();
    let (lat, lon) = fixtures::UT_NO_INNER;
    let shortest = encode_to_shortest(&ctx, lat, lon, TerritoryId(UT_NO), 0).unwrap();
    assert_eq!(shortest.code(), "GV1.BRL");
    assert_eq!(shortest.territory(), TerritoryId(UT_NO));

    let (lat, lon) = fixtures::VAL_NAMELESS;
    let with_ext = encode_to_shortest(&ctx, lat, lon, TerritoryId(VAL), 2).unwrap();
    assert_eq!(with_ext.code(), "02.60L-S4");

    let int = encode_to_international(&ctx, lat, lon, 0).unwrap();
    assert_eq!(int.code(), "K3476.LCJD");
    assert_eq!(int.territory(), TerritoryId(AAA));

    assert!(encode_to_shortest(&ctx, lat, lon, TerritoryId(MON), 0).is_none());
}

#[test]
fn international_code_is_always_last() {
    let ctx = ctx();
    for p in [
        fixtures::VAL_NAMELESS,
        fixtures::VAL_GAP,
        fixtures::MON_CENTER,
        fixtures::UT_NO_INNER,
        (0.0, 0.0),
        (-45.0, 100.0),
    ] {
        let all = codes(&ctx, p);
        assert_eq!(all.last().map(|(_, t)| t.as_str()), Some("AAA"), "{p:?}");
        assert_eq!(all.iter().filter(|(_, t)| t == "AAA").count(), 1, "{p:?}");
    }
}

#[test]
fn eight_digit_extension() {
    let ctx = ctx();
    let all = codes_with(
        &ctx,
        fixtures::VAL_NAMELESS,
        None,
        EncodeOptions::with_precision(8),
    );
    assert_eq!(all[0].0, "02.60L-S4004523");
    let p = center(&ctx, "02.60L-S4004523", VAL);
    assert!((p.lat_deg() - 10.02).abs() < 1e-7);
    assert!((p.lon_deg() - 20.02).abs() < 1e-7);
}

#[test]
fn precision_above_eight_is_capped() {
    let ctx = ctx();
    assert_eq!(
        codes_with(&ctx, fixtures::VAL_NAMELESS, None, EncodeOptions::with_precision(12)),
        codes_with(&ctx, fixtures::VAL_NAMELESS, None, EncodeOptions::with_precision(8)),
    );
}

// ── Edges of the world ──────────────────────────────────────────

#[test]
fn longitude_wraps() {
    let ctx = ctx();
    for lat in [-17.0, 0.0, 52.0] {
        assert_eq!(codes(&ctx, (lat, -180.0)), codes(&ctx, (lat, 180.0)), "lat {lat}");
    }
    assert_eq!(
        codes(&ctx, (10.02, -339.98)),
        codes(&ctx, fixtures::VAL_NAMELESS)
    );
    assert_eq!(codes(&ctx, (43.74, 367.42)), codes(&ctx, fixtures::MON_CENTER));
}

#[test]
fn record_spanning_antimeridian() {
    let ctx = ctx();
    assert_eq!(
        codes(&ctx, (-17.0, 179.5)),
        pairs(&[("HDHD.GXP", "FJX"), ("ZQ83T.QCD0", "AAA")])
    );
    assert_eq!(
        codes(&ctx, (-17.0, -179.5)),
        pairs(&[("PDPD.J3G", "FJX"), ("01R9Q.7C60", "AAA")])
    );
    let p = center(&ctx, "PDPD.J3G", FJX);
    assert!((p.lon_deg() + 179.5).abs() < 1e-4, "{p}");
}

#[test]
fn poles() {
    let ctx = ctx();
    assert_eq!(codes(&ctx, (90.0, 0.0)), pairs(&[("HBSY5.Z49L", "AAA")]));
    assert_eq!(codes(&ctx, (95.0, 0.0)), codes(&ctx, (90.0, 0.0)));
    assert_eq!(
        codes(&ctx, (-90.0, 0.0)),
        pairs(&[("HHR6.HZFZ", "ATA"), ("HCWZZ.ZZ9Z", "AAA")])
    );
    let north = center(&ctx, "HBSY5.Z49L", AAA);
    assert!(north.lat_deg() <= 90.0 && north.lat_deg() > 89.9999);
    let south = center(&ctx, "HHR6.HZFZ", ATA);
    assert!(south.lat_deg() >= -90.0 && south.lat_deg() < -89.9999);
}

#[test]
fn non_finite_input_gives_nothing() {
    let ctx = ctx();
    assert!(codes(&ctx, (f64::NAN, 0.0)).is_empty());
    assert!(codes(&ctx, (0.0, f64::INFINITY)).is_empty());
}

// ── Decoding ────────────────────────────────────────────────────

#[test]
fn decodes_back_near_the_point() {
    let ctx = ctx();
    let target = Point::from_deg(10.02, 20.02).unwrap();
    for code in ["02.60L", "8Q.V4", "HHS6.574"] {
        let d = center(&ctx, code, VAL).distance_in_meters(&target);
        assert!(d < 7.49, "{code} is {d} m away");
    }
    let d = center(&ctx, "K3476.LCJD", AAA).distance_in_meters(&target);
    assert!(d < 7.49);
}

#[test]
fn decode_ignores_case() {
    let ctx = ctx();
    assert_eq!(
        ctx.decode_to_zone("hhs6.574", TerritoryId(VAL)),
        ctx.decode_to_zone("HHS6.574", TerritoryId(VAL))
    );
}

#[test]
fn decode_reads_any_script() {
    let ctx = ctx();
    let val = TerritoryId(VAL);
    let plain = ctx.decode_to_zone("HHS6.574", val);
    assert!(!plain.is_empty());
    for alphabet in [Alphabet::Cyrillic, Alphabet::Greek, Alphabet::Thai, Alphabet::Arabic] {
        let written = to_alphabet("HHS6.574", alphabet);
        assert_ne!(written, "HHS6.574");
        assert_eq!(ctx.decode_to_zone(&written, val), plain, "{alphabet}");
    }
    let with_ext = to_alphabet("02.60L-S4", Alphabet::Cyrillic);
    assert_eq!(
        ctx.decode_to_zone(&with_ext, val),
        ctx.decode_to_zone("02.60L-S4", val)
    );
}

#[test]
fn long_codes_fall_back_to_parent_and_international() {
    let ctx = ctx();
    let via_sub = center(&ctx, "F9CP.SZ1Z", UT_NO);
    let via_parent = center(&ctx, "F9CP.SZ1Z", UTL);
    assert_eq!(via_sub, via_parent);
    assert!((via_sub.lat_deg() - 41.75).abs() < 1e-4);

    // Any nine-character code is international whatever the territory.
    assert_eq!(
        ctx.decode_to_zone("K3476.LCJD", TerritoryId(MON)),
        ctx.decode_to_zone("K3476.LCJD", TerritoryId(AAA))
    );
}

#[test]
fn restricted_record_only_covers_gaps_of_one_sibling() {
    let ctx = ctx();
    // Code of the restricted grid for a point outside both nameless records.
    assert!(ctx.decode_to_zone("JG.CM", TerritoryId(VAL)).is_empty());

    // A grid cell straddling the first nameless record is clipped to it.
    let zone = ctx.decode_to_zone("8H.VH", TerritoryId(VAL));
    assert!(!zone.is_empty());
    let rect = zone.to_rectangle().unwrap();
    assert!((rect.north_east.lat_deg() - 10.035).abs() < 1e-9);
    assert!(rect.south_west.lat_deg() >= 10.0349);
}

/// Two siblings side by side with a 200 microdegree gap at lon 0.5004..0.5006,
/// then a coarse grid record over both.
fn straddle_context(restricted: bool) -> MapcodeContext {
    let catalog = mapcode_core::TerritoryCatalog::parse("RST\nAAA\n").unwrap();
    let sibling = RecordFlags::new(33).unwrap();
    let mut grid = RecordFlags::new(22).unwrap();
    if restricted {
        grid = grid.restricted();
    }
    let model = DataModel::from_territories(
        MIN_VERSION,
        vec![
            vec![
                TerritoryRecord::new(Boundary::new(0, 0, 961_000, 500_400), sibling, 1),
                TerritoryRecord::new(Boundary::new(0, 500_600, 961_000, 961_000), sibling, 1),
                TerritoryRecord::new(Boundary::new(0, 0, 961_000, 961_000), grid, 1),
            ],
            vec![TerritoryRecord::new(
                Boundary::new(-90_000_000, -180_000_000, 90_000_001, 180_000_000),
                RecordFlags::new(54).unwrap(),
                1,
            )],
        ],
    )
    .unwrap();
    MapcodeContext::from_parts(catalog, model).unwrap()
}

#[test]
fn restricted_cell_over_two_siblings_decodes_empty() {
    // Cell lat 0.015..0.016, lon 0.500..0.501: its middle is in the gap.
    let open = straddle_context(false).decode_to_zone("JZ.4H", TerritoryId(0));
    let rect = open.to_rectangle().unwrap();
    assert!((rect.south_west.lat_deg() - 0.015).abs() < 1e-9);
    assert!((rect.south_west.lon_deg() - 0.5).abs() < 1e-9);
    assert!((rect.north_east.lon_deg() - 0.501).abs() < 1e-9);

    let restricted = straddle_context(true).decode_to_zone("JZ.4H", TerritoryId(0));
    assert!(restricted.is_empty());
}

#[test]
fn gap_point_uses_outer_record() {
    let ctx = ctx();
    assert_eq!(
        codes(&ctx, fixtures::VAL_GAP),
        pairs(&[("JG2X.SJB", "VAL"), ("K3470.VV44", "AAA")])
    );
}

#[test]
fn malformed_codes_decode_empty() {
    let ctx = ctx();
    let val = TerritoryId(VAL);
    for code in [
        "",
        ".",
        "02",
        "0.2.60",
        "02.6!L",
        "02.60L-",
        "02.60L-Z",
        "02.60L-123456789",
        "HHS6.57\u{e9}",
        "1234567890.1",
    ] {
        assert!(ctx.decode_to_zone(code, val).is_empty(), "{code:?}");
    }
    assert!(ctx.decode_to_zone("02.60L", TerritoryId(999)).is_empty());
}

// ── Border proximity ────────────────────────────────────────────

#[test]
fn fixture_points_are_not_near_two_borders() {
    let ctx = ctx();
    let p = MicroPoint::from_deg(10.02, 20.02).unwrap();
    assert!(!is_near_multiple_borders(&ctx, &p, TerritoryId(VAL)));
    let corner = MicroPoint::from_deg(10.005, 20.005).unwrap();
    assert!(!is_near_multiple_borders(&ctx, &corner, TerritoryId(VAL)));
    assert!(!is_near_multiple_borders(&ctx, &p, TerritoryId(AAA)));
}

#[test]
fn shared_edge_is_near_two_borders() {
    let catalog = mapcode_core::TerritoryCatalog::parse("TWO\nAAA\n").unwrap();
    let flags = RecordFlags::new(22).unwrap();
    let model = DataModel::from_territories(
        MIN_VERSION,
        vec![
            vec![
                TerritoryRecord::new(Boundary::new(0, 0, 1_000_000, 1_000_000), flags, 31),
                TerritoryRecord::new(Boundary::new(1_000_000, 0, 2_000_000, 1_000_000), flags, 31),
            ],
            vec![TerritoryRecord::new(
                Boundary::new(-90_000_000, -180_000_000, 90_000_001, 180_000_000),
                RecordFlags::new(54).unwrap(),
                1,
            )],
        ],
    )
    .unwrap();
    let ctx = MapcodeContext::from_parts(catalog, model).unwrap();
    let on_edge = MicroPoint::from_micro(1_000_000, 500_000);
    assert!(is_near_multiple_borders(&ctx, &on_edge, TerritoryId(0)));
    let inside = MicroPoint::from_micro(500_000, 500_000);
    assert!(!is_near_multiple_borders(&ctx, &inside, TerritoryId(0)));
}
