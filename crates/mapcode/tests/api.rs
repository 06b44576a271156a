//! Wrapper operations against the fixture world.

use mapcode::prelude::*;
use mapcode::{is_valid_mapcode_format, parse_mapcode};
use mapcode_test_utils::fixtures::{self, AAA, MON, UT_NO, VAL};
use mapcode_test_utils::{fixture_bytes, fixture_catalog};

fn ctx() -> MapcodeContext {
    MapcodeContext::new(fixture_catalog(), &fixture_bytes()).unwrap()
}

fn near(p: Point, (lat, lon): (f64, f64), meters: f64) -> bool {
    p.distance_in_meters(&Point::from_deg(lat, lon).unwrap()) <= meters
}

// ── Encoding ────────────────────────────────────────────────────

#[test]
fn encode_ends_with_international() {
    let ctx = ctx();
    let (lat, lon) = fixtures::VAL_NAMELESS;
    let all = encode(&ctx, lat, lon, None).unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].code_with_territory(ctx.catalog()), "VAL 02.60L");
    let int = encode_to_international(&ctx, lat, lon, 0).unwrap();
    assert_eq!(all.last(), Some(&int));
    assert_eq!(int.territory(), TerritoryId(AAA));
}

#[test]
fn encode_with_extension() {
    let ctx = ctx();
    let (lat, lon) = fixtures::VAL_NAMELESS;
    let all = encode_with_precision(&ctx, lat, lon, Some(TerritoryId(VAL)), 2).unwrap();
    assert_eq!(all[0].code(), "02.60L-S4");
    assert!(all.iter().all(|m| m.precision() == 2));
}

#[test]
fn bad_arguments_are_rejected() {
    let ctx = ctx();
    for (lat, lon) in [(90.5, 0.0), (-91.0, 0.0), (f64::NAN, 0.0), (0.0, f64::INFINITY)] {
        assert!(matches!(
            encode(&ctx, lat, lon, None),
            Err(MapcodeError::IllegalArgument { .. })
        ));
    }
    assert!(matches!(
        encode_with_precision(&ctx, 0.0, 0.0, None, 9),
        Err(MapcodeError::IllegalArgument { .. })
    ));
}

#[test]
fn checked_api_is_stricter_than_engine_about_latitude() {
    let ctx = ctx();
    assert!(encode(&ctx, 95.0, 0.0, None).is_err());
    let clamped = mapcode::engine::encode(&ctx, 95.0, 0.0, None, Default::default());
    let pole = encode(&ctx, 90.0, 0.0, None).unwrap();
    assert_eq!(clamped, pole);
}

#[test]
fn longitude_outside_range_wraps() {
    let ctx = ctx();
    assert_eq!(
        encode(&ctx, 10.02, 380.02, None).unwrap(),
        encode(&ctx, 10.02, 20.02, None).unwrap()
    );
}

#[test]
fn shortest_in_territory() {
    let ctx = ctx();
    let (lat, lon) = fixtures::UT_NO_INNER;
    let ut_no = territory_from_name(&ctx, "UT-NO", None).unwrap();
    assert_eq!(ut_no, TerritoryId(UT_NO));
    assert_eq!(
        encode_to_shortest(&ctx, lat, lon, ut_no, 0).unwrap().code(),
        "GV1.BRL"
    );
    assert_eq!(
        encode_to_shortest(&ctx, lat, lon, TerritoryId(MON), 0),
        Err(MapcodeError::NotCovered)
    );
}

// ── Decoding ────────────────────────────────────────────────────

#[test]
fn decode_with_territory_prefix_or_default() {
    let ctx = ctx();
    let target = fixtures::VAL_NAMELESS;
    let safe = safe_max_offset_in_meters(0);
    assert!(near(decode(&ctx, "VAL 02.60L", None).unwrap(), target, safe));
    assert!(near(decode(&ctx, "vlx 02.60l", None).unwrap(), target, safe));
    assert!(near(
        decode(&ctx, "02.60L", Some(TerritoryId(VAL))).unwrap(),
        target,
        safe
    ));
    assert!(near(decode(&ctx, "K3476.LCJD", None).unwrap(), target, safe));
    assert!(near(
        decode(&ctx, "VAL 02.60L-S4004523", None).unwrap(),
        target,
        safe_max_offset_in_meters(8)
    ));
}

#[test]
fn short_subdivision_code_resolves() {
    let ctx = ctx();
    let utl = territory_from_name(&ctx, "UTO", None).unwrap();
    let p = decode(&ctx, "NO GV1.BRL", Some(utl)).unwrap();
    assert!(near(p, fixtures::UT_NO_INNER, safe_max_offset_in_meters(0)));
}

#[test]
fn decode_failures_are_typed() {
    let ctx = ctx();
    assert_eq!(
        decode(&ctx, "XYZ 02.60L", None),
        Err(MapcodeError::UnknownTerritory { name: "XYZ".into() })
    );
    assert_eq!(
        decode(&ctx, "VAL JG.CM", None),
        Err(MapcodeError::UnknownMapcode {
            code: "VAL JG.CM".into()
        })
    );
    assert!(matches!(
        decode(&ctx, "VAL 02", None),
        Err(MapcodeError::IllegalArgument { .. })
    ));
    // Short codes without territory are international, and do not exist there.
    assert!(matches!(
        decode(&ctx, "02.60L", None),
        Err(MapcodeError::UnknownMapcode { .. })
    ));
}

#[test]
fn rectangle_contains_the_point() {
    let ctx = ctx();
    let (lat, lon) = fixtures::VAL_NAMELESS;
    let r = decode_to_rectangle(&ctx, "VAL 8Q.V4", None).unwrap();
    assert!(r.south_west.lat_deg() <= lat && lat < r.north_east.lat_deg());
    assert!(r.south_west.lon_deg() <= lon && lon < r.north_east.lon_deg());
    let c = decode(&ctx, "VAL 8Q.V4", None).unwrap();
    assert!((r.center().lat_deg() - c.lat_deg()).abs() < 1e-9);
}

// ── Alphabets ───────────────────────────────────────────────────

#[test]
fn codes_decode_from_any_script() {
    let ctx = ctx();
    let (lat, lon) = fixtures::VAL_NAMELESS;
    for m in encode(&ctx, lat, lon, None).unwrap() {
        let expected = decode(&ctx, m.code(), Some(m.territory())).unwrap();
        for alphabet in Alphabet::ALL {
            let written = code_in_alphabet(&m, alphabet);
            let got = decode(&ctx, &written, Some(m.territory())).unwrap();
            assert_eq!(got, expected, "{} in {alphabet}", m.code());
        }
    }
}

#[test]
fn format_check_ignores_data() {
    assert!(is_valid_mapcode_format("VAL JG.CM"));
    assert!(!is_valid_mapcode_format("VAL JG"));
    assert_eq!(parse_mapcode("ut_no gv1.brl").unwrap().territory.as_deref(), Some("UT_NO"));
}
