//! Property tests: every code of a point decodes back to within the
//! advertised distance of it.

use mapcode_core::{safe_max_offset_in_meters, Point};
use mapcode_engine::{encode, EncodeOptions, MapcodeContext};
use mapcode_test_utils::fixtures::AAA;
use mapcode_test_utils::{fixture_bytes, fixture_catalog};
use proptest::prelude::*;
use std::sync::OnceLock;

fn ctx() -> &'static MapcodeContext {
    static CTX: OnceLock<MapcodeContext> = OnceLock::new();
    CTX.get_or_init(|| MapcodeContext::new(fixture_catalog(), &fixture_bytes()).unwrap())
}

/// (lat_min, lat_max, lon_min, lon_max) of areas worth sampling.
const AREAS: [(f64, f64, f64, f64); 15] = [
    (43.72, 43.76, 7.40, 7.44),
    (41.0, 42.0, -112.5, -111.0),
    (41.7, 41.8, -111.9, -111.8),
    (10.0, 10.07, 20.0, 20.07),
    (10.005, 10.035, 20.005, 20.035),
    (10.04, 10.065, 20.04, 20.065),
    (9.2, 9.4, 19.2, 19.4),
    (9.5, 9.6, 19.5, 19.6),
    (10.3, 10.5, 19.5, 19.7),
    (9.0, 11.0, 19.0, 21.0),
    (37.0, 42.0, -114.0, -109.0),
    (-20.0, -15.0, 177.0, 180.0),
    (-20.0, -15.0, -180.0, -178.0),
    (-90.0, -60.0, -180.0, 180.0),
    (-90.0, 90.0, -180.0, 180.0),
];

fn point_in_area() -> impl Strategy<Value = (f64, f64)> {
    (0..AREAS.len(), 0.0f64..1.0, 0.0f64..1.0).prop_map(|(i, a, b)| {
        let (lat0, lat1, lon0, lon1) = AREAS[i];
        (lat0 + a * (lat1 - lat0), lon0 + b * (lon1 - lon0))
    })
}

proptest! {
    #[test]
    fn every_code_decodes_near_the_point(
        (lat, lon) in point_in_area(),
        precision in 0usize..=8,
    ) {
        let ctx = ctx();
        let target = Point::from_deg(lat, lon).unwrap();
        let all = encode(ctx, lat, lon, None, EncodeOptions::with_precision(precision));
        prop_assert!(!all.is_empty());
        prop_assert_eq!(all.last().unwrap().territory().0, AAA);

        for m in &all {
            let zone = ctx.decode_to_zone(m.code(), m.territory());
            prop_assert!(!zone.is_empty(), "{} decodes to nothing", m.code());
            let d = zone.center().unwrap().distance_in_meters(&target);
            prop_assert!(
                d <= safe_max_offset_in_meters(precision),
                "{} is {} m from ({}, {})", m.code(), d, lat, lon
            );
        }
    }

    #[test]
    fn codes_carry_the_requested_precision(
        (lat, lon) in point_in_area(),
        precision in 0usize..=8,
    ) {
        let all = encode(ctx(), lat, lon, None, EncodeOptions::with_precision(precision));
        for m in &all {
            prop_assert_eq!(m.precision(), precision);
        }
    }

    #[test]
    fn first_only_returns_the_head(
        (lat, lon) in point_in_area(),
    ) {
        let ctx = ctx();
        let all = encode(ctx, lat, lon, None, EncodeOptions::default());
        let first = encode(ctx, lat, lon, None, EncodeOptions::default().first_only());
        prop_assert_eq!(first.len(), 1);
        prop_assert_eq!(&first[0], &all[0]);
    }
}
