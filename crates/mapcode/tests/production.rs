//! Scenarios against the production data files.
//!
//! Run with `MAPCODE_DATA` and `MAPCODE_TERRITORIES` pointing at the
//! files and `--ignored`.

use mapcode::prelude::*;

fn ctx() -> MapcodeContext {
    let config = ContextConfig::from_env().unwrap();
    MapcodeContext::from_config(&config).unwrap()
}

fn assert_near(p: Point, lat: f64, lon: f64, meters: f64) {
    let d = p.distance_in_meters(&Point::from_deg(lat, lon).unwrap());
    assert!(d <= meters, "{p} is {d} m from ({lat}, {lon})");
}

#[test]
#[ignore = "needs production data files"]
fn amsterdam_short_code() {
    let ctx = ctx();
    let nld = territory_from_name(&ctx, "NLD", None).unwrap();
    let p = decode(&ctx, "49.4V", Some(nld)).unwrap();
    assert_near(p, 52.376514, 4.908543, safe_max_offset_in_meters(0));

    let first = encode(&ctx, 52.376514, 4.908542, Some(nld)).unwrap();
    assert_eq!(first[0].code_with_territory(ctx.catalog()), "NLD 49.4V");
}

#[test]
#[ignore = "needs production data files"]
fn amsterdam_with_extension() {
    let ctx = ctx();
    let p = decode(&ctx, "NLD 49.4V-K2", None).unwrap();
    assert_near(p, 52.376512, 4.908540, safe_max_offset_in_meters(2));
}

#[test]
#[ignore = "needs production data files"]
fn every_code_round_trips_around_amsterdam() {
    let ctx = ctx();
    for i in 0..100 {
        let lat = 52.3 + f64::from(i) * 0.001;
        let lon = 4.85 + f64::from(i) * 0.0013;
        for m in encode(&ctx, lat, lon, None).unwrap() {
            let p = decode(&ctx, m.code(), Some(m.territory())).unwrap();
            assert_near(p, lat, lon, safe_max_offset_in_meters(0));
        }
    }
}
