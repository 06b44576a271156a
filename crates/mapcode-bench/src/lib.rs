//! Benchmark inputs for the Mapcode engine.
//!
//! - [`fixture_context`]: the test-utils world as a ready context
//! - [`sample_points`]: deterministic points inside the fixture territories

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mapcode_engine::MapcodeContext;
use mapcode_test_utils::{fixture_bytes, fixture_catalog};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Areas the sample points are drawn from: (lat_min, lat_max, lon_min, lon_max).
const AREAS: [(f64, f64, f64, f64); 6] = [
    (43.72, 43.76, 7.40, 7.44),
    (41.0, 42.0, -112.5, -111.0),
    (9.0, 11.0, 19.0, 21.0),
    (10.0, 10.07, 20.0, 20.07),
    (37.0, 42.0, -114.0, -109.0),
    (-90.0, 90.0, -180.0, 180.0),
];

/// Build the fixture context.
pub fn fixture_context() -> MapcodeContext {
    MapcodeContext::new(fixture_catalog(), &fixture_bytes()).unwrap()
}

/// `count` points spread over the fixture areas, reproducible from `seed`.
pub fn sample_points(count: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let (lat0, lat1, lon0, lon1) = AREAS[rng.random_range(0..AREAS.len())];
            (rng.random_range(lat0..lat1), rng.random_range(lon0..lon1))
        })
        .collect()
}
