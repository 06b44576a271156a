//! Points in degrees and in the microdegree-plus-fraction form.
//!
//! The numbering schemes work on integer microdegrees. The part of a
//! coordinate below one microdegree is kept as an integer "fraction" so
//! that up to eight extension digits can be produced without floating
//! point drift: one latitude microdegree is 810,000 fractions (30^4) and
//! one longitude microdegree is 3,240,000 fractions (4 * 30^4).

use std::fmt;

/// Microdegrees per degree.
pub const MICRODEG_PER_DEG: i32 = 1_000_000;

/// A full turn of longitude in microdegrees.
pub const MICRODEG_360: i32 = 360_000_000;

/// Latitude fractions per microdegree.
pub const LAT_FRACTIONS_PER_MICRODEG: i64 = 810_000;

/// Longitude fractions per microdegree.
pub const LON_FRACTIONS_PER_MICRODEG: i64 = 3_240_000;

const LAT_FRACTIONS_PER_DEG: f64 = 810_000_000_000.0;
const LON_FRACTIONS_PER_DEG: f64 = 3_240_000_000_000.0;

/// Mean Earth radii used for the flat distance approximation.
const EARTH_RADIUS_X_METERS: f64 = 6_378_137.0;
const EARTH_RADIUS_Y_METERS: f64 = 6_356_752.0;

/// A WGS84 coordinate in degrees.
///
/// Latitude is clamped to `[-90, 90]` and longitude wrapped to
/// `[-180, 180)` on construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    lat_deg: f64,
    lon_deg: f64,
}

impl Point {
    /// Build a normalised point. Returns `None` for NaN or infinite input.
    pub fn from_deg(lat_deg: f64, lon_deg: f64) -> Option<Self> {
        if !lat_deg.is_finite() || !lon_deg.is_finite() {
            return None;
        }
        Some(Self {
            lat_deg: lat_deg.clamp(-90.0, 90.0),
            lon_deg: wrap_lon_deg(lon_deg),
        })
    }

    /// Build a point from zone fractions (see [`MicroPoint`]).
    pub fn from_fractions(lat_fraction: f64, lon_fraction: f64) -> Self {
        Self {
            lat_deg: (lat_fraction / LAT_FRACTIONS_PER_DEG).clamp(-90.0, 90.0),
            lon_deg: wrap_lon_deg(lon_fraction / LON_FRACTIONS_PER_DEG),
        }
    }

    /// Latitude in degrees.
    pub fn lat_deg(&self) -> f64 {
        self.lat_deg
    }

    /// Longitude in degrees, in `[-180, 180)`.
    pub fn lon_deg(&self) -> f64 {
        self.lon_deg
    }

    /// Approximate distance in meters between two points.
    ///
    /// Uses an equirectangular projection at the mean latitude, which is
    /// accurate for the short distances mapcode precision is measured in.
    pub fn distance_in_meters(&self, other: &Point) -> f64 {
        let delta_lon_360 = (self.lon_deg - other.lon_deg).abs();
        let delta_lon = if delta_lon_360 <= 180.0 {
            delta_lon_360
        } else {
            360.0 - delta_lon_360
        };
        let delta_lat = (self.lat_deg - other.lat_deg).abs();
        let avg_lat = (self.lat_deg + other.lat_deg) / 2.0;

        let meters_per_deg_lon = 2.0 * std::f64::consts::PI * EARTH_RADIUS_X_METERS / 360.0;
        let meters_per_deg_lat = 2.0 * std::f64::consts::PI * EARTH_RADIUS_Y_METERS / 360.0;
        let dx = delta_lon * meters_per_deg_lon * avg_lat.to_radians().cos();
        let dy = delta_lat * meters_per_deg_lat;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat_deg, self.lon_deg)
    }
}

/// Wrap a longitude to `[-180, 180)`.
pub fn wrap_lon_deg(lon_deg: f64) -> f64 {
    let wrapped = lon_deg - 360.0 * ((lon_deg + 180.0) / 360.0).floor();
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// A point as integer microdegrees plus sub-microdegree fractions.
///
/// `lat_fraction` is in `[0, 810_000)` and `lon_fraction` in
/// `[0, 3_240_000)`, both measured upward from the microdegree value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MicroPoint {
    /// Latitude in microdegrees, `[-90_000_000, 90_000_000]`.
    pub lat_micro: i32,
    /// Longitude in microdegrees, `[-180_000_000, 180_000_000)`.
    pub lon_micro: i32,
    /// Latitude remainder below one microdegree.
    pub lat_fraction: i64,
    /// Longitude remainder below one microdegree.
    pub lon_fraction: i64,
}

impl MicroPoint {
    /// Convert degrees, clamping latitude and wrapping longitude.
    ///
    /// Returns `None` for NaN or infinite input.
    pub fn from_deg(lat_deg: f64, lon_deg: f64) -> Option<Self> {
        if !lat_deg.is_finite() || !lon_deg.is_finite() {
            return None;
        }
        let lat = lat_deg.clamp(-90.0, 90.0) + 90.0;
        let lat_total = (lat * LAT_FRACTIONS_PER_DEG + 0.1).floor() as i64;
        let lat_micro = (lat_total / LAT_FRACTIONS_PER_MICRODEG) as i32 - 90_000_000;
        let lat_fraction = lat_total % LAT_FRACTIONS_PER_MICRODEG;

        let lon = lon_deg - 360.0 * (lon_deg / 360.0).floor();
        let lon_total = (lon * LON_FRACTIONS_PER_DEG + 0.1).floor() as i64;
        let mut lon_micro = ((lon_total / LON_FRACTIONS_PER_MICRODEG) % MICRODEG_360 as i64) as i32;
        let lon_fraction = lon_total % LON_FRACTIONS_PER_MICRODEG;
        if lon_micro >= 180_000_000 {
            lon_micro -= MICRODEG_360;
        }

        Some(Self {
            lat_micro,
            lon_micro,
            lat_fraction,
            lon_fraction,
        })
    }

    /// Build from whole microdegrees (zero fractions).
    pub fn from_micro(lat_micro: i32, lon_micro: i32) -> Self {
        Self {
            lat_micro,
            lon_micro,
            lat_fraction: 0,
            lon_fraction: 0,
        }
    }

    /// Build from zone fractions, wrapping longitude to `[-180, 180)`.
    pub fn from_fractions(lat_fraction: f64, lon_fraction: f64) -> Self {
        let lat_micro = (lat_fraction / LAT_FRACTIONS_PER_MICRODEG as f64).floor();
        let lon_micro = (lon_fraction / LON_FRACTIONS_PER_MICRODEG as f64).floor();
        let mut lon = lon_micro as i64;
        lon = lon.rem_euclid(MICRODEG_360 as i64);
        if lon >= 180_000_000 {
            lon -= MICRODEG_360 as i64;
        }
        Self {
            lat_micro: lat_micro as i32,
            lon_micro: lon as i32,
            lat_fraction: (lat_fraction - lat_micro * LAT_FRACTIONS_PER_MICRODEG as f64) as i64,
            lon_fraction: (lon_fraction - lon_micro * LON_FRACTIONS_PER_MICRODEG as f64) as i64,
        }
    }

    /// Convert back to degrees.
    pub fn to_point(&self) -> Point {
        let lat = self.lat_micro as f64 / MICRODEG_PER_DEG as f64
            + self.lat_fraction as f64 / LAT_FRACTIONS_PER_DEG;
        let lon = self.lon_micro as f64 / MICRODEG_PER_DEG as f64
            + self.lon_fraction as f64 / LON_FRACTIONS_PER_DEG;
        Point {
            lat_deg: lat.clamp(-90.0, 90.0),
            lon_deg: wrap_lon_deg(lon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_deg_splits_micro_and_fraction() {
        let p = MicroPoint::from_deg(52.376514, 4.908543).unwrap();
        assert_eq!(p.lat_micro, 52_376_514);
        assert_eq!(p.lon_micro, 4_908_543);
        assert!(p.lat_fraction < LAT_FRACTIONS_PER_MICRODEG);
        assert!(p.lon_fraction < LON_FRACTIONS_PER_MICRODEG);
    }

    #[test]
    fn negative_coordinates_round_down() {
        let p = MicroPoint::from_deg(-0.0000005, -0.0000005).unwrap();
        assert_eq!(p.lat_micro, -1);
        assert_eq!(p.lon_micro, -1);
        assert_eq!(p.lat_fraction, 405_000);
        assert_eq!(p.lon_fraction, 1_620_000);
    }

    #[test]
    fn longitude_wraps_to_half_open_range() {
        assert_eq!(MicroPoint::from_deg(0.0, 180.0).unwrap().lon_micro, -180_000_000);
        assert_eq!(MicroPoint::from_deg(0.0, -180.0).unwrap().lon_micro, -180_000_000);
        assert_eq!(MicroPoint::from_deg(0.0, 540.0).unwrap().lon_micro, -180_000_000);
        assert_eq!(MicroPoint::from_deg(0.0, 361.0).unwrap().lon_micro, 1_000_000);
    }

    #[test]
    fn latitude_is_clamped() {
        assert_eq!(MicroPoint::from_deg(95.0, 0.0).unwrap().lat_micro, 90_000_000);
        assert_eq!(MicroPoint::from_deg(-100.0, 0.0).unwrap().lat_micro, -90_000_000);
        assert_eq!(Point::from_deg(91.0, 0.0).unwrap().lat_deg(), 90.0);
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(MicroPoint::from_deg(f64::NAN, 0.0).is_none());
        assert!(Point::from_deg(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn wrap_lon_deg_boundaries() {
        assert_eq!(wrap_lon_deg(180.0), -180.0);
        assert_eq!(wrap_lon_deg(-180.0), -180.0);
        assert_eq!(wrap_lon_deg(190.0), -170.0);
        assert_eq!(wrap_lon_deg(-190.0), 170.0);
    }

    #[test]
    fn distance_across_dateline_is_short() {
        let a = Point::from_deg(0.0, 179.9999).unwrap();
        let b = Point::from_deg(0.0, -179.9999).unwrap();
        let d = a.distance_in_meters(&b);
        assert!(d > 20.0 && d < 25.0, "distance was {d}");
    }

    #[test]
    fn one_degree_latitude_is_about_111_km() {
        let a = Point::from_deg(10.0, 5.0).unwrap();
        let b = Point::from_deg(11.0, 5.0).unwrap();
        let d = a.distance_in_meters(&b);
        assert!((d - 110_946.0).abs() < 50.0, "distance was {d}");
    }

    proptest! {
        #[test]
        fn micro_point_roundtrips_within_a_fraction(
            lat in -90.0f64..90.0,
            lon in -180.0f64..180.0,
        ) {
            let back = MicroPoint::from_deg(lat, lon).unwrap().to_point();
            prop_assert!((back.lat_deg() - lat).abs() < 1e-9);
            let dlon = (back.lon_deg() - lon).abs();
            prop_assert!(dlon < 1e-9 || (360.0 - dlon) < 1e-9);
        }

        #[test]
        fn fractions_stay_in_range(lat in -90.0f64..=90.0, lon in -720.0f64..720.0) {
            let p = MicroPoint::from_deg(lat, lon).unwrap();
            prop_assert!((0..LAT_FRACTIONS_PER_MICRODEG).contains(&p.lat_fraction));
            prop_assert!((0..LON_FRACTIONS_PER_MICRODEG).contains(&p.lon_fraction));
            prop_assert!((-180_000_000..180_000_000).contains(&p.lon_micro));
        }
    }
}
