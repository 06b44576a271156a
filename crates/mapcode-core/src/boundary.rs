//! Record rectangles and point containment.

use crate::point::{MicroPoint, MICRODEG_360};

/// A latitude/longitude rectangle in microdegrees.
///
/// Minimum bounds are inclusive, maximum bounds exclusive. Longitudes may
/// extend beyond `[-180, 180)` by a wraparound margin (a territory that
/// straddles the dateline is stored with `lon_max > 180_000_000`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Boundary {
    /// Southern edge (inclusive).
    pub lat_min: i32,
    /// Western edge (inclusive).
    pub lon_min: i32,
    /// Northern edge (exclusive).
    pub lat_max: i32,
    /// Eastern edge (exclusive).
    pub lon_max: i32,
}

impl Boundary {
    /// Create a boundary from its four edges.
    pub fn new(lat_min: i32, lon_min: i32, lat_max: i32, lon_max: i32) -> Self {
        Self {
            lat_min,
            lon_min,
            lat_max,
            lon_max,
        }
    }

    /// Whether `p` lies in `[lat_min, lat_max) x [lon_min, lon_max)`.
    ///
    /// A longitude that misses by a full turn is retested after shifting
    /// it by 360 degrees. A point at exactly +90 degrees lies on the
    /// exclusive northern edge of any rectangle that stops at the pole.
    pub fn contains(&self, p: &MicroPoint) -> bool {
        if p.lat_micro < self.lat_min || p.lat_micro >= self.lat_max {
            return false;
        }
        let lon = p.lon_micro;
        if lon < self.lon_min {
            let shifted = lon + MICRODEG_360;
            self.lon_min <= shifted && shifted < self.lon_max
        } else if lon >= self.lon_max {
            let shifted = lon - MICRODEG_360;
            self.lon_min <= shifted && shifted < self.lon_max
        } else {
            true
        }
    }

    /// Grow (or, with negative values, shrink) the rectangle on every side.
    ///
    /// Returns `self` so a border probe reads as
    /// `b.extend(60, 60).contains(&p)`.
    pub fn extend(&mut self, lat_micro: i32, lon_micro: i32) -> &mut Self {
        self.lat_min -= lat_micro;
        self.lat_max += lat_micro;
        self.lon_min -= lon_micro;
        self.lon_max += lon_micro;
        self
    }

    /// Height in microdegrees.
    pub fn height(&self) -> i32 {
        self.lat_max - self.lat_min
    }

    /// Width in microdegrees.
    pub fn width(&self) -> i32 {
        self.lon_max - self.lon_min
    }

    /// Whether the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.lat_max <= self.lat_min || self.lon_max <= self.lon_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: i32, lon: i32) -> MicroPoint {
        MicroPoint::from_micro(lat, lon)
    }

    #[test]
    fn min_inclusive_max_exclusive() {
        let b = Boundary::new(0, 0, 100, 200);
        assert!(b.contains(&p(0, 0)));
        assert!(b.contains(&p(99, 199)));
        assert!(!b.contains(&p(100, 50)));
        assert!(!b.contains(&p(50, 200)));
        assert!(!b.contains(&p(-1, 50)));
    }

    #[test]
    fn dateline_territory_contains_wrapped_longitude() {
        let b = Boundary::new(-20_000_000, 177_000_000, -15_000_000, 182_000_000);
        assert!(b.contains(&p(-17_000_000, 178_000_000)));
        assert!(b.contains(&p(-17_000_000, -179_000_000)));
        assert!(!b.contains(&p(-17_000_000, -177_000_000)));
    }

    #[test]
    fn negative_margin_territory_contains_wrapped_longitude() {
        let b = Boundary::new(0, -182_000_000, 10, -170_000_000);
        assert!(b.contains(&p(5, 179_000_000)));
        assert!(!b.contains(&p(5, 177_000_000)));
    }

    #[test]
    fn north_pole_is_on_the_exclusive_edge() {
        let b = Boundary::new(80_000_000, -180_000_000, 90_000_000, 180_000_000);
        assert!(!b.contains(&p(90_000_000, 0)));
        assert!(b.contains(&p(89_999_999, 0)));
    }

    #[test]
    fn extend_returns_self_and_grows_symmetrically() {
        let mut b = Boundary::new(0, 0, 100, 100);
        assert!(b.extend(60, 60).contains(&p(-60, 159)));
        assert_eq!(b, Boundary::new(-60, -60, 160, 160));
        b.extend(-60, -60);
        assert_eq!(b, Boundary::new(0, 0, 100, 100));
        assert_eq!(b.width(), 100);
        assert_eq!(b.height(), 100);
    }

    #[test]
    fn shrinking_past_zero_is_empty() {
        let mut b = Boundary::new(0, 0, 100, 100);
        b.extend(-60, 0);
        assert!(b.is_empty());
    }
}
