//! Decode results as fractional rectangles.

use crate::boundary::Boundary;
use crate::point::{
    MicroPoint, Point, LAT_FRACTIONS_PER_MICRODEG, LON_FRACTIONS_PER_MICRODEG, MICRODEG_360,
};

const LON_FRACTIONS_360: f64 = MICRODEG_360 as f64 * LON_FRACTIONS_PER_MICRODEG as f64;

/// The rectangle of coordinates consistent with one decoded mapcode.
///
/// Bounds are in fractions (810,000 per latitude microdegree, 3,240,000
/// per longitude microdegree). Minimums are inclusive, maximums exclusive.
/// A zone is empty when either axis has `max <= min`; the decoder returns
/// an empty zone instead of an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapcodeZone {
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

impl Default for MapcodeZone {
    fn default() -> Self {
        Self::empty()
    }
}

impl MapcodeZone {
    /// The empty zone ("not found").
    pub fn empty() -> Self {
        Self {
            lat_min: 0.0,
            lat_max: 0.0,
            lon_min: 0.0,
            lon_max: 0.0,
        }
    }

    /// Build a zone from an anchor and signed extents.
    ///
    /// A negative latitude extent grows the zone southward from the anchor,
    /// which is how top-down numbering schemes express their cells.
    pub fn from_fractions(lat: f64, lon: f64, lat_delta: f64, lon_delta: f64) -> Self {
        let (lat_min, lat_max) = if lat_delta < 0.0 {
            (lat + lat_delta, lat)
        } else {
            (lat, lat + lat_delta)
        };
        Self {
            lat_min,
            lat_max,
            lon_min: lon,
            lon_max: lon + lon_delta,
        }
    }

    /// Whether the zone covers nothing.
    pub fn is_empty(&self) -> bool {
        self.lat_max <= self.lat_min || self.lon_max <= self.lon_min
    }

    /// Southern edge in fractions.
    pub fn lat_min(&self) -> f64 {
        self.lat_min
    }

    /// Northern edge in fractions.
    pub fn lat_max(&self) -> f64 {
        self.lat_max
    }

    /// Western edge in fractions.
    pub fn lon_min(&self) -> f64 {
        self.lon_min
    }

    /// Eastern edge in fractions.
    pub fn lon_max(&self) -> f64 {
        self.lon_max
    }

    /// Lower the northern edge to `lat_max` if it lies above it.
    pub fn clip_lat_max(&mut self, lat_max: f64) {
        if self.lat_max > lat_max {
            self.lat_max = lat_max;
        }
    }

    /// Raise the southern edge to `lat_min` if it lies below it.
    pub fn clip_lat_min(&mut self, lat_min: f64) {
        if self.lat_min < lat_min {
            self.lat_min = lat_min;
        }
    }

    /// Pull the eastern edge in to `lon_max` if it lies beyond it.
    pub fn clip_lon_max(&mut self, lon_max: f64) {
        if self.lon_max > lon_max {
            self.lon_max = lon_max;
        }
    }

    /// Intersect with a record boundary.
    ///
    /// When the boundary lies a full turn away from the zone (one side of
    /// the dateline each), the boundary is shifted by 360 degrees first.
    pub fn restrict_to(&self, area: &Boundary) -> MapcodeZone {
        let mut z = *self;
        let lat_min = area.lat_min as f64 * LAT_FRACTIONS_PER_MICRODEG as f64;
        let lat_max = area.lat_max as f64 * LAT_FRACTIONS_PER_MICRODEG as f64;
        if z.lat_min < lat_min {
            z.lat_min = lat_min;
        }
        if z.lat_max > lat_max {
            z.lat_max = lat_max;
        }
        if z.lat_min < z.lat_max {
            let mut lon_min = area.lon_min as f64 * LON_FRACTIONS_PER_MICRODEG as f64;
            let mut lon_max = area.lon_max as f64 * LON_FRACTIONS_PER_MICRODEG as f64;
            if lon_max < 0.0 && z.lon_min > 0.0 {
                lon_min += LON_FRACTIONS_360;
                lon_max += LON_FRACTIONS_360;
            } else if lon_min > 0.0 && z.lon_max < 0.0 {
                lon_min -= LON_FRACTIONS_360;
                lon_max -= LON_FRACTIONS_360;
            }
            if z.lon_min < lon_min {
                z.lon_min = lon_min;
            }
            if z.lon_max > lon_max {
                z.lon_max = lon_max;
            }
        }
        z
    }

    /// The midpoint, or `None` for an empty zone.
    pub fn center(&self) -> Option<Point> {
        self.center_micro().map(|p| p.to_point())
    }

    /// The midpoint in microdegree form, or `None` for an empty zone.
    pub fn center_micro(&self) -> Option<MicroPoint> {
        if self.is_empty() {
            return None;
        }
        Some(MicroPoint::from_fractions(
            ((self.lat_min + self.lat_max) / 2.0).floor(),
            ((self.lon_min + self.lon_max) / 2.0).floor(),
        ))
    }

    /// The zone as a degree rectangle, or `None` for an empty zone.
    pub fn to_rectangle(&self) -> Option<Rectangle> {
        if self.is_empty() {
            return None;
        }
        Some(Rectangle {
            south_west: Point::from_fractions(self.lat_min, self.lon_min),
            north_east: Point::from_fractions(self.lat_max, self.lon_max),
        })
    }
}

/// A decoded area in degrees.
///
/// `north_east` is exclusive. For a zone that straddles the dateline the
/// eastern longitude is numerically smaller than the western one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    /// South-west corner (inclusive).
    pub south_west: Point,
    /// North-east corner (exclusive).
    pub north_east: Point,
}

impl Rectangle {
    /// The middle of the rectangle.
    pub fn center(&self) -> Point {
        let lat = (self.south_west.lat_deg() + self.north_east.lat_deg()) / 2.0;
        let mut lon_east = self.north_east.lon_deg();
        if lon_east < self.south_west.lon_deg() {
            lon_east += 360.0;
        }
        let lon = (self.south_west.lon_deg() + lon_east) / 2.0;
        // Both inputs are finite, so construction cannot fail.
        Point::from_deg(lat, lon).unwrap_or(self.south_west)
    }
}
