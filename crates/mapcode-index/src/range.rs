//! Closed integer ranges on one axis.

use smallvec::SmallVec;

/// Longitude span of the world, inclusive, in microdegrees.
pub const WORLD_LON: AxisRange = AxisRange {
    min: -180_000_000,
    max: 179_999_999,
};

/// Latitude span of the world, inclusive, in microdegrees.
pub const WORLD_LAT: AxisRange = AxisRange {
    min: -90_000_000,
    max: 90_000_000,
};

const TURN: i32 = 360_000_000;

/// Pieces of one range after normalisation. At most two.
pub type Pieces = SmallVec<[AxisRange; 2]>;

/// A closed range `[min, max]` in microdegrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisRange {
    /// Lower edge (inclusive).
    pub min: i32,
    /// Upper edge (inclusive).
    pub max: i32,
}

impl AxisRange {
    /// A closed range.
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// The closed range covered by a half-open `[min, max_exclusive)`.
    pub fn from_half_open(min: i32, max_exclusive: i32) -> Self {
        Self {
            min,
            max: max_exclusive - 1,
        }
    }

    /// Whether the range holds no value.
    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }

    /// Whether `v` lies in the range.
    pub fn contains(&self, v: i32) -> bool {
        self.min <= v && v <= self.max
    }

    /// Overlap of two ranges, `None` if they are disjoint.
    pub fn intersect(&self, other: &AxisRange) -> Option<AxisRange> {
        let r = AxisRange::new(self.min.max(other.min), self.max.min(other.max));
        (!r.is_empty()).then_some(r)
    }

    /// Split a longitude range that runs past either end of the world
    /// into pieces inside it, shifting the overhang by a full turn.
    pub fn normalize_lon(&self) -> Pieces {
        let mut out = Pieces::new();
        if self.is_empty() {
            return out;
        }
        if self.min < WORLD_LON.min {
            if self.max < WORLD_LON.min {
                out.push(AxisRange::new(self.min + TURN, self.max + TURN));
            } else {
                out.push(AxisRange::new(self.min + TURN, WORLD_LON.max));
                out.push(AxisRange::new(WORLD_LON.min, self.max.min(WORLD_LON.max)));
            }
        } else if self.max > WORLD_LON.max {
            if self.min > WORLD_LON.max {
                out.push(AxisRange::new(self.min - TURN, self.max - TURN));
            } else {
                out.push(AxisRange::new(self.min, WORLD_LON.max));
                out.push(AxisRange::new(WORLD_LON.min, self.max - TURN));
            }
        } else {
            out.push(*self);
        }
        out
    }

    /// Clip a latitude range to the world.
    pub fn normalize_lat(&self) -> Pieces {
        self.intersect(&WORLD_LAT).into_iter().collect()
    }
}

/// Every non-empty overlap between a piece of `ranges` and a piece of
/// `bounds`.
pub fn clip_pieces(ranges: &[AxisRange], bounds: &[AxisRange]) -> Pieces {
    ranges
        .iter()
        .flat_map(|r| bounds.iter().filter_map(move |b| r.intersect(b)))
        .collect()
}
