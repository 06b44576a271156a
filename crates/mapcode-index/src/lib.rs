//! Spatial index for the Mapcode engine.
//!
//! Finding the records that contain a point by scanning every record is
//! O(n) per query. [`SubAreaIndex`] instead keys each axis by every
//! distinct record edge, with each key listing the records whose range
//! spans it. A query looks up the point on both axes and intersects the
//! two candidate sets.
//!
//! The result over-approximates near edges that are not keys; callers
//! reconfirm containment against the record [`Boundary`](mapcode_core::Boundary).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod range;
pub mod subarea;

pub use range::AxisRange;
pub use subarea::SubAreaIndex;
