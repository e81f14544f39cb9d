pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, PcsError, Result};
pub use geometry::{LineSegment, Point, PrecomputedLineSegment, Segment, SegmentCache};
pub use math::intersect_2d::segments_intersect;
