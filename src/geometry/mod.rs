pub mod line_segment;
pub mod point;
pub mod precomputed;
pub mod segment;

pub use line_segment::LineSegment;
pub use point::Point;
pub use precomputed::{PrecomputedLineSegment, SegmentCache};
pub use segment::Segment;
