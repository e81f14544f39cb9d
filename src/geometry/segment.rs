use crate::error::{GeometryError, Result};

use super::{LineSegment, Point, PrecomputedLineSegment, SegmentCache};

/// An owned, mutable line segment with cached derived quantities.
///
/// Endpoints are the source of truth. The cache starts with non-degenerate
/// placeholder values and is only refreshed by
/// [`precompute`](PrecomputedLineSegment::precompute).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Caller-owned flag. No query reads it.
    pub is_tagged: bool,
    cache: SegmentCache,
}

impl Segment {
    /// Creates a segment from raw coordinates without precomputing.
    #[must_use]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            ..Self::default()
        }
    }

    /// Creates a segment between two points with the cache already computed.
    #[must_use]
    pub fn precomputed(p1: Point, p2: Point) -> Self {
        let mut segment = Self::new(p1.x, p1.y, p2.x, p2.y);
        segment.precompute();
        segment
    }

    /// Like [`precomputed`](Self::precomputed), but rejects NaN and infinite
    /// coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if any coordinate is not finite.
    pub fn try_precomputed(p1: Point, p2: Point) -> Result<Self> {
        if !p1.is_finite() || !p2.is_finite() {
            tracing::debug!(?p1, ?p2, "rejecting segment with non-finite endpoints");
            return Err(GeometryError::NonFinite {
                x1: p1.x,
                y1: p1.y,
                x2: p2.x,
                y2: p2.y,
            }
            .into());
        }
        Ok(Self::precomputed(p1, p2))
    }
}

impl LineSegment for Segment {
    fn x1(&self) -> f32 {
        self.x1
    }

    fn y1(&self) -> f32 {
        self.y1
    }

    fn x2(&self) -> f32 {
        self.x2
    }

    fn y2(&self) -> f32 {
        self.y2
    }

    fn set_x1(&mut self, value: f32) {
        self.x1 = value;
    }

    fn set_y1(&mut self, value: f32) {
        self.y1 = value;
    }

    fn set_x2(&mut self, value: f32) {
        self.x2 = value;
    }

    fn set_y2(&mut self, value: f32) {
        self.y2 = value;
    }
}

impl PrecomputedLineSegment for Segment {
    fn cache(&self) -> &SegmentCache {
        &self.cache
    }

    fn cache_mut(&mut self) -> &mut SegmentCache {
        &mut self.cache
    }
}
