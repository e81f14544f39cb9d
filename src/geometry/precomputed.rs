use std::f32::consts::FRAC_PI_2;

use crate::error::{GeometryError, Result};
use crate::math::{wrap_angle, Vector2, EPSILON};

use super::{LineSegment, Point};

/// Quantities derived from a segment's endpoints.
///
/// Valid only after [`PrecomputedLineSegment::precompute`] has run following
/// the most recent endpoint change. Nothing invalidates it automatically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCache {
    pub center_x: f32,
    pub center_y: f32,
    /// Unit vector from `p1` to `p2`, or `(0, -1)` for a degenerate segment.
    pub direction_x: f32,
    pub direction_y: f32,
    /// Direction rotated a quarter turn: `(-direction_y, direction_x)`.
    pub normal_x: f32,
    pub normal_y: f32,
    pub length_squared: f32,
    /// `sqrt(length_squared)`, or `0` for a degenerate segment.
    pub length: f32,
    /// Angle of the direction in `[0, 2π)`, measured from `(0, -1)` towards `+x`.
    pub direction_angle: f32,
    /// `direction_angle + π/2`, wrapped into `[0, 2π)`.
    pub normal_angle: f32,
    /// `true` iff `length_squared <= EPSILON`.
    pub is_illegal: bool,
}

impl Default for SegmentCache {
    /// Non-degenerate placeholder values for a segment that was never precomputed.
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            direction_x: 0.0,
            direction_y: -1.0,
            normal_x: 1.0,
            normal_y: 0.0,
            length_squared: 1.0,
            length: 1.0,
            direction_angle: 0.0,
            normal_angle: 0.0,
            is_illegal: false,
        }
    }
}

impl SegmentCache {
    /// Derives every cached quantity from the two endpoints.
    ///
    /// Never fails: coincident endpoints fall back to the `(0, -1)` direction
    /// and zero length so downstream queries never see NaN.
    #[must_use]
    pub fn compute(p1: Point, p2: Point) -> Self {
        let delta = Vector2::new(p2.x - p1.x, p2.y - p1.y);
        let length_squared = delta.norm_squared();

        let (direction, length, is_illegal) = if length_squared > EPSILON {
            let length = length_squared.sqrt();
            (delta / length, length, false)
        } else {
            (Vector2::new(0.0, -1.0), 0.0, true)
        };

        let direction_angle = wrap_angle(-(-direction.x).atan2(-direction.y));

        Self {
            center_x: (p1.x + p2.x) * 0.5,
            center_y: (p1.y + p2.y) * 0.5,
            direction_x: direction.x,
            direction_y: direction.y,
            normal_x: -direction.y,
            normal_y: direction.x,
            length_squared,
            length,
            direction_angle,
            normal_angle: wrap_angle(direction_angle + FRAC_PI_2),
            is_illegal,
        }
    }
}

/// Where a query point projects onto a segment.
enum Projection {
    /// Before `p1`, or the segment is degenerate.
    Start,
    /// Past `p2`.
    End,
    /// Strictly inside, at this distance from `p1`.
    Interior(f32),
}

/// Trait for segments that cache derived quantities and answer geometric
/// queries from that cache in O(1).
///
/// Implementors only expose storage; every query is provided. Queries read the
/// cached direction and length, so call [`precompute`](Self::precompute) after
/// changing endpoints.
pub trait PrecomputedLineSegment: LineSegment {
    /// Returns the cached derived state.
    fn cache(&self) -> &SegmentCache;

    /// Returns the cached derived state for writing.
    fn cache_mut(&mut self) -> &mut SegmentCache;

    /// Recomputes the cache from the current endpoints.
    fn precompute(&mut self) {
        let cache = SegmentCache::compute(self.p1(), self.p2());
        if cache.is_illegal {
            tracing::trace!(
                x1 = self.x1(),
                y1 = self.y1(),
                x2 = self.x2(),
                y2 = self.y2(),
                length_squared = cache.length_squared,
                "degenerate segment, using fallback direction"
            );
        }
        *self.cache_mut() = cache;
    }

    /// Writes both endpoints and recomputes the cache in one step.
    fn reposition(&mut self, p1: Point, p2: Point) {
        self.set_p1(p1);
        self.set_p2(p2);
        self.precompute();
    }

    fn center_x(&self) -> f32 {
        self.cache().center_x
    }

    fn center_y(&self) -> f32 {
        self.cache().center_y
    }

    fn direction_x(&self) -> f32 {
        self.cache().direction_x
    }

    fn direction_y(&self) -> f32 {
        self.cache().direction_y
    }

    fn normal_x(&self) -> f32 {
        self.cache().normal_x
    }

    fn normal_y(&self) -> f32 {
        self.cache().normal_y
    }

    fn length_squared(&self) -> f32 {
        self.cache().length_squared
    }

    fn length(&self) -> f32 {
        self.cache().length
    }

    fn direction_angle(&self) -> f32 {
        self.cache().direction_angle
    }

    fn normal_angle(&self) -> f32 {
        self.cache().normal_angle
    }

    fn is_illegal(&self) -> bool {
        self.cache().is_illegal
    }

    /// Returns the cached midpoint.
    fn center(&self) -> Point {
        let cache = self.cache();
        Point::new(cache.center_x, cache.center_y)
    }

    /// Overwrites the cached midpoint. Endpoints are left untouched.
    fn set_center(&mut self, point: Point) {
        let cache = self.cache_mut();
        cache.center_x = point.x;
        cache.center_y = point.y;
    }

    /// Returns the cached unit direction.
    fn direction(&self) -> Vector2 {
        Vector2::new(self.direction_x(), self.direction_y())
    }

    /// Returns the cached unit normal.
    fn normal(&self) -> Vector2 {
        Vector2::new(self.normal_x(), self.normal_y())
    }

    /// Converts the degeneracy flag into an error.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the cached state marks the
    /// segment as illegal.
    fn ensure_legal(&self) -> Result<()> {
        if self.is_illegal() {
            return Err(GeometryError::Degenerate {
                length_squared: self.length_squared(),
            }
            .into());
        }
        Ok(())
    }

    /// Unclamped distance along the direction from `p1` to the projection of
    /// `(x, y)`, or `None` for a degenerate segment.
    fn projection_scalar(&self, x: f32, y: f32) -> Option<f32> {
        let cache = self.cache();
        if cache.length_squared > EPSILON {
            Some(cache.direction_x * (x - self.x1()) + cache.direction_y * (y - self.y1()))
        } else {
            None
        }
    }

    /// Closest point on the segment to `point`.
    fn closest_point(&self, point: Point) -> Point {
        self.closest_point_xy(point.x, point.y)
    }

    /// Closest point on the segment to `(x, y)`.
    fn closest_point_xy(&self, x: f32, y: f32) -> Point {
        let mut result = Point::default();
        self.write_closest_point(x, y, &mut result.x, &mut result.y);
        result
    }

    /// Writes the closest point on the segment to `(x, y)` into the targets.
    ///
    /// A degenerate segment always yields `p1`.
    fn write_closest_point(&self, x: f32, y: f32, target_x: &mut f32, target_y: &mut f32) {
        match locate(self, x, y) {
            Projection::Start => {
                *target_x = self.x1();
                *target_y = self.y1();
            }
            Projection::End => {
                *target_x = self.x2();
                *target_y = self.y2();
            }
            Projection::Interior(scalar) => {
                *target_x = self.x1() + self.direction_x() * scalar;
                *target_y = self.y1() + self.direction_y() * scalar;
            }
        }
    }

    /// Squared distance from `(x, y)` to its closest point on the segment.
    ///
    /// Returns `0` for a degenerate segment.
    fn distance_squared_to_closest_point(&self, x: f32, y: f32) -> f32 {
        if self.length_squared() <= EPSILON {
            return 0.0;
        }
        match locate(self, x, y) {
            Projection::Start => self.p1().distance_squared_to_xy(x, y),
            Projection::End => self.p2().distance_squared_to_xy(x, y),
            Projection::Interior(scalar) => {
                let closest_x = self.x1() + self.direction_x() * scalar;
                let closest_y = self.y1() + self.direction_y() * scalar;
                Point::new(closest_x, closest_y).distance_squared_to_xy(x, y)
            }
        }
    }

    /// Squared distance from `point` to the segment.
    ///
    /// Unlike [`distance_squared_to_closest_point`](Self::distance_squared_to_closest_point),
    /// a degenerate segment measures the distance to `p1`.
    fn distance_squared_to_point(&self, point: Point) -> f32 {
        self.closest_point(point).distance_squared_to(point)
    }

    /// Whether the unclamped projection of `point` lies within `[0, length]`.
    ///
    /// Always `false` for a degenerate segment.
    fn closest_point_is_on_segment(&self, point: Point) -> bool {
        self.projection_scalar(point.x, point.y)
            .is_some_and(|scalar| (0.0..=self.length()).contains(&scalar))
    }

    /// Squared distance between two segments.
    ///
    /// Intersecting segments are at distance `0`. Otherwise the minimum is
    /// realized between an endpoint projection on one segment and an endpoint
    /// projection on the other, so only the four pairings are compared.
    fn distance_squared_to_line_segment<S: PrecomputedLineSegment + ?Sized>(&self, other: &S) -> f32 {
        if self.intersects(other) {
            return 0.0;
        }

        let on_self = [self.closest_point(other.p1()), self.closest_point(other.p2())];
        let on_other = [other.closest_point(self.p1()), other.closest_point(self.p2())];

        on_self
            .iter()
            .flat_map(|a| on_other.iter().map(move |b| a.distance_squared_to(*b)))
            .fold(f32::INFINITY, f32::min)
    }
}

fn locate<S: PrecomputedLineSegment + ?Sized>(segment: &S, x: f32, y: f32) -> Projection {
    match segment.projection_scalar(x, y) {
        None => Projection::Start,
        Some(scalar) if scalar <= 0.0 => Projection::Start,
        Some(scalar) if scalar >= segment.length() => Projection::End,
        Some(scalar) => Projection::Interior(scalar),
    }
}
