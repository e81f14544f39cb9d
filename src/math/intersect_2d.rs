use crate::geometry::Point;

use super::{cross, EPSILON};

/// Side of a directed line on which a point lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Positive signed area (counter-clockwise turn).
    Left,
    /// Negative signed area (clockwise turn).
    Right,
    /// Signed area within [`EPSILON`] of zero.
    Collinear,
}

impl Orientation {
    /// Classifies a signed area.
    #[must_use]
    pub fn classify(area: f32) -> Self {
        if area.abs() < EPSILON {
            Self::Collinear
        } else if area > 0.0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Signed area of the parallelogram spanned by `to - from` and `point - from`.
#[must_use]
pub fn signed_area(from: Point, to: Point, point: Point) -> f32 {
    cross(to.x - from.x, to.y - from.y, point.x - from.x, point.y - from.y)
}

/// Orientation of `point` relative to the directed line `from -> to`.
#[must_use]
pub fn orientation(from: Point, to: Point, point: Point) -> Orientation {
    Orientation::classify(signed_area(from, to, point))
}

/// Inclusive segment-segment intersection test.
///
/// Touching endpoints and overlapping collinear segments count as
/// intersecting. The four orientation tests are resolved in order: `b1` and
/// `b2` against segment `a`, then `a1` and `a2` against segment `b`. The first
/// collinear classification decides the answer through a 1-D range test along
/// the reference segment's dominant axis; otherwise the endpoints of each
/// segment must straddle the other's line.
///
/// Zero-length segments have no supporting line and are tested as points.
#[must_use]
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    use Orientation::Collinear;

    match (is_point(a1, a2), is_point(b1, b2)) {
        (true, true) => return a1.distance_squared_to(b1) <= EPSILON,
        (true, false) => return point_on_segment(b1, b2, a1) || point_on_segment(b1, b2, a2),
        (false, true) => return point_on_segment(a1, a2, b1) || point_on_segment(a1, a2, b2),
        (false, false) => {}
    }

    let table = [
        orientation(a1, a2, b1),
        orientation(a1, a2, b2),
        orientation(b1, b2, a1),
        orientation(b1, b2, a2),
    ];

    match table {
        [Collinear, second, ..] => touches_from_start(a1, a2, b1, b2, second == Collinear),
        [_, Collinear, ..] => within_extent(a1, a2, b2),
        [_, _, Collinear, fourth] => touches_from_start(b1, b2, a1, a2, fourth == Collinear),
        [_, _, _, Collinear] => within_extent(b1, b2, a2),
        [first, second, third, fourth] => first != second && third != fourth,
    }
}

/// Resolves the case where `s1` lies on the line through `r1 -> r2`.
///
/// When `s2` is collinear too, the segments share a line and overlap iff an
/// endpoint of the reference lies inside the other segment.
fn touches_from_start(r1: Point, r2: Point, s1: Point, s2: Point, both_collinear: bool) -> bool {
    if within_extent(r1, r2, s1) {
        return true;
    }
    both_collinear && (within_extent(s1, s2, r1) || within_extent(s1, s2, r2))
}

/// Returns whether `point` falls inside the segment's coordinate range along
/// its dominant axis (inclusive).
fn within_extent(from: Point, to: Point, point: Point) -> bool {
    if (to.x - from.x).abs() >= (to.y - from.y).abs() {
        between(from.x, to.x, point.x)
    } else {
        between(from.y, to.y, point.y)
    }
}

fn between(a: f32, b: f32, value: f32) -> bool {
    (a <= value && value <= b) || (a >= value && value >= b)
}

fn is_point(from: Point, to: Point) -> bool {
    from.distance_squared_to(to) <= EPSILON
}

fn point_on_segment(from: Point, to: Point, point: Point) -> bool {
    orientation(from, to, point) == Orientation::Collinear && within_extent(from, to, point)
}
