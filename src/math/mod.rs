pub mod intersect_2d;

use std::f32::consts::TAU;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f32>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f32>;

/// Global tolerance for degeneracy, collinearity and near-zero area tests.
pub const EPSILON: f32 = 1e-5;

/// Z component of the cross product of `(ax, ay)` and `(bx, by)`.
#[must_use]
#[inline]
pub fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - bx * ay
}

/// Wraps an angle in radians into `[0, 2π)`.
///
/// Only corrects by a single turn, which covers every angle produced by
/// `atan2` plus a quarter turn.
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    let mut angle = angle;
    if angle < 0.0 {
        angle += TAU;
    }
    if angle >= TAU {
        angle -= TAU;
    }
    angle
}
