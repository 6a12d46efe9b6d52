//! 2D vector angle utilities.
//!
//! Angle convention used throughout the crate: [`angle_to`] is the
//! counter-clockwise angle from one vector to another, in `[0, 2π)`.
//! Arc builders measure every arc angle this way, relative to a reference
//! direction. [`angle_between`] is the unsigned angle in `[0, π]`.
use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};

use super::{Point2, Vector2, TOLERANCE};

/// Counter-clockwise angle from `from` to `to`, in `[0, 2π)`.
///
/// Computed with a two-argument arctangent of the cross and dot products,
/// so it does not lose precision near `0` or `π`.
#[must_use]
pub fn angle_to(from: &Vector2, to: &Vector2) -> f64 {
    let angle = from.perp(to).atan2(from.dot(to));
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Unsigned angle between `a` and `b`, in `[0, π]`.
#[must_use]
pub fn angle_between(a: &Vector2, b: &Vector2) -> f64 {
    a.perp(b).abs().atan2(a.dot(b))
}

/// Wraps an angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Returns `v` rotated by +90° (counter-clockwise).
#[must_use]
pub fn perpendicular(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Returns `v` rotated counter-clockwise by `angle` radians.
#[must_use]
pub fn rotate(v: &Vector2, angle: f64) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Returns the unit vector in the direction of `v`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `v` has (near) zero length and
/// [`GeometryError::NonFinite`] if its length is NaN or infinite.
pub fn unit(v: &Vector2) -> Result<Vector2> {
    let len = v.norm();
    if !len.is_finite() {
        return Err(GeometryError::NonFinite.into());
    }
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// Reflects `point` across the line through `origin` with unit `direction`.
#[must_use]
pub fn reflect_across_line(point: &Point2, origin: &Point2, direction: &Vector2) -> Point2 {
    let offset = point - origin;
    let along = direction * offset.dot(direction);
    origin + along * 2.0 - offset
}
