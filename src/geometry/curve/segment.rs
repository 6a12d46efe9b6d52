use crate::error::{GeometryError, Result};
use crate::math::angle_2d::perpendicular;
use crate::math::{Point2, Vector2, TOLERANCE};

use super::Line2;

/// A bounded line segment between two points.
///
/// The parametric form is `P(t) = start + t * (end - start)` for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    start: Point2,
    end: Point2,
}

impl Segment2 {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a segment from `start` to `start + vector`.
    #[must_use]
    pub fn from_vector(start: Point2, vector: Vector2) -> Self {
        Self {
            start,
            end: start + vector,
        }
    }

    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Unit direction from start to end.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for a zero-length segment.
    pub fn direction(&self) -> Result<Vector2> {
        let v = self.end - self.start;
        let len = v.norm();
        if len < TOLERANCE {
            return Err(GeometryError::Degenerate("zero-length segment".into()).into());
        }
        Ok(v / len)
    }

    /// Perpendicular bisector: the line through the midpoint whose direction is
    /// the segment direction rotated by +90°.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for a zero-length segment.
    pub fn bisector(&self) -> Result<Line2> {
        Line2::new(self.midpoint(), perpendicular(&self.direction()?))
    }

    /// The line through `point` perpendicular to this segment (direction rotated +90°).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for a zero-length segment.
    pub fn perpendicular_line(&self, point: Point2) -> Result<Line2> {
        Line2::new(point, perpendicular(&self.direction()?))
    }
}
