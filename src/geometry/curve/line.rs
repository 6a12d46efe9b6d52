use crate::error::{GeometryError, Result};
use crate::math::angle_2d::{reflect_across_line, unit};
use crate::math::intersect_2d::{line_line_intersect_2d, point_at};
use crate::math::{Point2, Vector2};

/// An infinite line defined by an origin point and a direction vector.
///
/// The parametric form is: `P(t) = origin + t * direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line2 {
    origin: Point2,
    direction: Vector2,
}

impl Line2 {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        Ok(Self {
            origin,
            direction: unit(&direction)?,
        })
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        &self.direction
    }

    /// Intersects this line with `other`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Parallel`] if the lines are parallel or coincident.
    pub fn intersect_with(&self, other: &Line2) -> Result<Point2> {
        let (t, _) =
            line_line_intersect_2d(&self.origin, &self.direction, &other.origin, &other.direction)
                .ok_or(GeometryError::Parallel)?;
        Ok(point_at(&self.origin, &self.direction, t))
    }

    /// Mirror image of `point` across the line.
    #[must_use]
    pub fn reflect(&self, point: &Point2) -> Point2 {
        reflect_across_line(point, &self.origin, &self.direction)
    }
}
