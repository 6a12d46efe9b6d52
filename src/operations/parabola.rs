use crate::error::Result;
use crate::geometry::Line2;
use crate::math::angle_2d::unit;
use crate::math::{Isometry2, Point2, Vector2, TOLERANCE};

use super::ensure_finite;

/// A parabolic profile described as a quadratic Bézier curve.
///
/// `control_points` runs from the dragged end point, through the control point
/// on the axis, to the end point mirrored across the axis. The curve passes
/// through `summit` at its parametric midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParabolaShape {
    pub control_points: [Point2; 3],
    pub focus: Point2,
    pub summit: Point2,
    pub axis: Vector2,
}

impl ParabolaShape {
    /// Point on the curve at `t` in `[0, 1]`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        let [p0, p1, p2] = self.control_points;
        let s = 1.0 - t;
        Point2::from(p0.coords * (s * s) + p1.coords * (2.0 * s * t) + p2.coords * (t * t))
    }

    /// Signed distance from the summit to the focus along the axis.
    #[must_use]
    pub fn focal_length(&self) -> f64 {
        (self.focus - self.summit).dot(&self.axis)
    }

    /// Returns the shape moved by a rigid transformation.
    #[must_use]
    pub fn transformed(&self, iso: &Isometry2) -> Self {
        Self {
            control_points: self.control_points.map(|p| iso * p),
            focus: iso * self.focus,
            summit: iso * self.summit,
            axis: iso.rotation * self.axis,
        }
    }
}

/// Builds the parabola with vertex `summit` and symmetry axis `axis` that
/// passes through `drag`.
#[derive(Debug, Clone)]
pub struct Parabola {
    summit: Point2,
    axis: Vector2,
    drag: Point2,
}

impl Parabola {
    /// Creates a new `Parabola` operation.
    #[must_use]
    pub fn new(summit: Point2, axis: Vector2, drag: Point2) -> Self {
        Self { summit, axis, drag }
    }

    /// Executes the construction.
    ///
    /// Returns `Ok(None)` when `drag` gives no usable parabola: it coincides with
    /// the summit, or lies on the vertex tangent where the focus would be at
    /// infinity.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ParameterError::OutOfRange`] if a coordinate is
    /// NaN or infinite, and [`crate::error::GeometryError::ZeroVector`] if
    /// `axis` is zero.
    pub fn execute(&self) -> Result<Option<ParabolaShape>> {
        ensure_finite(&[
            ("summit.x", self.summit.x),
            ("summit.y", self.summit.y),
            ("axis.x", self.axis.x),
            ("axis.y", self.axis.y),
            ("drag.x", self.drag.x),
            ("drag.y", self.drag.y),
        ])?;
        let axis = unit(&self.axis)?;
        let offset = self.drag - self.summit;
        // Projection of the drag point onto the axis.
        let depth = offset.dot(&axis);
        if offset.norm() < TOLERANCE || depth.abs() < TOLERANCE * offset.norm() {
            tracing::trace!(drag = ?self.drag, "parabola unchanged");
            return Ok(None);
        }

        let control = self.summit - axis * depth;
        let mirrored = Line2::new(self.summit, axis)?.reflect(&self.drag);

        let spoke = self.drag - control;
        let cos = spoke.dot(&axis) / spoke.norm();
        let focus = control + axis * (spoke.norm() / 2.0 / cos);

        let shape = ParabolaShape {
            control_points: [self.drag, control, mirrored],
            focus,
            summit: self.summit,
            axis,
        };
        tracing::debug!(focal_length = shape.focal_length(), "built parabola");
        Ok(Some(shape))
    }
}
