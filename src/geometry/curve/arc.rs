use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::angle_2d::{normalize_angle, perpendicular, rotate, unit};
use crate::math::arc_2d::{arc_from_bulge, bulge_from_sweep};
use crate::math::{x_axis, Isometry2, Point2, Vector2, TOLERANCE};

/// A counter-clockwise circular arc in the plane.
///
/// Angles are measured counter-clockwise from `ref_dir` around `center`, so the
/// point at angle `a` is `center + radius * rotate(ref_dir, a)`. The sweep
/// `end_angle - start_angle` lies in `[0, π)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc2 {
    center: Point2,
    radius: f64,
    ref_dir: Vector2,
    start_angle: f64,
    end_angle: f64,
}

impl Arc2 {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `start_angle` - Start angle in radians, relative to `ref_dir`
    /// * `end_angle` - End angle in radians, relative to `ref_dir`
    /// * `ref_dir` - Reference direction for angle = 0
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive, the reference direction is
    /// zero-length, or the sweep is negative or not less than π.
    pub fn new(
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        ref_dir: Vector2,
    ) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        let sweep = end_angle - start_angle;
        if !(0.0..PI).contains(&sweep) {
            return Err(GeometryError::Degenerate(format!(
                "arc sweep {sweep} must lie in [0, π)"
            ))
            .into());
        }
        Ok(Self {
            center,
            radius,
            ref_dir: unit(&ref_dir)?,
            start_angle,
            end_angle,
        })
    }

    /// Creates the arc from `start` to `end` whose bulge is `bulge`.
    ///
    /// The reference direction is the x-axis and the start angle is wrapped into
    /// `[0, 2π)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the chord is zero-length or the bulge is not in `(0, 1)`
    /// (the arc must run counter-clockwise and sweep less than a half turn).
    pub fn from_bulge(start: Point2, end: Point2, bulge: f64) -> Result<Self> {
        if !(bulge > 0.0 && bulge < 1.0) {
            return Err(GeometryError::Degenerate(format!(
                "bulge {bulge} does not describe a counter-clockwise arc below a half turn"
            ))
            .into());
        }
        let arc = arc_from_bulge(&start, &end, bulge)
            .ok_or_else(|| GeometryError::Degenerate("zero-length arc chord".into()))?;
        let start_angle = normalize_angle(arc.start_angle);
        Self::new(
            arc.center,
            arc.radius,
            start_angle,
            start_angle + arc.sweep,
            x_axis(),
        )
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the unit reference direction (angle = 0).
    #[must_use]
    pub fn ref_dir(&self) -> &Vector2 {
        &self.ref_dir
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Included angle of the arc.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Polyline bulge of the arc: `tan(sweep / 4)`.
    #[must_use]
    pub fn bulge(&self) -> f64 {
        bulge_from_sweep(self.sweep())
    }

    /// Point on the supporting circle at `angle`.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point2 {
        self.center + rotate(&self.ref_dir, angle) * self.radius
    }

    /// Unit tangent at `angle`, pointing in the direction of travel.
    #[must_use]
    pub fn tangent_at(&self, angle: f64) -> Vector2 {
        perpendicular(&rotate(&self.ref_dir, angle))
    }

    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at(self.start_angle)
    }

    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at(self.end_angle)
    }

    /// Returns the arc moved by a rigid transformation. Angles are unchanged since
    /// the reference direction turns with the arc.
    #[must_use]
    pub fn transformed(&self, iso: &Isometry2) -> Arc2 {
        Arc2 {
            center: iso * self.center,
            ref_dir: iso.rotation * self.ref_dir,
            ..*self
        }
    }
}
