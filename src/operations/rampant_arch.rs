use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::geometry::{Arc2, ArcChain, Line2, Segment2};
use crate::math::angle_2d::{angle_to, perpendicular, unit};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Builds a rampant arch: four tangent arcs spanning two supports at different
/// elevations.
///
/// `height` is the rise of the summit above the chord midpoint, measured along
/// the perpendicular of `reference` (the arch's local horizontal). The chain
/// always runs counter-clockwise, from the support lying further along
/// `reference` to the other one.
#[derive(Debug, Clone)]
pub struct RampantArch {
    start: Point2,
    end: Point2,
    height: f64,
    reference: Vector2,
}

impl RampantArch {
    /// Creates a new `RampantArch` operation.
    #[must_use]
    pub fn new(start: Point2, end: Point2, height: f64, reference: Vector2) -> Self {
        Self {
            start,
            end,
            height,
            reference,
        }
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the supports coincide, the height is not
    /// positive, the reference vector is zero, or two construction lines are
    /// parallel.
    pub fn execute(&self) -> Result<ArcChain> {
        let reference = unit(&self.reference)?;
        if (self.end - self.start).norm() < TOLERANCE {
            return Err(GeometryError::Degenerate("rampant arch supports coincide".into()).into());
        }
        if !(self.height > 0.0 && self.height.is_finite()) {
            return Err(GeometryError::Degenerate(format!(
                "rampant arch height {} must be positive",
                self.height
            ))
            .into());
        }

        let (start, end) = if (self.end - self.start).dot(&reference) > 0.0 {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        };

        let chord = Segment2::new(end, start);
        let delta = chord.length() / 2.0 - self.height;
        let summit = chord.midpoint() + perpendicular(&reference) * self.height;

        let line1 = Line2::new(start, reference)?;
        let line3 = chord.perpendicular_line(summit)?;
        let line5 = Line2::new(end, reference)?;
        let rise = Segment2::new(start, summit).direction()?;
        let line2 = Segment2::new(summit - rise * delta, start).bisector()?;
        let fall = Segment2::new(summit, end).direction()?;
        let line4 = Segment2::new(end, summit + fall * delta).bisector()?;

        let center1 = line1.intersect_with(&line2)?;
        let center2 = line2.intersect_with(&line3)?;
        let center3 = line3.intersect_with(&line4)?;
        let center4 = line4.intersect_with(&line5)?;

        let angle1 = angle_to(&reference, line2.direction());
        let angle2 = angle_to(&reference, line3.direction());
        let angle3 = angle_to(&reference, line4.direction());

        let chain = ArcChain::new(vec![
            Arc2::new(center1, (center1 - start).norm(), 0.0, angle1, reference)?,
            Arc2::new(center2, (center2 - summit).norm(), angle1, angle2, reference)?,
            Arc2::new(center3, (center3 - summit).norm(), angle2, angle3, reference)?,
            Arc2::new(center4, (center4 - end).norm(), angle3, PI, reference)?,
        ])?;
        tracing::debug!(height = self.height, ?summit, "built rampant arch");
        Ok(chain)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::x_axis;
    use crate::operations::{BasketHandle, CenterCount};

    const TOL: f64 = 1e-9;

    fn assert_tangent_chain(chain: &ArcChain) {
        let defect = chain.continuity_defect();
        assert!(defect.max_gap < TOL, "{defect:?}");
        assert!(defect.max_tangent_angle < TOL, "{defect:?}");
        assert_abs_diff_eq!(chain.total_sweep(), PI, epsilon = TOL);
    }

    #[test]
    fn level_supports_reproduce_three_center_arch() {
        let start = Point2::new(5.0, 0.0);
        let end = Point2::new(-5.0, 0.0);
        let chain = RampantArch::new(start, end, 2.0, x_axis()).execute().unwrap();
        assert_eq!(chain.len(), 4);
        assert_tangent_chain(&chain);

        let arcs = chain.arcs();
        assert_abs_diff_eq!(arcs[0].end_angle(), 1.190_289_949_682_531_7, epsilon = 1e-12);
        assert_abs_diff_eq!(arcs[1].end_angle(), FRAC_PI_2, epsilon = 1e-12);

        let basket = BasketHandle::new(start, end, 2.0, CenterCount::Three)
            .execute()
            .unwrap();
        assert_abs_diff_eq!(arcs[0].radius(), basket.arcs()[0].radius(), epsilon = 1e-12);
        assert_abs_diff_eq!(arcs[1].radius(), basket.arcs()[1].radius(), epsilon = 1e-12);
    }

    #[test]
    fn sloped_supports() {
        let start = Point2::new(10.0, 3.0);
        let end = Point2::new(-4.0, -2.0);
        let chain = RampantArch::new(start, end, 3.0, x_axis()).execute().unwrap();
        assert_tangent_chain(&chain);
        assert_abs_diff_eq!((chain.start_point() - start).norm(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!((chain.end_point() - end).norm(), 0.0, epsilon = 1e-12);

        let arcs = chain.arcs();
        // The summit sits between the two middle arcs.
        let summit = arcs[1].end_point();
        assert_abs_diff_eq!(summit.x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(summit.y, 3.5, epsilon = 1e-12);
        assert_abs_diff_eq!(arcs[0].radius(), 1.295_692_769_328_935_5, epsilon = 1e-12);
        assert_abs_diff_eq!(arcs[3].radius(), 2.841_859_532_626_565_4, epsilon = 1e-12);
        // No mirror symmetry once the supports are at different elevations.
        assert!((arcs[0].radius() - arcs[3].radius()).abs() > 1.0);
    }

    #[test]
    fn supports_are_ordered_along_reference() {
        let a = Point2::new(10.0, 3.0);
        let b = Point2::new(-4.0, -2.0);
        let forward = RampantArch::new(a, b, 3.0, x_axis()).execute().unwrap();
        let backward = RampantArch::new(b, a, 3.0, x_axis()).execute().unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn tilted_reference() {
        let start = Point2::new(2.0, 1.0);
        let end = Point2::new(-6.0, 4.0);
        let reference = Vector2::new(1.0, 0.2);
        let chain = RampantArch::new(start, end, 2.5, reference).execute().unwrap();
        assert_tangent_chain(&chain);
        assert_abs_diff_eq!((chain.end_point() - end).norm(), 0.0, epsilon = 1e-12);
        for arc in chain.arcs() {
            assert_abs_diff_eq!(arc.ref_dir().perp(&reference), 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let p = Point2::new(1.0, 2.0);
        let q = Point2::new(-3.0, 0.0);
        assert!(RampantArch::new(p, p, 1.0, x_axis()).execute().unwrap_err().is_degenerate());
        assert!(RampantArch::new(p, q, 0.0, x_axis()).execute().unwrap_err().is_degenerate());
        assert!(RampantArch::new(p, q, -1.0, x_axis()).execute().unwrap_err().is_degenerate());
        assert!(RampantArch::new(p, q, 1.0, Vector2::zeros())
            .execute()
            .unwrap_err()
            .is_degenerate());
    }
}
