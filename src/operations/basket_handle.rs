use std::f64::consts::{FRAC_PI_4, PI};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, ParameterError, Result};
use crate::geometry::{Arc2, ArcChain, Line2, Segment2};
use crate::math::angle_2d::{angle_to, unit};
use crate::math::{x_axis, y_axis, Isometry2, Point2, TOLERANCE};

/// Parametric angle of the intermediate key points of the seven-center arch.
const SEVEN_CENTER_KEY_ANGLE: f64 = FRAC_PI_4;

/// Number of circle centers of a basket-handle arch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CenterCount {
    #[default]
    Three,
    Seven,
}

impl TryFrom<u8> for CenterCount {
    type Error = ParameterError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            7 => Ok(Self::Seven),
            other => Err(ParameterError::UnsupportedCenterCount(other)),
        }
    }
}

impl From<CenterCount> for u8 {
    fn from(value: CenterCount) -> Self {
        match value {
            CenterCount::Three => 3,
            CenterCount::Seven => 7,
        }
    }
}

impl fmt::Display for CenterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Builds a basket-handle arch: a flattened arch of 3 or 7 tangent arcs rising
/// `height` above the chord between two spring points.
///
/// The arcs are derived in a canonical local frame (chord on the x-axis, chord
/// midpoint at the origin, crown on +y) and then placed so that the chain runs
/// from `start` to `end`.
#[derive(Debug, Clone)]
pub struct BasketHandle {
    start: Point2,
    end: Point2,
    height: f64,
    centers: CenterCount,
}

impl BasketHandle {
    /// Creates a new `BasketHandle` operation.
    #[must_use]
    pub fn new(start: Point2, end: Point2, height: f64, centers: CenterCount) -> Self {
        Self {
            start,
            end,
            height,
            centers,
        }
    }

    /// Executes the construction, returning the arc chain placed between the endpoints.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the endpoints coincide, the height is not
    /// positive, or a construction line has no unique intersection.
    pub fn execute(&self) -> Result<ArcChain> {
        let chain = self.local_chain()?.transformed(&self.placement());
        tracing::debug!(
            centers = %self.centers,
            height = self.height,
            arcs = chain.len(),
            "built basket handle"
        );
        Ok(chain)
    }

    /// Builds the arc chain in the canonical local frame.
    ///
    /// # Errors
    ///
    /// Same as [`BasketHandle::execute`].
    pub fn local_chain(&self) -> Result<ArcChain> {
        let width = (self.end - self.start).norm();
        if !width.is_finite() || width < TOLERANCE {
            return Err(
                GeometryError::Degenerate("basket handle endpoints coincide".into()).into(),
            );
        }
        if !(self.height > 0.0 && self.height.is_finite()) {
            return Err(GeometryError::Degenerate(format!(
                "basket handle height {} must be positive",
                self.height
            ))
            .into());
        }

        let half_width = width / 2.0;
        let arcs = match self.centers {
            CenterCount::Three => three_center_arcs(half_width, self.height)?,
            CenterCount::Seven => seven_center_arcs(half_width, self.height)?,
        };
        ArcChain::new(arcs)
    }

    /// Rigid transform from the local frame to the endpoints' frame: rotation by
    /// the angle of `start - end`, then translation to the chord midpoint.
    #[must_use]
    pub fn placement(&self) -> Isometry2 {
        let chord = self.start - self.end;
        let midpoint = nalgebra::center(&self.start, &self.end);
        Isometry2::new(midpoint.coords, chord.y.atan2(chord.x))
    }
}

/// Three tangent arcs spanning `[0, π]` around the local origin.
fn three_center_arcs(half_width: f64, height: f64) -> Result<Vec<Arc2>> {
    let point1 = Point2::new(half_width, 0.0);
    let point3 = Point2::new(0.0, height);

    // Chord from the spring point toward the crown, shortened by the
    // difference between half-span and rise.
    let chord = Segment2::new(point1, point3);
    let segment = Segment2::from_vector(
        point1,
        chord.direction()? * (chord.length() - (half_width - height)),
    );
    let bisector = segment.bisector()?;

    let center1 = bisector.intersect_with(&Line2::new(Point2::origin(), x_axis())?)?;
    let center2 = bisector.intersect_with(&Line2::new(Point2::origin(), y_axis())?)?;
    let center3 = Point2::new(-center1.x, center1.y);

    let vector = if height > half_width {
        center2 - center1
    } else {
        center1 - center2
    };
    // Semicircle: the centers coincide and only the bisector still carries the
    // junction direction.
    let vector = if vector.norm() > TOLERANCE * half_width {
        vector
    } else {
        -*bisector.direction()
    };

    let angle1 = angle_to(&x_axis(), &vector);
    let angle2 = angle_to(&vector, &y_axis()) * 2.0;
    let side_radius = (center1 - point1).norm();

    Ok(vec![
        Arc2::new(center1, side_radius, 0.0, angle1, x_axis())?,
        Arc2::new(
            center2,
            (center2 - point3).norm(),
            angle1,
            angle1 + angle2,
            x_axis(),
        )?,
        Arc2::new(center3, side_radius, angle1 + angle2, PI, x_axis())?,
    ])
}

/// Seven tangent arcs through five key points of the implicit half-ellipse,
/// described by chord and bulge.
fn seven_center_arcs(half_width: f64, height: f64) -> Result<Vec<Arc2>> {
    let (sin, cos) = SEVEN_CENTER_KEY_ANGLE.sin_cos();
    let point1 = Point2::new(half_width, 0.0);
    let point3 = Point2::new(half_width * cos, height * sin);
    let point5 = Point2::new(0.0, height);
    let point7 = mirror_x(&point3);
    let point9 = mirror_x(&point1);

    let vector1 = unit(&(point3 - point1))?;
    let vector2 = unit(&(point5 - point1))?;
    let vector3 = unit(&(point5 - point3))?;

    let line1 = Line2::new(point1, y_axis() + vector1)?;
    let line2 = Line2::new(point3, vector1 + vector2)?;
    let line3 = Line2::new(point3, vector2 + vector3)?;
    let line4 = Line2::new(point5, x_axis() - vector3)?;

    let point2 = line1.intersect_with(&line2)?;
    let point4 = line3.intersect_with(&line4)?;
    let point6 = mirror_x(&point4);
    let point8 = mirror_x(&point2);

    let bulge1 = (angle_to(&y_axis(), &(point2 - point1)) / 2.0).tan();
    let bulge2 = (angle_to(&(point3 - point2), &vector2) / 2.0).tan();
    let bulge3 = (angle_to(&vector2, &(point4 - point3)) / 2.0).tan();
    // The crown arc is split by the crown tangent, so its half-chord angle is
    // already a quarter of the sweep.
    let bulge4 = angle_to(&(point5 - point4), &x_axis()).tan();

    [
        (point1, point2, bulge1),
        (point2, point3, bulge2),
        (point3, point4, bulge3),
        (point4, point6, bulge4),
        (point6, point7, bulge3),
        (point7, point8, bulge2),
        (point8, point9, bulge1),
    ]
    .into_iter()
    .map(|(start, end, bulge)| Arc2::from_bulge(start, end, bulge))
    .collect()
}

/// Mirror image across the local y-axis.
fn mirror_x(p: &Point2) -> Point2 {
    Point2::new(-p.x, p.y)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::error::ArchlineError;

    const TOL: f64 = 1e-9;

    fn local(height: f64, centers: CenterCount) -> ArcChain {
        BasketHandle::new(Point2::new(5.0, 0.0), Point2::new(-5.0, 0.0), height, centers)
            .local_chain()
            .unwrap()
    }

    fn assert_tangent_chain(chain: &ArcChain) {
        let defect = chain.continuity_defect();
        assert!(defect.max_gap < TOL, "{defect:?}");
        assert!(defect.max_tangent_angle < TOL, "{defect:?}");
        assert_abs_diff_eq!(chain.total_sweep(), PI, epsilon = TOL);
    }

    #[test]
    fn center_count_conversions() {
        assert_eq!(CenterCount::try_from(3).unwrap(), CenterCount::Three);
        assert_eq!(CenterCount::try_from(7).unwrap(), CenterCount::Seven);
        assert!(matches!(
            CenterCount::try_from(5),
            Err(ParameterError::UnsupportedCenterCount(5))
        ));
        assert_eq!(u8::from(CenterCount::Seven), 7);
        assert_eq!(CenterCount::Seven.to_string(), "7");
    }

    #[test]
    fn three_center_flat_arch() {
        let chain = local(2.0, CenterCount::Three);
        assert_eq!(chain.len(), 3);
        assert_tangent_chain(&chain);

        let arcs = chain.arcs();
        // Classic construction values for half-span 5 and rise 2.
        assert_relative_eq!(arcs[0].center().x, 3.715_549_442_140_351, epsilon = 1e-12);
        assert_relative_eq!(arcs[1].center().y, -9.288_873_605_350_878, epsilon = 1e-12);
        assert_relative_eq!(arcs[0].end_angle(), 2.0_f64.atan2(0.8), epsilon = 1e-12);

        let start = chain.start_point();
        assert_abs_diff_eq!(start.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(start.y, 0.0, epsilon = 1e-12);
        let crown = arcs[1].point_at(FRAC_PI_2);
        assert_abs_diff_eq!(crown.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(crown.y, 2.0, epsilon = 1e-12);
        let end = chain.end_point();
        assert_abs_diff_eq!(end.x, -5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn three_center_tall_arch() {
        let chain = local(8.0, CenterCount::Three);
        assert_tangent_chain(&chain);
        let arcs = chain.arcs();
        // Tall arch: side centers lie past the axis, crown center above the chord.
        assert!(arcs[0].center().x < 0.0);
        assert!(arcs[1].center().y > 0.0);
        assert!(arcs[1].radius() < arcs[0].radius());
    }

    #[test]
    fn three_center_symmetry() {
        let arcs = local(3.3, CenterCount::Three).arcs().to_vec();
        assert_eq!(arcs[0].radius(), arcs[2].radius());
        assert_relative_eq!(arcs[0].sweep(), arcs[2].sweep(), epsilon = 1e-12);
        assert_eq!(arcs[0].center().x, -arcs[2].center().x);
    }

    #[test]
    fn three_center_semicircle_boundary() {
        let chain = local(5.0, CenterCount::Three);
        assert_tangent_chain(&chain);
        for arc in chain.arcs() {
            assert_abs_diff_eq!(arc.radius(), 5.0, epsilon = 1e-12);
            assert!(arc.center().coords.norm() < 1e-12);
        }
        assert_abs_diff_eq!(chain.arcs()[0].end_angle(), FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(chain.arcs()[1].sweep(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn three_center_is_continuous_across_semicircle() {
        let below = local(5.0 - 1e-6, CenterCount::Three);
        let at = local(5.0, CenterCount::Three);
        let above = local(5.0 + 1e-6, CenterCount::Three);
        for chain in [&below, &above] {
            assert_abs_diff_eq!(
                chain.arcs()[0].center().x,
                at.arcs()[0].center().x,
                epsilon = 1e-5
            );
            assert_abs_diff_eq!(
                chain.arcs()[0].sweep(),
                at.arcs()[0].sweep(),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn three_center_span_varies_monotonically() {
        let mut last_sweep = f64::INFINITY;
        let mut last_center = f64::INFINITY;
        for step in 1..=40 {
            let height = f64::from(step) * 0.25;
            let chain = local(height, CenterCount::Three);
            assert_tangent_chain(&chain);
            let arc1 = chain.arcs()[0];
            assert!(arc1.sweep() < last_sweep, "height {height}");
            assert!(arc1.center().x < last_center, "height {height}");
            last_sweep = arc1.sweep();
            last_center = arc1.center().x;
        }
    }

    #[test]
    fn seven_center_chain_is_tangent() {
        for height in [0.05, 0.5, 2.0, 5.0, 8.0, 30.0] {
            let chain = local(height, CenterCount::Seven);
            assert_eq!(chain.len(), 7);
            assert_tangent_chain(&chain);
            let crown = chain.arcs()[3].point_at(FRAC_PI_2);
            assert_abs_diff_eq!(crown.y, height, epsilon = 1e-9);
        }
    }

    #[test]
    fn seven_center_symmetry() {
        let chain = local(2.0, CenterCount::Seven);
        let arcs = chain.arcs();
        for (i, j) in [(0, 6), (1, 5), (2, 4)] {
            assert_relative_eq!(arcs[i].bulge(), arcs[j].bulge(), epsilon = 1e-12);
            assert_relative_eq!(arcs[i].radius(), arcs[j].radius(), epsilon = 1e-12);
        }
        let vertices = chain.vertices();
        assert_eq!(vertices.len(), 8);
        assert_abs_diff_eq!(vertices[0].1, 0.203_452_750_707_679, epsilon = 1e-12);
        assert_abs_diff_eq!(vertices[3].1, 0.082_281_842_327_722, epsilon = 1e-12);
    }

    #[test]
    fn seven_center_semicircle_has_equal_side_arcs() {
        let chain = local(5.0, CenterCount::Seven);
        let arcs = chain.arcs();
        for arc in arcs {
            assert_abs_diff_eq!(arc.radius(), 5.0, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(arcs[0].sweep(), FRAC_PI_4 / 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(arcs[3].sweep(), FRAC_PI_4, epsilon = 1e-9);
    }

    #[test]
    fn placed_chain_runs_between_endpoints() {
        let start = Point2::new(3.0, 7.0);
        let end = Point2::new(-1.0, 4.0);
        for centers in [CenterCount::Three, CenterCount::Seven] {
            let chain = BasketHandle::new(start, end, 1.5, centers).execute().unwrap();
            assert_abs_diff_eq!((chain.start_point() - start).norm(), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!((chain.end_point() - end).norm(), 0.0, epsilon = 1e-12);
            assert_tangent_chain(&chain);
        }
    }

    #[test]
    fn chain_round_trips_through_pline() {
        let chain = BasketHandle::new(
            Point2::new(4.0, 2.0),
            Point2::new(-3.0, -1.0),
            2.2,
            CenterCount::Seven,
        )
        .execute()
        .unwrap();
        let decoded = chain.to_pline().arcs().unwrap();
        assert_eq!(decoded.len(), chain.len());
        for (arc, back) in chain.arcs().iter().zip(&decoded) {
            assert_abs_diff_eq!(arc.radius(), back.radius(), epsilon = 1e-9);
            assert_abs_diff_eq!(arc.sweep(), back.sweep(), epsilon = 1e-12);
            assert!((arc.start_point() - back.start_point()).norm() < 1e-12);
            assert!((arc.end_point() - back.end_point()).norm() < 1e-12);
        }
    }

    #[test]
    fn build_is_deterministic() {
        let op = BasketHandle::new(
            Point2::new(2.0, 1.0),
            Point2::new(-4.0, 3.0),
            1.2,
            CenterCount::Seven,
        );
        assert_eq!(op.execute().unwrap(), op.execute().unwrap());
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let p = Point2::new(1.0, 1.0);
        let err = BasketHandle::new(p, p, 1.0, CenterCount::Three).execute().unwrap_err();
        assert!(matches!(err, ArchlineError::Geometry(GeometryError::Degenerate(_))));

        let q = Point2::new(-1.0, 1.0);
        for height in [0.0, -2.0, f64::NAN] {
            let err = BasketHandle::new(p, q, height, CenterCount::Seven)
                .execute()
                .unwrap_err();
            assert!(err.is_degenerate(), "height {height}");
        }
    }
}
