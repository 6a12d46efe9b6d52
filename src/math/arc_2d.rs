//! 2D arc/bulge math utilities.
//!
//! Bulge convention: `bulge = tan(sweep_angle / 4)`.
//! - `bulge = 0`: straight line
//! - `bulge > 0`: counter-clockwise arc
//! - `bulge < 0`: clockwise arc
//! - `|bulge| = 1`: semicircle
use super::{Point2, Vector2};

/// Center-radius-angle form of a bulge arc segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulgeArc {
    pub center: Point2,
    pub radius: f64,
    /// Angle of the start point around `center`, measured from the x-axis.
    pub start_angle: f64,
    /// Signed sweep, positive counter-clockwise.
    pub sweep: f64,
}

/// Converts a bulge-defined arc segment to center-radius-angle form.
///
/// Returns `None` for zero-length chords and for a zero bulge (straight segment).
#[must_use]
pub fn arc_from_bulge(p0: &Point2, p1: &Point2, bulge: f64) -> Option<BulgeArc> {
    let chord = p1 - p0;
    let chord_len = chord.norm();

    if chord_len < 1e-12 || bulge.abs() < 1e-12 {
        return None;
    }

    // Distance from chord midpoint to center, in half-chord units.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let mid = p0 + chord * 0.5;

    // Normal to chord pointing toward center (for positive bulge, center is left of chord).
    let normal = Vector2::new(-chord.y, chord.x) / chord_len;
    let center = mid + normal * (sagitta_ratio * chord_len * 0.5);

    // r = d*(1+b²)/(4*|b|) derived from r = d/(2*sin(θ/2)) with θ=4*atan(b)
    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());

    let start_angle = (p0.y - center.y).atan2(p0.x - center.x);
    let sweep = 4.0 * bulge.atan();

    Some(BulgeArc {
        center,
        radius,
        start_angle,
        sweep,
    })
}

/// Bulge of an arc with the given signed sweep angle.
#[must_use]
pub fn bulge_from_sweep(sweep: f64) -> f64 {
    (sweep / 4.0).tan()
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(arc: &BulgeArc, t: f64) -> Point2 {
    let angle = arc.start_angle + arc.sweep * t;
    Point2::new(
        arc.center.x + arc.radius * angle.cos(),
        arc.center.y + arc.radius * angle.sin(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn semicircle_ccw() {
        // CCW semicircle from (0,0) to (2,0), bulge=1.
        // Center at (1,0), radius=1, sweep=+π, through the bottom.
        let arc = arc_from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 1.0).unwrap();
        assert!((arc.center.x - 1.0).abs() < TOL, "cx={}", arc.center.x);
        assert!(arc.center.y.abs() < TOL, "cy={}", arc.center.y);
        assert!((arc.radius - 1.0).abs() < TOL, "r={}", arc.radius);
        assert!((arc.sweep - PI).abs() < TOL, "sweep={}", arc.sweep);

        let p1 = arc_point_at(&arc, 1.0);
        assert!((p1.x - 2.0).abs() < TOL, "p1.x={}", p1.x);
        assert!(p1.y.abs() < TOL, "p1.y={}", p1.y);

        let pm = arc_point_at(&arc, 0.5);
        assert!((pm.x - 1.0).abs() < TOL, "pm.x={}", pm.x);
        assert!((pm.y + 1.0).abs() < TOL, "pm.y={}", pm.y);
    }

    #[test]
    fn semicircle_cw_goes_through_top() {
        let arc = arc_from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), -1.0).unwrap();
        assert!((arc.sweep + PI).abs() < TOL, "sweep={}", arc.sweep);
        let pm = arc_point_at(&arc, 0.5);
        assert!((pm.x - 1.0).abs() < TOL, "pm.x={}", pm.x);
        assert!((pm.y - 1.0).abs() < TOL, "pm.y={}", pm.y);
    }

    #[test]
    fn quarter_circle_ccw() {
        // CCW quarter circle from (1,0) to (0,1), center at origin.
        let bulge = bulge_from_sweep(PI / 2.0);
        let arc = arc_from_bulge(&Point2::new(1.0, 0.0), &Point2::new(0.0, 1.0), bulge).unwrap();
        assert!((arc.radius - 1.0).abs() < 1e-9, "r={}", arc.radius);
        assert!(arc.center.coords.norm() < 1e-9, "c={}", arc.center);
        assert!((arc.sweep - PI / 2.0).abs() < 1e-12, "sweep={}", arc.sweep);

        let pm = arc_point_at(&arc, 0.5);
        let expected = (PI / 4.0).cos();
        assert!((pm.x - expected).abs() < 1e-9, "pm.x={}", pm.x);
        assert!((pm.y - expected).abs() < 1e-9, "pm.y={}", pm.y);
    }

    #[test]
    fn straight_segment_has_no_arc() {
        assert!(arc_from_bulge(&Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0), 0.0).is_none());
        assert!(arc_from_bulge(&Point2::new(1.0, 1.0), &Point2::new(1.0, 1.0), 0.5).is_none());
    }

    #[test]
    fn small_bulge_is_large_flat_arc() {
        let arc = arc_from_bulge(&Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0), 0.001).unwrap();
        assert!(arc.radius > 100.0, "r={}", arc.radius);
        assert!(arc.sweep.abs() < 0.01, "sweep={}", arc.sweep);
    }
}
