use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{arc_from_bulge, arc_point_at};
use crate::math::{Isometry2, Point2};

use super::curve::Arc2;

/// Bulge-encoded polyline vertex for mixed line/arc segments.
///
/// `bulge = tan(sweep_angle / 4)`:
/// - `0` = straight line to next vertex
/// - `> 0` = counter-clockwise arc to next vertex
/// - `< 0` = clockwise arc to next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlineVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl PlineVertex {
    /// Creates a new vertex with the given coordinates and bulge.
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self { x, y, bulge: 0.0 }
    }

    #[must_use]
    pub fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// A polyline with mixed straight-line and circular-arc segments.
///
/// Each segment between consecutive vertices is either a line (bulge=0)
/// or a circular arc (bulge≠0). For closed polylines, the last vertex
/// connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Pline {
    pub vertices: Vec<PlineVertex>,
    pub closed: bool,
}

impl Pline {
    /// Creates a `Pline` from points with all-zero bulges (line segments only).
    #[must_use]
    pub fn from_points(points: &[Point2], closed: bool) -> Self {
        let vertices = points
            .iter()
            .map(|p| PlineVertex::line(p.x, p.y))
            .collect();
        Self { vertices, closed }
    }

    /// Converts this polyline to a list of points by tessellating arcs into line segments.
    ///
    /// `tolerance` controls the maximum deviation between the arc and its chord approximation.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let n = self.vertices.len();
        if n == 0 {
            return Vec::new();
        }

        let mut points = Vec::with_capacity(n * 2);
        points.push(self.vertices[0].point());

        for i in 0..self.segment_count() {
            let v0 = &self.vertices[i];
            let v1 = &self.vertices[(i + 1) % n];

            let Some(arc) = arc_from_bulge(&v0.point(), &v1.point(), v0.bulge) else {
                // Straight line or zero-length chord: just add endpoint.
                points.push(v1.point());
                continue;
            };

            let n_sub = arc_subdivision_count(arc.radius, arc.sweep.abs(), tolerance);
            for j in 1..n_sub {
                let t = f64::from(j) / f64::from(n_sub);
                points.push(arc_point_at(&arc, t));
            }
            points.push(v1.point());
        }

        points
    }

    /// Decodes every segment back into an [`Arc2`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if a segment is straight, clockwise,
    /// or sweeps half a turn or more.
    pub fn arcs(&self) -> Result<Vec<Arc2>> {
        let n = self.vertices.len();
        (0..self.segment_count())
            .map(|i| {
                let v0 = &self.vertices[i];
                let v1 = &self.vertices[(i + 1) % n];
                if v0.bulge.abs() < 1e-12 {
                    return Err(GeometryError::Degenerate(format!(
                        "segment {i} is a straight line"
                    ))
                    .into());
                }
                Arc2::from_bulge(v0.point(), v1.point(), v0.bulge)
            })
            .collect()
    }

    /// Returns the polyline moved by a rigid transformation. Bulges are unchanged.
    #[must_use]
    pub fn transformed(&self, iso: &Isometry2) -> Self {
        let vertices = self
            .vertices
            .iter()
            .map(|v| {
                let p = iso * v.point();
                PlineVertex::new(p.x, p.y, v.bulge)
            })
            .collect();
        Self {
            vertices,
            closed: self.closed,
        }
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    // For a given tolerance: θ = 2 * acos(1 - tolerance/r)
    let max_angle = if tolerance >= radius {
        std::f64::consts::PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}
