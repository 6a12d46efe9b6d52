use crate::error::{GeometryError, Result};
use crate::math::angle_2d::angle_between;
use crate::math::{Isometry2, Point2};

use super::curve::Arc2;
use super::pline::{Pline, PlineVertex};

/// An ordered sequence of counter-clockwise arcs forming a tangent chain.
///
/// Each arc ends where the next one starts, with the same tangent direction.
/// The arch builders guarantee this by construction; [`ArcChain::continuity_defect`]
/// measures how closely a chain honours it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcChain {
    arcs: Vec<Arc2>,
}

/// Largest junction mismatch found along an [`ArcChain`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContinuityDefect {
    /// Largest distance between an arc's end point and the next arc's start point.
    pub max_gap: f64,
    /// Largest angle between the tangents meeting at a junction.
    pub max_tangent_angle: f64,
}

impl ArcChain {
    /// Creates a chain from its arcs.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if `arcs` is empty.
    pub fn new(arcs: Vec<Arc2>) -> Result<Self> {
        if arcs.is_empty() {
            return Err(GeometryError::Degenerate("arc chain needs at least one arc".into()).into());
        }
        Ok(Self { arcs })
    }

    #[must_use]
    pub fn arcs(&self) -> &[Arc2] {
        &self.arcs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Always `false`: a chain holds at least one arc.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.arcs[0].start_point()
    }

    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.arcs[self.arcs.len() - 1].end_point()
    }

    /// Sum of the included angles of all arcs.
    #[must_use]
    pub fn total_sweep(&self) -> f64 {
        self.arcs.iter().map(Arc2::sweep).sum()
    }

    /// Polyline encoding: each arc's start point with its bulge, terminated by
    /// the chain's end point with bulge 0.
    #[must_use]
    pub fn vertices(&self) -> Vec<(Point2, f64)> {
        self.arcs
            .iter()
            .map(|arc| (arc.start_point(), arc.bulge()))
            .chain(std::iter::once((self.end_point(), 0.0)))
            .collect()
    }

    /// Converts the chain to an open bulge polyline.
    #[must_use]
    pub fn to_pline(&self) -> Pline {
        let vertices = self
            .vertices()
            .into_iter()
            .map(|(p, bulge)| PlineVertex::new(p.x, p.y, bulge))
            .collect();
        Pline {
            vertices,
            closed: false,
        }
    }

    /// Returns the chain moved by a rigid transformation.
    #[must_use]
    pub fn transformed(&self, iso: &Isometry2) -> ArcChain {
        ArcChain {
            arcs: self.arcs.iter().map(|arc| arc.transformed(iso)).collect(),
        }
    }

    /// Measures positional and tangent mismatch over all junctions.
    #[must_use]
    pub fn continuity_defect(&self) -> ContinuityDefect {
        self.arcs
            .windows(2)
            .fold(ContinuityDefect::default(), |acc, pair| {
                let (a, b) = (&pair[0], &pair[1]);
                let gap = (a.end_point() - b.start_point()).norm();
                let angle = angle_between(
                    &a.tangent_at(a.end_angle()),
                    &b.tangent_at(b.start_angle()),
                );
                ContinuityDefect {
                    max_gap: acc.max_gap.max(gap),
                    max_tangent_angle: acc.max_tangent_angle.max(angle),
                }
            })
    }
}
