use crate::error::Result;
use crate::geometry::ArcChain;
use crate::math::{Point2, Vector2};
use crate::operations::{
    min_tension, BasketHandle, Catenary, CenterCount, Parabola, ParabolaShape, RampantArch,
};

use super::Sampler;

/// Drags the height of a basket-handle arch.
#[derive(Debug, Clone)]
pub struct BasketHandleSampler {
    start: Point2,
    end: Point2,
    centers: CenterCount,
}

impl BasketHandleSampler {
    #[must_use]
    pub fn new(start: Point2, end: Point2, centers: CenterCount) -> Self {
        Self {
            start,
            end,
            centers,
        }
    }
}

impl Sampler for BasketHandleSampler {
    type Param = f64;
    type Output = ArcChain;

    fn build(&self, height: f64) -> Result<Option<ArcChain>> {
        BasketHandle::new(self.start, self.end, height, self.centers)
            .execute()
            .map(Some)
    }
}

/// Drags the height of a rampant arch.
#[derive(Debug, Clone)]
pub struct RampantArchSampler {
    start: Point2,
    end: Point2,
    reference: Vector2,
}

impl RampantArchSampler {
    #[must_use]
    pub fn new(start: Point2, end: Point2, reference: Vector2) -> Self {
        Self {
            start,
            end,
            reference,
        }
    }
}

impl Sampler for RampantArchSampler {
    type Param = f64;
    type Output = ArcChain;

    fn build(&self, height: f64) -> Result<Option<ArcChain>> {
        RampantArch::new(self.start, self.end, height, self.reference)
            .execute()
            .map(Some)
    }
}

/// Drags the tension of a catenary cable.
#[derive(Debug, Clone)]
pub struct CatenarySampler {
    start: Point2,
    end: Point2,
    num_samples: usize,
}

impl CatenarySampler {
    #[must_use]
    pub fn new(start: Point2, end: Point2, num_samples: usize) -> Self {
        Self {
            start,
            end,
            num_samples,
        }
    }

    /// Smallest tension this sampler accepts.
    #[must_use]
    pub fn min_tension(&self) -> f64 {
        min_tension(&self.start, &self.end)
    }
}

impl Sampler for CatenarySampler {
    type Param = f64;
    type Output = Vec<Point2>;

    fn build(&self, tension: f64) -> Result<Option<Vec<Point2>>> {
        Catenary::new(self.start, self.end, self.num_samples, tension)
            .execute()
            .map(Some)
    }
}

/// Drags the end point of a parabola.
#[derive(Debug, Clone)]
pub struct ParabolaSampler {
    summit: Point2,
    axis: Vector2,
}

impl ParabolaSampler {
    #[must_use]
    pub fn new(summit: Point2, axis: Vector2) -> Self {
        Self { summit, axis }
    }
}

impl Sampler for ParabolaSampler {
    type Param = Point2;
    type Output = ParabolaShape;

    fn build(&self, drag: Point2) -> Result<Option<ParabolaShape>> {
        Parabola::new(self.summit, self.axis, drag).execute()
    }
}
