use crate::error::{GeometryError, ParameterError, Result};
use crate::math::{Point2, TOLERANCE};

use super::ensure_finite;

/// Fraction of the horizontal span below which a tension is rejected.
pub const MIN_TENSION_RATIO: f64 = 0.02;

/// Fewest samples a catenary can be described by: both supports plus one
/// interior point.
pub const MIN_SAMPLES: usize = 3;

/// Most samples a single catenary may be sampled with.
pub const MAX_SAMPLES: usize = 1 << 16;

/// Smallest tension accepted for a cable hung between `start` and `end`.
#[must_use]
pub fn min_tension(start: &Point2, end: &Point2) -> f64 {
    (end.x - start.x).abs() * MIN_TENSION_RATIO
}

/// A hanging cable `y = T·(cosh((x − x0)/T) − 1) + y0` with its lowest point at
/// `(x0, y0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatenaryCurve {
    tension: f64,
    x0: f64,
    y0: f64,
}

impl CatenaryCurve {
    /// Solves for the catenary of tension `tension` passing through both
    /// supports.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the supports share an x
    /// coordinate, and [`ParameterError`] if an input is not finite or the
    /// tension is below [`min_tension`].
    pub fn through(start: &Point2, end: &Point2, tension: f64) -> Result<Self> {
        ensure_finite(&[
            ("start.x", start.x),
            ("start.y", start.y),
            ("end.x", end.x),
            ("end.y", end.y),
            ("tension", tension),
        ])?;

        let span = end.x - start.x;
        if span.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "catenary supports share the same x coordinate".into(),
            )
            .into());
        }
        let min = min_tension(start, end);
        if tension <= 0.0 || tension < min {
            return Err(ParameterError::TensionTooLow { tension, min }.into());
        }

        let drop = start.y - end.y;
        let alpha = drop / (2.0 * tension * (span / (2.0 * tension)).sinh());
        let offset = span / 2.0 + tension * alpha.asinh();
        let x0 = start.x + offset;
        let y0 = start.y - tension * ((offset / tension).cosh() - 1.0);
        if !y0.is_finite() {
            return Err(GeometryError::Degenerate(format!(
                "catenary sag overflows for tension {tension}"
            ))
            .into());
        }
        Ok(Self { tension, x0, y0 })
    }

    #[must_use]
    pub fn tension(&self) -> f64 {
        self.tension
    }

    /// Lowest point of the cable's supporting curve. It may lie outside the
    /// span when the supports differ a lot in elevation.
    #[must_use]
    pub fn lowest_point(&self) -> Point2 {
        Point2::new(self.x0, self.y0)
    }

    /// Height of the cable above `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.tension * (((x - self.x0) / self.tension).cosh() - 1.0) + self.y0
    }
}

/// Samples a catenary cable between two supports.
///
/// The first and last samples are the supports themselves; the interior
/// samples are evenly spaced in x.
#[derive(Debug, Clone)]
pub struct Catenary {
    start: Point2,
    end: Point2,
    num_samples: usize,
    tension: f64,
}

impl Catenary {
    /// Creates a new `Catenary` operation.
    #[must_use]
    pub fn new(start: Point2, end: Point2, num_samples: usize, tension: f64) -> Self {
        Self {
            start,
            end,
            num_samples,
            tension,
        }
    }

    /// Solves the curve without sampling it.
    ///
    /// # Errors
    ///
    /// See [`CatenaryCurve::through`].
    pub fn curve(&self) -> Result<CatenaryCurve> {
        CatenaryCurve::through(&self.start, &self.end, self.tension)
    }

    /// Executes the sampling, returning `num_samples` points from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::TooFewSamples`] if fewer than [`MIN_SAMPLES`]
    /// samples are requested, [`ParameterError::TooManySamples`] above
    /// [`MAX_SAMPLES`], plus the errors of [`CatenaryCurve::through`].
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if self.num_samples < MIN_SAMPLES {
            return Err(ParameterError::TooFewSamples {
                count: self.num_samples,
                min: MIN_SAMPLES,
            }
            .into());
        }
        if self.num_samples > MAX_SAMPLES {
            return Err(ParameterError::TooManySamples {
                count: self.num_samples,
                max: MAX_SAMPLES,
            }
            .into());
        }
        let curve = self.curve()?;

        #[allow(clippy::cast_precision_loss)]
        let step = (self.end.x - self.start.x) / (self.num_samples - 1) as f64;
        let mut points = Vec::with_capacity(self.num_samples);
        points.push(self.start);
        for i in 1..self.num_samples - 1 {
            #[allow(clippy::cast_precision_loss)]
            let x = self.start.x + step * i as f64;
            points.push(Point2::new(x, curve.evaluate(x)));
        }
        points.push(self.end);

        tracing::debug!(
            tension = self.tension,
            samples = points.len(),
            lowest = ?curve.lowest_point(),
            "sampled catenary"
        );
        Ok(points)
    }
}
