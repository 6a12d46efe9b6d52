mod basket_handle;
mod catenary;
mod parabola;
mod rampant_arch;

pub use basket_handle::{BasketHandle, CenterCount};
pub use catenary::{
    min_tension, Catenary, CatenaryCurve, MAX_SAMPLES, MIN_SAMPLES, MIN_TENSION_RATIO,
};
pub use parabola::{Parabola, ParabolaShape};
pub use rampant_arch::RampantArch;

use crate::error::{ParameterError, Result};
use crate::geometry::ArcChain;
use crate::math::{Point2, Vector2};

/// Rejects the first NaN or infinite value, naming it.
pub(crate) fn ensure_finite(values: &[(&'static str, f64)]) -> Result<()> {
    match values.iter().find(|(_, value)| !value.is_finite()) {
        Some(&(parameter, value)) => Err(ParameterError::OutOfRange {
            parameter,
            value,
            min: f64::MIN,
            max: f64::MAX,
        }
        .into()),
        None => Ok(()),
    }
}

/// Builds a basket-handle arch between `start` and `end` rising `height` above
/// the chord.
///
/// # Errors
///
/// See [`BasketHandle::execute`].
pub fn build_basket_handle(
    start: Point2,
    end: Point2,
    height: f64,
    centers: CenterCount,
) -> Result<ArcChain> {
    BasketHandle::new(start, end, height, centers).execute()
}

/// Builds a four-arc rampant arch between two supports.
///
/// # Errors
///
/// See [`RampantArch::execute`].
pub fn build_rampant_arch(
    start: Point2,
    end: Point2,
    height: f64,
    reference: Vector2,
) -> Result<ArcChain> {
    RampantArch::new(start, end, height, reference).execute()
}

/// Samples `num_samples` points of the catenary of tension `tension` hung
/// between `start` and `end`.
///
/// # Errors
///
/// See [`Catenary::execute`].
pub fn build_catenary(
    start: Point2,
    end: Point2,
    num_samples: usize,
    tension: f64,
) -> Result<Vec<Point2>> {
    Catenary::new(start, end, num_samples, tension).execute()
}

/// Builds the parabola with vertex `summit` along `axis` passing through `drag`.
/// `Ok(None)` signals that the drag point gives no new shape.
///
/// # Errors
///
/// See [`Parabola::execute`].
pub fn build_parabola(summit: Point2, axis: Vector2, drag: Point2) -> Result<Option<ParabolaShape>> {
    Parabola::new(summit, axis, drag).execute()
}
