//! Live preview of a curve while one of its parameters is dragged.
//!
//! A host owns a [`DragSession`] for the duration of an interactive pull and
//! feeds it every new parameter value. The session rebuilds the geometry from
//! scratch through its [`Sampler`] and keeps the last good result, so a bad
//! value never destroys the preview.

mod samplers;
mod session;

pub use samplers::{BasketHandleSampler, CatenarySampler, ParabolaSampler, RampantArchSampler};
pub use session::{DragSession, SamplerStatus};

use crate::error::Result;

/// Pure builder driven by a single dragged parameter.
pub trait Sampler: std::fmt::Debug {
    /// The dragged value: a height, a tension or a point.
    type Param: Copy + PartialEq + std::fmt::Debug;
    /// The geometry built for one value.
    type Output: std::fmt::Debug;

    /// Builds the geometry for `param`.
    ///
    /// `Ok(None)` means the value produces nothing new and the current preview
    /// should be kept.
    ///
    /// # Errors
    ///
    /// Returns the builder's error when `param` violates a precondition.
    fn build(&self, param: Self::Param) -> Result<Option<Self::Output>>;
}
