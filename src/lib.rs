pub mod drag;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod settings;

pub use error::{ArchlineError, Result};
pub use operations::{build_basket_handle, build_catenary, build_parabola, build_rampant_arch};
