pub mod arc_chain;
pub mod curve;
pub mod pline;

pub use arc_chain::{ArcChain, ContinuityDefect};
pub use curve::{Arc2, Line2, Segment2};
pub use pline::{Pline, PlineVertex};
