mod arc;
mod line;
mod segment;

pub use arc::Arc2;
pub use line::Line2;
pub use segment::Segment2;
