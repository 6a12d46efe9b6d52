pub mod angle_2d;
pub mod arc_2d;
pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rigid transformation (rotation followed by translation).
pub type Isometry2 = nalgebra::Isometry2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Unit vector along the x-axis.
#[must_use]
pub fn x_axis() -> Vector2 {
    Vector2::new(1.0, 0.0)
}

/// Unit vector along the y-axis.
#[must_use]
pub fn y_axis() -> Vector2 {
    Vector2::new(0.0, 1.0)
}

/// Applies `iso` to every point of `points`.
#[must_use]
pub fn transform_points(points: &[Point2], iso: &Isometry2) -> Vec<Point2> {
    points.iter().map(|p| iso * p).collect()
}
