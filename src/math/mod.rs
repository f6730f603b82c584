pub mod polygon_2d;
pub mod predicates;

pub use polygon_2d::{centroid_2d, envelope_2d, polyline_centroid_2d, signed_area_2d};
pub use predicates::{distance_squared, lexicographic_cmp, orientation};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
