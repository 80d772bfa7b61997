pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Numeric floor for floating-point comparisons that do not depend on model
/// units. Model-space tolerances are passed explicitly instead.
pub const TOLERANCE: f64 = 1e-10;
