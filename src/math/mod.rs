mod color;
mod point;
mod ray;
mod vec;

pub use color::RGBColor;
pub use point::Point3;
pub use ray::Ray;
pub use std::f32::consts::PI;
pub use vec::Vec3;

pub const INFINITY: f32 = f32::INFINITY;

/// Absolute tolerance for float comparisons in tests and debug assertions.
pub const EPSILON: f32 = 1e-5;

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}
