//! Ray-sphere intersection and Phong shading.
//!
//! The core ([`math`], [`geometry`], [`hittable`], [`materials`],
//! [`integrator`]) is a set of pure functions over small `Copy` values.
//! [`parsing`], [`camera`] and [`renderer`] form a minimal driver around it.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod hittable;
pub mod integrator;
pub mod materials;
pub mod math;
pub mod parsing;
pub mod profile;
pub mod renderer;
pub mod world;

pub use error::{Result, TracerError};
