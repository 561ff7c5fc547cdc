mod sphere;

pub use sphere::{Sphere, NO_INTERSECTION};
