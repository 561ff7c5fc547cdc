use crate::error::Result;
use crate::geometry::Sphere;
use crate::hittable::{find_closest_intersection, HitResult};
use crate::materials::Light;
use crate::math::*;

use tracing::info;

#[derive(Clone, Debug, Default)]
pub struct World {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub background: RGBColor,
}

impl World {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>, background: RGBColor) -> Self {
        info!(
            "constructing world with {} spheres and {} lights",
            spheres.len(),
            lights.len()
        );
        World {
            spheres,
            lights,
            background,
        }
    }

    pub fn hit(&self, r: &Ray) -> Result<HitResult<'_>> {
        find_closest_intersection(r, &self.spheres)
    }
}
