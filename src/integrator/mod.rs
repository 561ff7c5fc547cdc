mod phong;

pub use phong::{
    calculate_ambient, calculate_diffuse, calculate_phong_color, calculate_specular, reflect,
    shade_hit,
};

use crate::error::Result;
use crate::math::*;
use crate::profile::Profile;
use crate::world::World;

use std::sync::Arc;

pub trait Integrator: Sync + Send {
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> Result<RGBColor>;
}

/// Direct Phong lighting of the nearest sphere, no secondary rays.
pub struct PhongIntegrator {
    pub world: Arc<World>,
}

impl PhongIntegrator {
    pub fn new(world: Arc<World>) -> Self {
        PhongIntegrator { world }
    }
}

impl Integrator for PhongIntegrator {
    fn color(&self, camera_ray: Ray, profile: &mut Profile) -> Result<RGBColor> {
        profile.camera_rays += 1;
        let hit = self.world.hit(&camera_ray)?;
        let (sphere, point) = match (hit.sphere, hit.point) {
            (Some(sphere), Some(point)) => (sphere, point),
            _ => {
                profile.misses += 1;
                return Ok(self.world.background);
            }
        };
        profile.hits += 1;

        let normal = sphere.normal_at(point)?;
        let view_dir = (-camera_ray.direction).normalized()?;
        shade_hit(
            sphere.surface_material(),
            sphere.color(),
            &self.world.lights,
            point,
            normal,
            view_dir,
        )
    }
}
