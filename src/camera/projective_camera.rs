use crate::error::{Result, TracerError};
use crate::math::*;

use tracing::debug;

/// Pinhole camera. Rays start at `origin` and pass through a virtual image
/// plane one unit in front of it.
#[derive(Debug, Clone)]
pub struct ProjectiveCamera {
    pub origin: Point3,
    pub direction: Vec3,
    lower_left_corner: Point3,
    vfov: f32,
    pub horizontal: Vec3,
    pub vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl ProjectiveCamera {
    pub fn new(
        look_from: Point3,
        look_at: Point3,
        v_up: Vec3,
        vertical_fov: f32, // vertical_fov should be given in degrees, since it is converted to radians
    ) -> Result<ProjectiveCamera> {
        if !(vertical_fov > 0.0 && vertical_fov < 180.0) {
            return Err(TracerError::Construction(format!(
                "vertical fov must be in (0, 180) degrees, got {}",
                vertical_fov
            )));
        }
        let direction = (look_at - look_from).normalized()?;

        let w = -direction;
        let u = v_up.cross(w).normalized()?;
        let v = w.cross(u);
        debug!(
            "constructing camera at {:?} looking along {:?}, uvw = {:?} {:?} {:?}",
            look_from, direction, u, v, w
        );

        let mut camera = ProjectiveCamera {
            origin: look_from,
            direction,
            lower_left_corner: look_from,
            vfov: vertical_fov,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
            u,
            v,
            w,
        };
        camera.set_aspect_ratio(1.0);
        Ok(camera)
    }

    fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        let theta: f32 = self.vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect_ratio * half_height;
        self.lower_left_corner = self.origin - self.u * half_width - self.v * half_height - self.w;
        self.horizontal = self.u * 2.0 * half_width;
        self.vertical = self.v * 2.0 * half_height;
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.set_aspect_ratio(aspect_ratio);
        self
    }

    /// Unit-direction ray through image coordinates `(s, t)` in [0, 1]²,
    /// `(0, 0)` being the lower left corner.
    pub fn get_ray(&self, s: f32, t: f32) -> Result<Ray> {
        let point_on_plane = self.lower_left_corner + s * self.horizontal + t * self.vertical;
        let ray_direction = (point_on_plane - self.origin).normalized()?;
        debug_assert!(ray_direction.is_finite());
        Ok(Ray::new(self.origin, ray_direction))
    }
}
