use crate::error::Result;
use crate::geometry::Sphere;
use crate::math::*;

/// Outcome of a nearest-hit query. `sphere` and `point` are `None` on a miss,
/// in which case `t` is infinite.
#[derive(Clone, Debug, PartialEq)]
pub struct HitResult<'a> {
    pub t: f32,
    pub sphere: Option<&'a Sphere>,
    pub point: Option<Point3>,
}

impl<'a> HitResult<'a> {
    pub const fn miss() -> Self {
        HitResult {
            t: INFINITY,
            sphere: None,
            point: None,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.sphere.is_some()
    }
}

/// Linear scan for the nearest sphere in front of the ray origin.
///
/// A sphere only replaces the current best on a strictly smaller positive
/// `t`, so on ties the sphere that comes first in `spheres` wins.
pub fn find_closest_intersection<'a>(r: &Ray, spheres: &'a [Sphere]) -> Result<HitResult<'a>> {
    let mut closest = HitResult::miss();
    for sphere in spheres {
        let time = sphere.intersect(r)?;
        if time > 0.0 && time < closest.t {
            closest = HitResult {
                t: time,
                sphere: Some(sphere),
                point: Some(sphere.intersection_point(r, time)?),
            };
        }
    }
    Ok(closest)
}
