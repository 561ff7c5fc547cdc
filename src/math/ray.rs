use crate::math::{Point3, Vec3};

/// Half-line `origin + t * direction`.
///
/// The direction is not normalized on construction. Callers usually pass a
/// unit direction so that `t` measures distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f32) -> Point3 {
        self.origin + self.direction * time
    }
}
