use crate::error::{Result, TracerError};
use crate::materials::Material;
use crate::math::*;

/// Returned by [`Sphere::intersect`] when the ray's line misses the sphere.
pub const NO_INTERSECTION: f32 = -1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    color: RGBColor,
    material: Option<Material>,
}

impl Sphere {
    pub const DEFAULT_COLOR: RGBColor = RGBColor::RED;

    /// A sphere shaded with a full Phong material.
    pub fn new(center: Point3, radius: f32, material: Option<Material>) -> Result<Sphere> {
        Sphere::with_color(center, radius, Sphere::DEFAULT_COLOR, material)
    }

    /// A sphere with a flat color, used when no material or no light is available.
    pub fn with_color(
        center: Point3,
        radius: f32,
        color: RGBColor,
        material: Option<Material>,
    ) -> Result<Sphere> {
        if !center.is_finite() {
            return Err(TracerError::Construction(format!(
                "sphere center must be finite, got {:?}",
                center
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(TracerError::Construction(format!(
                "sphere radius must be positive, got {}",
                radius
            )));
        }
        Ok(Sphere {
            center,
            radius,
            color,
            material,
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }
    pub fn radius(&self) -> f32 {
        self.radius
    }
    pub fn color(&self) -> RGBColor {
        self.color
    }
    pub fn surface_material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    /// Near root of the ray-sphere quadratic.
    ///
    /// The near root is returned even when it is negative, i.e. when the
    /// sphere is behind the origin or the origin is inside the sphere.
    /// Misses return [`NO_INTERSECTION`]. A zero-length direction has no
    /// quadratic to solve and yields `DivisionByZero`. Non-finite rays, and
    /// rays large enough to overflow the quadratic, yield `InvalidArgument`.
    pub fn intersect(&self, r: &Ray) -> Result<f32> {
        if !r.origin.is_finite() || !r.direction.is_finite() {
            return Err(TracerError::InvalidArgument(format!(
                "ray must be finite, got {:?}",
                r
            )));
        }
        let oc: Vec3 = r.origin - self.center;
        let a = r.direction * r.direction;
        let b = 2.0 * (oc * r.direction);
        let c = oc * oc - self.radius * self.radius;
        if a == 0.0 {
            return Err(TracerError::DivisionByZero("ray direction has zero length"));
        }
        let discriminant = b * b - 4.0 * a * c;
        if !a.is_finite() || !discriminant.is_finite() {
            return Err(TracerError::InvalidArgument(format!(
                "ray-sphere quadratic overflowed for {:?}",
                r
            )));
        }
        if discriminant < 0.0 {
            return Ok(NO_INTERSECTION);
        }
        Ok((-b - discriminant.sqrt()) / (2.0 * a))
    }

    pub fn intersection_point(&self, r: &Ray, time: f32) -> Result<Point3> {
        if !time.is_finite() {
            return Err(TracerError::InvalidArgument(format!(
                "intersection parameter must be finite, got {}",
                time
            )));
        }
        Ok(r.point_at_parameter(time))
    }

    /// Outward unit normal at `point`. Surface membership is not checked.
    pub fn normal_at(&self, point: Point3) -> Result<Vec3> {
        (point - self.center).normalized()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn unit_sphere_ahead() -> Sphere {
        Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, None).unwrap()
    }

    #[test]
    fn test_miss() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ORIGIN, Vec3::X);
        assert_eq!(sphere.intersect(&ray).unwrap(), NO_INTERSECTION);
    }

    #[test]
    fn test_front_hit() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ORIGIN, -Vec3::Z);
        let t = sphere.intersect(&ray).unwrap();
        assert!(approx_eq(t, 4.0));
        let p = sphere.intersection_point(&ray, t).unwrap();
        assert!(approx_eq(p.z, -4.0));
        assert!(approx_eq(p.x, 0.0) && approx_eq(p.y, 0.0));
    }

    #[test]
    fn test_tangent_hit() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), -Vec3::Z);
        let t = sphere.intersect(&ray).unwrap();
        assert!(approx_eq(t, 5.0));
    }

    #[test]
    fn test_unnormalized_direction() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -2.0));
        let t = sphere.intersect(&ray).unwrap();
        assert!(approx_eq(t, 2.0));
    }

    #[test]
    fn test_near_root_is_negative_from_inside() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), -Vec3::Z);
        assert!(approx_eq(sphere.intersect(&ray).unwrap(), -1.0));

        // sphere entirely behind the origin
        let ray = Ray::new(Point3::ORIGIN, Vec3::Z);
        assert!(approx_eq(sphere.intersect(&ray).unwrap(), -6.0));
    }

    #[test]
    fn test_zero_direction() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ORIGIN, Vec3::ZERO);
        assert!(matches!(
            sphere.intersect(&ray),
            Err(TracerError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_non_finite_and_overflowing_rays() {
        let sphere = unit_sphere_ahead();
        let rays = [
            Ray::new(Point3::ORIGIN, Vec3::new(f32::NAN, 0.0, -1.0)),
            Ray::new(Point3::new(0.0, f32::INFINITY, 0.0), -Vec3::Z),
            // finite, but d·d overflows to infinity
            Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1e20)),
        ];
        for ray in rays {
            assert!(
                matches!(sphere.intersect(&ray), Err(TracerError::InvalidArgument(_))),
                "{:?}",
                ray
            );
        }
    }

    #[test]
    fn test_normal_is_unit_length() {
        let sphere = Sphere::new(Point3::new(1.0, -2.0, 3.0), 2.5, None).unwrap();
        let directions = [
            Vec3::X,
            -Vec3::Y,
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-0.3, 0.8, -0.2),
        ];
        for d in directions {
            let p = sphere.center() + d.normalized().unwrap() * sphere.radius();
            let n = sphere.normal_at(p).unwrap();
            assert!((n.norm() - 1.0).abs() < 1e-6, "{:?}", n);
        }
        assert!(matches!(
            sphere.normal_at(sphere.center()),
            Err(TracerError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_invalid_construction() {
        for radius in [0.0, -1.0, f32::INFINITY, f32::NAN] {
            assert!(matches!(
                Sphere::new(Point3::ORIGIN, radius, None),
                Err(TracerError::Construction(_))
            ));
        }
        assert!(Sphere::new(Point3::new(f32::NAN, 0.0, 0.0), 1.0, None).is_err());
    }

    #[test]
    fn test_non_finite_parameter() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point3::ORIGIN, -Vec3::Z);
        assert!(matches!(
            sphere.intersection_point(&ray, INFINITY),
            Err(TracerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_default_flat_color() {
        let sphere = unit_sphere_ahead();
        assert_eq!(sphere.color(), RGBColor::RED);
        assert!(sphere.surface_material().is_none());
    }
}
