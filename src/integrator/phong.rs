use crate::error::{Result, TracerError};
use crate::materials::{Light, Material};
use crate::math::*;

/// Mirror of `incident` about `normal`: `2 (i·n) n - i`.
///
/// `incident` points away from the surface (towards the light), so the result
/// also points away from the surface.
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    normal * (2.0 * (incident * normal)) - incident
}

fn check_direction(v: Vec3, name: &str) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(TracerError::InvalidArgument(format!(
            "{} must be finite, got {:?}",
            name, v
        )))
    }
}

pub fn calculate_ambient(material: &Material, light: &Light) -> RGBColor {
    material.ambient() * light.ambient
}

pub fn calculate_diffuse(
    material: &Material,
    light: &Light,
    normal: Vec3,
    light_dir: Vec3,
) -> RGBColor {
    let cosine = (normal * light_dir).max(0.0);
    material.diffuse() * light.diffuse * cosine
}

/// Specular highlight term. Zero whenever the light is at or behind the
/// surface horizon, regardless of the view direction.
pub fn calculate_specular(
    material: &Material,
    light: &Light,
    normal: Vec3,
    light_dir: Vec3,
    view_dir: Vec3,
) -> RGBColor {
    if normal * light_dir <= 0.0 {
        return RGBColor::ZERO;
    }
    let reflect_dir = reflect(light_dir, normal);
    let spec = (view_dir * reflect_dir).max(0.0).powf(material.shininess());
    material.specular() * light.specular * spec
}

fn unclamped_phong(
    material: &Material,
    light: &Light,
    normal: Vec3,
    light_dir: Vec3,
    view_dir: Vec3,
) -> RGBColor {
    calculate_ambient(material, light)
        + calculate_diffuse(material, light, normal, light_dir)
        + calculate_specular(material, light, normal, light_dir, view_dir)
}

/// Ambient + diffuse + specular for a single light, each channel clamped to at most 1.
pub fn calculate_phong_color(
    material: &Material,
    light: &Light,
    normal: Vec3,
    light_dir: Vec3,
    view_dir: Vec3,
) -> Result<RGBColor> {
    check_direction(normal, "normal")?;
    check_direction(light_dir, "light direction")?;
    check_direction(view_dir, "view direction")?;
    Ok(unclamped_phong(material, light, normal, light_dir, view_dir).min_each(1.0))
}

/// Shades a surface point under every light in `lights`.
///
/// Per-light contributions are summed before the single upper clamp. With no
/// material or no lights the flat color is returned untouched.
pub fn shade_hit(
    material: Option<&Material>,
    flat_color: RGBColor,
    lights: &[Light],
    point: Point3,
    normal: Vec3,
    view_dir: Vec3,
) -> Result<RGBColor> {
    let material = match material {
        Some(material) if !lights.is_empty() => material,
        _ => return Ok(flat_color),
    };
    check_direction(normal, "normal")?;
    check_direction(view_dir, "view direction")?;

    let mut sum = RGBColor::ZERO;
    for light in lights {
        let light_dir = (light.position - point).normalized()?;
        sum += unclamped_phong(material, light, normal, light_dir, view_dir);
    }
    Ok(sum.min_each(1.0))
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_color_eq(a: RGBColor, b: RGBColor) {
        assert!(
            approx_eq(a.r, b.r) && approx_eq(a.g, b.g) && approx_eq(a.b, b.b),
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_reflect_identity() {
        let n = Vec3::new(1.0, 2.0, -2.0).normalized().unwrap();
        let r = reflect(n, n);
        assert!(approx_eq(r.x, n.x) && approx_eq(r.y, n.y) && approx_eq(r.z, n.z));
    }

    #[test]
    fn test_reflect_convention() {
        // light up and to the right mirrors to up and to the left
        let l = Vec3::new(1.0, 1.0, 0.0);
        let r = reflect(l, Vec3::Y);
        assert_eq!(r, Vec3::new(-1.0, 1.0, 0.0));
    }

    #[test]
    fn test_head_on_light() {
        let material = Material::new(
            Some(RGBColor::gray(0.1)),
            Some(RGBColor::gray(0.5)),
            Some(RGBColor::gray(0.2)),
            Some(8.0),
        )
        .unwrap();
        let light = Light::new(
            Point3::new(0.0, 0.0, 10.0),
            Some(RGBColor::gray(0.5)),
            Some(RGBColor::gray(1.0)),
            Some(RGBColor::gray(1.0)),
        );
        // light, normal and viewer all aligned: cos = 1, reflection hits the eye
        let color = calculate_phong_color(&material, &light, Vec3::Z, Vec3::Z, Vec3::Z).unwrap();
        assert_color_eq(color, RGBColor::gray(0.05 + 0.5 + 0.2));

        assert_color_eq(calculate_ambient(&material, &light), RGBColor::gray(0.05));
        assert_color_eq(
            calculate_diffuse(&material, &light, Vec3::Z, Vec3::Z),
            RGBColor::gray(0.5),
        );
        assert_color_eq(
            calculate_specular(&material, &light, Vec3::Z, Vec3::Z, Vec3::Z),
            RGBColor::gray(0.2),
        );
    }

    #[test]
    fn test_per_channel() {
        let material = Material::new(
            Some(RGBColor::new(1.0, 0.0, 0.0)),
            Some(RGBColor::new(0.0, 1.0, 0.0)),
            Some(RGBColor::new(0.0, 0.0, 1.0)),
            None,
        )
        .unwrap();
        let light = Light::new(
            Point3::ORIGIN,
            Some(RGBColor::gray(0.25)),
            Some(RGBColor::gray(0.5)),
            Some(RGBColor::gray(0.75)),
        );
        let color = calculate_phong_color(&material, &light, Vec3::Z, Vec3::Z, Vec3::Z).unwrap();
        assert_color_eq(color, RGBColor::new(0.25, 0.5, 0.75));
    }

    #[test]
    fn test_clamps_to_one() {
        let bright = RGBColor::gray(2.0);
        let material = Material::new(Some(bright), Some(bright), Some(bright), None).unwrap();
        let light = Light::new(Point3::ORIGIN, Some(bright), Some(bright), Some(bright));
        let color = calculate_phong_color(&material, &light, Vec3::Z, Vec3::Z, Vec3::Z).unwrap();
        assert_eq!(color, RGBColor::WHITE);
    }

    #[test]
    fn test_light_behind_surface() {
        let bright = RGBColor::gray(3.0);
        let material = Material::new(None, Some(bright), Some(bright), Some(1.0)).unwrap();
        let light = Light::new(Point3::ORIGIN, Some(RGBColor::ZERO), Some(bright), Some(bright));
        let normal = Vec3::Z;
        // view direction chosen so the mirrored light would otherwise hit the eye
        let view_dir = Vec3::new(0.0, -0.6, -0.8);
        for light_dir in [-Vec3::Z, Vec3::X, Vec3::new(0.0, 0.6, -0.8)] {
            assert_eq!(
                calculate_diffuse(&material, &light, normal, light_dir),
                RGBColor::ZERO
            );
            assert_eq!(
                calculate_specular(&material, &light, normal, light_dir, view_dir),
                RGBColor::ZERO
            );
            assert_eq!(
                calculate_phong_color(&material, &light, normal, light_dir, view_dir).unwrap(),
                RGBColor::ZERO
            );
        }
    }

    #[test]
    fn test_specular_falls_off_with_shininess() {
        let light = Light::at(Point3::ORIGIN);
        let l = Vec3::new(1.0, 1.0, 0.0).normalized().unwrap();
        let v = Vec3::new(-0.5, 1.0, 0.0).normalized().unwrap();
        let dull = Material::new(None, None, None, Some(2.0)).unwrap();
        let sharp = Material::new(None, None, None, Some(64.0)).unwrap();
        let dull_spec = calculate_specular(&dull, &light, Vec3::Y, l, v);
        let sharp_spec = calculate_specular(&sharp, &light, Vec3::Y, l, v);
        assert!(dull_spec.r > sharp_spec.r);
        assert!(sharp_spec.r >= 0.0);
    }

    #[test]
    fn test_no_highlight_when_viewing_against_reflection() {
        let light = Light::at(Point3::ORIGIN);
        // reflect(Z, Z) = Z, so the view direction -Z is fully opposed
        for shininess in [1e-3, 1.0, 32.0] {
            let material = Material::new(None, None, None, Some(shininess)).unwrap();
            let spec = calculate_specular(&material, &light, Vec3::Z, Vec3::Z, -Vec3::Z);
            assert_eq!(spec, RGBColor::ZERO);
        }
        // 0^0 would be a full highlight, so zero shininess never gets this far
        assert!(Material::new(None, None, None, Some(0.0)).is_err());
    }

    #[test]
    fn test_non_finite_direction() {
        let material = Material::default();
        let light = Light::at(Point3::ORIGIN);
        let bad = Vec3::new(f32::NAN, 0.0, 0.0);
        assert!(matches!(
            calculate_phong_color(&material, &light, bad, Vec3::Z, Vec3::Z),
            Err(TracerError::InvalidArgument(_))
        ));
        assert!(matches!(
            calculate_phong_color(&material, &light, Vec3::Z, Vec3::Z, bad),
            Err(TracerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_shade_hit_sums_lights_then_clamps() {
        let material = Material::new(
            Some(RGBColor::gray(0.5)),
            Some(RGBColor::ZERO),
            Some(RGBColor::ZERO),
            None,
        )
        .unwrap();
        let light = Light::new(Point3::new(0.0, 0.0, 5.0), Some(RGBColor::gray(0.4)), None, None);
        let point = Point3::ORIGIN;

        let one = shade_hit(Some(&material), RGBColor::RED, &[light], point, Vec3::Z, Vec3::Z)
            .unwrap();
        assert_color_eq(one, RGBColor::gray(0.2));

        let two = shade_hit(
            Some(&material),
            RGBColor::RED,
            &[light, light],
            point,
            Vec3::Z,
            Vec3::Z,
        )
        .unwrap();
        assert_color_eq(two, RGBColor::gray(0.4));

        let many = vec![light; 10];
        let clamped =
            shade_hit(Some(&material), RGBColor::RED, &many, point, Vec3::Z, Vec3::Z).unwrap();
        assert_eq!(clamped, RGBColor::WHITE);
    }

    #[test]
    fn test_shade_hit_flat_color_fallback() {
        let light = Light::at(Point3::new(0.0, 0.0, 5.0));
        let flat = RGBColor::new(0.3, 0.6, 0.9);
        let no_material =
            shade_hit(None, flat, &[light], Point3::ORIGIN, Vec3::Z, Vec3::Z).unwrap();
        assert_eq!(no_material, flat);

        let material = Material::default();
        let no_lights =
            shade_hit(Some(&material), flat, &[], Point3::ORIGIN, Vec3::Z, Vec3::Z).unwrap();
        assert_eq!(no_lights, flat);
    }

    #[test]
    fn test_shade_hit_light_at_point() {
        let material = Material::default();
        let light = Light::at(Point3::ORIGIN);
        assert!(matches!(
            shade_hit(Some(&material), RGBColor::RED, &[light], Point3::ORIGIN, Vec3::Z, Vec3::Z),
            Err(TracerError::DivisionByZero(_))
        ));
    }
}
