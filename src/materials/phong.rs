use crate::error::{Result, TracerError};
use crate::math::RGBColor;

/// Phong reflectance coefficients for a surface.
///
/// Fields are read through accessors so the shininess check in
/// [`Material::new`] cannot be bypassed:
///
/// ```compile_fail
/// use phong_tracer::materials::Material;
/// let m = Material { shininess: 0.0, ..Material::default() };
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    ambient: RGBColor,
    diffuse: RGBColor,
    specular: RGBColor,
    shininess: f32,
}

impl Material {
    pub const DEFAULT_AMBIENT: RGBColor = RGBColor::gray(0.1);
    pub const DEFAULT_DIFFUSE: RGBColor = RGBColor::gray(0.5);
    pub const DEFAULT_SPECULAR: RGBColor = RGBColor::gray(0.3);
    pub const DEFAULT_SHININESS: f32 = 32.0;

    /// Builds a material, substituting the defaults for any omitted field.
    ///
    /// The shininess exponent must be finite and strictly positive.
    pub fn new(
        ambient: Option<RGBColor>,
        diffuse: Option<RGBColor>,
        specular: Option<RGBColor>,
        shininess: Option<f32>,
    ) -> Result<Material> {
        let shininess = shininess.unwrap_or(Self::DEFAULT_SHININESS);
        if !shininess.is_finite() || shininess <= 0.0 {
            return Err(TracerError::Construction(format!(
                "material shininess must be positive, got {}",
                shininess
            )));
        }
        Ok(Material {
            ambient: ambient.unwrap_or(Self::DEFAULT_AMBIENT),
            diffuse: diffuse.unwrap_or(Self::DEFAULT_DIFFUSE),
            specular: specular.unwrap_or(Self::DEFAULT_SPECULAR),
            shininess,
        })
    }

    pub fn ambient(&self) -> RGBColor {
        self.ambient
    }
    pub fn diffuse(&self) -> RGBColor {
        self.diffuse
    }
    pub fn specular(&self) -> RGBColor {
        self.specular
    }
    pub fn shininess(&self) -> f32 {
        self.shininess
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            ambient: Self::DEFAULT_AMBIENT,
            diffuse: Self::DEFAULT_DIFFUSE,
            specular: Self::DEFAULT_SPECULAR,
            shininess: Self::DEFAULT_SHININESS,
        }
    }
}
