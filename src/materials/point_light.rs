use crate::math::{Point3, RGBColor};

/// Point emitter with separate ambient, diffuse and specular emission.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Point3,
    pub ambient: RGBColor,
    pub diffuse: RGBColor,
    pub specular: RGBColor,
}

impl Light {
    pub const DEFAULT_AMBIENT: RGBColor = RGBColor::gray(0.2);
    pub const DEFAULT_DIFFUSE: RGBColor = RGBColor::gray(0.8);
    pub const DEFAULT_SPECULAR: RGBColor = RGBColor::WHITE;

    pub fn new(
        position: Point3,
        ambient: Option<RGBColor>,
        diffuse: Option<RGBColor>,
        specular: Option<RGBColor>,
    ) -> Light {
        Light {
            position,
            ambient: ambient.unwrap_or(Self::DEFAULT_AMBIENT),
            diffuse: diffuse.unwrap_or(Self::DEFAULT_DIFFUSE),
            specular: specular.unwrap_or(Self::DEFAULT_SPECULAR),
        }
    }

    /// White light with default emission at `position`.
    pub fn at(position: Point3) -> Light {
        Light::new(position, None, None, None)
    }
}
