use crate::error::Result;
use crate::materials::{Light, Material};
use crate::parsing::{ColorData, Point3Data};

use serde::Deserialize;

use tracing::debug;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct MaterialData {
    pub ambient: Option<ColorData>,
    pub diffuse: Option<ColorData>,
    pub specular: Option<ColorData>,
    pub shininess: Option<f32>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LightData {
    pub position: Point3Data,
    pub ambient: Option<ColorData>,
    pub diffuse: Option<ColorData>,
    pub specular: Option<ColorData>,
}

pub fn parse_material(name: &str, data: MaterialData) -> Result<Material> {
    debug!("parsing material {}", name);
    Material::new(
        data.ambient.map(Into::into),
        data.diffuse.map(Into::into),
        data.specular.map(Into::into),
        data.shininess,
    )
}

pub fn parse_light(data: LightData) -> Light {
    debug!("parsing light at {:?}", data.position);
    Light::new(
        data.position.into(),
        data.ambient.map(Into::into),
        data.diffuse.map(Into::into),
        data.specular.map(Into::into),
    )
}
