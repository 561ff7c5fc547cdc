use crate::error::{Result, TracerError};
use crate::geometry::Sphere;
use crate::materials::Material;
use crate::parsing::{ColorData, Point3Data};

use serde::Deserialize;

use std::collections::HashMap;

#[derive(Deserialize, Clone, Debug)]
pub struct SphereData {
    pub center: Point3Data,
    pub radius: f32,
    pub color: Option<ColorData>,
    pub material: Option<String>,
}

pub fn parse_sphere(data: SphereData, materials: &HashMap<String, Material>) -> Result<Sphere> {
    let material = match data.material {
        Some(name) => match materials.get(&name) {
            Some(material) => Some(*material),
            None => {
                return Err(TracerError::Construction(format!(
                    "sphere refers to unknown material {:?}",
                    name
                )))
            }
        },
        None => None,
    };
    let color = data.color.map(Into::into).unwrap_or(Sphere::DEFAULT_COLOR);
    Sphere::with_color(data.center.into(), data.radius, color, material)
}
