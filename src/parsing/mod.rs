pub mod config;
pub mod material;
pub mod primitives;

use config::TOMLConfig;
use material::*;
use primitives::*;

use crate::math::RGBColor;
use crate::world::World;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::info;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub type Vec3Data = [f32; 3];
pub type Point3Data = [f32; 3];
pub type ColorData = [f32; 3];

#[derive(Deserialize, Clone, Debug, Default)]
pub struct SceneData {
    pub background: Option<ColorData>, // defaults to black
    #[serde(default)]
    pub materials: HashMap<String, MaterialData>,
    #[serde(default)]
    pub lights: Vec<LightData>,
    #[serde(default)]
    pub spheres: Vec<SphereData>,
}

fn load_arbitrary<T>(filepath: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    info!("loading file at {}", filepath.display());
    let input = fs::read_to_string(filepath)
        .with_context(|| format!("failed to read {}", filepath.display()))?;
    info!("done: {} bytes", input.len());
    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {}", filepath.display()))?;
    Ok(data)
}

pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<TOMLConfig> {
    load_arbitrary(filepath.as_ref())
}

pub fn load_scene(filepath: impl AsRef<Path>) -> anyhow::Result<SceneData> {
    load_arbitrary(filepath.as_ref())
}

pub fn parse_scene(scene: SceneData) -> anyhow::Result<World> {
    let mut materials = HashMap::new();
    for (name, data) in scene.materials {
        let material =
            parse_material(&name, data).with_context(|| format!("in material {:?}", name))?;
        materials.insert(name, material);
    }

    let lights = scene.lights.into_iter().map(parse_light).collect();

    let spheres = scene
        .spheres
        .into_iter()
        .enumerate()
        .map(|(index, data)| {
            parse_sphere(data, &materials).with_context(|| format!("in sphere #{}", index))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let background = scene.background.map(RGBColor::from).unwrap_or(RGBColor::BLACK);
    Ok(World::new(spheres, lights, background))
}

pub fn construct_world(filepath: impl AsRef<Path>) -> anyhow::Result<World> {
    let scene = load_scene(filepath)?;
    parse_scene(scene)
}
