use crate::parsing::{Point3Data, Vec3Data};

use anyhow::bail;
use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct CameraSettings {
    pub look_from: Point3Data,
    pub look_at: Point3Data,
    pub v_up: Option<Vec3Data>, // defaults to +Y
    pub vfov: f32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub default_scene_file: String,
    pub output_file: Option<String>, // defaults to output/beauty.png
    pub resolution: Resolution,
    pub threads: Option<u16>, // defaults to the number of cpus
    pub camera: CameraSettings,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub scene_file: String,
    pub output_file: String,
    pub resolution: Resolution,
    pub threads: u16,
    pub camera: CameraSettings,
}

impl TryFrom<TOMLConfig> for Config {
    type Error = anyhow::Error;
    fn try_from(data: TOMLConfig) -> anyhow::Result<Self> {
        let Resolution { width, height } = data.resolution;
        if width == 0 || height == 0 {
            bail!("resolution must be nonzero, got {}x{}", width, height);
        }
        Ok(Config {
            scene_file: data.default_scene_file,
            output_file: data
                .output_file
                .unwrap_or_else(|| String::from("output/beauty.png")),
            resolution: data.resolution,
            threads: data.threads.unwrap_or(num_cpus::get() as u16).max(1),
            camera: data.camera,
        })
    }
}
