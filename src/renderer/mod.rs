mod film;
mod naive;

pub use film::Film;
pub use naive::NaiveRenderer;

use crate::camera::ProjectiveCamera;
use crate::parsing::config::Config;
use crate::world::World;

pub trait Renderer {
    fn render(&self, world: World, camera: ProjectiveCamera, config: &Config) -> anyhow::Result<()>;
}
