use super::{Film, Renderer};

use crate::camera::ProjectiveCamera;
use crate::integrator::{Integrator, PhongIntegrator};
use crate::math::RGBColor;
use crate::parsing::config::Config;
use crate::profile::Profile;
use crate::world::World;

use rayon::prelude::*;
use tracing::{debug, info};

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }

    /// One ray through the center of every pixel. Pixels whose ray fails on
    /// degenerate geometry are filled with `fallback` and counted in the profile.
    pub fn render_film<I: Integrator>(
        integrator: &I,
        camera: &ProjectiveCamera,
        width: usize,
        height: usize,
        fallback: RGBColor,
    ) -> (Film<RGBColor>, Profile) {
        info!("starting render with film resolution {}x{}", width, height);
        let mut film: Film<RGBColor> = Film::new(width, height, RGBColor::BLACK);

        let stats: Profile = film
            .buffer
            .par_iter_mut()
            .enumerate()
            .map(|(pixel_index, pixel_ref)| {
                let mut profile = Profile::default();
                let y: usize = pixel_index / width;
                let x: usize = pixel_index - width * y;
                // film rows go top to bottom, camera t goes bottom to top
                let s = (x as f32 + 0.5) / (width as f32);
                let t = 1.0 - (y as f32 + 0.5) / (height as f32);

                let color = camera
                    .get_ray(s, t)
                    .and_then(|ray| integrator.color(ray, &mut profile));
                *pixel_ref = match color {
                    Ok(color) => color,
                    Err(e) => {
                        debug!("pixel ({}, {}) failed: {}", x, y, e);
                        profile.errors += 1;
                        fallback
                    }
                };
                profile
            })
            .reduce(Profile::default, |a, b| a.combine(b));

        (film, stats)
    }
}

impl Default for NaiveRenderer {
    fn default() -> Self {
        NaiveRenderer::new()
    }
}

impl Renderer for NaiveRenderer {
    fn render(&self, world: World, camera: ProjectiveCamera, config: &Config) -> anyhow::Result<()> {
        let (width, height) = (config.resolution.width, config.resolution.height);
        let camera = camera.with_aspect_ratio(width as f32 / height as f32);
        let background = world.background;
        let integrator = PhongIntegrator::new(Arc::new(world));

        let now = Instant::now();
        let (film, stats) =
            NaiveRenderer::render_film(&integrator, &camera, width, height, background);
        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);
        stats.pretty_print(elapsed, config.threads as usize);

        let output = Path::new(&config.output_file);
        film.write_png(output)?;
        info!("wrote {}", output.display());
        Ok(())
    }
}
