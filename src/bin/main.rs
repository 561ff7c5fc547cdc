extern crate phong_tracer as root;

use root::camera::ProjectiveCamera;
use root::math::{Point3, Vec3};
use root::parsing::config::{CameraSettings, Config};
use root::parsing::{construct_world, get_settings};
use root::renderer::{NaiveRenderer, Renderer};

use anyhow::Context;
use structopt::StructOpt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn construct_camera(settings: &CameraSettings) -> anyhow::Result<ProjectiveCamera> {
    let camera = ProjectiveCamera::new(
        Point3::from(settings.look_from),
        Point3::from(settings.look_at),
        Vec3::from(settings.v_up.unwrap_or([0.0, 1.0, 0.0])),
        settings.vfov,
    )?;
    Ok(camera)
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let mut config = get_settings(&opts.config_file)?;

    // override scene file based on provided command line argument
    config.default_scene_file = opts.scene_file.unwrap_or(config.default_scene_file);
    let config = Config::try_from(config)?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads as usize)
        .build_global()
        .context("failed to build the global thread pool")?;
    info!("rendering with {} threads", config.threads);

    let world = construct_world(&config.scene_file).context("fatal error parsing world")?;
    let camera = construct_camera(&config.camera).context("invalid camera settings")?;

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }
    NaiveRenderer::new().render(world, camera, &config)
}

fn main() {
    let opts = Opt::from_args();

    // RUST_LOG takes precedence over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(opts.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(opts) {
        error!("{:?}", e);
        std::process::exit(1);
    }
}
