use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::{ensure, Result};
use argh::FromArgs;
use raydraft::{Image, Jitter, RenderJob};
use scene::Scene;

mod output;
mod scene;

/// A tiny CPU ray tracer shading surface normals against a sky gradient
#[derive(FromArgs)]
struct Options {
    /// path to the scene file, the built-in two sphere scene is used without one
    #[argh(positional)]
    scene: Option<PathBuf>,

    /// width of the output image
    #[argh(option, default = "200")]
    width: u32,

    /// height of the output image
    #[argh(option, default = "100")]
    height: u32,

    /// number of rays that make up a single pixel
    #[argh(option, short = 'r', default = "100")]
    rays_per_pixel: u32,

    /// path to which the output should be written (.ppm, .png or .qoi)
    #[argh(option, short = 'o', default = "PathBuf::from(\"out.ppm\")")]
    output: PathBuf,

    /// the seed, derived from the clock when left out
    #[argh(option)]
    seed: Option<u64>,

    /// send every ray through the corner of its pixel instead of jittering
    #[argh(switch)]
    no_jitter: bool,

    /// number of worker threads, defaults to the number of cpus
    #[argh(option)]
    workers: Option<usize>,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options: Options = argh::from_env();
    ensure!(
        options.width > 0 && options.height > 0,
        "image dimensions must be positive, got {}x{}",
        options.width,
        options.height
    );

    let scene = match &options.scene {
        Some(path) => {
            log::info!("loading scene {}", path.display());
            Scene::from_file(path)?
        }
        None => {
            log::info!("no scene file given, using the two sphere scene");
            Scene::two_spheres()
        }
    };
    let camera = scene.construct_camera(options.width as f32 / options.height as f32);
    let world = scene.construct_world();

    let jitter = if options.no_jitter {
        if options.seed.is_some() {
            log::warn!("--seed has no effect together with --no-jitter");
        }
        Jitter::None
    } else {
        let seed = options.seed.unwrap_or_else(clock_seed);
        log::info!("jitter seed {seed}");
        Jitter::Seeded(seed)
    };

    let mut image = Image::new(options.width, options.height);
    raydraft::render(
        RenderJob {
            camera: &camera,
            world: &world,
            samples_per_pixel: options.rays_per_pixel,
            jitter,
            num_workers: options.workers.unwrap_or_else(num_cpus::get),
        },
        &mut image,
    );

    output::save(&image, &options.output)
}
