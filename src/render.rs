use std::{
    panic,
    sync::atomic::{AtomicU32, Ordering},
    thread,
    time::Instant,
};

use crate::{
    camera::Camera, color::Color, geometry::Hittable, image::Image, philox::Philox4x32_10,
    shading::ray_color,
};

/// Where the sub-pixel offset of each sample comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jitter {
    /// Every sample goes through the lower left corner of its pixel.
    None,
    /// Offsets uniform in `[0, 1)²`, fully determined by the seed, the pixel
    /// and the sample number.
    Seeded(u64),
}

struct WorkerState {
    philox: Option<Philox4x32_10>,
}

impl WorkerState {
    fn new(jitter: Jitter) -> Self {
        let philox = match jitter {
            Jitter::None => None,
            Jitter::Seeded(seed) => Some(Philox4x32_10::from_seed(seed)),
        };
        Self { philox }
    }

    fn pixel_offset(&self, pixel_number: u32, sample_number: u32) -> (f32, f32) {
        match self.philox {
            Some(philox) => {
                let [x_off, y_off, ..] = philox.gen_f32s([pixel_number, sample_number, 0, 0]);
                (x_off, y_off)
            }
            None => (0.0, 0.0),
        }
    }
}

pub struct RenderJob<'a> {
    pub camera: &'a Camera,
    pub world: &'a dyn Hittable,
    pub samples_per_pixel: u32,
    pub jitter: Jitter,
    pub num_workers: usize,
}

/// Fills every pixel of `image`.
///
/// Workers claim whole rows, the result does not depend on how many there are.
pub fn render(job: RenderJob<'_>, image: &mut Image) {
    let start_time = Instant::now();

    let image_width = image.width();
    let image_height = image.height();
    let num_samples = job.samples_per_pixel.max(1);
    let num_workers = job.num_workers.max(1);

    if image.pixels.is_empty() {
        log::warn!("nothing to render for a {image_width}x{image_height} image");
        return;
    }

    log::info!(
        "rendering {image_width}x{image_height} with {num_samples} samples per pixel on {num_workers} workers"
    );

    let next_row = AtomicU32::new(0);

    let rows: Vec<(u32, Vec<Color>)> = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(num_workers);
        for _ in 0..num_workers {
            handles.push(scope.spawn(|| {
                compute_rows(
                    image_width,
                    image_height,
                    num_samples,
                    job.camera,
                    job.world,
                    job.jitter,
                    &next_row,
                )
            }));
        }

        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| panic::resume_unwind(payload))
            })
            .collect()
    });

    let mut output: Vec<&mut [Color]> = image.rows_mut().collect();
    for (row, colors) in rows {
        output[row as usize].copy_from_slice(&colors);
    }

    log::info!("done in {:.3?}", start_time.elapsed());
}

fn compute_rows(
    image_width: u32,
    image_height: u32,
    num_samples: u32,
    camera: &Camera,
    world: &dyn Hittable,
    jitter: Jitter,
    next_row: &AtomicU32,
) -> Vec<(u32, Vec<Color>)> {
    let state = WorkerState::new(jitter);
    let mut rows = Vec::new();

    loop {
        let row = next_row.fetch_add(1, Ordering::Relaxed);
        if row >= image_height {
            break;
        }

        let progress = row as f32 / image_height as f32 * 100.0;
        log::debug!("row {row}/{image_height} ({progress:.0}%)");

        // output rows run top to bottom, viewport v runs bottom to top
        let y = image_height - 1 - row;

        let colors = (0..image_width)
            .map(|x| {
                let pixel_number = row * image_width + x;

                let sum: Color = (0..num_samples)
                    .map(|sample_number| {
                        let (x_off, y_off) = state.pixel_offset(pixel_number, sample_number);

                        let u = (x as f32 + x_off) / image_width as f32;
                        let v = (y as f32 + y_off) / image_height as f32;
                        ray_color(camera.get_ray(u, v), world)
                    })
                    .sum();

                sum / num_samples as f32
            })
            .collect();

        rows.push((row, colors));
    }

    rows
}
