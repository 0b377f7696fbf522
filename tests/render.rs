use raydraft::{
    geometry::{Sphere, World},
    vector::Vector3,
    Camera, Image, Jitter, RenderJob,
};

const WIDTH: u32 = 200;
const HEIGHT: u32 = 100;

fn two_spheres() -> World {
    let mut world = World::new();
    world.add(Sphere::new(Vector3::new(0.0, 0.0, -1.0), 0.5));
    world.add(Sphere::new(Vector3::new(0.0, -100.5, -1.0), 100.0));
    world
}

fn render(
    width: u32,
    height: u32,
    samples_per_pixel: u32,
    jitter: Jitter,
    num_workers: usize,
) -> Image {
    let camera = Camera::default();
    let world = two_spheres();
    let mut image = Image::new(width, height);

    raydraft::render(
        RenderJob {
            camera: &camera,
            world: &world,
            samples_per_pixel,
            jitter,
            num_workers,
        },
        &mut image,
    );

    image
}

fn rgb(image: &Image, x: u32, y: u32) -> [u8; 3] {
    image.pixel(x, y).unwrap().to_rgb_bytes()
}

#[test]
fn reference_scene_pixels() {
    let image = render(WIDTH, HEIGHT, 1, Jitter::None, 1);

    // straight through the viewport center onto the small sphere
    assert_eq!(rgb(&image, 100, 49), [127, 127, 255]);
    // upper corners see sky
    assert_eq!(rgb(&image, 0, 0), [166, 202, 255]);
    assert_eq!(rgb(&image, 199, 0), [166, 202, 255]);
    // bottom row is ground
    assert_eq!(rgb(&image, 0, 99), [126, 255, 128]);
    assert_eq!(rgb(&image, 100, 99), [127, 255, 128]);
    // lower half of the small sphere and its right flank
    assert_eq!(rgb(&image, 100, 60), [127, 99, 252]);
    assert_eq!(rgb(&image, 120, 45), [184, 139, 242]);
}

#[test]
fn emits_one_triplet_per_pixel() {
    let image = render(WIDTH, HEIGHT, 1, Jitter::None, 2);
    assert_eq!(image.to_rgb8().len(), (WIDTH * HEIGHT) as usize);
    assert_eq!(image.to_rgb8_bytes().len(), (WIDTH * HEIGHT * 3) as usize);
}

#[test]
fn unjittered_render_is_reproducible() {
    let first = render(WIDTH, HEIGHT, 1, Jitter::None, 1);
    let second = render(WIDTH, HEIGHT, 1, Jitter::None, 3);
    assert_eq!(first.to_rgb8_bytes(), second.to_rgb8_bytes());
}

#[test]
fn seeded_render_does_not_depend_on_worker_count() {
    let single = render(64, 32, 4, Jitter::Seeded(42), 1);
    let many = render(64, 32, 4, Jitter::Seeded(42), 5);
    assert_eq!(single.pixels, many.pixels);

    let other_seed = render(64, 32, 4, Jitter::Seeded(43), 1);
    assert_ne!(single.pixels, other_seed.pixels);
}

#[test]
fn zero_samples_render_one() {
    let zero = render(40, 20, 0, Jitter::None, 1);
    let one = render(40, 20, 1, Jitter::None, 1);
    assert_eq!(zero.pixels, one.pixels);
}

#[test]
fn antialiasing_blends_sphere_edge_with_sky() {
    let sharp = render(WIDTH, HEIGHT, 1, Jitter::None, 2);
    let smooth = render(WIDTH, HEIGHT, 64, Jitter::Seeded(7), 2);

    // away from silhouettes both agree closely
    let [r0, g0, b0] = rgb(&sharp, 100, 49);
    let [r1, g1, b1] = rgb(&smooth, 100, 49);
    assert!(r0.abs_diff(r1) <= 4 && g0.abs_diff(g1) <= 4 && b0.abs_diff(b1) <= 4);

    let differing = sharp
        .to_rgb8()
        .iter()
        .zip(smooth.to_rgb8().iter())
        .filter(|(a, b)| a != b)
        .count();
    assert!(differing > 0);
}

#[test]
fn empty_image_renders_nothing() {
    let image = render(0, 0, 1, Jitter::None, 2);
    assert!(image.pixels.is_empty());

    let image = render(0, 10, 1, Jitter::None, 2);
    assert!(image.to_rgb8().is_empty());
}
