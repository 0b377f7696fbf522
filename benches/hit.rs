use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::Rng;
use raydraft::{
    geometry::{Hittable, Sphere, World},
    ray::Ray,
    vector::Vector3,
};

fn random_world(rng: &mut impl Rng, len: usize) -> World {
    let mut world = World::new();
    for _ in 0..len {
        let center = Vector3::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-30.0..-5.0),
        );
        world.add(Sphere::new(center, rng.gen_range(0.1..2.0)));
    }
    world
}

pub fn benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest hit");

    for len in [2, 16, 128] {
        let world = random_world(&mut rand::thread_rng(), len);

        group.bench_function(BenchmarkId::new("linear scan", len), |b| {
            b.iter_batched_ref(
                || {
                    let mut rng = rand::thread_rng();
                    let direction =
                        Vector3::new(rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5), -1.0);
                    Ray::new(Vector3::ZERO, direction)
                },
                |ray| world.hit(*ray, 0.0..f32::INFINITY),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
