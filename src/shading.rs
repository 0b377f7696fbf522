use crate::{
    color::Color,
    geometry::{HitRecord, Hittable},
    ray::Ray,
    vector::Vector3,
};

/// Colors a ray by the normal of the closest surface it hits, or by the sky
/// gradient if it hits nothing.
pub fn ray_color(ray: Ray, world: &dyn Hittable) -> Color {
    match world.hit(ray, 0.0..f32::INFINITY) {
        Some(hit) => normal_color(&hit),
        None => sky_color(ray),
    }
}

/// Maps each normal component from `[-1, 1]` to `[0, 1]`.
fn normal_color(hit: &HitRecord) -> Color {
    Color::from(0.5 * (hit.normal + Vector3::ONE))
}

fn sky_color(ray: Ray) -> Color {
    let unit_direction = ray.direction().unit_vector();
    let t = 0.5 * (unit_direction.y() + 1.0);
    Color::WHITE.lerp(Color::SKY_BLUE, t)
}

#[cfg(test)]
mod tests {
    use super::ray_color;
    use crate::{
        color::Color,
        geometry::{Sphere, World},
        ray::Ray,
        vector::Vector3,
    };

    #[test]
    fn hit_is_shaded_by_normal() {
        let mut world = World::new();
        world.add(Sphere::new(Vector3::new(0.0, 0.0, -1.0), 0.5));

        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(ray_color(ray, &world), Color::from_rgb(0.5, 0.5, 1.0));
    }

    #[test]
    fn sky_gradient() {
        let world = World::new();

        let up = Ray::new(Vector3::ZERO, Vector3::new(0.0, 3.0, 0.0));
        assert_eq!(ray_color(up, &world), Color::SKY_BLUE);

        let down = Ray::new(Vector3::ZERO, Vector3::new(0.0, -4.0, 0.0));
        assert_eq!(ray_color(down, &world), Color::WHITE);

        let level = ray_color(Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, -7.0)), &world);
        assert!((level.r - 0.75).abs() < 1e-6);
        assert!((level.g - 0.85).abs() < 1e-6);
        assert_eq!(level.b, 1.0);
    }

    #[test]
    fn channels_stay_in_display_range() {
        let mut world = World::new();
        world.add(Sphere::new(Vector3::new(0.0, 0.0, -1.0), 0.5));
        world.add(Sphere::new(Vector3::new(0.0, -100.5, -1.0), 100.0));

        for i in 0..=20 {
            for j in 0..=20 {
                let dir = Vector3::new(-2.0 + i as f32 * 0.2, -1.0 + j as f32 * 0.1, -1.0);
                let color = ray_color(Ray::new(Vector3::ZERO, dir), &world);
                for channel in [color.r, color.g, color.b] {
                    assert!((-1e-4..=1.0 + 1e-4).contains(&channel), "{color:?}");
                }
            }
        }
    }
}
