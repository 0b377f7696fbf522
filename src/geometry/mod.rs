use std::ops::Range;

pub use sphere::Sphere;
pub use world::World;

use crate::{ray::Ray, vector::Vector3};

mod sphere;
mod world;

/// Anything a ray can be tested against.
pub trait Hittable: Send + Sync {
    /// Returns the nearest intersection whose parameter lies strictly between
    /// `t_range.start` and `t_range.end`.
    fn hit(&self, ray: Ray, t_range: Range<f32>) -> Option<HitRecord>;
}

impl Hittable for Box<dyn Hittable> {
    fn hit(&self, ray: Ray, t_range: Range<f32>) -> Option<HitRecord> {
        self.as_ref().hit(ray, t_range)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    pub t: f32,
    pub point: Vector3,
    /// Outward facing, unit length.
    pub normal: Vector3,
}

fn in_open_range(t: f32, t_range: &Range<f32>) -> bool {
    t_range.start < t && t < t_range.end
}
