use std::ops::Range;

use crate::{ray::Ray, vector::Vector3};

use super::{in_open_range, HitRecord, Hittable};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vector3,
    radius: f32,
}

impl Sphere {
    /// The radius is expected to be positive; it is not checked here.
    pub fn new(center: Vector3, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "radius must be greater than 0");
        Self { center, radius }
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    fn record(&self, ray: Ray, t: f32) -> HitRecord {
        let point = ray.point_at_parameter(t);
        HitRecord {
            t,
            point,
            normal: (point - self.center) / self.radius,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: Ray, t_range: Range<f32>) -> Option<HitRecord> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // the nearer root wins whenever it is inside the range
        let near = (-b - sqrtd) / (2.0 * a);
        if in_open_range(near, &t_range) {
            return Some(self.record(ray, near));
        }

        let far = (-b + sqrtd) / (2.0 * a);
        if in_open_range(far, &t_range) {
            return Some(self.record(ray, far));
        }

        None
    }
}
