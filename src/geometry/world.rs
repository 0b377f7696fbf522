use std::ops::Range;

use crate::ray::Ray;

use super::{HitRecord, Hittable};

/// An owning list of hittables, answering with the closest hit of all of them.
#[derive(Default)]
pub struct World {
    objects: Vec<Box<dyn Hittable>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: impl Hittable + 'static) {
        self.objects.push(Box::new(object));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for World {
    fn hit(&self, ray: Ray, t_range: Range<f32>) -> Option<HitRecord> {
        let mut nearest_hit = None;
        let mut nearest_t = t_range.end;

        for object in &self.objects {
            if let Some(hit) = object.hit(ray, t_range.start..nearest_t) {
                nearest_t = hit.t;
                nearest_hit = Some(hit);
            }
        }

        nearest_hit
    }
}
