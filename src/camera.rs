use crate::{ray::Ray, vector::Vector3};

/// A pinhole camera looking through a rectangular viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vector3,
    lower_left_corner: Vector3,
    horizontal: Vector3,
    vertical: Vector3,
}

impl Camera {
    pub fn new(
        origin: Vector3,
        lower_left_corner: Vector3,
        horizontal: Vector3,
        vertical: Vector3,
    ) -> Self {
        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Places the camera at `lookfrom`, facing `lookat`, with a vertical field
    /// of view of `vfov` degrees. The viewport sits at distance 1.
    pub fn look_at(
        lookfrom: Vector3,
        mut lookat: Vector3,
        mut vup: Vector3,
        vfov: f32,
        aspect_ratio: f32,
    ) -> Self {
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();

        let vp_height = 2.0 * h;
        let vp_width = aspect_ratio * vp_height;

        if (lookat - lookfrom).is_almost_zero() {
            lookat = lookfrom + Vector3::new(0.0, 0.0, -1.0);
        }
        if vup.is_almost_zero() {
            vup = Vector3::new(0.0, 1.0, 0.0);
        }

        let w = (lookfrom - lookat).unit_vector();
        let u = vup.cross(w).unit_vector();
        let v = w.cross(u);

        let horizontal = vp_width * u;
        let vertical = vp_height * v;

        Self {
            origin: lookfrom,
            horizontal,
            vertical,
            lower_left_corner: lookfrom - horizontal / 2.0 - vertical / 2.0 - w,
        }
    }

    /// `(0, 0)` is the lower left corner of the viewport, `(1, 1)` the upper
    /// right one. The returned direction is not normalized.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Vector3::ZERO,
            Vector3::new(-2.0, -1.0, -1.0),
            Vector3::new(4.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
        )
    }
}
