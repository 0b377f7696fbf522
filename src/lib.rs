pub use self::{
    camera::Camera,
    color::Color,
    image::Image,
    render::{render, Jitter, RenderJob},
    shading::ray_color,
};

mod camera;
mod color;
mod image;
mod philox;
mod render;
mod shading;

pub mod geometry;
pub mod ray;
pub mod vector;
