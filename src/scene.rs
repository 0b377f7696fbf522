use std::{fs, path::Path};

use anyhow::{ensure, Context, Result};
use raydraft::{
    geometry::{Sphere, World},
    vector::Vector3,
    Camera,
};
use serde::Deserialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
struct Point(f32, f32, f32);

impl Point {
    fn is_finite(self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite()
    }
}

impl From<Point> for Vector3 {
    fn from(point: Point) -> Self {
        Self::new(point.0, point.1, point.2)
    }
}

fn default_up_vector() -> Point {
    Point(0.0, 1.0, 0.0)
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
enum CameraDesc {
    Viewport {
        origin: Point,
        lower_left_corner: Point,
        horizontal: Point,
        vertical: Point,
    },
    LookAt {
        position: Point,
        #[serde(default)]
        lookat: Point,
        #[serde(default = "default_up_vector")]
        up: Point,
        vfov: f32,
    },
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self::Viewport {
            origin: Point(0.0, 0.0, 0.0),
            lower_left_corner: Point(-2.0, -1.0, -1.0),
            horizontal: Point(4.0, 0.0, 0.0),
            vertical: Point(0.0, 2.0, 0.0),
        }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
enum ObjectDesc {
    Sphere { center: Point, radius: f32 },
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct Scene {
    #[serde(default)]
    camera: CameraDesc,
    objects: Vec<ObjectDesc>,
}

impl Scene {
    /// A small sphere resting on a huge one, seen through the reference camera.
    pub fn two_spheres() -> Self {
        Self {
            camera: CameraDesc::default(),
            objects: vec![
                ObjectDesc::Sphere {
                    center: Point(0.0, 0.0, -1.0),
                    radius: 0.5,
                },
                ObjectDesc::Sphere {
                    center: Point(0.0, -100.5, -1.0),
                    radius: 100.0,
                },
            ],
        }
    }

    pub fn from_file(file: &Path) -> Result<Self> {
        let source = fs::read_to_string(file)
            .with_context(|| format!("failed to read scene file {}", file.display()))?;
        Self::parse(&source).with_context(|| format!("invalid scene file {}", file.display()))
    }

    pub fn parse(source: &str) -> Result<Self> {
        let scene: Self = ron::from_str(source)?;
        scene.validate()?;
        Ok(scene)
    }

    fn validate(&self) -> Result<()> {
        for (index, object) in self.objects.iter().enumerate() {
            match object {
                ObjectDesc::Sphere { center, radius } => {
                    ensure!(
                        center.is_finite(),
                        "degenerate geometry: object {index} has a non-finite center"
                    );
                    ensure!(
                        radius.is_finite() && *radius > 0.0,
                        "degenerate geometry: object {index} has radius {radius}, expected a positive finite value"
                    );
                }
            }
        }

        Ok(())
    }

    pub fn construct_camera(&self, aspect_ratio: f32) -> Camera {
        match self.camera {
            CameraDesc::Viewport {
                origin,
                lower_left_corner,
                horizontal,
                vertical,
            } => Camera::new(
                origin.into(),
                lower_left_corner.into(),
                horizontal.into(),
                vertical.into(),
            ),
            CameraDesc::LookAt {
                position,
                lookat,
                up,
                vfov,
            } => Camera::look_at(position.into(), lookat.into(), up.into(), vfov, aspect_ratio),
        }
    }

    pub fn construct_world(&self) -> World {
        let mut world = World::new();

        for object_desc in &self.objects {
            match *object_desc {
                ObjectDesc::Sphere { center, radius } => {
                    world.add(Sphere::new(center.into(), radius));
                }
            }
        }

        world
    }
}
