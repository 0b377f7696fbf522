use std::{
    iter::Sum,
    ops::{Add, Div, Mul},
};

use crate::vector::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const SKY_BLUE: Self = Self::from_rgb(0.5, 0.7, 1.0);

    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Quantizes each channel from `[0, 1]` to `floor(255.99 * channel)`.
    ///
    /// Channels outside of `[0, 1]` saturate at `0` and `255`.
    pub fn to_rgb_bytes(self) -> [u8; 3] {
        fn quantize(channel: f32) -> u8 {
            (255.99 * channel).floor() as u8
        }

        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        fn lerp_f32(start: f32, end: f32, t: f32) -> f32 {
            (1.0 - t) * start + t * end
        }

        Color {
            r: lerp_f32(self.r, other.r, t),
            g: lerp_f32(self.g, other.g, t),
            b: lerp_f32(self.b, other.b, t),
        }
    }
}

impl From<Vector3> for Color {
    fn from(vec: Vector3) -> Self {
        Self::from_rgb(vec.x(), vec.y(), vec.z())
    }
}

impl Add<Self> for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Color::BLACK, Add::add)
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl Mul<Color> for f32 {
    type Output = <Color as Mul<Self>>::Output;

    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Color {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
        }
    }
}
