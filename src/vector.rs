use std::ops::{Add, Div, Index, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3(pub [f32; 3]);

impl Vector3 {
    pub const ZERO: Self = Self([0.0; 3]);
    pub const ONE: Self = Self([1.0; 3]);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    pub fn x(self) -> f32 {
        self.0[0]
    }

    pub fn y(self) -> f32 {
        self.0[1]
    }

    pub fn z(self) -> f32 {
        self.0[2]
    }

    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scales the vector to unit length.
    ///
    /// The result of normalizing a zero-length vector is not finite, callers
    /// have to rule that out themselves.
    pub fn unit_vector(self) -> Self {
        self / self.length()
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    pub fn cross(self, other: Self) -> Self {
        let x = self.y() * other.z() - self.z() * other.y();
        let y = self.z() * other.x() - self.x() * other.z();
        let z = self.x() * other.y() - self.y() * other.x();

        Self::new(x, y, z)
    }

    pub fn is_almost_zero(self) -> bool {
        let epsilon = 1e-8;
        self.0.iter().all(|c| c.abs() < epsilon)
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self(self.0.map(f))
    }

    fn zip_map(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let [x0, y0, z0] = self.0;
        let [x1, y1, z1] = other.0;
        Self([f(x0, x1), f(y0, y1), f(z0, z1)])
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(components: [f32; 3]) -> Self {
        Self(components)
    }
}

impl Add<Vector3> for Vector3 {
    type Output = Self;

    fn add(self, rhs: Vector3) -> Self::Output {
        self.zip_map(rhs, f32::add)
    }
}

impl Sub<Vector3> for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Vector3) -> Self::Output {
        self.zip_map(rhs, f32::sub)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|a| a * rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = <Vector3 as Mul<Self>>::Output;

    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vector3> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: Vector3) -> Self::Output {
        self.zip_map(rhs, f32::mul)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        self.map(|a| a / rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(f32::neg)
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
