use std::ops;

use super::approx_eq::ApproxEq;
use crate::error::{Error, Result};

/// Homogeneous 4-component value.
/// `w == 1` marks a point, `w == 0` marks a vector.
#[derive(Copy, Clone, Debug, Default)]
pub struct Tuple {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Tuple {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.)
    }

    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.)
    }

    pub const fn origin() -> Self {
        Self::point(0., 0., 0.)
    }

    pub const fn zero_vector() -> Self {
        Self::vector(0., 0., 0.)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn is_point(&self) -> bool {
        self.w.approx_eq(&1.)
    }

    pub fn is_vector(&self) -> bool {
        self.w.approx_eq(&0.)
    }

    /// Same tuple with `w` replaced, used to force a transformed normal back into a vector.
    pub fn with_w(self, w: f64) -> Self {
        Self { w, ..self }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// point + point has no geometric meaning, every other combination is fine
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        if self.is_point() && rhs.is_point() {
            return Err(Error::InvalidOperand("cannot add two points together"));
        }
        Ok(Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        ))
    }

    /// point - point gives a vector, point - vector a point, vector - vector a vector
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        if self.is_vector() && rhs.is_point() {
            return Err(Error::InvalidOperand("cannot subtract a point from a vector"));
        }
        Ok(Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        ))
    }

    pub fn magnitude(&self) -> Result<f64> {
        if !self.is_vector() {
            return Err(Error::InvalidOperand("magnitude is only defined for vectors"));
        }
        Ok((self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt())
    }

    pub fn normalize(&self) -> Result<Self> {
        let len = self.magnitude()?;
        if len == 0. {
            return Err(Error::InvalidOperand("cannot normalize a zero-length vector"));
        }
        Ok(*self / len)
    }

    pub fn dot(&self, rhs: Self) -> Result<f64> {
        if !self.is_vector() || !rhs.is_vector() {
            return Err(Error::InvalidOperand("dot product is only defined for vectors"));
        }
        Ok(self.x * rhs.x + self.y * rhs.y + self.z * rhs.z)
    }

    pub fn cross(&self, rhs: Self) -> Result<Self> {
        if !self.is_vector() || !rhs.is_vector() {
            return Err(Error::InvalidOperand(
                "cross product is only defined for vectors",
            ));
        }
        Ok(Self::vector(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        ))
    }

    pub fn reflect(&self, normal: Self) -> Result<Self> {
        self.checked_sub(normal * 2. * self.dot(normal)?)
    }
}

impl ApproxEq for Tuple {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.x.approx_eq_epsilon(&other.x, epsilon)
            && self.y.approx_eq_epsilon(&other.y, epsilon)
            && self.z.approx_eq_epsilon(&other.z, epsilon)
            && self.w.approx_eq_epsilon(&other.w, epsilon)
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Neg for Tuple {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

// Scaling touches w as well, callers only scale vectors.
impl ops::Mul<f64> for Tuple {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl ops::Div<f64> for Tuple {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}
