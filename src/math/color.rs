use std::ops;

use super::approx_eq::ApproxEq;

/// Linear rgb triple. Channels are left unclamped until the canvas serializes them.
#[derive(Copy, Clone, Debug, Default)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
    pub const fn black() -> Self {
        Self::new(0., 0., 0.)
    }
    pub const fn white() -> Self {
        Self::new(1., 1., 1.)
    }

    /// Channels mapped to 0..=255, rounded before clamping.
    pub fn as_scaled_values(&self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|v| (v * 255.).round().clamp(0., 255.) as u8)
    }
}

impl ApproxEq for Color {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.r.approx_eq_epsilon(&other.r, epsilon)
            && self.g.approx_eq_epsilon(&other.g, epsilon)
            && self.b.approx_eq_epsilon(&other.b, epsilon)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

macro_rules! channelwise_op {
    ($trait:ident, $fn:ident, $op:tt) => {
        impl ops::$trait for Color {
            type Output = Self;

            fn $fn(self, rhs: Self) -> Self::Output {
                Color::new(self.r $op rhs.r, self.g $op rhs.g, self.b $op rhs.b)
            }
        }
    };
    ($trait:ident<f64>, $fn:ident, $op:tt) => {
        impl ops::$trait<f64> for Color {
            type Output = Self;

            fn $fn(self, rhs: f64) -> Self::Output {
                Color::new(self.r $op rhs, self.g $op rhs, self.b $op rhs)
            }
        }
    };
}

channelwise_op!(Add, add, +);
channelwise_op!(Sub, sub, -);
// Hadamard product, tints a surface color by the light intensity.
channelwise_op!(Mul, mul, *);
channelwise_op!(Mul<f64>, mul, *);
channelwise_op!(Div<f64>, div, /);
