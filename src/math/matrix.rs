use std::ops;

use super::{approx_eq::ApproxEq, tuple::Tuple};
use crate::error::{Error, Result};

/// Largest supported side length, also the row stride of the backing array.
pub const MAX_DIM: usize = 4;

/// Row-major matrix of up to 4x4 elements.
///
/// Storage is a fixed `[f64; 16]` so the type stays `Copy`, smaller matrices
/// only use the top-left `height x width` corner. Every "setter" returns a new
/// matrix. Transforms are always 4x4, the smaller sizes only show up as the
/// transient submatrices of the cofactor expansion.
#[derive(Debug, Clone, Copy)]
pub struct Matrix {
    data: [f64; MAX_DIM * MAX_DIM],
    height: usize,
    width: usize,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    /// 4x4 matrix from row-major data.
    pub fn new(data: [f64; 16]) -> Self {
        Self {
            data,
            height: MAX_DIM,
            width: MAX_DIM,
        }
    }

    fn check_dimensions(height: usize, width: usize) -> Result<()> {
        for dim in [height, width] {
            if dim == 0 || dim > MAX_DIM {
                return Err(Error::DimensionMismatch {
                    expected: MAX_DIM,
                    found: dim,
                });
            }
        }
        Ok(())
    }

    pub fn zeros(height: usize, width: usize) -> Result<Self> {
        Self::check_dimensions(height, width)?;
        Ok(Self {
            data: [0.; MAX_DIM * MAX_DIM],
            height,
            width,
        })
    }

    pub fn from_rows<const H: usize, const W: usize>(rows: [[f64; W]; H]) -> Result<Self> {
        let mut res = Self::zeros(H, W)?;
        for (row, values) in rows.iter().enumerate() {
            for (col, val) in values.iter().enumerate() {
                res[(row, col)] = *val;
            }
        }
        Ok(res)
    }

    #[rustfmt::skip]
    pub fn identity() -> Self {
        Self::new([
            1., 0., 0., 0.,
            0., 1., 0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn is_square(&self) -> bool {
        self.height == self.width
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::IndexOutOfBounds { row, col });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(row, col)?;
        Ok(self[(row, col)])
    }

    /// Copy of the matrix with one element replaced.
    pub fn with(&self, row: usize, col: usize, value: f64) -> Result<Self> {
        self.check_index(row, col)?;
        let mut res = *self;
        res[(row, col)] = value;
        Ok(res)
    }

    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.width != rhs.height {
            return Err(Error::DimensionMismatch {
                expected: self.width,
                found: rhs.height,
            });
        }
        let mut res = Self::zeros(self.height, rhs.width)?;
        for row in 0..self.height {
            for col in 0..rhs.width {
                res[(row, col)] = (0..self.width)
                    .map(|i| self[(row, i)] * rhs[(i, col)])
                    .sum();
            }
        }
        Ok(res)
    }

    pub fn checked_mul_tuple(&self, rhs: Tuple) -> Result<Tuple> {
        if self.width != MAX_DIM {
            return Err(Error::DimensionMismatch {
                expected: self.width,
                found: MAX_DIM,
            });
        }
        if self.height != MAX_DIM {
            return Err(Error::DimensionMismatch {
                expected: MAX_DIM,
                found: self.height,
            });
        }
        let t = rhs.as_array();
        let row = |r: usize| (0..MAX_DIM).map(|i| self[(r, i)] * t[i]).sum::<f64>();
        Ok(Tuple::new(row(0), row(1), row(2), row(3)))
    }

    /// Multiplies by the 4x4 identity. Only useful as a sanity check of `checked_mul`.
    pub fn mul_by_identity(&self) -> Result<Matrix> {
        self.checked_mul(&Self::identity())
    }

    pub fn transpose(&self) -> Self {
        let mut res = Self {
            data: [0.; MAX_DIM * MAX_DIM],
            height: self.width,
            width: self.height,
        };
        for row in 0..self.height {
            for col in 0..self.width {
                res[(col, row)] = self[(row, col)];
            }
        }
        res
    }

    pub fn submatrix(&self, row: usize, col: usize) -> Result<Self> {
        if self.height < 2 || self.width < 2 {
            return Err(Error::DimensionMismatch {
                expected: 2,
                found: self.height.min(self.width),
            });
        }
        self.check_index(row, col)?;

        let mut res = Self::zeros(self.height - 1, self.width - 1)?;
        let rows = (0..self.height).filter(|r| *r != row);
        for (res_row, src_row) in rows.enumerate() {
            let cols = (0..self.width).filter(|c| *c != col);
            for (res_col, src_col) in cols.enumerate() {
                res[(res_row, res_col)] = self[(src_row, src_col)];
            }
        }
        Ok(res)
    }

    pub fn minor(&self, row: usize, col: usize) -> Result<f64> {
        self.submatrix(row, col)?.determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 0 { minor } else { -minor })
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(Error::DimensionMismatch {
                expected: self.height,
                found: self.width,
            });
        }
        match self.height {
            1 => Ok(self[(0, 0)]),
            2 => Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]),
            n => (0..n).try_fold(0., |acc, col| {
                Ok::<f64, Error>(acc + self[(0, col)] * self.cofactor(0, col)?)
            }),
        }
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant().is_ok_and(|det| !det.approx_eq(&0.))
    }

    /// Adjugate inverse: each cofactor divided by the determinant, written to the
    /// transposed position.
    pub fn inverse(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        if det.approx_eq(&0.) {
            return Err(Error::NotInvertible);
        }

        let n = self.height;
        let mut res = Self::zeros(n, n)?;
        if n == 1 {
            res[(0, 0)] = 1. / det;
            return Ok(res);
        }
        for row in 0..n {
            for col in 0..n {
                res[(col, row)] = self.cofactor(row, col)? / det;
            }
        }
        Ok(res)
    }
}

impl ApproxEq for Matrix {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.height == other.height
            && self.width == other.width
            && (0..self.height).all(|row| {
                (0..self.width)
                    .all(|col| self[(row, col)].approx_eq_epsilon(&other[(row, col)], epsilon))
            })
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.height);
        debug_assert!(col < self.width);
        &self.data[row * MAX_DIM + col]
    }
}

impl ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.height);
        debug_assert!(col < self.width);
        &mut self.data[row * MAX_DIM + col]
    }
}
