use super::{matrix::Matrix, tuple::Tuple};
use crate::error::Result;

impl Matrix {
    #[rustfmt::skip]
    pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
        Matrix::new([
            1., 0., 0., x,
            0., 1., 0., y,
            0., 0., 1., z,
            0., 0., 0., 1.,
        ])
    }

    /// A zero factor gives a singular matrix, which objects and patterns reject
    /// when it is set as their transformation.
    #[rustfmt::skip]
    pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
        Matrix::new([
            x, 0., 0., 0.,
            0., y, 0., 0.,
            0., 0., z, 0.,
            0., 0., 0., 1.,
        ])
    }

    pub fn scaling_uniform(f: f64) -> Matrix {
        Self::scaling(f, f, f)
    }

    #[rustfmt::skip]
    pub fn rotation_x(radians: f64) -> Matrix {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix::new([
            1., 0., 0., 0.,
            0., cos_r, -sin_r, 0.,
            0., sin_r, cos_r, 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_y(radians: f64) -> Matrix {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix::new([
            cos_r, 0., sin_r, 0.,
            0., 1., 0., 0.,
            -sin_r, 0., cos_r, 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_z(radians: f64) -> Matrix {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix::new([
            cos_r, -sin_r, 0., 0.,
            sin_r, cos_r, 0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn shearing(
        x_prop_y: f64,
        x_prop_z: f64,
        y_prop_x: f64,
        y_prop_z: f64,
        z_prop_x: f64,
        z_prop_y: f64,
    ) -> Matrix {
        Matrix::new([
            1., x_prop_y, x_prop_z, 0.,
            y_prop_x, 1., y_prop_z, 0.,
            z_prop_x, z_prop_y, 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    /// World-to-camera matrix for an eye at `from` looking at `to`.
    ///
    /// `up` only needs to point roughly upwards, but must not be parallel to the
    /// view direction, otherwise the basis collapses and normalizing it fails.
    pub fn view_transformation(from: Tuple, to: Tuple, up: Tuple) -> Result<Matrix> {
        let forward_v = to.checked_sub(from)?.normalize()?;
        let left_v = forward_v.cross(up.normalize()?)?;
        let true_up_v = left_v.cross(forward_v)?;

        #[rustfmt::skip]
        let orientation = Matrix::new([
            left_v.x(), left_v.y(), left_v.z(), 0.,
            true_up_v.x(), true_up_v.y(), true_up_v.z(), 0.,
            -forward_v.x(), -forward_v.y(), -forward_v.z(), 0.,
            0., 0., 0., 1.,
        ]);

        orientation.checked_mul(&Matrix::translation(-from.x(), -from.y(), -from.z()))
    }
}

/// Things living in 3d space that can be moved around by a 4x4 matrix.
///
/// Each helper left-multiplies the current transformation, so calls read in
/// the order they are applied:
/// `m.scale(2., 2., 2.)?.translate(0., 1., 0.)?` scales first, then translates.
pub trait Transform: Sized {
    fn transform(&mut self, matrix: &Matrix) -> Result<()>;

    fn transform_new(&self, matrix: &Matrix) -> Result<Self>
    where
        Self: Clone,
    {
        let mut copy = self.clone();
        copy.transform(matrix)?;
        Ok(copy)
    }

    fn transform_chain(&mut self, matrix: &Matrix) -> Result<&mut Self> {
        self.transform(matrix)?;
        Ok(self)
    }

    fn translate(&mut self, x: f64, y: f64, z: f64) -> Result<&mut Self> {
        self.transform_chain(&Matrix::translation(x, y, z))
    }

    fn scale(&mut self, x: f64, y: f64, z: f64) -> Result<&mut Self> {
        self.transform_chain(&Matrix::scaling(x, y, z))
    }

    fn scale_uniform(&mut self, factor: f64) -> Result<&mut Self> {
        self.transform_chain(&Matrix::scaling_uniform(factor))
    }

    fn rotate_x(&mut self, radians: f64) -> Result<&mut Self> {
        self.transform_chain(&Matrix::rotation_x(radians))
    }

    fn rotate_y(&mut self, radians: f64) -> Result<&mut Self> {
        self.transform_chain(&Matrix::rotation_y(radians))
    }

    fn rotate_z(&mut self, radians: f64) -> Result<&mut Self> {
        self.transform_chain(&Matrix::rotation_z(radians))
    }

    fn sheare(
        &mut self,
        x_prop_y: f64,
        x_prop_z: f64,
        y_prop_x: f64,
        y_prop_z: f64,
        z_prop_x: f64,
        z_prop_y: f64,
    ) -> Result<&mut Self> {
        self.transform_chain(&Matrix::shearing(
            x_prop_y, x_prop_z, y_prop_x, y_prop_z, z_prop_x, z_prop_y,
        ))
    }
}

impl Transform for Matrix {
    fn transform(&mut self, matrix: &Matrix) -> Result<()> {
        *self = matrix.checked_mul(self)?;
        Ok(())
    }
}
