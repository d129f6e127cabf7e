pub mod shape;

pub mod primitive {
    pub mod plane;
    pub mod sphere;
}

use std::ptr;

use self::shape::Shape;
use super::material::{Material, SharedMaterial};
use crate::{
    error::Result,
    math::{matrix::Matrix, transform::Transform, tuple::Tuple},
    render::{intersection::Intersection, ray::Ray},
};

/// A shape placed in the world.
///
/// The inverse of the transformation is cached and recomputed whenever the
/// transformation changes.
///
/// Objects compare by identity: two spheres with identical parameters are
/// still different objects.
#[derive(Debug)]
pub struct Object {
    shape: Shape,
    material: SharedMaterial,
    transformation: Matrix,
    transformation_inverse: Matrix,
}

impl Object {
    pub fn with_shape(shape: Shape) -> Self {
        Self {
            shape,
            material: SharedMaterial::default(),
            transformation: Matrix::identity(),
            transformation_inverse: Matrix::identity(),
        }
    }

    pub fn sphere() -> Self {
        Self::with_shape(Shape::Sphere)
    }

    pub fn plane() -> Self {
        Self::with_shape(Shape::Plane)
    }

    pub fn with_transformation(shape: Shape, transformation: Matrix) -> Result<Self> {
        let mut obj = Self::with_shape(shape);
        obj.set_transformation(transformation)?;
        Ok(obj)
    }

    pub fn sphere_with_transformation(transformation: Matrix) -> Result<Self> {
        Self::with_transformation(Shape::Sphere, transformation)
    }

    pub fn new(shape: Shape, material: Material, transformation: Matrix) -> Result<Self> {
        Self::with_shared_material(shape, SharedMaterial::new(material), transformation)
    }

    /// Object using a material that other objects may be using as well.
    pub fn with_shared_material(
        shape: Shape,
        material: SharedMaterial,
        transformation: Matrix,
    ) -> Result<Self> {
        let mut obj = Self::with_shape(shape);
        obj.set_transformation(transformation)?;
        obj.material = material;
        Ok(obj)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn transformation(&self) -> &Matrix {
        &self.transformation
    }

    pub fn transformation_inverse(&self) -> &Matrix {
        &self.transformation_inverse
    }

    /// Fails with `NotInvertible` and keeps the old transformation if `transformation` is singular.
    pub fn set_transformation(&mut self, transformation: Matrix) -> Result<()> {
        self.transformation_inverse = transformation.inverse()?;
        self.transformation = transformation;
        Ok(())
    }

    pub fn material(&self) -> &SharedMaterial {
        &self.material
    }

    /// Gives the object its own material, detached from any previous sharers.
    pub fn set_material(&mut self, material: Material) {
        self.material = SharedMaterial::new(material);
    }

    pub fn set_shared_material(&mut self, material: SharedMaterial) {
        self.material = material;
    }

    pub fn to_object_space(&self, world_point: Tuple) -> Result<Tuple> {
        self.transformation_inverse.checked_mul_tuple(world_point)
    }

    /// World space normal. The object space normal goes back through the
    /// transposed inverse, which keeps it perpendicular under non-uniform scaling.
    pub fn normal_vector_at(&self, world_point: Tuple) -> Result<Tuple> {
        let object_point = self.to_object_space(world_point)?;
        let object_normal = self.shape.local_normal_at(object_point)?;
        let world_normal = self
            .transformation_inverse
            .transpose()
            .checked_mul_tuple(object_normal)?;

        world_normal.with_w(0.).normalize()
    }

    pub fn intersect<'a>(&'a self, world_ray: &Ray) -> Result<Vec<Intersection<'a>>> {
        let object_ray = world_ray.transform_new(&self.transformation_inverse)?;
        Ok(self
            .shape
            .local_intersect(&object_ray)?
            .into_iter()
            .map(|time| Intersection::new(time, self))
            .collect())
    }

    #[cfg(test)]
    pub fn intersection_times_testing(&self, world_ray: &Ray) -> Vec<f64> {
        self.intersect(world_ray)
            .unwrap()
            .into_iter()
            .map(|i| i.time())
            .collect()
    }
}

impl Transform for Object {
    fn transform(&mut self, matrix: &Matrix) -> Result<()> {
        self.set_transformation(matrix.checked_mul(&self.transformation)?)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}
