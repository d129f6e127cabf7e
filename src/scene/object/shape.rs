use super::primitive::{plane::PlaneXZ, sphere::UnitSphere};
use crate::{error::Result, math::tuple::Tuple, render::ray::Ray};

/// Geometry of an object, always expressed in its own object space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Sphere,
    Plane,
}

impl Shape {
    pub fn local_normal_at(&self, object_point: Tuple) -> Result<Tuple> {
        match self {
            Shape::Sphere => UnitSphere::local_normal_at(object_point),
            Shape::Plane => Ok(PlaneXZ::local_normal_at()),
        }
    }

    pub fn local_intersect(&self, object_ray: &Ray) -> Result<Vec<f64>> {
        match self {
            Shape::Sphere => UnitSphere::local_intersect(object_ray),
            Shape::Plane => PlaneXZ::local_intersect(object_ray),
        }
    }
}
