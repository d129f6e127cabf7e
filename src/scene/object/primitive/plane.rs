use crate::{
    error::Result,
    math::{approx_eq::EPSILON, tuple::Tuple},
    render::ray::Ray,
};

/// Infinite plane `y = 0` in object space.
pub struct PlaneXZ {}

impl PlaneXZ {
    pub fn local_normal_at() -> Tuple {
        Tuple::vector(0., 1., 0.)
    }

    pub fn local_intersect(object_ray: &Ray) -> Result<Vec<f64>> {
        let parallel = object_ray.direction().y().abs() < EPSILON;
        if parallel {
            return Ok(Vec::new());
        }
        Ok(vec![-object_ray.origin().y() / object_ray.direction().y()])
    }
}
