use super::ray::Ray;
use crate::{
    error::Result,
    math::{approx_eq::EPSILON, tuple::Tuple},
    scene::object::Object,
};

/// A point where a ray crosses an object's surface, `time` units along the ray.
#[derive(Clone, Copy, Debug)]
pub struct Intersection<'a> {
    time: f64,
    object: &'a Object,
}

impl<'a> Intersection<'a> {
    pub fn new(time: f64, object: &'a Object) -> Self {
        Self { time, object }
    }

    pub fn time(&self) -> f64 {
        self.time
    }
    pub fn object(&self) -> &'a Object {
        self.object
    }

    /// Shading context for this intersection seen along `ray`.
    pub fn computations(&self, ray: &Ray) -> Result<IntersecComputations<'a>> {
        let point = ray.position(self.time)?;
        let eye_v = -ray.direction();
        let mut normal_v = self.object.normal_vector_at(point)?;

        let inside = normal_v.dot(eye_v)? < 0.;
        if inside {
            normal_v = -normal_v;
        }

        Ok(IntersecComputations {
            time: self.time,
            object: self.object,
            point,
            eye_v,
            normal_v,
            inside,
            over_point: point.checked_add(normal_v * EPSILON)?,
            reflect_v: ray.direction().reflect(normal_v)?,
        })
    }
}

impl PartialEq for Intersection<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.object == other.object
    }
}

/// Smallest strictly positive time. On equal times the earlier entry wins.
pub fn hit<'a, 'b>(intersections: &'b [Intersection<'a>]) -> Option<&'b Intersection<'a>> {
    intersections
        .iter()
        .filter(|i| i.time > 0.)
        .fold(None, |best: Option<&Intersection>, i| match best {
            Some(best) if best.time <= i.time => Some(best),
            _ => Some(i),
        })
}

/// Every intersection of a ray with a set of objects, sorted by time.
pub struct IntersectionCollection<'a> {
    ray: Ray,
    vec: Vec<Intersection<'a>>,
}

impl<'a> IntersectionCollection<'a> {
    /// Sort is stable, so intersections with equal times keep their input order.
    pub fn new(ray: Ray, mut vec: Vec<Intersection<'a>>) -> Self {
        vec.sort_by(|i1, i2| i1.time().total_cmp(&i2.time()));
        Self { ray, vec }
    }

    pub fn from_times_and_obj(ray: Ray, times: Vec<f64>, object: &'a Object) -> Self {
        Self::new(
            ray,
            times
                .into_iter()
                .map(|time| Intersection::new(time, object))
                .collect(),
        )
    }

    pub fn from_ray_and_obj(ray: Ray, object: &'a Object) -> Result<Self> {
        Ok(Self::new(ray, object.intersect(&ray)?))
    }

    /// Linear scan, every object gets the ray in its own object space.
    pub fn from_ray_and_mult_objects(ray: Ray, objects: &'a [Object]) -> Result<Self> {
        let mut vec = Vec::new();
        for object in objects {
            vec.extend(object.intersect(&ray)?);
        }
        Ok(Self::new(ray, vec))
    }

    pub fn hit(&self) -> Option<&Intersection<'a>> {
        hit(&self.vec)
    }

    pub fn hit_computations(&self) -> Result<Option<IntersecComputations<'a>>> {
        self.hit().map(|hit| hit.computations(&self.ray)).transpose()
    }

    pub fn ray(&self) -> &Ray {
        &self.ray
    }
    pub fn count(&self) -> usize {
        self.vec.len()
    }
    pub fn vec(&self) -> &[Intersection<'a>] {
        &self.vec
    }
}

/// Everything shading needs to know about a hit, computed once per hit.
#[derive(Clone, Copy, Debug)]
pub struct IntersecComputations<'a> {
    time: f64,
    object: &'a Object,
    point: Tuple,
    eye_v: Tuple,
    /// Flipped to face the eye when the hit is on the inner side of the surface.
    normal_v: Tuple,
    inside: bool,
    /// `point` nudged along the normal, origin of shadow and reflection rays.
    over_point: Tuple,
    reflect_v: Tuple,
}

impl<'a> IntersecComputations<'a> {
    pub fn time(&self) -> f64 {
        self.time
    }
    pub fn object(&self) -> &'a Object {
        self.object
    }
    pub fn point(&self) -> Tuple {
        self.point
    }
    pub fn eye_v(&self) -> Tuple {
        self.eye_v
    }
    pub fn normal_v(&self) -> Tuple {
        self.normal_v
    }
    pub fn inside(&self) -> bool {
        self.inside
    }
    pub fn over_point(&self) -> Tuple {
        self.over_point
    }
    pub fn reflect_v(&self) -> Tuple {
        self.reflect_v
    }
}
