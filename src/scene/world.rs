use derive_builder::Builder;
use log::trace;

use super::{light::PointLightSource, object::Object};
use crate::{
    error::{Error, Result},
    math::{approx_eq::ApproxEq, color::Color, tuple::Tuple},
    render::{
        intersection::{IntersecComputations, IntersectionCollection},
        ray::Ray,
    },
};

/// Objects and the single light they are lit by.
///
/// The world is read-only while a frame renders, so it is shared across the
/// render threads by reference.
#[derive(Debug, Builder)]
#[builder(pattern = "owned", default)]
pub struct World {
    objects: Vec<Object>,
    #[builder(setter(strip_option))]
    light_source: Option<PointLightSource>,
    /// Depth of recursive calls for reflections
    /// 0 means no reflections
    #[builder(default = "World::MAX_RECURSIVE_DEPTH")]
    max_recursive_depth: usize,
}

impl Default for World {
    fn default() -> Self {
        Self::empty()
    }
}

impl WorldBuilder {
    pub fn object(mut self, object: Object) -> Self {
        self.objects.get_or_insert_with(Vec::new).push(object);
        self
    }
}

impl World {
    pub const MAX_RECURSIVE_DEPTH: usize = 4;

    pub fn new(objects: Vec<Object>, light_source: Option<PointLightSource>) -> Self {
        Self {
            objects,
            light_source,
            max_recursive_depth: Self::MAX_RECURSIVE_DEPTH,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut Vec<Object> {
        &mut self.objects
    }

    pub fn add_obj(&mut self, obj: Object) {
        self.objects.push(obj);
    }

    pub fn light_source(&self) -> Option<&PointLightSource> {
        self.light_source.as_ref()
    }

    pub fn set_light_source(&mut self, light_source: PointLightSource) {
        self.light_source = Some(light_source);
    }

    pub fn max_recursive_depth(&self) -> usize {
        self.max_recursive_depth
    }

    fn light(&self) -> Result<&PointLightSource> {
        self.light_source.as_ref().ok_or(Error::NoLightSource)
    }

    pub fn intersect(&self, ray: Ray) -> Result<IntersectionCollection<'_>> {
        IntersectionCollection::from_ray_and_mult_objects(ray, &self.objects)
    }

    /// Color seen along `ray`, following reflections up to the world's depth bound.
    pub fn color_at(&self, ray: Ray) -> Result<Color> {
        self.color_at_depth(ray, self.max_recursive_depth)
    }

    /// `remaining` is the number of reflection bounces still allowed.
    pub fn color_at_depth(&self, ray: Ray, remaining: usize) -> Result<Color> {
        match self.intersect(ray)?.hit_computations()? {
            Some(hit_comps) => self.shade_hit(&hit_comps, remaining),
            None => Ok(Color::black()),
        }
    }

    pub fn shade_hit(&self, hit_comps: &IntersecComputations, remaining: usize) -> Result<Color> {
        let light = self.light()?;
        let in_shadow = self.is_shadowed(hit_comps.over_point())?;

        let surface = light.color_of_illuminated_point(
            hit_comps.object(),
            hit_comps.over_point(),
            hit_comps.eye_v(),
            hit_comps.normal_v(),
            in_shadow,
        )?;
        let reflected = self.reflected_color(hit_comps, remaining)?;

        Ok(surface + reflected)
    }

    /// True when some object sits between `point` and the light.
    pub fn is_shadowed(&self, point: Tuple) -> Result<bool> {
        let point_to_light = self.light()?.position().checked_sub(point)?;
        let distance = point_to_light.magnitude()?;

        let ray = Ray::new(point, point_to_light.normalize()?);
        let intersections = self.intersect(ray)?;

        Ok(intersections.hit().is_some_and(|hit| hit.time() < distance))
    }

    pub fn reflected_color(
        &self,
        hit_comps: &IntersecComputations,
        remaining: usize,
    ) -> Result<Color> {
        let reflectivity = hit_comps.object().material().read().reflectivity;
        if reflectivity.approx_eq(&0.) {
            return Ok(Color::black());
        }
        if remaining == 0 {
            trace!("reflection depth exhausted at {:?}", hit_comps.point());
            return Ok(Color::black());
        }

        let reflected_ray = Ray::new(hit_comps.over_point(), hit_comps.reflect_v());
        let color = self.color_at_depth(reflected_ray, remaining - 1)?;

        Ok(color * reflectivity)
    }

    /// Two concentric spheres lit from the upper left, the fixture most
    /// shading tests are written against.
    #[cfg(test)]
    pub(crate) fn default_testing() -> Self {
        use crate::{
            math::matrix::Matrix,
            scene::{material::Material, object::shape::Shape},
        };

        let outer = Object::new(
            Shape::Sphere,
            Material {
                color: Color::new(0.8, 0.1, 0.6),
                diffuse: 0.7,
                specular: 0.2,
                ..Default::default()
            },
            Matrix::identity(),
        )
        .unwrap();
        let inner = Object::sphere_with_transformation(Matrix::scaling_uniform(0.5)).unwrap();

        Self::new(
            vec![outer, inner],
            Some(PointLightSource::new(
                Tuple::point(-10., 10., -10.),
                Color::white(),
            )),
        )
    }
}
