use super::{material::Material, object::Object};
use crate::{
    error::Result,
    math::{color::Color, tuple::Tuple},
};

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct PointLightSource {
    position: Tuple,
    intensity: Color,
}

impl PointLightSource {
    pub fn new(position: Tuple, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }

    pub fn position(&self) -> Tuple {
        self.position
    }

    /// Lighting with the object's own material.
    pub fn color_of_illuminated_point(
        &self,
        object: &Object,
        point: Tuple,
        eye_v: Tuple,
        normal_v: Tuple,
        in_shadow: bool,
    ) -> Result<Color> {
        let material = object.material().read();
        lighting(&material, object, self, point, eye_v, normal_v, in_shadow)
    }
}

/// Phong reflection model: ambient + diffuse + specular.
/// A point in shadow only gets the ambient term.
pub fn lighting(
    material: &Material,
    object: &Object,
    light: &PointLightSource,
    point: Tuple,
    eye_v: Tuple,
    normal_v: Tuple,
    in_shadow: bool,
) -> Result<Color> {
    // combine surface color with lights's intensity (color)
    let effective_color = material.color_at_object(object, point)? * light.intensity();
    let ambient = effective_color * material.ambient;
    if in_shadow {
        return Ok(ambient);
    }

    // direction to the light source
    let light_v = light.position().checked_sub(point)?.normalize()?;
    let light_dot_normal = light_v.dot(normal_v)?;

    // light is on the other side of the surface
    if light_dot_normal < 0. {
        return Ok(ambient);
    }
    let diffuse = effective_color * material.diffuse * light_dot_normal;

    let reflect_v = (-light_v).reflect(normal_v)?;
    let reflect_dot_eye = reflect_v.dot(eye_v)?;

    // light reflects away from the eye
    let specular = if reflect_dot_eye <= 0. {
        Color::black()
    } else {
        let factor = reflect_dot_eye.powf(material.shininess);
        light.intensity() * material.specular * factor
    };

    Ok(ambient + diffuse + specular)
}
