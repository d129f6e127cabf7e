use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{object::Object, pattern::Pattern};
use crate::{
    error::Result,
    math::{color::Color, tuple::Tuple},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    /// Overrides `color` when present.
    pub pattern: Option<Pattern>,
    pub ambient: f64,      // [0;1]
    pub diffuse: f64,      // [0;1]
    pub specular: f64,     // [0;1]
    pub shininess: f64,    // [10;+inf) (typically up to 200.0)
    pub reflectivity: f64, // [0;1]
}

impl Material {
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn with_pattern(pattern: Pattern) -> Self {
        Self {
            pattern: Some(pattern),
            ..Default::default()
        }
    }

    pub fn color_at_object(&self, object: &Object, world_point: Tuple) -> Result<Color> {
        match &self.pattern {
            Some(pattern) => pattern.color_at_object(object, world_point),
            None => Ok(self.color),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::white(),
            pattern: None,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
            reflectivity: 0.,
        }
    }
}

/// Handle to a material that several objects can point at.
///
/// Cloning the handle shares the material, a write through any handle is seen
/// by every object holding it. Use `SharedMaterial::new` for a fresh copy.
#[derive(Clone, Debug, Default)]
pub struct SharedMaterial(Arc<RwLock<Material>>);

impl SharedMaterial {
    pub fn new(material: Material) -> Self {
        Self(Arc::new(RwLock::new(material)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Material> {
        self.0.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Material> {
        self.0.write()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Material> for SharedMaterial {
    fn from(material: Material) -> Self {
        Self::new(material)
    }
}
