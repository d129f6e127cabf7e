use std::time::Instant;

use indicatif::ProgressBar;
use log::info;

use crate::{
    error::{Error, Result},
    math::{matrix::Matrix, tuple::Tuple},
    render::{canvas::Canvas, ray::Ray},
    scene::world::World,
};

// camera looks toward -z direction from point zero
// this makes +x to be on the left
#[derive(PartialEq, Debug)]
pub struct Camera {
    target_width: usize,
    target_height: usize,
    field_of_view: f64,
    transformation: Matrix,
    inverse_transformation: Matrix,

    pixel_size: f64,
    half_width: f64,
    half_height: f64,
}

impl Camera {
    pub fn new(target_width: usize, target_height: usize, field_of_view: f64) -> Result<Self> {
        Self::with_transformation(
            target_width,
            target_height,
            field_of_view,
            Matrix::identity(),
        )
    }

    /// Fails when either dimension is zero or `transformation` is singular.
    pub fn with_transformation(
        target_width: usize,
        target_height: usize,
        field_of_view: f64,
        transformation: Matrix,
    ) -> Result<Self> {
        if target_width == 0 || target_height == 0 {
            return Err(Error::InvalidOperand("camera image must not be empty"));
        }
        let inverse_transformation = transformation.inverse()?;

        let half_view = (field_of_view / 2.).tan();
        let h_v_aspect = target_width as f64 / target_height as f64;

        let (half_width, half_height) = match h_v_aspect >= 1. {
            true => (half_view, half_view / h_v_aspect),
            false => (half_view * h_v_aspect, half_view),
        };

        Ok(Self {
            target_width,
            target_height,
            field_of_view,
            transformation,
            inverse_transformation,
            pixel_size: half_width * 2. / target_width as f64,
            half_width,
            half_height,
        })
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }
    pub fn target_height(&self) -> usize {
        self.target_height
    }
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }
    pub fn half_width(&self) -> f64 {
        self.half_width
    }
    pub fn half_height(&self) -> f64 {
        self.half_height
    }
    pub fn transformation(&self) -> Matrix {
        self.transformation
    }
    pub fn inverse_transformation(&self) -> Matrix {
        self.inverse_transformation
    }

    /// On failure the previous transformation is kept.
    pub fn set_transformation(&mut self, transformation: Matrix) -> Result<()> {
        self.inverse_transformation = transformation.inverse()?;
        self.transformation = transformation;
        Ok(())
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.target_width, self.target_height)
    }

    /// Ray from the camera through the center of pixel (`x`, `y`), in world space.
    pub fn ray_for_pixel(&self, x: f64, y: f64) -> Result<Ray> {
        let x_offset = (x + 0.5) * self.pixel_size;
        let y_offset = (y + 0.5) * self.pixel_size;

        let scene_x = self.half_width - x_offset;
        let scene_y = self.half_height - y_offset;

        let pixel = self
            .inverse_transformation
            .checked_mul_tuple(Tuple::point(scene_x, scene_y, -1.))?;
        let origin = self
            .inverse_transformation
            .checked_mul_tuple(Tuple::origin())?;
        let direction = pixel.checked_sub(origin)?.normalize()?;

        Ok(Ray::new(origin, direction))
    }

    pub fn render(&self, world: &World) -> Result<Canvas> {
        self.render_with_progress(world, ProgressBar::hidden())
    }

    /// Renders every pixel in parallel, the first failing pixel aborts the frame.
    pub fn render_with_progress(&self, world: &World, progressbar: ProgressBar) -> Result<Canvas> {
        info!(
            "rendering {}x{} frame of {} objects",
            self.target_width,
            self.target_height,
            world.objects().len()
        );
        let start = Instant::now();

        let mut canvas = self.canvas();
        canvas.try_set_each_pixel(
            |x, y| {
                let ray = self.ray_for_pixel(x as f64, y as f64)?;
                world.color_at(ray)
            },
            progressbar,
        )?;

        info!("frame rendered in {:.2?}", start.elapsed());
        Ok(canvas)
    }
}
