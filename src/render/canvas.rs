use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use clap::ValueEnum;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;

use crate::{error::Result, math::color::Color};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Ppm,
    Png,
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Ppm => write!(f, "ppm"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// Row-major pixel buffer, (0, 0) is the top left corner.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn with_color(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; height * width],
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_color(width, height, Color::black())
    }

    fn index(&self, x: usize, y: usize) -> usize {
        self.width * y + x
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Returns `None` outside the canvas.
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<Color> {
        self.contains(x, y).then(|| self.pixels[self.index(x, y)])
    }

    /// Writes outside the canvas are dropped.
    pub fn write_pixel(&mut self, x: usize, y: usize, new_color: Color) {
        if !self.contains(x, y) {
            return;
        }
        let id = self.index(x, y);
        self.pixels[id] = new_color;
    }

    /// Evaluates `fun` for every pixel in parallel.
    /// Stops at the first error, leaving the remaining pixels untouched.
    pub fn try_set_each_pixel<F>(&mut self, fun: F, progressbar: ProgressBar) -> Result<()>
    where
        F: Fn(usize, usize) -> Result<Color> + Sync,
    {
        let width = self.width;

        self.pixels
            .par_iter_mut()
            .enumerate()
            .progress_with(progressbar)
            .try_for_each(|(id, pixel_color)| {
                let x = id % width;
                let y = id / width;
                *pixel_color = fun(x, y)?;
                Ok(())
            })
    }

    pub fn as_u8_rgb(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color.as_scaled_values())
            .collect()
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, format: ImageFormat) -> Result<()> {
        let file = File::create(path)?;
        match format {
            ImageFormat::Ppm => self.save_to_ppm(file),
            ImageFormat::Png => self.save_to_png(file),
        }
    }
}

/// ppm format
impl Canvas {
    const MAX_LINE_LEN: usize = 70;

    fn ppm_header(&self) -> String {
        format!("P3\n{} {}\n255\n", self.width, self.height)
    }

    fn ppm_data(&self) -> String {
        let mut out = String::with_capacity(self.pixels.len() * 12);

        for row in self.pixels.chunks(self.width.max(1)) {
            let mut line_len = 0;
            for val in row.iter().flat_map(|color| color.as_scaled_values()) {
                let val_str = val.to_string();
                if line_len > 0 && line_len + 1 + val_str.len() > Self::MAX_LINE_LEN {
                    out.push('\n');
                    line_len = 0;
                }
                if line_len > 0 {
                    out.push(' ');
                    line_len += 1;
                }
                out.push_str(&val_str);
                line_len += val_str.len();
            }
            out.push('\n');
        }
        out
    }

    pub fn to_ppm(&self) -> String {
        self.ppm_header() + &self.ppm_data()
    }

    pub fn save_to_ppm(&self, file: File) -> Result<()> {
        let mut writer = BufWriter::new(file);
        writer.write_all(self.to_ppm().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// png format
impl Canvas {
    pub fn save_to_png(&self, file: File) -> Result<()> {
        let mut encoder = png::Encoder::new(
            BufWriter::new(file),
            self.width as u32,
            self.height as u32,
        );
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.as_u8_rgb())?;
        writer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq_low_prec, error::Error};

    #[test]
    fn index() {
        let width = 5;
        let height = 3;
        let canvas = Canvas::new(width, height);
        assert_eq!(canvas.index(0, 1), width);
        assert_eq!(canvas.index(1, 0), 1);
        assert_eq!(canvas.index(width - 1, height - 1), width * height - 1);
        assert_eq!(canvas.index(1, 2), width * 2 + 1);
        assert_eq!(canvas.index(2, 1), width + 2);
    }

    #[test]
    fn new_blank() {
        let canvas = Canvas::new(10, 20);
        assert_eq!(canvas.width(), 10);
        assert_eq!(canvas.height(), 20);
        canvas
            .pixels()
            .iter()
            .for_each(|pixel| assert_approx_eq_low_prec!(*pixel, Color::black()))
    }

    #[test]
    fn write_pixel() {
        let mut canvas = Canvas::new(10, 10);
        let red = Color::new(1., 0., 0.);

        canvas.write_pixel(2, 3, red);
        assert_approx_eq_low_prec!(canvas.pixel_at(2, 3).unwrap(), red);
    }

    #[test]
    fn write_outside_is_ignored() {
        let mut canvas = Canvas::new(4, 2);
        canvas.write_pixel(4, 0, Color::new(1., 0., 0.));
        canvas.write_pixel(0, 2, Color::new(1., 0., 0.));
        canvas.write_pixel(100, 100, Color::new(1., 0., 0.));

        assert!(canvas.pixel_at(4, 0).is_none());
        canvas
            .pixels()
            .iter()
            .for_each(|pixel| assert_approx_eq_low_prec!(*pixel, Color::black()));
    }

    #[test]
    fn ppm_header() {
        let canvas = Canvas::new(5, 3);
        assert_eq!(canvas.ppm_header(), "P3\n5 3\n255\n");
    }

    #[test]
    fn ppm_pixel_data() {
        let mut canvas = Canvas::new(5, 3);

        canvas.write_pixel(0, 0, Color::new(1.5, 0., 0.));
        canvas.write_pixel(2, 1, Color::new(0., 0.5, 0.));
        canvas.write_pixel(4, 2, Color::new(-1.5, 0., 1.));

        assert_eq!(
            canvas.ppm_data(),
            "255 0 0 0 0 0 0 0 0 0 0 0 0 0 0\n\
             0 0 0 0 0 0 0 128 0 0 0 0 0 0 0\n\
             0 0 0 0 0 0 0 0 0 0 0 0 0 0 255\n"
        );
    }

    #[test]
    fn split_long_lines_ppm_data() {
        let canvas = Canvas::with_color(10, 2, Color::new(1., 0.8, 0.6));

        assert_eq!(
            canvas.ppm_data(),
            "255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204\n\
             153 255 204 153 255 204 153 255 204 153 255 204 153\n\
             255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204\n\
             153 255 204 153 255 204 153 255 204 153 255 204 153\n"
        );
        for line in canvas.to_ppm().lines() {
            assert!(line.len() <= Canvas::MAX_LINE_LEN);
        }
    }

    #[test]
    fn ppm_ends_with_newline() {
        let canvas = Canvas::new(5, 3);
        assert!(canvas.to_ppm().ends_with('\n'));
        assert!(canvas.to_ppm().starts_with("P3\n5 3\n255\n"));
    }

    #[test]
    fn set_each_pixel_by_coordinates() {
        let mut canvas = Canvas::new(3, 2);
        canvas
            .try_set_each_pixel(
                |x, y| Ok(Color::new(x as f64, y as f64, 0.)),
                ProgressBar::hidden(),
            )
            .unwrap();

        assert_approx_eq_low_prec!(canvas.pixel_at(2, 1).unwrap(), Color::new(2., 1., 0.));
        assert_approx_eq_low_prec!(canvas.pixel_at(1, 0).unwrap(), Color::new(1., 0., 0.));
    }

    #[test]
    fn set_each_pixel_propagates_error() {
        let mut canvas = Canvas::new(3, 2);
        let res = canvas.try_set_each_pixel(
            |x, y| {
                if x == 1 && y == 1 {
                    Err(Error::NoLightSource)
                } else {
                    Ok(Color::white())
                }
            },
            ProgressBar::hidden(),
        );
        assert!(matches!(res, Err(Error::NoLightSource)));
    }

    #[test]
    fn u8_rgb_scales_and_clamps() {
        let mut canvas = Canvas::new(2, 1);
        canvas.write_pixel(0, 0, Color::new(1.5, 0.5, -0.2));
        assert_eq!(canvas.as_u8_rgb(), vec![255, 128, 0, 0, 0, 0]);
    }
}
