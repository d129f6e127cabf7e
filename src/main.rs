use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, LevelFilter};
use raycaster::{
    math::{color::Color, matrix::Matrix, transform::Transform, tuple::Tuple},
    render::canvas::ImageFormat,
    scene::{
        camera::Camera,
        light::PointLightSource,
        material::Material,
        object::{shape::Shape, Object},
        pattern::Pattern,
        world::{World, WorldBuilder},
    },
};

const DEFAULT_WIDTH: usize = 800;
const DEFAULT_HEIGHT: usize = 400;
const DEFAULT_FOV: f64 = std::f64::consts::FRAC_PI_3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Simple ray caster
/// Renders a small demo scene of spheres standing on a checkered floor
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The output path of the rendered image.
    /// By default it's `./scene.<image_format>`
    output_path: Option<PathBuf>,

    /// The format of the output image
    #[clap(short = 'f', long, default_value = "png")]
    image_format: ImageFormat,

    /// Width (in pixels) of the output image.
    #[clap(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Height (in pixels) of the output image.
    #[clap(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Field of view of the camera in radians.
    #[clap(long, default_value_t = DEFAULT_FOV)]
    fov: f64,

    /// Maximum number of times a ray can bounce off a reflective surface.
    #[clap(short, long, default_value_t = World::MAX_RECURSIVE_DEPTH)]
    max_reflective_depth: usize,

    /// Don't draw the progress bar
    #[clap(long)]
    no_progress: bool,

    /// Log verbosity, `RUST_LOG` takes precedence when set
    #[clap(long, default_value = "info")]
    log_level: LogLevel,
}

fn demo_world(max_recursive_depth: usize) -> anyhow::Result<World> {
    let floor_pattern = Pattern::checkers(
        Color::new(1., 0.9, 0.9),
        Color::black(),
        Some(Matrix::scaling_uniform(0.5)),
    )?;
    let floor = Object::new(
        Shape::Plane,
        Material {
            color: Color::new(1., 0.9, 0.9),
            pattern: Some(floor_pattern),
            specular: 0.,
            reflectivity: 0.1,
            ..Default::default()
        },
        Matrix::identity(),
    )?;

    let middle = Object::new(
        Shape::Sphere,
        Material {
            color: Color::new(0.1, 1., 0.5),
            diffuse: 0.7,
            specular: 0.3,
            ..Default::default()
        },
        Matrix::translation(-0.5, 1., 0.5),
    )?;

    let right_transformation =
        Matrix::scaling_uniform(0.5).transform_new(&Matrix::translation(1.5, 0.5, -0.5))?;
    let right = Object::new(
        Shape::Sphere,
        Material {
            color: Color::new(0.5, 1., 0.1),
            diffuse: 0.7,
            specular: 0.3,
            ..Default::default()
        },
        right_transformation,
    )?;

    let left_transformation =
        Matrix::scaling_uniform(0.33).transform_new(&Matrix::translation(-1.5, 0.33, -0.75))?;
    let left = Object::new(
        Shape::Sphere,
        Material {
            color: Color::new(1., 0.8, 0.1),
            diffuse: 0.7,
            specular: 0.3,
            ..Default::default()
        },
        left_transformation,
    )?;

    let world = WorldBuilder::default()
        .object(floor)
        .object(middle)
        .object(right)
        .object(left)
        .light_source(PointLightSource::new(
            Tuple::point(-10., 10., -10.),
            Color::white(),
        ))
        .max_recursive_depth(max_recursive_depth)
        .build()?;
    Ok(world)
}

fn progress_bar(pixels: u64) -> anyhow::Result<ProgressBar> {
    let style = ProgressStyle::with_template(
        "{elapsed_precise} [{wide_bar:.cyan/blue}] {percent}% {pos}/{len} pixels ({eta})",
    )?
    .progress_chars("#>-");
    Ok(ProgressBar::new(pixels).with_style(style))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let world = demo_world(args.max_reflective_depth).context("failed to build the demo scene")?;
    let camera = Camera::with_transformation(
        args.width,
        args.height,
        args.fov,
        Matrix::view_transformation(
            Tuple::point(0., 1.5, -5.),
            Tuple::point(0., 1., 0.),
            Tuple::vector(0., 1., 0.),
        )?,
    )
    .context("failed to set up the camera")?;

    let canvas = if args.no_progress {
        camera.render(&world)
    } else {
        let pixels = args.width as u64 * args.height as u64;
        camera.render_with_progress(&world, progress_bar(pixels)?)
    }
    .context("failed to render the scene")?;

    let output_path = args.output_path.unwrap_or_else(|| {
        let mut path = PathBuf::from("scene");
        path.set_extension(args.image_format.to_string());
        path
    });
    canvas
        .save_to_file(&output_path, args.image_format)
        .with_context(|| format!("failed to save image to {}", output_path.display()))?;
    info!("image saved to {}", output_path.display());
    Ok(())
}
