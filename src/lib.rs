pub mod error;

pub mod math {
    pub mod approx_eq;
    pub mod color;
    pub mod matrix;
    pub mod transform;
    pub mod tuple;
}

pub mod render {
    pub mod canvas;
    pub mod intersection;
    pub mod ray;
}

pub mod scene {
    pub mod camera;
    pub mod light;
    pub mod material;
    pub mod object;
    pub mod pattern;
    pub mod world;
}
