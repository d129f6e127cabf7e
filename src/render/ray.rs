use crate::{
    error::Result,
    math::{matrix::Matrix, transform::Transform, tuple::Tuple},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    origin: Tuple,
    direction: Tuple,
}

impl Transform for Ray {
    fn transform(&mut self, matrix: &Matrix) -> Result<()> {
        self.origin = matrix.checked_mul_tuple(self.origin)?;
        self.direction = matrix.checked_mul_tuple(self.direction)?;
        Ok(())
    }
}

impl Ray {
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    /// Point reached after travelling `time` units along the direction.
    pub fn position(&self, time: f64) -> Result<Tuple> {
        self.origin.checked_add(self.direction * time)
    }
    pub fn origin(&self) -> Tuple {
        self.origin
    }
    pub fn direction(&self) -> Tuple {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create() {
        let origin = Tuple::point(1., 2., 3.);
        let direction = Tuple::vector(4., 5., 6.);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), direction);
    }

    #[test]
    fn position() {
        let ray = Ray::new(Tuple::point(2., 3., 4.), Tuple::vector(1., 0., 0.));

        assert_eq!(ray.position(0.).unwrap(), Tuple::point(2., 3., 4.));
        assert_eq!(ray.position(1.).unwrap(), Tuple::point(3., 3., 4.));
        assert_eq!(ray.position(-1.).unwrap(), Tuple::point(1., 3., 4.));
        assert_eq!(ray.position(2.5).unwrap(), Tuple::point(4.5, 3., 4.));
    }

    #[test]
    fn translate() {
        let ray = Ray::new(Tuple::point(1., 2., 3.), Tuple::vector(0., 1., 0.));
        let moved = ray
            .transform_new(&Matrix::translation(3., 4., 5.))
            .unwrap();

        assert_eq!(moved.origin(), Tuple::point(4., 6., 8.));
        assert_eq!(moved.direction(), Tuple::vector(0., 1., 0.));
    }

    #[test]
    fn scale() {
        let mut ray = Ray::new(Tuple::point(1., 2., 3.), Tuple::vector(0., 1., 0.));
        ray.scale(2., 3., 4.).unwrap();

        assert_eq!(ray.origin(), Tuple::point(2., 6., 12.));
        assert_eq!(ray.direction(), Tuple::vector(0., 3., 0.));
    }
}
