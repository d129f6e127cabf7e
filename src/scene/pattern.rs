use super::object::Object;
use crate::{
    error::Result,
    math::{color::Color, matrix::Matrix, transform::Transform, tuple::Tuple},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PatternKind {
    /// Stripe alternating as x changes
    Stripe(Color, Color),
    /// Linear gradient changing in x direction, repeating every unit
    Gradient(Color, Color),
    /// Ring pattern extending in x and z
    Ring(Color, Color),
    /// 3D checkerboard
    Checkers(Color, Color),
    /// Pattern that returns points coordinates as color
    Test,
}

/// Procedural color function evaluated in its own pattern space.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    kind: PatternKind,
    transformation: Matrix,
    transformation_inverse: Matrix,
}

fn is_even(val: f64) -> bool {
    val.rem_euclid(2.) == 0.
}

impl Pattern {
    pub fn new(kind: PatternKind, transformation: Option<Matrix>) -> Result<Self> {
        let transformation = transformation.unwrap_or_default();
        Ok(Self {
            kind,
            transformation_inverse: transformation.inverse()?,
            transformation,
        })
    }

    pub fn stripe(c1: Color, c2: Color, transformation: Option<Matrix>) -> Result<Self> {
        Self::new(PatternKind::Stripe(c1, c2), transformation)
    }

    pub fn gradient(c1: Color, c2: Color, transformation: Option<Matrix>) -> Result<Self> {
        Self::new(PatternKind::Gradient(c1, c2), transformation)
    }

    pub fn ring(c1: Color, c2: Color, transformation: Option<Matrix>) -> Result<Self> {
        Self::new(PatternKind::Ring(c1, c2), transformation)
    }

    pub fn checkers(c1: Color, c2: Color, transformation: Option<Matrix>) -> Result<Self> {
        Self::new(PatternKind::Checkers(c1, c2), transformation)
    }

    pub fn test_pattern(transformation: Option<Matrix>) -> Result<Self> {
        Self::new(PatternKind::Test, transformation)
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn transformation(&self) -> &Matrix {
        &self.transformation
    }

    pub fn set_transformation(&mut self, transformation: Matrix) -> Result<()> {
        self.transformation_inverse = transformation.inverse()?;
        self.transformation = transformation;
        Ok(())
    }

    /// Color at a point already expressed in pattern space.
    pub fn color_at(&self, point: &Tuple) -> Color {
        let pick = |c1: Color, c2: Color, val: f64| if is_even(val) { c1 } else { c2 };

        match self.kind {
            PatternKind::Stripe(c1, c2) => pick(c1, c2, point.x().floor()),
            PatternKind::Gradient(c1, c2) => c1 + (c2 - c1) * (point.x() - point.x().floor()),
            PatternKind::Ring(c1, c2) => {
                let distance = (point.x().powi(2) + point.z().powi(2)).sqrt();
                pick(c1, c2, distance.floor())
            }
            PatternKind::Checkers(c1, c2) => {
                let sum = point.x().floor() + point.y().floor() + point.z().floor();
                pick(c1, c2, sum)
            }
            PatternKind::Test => Color::new(point.x(), point.y(), point.z()),
        }
    }

    /// World point → object space → pattern space → color.
    pub fn color_at_object(&self, object: &Object, world_point: Tuple) -> Result<Color> {
        let object_point = object.to_object_space(world_point)?;
        let pattern_point = self.transformation_inverse.checked_mul_tuple(object_point)?;

        Ok(self.color_at(&pattern_point))
    }
}

impl Transform for Pattern {
    fn transform(&mut self, matrix: &Matrix) -> Result<()> {
        self.set_transformation(matrix.checked_mul(&self.transformation)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn stripe() -> Pattern {
        Pattern::stripe(Color::white(), Color::black(), None).unwrap()
    }

    #[test]
    fn stripe_pattern_const_in_y_and_z() {
        let stripe = stripe();

        for point in [
            Tuple::point(0., 0., 0.),
            Tuple::point(0., 1., 0.),
            Tuple::point(0., 2., 0.),
            Tuple::point(0., 0., 1.),
            Tuple::point(0., 0., 2.),
        ] {
            assert_eq!(stripe.color_at(&point), Color::white());
        }
    }

    #[test]
    fn stripe_pattern_alternate_in_x() {
        let black = Color::black();
        let white = Color::white();
        let stripe = stripe();

        assert_eq!(stripe.color_at(&Tuple::point(0., 0., 0.)), white);
        assert_eq!(stripe.color_at(&Tuple::point(0.9, 0., 0.)), white);
        assert_eq!(stripe.color_at(&Tuple::point(1., 0., 0.)), black);
        assert_eq!(stripe.color_at(&Tuple::point(-0.1, 0., 0.)), black);
        assert_eq!(stripe.color_at(&Tuple::point(-1., 0., 0.)), black);
        assert_eq!(stripe.color_at(&Tuple::point(-1.1, 0., 0.)), white);
    }

    #[test]
    fn stripes_with_object_transformation() {
        let sphere = Object::sphere_with_transformation(Matrix::scaling_uniform(2.)).unwrap();

        assert_eq!(
            stripe()
                .color_at_object(&sphere, Tuple::point(1.5, 0., 0.))
                .unwrap(),
            Color::white()
        );
    }

    #[test]
    fn stripes_with_pattern_transformation() {
        let sphere = Object::sphere();
        let stripe = Pattern::stripe(
            Color::white(),
            Color::black(),
            Some(Matrix::scaling_uniform(2.)),
        )
        .unwrap();

        assert_eq!(
            stripe
                .color_at_object(&sphere, Tuple::point(1.5, 0., 0.))
                .unwrap(),
            Color::white()
        );
    }

    #[test]
    fn stripes_with_object_and_pattern_transformation() {
        let sphere = Object::sphere_with_transformation(Matrix::scaling_uniform(2.)).unwrap();
        let stripe = Pattern::stripe(
            Color::white(),
            Color::black(),
            Some(Matrix::translation(0.5, 0., 0.)),
        )
        .unwrap();

        assert_eq!(
            stripe
                .color_at_object(&sphere, Tuple::point(2.5, 0., 0.))
                .unwrap(),
            Color::white()
        );
    }

    #[test]
    fn test_pattern_with_object_transformation() {
        let sphere = Object::sphere_with_transformation(Matrix::scaling_uniform(2.)).unwrap();
        let pattern = Pattern::test_pattern(None).unwrap();

        assert_eq!(
            pattern
                .color_at_object(&sphere, Tuple::point(2., 3., 4.))
                .unwrap(),
            Color::new(1., 1.5, 2.)
        );
    }

    #[test]
    fn test_pattern_with_pattern_transformation() {
        let sphere = Object::sphere();
        let pattern = Pattern::test_pattern(Some(Matrix::scaling_uniform(2.))).unwrap();

        assert_eq!(
            pattern
                .color_at_object(&sphere, Tuple::point(2., 3., 4.))
                .unwrap(),
            Color::new(1., 1.5, 2.)
        );
    }

    #[test]
    fn test_pattern_with_object_and_pattern_transformation() {
        let sphere = Object::sphere_with_transformation(Matrix::scaling_uniform(2.)).unwrap();
        let mut pattern = Pattern::test_pattern(None).unwrap();
        pattern.translate(0.5, 1., 1.5).unwrap();

        assert_eq!(
            pattern
                .color_at_object(&sphere, Tuple::point(2.5, 3., 3.5))
                .unwrap(),
            Color::new(0.75, 0.5, 0.25)
        );
    }

    #[test]
    fn singular_pattern_transformation_is_rejected() {
        assert!(matches!(
            Pattern::test_pattern(Some(Matrix::scaling(1., 0., 1.))),
            Err(Error::NotInvertible)
        ));
    }

    #[test]
    fn gradient_linearly_interpolates_between_colors() {
        let pattern = Pattern::gradient(Color::white(), Color::black(), None).unwrap();

        assert_eq!(pattern.color_at(&Tuple::point(0., 0., 0.)), Color::white());
        assert_eq!(
            pattern.color_at(&Tuple::point(0.25, 0., 0.)),
            Color::new(0.75, 0.75, 0.75)
        );
        assert_eq!(
            pattern.color_at(&Tuple::point(0.5, 0., 0.)),
            Color::new(0.5, 0.5, 0.5)
        );
        assert_eq!(
            pattern.color_at(&Tuple::point(0.75, 0., 0.)),
            Color::new(0.25, 0.25, 0.25)
        );
    }

    #[test]
    fn ring_extends_in_x_and_z() {
        let pattern = Pattern::ring(Color::white(), Color::black(), None).unwrap();

        assert_eq!(pattern.color_at(&Tuple::point(0., 0., 0.)), Color::white());
        assert_eq!(pattern.color_at(&Tuple::point(1., 0., 0.)), Color::black());
        assert_eq!(pattern.color_at(&Tuple::point(0., 0., 1.)), Color::black());
        assert_eq!(
            pattern.color_at(&Tuple::point(0.708, 0., 0.708)),
            Color::black()
        );
    }

    #[test]
    fn checkers_repeat_in_every_dimension() {
        let pattern = Pattern::checkers(Color::white(), Color::black(), None).unwrap();

        for (x, y, z, expected) in [
            (0., 0., 0., Color::white()),
            (0.99, 0., 0., Color::white()),
            (1.01, 0., 0., Color::black()),
            (0., 0.99, 0., Color::white()),
            (0., 1.01, 0., Color::black()),
            (0., 0., 0.99, Color::white()),
            (0., 0., 1.01, Color::black()),
            (-0.5, 0., 0., Color::black()),
            (-0.5, -0.5, 0., Color::white()),
        ] {
            assert_eq!(pattern.color_at(&Tuple::point(x, y, z)), expected);
        }
    }
}
