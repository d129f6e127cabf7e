use crate::{error::Result, math::tuple::Tuple, render::ray::Ray};

/// Sphere of radius 1 centered at the object space origin.
pub struct UnitSphere {}

impl UnitSphere {
    pub fn local_normal_at(object_point: Tuple) -> Result<Tuple> {
        object_point.checked_sub(Tuple::origin())
    }

    /// Both roots of the ray/sphere quadratic, negative ones included.
    pub fn local_intersect(object_ray: &Ray) -> Result<Vec<f64>> {
        let vector_sphere_to_ray = object_ray.origin().checked_sub(Tuple::origin())?;
        let direction = object_ray.direction();

        let a = direction.dot(direction)?;
        let b = 2. * direction.dot(vector_sphere_to_ray)?;
        let c = vector_sphere_to_ray.dot(vector_sphere_to_ray)? - 1.;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. || a == 0. {
            return Ok(Vec::new());
        }

        let delta_sqrt = discriminant.sqrt();
        Ok(vec![(-b - delta_sqrt) / (2. * a), (-b + delta_sqrt) / (2. * a)])
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    use crate::{
        assert_approx_eq_low_prec,
        math::{matrix::Matrix, transform::Transform, tuple::Tuple},
        render::ray::Ray,
        scene::object::Object,
    };

    fn ray_towards_z(origin: Tuple) -> Ray {
        Ray::new(origin, Tuple::vector(0., 0., 1.))
    }

    #[test]
    fn ray_intersects_sphere_at_two_points() {
        let obj = Object::sphere();
        let ray = ray_towards_z(Tuple::point(0., 0., -5.));

        assert_eq!(obj.intersection_times_testing(&ray), vec![4., 6.]);
    }

    #[test]
    fn ray_intersects_sphere_at_tangent() {
        let obj = Object::sphere();
        let ray = ray_towards_z(Tuple::point(0., 1., -5.));

        assert_eq!(obj.intersection_times_testing(&ray), vec![5., 5.]);
    }

    #[test]
    fn ray_misses_sphere() {
        let obj = Object::sphere();
        let ray = ray_towards_z(Tuple::point(0., 2., -5.));

        assert_eq!(obj.intersection_times_testing(&ray), Vec::<f64>::new());
    }

    #[test]
    fn ray_originates_inside_sphere() {
        let obj = Object::sphere();
        let ray = ray_towards_z(Tuple::origin());

        assert_eq!(obj.intersection_times_testing(&ray), vec![-1., 1.]);
    }

    #[test]
    fn sphere_behind_ray() {
        let obj = Object::sphere();
        let ray = ray_towards_z(Tuple::point(0., 0., 5.));

        assert_eq!(obj.intersection_times_testing(&ray), vec![-6., -4.]);
    }

    #[test]
    fn intersect_scaled_sphere() {
        let ray = ray_towards_z(Tuple::point(0., 0., -5.));
        let obj = Object::sphere_with_transformation(Matrix::scaling_uniform(2.)).unwrap();

        assert_eq!(obj.intersection_times_testing(&ray), vec![3., 7.]);
    }

    #[test]
    fn intersect_translated_sphere() {
        let ray = ray_towards_z(Tuple::point(0., 0., -5.));
        let obj = Object::sphere_with_transformation(Matrix::translation(5., 0., 0.)).unwrap();

        assert_eq!(obj.intersection_times_testing(&ray), Vec::<f64>::new());
    }

    #[test]
    fn normal_on_sphere_axes() {
        let obj = Object::sphere();

        for axis in [
            Tuple::vector(1., 0., 0.),
            Tuple::vector(0., 1., 0.),
            Tuple::vector(0., 0., 1.),
        ] {
            let point = Tuple::origin().checked_add(axis).unwrap();
            assert_eq!(obj.normal_vector_at(point).unwrap(), axis);
        }
    }

    #[test]
    fn normal_on_sphere_at_noaxial_point() {
        let obj = Object::sphere();
        let frac_sqrt_3_3 = 3_f64.sqrt() / 3.;
        let normal = obj
            .normal_vector_at(Tuple::point(frac_sqrt_3_3, frac_sqrt_3_3, frac_sqrt_3_3))
            .unwrap();

        assert_eq!(
            normal,
            Tuple::vector(frac_sqrt_3_3, frac_sqrt_3_3, frac_sqrt_3_3)
        );
        assert_eq!(normal, normal.normalize().unwrap());
    }

    #[test]
    fn compute_normal_on_translated_sphere() {
        let mut obj = Object::sphere();
        obj.translate(0., 1., 0.).unwrap();

        assert_eq!(
            obj.normal_vector_at(Tuple::point(0., 1. + FRAC_1_SQRT_2, -FRAC_1_SQRT_2))
                .unwrap(),
            Tuple::vector(0., FRAC_1_SQRT_2, -FRAC_1_SQRT_2)
        );
    }

    #[test]
    fn compute_normal_on_transformed_sphere() {
        let mut obj = Object::sphere();
        obj.rotate_z(PI / 5.).unwrap().scale(1., 0.5, 1.).unwrap();

        let normal = obj
            .normal_vector_at(Tuple::point(0., FRAC_1_SQRT_2, -FRAC_1_SQRT_2))
            .unwrap();
        assert_approx_eq_low_prec!(normal, Tuple::vector(0., 0.97014, -0.24254));
    }
}
