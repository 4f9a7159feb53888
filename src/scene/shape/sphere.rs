use crate::core::{Normal3D, Point3D, Ray, VectorMaths};
use crate::scene::bounding_box::BoundingBox;
use crate::scene::shape::Shape;
use crate::scene::{Intersection, Intersections, Object};

/// A unit sphere, with the centre at the world origin, and a radius of 1.
#[derive(Debug, PartialEq)]
pub struct Sphere;

impl Shape for Sphere {
    fn object_bounds(&self) -> BoundingBox {
        BoundingBox::new(Point3D::new(-1.0, -1.0, -1.0), Point3D::new(1.0, 1.0, 1.0))
    }

    fn object_normal_at(&self, point: Point3D, _hit: Option<&Intersection>) -> Normal3D {
        (point - Point3D::ORIGIN).normalised()
    }

    fn object_intersect<'parent>(&self, parent: &'parent Object, with: Ray) -> Intersections<'parent> {
        let sphere_to_ray = with.origin - Point3D::ORIGIN;
        let a = with.direction.dot(with.direction);
        let b = 2.0 * with.direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.0;

        if let Some((first, second)) = crate::core::quadratic(a, b, c) {
            Intersections::pair(Intersection::new(first, parent), Intersection::new(second, parent))
        } else {
            Intersections::empty()
        }
    }
}
