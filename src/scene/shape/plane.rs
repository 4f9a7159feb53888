use crate::core::{F64Ext, Normal3D, Point3D, Ray, VectorMaths};
use crate::scene::bounding_box::BoundingBox;
use crate::scene::intersection::{Intersection, Intersections};
use crate::scene::shape::Shape;
use crate::scene::Object;

/// An infinite XZ plane.
#[derive(Debug, PartialEq)]
pub struct Plane;

impl Shape for Plane {
    fn object_bounds(&self) -> BoundingBox {
        let limit = BoundingBox::LIMIT;
        BoundingBox::new(Point3D::new(-limit, 0.0, -limit), Point3D::new(limit, 0.0, limit))
    }

    fn object_normal_at(&self, _point: Point3D, _hit: Option<&Intersection>) -> Normal3D {
        Normal3D::POSITIVE_Y
    }

    fn object_intersect<'parent>(&self, parent: &'parent Object, with: Ray) -> Intersections<'parent> {
        if with.direction.y().is_roughly_zero() {
            return Intersections::empty();
        }

        let t = -with.origin.y() / with.direction.y();
        Intersections::single(Intersection::new(t, parent))
    }

}
