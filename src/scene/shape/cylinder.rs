use crate::core::F64Ext;
use crate::core::Ray;
use crate::core::{Normal3D, Point3D, Vector3D, VectorMaths};
use crate::scene::bounding_box::BoundingBox;
use crate::scene::intersection::{Intersection, Intersections};
use crate::scene::Object;
use crate::scene::Shape;

/// An infinite cylinder centred on the y axis, with a constant radius of 1
///
/// May be truncated at either end to make it finite.
/// May be capped, otherwise the ends will be open, and the inner face will be visible
#[derive(Debug, PartialEq)]
pub struct Cylinder {
    max_y: f64,
    min_y: f64,
    capped: bool,
}

impl Shape for Cylinder {
    fn object_bounds(&self) -> BoundingBox {
        BoundingBox::new(
            Point3D::new(-1.0, self.min_y, -1.0),
            Point3D::new(1.0, self.max_y, 1.0),
        )
    }

    fn object_normal_at(&self, point: Point3D, _hit: Option<&Intersection>) -> Normal3D {
        if self.capped && point.y().is_roughly_gte(self.max_y) {
            Normal3D::POSITIVE_Y
        } else if self.capped && point.y().is_roughly_lte(self.min_y) {
            Normal3D::NEGATIVE_Y
        } else {
            Vector3D::new(point.x(), 0.0, point.z()).normalised()
        }
    }

    fn object_intersect<'parent>(
        &self,
        parent: &'parent Object,
        ray: Ray,
    ) -> Intersections<'parent> {
        let intersects_cap = |t: f64| {
            let x = ray.origin.x() + t * ray.direction.x();
            let z = ray.origin.z() + t * ray.direction.z();

            (x.powi(2) + z.powi(2)).is_roughly_lte(1.0)
        };

        let cap_intersections = if self.capped {
            let mut ts = Intersections::empty();
            // check bottom cap
            let t = (self.min_y - ray.origin.y()) / ray.direction.y();

            if intersects_cap(t) {
                ts.push(Intersection::new(t, parent));
            }

            // check top cap
            let t = (self.max_y - ray.origin.y()) / ray.direction.y();

            if intersects_cap(t) {
                ts.push(Intersection::new(t, parent));
            }

            ts
        } else {
            Intersections::empty()
        };

        let a = ray.direction.x().powi(2) + ray.direction.z().powi(2);

        if a.abs() <= f64::EPSILON {
            return cap_intersections;
        };

        let b = 2.0 * ray.origin.x() * ray.direction.x() + 2.0 * ray.origin.z() * ray.direction.z();
        let c = ray.origin.x().powi(2) + ray.origin.z().powi(2) - 1.0;

        let discriminant = b.powi(2) - 4.0 * a * c;

        if discriminant < 0.0 {
            return cap_intersections;
        };

        let first = (-b - discriminant.sqrt()) / (2.0 * a);
        let second = (-b + discriminant.sqrt()) / (2.0 * a);

        let y_first = ray.origin.y() + ray.direction.y() * first;
        let y_second = ray.origin.y() + ray.direction.y() * second;

        let mut ts = Intersections::empty();
        if y_first > self.min_y && y_first < self.max_y {
            ts.push(Intersection::new(first, parent));
        }

        if y_second > self.min_y && y_second < self.max_y {
            ts.push(Intersection::new(second, parent));
        }

        ts.join(cap_intersections)
    }

}

pub struct CylinderBuilder {
    min_y: f64,
    max_y: f64,
    capped: bool,
}

impl CylinderBuilder {
    pub(in crate::scene) fn new() -> Self {
        CylinderBuilder {
            min_y: -BoundingBox::LIMIT,
            max_y: BoundingBox::LIMIT,
            capped: false,
        }
    }

    pub fn min_y(mut self, min_y: f64) -> Self {
        self.min_y = min_y;
        self
    }

    pub fn max_y(mut self, max_y: f64) -> Self {
        self.max_y = max_y;
        self
    }

    pub fn capped(mut self) -> Self {
        self.capped = true;
        self
    }

    pub fn build(self) -> Object {
        Object::from_shape(Box::new(Cylinder {
            min_y: self.min_y,
            max_y: self.max_y,
            capped: self.capped,
        }))
    }
}
