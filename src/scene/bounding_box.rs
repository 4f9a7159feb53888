use crate::core::{F64Ext, Point3D, Ray, Transform, VectorMaths};

/// An axis-aligned bounding box, used to skip expensive per-primitive intersection tests for
/// rays that don't come near a group of objects.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct BoundingBox {
    min: Point3D,
    max: Point3D,
}

impl BoundingBox {
    /// stands in for an actual infinity - an unbounded shape (e.g. a plane) needs a finite box to
    /// participate in splitting, so "infinite" bounds are clamped to this magnitude instead.
    pub const LIMIT: f64 = 1_000_000.0;

    pub fn new(min: Point3D, max: Point3D) -> Self {
        assert!(
            min.x() <= max.x() && min.y() <= max.y() && min.z() <= max.z(),
            "bounding box min must not exceed max on any axis"
        );

        BoundingBox { min, max }
    }

    pub fn infinite() -> Self {
        BoundingBox::new(
            Point3D::new(-Self::LIMIT, -Self::LIMIT, -Self::LIMIT),
            Point3D::new(Self::LIMIT, Self::LIMIT, Self::LIMIT),
        )
    }

    pub fn min(&self) -> Point3D {
        self.min
    }

    pub fn max(&self) -> Point3D {
        self.max
    }

    pub fn expand_to_fit(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(Point3D::min([self.min, other.min]), Point3D::max([self.max, other.max]))
    }

    pub fn contains(&self, point: Point3D) -> bool {
        point.x().is_roughly_gte(self.min.x())
            && point.x().is_roughly_lte(self.max.x())
            && point.y().is_roughly_gte(self.min.y())
            && point.y().is_roughly_lte(self.max.y())
            && point.z().is_roughly_gte(self.min.z())
            && point.z().is_roughly_lte(self.max.z())
    }

    pub fn excludes(&self, point: Point3D) -> bool {
        !self.contains(point)
    }

    pub fn fully_contains(&self, other: &BoundingBox) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    pub fn partially_excludes(&self, other: &BoundingBox) -> bool {
        !self.fully_contains(other)
    }

    pub fn transformed(&self, transform: Transform) -> BoundingBox {
        let matrix = transform.underlying();

        let corners = [
            Point3D::new(self.min.x(), self.min.y(), self.min.z()),
            Point3D::new(self.min.x(), self.min.y(), self.max.z()),
            Point3D::new(self.min.x(), self.max.y(), self.min.z()),
            Point3D::new(self.min.x(), self.max.y(), self.max.z()),
            Point3D::new(self.max.x(), self.min.y(), self.min.z()),
            Point3D::new(self.max.x(), self.min.y(), self.max.z()),
            Point3D::new(self.max.x(), self.max.y(), self.min.z()),
            Point3D::new(self.max.x(), self.max.y(), self.max.z()),
        ];

        let transformed_corners = corners.map(|corner| {
            let (x, y, z, _) = &matrix * corner;
            Point3D::new(x, y, z)
        });

        BoundingBox::new(Point3D::min(transformed_corners), Point3D::max(transformed_corners))
    }

    /// Slab method: intersect the ray against each axis' pair of planes and check the resulting
    /// intervals overlap.
    pub fn intersected_by(&self, ray: &Ray) -> bool {
        let (x_tmin, x_tmax) = Self::check_axis(ray.origin.x(), ray.direction.x(), self.min.x(), self.max.x());
        let (y_tmin, y_tmax) = Self::check_axis(ray.origin.y(), ray.direction.y(), self.min.y(), self.max.y());
        let (z_tmin, z_tmax) = Self::check_axis(ray.origin.z(), ray.direction.z(), self.min.z(), self.max.z());

        let tmin = x_tmin.max(y_tmin).max(z_tmin);
        let tmax = x_tmax.min(y_tmax).min(z_tmax);

        tmin <= tmax
    }

    fn check_axis(origin: f64, direction: f64, min: f64, max: f64) -> (f64, f64) {
        let tmin_numerator = min - origin;
        let tmax_numerator = max - origin;

        let (tmin, tmax) = if direction.abs() >= f64::EPSILON {
            (tmin_numerator / direction, tmax_numerator / direction)
        } else {
            (tmin_numerator * f64::INFINITY, tmax_numerator * f64::INFINITY)
        };

        if tmin > tmax {
            (tmax, tmin)
        } else {
            (tmin, tmax)
        }
    }

    /// Splits along the longest axis, down the middle.
    pub fn split(&self) -> (BoundingBox, BoundingBox) {
        let x_size = self.max.x() - self.min.x();
        let y_size = self.max.y() - self.min.y();
        let z_size = self.max.z() - self.min.z();

        let greatest = x_size.max(y_size).max(z_size);

        let (mid_min, mid_max) = if greatest == x_size {
            let mid = self.min.x() + x_size / 2.0;
            (
                Point3D::new(mid, self.min.y(), self.min.z()),
                Point3D::new(mid, self.max.y(), self.max.z()),
            )
        } else if greatest == y_size {
            let mid = self.min.y() + y_size / 2.0;
            (
                Point3D::new(self.min.x(), mid, self.min.z()),
                Point3D::new(self.max.x(), mid, self.max.z()),
            )
        } else {
            let mid = self.min.z() + z_size / 2.0;
            (
                Point3D::new(self.min.x(), self.min.y(), mid),
                Point3D::new(self.max.x(), self.max.y(), mid),
            )
        };

        let left = BoundingBox::new(self.min, mid_max);
        let right = BoundingBox::new(mid_min, self.max);

        (left, right)
    }
}
