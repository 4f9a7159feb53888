use crate::core::Point3D;
use crate::core::{Matrix4D, Normal3D, Vector3D};

#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3D,
    // a ray should be normalised when created, but may be stretched or squashed
    pub direction: Vector3D,
}

impl Ray {
    pub fn new(origin: Point3D, direction: Normal3D) -> Self {
        Ray {
            origin,
            direction: direction.into(),
        }
    }

    pub fn position(&self, time: f64) -> Point3D {
        self.origin + self.direction * time
    }

    pub fn transformed(&self, transformation: &Matrix4D) -> Self {
        let (x, y, z, _) = transformation * self.origin;
        let origin = Point3D::new(x, y, z);

        let (x, y, z, _) = transformation * self.direction;
        let direction = Vector3D::new(x, y, z);

        Ray { origin, direction }
    }
}
