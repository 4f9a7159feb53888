use crate::core::{Matrix4D, Point3D, Vector3D, VectorMaths};
use std::ops::Mul;

/// A fluent builder over `Matrix4D`, accumulating individual transformations (translate, scale,
/// rotate, shear) into a single matrix, applied in the order the methods are called - i.e.
/// `Transform::identity().translate_x(1.0).scale_all(2.0)` scales first, then translates, just
/// like reading the method chain top to bottom.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Transform {
    forward: Matrix4D,
}

impl Transform {
    pub fn identity() -> Self {
        Transform {
            forward: Matrix4D::identity(),
        }
    }

    pub fn translate_x(self, delta: f64) -> Self {
        self.translate(delta, 0.0, 0.0)
    }

    pub fn translate_y(self, delta: f64) -> Self {
        self.translate(0.0, delta, 0.0)
    }

    pub fn translate_z(self, delta: f64) -> Self {
        self.translate(0.0, 0.0, delta)
    }

    fn translate(self, x: f64, y: f64, z: f64) -> Self {
        self.compose(Matrix4D::new(
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ))
    }

    pub fn scale_x(self, factor: f64) -> Self {
        self.scale(factor, 1.0, 1.0)
    }

    pub fn scale_y(self, factor: f64) -> Self {
        self.scale(1.0, factor, 1.0)
    }

    pub fn scale_z(self, factor: f64) -> Self {
        self.scale(1.0, 1.0, factor)
    }

    pub fn scale_all(self, factor: f64) -> Self {
        self.scale(factor, factor, factor)
    }

    fn scale(self, x: f64, y: f64, z: f64) -> Self {
        self.compose(Matrix4D::new(
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ))
    }

    pub fn rotate_x(self, radians: f64) -> Self {
        self.compose(Matrix4D::new(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, radians.cos(), -radians.sin(), 0.0],
            [0.0, radians.sin(), radians.cos(), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ))
    }

    pub fn rotate_y(self, radians: f64) -> Self {
        self.compose(Matrix4D::new(
            [radians.cos(), 0.0, radians.sin(), 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-radians.sin(), 0.0, radians.cos(), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ))
    }

    pub fn rotate_z(self, radians: f64) -> Self {
        self.compose(Matrix4D::new(
            [radians.cos(), -radians.sin(), 0.0, 0.0],
            [radians.sin(), radians.cos(), 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn shear(self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        self.compose(Matrix4D::new(
            [1.0, xy, xz, 0.0],
            [yx, 1.0, yz, 0.0],
            [zx, zy, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ))
    }

    fn compose(self, next: Matrix4D) -> Self {
        Transform {
            forward: next * self.forward,
        }
    }

    /// Builds the transform taking the world's default eye position and orientation to a camera
    /// positioned at `from`, looking towards `to`, with `up` defining which way is upright.
    pub fn view_transform(from: Point3D, to: Point3D, up: Vector3D) -> Self {
        let forward = (to - from).normalised();
        let up_normalised = up.normalised();
        let left = forward.cross(up_normalised);
        let true_up = left.cross(forward);

        let orientation = Matrix4D::new(
            [left.x(), left.y(), left.z(), 0.0],
            [true_up.x(), true_up.y(), true_up.z(), 0.0],
            [-forward.x(), -forward.y(), -forward.z(), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        );

        Transform {
            forward: orientation,
        }
        .translate(-from.x(), -from.y(), -from.z())
    }

    pub fn underlying(&self) -> Matrix4D {
        self.forward
    }

    /// Panics if the composed transform is degenerate (zero determinant) - every method on this
    /// builder composes well-conditioned elementary transforms, so the only way to reach a
    /// singular matrix is scaling an axis to exactly zero. Callers building a `Transform` from
    /// untrusted input (e.g. a scene description) should check [`Transform::is_invertible`]
    /// first rather than relying on this panic as validation.
    pub fn inverse(&self) -> Matrix4D {
        self.forward
            .inverse()
            .expect("transform is degenerate and has no inverse")
    }

    /// Whether this transform has an inverse, i.e. whether calling [`Transform::inverse`] would
    /// panic.
    pub fn is_invertible(&self) -> bool {
        self.forward.inverse().is_some()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::identity()
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    /// Composes two transforms so that `self`'s transformation is applied first, `rhs` second -
    /// i.e. `rhs * self` reads as "apply self, then rhs".
    fn mul(self, rhs: Transform) -> Self::Output {
        Transform {
            forward: rhs.forward * self.forward,
        }
    }
}
