use crate::core::Point3D;
use approx::AbsDiffEq;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A free vector - may have any magnitude, including zero.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Vector3D(f64, f64, f64);

/// A vector that is always unit length. Only constructible via normalisation, so any `Normal3D`
/// in scope is known to have magnitude 1 without re-checking.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Normal3D(f64, f64, f64);

pub trait VectorMaths: Sized + Copy + Clone {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;

    fn magnitude(&self) -> f64;
    fn normalised(&self) -> Normal3D;

    fn dot<V: VectorMaths>(&self, other: V) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    fn cross<V: VectorMaths>(&self, other: V) -> Vector3D {
        Vector3D::new(
            (self.y() * other.z()) - (self.z() * other.y()),
            (self.z() * other.x()) - (self.x() * other.z()),
            (self.x() * other.y()) - (self.y() * other.x()),
        )
    }

    fn reflect_through(&self, normal: Normal3D) -> Self;
}

impl Vector3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D(x, y, z)
    }
}

impl From<Normal3D> for Vector3D {
    fn from(normal: Normal3D) -> Self {
        Vector3D(normal.x(), normal.y(), normal.z())
    }
}

impl VectorMaths for Vector3D {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
    fn z(&self) -> f64 {
        self.2
    }

    fn magnitude(&self) -> f64 {
        (self.0.powi(2) + self.1.powi(2) + self.2.powi(2)).sqrt()
    }

    fn normalised(&self) -> Normal3D {
        let magnitude = self.magnitude();

        // a zero vector has no direction; returning a (0,0,0) "normal" is wrong, but there's no
        // meaningful unit vector to substitute, and a panic here would take down the whole render
        // over a single degenerate ray (e.g. a cone's axis-aligned ray)
        if magnitude <= f64::EPSILON {
            Normal3D::new(0.0, 0.0, 0.0)
        } else {
            Normal3D::new(self.x() / magnitude, self.y() / magnitude, self.z() / magnitude)
        }
    }

    fn reflect_through(&self, normal: Normal3D) -> Self {
        *self - (normal * 2.0 * self.dot(normal))
    }
}

impl Normal3D {
    pub const POSITIVE_X: Normal3D = Normal3D::new(1.0, 0.0, 0.0);
    pub const NEGATIVE_X: Normal3D = Normal3D::new(-1.0, 0.0, 0.0);
    pub const POSITIVE_Y: Normal3D = Normal3D::new(0.0, 1.0, 0.0);
    pub const NEGATIVE_Y: Normal3D = Normal3D::new(0.0, -1.0, 0.0);
    pub const POSITIVE_Z: Normal3D = Normal3D::new(0.0, 0.0, 1.0);
    pub const NEGATIVE_Z: Normal3D = Normal3D::new(0.0, 0.0, -1.0);

    pub(in crate::core) const fn new(x: f64, y: f64, z: f64) -> Self {
        Normal3D(x, y, z)
    }
}

impl VectorMaths for Normal3D {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
    fn z(&self) -> f64 {
        self.2
    }

    fn magnitude(&self) -> f64 {
        1.0
    }

    fn normalised(&self) -> Normal3D {
        *self
    }

    fn reflect_through(&self, normal: Normal3D) -> Self {
        (*self - (normal * 2.0 * self.dot(normal))).normalised()
    }
}

impl From<(f64, f64, f64)> for Vector3D {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3D(x, y, z)
    }
}

impl<V: VectorMaths> Add<V> for Vector3D {
    type Output = Vector3D;

    fn add(mut self, rhs: V) -> Self::Output {
        self.0 += rhs.x();
        self.1 += rhs.y();
        self.2 += rhs.z();

        self
    }
}

impl<V: VectorMaths> Add<V> for Normal3D {
    type Output = Vector3D;

    fn add(self, rhs: V) -> Self::Output {
        Vector3D::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl Add<Point3D> for Vector3D {
    type Output = Point3D;

    fn add(self, rhs: Point3D) -> Self::Output {
        Point3D::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl Add<Point3D> for Normal3D {
    type Output = Point3D;

    fn add(self, rhs: Point3D) -> Self::Output {
        Point3D::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl<V: VectorMaths> Sub<V> for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: V) -> Self::Output {
        Vector3D(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl<V: VectorMaths> Sub<V> for Normal3D {
    type Output = Vector3D;

    fn sub(self, rhs: V) -> Self::Output {
        Vector3D(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(mut self) -> Self::Output {
        self.0 = -self.0;
        self.1 = -self.1;
        self.2 = -self.2;

        self
    }
}

impl Neg for Normal3D {
    type Output = Normal3D;

    fn neg(mut self) -> Self::Output {
        self.0 = -self.0;
        self.1 = -self.1;
        self.2 = -self.2;

        self
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector3D(self.x() * rhs, self.y() * rhs, self.z() * rhs)
    }
}

impl Mul<f64> for Normal3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector3D(self.x() * rhs, self.y() * rhs, self.z() * rhs)
    }
}

impl Div<f64> for Vector3D {
    type Output = Vector3D;

    fn div(self, rhs: f64) -> Self::Output {
        Vector3D(self.x() / rhs, self.y() / rhs, self.z() / rhs)
    }
}

impl Div<f64> for Normal3D {
    type Output = Vector3D;

    fn div(self, rhs: f64) -> Self::Output {
        Vector3D(self.x() / rhs, self.y() / rhs, self.z() / rhs)
    }
}

impl AbsDiffEq for Normal3D {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f32::EPSILON as f64
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
            && self.1.abs_diff_eq(&other.1, epsilon)
            && self.2.abs_diff_eq(&other.2, epsilon)
    }
}

impl AbsDiffEq for Vector3D {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f32::EPSILON as f64
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
            && self.1.abs_diff_eq(&other.1, epsilon)
            && self.2.abs_diff_eq(&other.2, epsilon)
    }
}

#[cfg(test)]
mod test_utils {
    use super::*;
    use quickcheck::{Arbitrary, Gen};

    impl Arbitrary for Vector3D {
        fn arbitrary(g: &mut Gen) -> Self {
            Self::new(f64::arbitrary(g) % 10.0, f64::arbitrary(g) % 10.0, f64::arbitrary(g) % 10.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn dot_product_of_two_vectors() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(2.0, 3.0, 4.0);

        assert_eq!(a.dot(b), 20.0);
    }

    #[test]
    fn cross_product_of_two_vectors() {
        let a = Vector3D::new(1.0, 0.0, 0.0);
        let b = Vector3D::new(0.0, 1.0, 0.0);

        assert_abs_diff_eq!(a.cross(b), Vector3D::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(b.cross(a), Vector3D::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn reflecting_a_vector_approaching_at_45_degrees() {
        let v = Vector3D::new(1.0, -1.0, 0.0);
        let n = Normal3D::POSITIVE_Y;

        assert_abs_diff_eq!(v.reflect_through(n), Vector3D::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn normalising_a_zero_vector_does_not_panic() {
        let zero = Vector3D::new(0.0, 0.0, 0.0);
        assert_abs_diff_eq!(Vector3D::from(zero.normalised()), zero);
    }

    #[quickcheck_macros::quickcheck]
    fn normalised_vectors_have_unit_magnitude(v: Vector3D) -> bool {
        let normal = v.normalised();
        normal.magnitude().is_roughly_zero_of(1.0) || v.magnitude() <= f64::EPSILON
    }

    trait IsRoughlyZeroOf {
        fn is_roughly_zero_of(&self, target: f64) -> bool;
    }

    impl IsRoughlyZeroOf for f64 {
        fn is_roughly_zero_of(&self, target: f64) -> bool {
            (self - target).abs() < 1e-9
        }
    }
}
