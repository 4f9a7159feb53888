use crate::core::Colour;
use crate::core::F64Ext;
use crate::core::Point3D;
use crate::core::Transform;

use Kind::{Checkers, Gradient, Ring, Striped};

#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    kind: Kind,
    transform: Transform,
}

#[derive(Clone, Debug, PartialEq)]
enum Kind {
    Striped(Colour, Colour),
    Gradient { from: Colour, delta: Colour },
    Ring(Colour, Colour),
    Checkers(Colour, Colour),
}

impl Pattern {
    pub fn striped(primary: Colour, secondary: Colour) -> Self {
        Pattern {
            kind: Striped(primary, secondary),
            transform: Transform::identity(),
        }
    }

    pub fn gradient(from: Colour, to: Colour) -> Self {
        Pattern {
            kind: Gradient {
                from,
                delta: to - from,
            },
            transform: Transform::identity(),
        }
    }

    pub fn ring(primary: Colour, secondary: Colour) -> Self {
        Pattern {
            kind: Ring(primary, secondary),
            transform: Transform::identity(),
        }
    }

    pub fn checkers(primary: Colour, secondary: Colour) -> Self {
        Pattern {
            kind: Checkers(primary, secondary),
            transform: Transform::identity(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn colour_at(&self, object_point: Point3D) -> Colour {
        let inverse = self.transform.inverse();

        let (x, y, z, _) = &inverse * object_point;
        let (x, y, z) = (nudge(x), nudge(y), nudge(z));

        match &self.kind {
            Striped(primary, _) if x.floor().floor_mod(2.0) == 0.0 => *primary,
            Striped(_, secondary) => *secondary,
            Gradient { from, delta } => *from + (*delta * x.fract()),
            Ring(primary, _) if (x.powi(2) + z.powi(2)).sqrt().floor().floor_mod(2.0) == 0.0 => *primary,
            Ring(_, secondary) => *secondary,
            Checkers(primary, _) if (x.floor() + y.floor() + z.floor()).floor_mod(2.0) == 0.0 => *primary,
            Checkers(_, secondary) => *secondary,
        }
    }
}

/// Adjusts very small fractions so that flooring effectively rounds to the nearest integer,
/// rather than always rounding down - prevents acne caused by floating point errors (e.g.
/// `-f64::EPSILON` should ideally floor to `0.0`, rather than `-1.0`).
fn nudge(f: f64) -> f64 {
    let delta = f.ceil() - f;

    if delta != 0.0 && delta.is_roughly_zero() {
        f + crate::core::EPSILON
    } else {
        f
    }
}
