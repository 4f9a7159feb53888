use crate::core::{Colour, Point3D};

/// A single point light source - has no size or shape, so casts hard-edged shadows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Point3D,
    pub intensity: Colour,
}

impl Light {
    pub fn point(intensity: Colour, position: Point3D) -> Self {
        Light { position, intensity }
    }
}
