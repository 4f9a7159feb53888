//! Scene description: a JSON document naming a camera, lights, and any mix of primitive shapes,
//! OBJ file imports, groups and CSGs, tied together by name references. See [`build`] for how a
//! parsed [`Description`] becomes a `World`/`Camera` pair.

mod model;
pub use model::Description;

mod build;
pub use build::build;

use crate::error::DescriptionError;
use anyhow::{Context, Result};


/// Parses a scene description from its JSON text.
pub fn parse(input: &str) -> Result<Description> {
    serde_json::from_str(input).context("scene description does not match the expected schema")
}

const SHAPE_TYPES: &[&str] = &["sphere", "glassSphere", "plane", "cube", "cylinder", "cone"];
const CSG_OPERATIONS: &[&str] = &["union", "intersection", "difference"];

/// Structural checks beyond what `serde` already enforces by deserializing into [`Description`]
/// in the first place (every required field was present and of the right shape). Collects every
/// violation found rather than stopping at the first, so the CLI can print the whole list.
pub fn validate(description: &Description) -> std::result::Result<(), DescriptionError> {
    let mut violations = vec![];

    if description.camera.width == 0 {
        violations.push("camera width must be greater than zero".to_string());
    }
    if description.camera.height == 0 {
        violations.push("camera height must be greater than zero".to_string());
    }

    for shape in &description.shapes {
        if !SHAPE_TYPES.contains(&shape.shape_type.as_str()) {
            violations.push(format!("shape {:?} has unknown type {:?}", shape.name, shape.shape_type));
        }
    }

    for csg in &description.csgs {
        let name = csg.name.as_deref().unwrap_or("<unnamed>");
        if !CSG_OPERATIONS.contains(&csg.operation.as_str()) {
            violations.push(format!("csg {:?} has unknown operation {:?}", name, csg.operation));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(DescriptionError::Validation(violations))
    }
}
