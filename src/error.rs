//! Crate-wide error type for failures that originate in scene description handling rather than
//! in the numeric core (which prevents invalid tuple operations at compile time and otherwise
//! absorbs errors locally, per the rendering pipeline's "never report, clamp instead" policy).
//!
//! OBJ parsing and file IO failures are not represented here; they propagate as plain
//! `anyhow::Error` context chains, since they carry no domain-specific data worth matching on.

use std::fmt;

#[derive(Debug)]
pub enum DescriptionError {
    /// a named shape/group/csg/OBJ-group reference was missing when required
    UnknownReference(String),
    /// the scene document failed schema validation; each entry is one violation
    Validation(Vec<String>),
}

impl fmt::Display for DescriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptionError::UnknownReference(name) => write!(f, "no shape, group, csg or file named {:?} is defined", name),
            DescriptionError::Validation(violations) => {
                writeln!(f, "scene description failed validation:")?;
                for violation in violations {
                    writeln!(f, "  - {}", violation)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DescriptionError {}
