//! STEP file import (not yet implemented).

use std::path::Path;

use sdfx_mesh::Triangle3;

use crate::error::StepError;

/// Load a STEP file and convert it to a triangle mesh.
///
/// Always returns [`StepError::ImportUnsupported`]. Import needs a
/// Part 21 parser, B-rep extraction, and tessellation back to triangles;
/// none of that exists yet.
pub fn read_step(path: impl AsRef<Path>) -> Result<Vec<Triangle3>, StepError> {
    let _ = path;
    Err(StepError::ImportUnsupported)
}
