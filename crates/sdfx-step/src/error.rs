//! Error types for STEP file operations.

use thiserror::Error;

/// Errors that can occur during STEP file operations.
///
/// Mesh conversion and entity serialization are infallible; only the file
/// layer and the (stubbed) importer can fail.
#[derive(Error, Debug)]
pub enum StepError {
    /// I/O error creating, writing, or flushing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// STEP import is a future collaborator; the interface exists but has
    /// no implementation yet.
    #[error("STEP import is not yet implemented")]
    ImportUnsupported,
}
