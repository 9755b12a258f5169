use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures surfaced by [`Base64Converter`](crate::Base64Converter).
///
/// OS-level failures (permission denied, disk full) pass through as [`Io`]
/// unchanged; the converter never retries or reclassifies them.
///
/// [`Io`]: ConvertError::Io
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A required value was neither passed as an argument nor stored on the
    /// converter. Carries the name of the missing value.
    #[error("missing input: no {0} was given and none is stored")]
    MissingInput(&'static str),

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The source path is not a regular file, or the supplied text failed
    /// base64 decoding.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
