//! Custom error types for the unzip and grayscale pipeline

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Pipeline error types
#[derive(Debug)]
pub enum PipelineError {
    /// I/O error
    IoError(io::Error),
    /// The archive could not be opened (missing, corrupt, wrong format)
    ArchiveOpenError { path: PathBuf, reason: String },
    /// A single archive entry could not be read
    ArchiveEntryError { index: usize, reason: String },
    /// Image data could not be decoded
    DecodeError { path: PathBuf, reason: String },
    /// Image data could not be encoded or written
    EncodeError { path: PathBuf, reason: String },
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::IoError(e) => write!(f, "I/O error: {}", e),
            PipelineError::ArchiveOpenError { path, reason } => {
                write!(f, "Cannot open archive {}: {}", path.display(), reason)
            }
            PipelineError::ArchiveEntryError { index, reason } => {
                write!(f, "Cannot read archive entry #{}: {}", index, reason)
            }
            PipelineError::DecodeError { path, reason } => {
                write!(f, "Cannot decode image {}: {}", path.display(), reason)
            }
            PipelineError::EncodeError { path, reason } => {
                write!(f, "Cannot encode image {}: {}", path.display(), reason)
            }
            PipelineError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PipelineError {
    fn from(error: io::Error) -> Self {
        PipelineError::IoError(error)
    }
}

impl From<String> for PipelineError {
    fn from(msg: String) -> Self {
        PipelineError::GenericError(msg)
    }
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
