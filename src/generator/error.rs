//! Error types for generation.

use std::path::PathBuf;

use thiserror::Error;

use crate::base::ResourceUri;

/// Errors a generator or a file-system access can report.
///
/// Cancellation is not an error: a generator that observes it just returns.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// IO error while reading or writing an output file.
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output paths must be relative and stay inside the output root.
    #[error("invalid output path '{0}'")]
    InvalidPath(String),

    /// The requested file does not exist.
    #[error("file not found: {0}")]
    NotFound(String),

    /// The generator itself failed for one input.
    #[error("generation failed for {uri}: {message}")]
    Failed { uri: ResourceUri, message: String },
}

impl GeneratorError {
    /// Create an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a generator failure for `uri`.
    pub fn failed(uri: &ResourceUri, message: impl Into<String>) -> Self {
        Self::Failed {
            uri: uri.clone(),
            message: message.into(),
        }
    }
}
