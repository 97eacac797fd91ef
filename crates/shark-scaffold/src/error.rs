//! Error types for shark-scaffold

use thiserror::Error;

/// Result type alias using shark-scaffold's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Template clone failed
    #[error("Failed to clone template repository: {stderr}")]
    CloneFailed { stderr: String },

    /// Git operation failed
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    /// Embedded config template missing from the binary
    #[error("Bundled config template not found: {name}")]
    TemplateNotFound { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error(transparent)]
    Core(#[from] shark_core::Error),
}

impl Error {
    /// Create a clone failed error
    pub fn clone_failed(stderr: impl Into<String>) -> Self {
        Self::CloneFailed {
            stderr: stderr.into(),
        }
    }

    /// Create a git operation error
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    /// Create a template not found error
    pub fn template_not_found(name: impl Into<String>) -> Self {
        Self::TemplateNotFound { name: name.into() }
    }
}
