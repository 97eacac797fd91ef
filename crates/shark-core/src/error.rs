//! Error types for shark-core

use thiserror::Error;

/// Result type alias using shark-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown template type
    #[error("Unknown template type: {value}. Available types: full, web, npm")]
    InvalidTemplateType { value: String },

    /// Failed to spawn an external program
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid template type error
    pub fn invalid_template_type(value: impl Into<String>) -> Self {
        Self::InvalidTemplateType {
            value: value.into(),
        }
    }

    /// Create a spawn error
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }
}
