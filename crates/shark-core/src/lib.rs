//! # shark-core
//!
//! Core library for the create-shark-app CLI providing:
//! - Shared type definitions (template types, package managers, answers)
//! - Error types
//! - The process-invocation capability used to shell out to git and npm/yarn

pub mod error;
pub mod process;
pub mod types;

pub use error::{Error, Result};
pub use process::{ProcessOutput, ProcessRunner, SystemProcessRunner};
pub use types::{ConfigAnswers, PackageManager, ProjectRequest, TemplateType};
