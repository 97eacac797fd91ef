//! # shark-doctor
//!
//! Toolchain preflight for the create-shark-app CLI:
//! - tool definitions for the binaries the scaffold depends on
//! - version detection and minimum-version checks (node, npm, yarn)
//! - yarn availability and Plug'n'Play support detection
//! - npm working-directory consistency check

pub mod checker;
pub mod npm_cwd;
pub mod tool;

pub use checker::{ToolchainChecker, VersionCheck, MIN_NODE, MIN_NPM, MIN_YARN_PNP};
pub use npm_cwd::{npm_can_read_cwd, CwdCheck, WINDOWS_CWD_REMEDIATION};
pub use tool::{ToolDefinition, GIT, NODE, NPM, YARNPKG};
