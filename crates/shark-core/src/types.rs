//! Shared type definitions for the scaffolding pipeline

use std::fmt;
use std::str::FromStr;

use camino::Utf8PathBuf;

use crate::error::Error;

/// Host all template repositories and generated project remotes live on
pub const GIT_HOST: &str = "git@git.yx.netease.com";

/// Template repository variant selected at scaffold time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateType {
    /// Default template, includes server & web
    Full,
    /// Web-only template
    Web,
    /// Server & web template for packages
    Npm,
}

impl TemplateType {
    /// All known template types, in help-text order
    pub const ALL: [TemplateType; 3] = [Self::Full, Self::Web, Self::Npm];

    /// Fixed git URL of the template repository for this type
    pub fn clone_url(&self) -> String {
        let repo = match self {
            Self::Full => "react-template-full",
            Self::Web => "react-template-web",
            Self::Npm => "react-template-npm",
        };
        format!("{GIT_HOST}:sharkR/{repo}.git")
    }

    /// Path of the application config file, relative to the project root
    pub fn conf_relative_path(&self) -> &'static str {
        match self {
            Self::Web => "web/shark-conf.js",
            Self::Full | Self::Npm => "shark-conf.js",
        }
    }

    /// One-line description used in help output
    pub fn description(&self) -> &'static str {
        match self {
            Self::Full => "Default template, include server & web",
            Self::Web => "only web template",
            Self::Npm => "include server & web for package",
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Full => "full",
            Self::Web => "web",
            Self::Npm => "npm",
        };
        write!(f, "{name}")
    }
}

impl FromStr for TemplateType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "web" => Ok(Self::Web),
            "npm" => Ok(Self::Npm),
            other => Err(Error::invalid_template_type(other)),
        }
    }
}

/// Package manager driving the final dependency install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    /// Binary name to spawn for the install step
    pub fn command(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Immutable description of one scaffolding run, built once from CLI
/// input and threaded through every pipeline stage.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    /// Project directory name as given on the command line
    pub name: String,
    /// Absolute path of the target directory
    pub root: Utf8PathBuf,
    /// Selected template variant
    pub template_type: TemplateType,
    /// Print additional logs
    pub verbose: bool,
    /// Force npm even when yarn is available
    pub use_npm: bool,
    /// Request yarn Plug'n'Play linking
    pub use_pnp: bool,
    /// Non-standard scripts package requested with --scripts-version
    pub scripts_version: Option<String>,
}

/// Configuration values collected interactively, each defaulting to the
/// empty string. Written once into the generated config files and the
/// git remote URL, never re-read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigAnswers {
    pub group: String,
    pub product: String,
    pub context_path: String,
    pub service_code: String,
}

impl ConfigAnswers {
    /// Remote URL for the re-initialized repository. Empty answers
    /// produce empty path segments, accepted as-is.
    pub fn origin_url(&self) -> String {
        format!("{GIT_HOST}:{}/{}.git", self.group, self.product)
    }
}
