//! Version detection and minimum-version checks
//!
//! Version strings are extracted from whatever the tool prints (with or
//! without a `v` prefix, with trailing build metadata) and compared with
//! semver. Unparsable versions never produce false negatives.

use std::sync::LazyLock;

use regex::Regex;
use shark_core::ProcessRunner;
use tracing::debug;

use crate::tool::{ToolDefinition, NODE, NPM, YARNPKG};

/// Minimum node version the templates support
pub const MIN_NODE: &str = "8.10.0";

/// Minimum npm version the templates support
pub const MIN_NPM: &str = "5.0.0";

/// First yarn release with working Plug'n'Play support
pub const MIN_YARN_PNP: &str = "1.12.0";

/// Extracts a version number from command output
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?(\d+\.\d+(?:\.\d+)?)").expect("version regex is valid"));

/// Strips `-` / `+` suffixes yarn nightlies append to their version
static YARN_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)[-+].+$").expect("yarn suffix regex is valid"));

/// Result of querying one tool's version against a minimum
#[derive(Debug, Clone)]
pub struct VersionCheck {
    /// Detected version, if the tool answered
    pub version: Option<String>,
    /// Whether the detected version meets the minimum
    pub meets_minimum: bool,
}

/// Runs toolchain checks through the process-invocation capability
pub struct ToolchainChecker<'a> {
    runner: &'a dyn ProcessRunner,
}

impl<'a> ToolchainChecker<'a> {
    pub fn new(runner: &'a dyn ProcessRunner) -> Self {
        Self { runner }
    }

    /// Ask a tool for its version
    pub async fn detect_version(&self, tool: &ToolDefinition) -> Option<String> {
        let output = self
            .runner
            .run(tool.command, tool.version_args, None)
            .await
            .ok()?;

        if !output.success {
            return None;
        }

        // some tools print the version to stderr
        let text = if output.stdout.trim().is_empty() {
            output.stderr
        } else {
            output.stdout
        };
        parse_version(&text)
    }

    /// Whether yarn is installed and answering; decides the default
    /// package manager
    pub async fn should_use_yarn(&self) -> bool {
        if which::which(YARNPKG.command).is_err() {
            return false;
        }
        matches!(
            self.runner.run(YARNPKG.command, YARNPKG.version_args, None).await,
            Ok(output) if output.success
        )
    }

    /// Node version against the supported minimum
    pub async fn check_node(&self) -> VersionCheck {
        let version = self.detect_version(&NODE).await;
        let meets_minimum = version
            .as_deref()
            .is_some_and(|v| version_gte(v, MIN_NODE));
        VersionCheck {
            version,
            meets_minimum,
        }
    }

    /// npm version against the supported minimum
    pub async fn check_npm(&self) -> VersionCheck {
        let version = self.detect_version(&NPM).await;
        let meets_minimum = version
            .as_deref()
            .is_some_and(|v| version_gte(v, MIN_NPM));
        VersionCheck {
            version,
            meets_minimum,
        }
    }

    /// Yarn version against the first Plug'n'Play-capable release.
    /// Nightly suffixes are stripped before comparison so a
    /// `1.22.0-20200101.1242` build passes.
    pub async fn check_yarn_pnp(&self) -> VersionCheck {
        let version = self.detect_version(&YARNPKG).await;
        let meets_minimum = version
            .as_deref()
            .map(trim_yarn_version)
            .is_some_and(|v| version_gte(&v, MIN_YARN_PNP));
        VersionCheck {
            version,
            meets_minimum,
        }
    }

    /// Whether yarn is configured against the default registry.
    /// Best-effort: any failure yields `None` and is ignored.
    pub async fn yarn_uses_default_registry(&self) -> Option<bool> {
        let output = self
            .runner
            .run(YARNPKG.command, &["config", "get", "registry"], None)
            .await
            .ok()?;
        if !output.success {
            return None;
        }
        let registry = output.stdout_trimmed();
        debug!("yarn registry: {}", registry);
        Some(registry == "https://registry.yarnpkg.com")
    }
}

/// Pull a version number out of arbitrary command output
pub fn parse_version(text: &str) -> Option<String> {
    VERSION_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Strip nightly/build suffixes from a yarn version string
pub fn trim_yarn_version(version: &str) -> String {
    YARN_SUFFIX_RE
        .captures(version)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| version.to_string())
}

/// Semver comparison that never produces a false negative: versions
/// that do not parse are treated as satisfying the minimum.
pub fn version_gte(actual: &str, required: &str) -> bool {
    match (
        semver::Version::parse(actual),
        semver::Version::parse(required),
    ) {
        (Ok(actual), Ok(required)) => actual >= required,
        _ => true,
    }
}
