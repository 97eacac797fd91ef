//! Definitions of the external tools the scaffold depends on

/// An external binary and how to ask it for its version
#[derive(Debug, Clone, Copy)]
pub struct ToolDefinition {
    /// Human-readable name
    pub name: &'static str,
    /// Binary to invoke
    pub command: &'static str,
    /// Arguments that print the version
    pub version_args: &'static [&'static str],
}

/// Node runtime the scaffolded project runs on
pub const NODE: ToolDefinition = ToolDefinition {
    name: "Node",
    command: "node",
    version_args: &["--version"],
};

/// Default package manager
pub const NPM: ToolDefinition = ToolDefinition {
    name: "npm",
    command: "npm",
    version_args: &["--version"],
};

/// Alternate package manager; `yarnpkg` is the collision-free alias the
/// yarn installer ships alongside `yarn`
pub const YARNPKG: ToolDefinition = ToolDefinition {
    name: "Yarn",
    command: "yarnpkg",
    version_args: &["--version"],
};

/// Version-control binary used for template acquisition
pub const GIT: ToolDefinition = ToolDefinition {
    name: "git",
    command: "git",
    version_args: &["--version"],
};
