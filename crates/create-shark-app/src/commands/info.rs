//! Environment diagnostics for `--info`

use anyhow::Result;
use shark_core::SystemProcessRunner;
use shark_doctor::{ToolchainChecker, GIT, NODE, NPM, YARNPKG};

use crate::output;

/// Print environment debug info and exit without running the pipeline
pub async fn run() -> Result<()> {
    output::header("Environment Info:");

    output::kv("OS", std::env::consts::OS);
    output::kv("Arch", std::env::consts::ARCH);

    let runner = SystemProcessRunner;
    let checker = ToolchainChecker::new(&runner);
    for tool in [NODE, NPM, YARNPKG, GIT] {
        let version = checker.detect_version(&tool).await;
        output::kv(tool.name, version.as_deref().unwrap_or("Not Found"));
    }

    Ok(())
}
