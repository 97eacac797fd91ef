//! Dependency installation
//!
//! The install runs with stdio inherited from the parent terminal so the
//! user observes the real installer's output and can interrupt it. A
//! failed install is a warning, not an error: the scaffolded project
//! stays on disk and the user installs manually.

use camino::Utf8Path;
use shark_core::{PackageManager, ProcessRunner, TemplateType};
use tracing::info;

use crate::error::Result;

/// Install command for the chosen package manager and template type.
/// Returns the program and its arguments.
pub fn install_command(
    package_manager: PackageManager,
    template_type: TemplateType,
) -> (&'static str, Vec<&'static str>) {
    match package_manager {
        PackageManager::Yarn => ("yarn", vec![]),
        PackageManager::Npm => match template_type {
            // the web template installs directly; the full/npm templates
            // drive their server+web sub-installs through a script
            TemplateType::Web => ("npm", vec!["install"]),
            TemplateType::Full | TemplateType::Npm => ("npm", vec!["run", "install"]),
        },
    }
}

/// Spawn the install in `root`, streaming its output to the terminal.
/// Returns whether the installer exited successfully.
pub async fn run_install(
    runner: &dyn ProcessRunner,
    package_manager: PackageManager,
    template_type: TemplateType,
    root: &Utf8Path,
) -> Result<bool> {
    let (program, args) = install_command(package_manager, template_type);
    info!("Installing packages with: {} {}", program, args.join(" "));

    let success = runner.run_inherited(program, &args, Some(root)).await?;
    Ok(success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yarn_installs_without_args() {
        for t in TemplateType::ALL {
            let (program, args) = install_command(PackageManager::Yarn, t);
            assert_eq!(program, "yarn");
            assert!(args.is_empty());
        }
    }

    #[test]
    fn test_npm_web_uses_plain_install() {
        let (program, args) = install_command(PackageManager::Npm, TemplateType::Web);
        assert_eq!(program, "npm");
        assert_eq!(args, vec!["install"]);
    }

    #[test]
    fn test_npm_full_and_npm_use_install_script() {
        for t in [TemplateType::Full, TemplateType::Npm] {
            let (program, args) = install_command(PackageManager::Npm, t);
            assert_eq!(program, "npm");
            assert_eq!(args, vec!["run", "install"]);
        }
    }
}
