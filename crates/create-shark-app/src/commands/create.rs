//! The scaffolding pipeline
//!
//! A strictly sequential run: name validation, directory safety,
//! template clone + history strip, toolchain preflight, interactive
//! configuration and substitution, git re-init + remote, and finally
//! the dependency install with inherited terminal I/O.

use anyhow::{Context, Result};
use camino::Utf8Path;
use console::style;
use dialoguer::Input;
use shark_core::{ConfigAnswers, PackageManager, ProjectRequest, SystemProcessRunner};
use shark_doctor::{
    npm_can_read_cwd, CwdCheck, ToolchainChecker, MIN_NODE, WINDOWS_CWD_REMEDIATION,
};
use shark_scaffold::{config, git, install, name, safety};
use tracing::debug;

use crate::output;

/// Run one scaffolding pipeline to completion
pub async fn run(request: ProjectRequest) -> Result<()> {
    let runner = SystemProcessRunner;

    check_app_name(&request.name);

    std::fs::create_dir_all(&request.root)
        .with_context(|| format!("Failed to create directory {}", request.root))?;
    ensure_safe_directory(&request.root)?;

    output::info(&format!(
        "Creating a new React app in {}.",
        style(request.root.as_str()).green()
    ));
    println!();

    if let Some(version) = &request.scripts_version {
        debug!("Scripts version override recorded: {}", version);
    }

    let spinner = output::spinner("Cloning template repository...");
    let cloned = git::clone_template(&runner, request.template_type, &request.root).await;
    spinner.finish_and_clear();
    cloned?;
    git::strip_history(&request.root)?;
    output::success("Template cloned");

    let package_manager = preflight(&runner, &request).await;

    let answers = collect_answers(&request)?;

    let conf_path = config::write_app_config(&request.root, request.template_type, &answers)?;
    let ci_path = config::write_ci_config(&request.root, &answers)?;
    debug!("Wrote {} and {}", conf_path, ci_path);

    git::init_repository(&runner, &request.root).await?;
    git::add_origin_remote(&runner, &request.root, &answers.origin_url()).await?;

    println!("Installing packages. This might take a couple of minutes.");
    println!();
    let installed = install::run_install(
        &runner,
        package_manager,
        request.template_type,
        &request.root,
    )
    .await?;

    if !installed {
        let (program, args) = install::install_command(package_manager, request.template_type);
        println!();
        output::warning(&format!(
            "{} {} failed, Please install manually",
            style(program).red(),
            style(args.join(" ")).red()
        ));
    }

    println!();
    output::success(&format!(
        "Created {} at {}",
        request.name, request.root
    ));
    Ok(())
}

/// Validate the project name; itemized report and exit 1 on failure,
/// before anything touches the filesystem.
fn check_app_name(app_name: &str) {
    let validation = name::validate_app_name(app_name);
    if !validation.valid_for_new_packages() {
        output::error(&format!(
            "Could not create a project called {} because of npm naming restrictions:",
            style(format!("\"{app_name}\"")).red()
        ));
        for problem in validation.errors.iter().chain(validation.warnings.iter()) {
            eprintln!("  {}  {}", style("*").red(), problem);
        }
        std::process::exit(1);
    }

    if let Some(dependencies) = name::dependency_collision(app_name) {
        output::error(&format!(
            "We cannot create a project called {} because a dependency with the same name exists.\n\
             Due to the way npm works, the following names are not allowed:\n",
            style(app_name).green()
        ));
        for dependency in dependencies {
            eprintln!("  {}", style(dependency).cyan());
        }
        eprintln!();
        eprintln!("{}", style("Please choose a different project name.").red());
        std::process::exit(1);
    }
}

/// Fail with the conflict list when the directory is not safe to use;
/// otherwise clean up logs from a previous failed install.
fn ensure_safe_directory(root: &Utf8Path) -> Result<()> {
    let conflicts = safety::conflicting_entries(root)?;
    if !conflicts.is_empty() {
        output::error(&format!(
            "The directory {} contains files that could conflict:",
            style(root.as_str()).green()
        ));
        println!();
        for file in &conflicts {
            println!("  {file}");
        }
        println!();
        println!("Either try using a new directory name, or remove the files listed above.");
        std::process::exit(1);
    }

    let removed = safety::remove_stale_logs(root)?;
    if !removed.is_empty() {
        debug!("Removed stale log files: {:?}", removed);
    }
    Ok(())
}

/// Toolchain preflight. Decides the package manager, enforces minimum
/// versions (fatal) and degrades Plug'n'Play on old yarn (warning only).
async fn preflight(runner: &SystemProcessRunner, request: &ProjectRequest) -> PackageManager {
    let checker = ToolchainChecker::new(runner);

    let package_manager = if !request.use_npm && checker.should_use_yarn().await {
        PackageManager::Yarn
    } else {
        PackageManager::Npm
    };
    debug!("Using package manager: {}", package_manager);

    let node = checker.check_node().await;
    if !node.meets_minimum {
        let found = node.version.as_deref().unwrap_or("unknown");
        output::warning(&format!(
            "You are using Node {found} so the project will be bootstrapped with an old unsupported version of tools.\n\n\
             Please update to Node {MIN_NODE} or higher for a better, fully supported experience.\n"
        ));
        std::process::exit(1);
    }

    let mut use_pnp = request.use_pnp;
    match package_manager {
        PackageManager::Npm => {
            let npm = checker.check_npm().await;
            if !npm.meets_minimum {
                if let Some(version) = &npm.version {
                    output::warning(&format!(
                        "You are using npm {version} so the project will be bootstrapped with an old unsupported version of tools.\n\n\
                         Please update to npm 5 or higher for a better, fully supported experience.\n"
                    ));
                }
                std::process::exit(1);
            }

            if let CwdCheck::Mismatch { npm_cwd } = npm_can_read_cwd(runner, &request.root).await {
                output::error(&format!(
                    "Could not start an npm process in the right directory.\n\n\
                     The current directory is: {}\n\
                     However, a newly started npm process runs in: {}\n\n\
                     This is probably caused by a misconfigured system terminal shell.",
                    style(request.root.as_str()).bold(),
                    style(&npm_cwd).bold()
                ));
                if cfg!(windows) {
                    eprintln!("{WINDOWS_CWD_REMEDIATION}");
                }
                std::process::exit(1);
            }
        }
        PackageManager::Yarn => {
            if use_pnp {
                let yarn = checker.check_yarn_pnp().await;
                if !yarn.meets_minimum {
                    if let Some(version) = &yarn.version {
                        output::warning(&format!(
                            "You are using Yarn {version} together with the --use-pnp flag, but Plug'n'Play is only supported starting from the 1.12 release.\n\n\
                             Please update to Yarn 1.12 or higher for a better, fully supported experience.\n"
                        ));
                    }
                    use_pnp = false;
                }
            }

            // best-effort; failures are ignored
            if let Some(default_registry) = checker.yarn_uses_default_registry().await {
                debug!("Yarn uses default registry: {}", default_registry);
            }
        }
    }
    debug!("Plug'n'Play enabled: {}", use_pnp);

    package_manager
}

/// Collect the four configuration answers, in order, each defaulting to
/// the empty string. Prompts are user-paced and strictly sequential.
fn collect_answers(request: &ProjectRequest) -> Result<ConfigAnswers> {
    let conf_path = config::conf_path(&request.root, request.template_type);
    let ci_path = config::ci_path(&request.root);

    let group = prompt(
        "Please enter the groupName in the git repository",
        "group",
        conf_path.as_str(),
    )?;
    let product = prompt(
        "Please enter the productName in the git repository",
        "product",
        conf_path.as_str(),
    )?;
    let context_path = prompt(
        "Please enter the contextPath of the application, default empty string",
        "contextPath",
        conf_path.as_str(),
    )?;
    let service_code = prompt(
        "Please enter the serviceCode of the application, default empty string",
        "SERVICE_CODE",
        ci_path.as_str(),
    )?;

    Ok(ConfigAnswers {
        group,
        product,
        context_path,
        service_code,
    })
}

fn prompt(message: &str, field: &str, path: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(message)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read the {field} answer"))?;

    if value.is_empty() {
        println!("You can set the {field} in {}.", style(path).green());
    } else {
        println!("You can modify the {field} in {}.", style(path).green());
    }
    println!();

    Ok(value)
}
