//! create-shark-app - scaffold a new shark React project
//!
//! This is the main entry point for the create-shark-app command line
//! interface.

mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use console::style;
use shark_core::{ProjectRequest, TemplateType};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // diagnostics path, no app execution
    if cli.info {
        return commands::info::run().await;
    }

    let Some(directory) = cli.project_directory.clone() else {
        print_missing_directory_usage();
        std::process::exit(1);
    };

    let template_type = match cli.template_type.parse::<TemplateType>() {
        Ok(t) => t,
        Err(_) => {
            print_invalid_type_usage();
            std::process::exit(1);
        }
    };

    if !cli.forwarded.is_empty() {
        debug!("Ignoring unknown arguments: {:?}", cli.forwarded);
    }

    let root = resolve_root(&directory)?;
    let name = root
        .file_name()
        .context("Project directory has no name")?
        .to_string();

    output::info(&format!(
        "Will create a {} template project",
        template_type
    ));

    let request = ProjectRequest {
        name,
        root,
        template_type,
        verbose: cli.verbose,
        use_npm: cli.use_npm,
        use_pnp: cli.use_pnp,
        scripts_version: cli.scripts_version,
    };

    commands::create::run(request).await
}

/// Absolute UTF-8 path of the target directory
fn resolve_root(directory: &str) -> Result<Utf8PathBuf> {
    let absolute = std::path::absolute(directory)
        .with_context(|| format!("Failed to resolve path: {directory}"))?;
    Utf8PathBuf::from_path_buf(absolute)
        .map_err(|p| anyhow::anyhow!("Project path is not valid UTF-8: {}", p.display()))
}

fn print_missing_directory_usage() {
    eprintln!("Please specify the project directory:");
    println!(
        "  {} {}",
        style("create-shark-app").cyan(),
        style("<project-directory>").green()
    );
    println!();
    println!("For example:");
    println!(
        "  {} {}",
        style("create-shark-app").cyan(),
        style("my-react-app").green()
    );
    println!();
    println!(
        "Run {} to see all options.",
        style("create-shark-app --help").cyan()
    );
}

fn print_invalid_type_usage() {
    eprintln!("Please set the correct template type (full | web | npm) :");
    println!(
        "  {} {} {}",
        style("create-shark-app").cyan(),
        style("<project-directory>").green(),
        style("[options]").green()
    );
    println!();
    println!("For example:");
    println!(
        "  {} my-react-app {}",
        style("create-shark-app").cyan(),
        style("--type=full").green()
    );
    println!();
    println!(
        "Run {} to see all options.",
        style("create-shark-app --help").cyan()
    );
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
