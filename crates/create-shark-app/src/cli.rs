//! CLI argument parsing with clap

use clap::Parser;

const AFTER_HELP: &str = "\
Only <project-directory> is required.

A template type --type can be set:
  - full: Default template, include server & web
  - web:  only web template
  - npm:  include server & web for package

A custom --scripts-version can be one of:
  - a specific npm version: 0.8.2
  - a specific npm tag: @next
  - a custom fork published on npm: my-react-scripts
It is not needed unless you specifically want to use a fork.";

/// create-shark-app - scaffold a new shark React project
#[derive(Parser, Debug)]
#[command(name = "create-shark-app")]
#[command(author, version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Directory to create the project in
    #[arg(value_name = "project-directory")]
    pub project_directory: Option<String>,

    /// Set template type
    #[arg(long = "type", value_name = "type", default_value = "full")]
    pub template_type: String,

    /// Print additional logs
    #[arg(long)]
    pub verbose: bool,

    /// Print environment debug info
    #[arg(long)]
    pub info: bool,

    /// Use a non-standard version of the scripts package
    #[arg(long, value_name = "alternative-package")]
    pub scripts_version: Option<String>,

    /// Use npm even when yarn is available
    #[arg(long)]
    pub use_npm: bool,

    /// Enable yarn Plug'n'Play linking
    #[arg(long)]
    pub use_pnp: bool,

    /// Unknown trailing flags are tolerated, not rejected
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true,
        value_name = "ignored"
    )]
    pub forwarded: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["create-shark-app", "my-app"]).unwrap();
        assert_eq!(cli.project_directory.as_deref(), Some("my-app"));
        assert_eq!(cli.template_type, "full");
        assert!(!cli.verbose);
        assert!(!cli.use_npm);
        assert!(!cli.use_pnp);
        assert!(cli.scripts_version.is_none());
    }

    #[test]
    fn test_missing_project_directory_parses() {
        let cli = Cli::try_parse_from(["create-shark-app"]).unwrap();
        assert!(cli.project_directory.is_none());
    }

    #[test]
    fn test_type_flag() {
        let cli = Cli::try_parse_from(["create-shark-app", "my-app", "--type", "web"]).unwrap();
        assert_eq!(cli.template_type, "web");
    }

    #[test]
    fn test_unknown_flags_are_tolerated() {
        let cli = Cli::try_parse_from([
            "create-shark-app",
            "my-app",
            "--use-npm",
            "--totally-unknown",
            "value",
        ])
        .unwrap();
        assert_eq!(cli.project_directory.as_deref(), Some("my-app"));
        assert!(cli.use_npm);
        assert_eq!(cli.forwarded, vec!["--totally-unknown", "value"]);
    }

    #[test]
    fn test_info_without_project_directory() {
        let cli = Cli::try_parse_from(["create-shark-app", "--info"]).unwrap();
        assert!(cli.info);
        assert!(cli.project_directory.is_none());
    }
}
