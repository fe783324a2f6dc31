//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for propbind using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// propbind - typed component configuration binder
#[derive(Parser, Debug)]
#[command(name = "propbind")]
#[command(version, about, long_about = None)]
#[command(author = "Propbind Contributors")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PROPBIND_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Also write JSON logs to this directory
    #[arg(long, env = "PROPBIND_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the built-in components
    List(commands::list::ListArgs),

    /// Describe the fields of a component
    Describe(commands::describe::DescribeArgs),

    /// Bind a component against overrides, environment and files
    Bind(commands::bind::BindArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::describe::OutputFormat;

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::parse_from(["propbind", "list"]);
        assert!(matches!(cli.command, Commands::List(_)));
        assert!(cli.log_dir.is_none());
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["propbind", "--log-level", "debug", "list"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_describe_json() {
        let cli = Cli::parse_from(["propbind", "describe", "fhir", "--format", "json"]);
        match cli.command {
            Commands::Describe(args) => {
                assert_eq!(args.component, "fhir");
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_bind() {
        let cli = Cli::parse_from([
            "propbind",
            "bind",
            "aws-secrets-manager",
            "--file",
            "a.properties",
            "--file",
            "b.toml",
            "--set",
            "region=us-east-1",
            "--early-resolve",
            "false",
        ]);
        match cli.command {
            Commands::Bind(args) => {
                assert_eq!(args.component, "aws-secrets-manager");
                assert_eq!(args.files, ["a.properties", "b.toml"]);
                assert_eq!(args.overrides, ["region=us-east-1"]);
                assert_eq!(args.early_resolve, Some(false));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_bind_defaults() {
        let cli = Cli::parse_from(["propbind", "bind", "fhir"]);
        match cli.command {
            Commands::Bind(args) => {
                assert!(args.files.is_empty());
                assert!(args.overrides.is_empty());
                assert_eq!(args.early_resolve, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
