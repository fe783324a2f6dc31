//! Integration tests for the command-line interface

use clap::Parser;
use propbind::cli::{Cli, Commands};
use std::io::Write;
use tempfile::Builder;

#[tokio::test]
async fn test_bind_from_file() {
    let mut file = Builder::new().suffix(".properties").tempfile().unwrap();
    writeln!(file, "camel.component.fhir.server-url=http://localhost:8080/fhir").unwrap();
    writeln!(file, "camel.component.fhir.connection-timeout=5s").unwrap();
    file.flush().unwrap();

    let path = file.path().to_string_lossy().to_string();
    let cli = Cli::parse_from(["propbind", "bind", "fhir", "--file", path.as_str()]);
    let Commands::Bind(args) = cli.command else {
        panic!("expected bind command");
    };
    assert_eq!(args.execute().await.unwrap(), 0);
}

#[tokio::test]
async fn test_bind_missing_file_is_config_error() {
    let cli = Cli::parse_from(["propbind", "bind", "fhir", "--file", "/nonexistent.toml"]);
    let Commands::Bind(args) = cli.command else {
        panic!("expected bind command");
    };
    assert_eq!(args.execute().await.unwrap(), 2);
}

#[tokio::test]
async fn test_bind_unresolvable_secret_is_binding_error() {
    let cli = Cli::parse_from([
        "propbind",
        "bind",
        "aws-secrets-manager",
        "--set",
        "secretKey={{vault:prod/key}}",
        "--early-resolve",
        "true",
    ]);
    let Commands::Bind(args) = cli.command else {
        panic!("expected bind command");
    };
    assert_eq!(args.execute().await.unwrap(), 2);
}

#[tokio::test]
async fn test_bind_lazy_secret_is_not_resolved() {
    let cli = Cli::parse_from([
        "propbind",
        "bind",
        "aws-secrets-manager",
        "--set",
        "secretKey={{vault:prod/key}}",
    ]);
    let Commands::Bind(args) = cli.command else {
        panic!("expected bind command");
    };
    // earlyResolveProperties defaults to false, so the unknown provider is never asked
    assert_eq!(args.execute().await.unwrap(), 0);
}

#[tokio::test]
async fn test_describe_all_components() {
    for name in propbind::catalog::COMPONENTS {
        let cli = Cli::parse_from(["propbind", "describe", *name, "--format", "json"]);
        let Commands::Describe(args) = cli.command else {
            panic!("expected describe command");
        };
        assert_eq!(args.execute().await.unwrap(), 0);
    }
}
