// Propbind - Typed Component Configuration Binder
// Copyright (c) 2025 Propbind Contributors
// Licensed under the MIT License

use propbind::cli::{Cli, Commands};
use propbind::config::LoggingConfig;
use propbind::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().unwrap_or("warn");
    let logging_config = match &cli.log_dir {
        Some(dir) => LoggingConfig::to_directory(dir),
        None => LoggingConfig::default(),
    };
    let guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Propbind - Typed Component Configuration Binder"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::List(args) => args.execute().await,
        Commands::Describe(args) => args.execute().await,
        Commands::Bind(args) => args.execute().await,
    }
}
