//! Structured logging setup using tracing
//!
//! Console output is always on. When file logging is enabled, JSON lines are
//! also written to a rolling file in the configured directory.
//!
//! # Example
//!
//! ```no_run
//! use propbind::logging::init_logging;
//! use propbind::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//! ```

use crate::config::LoggingConfig;
use crate::domain::{PropbindError, Result};
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Keeps the background file writer alive; logs are flushed when dropped
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber
///
/// `RUST_LOG`, when set, takes precedence over `log_level_str`.
///
/// # Errors
///
/// Returns an error for an unknown level, an invalid configuration, or a log
/// directory that cannot be created.
pub fn init_logging(log_level_str: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let filter = build_filter(log_level_str)?;
    config.validate().map_err(PropbindError::Configuration)?;

    let (file_layer, file_guard) = if config.local_enabled {
        let (writer, guard) = file_writer(config)?;
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_thread_ids(true)
            .with_writer(writer)
            .with_filter(filter.clone());
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    // stderr keeps command output on stdout parseable
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::debug!(
        local_enabled = config.local_enabled,
        local_path = %config.local_path,
        rotation = %config.local_rotation,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn build_filter(log_level_str: &str) -> Result<EnvFilter> {
    let level = parse_log_level(log_level_str)?;
    Ok(EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("propbind={level}"))))
}

fn file_writer(config: &LoggingConfig) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        PropbindError::Configuration(format!(
            "Failed to create log directory {}: {}",
            config.local_path, e
        ))
    })?;

    let rotation = match config.local_rotation.as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    };
    let appender = RollingFileAppender::new(rotation, &config.local_path, "propbind.log");
    Ok(tracing_appender::non_blocking(appender))
}

/// Parses a level name, case-insensitively
fn parse_log_level(level_str: &str) -> Result<Level> {
    level_str.parse::<Level>().map_err(|_| {
        PropbindError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level_valid() {
        assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
    }

    #[test]
    fn test_parse_log_level_case_insensitive() {
        assert_eq!(parse_log_level("TRACE").unwrap(), Level::TRACE);
        assert_eq!(parse_log_level("Debug").unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_parse_log_level_invalid() {
        assert!(parse_log_level("invalid").is_err());
        assert!(parse_log_level("").is_err());
        assert!(parse_log_level("verbose").is_err());
    }

    #[test]
    fn test_init_logging_rejects_bad_level_before_installing() {
        // The global subscriber can only be installed once per process, so
        // only the failure paths are exercised here.
        let result = init_logging("loud", &LoggingConfig::default());
        assert!(matches!(result, Err(PropbindError::Configuration(_))));
    }

    #[test]
    fn test_init_logging_rejects_bad_rotation() {
        let mut config = LoggingConfig::to_directory("/tmp/propbind-test-logs");
        config.local_rotation = "weekly".to_string();
        assert!(init_logging("info", &config).is_err());
    }
}
