//! Logging and observability
//!
//! This module provides structured logging with:
//! - Console output with configurable log levels
//! - Optional JSON file logging with rotation
//!
//! Secret values are never logged; only field names, origins and provider
//! names are.
//!
//! # Example
//!
//! ```no_run
//! use propbind::logging::init_logging;
//! use propbind::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log that a field received its value
///
/// # Example
///
/// ```no_run
/// use propbind::log_field_bound;
/// use propbind::core::Origin;
///
/// log_field_bound!("region", &Origin::Default);
/// ```
#[macro_export]
macro_rules! log_field_bound {
    ($field:expr, $origin:expr) => {
        tracing::debug!(
            field = %$field,
            origin = %$origin,
            "Field bound"
        );
    };
}

/// Log the completion of a bind
///
/// # Example
///
/// ```no_run
/// use propbind::log_bind_complete;
///
/// log_bind_complete!("fhir", 12);
/// ```
#[macro_export]
macro_rules! log_bind_complete {
    ($component:expr, $count:expr) => {
        tracing::info!(
            component = %$component,
            fields = $count,
            "Configuration bound"
        );
    };
}
