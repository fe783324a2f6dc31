//! Configuration sources and tool settings.
//!
//! # Overview
//!
//! - [`loader`] - builds raw source layers from overrides, the environment,
//!   TOML files and `.properties` files, with `${VAR_NAME}` substitution
//! - [`secret`] - zeroizing [`SecretString`] for credentials and resolved secrets
//! - [`settings`] - propbind's own [`LoggingConfig`]
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use propbind::catalog;
//! use propbind::config::SourceLayers;
//! use propbind::core::ConfigurationBinder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = catalog::fhir::schema()?;
//! let sources = SourceLayers::new()
//!     .environment(&schema)
//!     .file("application.toml")?
//!     .build();
//!
//! let config = ConfigurationBinder::default().bind(&schema, &sources)?;
//! println!("FHIR server: {:?}", config.uri("serverUrl")?);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! Every field can be set through the environment. The variable name is the
//! configuration key upper-cased with `.` and `-` replaced by `_`:
//!
//! ```bash
//! export CAMEL_COMPONENT_FHIR_SERVER_URL="http://localhost:8080/fhir"
//! export CAMEL_COMPONENT_AWS_SECRETS_MANAGER_REGION="us-east-1"
//! ```
//!
//! File contents may reference variables with `${VAR_NAME}`:
//!
//! ```properties
//! camel.component.fhir.password=${FHIR_PASSWORD}
//! ```

pub mod loader;
pub mod secret;
pub mod settings;

// Re-export commonly used types
pub use loader::{environment_source, load_source, parse_overrides, SourceLayers};
pub use secret::{secret_string, SecretString, SecretValue};
pub use settings::LoggingConfig;
