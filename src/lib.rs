// Propbind - Typed Component Configuration Binder
// Copyright (c) 2025 Propbind Contributors
// Licensed under the MIT License

//! # Propbind - Typed Component Configuration Binder
//!
//! Propbind binds integration-component settings from layered key/value
//! sources into validated, typed configuration objects. Secret values can be
//! written as `{{provider:identifier}}` placeholders and are fetched from a
//! secret store either while binding or on first use.
//!
//! ## Overview
//!
//! - **Describing** a component's fields once, as a [`domain::ConfigurationSchema`]
//! - **Layering** sources: overrides, then environment, then files, then defaults
//! - **Coercing** raw text to semantic types (string, boolean, integer, uri,
//!   duration, credential)
//! - **Resolving** secret placeholders early or lazily, at most once per field
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The binder and the resolved configuration
//! - [`adapters`] - Secret resolvers (static, environment, file, registry)
//! - [`catalog`] - Built-in component schemas
//! - [`domain`] - Keys, schemas, values, placeholders and errors
//! - [`config`] - Source loading and propbind's own settings
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use propbind::adapters::secrets::StaticSecretResolver;
//! use propbind::catalog;
//! use propbind::core::ConfigurationBinder;
//! use propbind::domain::ConfigSource;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = catalog::aws_secrets_manager::schema()?;
//! let resolver = StaticSecretResolver::new().with_secret("aws", "prod/secret-key", "s3cr3t");
//!
//! let overrides = ConfigSource::new("overrides")
//!     .with("region", "us-east-1")
//!     .with("secretKey", "{{aws:prod/secret-key}}");
//!
//! let config = ConfigurationBinder::new(resolver)
//!     .early_resolve(false)
//!     .bind(&schema, &[overrides])?;
//!
//! assert_eq!(config.string("region")?.as_deref(), Some("us-east-1"));
//! assert!(config.credential("secretKey")?.is_some());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Error Handling
//!
//! Binding failures are [`domain::BindingError`] values; I/O, parsing and
//! settings failures are wrapped in [`domain::PropbindError`]:
//!
//! ```rust,no_run
//! use propbind::domain::PropbindError;
//!
//! fn example() -> Result<(), PropbindError> {
//!     let schema = propbind::catalog::fhir::schema()?;
//!     let source = propbind::config::load_source("application.properties")?;
//!     let config = propbind::core::ConfigurationBinder::default().bind(&schema, &[source])?;
//!     println!("{:?}", config.uri("serverUrl")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Propbind uses structured logging with the `tracing` crate. Field names,
//! origins and provider names are logged; secret values never are.

pub mod adapters;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
