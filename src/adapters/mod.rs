//! External system integrations.
//!
//! - [`secrets`] - secret store resolvers behind the [`SecretResolver`](secrets::SecretResolver) trait
//!
//! # Design Pattern
//!
//! Adapters isolate external stores behind a trait so the binder can be
//! exercised with in-memory implementations. A cloud secrets manager plugs in
//! by implementing the trait and registering under its provider name:
//!
//! ```rust
//! use propbind::adapters::secrets::{SecretResolverRegistry, StaticSecretResolver};
//! use propbind::core::ConfigurationBinder;
//!
//! let registry = SecretResolverRegistry::with_defaults()
//!     .register("aws", StaticSecretResolver::new().with_secret("aws", "testSecret/password", "string"));
//! let binder = ConfigurationBinder::new(registry);
//! assert!(binder.is_early_resolve());
//! ```

pub mod secrets;
