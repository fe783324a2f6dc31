//! Core binding logic.
//!
//! # Modules
//!
//! - [`binder`] - [`ConfigurationBinder`]: layered lookup, defaults, coercion, placeholders
//! - [`resolved`] - [`ResolvedConfiguration`]: the immutable typed result
//!
//! # Binding Workflow
//!
//! 1. **Describe**: a component declares its [`ConfigurationSchema`](crate::domain::ConfigurationSchema)
//! 2. **Layer**: the host gathers sources (overrides, environment, files)
//! 3. **Bind**: the binder picks the winning raw value per field and coerces it
//! 4. **Resolve**: secret placeholders are fetched now or on first read
//! 5. **Consume**: the component reads typed accessors to initialize itself
//!
//! # Example
//!
//! ```rust
//! use propbind::core::ConfigurationBinder;
//! use propbind::domain::{BindingError, ConfigSource, ConfigurationSchema, Field};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = ConfigurationSchema::builder("rest-openapi", "camel.component.rest-openapi")
//!     .field(Field::uri("specificationUri").required())
//!     .build()?;
//!
//! let source = ConfigSource::new("overrides").with("specificationUri", "not a uri");
//! let err = ConfigurationBinder::default().bind(&schema, &[source]).unwrap_err();
//! assert!(matches!(err, BindingError::TypeCoercionError { .. }));
//! # Ok(())
//! # }
//! ```

pub mod binder;
pub mod resolved;

pub use binder::{describe, ConfigurationBinder};
pub use resolved::{BoundField, DeferredSecret, FieldValue, Origin, ResolvedConfiguration};
