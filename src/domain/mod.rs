//! Domain model for configuration binding.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Keys** ([`ConfigurationKey`]): dotted, case-sensitive setting names
//! - **Schemas** ([`ConfigurationSchema`], [`FieldDescriptor`], [`Field`]):
//!   explicit per-component field descriptions
//! - **Values** ([`TypedValue`], [`SemanticType`]): coercion of raw strings
//! - **Placeholders** ([`SecretPlaceholder`]): `{{provider:identifier}}` references
//! - **Sources** ([`ConfigSource`]): one layer of raw key/value settings
//! - **Errors** ([`PropbindError`], [`BindingError`], [`SecretError`])
//!
//! # Example
//!
//! ```rust
//! use propbind::domain::{ConfigurationSchema, Field, SemanticType};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = ConfigurationSchema::builder("fhir", "camel.component.fhir")
//!     .field(Field::uri("serverUrl").required().description("The FHIR server base URL"))
//!     .field(Field::boolean("prettyPrint").default_value("false"))
//!     .build()?;
//!
//! assert_eq!(schema.field("serverUrl").unwrap().semantic_type, SemanticType::Uri);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod key;
pub mod placeholder;
pub mod result;
pub mod schema;
pub mod source;
pub mod value;

// Re-export commonly used types for convenience
pub use errors::{BindingError, PropbindError, SecretError};
pub use key::ConfigurationKey;
pub use placeholder::SecretPlaceholder;
pub use result::Result;
pub use schema::{ConfigurationSchema, Field, FieldDescriptor, SchemaBuilder, SemanticType};
pub use source::ConfigSource;
pub use value::TypedValue;
