//! Built-in component schemas.
//!
//! Each component is described by an explicit [`ConfigurationSchema`] under
//! `camel.component.<name>`; one generic binder serves all of them.
//!
//! ```rust
//! use propbind::catalog;
//!
//! let schema = catalog::schema("fhir").unwrap().unwrap();
//! assert_eq!(schema.prefix(), "camel.component.fhir");
//! assert!(catalog::schema("unknown").unwrap().is_none());
//! ```

pub mod aws_secrets_manager;
pub mod fhir;
pub mod rest_openapi;

use crate::domain::{BindingError, ConfigurationSchema};

/// Names of the built-in components
pub const COMPONENTS: &[&str] = &[
    aws_secrets_manager::NAME,
    fhir::NAME,
    rest_openapi::NAME,
];

/// Looks up a built-in schema by component name
///
/// # Errors
///
/// Propagates schema construction errors.
pub fn schema(name: &str) -> Result<Option<ConfigurationSchema>, BindingError> {
    match name {
        aws_secrets_manager::NAME => aws_secrets_manager::schema().map(Some),
        fhir::NAME => fhir::schema().map(Some),
        rest_openapi::NAME => rest_openapi::schema().map(Some),
        _ => Ok(None),
    }
}

/// All built-in schemas, sorted by name
pub fn all() -> Result<Vec<ConfigurationSchema>, BindingError> {
    COMPONENTS
        .iter()
        .filter_map(|name| schema(name).transpose())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SemanticType;

    #[test]
    fn test_all_schemas_build() {
        let schemas = all().unwrap();
        assert_eq!(schemas.len(), COMPONENTS.len());
        for schema in &schemas {
            assert!(schema.prefix().starts_with("camel.component."));
            assert!(schema.field("enabled").is_some());
        }
    }

    #[test]
    fn test_rest_openapi_fields() {
        let schema = rest_openapi::schema().unwrap();
        let uri = schema.field("specificationUri").unwrap();
        assert_eq!(uri.semantic_type, SemanticType::Uri);
        assert_eq!(
            uri.key.as_str(),
            "camel.component.rest-openapi.specification-uri"
        );
        assert_eq!(
            schema.field("useGlobalSslContextParameters").unwrap().default.as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_aws_credentials_are_opaque() {
        let schema = aws_secrets_manager::schema().unwrap();
        for name in ["accessKey", "secretKey", "sessionToken"] {
            assert_eq!(
                schema.field(name).unwrap().semantic_type,
                SemanticType::Credential
            );
        }
        assert_eq!(
            schema.field("earlyResolveProperties").unwrap().key.as_str(),
            "camel.component.aws-secrets-manager.early-resolve-properties"
        );
    }

    #[test]
    fn test_fhir_timeouts_are_durations() {
        let schema = fhir::schema().unwrap();
        let timeout = schema.field("connectionTimeout").unwrap();
        assert_eq!(timeout.semantic_type, SemanticType::Duration);
        assert_eq!(timeout.default.as_deref(), Some("10000"));
    }

    #[test]
    fn test_unknown_component() {
        assert!(schema("kafka").unwrap().is_none());
    }
}
