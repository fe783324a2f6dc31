//! Domain error types
//!
//! This module defines the error hierarchy for propbind. Binding failures are
//! reported through [`BindingError`], failures of the secret-resolution seam
//! through [`SecretError`], and everything else (file loading, I/O,
//! serialization) through the crate-wide [`PropbindError`].
//!
//! Errors carry field names and raw values for diagnostics. Credential values
//! and resolved secrets never appear in an error message.

use super::schema::SemanticType;
use thiserror::Error;

/// Main propbind error type
#[derive(Debug, Error)]
pub enum PropbindError {
    /// Configuration source errors (missing files, bad syntax, unset variables)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Schema construction or binding errors
    #[error("Binding error: {0}")]
    Binding(#[from] BindingError),

    /// Secret resolution errors outside of a binding
    #[error("Secret error: {0}")]
    Secret(#[from] SecretError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors produced while building a schema, binding it, or reading a bound value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// No source supplied a required field and the schema declares no default
    #[error("Missing required field '{field}' (key '{key}')")]
    MissingRequiredField { field: String, key: String },

    /// A raw value could not be parsed as the field's semantic type
    #[error("Field '{field}': cannot convert '{raw}' to {expected}")]
    TypeCoercionError {
        field: String,
        raw: String,
        expected: SemanticType,
    },

    /// The secret store has no secret for the placeholder
    #[error("Field '{field}': secret '{provider}:{identifier}' not found")]
    SecretNotFound {
        field: String,
        provider: String,
        identifier: String,
    },

    /// The secret store could not be reached or no store serves the provider
    #[error("Field '{field}': secret store '{provider}' unavailable: {message}")]
    SecretStoreUnavailable {
        field: String,
        provider: String,
        message: String,
    },

    /// Two fields of one schema share a name or a configuration key
    #[error("Duplicate field definition '{field}'")]
    DuplicateFieldDefinition { field: String },

    /// A field name was read that the schema never declared
    #[error("Unknown field '{field}'")]
    UnknownField { field: String },

    /// A typed accessor was used on a field of another type
    #[error("Field '{field}' is {actual}, not {expected}")]
    TypeMismatch {
        field: String,
        expected: SemanticType,
        actual: SemanticType,
    },

    /// A configuration key or field name is malformed
    #[error("Invalid configuration key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
}

impl BindingError {
    /// Name of the field (or key) the error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredField { field, .. }
            | Self::TypeCoercionError { field, .. }
            | Self::SecretNotFound { field, .. }
            | Self::SecretStoreUnavailable { field, .. }
            | Self::DuplicateFieldDefinition { field }
            | Self::UnknownField { field }
            | Self::TypeMismatch { field, .. } => field,
            Self::InvalidKey { key, .. } => key,
        }
    }

    pub(crate) fn coercion(field: &str, raw: &str, expected: SemanticType) -> Self {
        Self::TypeCoercionError {
            field: field.to_string(),
            raw: raw.to_string(),
            expected,
        }
    }

    pub(crate) fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Failures reported by a secret resolver
///
/// These are the two outcomes the resolution callback may fail with. The
/// binder attaches the field name when converting them into [`BindingError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    /// The store answered but holds no such secret
    #[error("Secret '{provider}:{identifier}' not found")]
    NotFound { provider: String, identifier: String },

    /// The store could not answer
    #[error("Secret store '{provider}' unavailable: {message}")]
    StoreUnavailable { provider: String, message: String },
}

impl SecretError {
    /// Creates a not-found error
    pub fn not_found(provider: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            provider: provider.into(),
            identifier: identifier.into(),
        }
    }

    /// Creates a store-unavailable error
    pub fn unavailable(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Attaches the field being bound
    pub fn for_field(self, field: &str) -> BindingError {
        match self {
            Self::NotFound {
                provider,
                identifier,
            } => BindingError::SecretNotFound {
                field: field.to_string(),
                provider,
                identifier,
            },
            Self::StoreUnavailable { provider, message } => BindingError::SecretStoreUnavailable {
                field: field.to_string(),
                provider,
                message,
            },
        }
    }
}

impl From<std::io::Error> for PropbindError {
    fn from(err: std::io::Error) -> Self {
        PropbindError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PropbindError {
    fn from(err: serde_json::Error) -> Self {
        PropbindError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for PropbindError {
    fn from(err: toml::de::Error) -> Self {
        PropbindError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercion_error_display() {
        let err = BindingError::coercion("specificationUri", "not a uri", SemanticType::Uri);
        assert_eq!(
            err.to_string(),
            "Field 'specificationUri': cannot convert 'not a uri' to uri"
        );
        assert_eq!(err.field(), "specificationUri");
    }

    #[test]
    fn test_secret_error_for_field() {
        let err = SecretError::not_found("aws", "testSecret/password").for_field("password");
        assert_eq!(
            err,
            BindingError::SecretNotFound {
                field: "password".to_string(),
                provider: "aws".to_string(),
                identifier: "testSecret/password".to_string(),
            }
        );

        let err = SecretError::unavailable("aws", "connection refused").for_field("token");
        assert!(matches!(err, BindingError::SecretStoreUnavailable { .. }));
        assert_eq!(err.field(), "token");
    }

    #[test]
    fn test_binding_error_conversion() {
        let err: PropbindError = BindingError::UnknownField {
            field: "nope".to_string(),
        }
        .into();
        assert!(matches!(err, PropbindError::Binding(_)));
        assert_eq!(err.to_string(), "Binding error: Unknown field 'nope'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: PropbindError = io_err.into();
        assert!(matches!(err, PropbindError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: PropbindError = toml_err.into();
        assert!(matches!(err, PropbindError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let _: &dyn std::error::Error = &PropbindError::Io("x".to_string());
        let _: &dyn std::error::Error = &SecretError::not_found("env", "X");
    }
}
