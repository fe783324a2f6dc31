//! Typed configuration values and raw string coercion

use super::errors::BindingError;
use super::placeholder::SecretPlaceholder;
use super::schema::SemanticType;
use crate::config::{secret_string, SecretString};
use secrecy::ExposeSecret;
use std::fmt;
use std::time::Duration;
use url::Url;

/// A raw value after coercion to its field's semantic type
#[derive(Debug, Clone)]
pub enum TypedValue {
    String(String),
    Boolean(bool),
    Integer(i64),
    Uri(Url),
    Duration(Duration),
    /// Opaque credential; redacted in `Debug` and `Display`
    Credential(SecretString),
}

impl TypedValue {
    /// The semantic type this value carries
    pub fn semantic_type(&self) -> SemanticType {
        match self {
            Self::String(_) => SemanticType::String,
            Self::Boolean(_) => SemanticType::Boolean,
            Self::Integer(_) => SemanticType::Integer,
            Self::Uri(_) => SemanticType::Uri,
            Self::Duration(_) => SemanticType::Duration,
            Self::Credential(_) => SemanticType::Credential,
        }
    }
}

impl PartialEq for TypedValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Uri(a), Self::Uri(b)) => a == b,
            (Self::Duration(a), Self::Duration(b)) => a == b,
            (Self::Credential(a), Self::Credential(b)) => {
                a.expose_secret().as_str() == b.expose_secret().as_str()
            }
            _ => false,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Uri(u) => f.write_str(u.as_str()),
            Self::Duration(d) => write!(f, "{}ms", d.as_millis()),
            Self::Credential(_) => f.write_str("********"),
        }
    }
}

impl SemanticType {
    /// Parses a raw string as this type
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::TypeCoercionError`] naming `field` and `raw`.
    ///
    /// ```
    /// use propbind::domain::{SemanticType, TypedValue};
    ///
    /// let v = SemanticType::Boolean.coerce("enabled", "TRUE").unwrap();
    /// assert_eq!(v, TypedValue::Boolean(true));
    /// assert!(SemanticType::Uri.coerce("specificationUri", "not a uri").is_err());
    /// ```
    pub fn coerce(self, field: &str, raw: &str) -> Result<TypedValue, BindingError> {
        let fail = || BindingError::coercion(field, raw, self);
        match self {
            Self::String => Ok(TypedValue::String(raw.to_string())),
            Self::Credential => Ok(TypedValue::Credential(secret_string(raw.to_string()))),
            Self::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(TypedValue::Boolean(true)),
                "false" => Ok(TypedValue::Boolean(false)),
                _ => Err(fail()),
            },
            Self::Integer => raw
                .trim()
                .parse()
                .map(TypedValue::Integer)
                .map_err(|_| fail()),
            Self::Uri => Url::parse(raw.trim())
                .map(TypedValue::Uri)
                .map_err(|_| fail()),
            Self::Duration => parse_duration(raw)
                .map(TypedValue::Duration)
                .ok_or_else(fail),
        }
    }

    /// Coerces a value fetched from a secret store
    ///
    /// Credentials keep the secret wrapper. For other types a failure reports
    /// the placeholder text rather than the secret itself.
    pub fn coerce_secret(
        self,
        field: &str,
        placeholder: &SecretPlaceholder,
        secret: SecretString,
    ) -> Result<TypedValue, BindingError> {
        if self == Self::Credential {
            return Ok(TypedValue::Credential(secret));
        }
        self.coerce(field, secret.expose_secret().as_str())
            .map_err(|_| BindingError::coercion(field, &placeholder.to_string(), self))
    }
}

/// Parses `1500`, `30s`, `1m30s`, `250ms`, `2h`, `1d`
///
/// Bare digits are milliseconds; anything else goes through `humantime`.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse().ok().map(Duration::from_millis);
    }
    humantime::parse_duration(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_boolean() {
        assert_eq!(
            SemanticType::Boolean.coerce("f", "false").unwrap(),
            TypedValue::Boolean(false)
        );
        assert_eq!(
            SemanticType::Boolean.coerce("f", " True ").unwrap(),
            TypedValue::Boolean(true)
        );
        assert!(SemanticType::Boolean.coerce("f", "yes").is_err());
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(
            SemanticType::Integer.coerce("port", "8080").unwrap(),
            TypedValue::Integer(8080)
        );
        assert!(SemanticType::Integer.coerce("port", "80.5").is_err());
    }

    #[test]
    fn test_coerce_uri() {
        let value = SemanticType::Uri
            .coerce("serverUrl", "http://localhost:8080/fhir")
            .unwrap();
        match value {
            TypedValue::Uri(url) => assert_eq!(url.host_str(), Some("localhost")),
            other => panic!("unexpected {other:?}"),
        }

        let err = SemanticType::Uri
            .coerce("specificationUri", "not a uri")
            .unwrap_err();
        assert_eq!(
            err,
            BindingError::TypeCoercionError {
                field: "specificationUri".to_string(),
                raw: "not a uri".to_string(),
                expected: SemanticType::Uri,
            }
        );
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("1500"), Some(Duration::from_millis(1500)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("1m30s"), Some(Duration::from_secs(90)));
        assert_eq!(parse_duration("250ms"), Some(Duration::from_millis(250)));
        assert_eq!(parse_duration("2h"), Some(Duration::from_secs(7200)));
        assert_eq!(parse_duration("1d"), Some(Duration::from_secs(86_400)));
        assert_eq!(parse_duration("2min 5s"), Some(Duration::from_secs(125)));
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("10x"), None);
        assert_eq!(parse_duration("s"), None);
        assert_eq!(parse_duration("1.5s"), None);
    }

    #[test]
    fn test_credential_is_redacted() {
        let value = SemanticType::Credential.coerce("secretKey", "hunter2").unwrap();
        assert_eq!(value.to_string(), "********");
        assert!(!format!("{value:?}").contains("hunter2"));
        assert_eq!(value, SemanticType::Credential.coerce("other", "hunter2").unwrap());
    }

    #[test]
    fn test_coerce_secret_hides_value_on_failure() {
        let placeholder = SecretPlaceholder::new("aws", "port");
        let err = SemanticType::Integer
            .coerce_secret("port", &placeholder, secret_string("not-a-number".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            BindingError::TypeCoercionError {
                field: "port".to_string(),
                raw: "{{aws:port}}".to_string(),
                expected: SemanticType::Integer,
            }
        );
    }

    #[test]
    fn test_mismatched_variants_are_not_equal() {
        assert_ne!(
            TypedValue::String("1".to_string()),
            TypedValue::Integer(1)
        );
    }
}
