//! Configuration key newtype
//!
//! A [`ConfigurationKey`] is the dotted, namespaced name of one setting, such as
//! `camel.component.aws-secrets-manager.early-resolve-properties`. Keys are
//! case-sensitive and compared verbatim.

use super::errors::BindingError;
use heck::ToKebabCase;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dotted configuration key
///
/// # Examples
///
/// ```
/// use propbind::domain::ConfigurationKey;
///
/// let key = ConfigurationKey::qualified("camel.component.rest-openapi", "specificationUri").unwrap();
/// assert_eq!(key.as_str(), "camel.component.rest-openapi.specification-uri");
/// assert_eq!(key.env_var_name(), "CAMEL_COMPONENT_REST_OPENAPI_SPECIFICATION_URI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConfigurationKey(String);

impl ConfigurationKey {
    /// Creates a key, rejecting empty keys, whitespace and empty segments
    pub fn new(key: impl Into<String>) -> Result<Self, BindingError> {
        let key = key.into();
        if key.is_empty() {
            return Err(BindingError::invalid_key(key, "key cannot be empty"));
        }
        if key.chars().any(char::is_whitespace) {
            return Err(BindingError::invalid_key(key, "key cannot contain whitespace"));
        }
        if key.split('.').any(str::is_empty) {
            return Err(BindingError::invalid_key(
                key,
                "key cannot contain empty segments",
            ));
        }
        Ok(Self(key))
    }

    /// Builds `<prefix>.<field-name-in-kebab-case>`
    ///
    /// An empty prefix yields the kebab-cased field name alone.
    pub fn qualified(prefix: &str, field_name: &str) -> Result<Self, BindingError> {
        let field = to_kebab_case(field_name);
        if prefix.is_empty() {
            Self::new(field)
        } else {
            Self::new(format!("{prefix}.{field}"))
        }
    }

    /// Environment variable carrying this key: uppercase, `.` and `-` become `_`
    pub fn env_var_name(&self) -> String {
        self.0
            .chars()
            .map(|c| match c {
                '.' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect()
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Converts `camelCase` field names to `kebab-case`
///
/// Names already in kebab-case are returned unchanged.
pub fn to_kebab_case(name: &str) -> String {
    name.to_kebab_case()
}

impl fmt::Display for ConfigurationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for ConfigurationKey {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ConfigurationKey {
    type Error = BindingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConfigurationKey> for String {
    fn from(key: ConfigurationKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigurationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
