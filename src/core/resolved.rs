//! Bound configuration
//!
//! A [`ResolvedConfiguration`] is the immutable result of a successful bind.
//! Every declared field is present in schema order. Each one is either absent
//! (optional, no value), a [`FieldValue::Literal`], or a
//! [`FieldValue::DeferredSecret`] whose secret is fetched on first read and
//! memoized.

use crate::adapters::secrets::SecretResolver;
use crate::config::SecretString;
use crate::domain::{BindingError, ConfigurationKey, SecretPlaceholder, SemanticType, TypedValue};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, TryLockError};
use std::time::Duration;
use url::Url;

/// Where a bound value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Named source layer
    Source(String),
    /// Schema default
    Default,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(name) => f.write_str(name),
            Self::Default => f.write_str("default"),
        }
    }
}

/// A secret placeholder awaiting first read
///
/// The slot mutex is held across the resolver call, so concurrent first
/// readers trigger one resolution and all observe its value. Failures are
/// returned to the reader and leave the slot empty.
pub struct DeferredSecret {
    field: String,
    semantic_type: SemanticType,
    placeholder: SecretPlaceholder,
    resolver: Arc<dyn SecretResolver>,
    slot: Mutex<Option<TypedValue>>,
}

impl DeferredSecret {
    pub(crate) fn new(
        field: &str,
        semantic_type: SemanticType,
        placeholder: SecretPlaceholder,
        resolver: Arc<dyn SecretResolver>,
    ) -> Self {
        Self {
            field: field.to_string(),
            semantic_type,
            placeholder,
            resolver,
            slot: Mutex::new(None),
        }
    }

    pub fn placeholder(&self) -> &SecretPlaceholder {
        &self.placeholder
    }

    /// Whether a read has already resolved the secret
    pub fn is_resolved(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Returns the memoized value, resolving it on first call
    ///
    /// # Errors
    ///
    /// `SecretNotFound`, `SecretStoreUnavailable`, or `TypeCoercionError` when
    /// the fetched secret does not parse as the field type.
    pub fn resolve(&self) -> Result<TypedValue, BindingError> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = slot.as_ref() {
            return Ok(value.clone());
        }

        let secret = self
            .resolver
            .resolve(self.placeholder.provider(), self.placeholder.identifier())
            .map_err(|e| {
                tracing::warn!(field = %self.field, error = %e, "Deferred secret resolution failed");
                e.for_field(&self.field)
            })?;
        let value = self
            .semantic_type
            .coerce_secret(&self.field, &self.placeholder, secret)?;

        tracing::debug!(field = %self.field, provider = self.placeholder.provider(), "Deferred secret resolved");
        *slot = Some(value.clone());
        Ok(value)
    }
}

impl PartialEq for DeferredSecret {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field
            && self.semantic_type == other.semantic_type
            && self.placeholder == other.placeholder
    }
}

impl fmt::Debug for DeferredSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never wait on the slot: a resolution may be in flight
        let resolved = match self.slot.try_lock() {
            Ok(slot) => Some(slot.is_some()),
            Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner().is_some()),
            Err(TryLockError::WouldBlock) => None,
        };
        let mut out = f.debug_struct("DeferredSecret");
        out.field("field", &self.field)
            .field("semantic_type", &self.semantic_type)
            .field("placeholder", &self.placeholder);
        match resolved {
            Some(resolved) => out.field("resolved", &resolved),
            None => out.field("resolved", &"<busy>"),
        };
        out.finish()
    }
}

/// Bound value of one field
#[derive(Debug, PartialEq)]
pub enum FieldValue {
    /// Value known at bind time
    Literal(TypedValue),
    /// Secret fetched on first read
    DeferredSecret(DeferredSecret),
}

impl FieldValue {
    /// Reads the value, resolving a deferred secret if needed
    pub fn get(&self) -> Result<TypedValue, BindingError> {
        match self {
            Self::Literal(value) => Ok(value.clone()),
            Self::DeferredSecret(deferred) => deferred.resolve(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => fmt::Display::fmt(value, f),
            Self::DeferredSecret(deferred) => write!(f, "<deferred {}>", deferred.placeholder()),
        }
    }
}

/// One field of a [`ResolvedConfiguration`]
#[derive(Debug, PartialEq)]
pub struct BoundField {
    pub name: String,
    pub key: ConfigurationKey,
    pub semantic_type: SemanticType,
    /// `None` for optional fields nothing supplied
    pub origin: Option<Origin>,
    pub value: Option<FieldValue>,
}

/// Immutable, typed configuration of one component
#[derive(Debug, PartialEq)]
pub struct ResolvedConfiguration {
    component: String,
    fields: Vec<BoundField>,
    index: HashMap<String, usize>,
}

impl ResolvedConfiguration {
    pub(crate) fn new(component: String, fields: Vec<BoundField>) -> Self {
        let index = fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name.clone(), i))
            .collect();
        Self {
            component,
            fields,
            index,
        }
    }

    /// Component the configuration was bound for
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Fields in schema order
    pub fn fields(&self) -> &[BoundField] {
        &self.fields
    }

    /// Field metadata and value slot by name
    pub fn field(&self, name: &str) -> Option<&BoundField> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    /// Whether a declared field received a value
    pub fn is_set(&self, name: &str) -> Result<bool, BindingError> {
        Ok(self.bound(name)?.value.is_some())
    }

    /// Reads any field as a [`TypedValue`]
    ///
    /// Returns `Ok(None)` for an optional field nothing supplied.
    ///
    /// # Errors
    ///
    /// `UnknownField` for undeclared names, or the deferred secret's failure.
    pub fn value(&self, name: &str) -> Result<Option<TypedValue>, BindingError> {
        self.bound(name)?.value.as_ref().map(FieldValue::get).transpose()
    }

    pub fn string(&self, name: &str) -> Result<Option<String>, BindingError> {
        self.typed(name, SemanticType::String, |v| match v {
            TypedValue::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn boolean(&self, name: &str) -> Result<Option<bool>, BindingError> {
        self.typed(name, SemanticType::Boolean, |v| match v {
            TypedValue::Boolean(b) => Some(b),
            _ => None,
        })
    }

    pub fn integer(&self, name: &str) -> Result<Option<i64>, BindingError> {
        self.typed(name, SemanticType::Integer, |v| match v {
            TypedValue::Integer(i) => Some(i),
            _ => None,
        })
    }

    pub fn uri(&self, name: &str) -> Result<Option<Url>, BindingError> {
        self.typed(name, SemanticType::Uri, |v| match v {
            TypedValue::Uri(u) => Some(u),
            _ => None,
        })
    }

    pub fn duration(&self, name: &str) -> Result<Option<Duration>, BindingError> {
        self.typed(name, SemanticType::Duration, |v| match v {
            TypedValue::Duration(d) => Some(d),
            _ => None,
        })
    }

    pub fn credential(&self, name: &str) -> Result<Option<SecretString>, BindingError> {
        self.typed(name, SemanticType::Credential, |v| match v {
            TypedValue::Credential(c) => Some(c),
            _ => None,
        })
    }

    fn bound(&self, name: &str) -> Result<&BoundField, BindingError> {
        self.field(name).ok_or_else(|| BindingError::UnknownField {
            field: name.to_string(),
        })
    }

    fn typed<T>(
        &self,
        name: &str,
        expected: SemanticType,
        extract: impl FnOnce(TypedValue) -> Option<T>,
    ) -> Result<Option<T>, BindingError> {
        let field = self.bound(name)?;
        if field.semantic_type != expected {
            return Err(BindingError::TypeMismatch {
                field: name.to_string(),
                expected,
                actual: field.semantic_type,
            });
        }
        match &field.value {
            None => Ok(None),
            Some(value) => Ok(extract(value.get()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::secrets::StaticSecretResolver;
    use crate::domain::SecretError;
    use secrecy::ExposeSecret;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn literal(name: &str, value: TypedValue) -> BoundField {
        BoundField {
            name: name.to_string(),
            key: ConfigurationKey::qualified("test", name).unwrap(),
            semantic_type: value.semantic_type(),
            origin: Some(Origin::Source("overrides".to_string())),
            value: Some(FieldValue::Literal(value)),
        }
    }

    fn sample() -> ResolvedConfiguration {
        ResolvedConfiguration::new(
            "test".to_string(),
            vec![
                literal("enabled", TypedValue::Boolean(true)),
                literal("region", TypedValue::String("us-east-1".to_string())),
                BoundField {
                    name: "host".to_string(),
                    key: ConfigurationKey::qualified("test", "host").unwrap(),
                    semantic_type: SemanticType::String,
                    origin: None,
                    value: None,
                },
            ],
        )
    }

    #[test]
    fn test_typed_accessors() {
        let config = sample();
        assert_eq!(config.boolean("enabled").unwrap(), Some(true));
        assert_eq!(config.string("region").unwrap(), Some("us-east-1".to_string()));
        assert_eq!(config.string("host").unwrap(), None);
        assert!(!config.is_set("host").unwrap());
    }

    #[test]
    fn test_unknown_field() {
        let err = sample().value("nope").unwrap_err();
        assert_eq!(
            err,
            BindingError::UnknownField {
                field: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_type_mismatch() {
        let err = sample().integer("enabled").unwrap_err();
        assert_eq!(
            err,
            BindingError::TypeMismatch {
                field: "enabled".to_string(),
                expected: SemanticType::Integer,
                actual: SemanticType::Boolean,
            }
        );
    }

    #[test]
    fn test_deferred_secret_memoizes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let resolver = move |_: &str, _: &str| -> Result<String, SecretError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok("s3cret".to_string())
        };
        let deferred = DeferredSecret::new(
            "password",
            SemanticType::Credential,
            SecretPlaceholder::new("aws", "db/password"),
            Arc::new(resolver),
        );

        assert!(!deferred.is_resolved());
        let first = deferred.resolve().unwrap();
        let second = deferred.resolve().unwrap();
        assert_eq!(first, second);
        assert!(deferred.is_resolved());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        match first {
            TypedValue::Credential(secret) => assert_eq!(secret.expose_secret().as_str(), "s3cret"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_deferred_failure_is_not_cached() {
        let deferred = DeferredSecret::new(
            "token",
            SemanticType::String,
            SecretPlaceholder::new("aws", "missing"),
            Arc::new(StaticSecretResolver::new()),
        );
        let err = deferred.resolve().unwrap_err();
        assert!(matches!(err, BindingError::SecretNotFound { ref field, .. } if field == "token"));
        assert!(!deferred.is_resolved());
    }

    #[test]
    fn test_display_hides_secrets() {
        let deferred = FieldValue::DeferredSecret(DeferredSecret::new(
            "token",
            SemanticType::Credential,
            SecretPlaceholder::new("aws", "token"),
            Arc::new(StaticSecretResolver::new()),
        ));
        assert_eq!(deferred.to_string(), "<deferred {{aws:token}}>");
        assert!(!format!("{deferred:?}").contains("resolver"));
    }

    #[test]
    fn test_debug_does_not_wait_for_resolution() {
        let deferred = DeferredSecret::new(
            "token",
            SemanticType::Credential,
            SecretPlaceholder::new("aws", "token"),
            Arc::new(StaticSecretResolver::new()),
        );
        assert!(format!("{deferred:?}").contains("resolved: false"));

        let _in_flight = deferred.slot.lock().unwrap();
        assert!(format!("{deferred:?}").contains("<busy>"));
    }
}
