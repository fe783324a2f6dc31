//! In-memory secret store

use super::traits::SecretResolver;
use crate::config::{secret_string, SecretString};
use crate::domain::SecretError;
use std::collections::HashMap;

/// Fixed set of secrets keyed by `(provider, identifier)`
///
/// Useful for tests and for hosts that fetch secrets up front.
#[derive(Debug, Clone, Default)]
pub struct StaticSecretResolver {
    secrets: HashMap<(String, String), SecretString>,
}

impl StaticSecretResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a secret, builder style
    pub fn with_secret(
        mut self,
        provider: impl Into<String>,
        identifier: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(provider, identifier, value);
        self
    }

    /// Adds or replaces a secret
    pub fn insert(
        &mut self,
        provider: impl Into<String>,
        identifier: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.secrets.insert(
            (provider.into(), identifier.into()),
            secret_string(value.into()),
        );
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl SecretResolver for StaticSecretResolver {
    fn resolve(&self, provider: &str, identifier: &str) -> Result<SecretString, SecretError> {
        self.secrets
            .get(&(provider.to_string(), identifier.to_string()))
            .cloned()
            .ok_or_else(|| SecretError::not_found(provider, identifier))
    }
}
