//! Environment variable secret store

use super::traits::SecretResolver;
use crate::config::{secret_string, SecretString};
use crate::domain::SecretError;
use std::env::VarError;

/// Provider name served by default
pub const ENV_PROVIDER: &str = "env";

/// Resolves `{{env:VAR_NAME}}` from the process environment
#[derive(Debug, Clone)]
pub struct EnvSecretResolver {
    provider: String,
}

impl EnvSecretResolver {
    pub fn new() -> Self {
        Self {
            provider: ENV_PROVIDER.to_string(),
        }
    }

    /// Serves a provider name other than `env`
    pub fn with_provider(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
        }
    }
}

impl Default for EnvSecretResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretResolver for EnvSecretResolver {
    fn resolve(&self, provider: &str, identifier: &str) -> Result<SecretString, SecretError> {
        if provider != self.provider {
            return Err(SecretError::unavailable(
                provider,
                format!("environment resolver only serves '{}'", self.provider),
            ));
        }
        match std::env::var(identifier) {
            Ok(value) => Ok(secret_string(value)),
            Err(VarError::NotPresent) => Err(SecretError::not_found(provider, identifier)),
            Err(VarError::NotUnicode(_)) => Err(SecretError::unavailable(
                provider,
                format!("variable '{identifier}' is not valid unicode"),
            )),
        }
    }
}
