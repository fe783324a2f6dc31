//! Provider-routing secret resolver

use super::env::{EnvSecretResolver, ENV_PROVIDER};
use super::file::{FileSecretResolver, FILE_PROVIDER};
use super::traits::SecretResolver;
use crate::config::SecretString;
use crate::domain::SecretError;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Routes each placeholder to the resolver registered for its provider
///
/// Placeholders naming an unregistered provider fail with
/// [`SecretError::StoreUnavailable`].
///
/// # Examples
///
/// ```
/// use propbind::adapters::secrets::{SecretResolver, SecretResolverRegistry, StaticSecretResolver};
///
/// let registry = SecretResolverRegistry::new()
///     .register("aws", StaticSecretResolver::new().with_secret("aws", "db", "pw"));
/// assert!(registry.resolve("aws", "db").is_ok());
/// assert!(registry.resolve("vault", "db").is_err());
/// ```
#[derive(Clone, Default)]
pub struct SecretResolverRegistry {
    resolvers: BTreeMap<String, Arc<dyn SecretResolver>>,
}

impl SecretResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry serving the `env` and `file` providers
    pub fn with_defaults() -> Self {
        Self::new()
            .register(ENV_PROVIDER, EnvSecretResolver::new())
            .register(FILE_PROVIDER, FileSecretResolver::new())
    }

    /// Registers `resolver` for `provider`, replacing any previous one
    pub fn register(
        mut self,
        provider: impl Into<String>,
        resolver: impl SecretResolver + 'static,
    ) -> Self {
        self.resolvers.insert(provider.into(), Arc::new(resolver));
        self
    }

    /// Registers an already shared resolver for `provider`
    pub fn register_shared(
        mut self,
        provider: impl Into<String>,
        resolver: Arc<dyn SecretResolver>,
    ) -> Self {
        self.resolvers.insert(provider.into(), resolver);
        self
    }

    /// Registered provider names in sorted order
    pub fn providers(&self) -> impl Iterator<Item = &str> {
        self.resolvers.keys().map(String::as_str)
    }
}

impl SecretResolver for SecretResolverRegistry {
    fn resolve(&self, provider: &str, identifier: &str) -> Result<SecretString, SecretError> {
        let resolver = self.resolvers.get(provider).ok_or_else(|| {
            SecretError::unavailable(provider, "no secret resolver registered for provider")
        })?;
        tracing::debug!(provider, identifier, "Resolving secret");
        resolver.resolve(provider, identifier)
    }
}

impl fmt::Debug for SecretResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretResolverRegistry")
            .field("providers", &self.resolvers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::secrets::StaticSecretResolver;
    use secrecy::ExposeSecret;

    #[test]
    fn test_routes_by_provider() {
        let registry = SecretResolverRegistry::new()
            .register("aws", StaticSecretResolver::new().with_secret("aws", "k", "from-aws"))
            .register("vault", StaticSecretResolver::new().with_secret("vault", "k", "from-vault"));

        let aws = registry.resolve("aws", "k").unwrap();
        let vault = registry.resolve("vault", "k").unwrap();
        assert_eq!(aws.expose_secret().as_str(), "from-aws");
        assert_eq!(vault.expose_secret().as_str(), "from-vault");
    }

    #[test]
    fn test_unknown_provider_is_unavailable() {
        let err = SecretResolverRegistry::new().resolve("aws", "k").unwrap_err();
        assert!(matches!(err, SecretError::StoreUnavailable { ref provider, .. } if provider == "aws"));
    }

    #[test]
    fn test_defaults_register_env_and_file() {
        let registry = SecretResolverRegistry::with_defaults();
        let providers: Vec<_> = registry.providers().collect();
        assert_eq!(providers, ["env", "file"]);
        assert!(format!("{registry:?}").contains("env"));
    }
}
