//! Secret resolution trait
//!
//! This module defines the seam between the binder and any external secret
//! backend (a cloud secrets manager, a vault, the process environment).

use crate::config::{secret_string, SecretString};
use crate::domain::SecretError;

/// Resolves `{{provider:identifier}}` placeholders to secret values
///
/// Implementations may be called concurrently. They own any timeout or retry
/// policy; the binder calls each placeholder at most once per successful
/// resolution and never retries on its own.
///
/// Any `Fn(&str, &str) -> Result<String, SecretError>` closure is a resolver:
///
/// ```
/// use propbind::adapters::secrets::SecretResolver;
/// use propbind::domain::SecretError;
/// use secrecy::ExposeSecret;
///
/// let resolver = |provider: &str, identifier: &str| -> Result<String, SecretError> {
///     match (provider, identifier) {
///         ("aws", "testSecret/password") => Ok("string".to_string()),
///         _ => Err(SecretError::not_found(provider, identifier)),
///     }
/// };
/// let secret = resolver.resolve("aws", "testSecret/password").unwrap();
/// assert_eq!(secret.expose_secret().as_str(), "string");
/// ```
pub trait SecretResolver: Send + Sync {
    /// Fetches the secret named `identifier` from the store named `provider`
    ///
    /// # Errors
    ///
    /// - [`SecretError::NotFound`] when the store has no such secret
    /// - [`SecretError::StoreUnavailable`] when the store cannot answer
    fn resolve(&self, provider: &str, identifier: &str) -> Result<SecretString, SecretError>;
}

impl<F> SecretResolver for F
where
    F: Fn(&str, &str) -> Result<String, SecretError> + Send + Sync,
{
    fn resolve(&self, provider: &str, identifier: &str) -> Result<SecretString, SecretError> {
        self(provider, identifier).map(secret_string)
    }
}
