//! Configuration binder
//!
//! [`ConfigurationBinder::bind`] turns a [`ConfigurationSchema`] and an ordered
//! list of raw [`ConfigSource`] layers into a [`ResolvedConfiguration`]:
//!
//! 1. For each field, in schema order, the first layer holding the field's
//!    qualified key (or, failing that, its bare name) supplies the raw value.
//! 2. Otherwise the schema default applies; a required field with neither
//!    fails with `MissingRequiredField`.
//! 3. A whole-field `{{provider:identifier}}` placeholder is resolved now
//!    (early resolution) or wrapped as a deferred secret (lazy resolution).
//! 4. Everything else is coerced to the field's semantic type.
//!
//! Binding is atomic: the first error aborts it and nothing partial escapes.

use super::resolved::{BoundField, DeferredSecret, FieldValue, Origin, ResolvedConfiguration};
use crate::adapters::secrets::{SecretResolver, SecretResolverRegistry};
use crate::domain::{
    BindingError, ConfigSource, ConfigurationSchema, FieldDescriptor, SecretPlaceholder,
};
use crate::{log_bind_complete, log_field_bound};
use std::fmt;
use std::sync::Arc;

/// Binds schemas against layered sources
///
/// # Examples
///
/// ```
/// use propbind::adapters::secrets::StaticSecretResolver;
/// use propbind::core::ConfigurationBinder;
/// use propbind::domain::{ConfigSource, ConfigurationSchema, Field};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = ConfigurationSchema::builder("aws-secrets-manager", "camel.component.aws-secrets-manager")
///     .field(Field::string("region").required())
///     .field(Field::string("password"))
///     .build()?;
///
/// let resolver = StaticSecretResolver::new().with_secret("aws", "testSecret/password", "string");
/// let binder = ConfigurationBinder::new(resolver);
///
/// let overrides = ConfigSource::new("overrides").with("region", "us-east-1");
/// let file = ConfigSource::new("application.properties")
///     .with("camel.component.aws-secrets-manager.region", "eu-west-1")
///     .with("password", "{{aws:testSecret/password}}");
///
/// let config = binder.bind(&schema, &[overrides, file])?;
/// assert_eq!(config.string("region")?.as_deref(), Some("us-east-1"));
/// assert_eq!(config.string("password")?.as_deref(), Some("string"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ConfigurationBinder {
    resolver: Arc<dyn SecretResolver>,
    early_resolve: bool,
}

impl ConfigurationBinder {
    /// Creates a binder resolving placeholders through `resolver`
    ///
    /// Early resolution is enabled.
    pub fn new(resolver: impl SecretResolver + 'static) -> Self {
        Self::with_shared_resolver(Arc::new(resolver))
    }

    /// Creates a binder from an already shared resolver
    pub fn with_shared_resolver(resolver: Arc<dyn SecretResolver>) -> Self {
        Self {
            resolver,
            early_resolve: true,
        }
    }

    /// Resolve placeholders during `bind` (`true`) or on first read (`false`)
    pub fn early_resolve(mut self, enabled: bool) -> Self {
        self.early_resolve = enabled;
        self
    }

    pub fn is_early_resolve(&self) -> bool {
        self.early_resolve
    }

    /// Binds `schema` against `sources`, highest precedence first
    ///
    /// # Errors
    ///
    /// The first failure in schema order:
    /// - `MissingRequiredField`
    /// - `TypeCoercionError`
    /// - `SecretNotFound` / `SecretStoreUnavailable` (early resolution only)
    pub fn bind(
        &self,
        schema: &ConfigurationSchema,
        sources: &[ConfigSource],
    ) -> Result<ResolvedConfiguration, BindingError> {
        let span = tracing::info_span!(
            "bind",
            component = schema.component(),
            early_resolve = self.early_resolve
        );
        let _enter = span.enter();

        let mut fields = Vec::with_capacity(schema.fields().len());
        for descriptor in schema.fields() {
            let bound = self.bind_field(descriptor, sources).inspect_err(|e| {
                tracing::warn!(field = %descriptor.name, error = %e, "Binding failed");
            })?;
            fields.push(bound);
        }

        log_bind_complete!(schema.component(), fields.len());
        Ok(ResolvedConfiguration::new(
            schema.component().to_string(),
            fields,
        ))
    }

    fn bind_field(
        &self,
        descriptor: &FieldDescriptor,
        sources: &[ConfigSource],
    ) -> Result<BoundField, BindingError> {
        let (raw, origin) = match lookup(descriptor, sources) {
            Some((raw, source)) => (raw, Origin::Source(source.to_string())),
            None => match &descriptor.default {
                Some(default) => (default.as_str(), Origin::Default),
                None if descriptor.required => {
                    return Err(BindingError::MissingRequiredField {
                        field: descriptor.name.clone(),
                        key: descriptor.key.to_string(),
                    });
                }
                None => {
                    return Ok(BoundField {
                        name: descriptor.name.clone(),
                        key: descriptor.key.clone(),
                        semantic_type: descriptor.semantic_type,
                        origin: None,
                        value: None,
                    });
                }
            },
        };

        let value = self.bind_value(descriptor, raw)?;
        log_field_bound!(&descriptor.name, &origin);

        Ok(BoundField {
            name: descriptor.name.clone(),
            key: descriptor.key.clone(),
            semantic_type: descriptor.semantic_type,
            origin: Some(origin),
            value: Some(value),
        })
    }

    fn bind_value(
        &self,
        descriptor: &FieldDescriptor,
        raw: &str,
    ) -> Result<FieldValue, BindingError> {
        let field = descriptor.name.as_str();
        let ty = descriptor.semantic_type;

        let Some(placeholder) = SecretPlaceholder::parse(raw) else {
            if SecretPlaceholder::is_mixed_content(raw) {
                tracing::debug!(field, "Value mixes text and placeholders; binding it literally");
            }
            return ty.coerce(field, raw).map(FieldValue::Literal);
        };

        if !self.early_resolve {
            return Ok(FieldValue::DeferredSecret(DeferredSecret::new(
                field,
                ty,
                placeholder,
                Arc::clone(&self.resolver),
            )));
        }

        let secret = self
            .resolver
            .resolve(placeholder.provider(), placeholder.identifier())
            .map_err(|e| e.for_field(field))?;
        ty.coerce_secret(field, &placeholder, secret)
            .map(FieldValue::Literal)
    }

    /// Documentation metadata for `schema`, in declaration order
    pub fn describe(schema: &ConfigurationSchema) -> Vec<FieldDescriptor> {
        describe(schema)
    }
}

impl Default for ConfigurationBinder {
    /// Binder serving the `env` and `file` providers
    fn default() -> Self {
        Self::new(SecretResolverRegistry::with_defaults())
    }
}

impl fmt::Debug for ConfigurationBinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationBinder")
            .field("early_resolve", &self.early_resolve)
            .finish_non_exhaustive()
    }
}

/// Documentation metadata for `schema`, in declaration order
pub fn describe(schema: &ConfigurationSchema) -> Vec<FieldDescriptor> {
    schema.fields().to_vec()
}

/// First layer holding the field: qualified key first, then bare name
fn lookup<'a>(
    descriptor: &FieldDescriptor,
    sources: &'a [ConfigSource],
) -> Option<(&'a str, &'a str)> {
    sources.iter().find_map(|source| {
        source
            .get(descriptor.key.as_str())
            .or_else(|| source.get(&descriptor.name))
            .map(|raw| (raw, source.name()))
    })
}
