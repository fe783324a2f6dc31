//! Bind command implementation
//!
//! Layers `--set` overrides, the environment and `--file` sources, binds the
//! component and prints every field with its origin.

use super::find_schema;
use crate::adapters::secrets::SecretResolverRegistry;
use crate::config::SourceLayers;
use crate::core::{BoundField, ConfigurationBinder};
use crate::domain::{ConfigSource, ConfigurationSchema, PropbindError};
use clap::{Args, ArgAction};

/// Field consulted when `--early-resolve` is not given
const EARLY_RESOLVE_FIELD: &str = "earlyResolveProperties";

/// Arguments for the bind command
#[derive(Args, Debug)]
pub struct BindArgs {
    /// Component name, e.g. aws-secrets-manager
    pub component: String,

    /// Configuration file (.toml or .properties); earlier files win
    #[arg(short, long = "file", action = ArgAction::Append)]
    pub files: Vec<String>,

    /// Override as KEY=VALUE; highest precedence
    #[arg(short = 's', long = "set", action = ArgAction::Append)]
    pub overrides: Vec<String>,

    /// Resolve secret placeholders during binding
    #[arg(long)]
    pub early_resolve: Option<bool>,
}

impl BindArgs {
    /// Execute the bind command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let Some(schema) = find_schema(&self.component)? else {
            return Ok(2);
        };

        let sources = match self.sources(&schema) {
            Ok(sources) => sources,
            Err(e) => {
                println!("❌ Failed to load configuration sources");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let binder = ConfigurationBinder::new(SecretResolverRegistry::with_defaults());
        let early = match self.early_resolve {
            Some(early) => early,
            None => early_resolve_setting(&binder, &schema, &sources),
        };
        tracing::info!(component = %schema.component(), early_resolve = early, "Binding component");

        match binder.early_resolve(early).bind(&schema, &sources) {
            Ok(config) => {
                println!("✅ {} bound", config.component());
                println!();
                for field in config.fields() {
                    println!("{}", render_field(field));
                }
                Ok(0)
            }
            Err(e) => {
                println!("❌ Binding failed");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }

    fn sources(&self, schema: &ConfigurationSchema) -> Result<Vec<ConfigSource>, PropbindError> {
        let mut layers = SourceLayers::new()
            .overrides(self.overrides.as_slice())?
            .environment(schema);
        for file in &self.files {
            layers = layers.file(file)?;
        }
        Ok(layers.build())
    }
}

/// Reads the component's own early-resolution flag from a lazy bind
///
/// Defaults to early resolution when the component has no such field or the
/// lazy bind fails; the real bind reports the failure.
fn early_resolve_setting(
    binder: &ConfigurationBinder,
    schema: &ConfigurationSchema,
    sources: &[ConfigSource],
) -> bool {
    if schema.field(EARLY_RESOLVE_FIELD).is_none() {
        return true;
    }
    binder
        .clone()
        .early_resolve(false)
        .bind(schema, sources)
        .ok()
        .and_then(|config| config.boolean(EARLY_RESOLVE_FIELD).ok().flatten())
        .unwrap_or(true)
}

fn render_field(field: &BoundField) -> String {
    match (&field.value, &field.origin) {
        (Some(value), Some(origin)) => format!("  {} = {} ({})", field.key, value, origin),
        _ => format!("  {} (unset)", field.key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::secrets::StaticSecretResolver;
    use crate::catalog;

    fn args(component: &str, overrides: &[&str]) -> BindArgs {
        BindArgs {
            component: component.to_string(),
            files: Vec::new(),
            overrides: overrides.iter().map(|s| s.to_string()).collect(),
            early_resolve: None,
        }
    }

    #[test]
    fn test_render_redacts_credentials() {
        let schema = catalog::aws_secrets_manager::schema().unwrap();
        let source = ConfigSource::new("overrides").with("secretKey", "hunter2");
        let config = ConfigurationBinder::default().bind(&schema, &[source]).unwrap();
        let rendered = render_field(config.field("secretKey").unwrap());
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("********"));
        assert!(rendered.contains("(overrides)"));
    }

    #[test]
    fn test_render_deferred_shows_placeholder() {
        let schema = catalog::aws_secrets_manager::schema().unwrap();
        let source = ConfigSource::new("overrides").with("secretKey", "{{aws:prod/key}}");
        let binder = ConfigurationBinder::new(StaticSecretResolver::new()).early_resolve(false);
        let config = binder.bind(&schema, &[source]).unwrap();
        let rendered = render_field(config.field("secretKey").unwrap());
        assert!(rendered.contains("{{aws:prod/key}}"));
    }

    #[test]
    fn test_render_unset() {
        let schema = catalog::fhir::schema().unwrap();
        let config = ConfigurationBinder::default().bind(&schema, &[]).unwrap();
        let rendered = render_field(config.field("serverUrl").unwrap());
        assert!(rendered.ends_with("(unset)"));
    }

    #[test]
    fn test_early_resolve_follows_component_flag() {
        let schema = catalog::aws_secrets_manager::schema().unwrap();
        let binder = ConfigurationBinder::default();

        assert!(!early_resolve_setting(&binder, &schema, &[]));

        let source = ConfigSource::new("overrides").with("earlyResolveProperties", "true");
        assert!(early_resolve_setting(&binder, &schema, &[source]));
    }

    #[test]
    fn test_early_resolve_defaults_on_without_flag_field() {
        let schema = catalog::fhir::schema().unwrap();
        assert!(early_resolve_setting(&ConfigurationBinder::default(), &schema, &[]));
    }

    #[tokio::test]
    async fn test_bind_coercion_error_exit_code() {
        let args = args("rest-openapi", &["specificationUri=not a uri"]);
        assert_eq!(args.execute().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_bind_bad_override_exit_code() {
        let args = args("fhir", &["no-separator"]);
        assert_eq!(args.execute().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_bind_success() {
        let args = args("fhir", &["serverUrl=http://localhost:8080/fhir"]);
        assert_eq!(args.execute().await.unwrap(), 0);
    }
}
