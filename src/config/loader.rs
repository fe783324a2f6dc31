//! Source loaders
//!
//! Builds the raw [`ConfigSource`] layers consumed by the binder:
//!
//! - explicit overrides (`key=value` pairs supplied by the host)
//! - environment variables derived from each field's configuration key
//! - TOML files, flattened to dotted keys
//! - Java-style `.properties` files
//!
//! File contents go through `${VAR}` environment substitution before parsing.

use crate::domain::errors::PropbindError;
use crate::domain::result::Result;
use crate::domain::{ConfigSource, ConfigurationSchema};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Loads a file source
///
/// `.toml` files are parsed as TOML and flattened; any other extension is
/// parsed as properties. The source is named after the path.
///
/// # Errors
///
/// Returns an error if:
/// - File does not exist or cannot be read
/// - A referenced `${VAR}` is not set
/// - The content does not parse
///
/// # Examples
///
/// ```no_run
/// use propbind::config::load_source;
///
/// let source = load_source("application.properties").expect("Failed to load properties");
/// println!("{} keys", source.len());
/// ```
pub fn load_source(path: impl AsRef<Path>) -> Result<ConfigSource> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PropbindError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PropbindError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;
    let name = path.display().to_string();

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let source = if is_toml {
        parse_toml(&name, &contents)?
    } else {
        parse_properties(&name, &contents)
    };

    tracing::debug!(path = %name, keys = source.len(), "Loaded configuration file");
    Ok(source)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is valid")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines (`#` or `!`) are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
pub fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with('#') || trimmed.starts_with('!') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PropbindError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Parses TOML into a flat source
///
/// Nested tables join with `.`; arrays of scalars join with `,`. Arrays of
/// tables are rejected.
pub fn parse_toml(name: &str, contents: &str) -> Result<ConfigSource> {
    let table: toml::Table = toml::from_str(contents)?;
    let mut source = ConfigSource::new(name);
    for (key, value) in &table {
        flatten_toml(key, value, &mut source)?;
    }
    Ok(source)
}

fn flatten_toml(prefix: &str, value: &toml::Value, out: &mut ConfigSource) -> Result<()> {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                flatten_toml(&format!("{prefix}.{key}"), child, out)?;
            }
        }
        toml::Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                parts.push(toml_scalar(prefix, item)?);
            }
            out.insert(prefix, parts.join(","));
        }
        scalar => out.insert(prefix, toml_scalar(prefix, scalar)?),
    }
    Ok(())
}

fn toml_scalar(key: &str, value: &toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Datetime(d) => Ok(d.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => Err(PropbindError::Configuration(
            format!("Unsupported nested value for key '{key}'"),
        )),
    }
}

/// Parses Java-style properties
///
/// Accepts `key=value` and `key: value`. Blank lines and lines starting with
/// `#` or `!` are skipped; keys and values are trimmed. A line without a
/// separator binds the key to an empty value.
pub fn parse_properties(name: &str, contents: &str) -> ConfigSource {
    let mut source = ConfigSource::new(name);
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        match line.find(['=', ':']) {
            Some(pos) => source.insert(line[..pos].trim(), line[pos + 1..].trim()),
            None => source.insert(line, ""),
        }
    }
    source
}

/// Collects environment values for every field of `schema`
///
/// Each field's variable name comes from
/// [`ConfigurationKey::env_var_name`](crate::domain::ConfigurationKey::env_var_name);
/// found values are stored under the qualified key.
pub fn environment_source(schema: &ConfigurationSchema) -> ConfigSource {
    let mut source = ConfigSource::new("environment");
    for field in schema.fields() {
        if let Ok(value) = std::env::var(field.key.env_var_name()) {
            source.insert(field.key.as_str(), value);
        }
    }
    source
}

/// Parses `key=value` override strings
///
/// # Errors
///
/// Returns an error for entries without `=` or with an empty key
pub fn parse_overrides<S: AsRef<str>>(entries: &[S]) -> Result<ConfigSource> {
    let mut source = ConfigSource::new("overrides");
    for entry in entries {
        let entry = entry.as_ref();
        let (key, value) = entry.split_once('=').ok_or_else(|| {
            PropbindError::Configuration(format!(
                "Invalid override '{entry}': expected KEY=VALUE"
            ))
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(PropbindError::Configuration(format!(
                "Invalid override '{entry}': key cannot be empty"
            )));
        }
        source.insert(key, value);
    }
    Ok(source)
}

/// Assembles source layers in precedence order
///
/// Overrides come first, then the environment, then files in the order they
/// were added.
///
/// # Examples
///
/// ```no_run
/// use propbind::catalog;
/// use propbind::config::SourceLayers;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = catalog::rest_openapi::schema()?;
/// let sources = SourceLayers::new()
///     .overrides(&["camel.component.rest-openapi.host=https://api.example.com"])?
///     .environment(&schema)
///     .file("application.properties")?
///     .build();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SourceLayers {
    overrides: Option<ConfigSource>,
    environment: Option<ConfigSource>,
    files: Vec<ConfigSource>,
}

impl SourceLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the override layer from `key=value` strings
    pub fn overrides<S: AsRef<str>>(mut self, entries: &[S]) -> Result<Self> {
        self.overrides = Some(parse_overrides(entries)?);
        Ok(self)
    }

    /// Sets the environment layer for `schema`
    pub fn environment(mut self, schema: &ConfigurationSchema) -> Self {
        self.environment = Some(environment_source(schema));
        self
    }

    /// Appends a file layer below the ones already added
    pub fn file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.files.push(load_source(path)?);
        Ok(self)
    }

    /// Appends an already-built layer below the ones already added
    pub fn source(mut self, source: ConfigSource) -> Self {
        self.files.push(source);
        self
    }

    /// Returns layers highest precedence first
    pub fn build(self) -> Vec<ConfigSource> {
        self.overrides
            .into_iter()
            .chain(self.environment)
            .chain(self.files)
            .collect()
    }
}
