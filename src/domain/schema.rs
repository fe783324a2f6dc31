//! Configuration schema types
//!
//! A [`ConfigurationSchema`] is the explicit description of one component's
//! settings: an ordered list of [`FieldDescriptor`]s under a key prefix. It is
//! built once with [`SchemaBuilder`] and never modified afterwards.

use super::errors::BindingError;
use super::key::ConfigurationKey;
use super::placeholder::SecretPlaceholder;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Semantic type of a configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    /// Free text
    String,
    /// `true` / `false`
    Boolean,
    /// Signed 64-bit integer
    Integer,
    /// Absolute URI
    Uri,
    /// Milliseconds or `1m30s` style duration
    Duration,
    /// Opaque credential reference, never displayed
    Credential,
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Uri => "uri",
            Self::Duration => "duration",
            Self::Credential => "credential",
        };
        f.pad(name)
    }
}

/// Documentation and binding metadata for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field name, e.g. `specificationUri`
    pub name: String,

    /// Fully-qualified configuration key
    pub key: ConfigurationKey,

    /// Semantic type raw values are coerced to
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,

    /// Raw default applied when no source supplies the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Whether binding fails when the field is absent and has no default
    pub required: bool,

    /// Human-readable description
    pub description: String,
}

/// Builder for a single field
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    semantic_type: SemanticType,
    default: Option<String>,
    required: bool,
    description: String,
}

impl Field {
    /// Starts a field of the given type
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            semantic_type,
            default: None,
            required: false,
            description: String::new(),
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::String)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Boolean)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Integer)
    }

    pub fn uri(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Uri)
    }

    pub fn duration(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Duration)
    }

    pub fn credential(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Credential)
    }

    /// Sets the raw default value
    pub fn default_value(mut self, raw: impl Into<String>) -> Self {
        self.default = Some(raw.into());
        self
    }

    /// Marks the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the description
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }
}

/// Immutable, ordered schema of one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationSchema {
    component: String,
    prefix: String,
    fields: Vec<FieldDescriptor>,
    index: HashMap<String, usize>,
}

impl ConfigurationSchema {
    /// Starts a schema for `component` whose keys live under `prefix`
    ///
    /// # Examples
    ///
    /// ```
    /// use propbind::domain::{ConfigurationSchema, Field};
    ///
    /// let schema = ConfigurationSchema::builder("rest-openapi", "camel.component.rest-openapi")
    ///     .field(Field::boolean("enabled").default_value("true"))
    ///     .field(Field::uri("specificationUri").required())
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(schema.fields().len(), 2);
    /// ```
    pub fn builder(component: impl Into<String>, prefix: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            component: component.into(),
            prefix: prefix.into(),
            fields: Vec::new(),
        }
    }

    /// Component name, e.g. `rest-openapi`
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Key prefix, e.g. `camel.component.rest-openapi`
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Looks up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.index.get(name).map(|&i| &self.fields[i])
    }
}

/// Builder for [`ConfigurationSchema`]
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    component: String,
    prefix: String,
    fields: Vec<Field>,
}

impl SchemaBuilder {
    /// Appends a field
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Validates and freezes the schema
    ///
    /// # Errors
    ///
    /// - [`BindingError::DuplicateFieldDefinition`] when two fields share a name
    ///   or map to the same configuration key (`basePath` and `base-path`)
    /// - [`BindingError::InvalidKey`] for empty names or a malformed prefix
    /// - [`BindingError::TypeCoercionError`] when a literal default does not
    ///   parse as the field type (placeholder defaults are checked at bind time)
    pub fn build(self) -> Result<ConfigurationSchema, BindingError> {
        let mut fields = Vec::with_capacity(self.fields.len());
        let mut index = HashMap::with_capacity(self.fields.len());
        let mut keys = HashSet::with_capacity(self.fields.len());

        for field in self.fields {
            if field.name.is_empty() {
                return Err(BindingError::invalid_key(
                    &self.prefix,
                    "field name cannot be empty",
                ));
            }
            if index.contains_key(&field.name) {
                return Err(BindingError::DuplicateFieldDefinition { field: field.name });
            }
            let key = ConfigurationKey::qualified(&self.prefix, &field.name)?;
            if !keys.insert(key.clone()) {
                return Err(BindingError::DuplicateFieldDefinition { field: field.name });
            }
            if let Some(default) = &field.default {
                if SecretPlaceholder::parse(default).is_none() {
                    field.semantic_type.coerce(&field.name, default)?;
                }
            }

            index.insert(field.name.clone(), fields.len());
            fields.push(FieldDescriptor {
                name: field.name,
                key,
                semantic_type: field.semantic_type,
                default: field.default,
                required: field.required,
                description: field.description,
            });
        }

        Ok(ConfigurationSchema {
            component: self.component,
            prefix: self.prefix,
            fields,
            index,
        })
    }
}
