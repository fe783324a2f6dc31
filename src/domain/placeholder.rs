//! Secret placeholder syntax
//!
//! A placeholder is a raw value of the form `{{provider:identifier}}` that
//! refers to a secret held by an external store, for example
//! `{{aws:testSecret/password}}`. Only values consisting of exactly one
//! placeholder (surrounding whitespace aside) are recognized.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\{\{([A-Za-z0-9_-]+):([^{}]+)\}\}$").expect("placeholder pattern is valid")
    })
}

/// Reference to an externally stored secret
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SecretPlaceholder {
    provider: String,
    identifier: String,
}

impl SecretPlaceholder {
    /// Creates a placeholder from its parts
    pub fn new(provider: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            identifier: identifier.into(),
        }
    }

    /// Parses a whole-field placeholder
    ///
    /// Returns `None` when `raw` is anything other than a single placeholder.
    ///
    /// ```
    /// use propbind::domain::SecretPlaceholder;
    ///
    /// let p = SecretPlaceholder::parse("{{aws:testSecret/password}}").unwrap();
    /// assert_eq!(p.provider(), "aws");
    /// assert_eq!(p.identifier(), "testSecret/password");
    /// assert!(SecretPlaceholder::parse("prefix-{{aws:x}}").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = placeholder_pattern().captures(raw.trim())?;
        Some(Self::new(&caps[1], &caps[2]))
    }

    /// Whether `raw` carries placeholder braces without being a whole-field placeholder
    pub fn is_mixed_content(raw: &str) -> bool {
        raw.contains("{{") && Self::parse(raw).is_none()
    }

    /// Secret store name, e.g. `aws`
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Secret name within the store
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl fmt::Display for SecretPlaceholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}:{}}}}}", self.provider, self.identifier)
    }
}
