//! File-backed secret store
//!
//! Resolves `{{file:/run/secrets/db-password}}` by reading the file, the way
//! container orchestrators mount secrets.

use super::traits::SecretResolver;
use crate::config::{secret_string, SecretString};
use crate::domain::SecretError;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Provider name served by default
pub const FILE_PROVIDER: &str = "file";

/// Reads secrets from files
///
/// Relative identifiers are joined onto the base directory when one is set.
/// Trailing line breaks are stripped.
#[derive(Debug, Clone, Default)]
pub struct FileSecretResolver {
    base_dir: Option<PathBuf>,
}

impl FileSecretResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves relative identifiers under `dir`
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
        }
    }

    fn path_for(&self, identifier: &str) -> PathBuf {
        let path = PathBuf::from(identifier);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        }
    }
}

impl SecretResolver for FileSecretResolver {
    fn resolve(&self, provider: &str, identifier: &str) -> Result<SecretString, SecretError> {
        let path = self.path_for(identifier);
        match std::fs::read_to_string(&path) {
            Ok(mut contents) => {
                let trimmed_len = contents.trim_end_matches(['\n', '\r']).len();
                contents.truncate(trimmed_len);
                Ok(secret_string(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(SecretError::not_found(provider, identifier))
            }
            Err(e) => Err(SecretError::unavailable(
                provider,
                format!("failed to read {}: {e}", path.display()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use tempfile::TempDir;

    #[test]
    fn test_reads_and_trims_secret_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("db-password"), "hunter2\r\n").unwrap();

        let resolver = FileSecretResolver::with_base_dir(dir.path());
        let secret = resolver.resolve("file", "db-password").unwrap();
        assert_eq!(secret.expose_secret().as_str(), "hunter2");
    }

    #[test]
    fn test_absolute_path_ignores_base_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "abc").unwrap();

        let resolver = FileSecretResolver::with_base_dir("/nonexistent");
        let secret = resolver
            .resolve("file", path.to_str().unwrap())
            .unwrap();
        assert_eq!(secret.expose_secret().as_str(), "abc");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let resolver = FileSecretResolver::with_base_dir(dir.path());
        let err = resolver.resolve("file", "absent").unwrap_err();
        assert_eq!(err, SecretError::not_found("file", "absent"));
    }

    #[test]
    fn test_directory_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let resolver = FileSecretResolver::new();
        let err = resolver
            .resolve("file", dir.path().to_str().unwrap())
            .unwrap_err();
        assert!(matches!(err, SecretError::StoreUnavailable { .. }));
    }
}
