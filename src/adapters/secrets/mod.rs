//! Secret store adapters
//!
//! - [`traits`] - the [`SecretResolver`] seam
//! - [`memory`] - fixed in-memory secrets
//! - [`env`] - `{{env:NAME}}` from the process environment
//! - [`file`] - `{{file:/path}}` from mounted files
//! - [`registry`] - routing by provider name

pub mod env;
pub mod file;
pub mod memory;
pub mod registry;
pub mod traits;

pub use env::EnvSecretResolver;
pub use file::FileSecretResolver;
pub use memory::StaticSecretResolver;
pub use registry::SecretResolverRegistry;
pub use traits::SecretResolver;
