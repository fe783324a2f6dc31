//! CLI command implementations
//!
//! Exit codes: 0 on success, 2 on a binding or configuration error, 5 on a
//! fatal error.

pub mod bind;
pub mod describe;
pub mod list;

use crate::catalog;
use crate::domain::ConfigurationSchema;

/// Looks up a catalog schema, printing an error for unknown names
fn find_schema(component: &str) -> anyhow::Result<Option<ConfigurationSchema>> {
    let schema = catalog::schema(component)?;
    if schema.is_none() {
        eprintln!("❌ Unknown component: {component}");
        eprintln!("   Known components: {}", catalog::COMPONENTS.join(", "));
    }
    Ok(schema)
}
