//! Describe command implementation
//!
//! Prints the field descriptors of a built-in component as a text table or
//! as JSON.

use super::find_schema;
use crate::core::describe;
use crate::domain::FieldDescriptor;
use clap::{Args, ValueEnum};

/// Output format for descriptors
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the describe command
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Component name, e.g. rest-openapi
    pub component: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl DescribeArgs {
    /// Execute the describe command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let Some(schema) = find_schema(&self.component)? else {
            return Ok(2);
        };

        let descriptors = describe(&schema);
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&descriptors)?),
            OutputFormat::Text => {
                println!("{} ({})", schema.component(), schema.prefix());
                println!();
                for descriptor in &descriptors {
                    println!("{}", render_descriptor(descriptor));
                }
            }
        }
        Ok(0)
    }
}

fn render_descriptor(descriptor: &FieldDescriptor) -> String {
    let mut line = format!("  {:<55} {:<10}", descriptor.key, descriptor.semantic_type);
    if descriptor.required {
        line.push_str(" required");
    }
    if let Some(default) = &descriptor.default {
        line.push_str(&format!(" default={default}"));
    }
    if !descriptor.description.is_empty() {
        line.push_str(&format!("\n      {}", descriptor.description));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_render_descriptor() {
        let schema = catalog::fhir::schema().unwrap();
        let rendered = render_descriptor(schema.field("fhirVersion").unwrap());
        assert!(rendered.contains("camel.component.fhir.fhir-version"));
        assert!(rendered.contains("default=R4"));
    }

    #[tokio::test]
    async fn test_unknown_component_exit_code() {
        let args = DescribeArgs {
            component: "nope".to_string(),
            format: OutputFormat::Text,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_describe_json() {
        let args = DescribeArgs {
            component: "rest-openapi".to_string(),
            format: OutputFormat::Json,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
    }
}
