//! List command implementation

use crate::catalog;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        for schema in catalog::all()? {
            println!(
                "{:<22} {} ({} fields)",
                schema.component(),
                schema.prefix(),
                schema.fields().len()
            );
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_succeeds() {
        assert_eq!(ListArgs {}.execute().await.unwrap(), 0);
    }
}
