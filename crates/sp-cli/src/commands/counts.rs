//! Counts command implementation

use anyhow::{Context, Result};

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the counts command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let counts = sp_schema::table_counts(ctx.db.as_ref())
        .await
        .context("Failed to count rows")?;

    let width = counts
        .iter()
        .map(|(table, _)| table.name().len())
        .max()
        .unwrap_or(0);
    let mut missing = 0;
    for (table, count) in counts {
        match count {
            Some(n) => println!("{:width$}  {}", table.name(), n, width = width),
            None => {
                missing += 1;
                println!("{:width$}  (missing)", table.name(), width = width);
            }
        }
    }
    if missing > 0 {
        println!("\n{} tables missing; run `sparkify create-tables`", missing);
    }
    Ok(())
}
