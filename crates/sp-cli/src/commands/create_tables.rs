//! Create-tables command implementation

use anyhow::{Context, Result};

use crate::cli::{CreateTablesArgs, GlobalArgs};
use crate::context::RuntimeContext;

/// Execute the create-tables command
pub async fn execute(args: &CreateTablesArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let db = ctx.db.as_ref();

    if args.no_drop {
        sp_schema::create_tables(db)
            .await
            .context("Failed to create tables")?;
    } else {
        sp_schema::reset_tables(db)
            .await
            .context("Failed to recreate tables")?;
    }

    for table in sp_schema::Table::ALL {
        println!("  ✓ {}", table);
    }
    println!("\nCreated {} tables", sp_schema::Table::ALL.len());
    Ok(())
}
