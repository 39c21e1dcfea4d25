//! Warehouse schema setup: create, drop, reset, and row counts.

use crate::ddl::Table;
use sp_db::{DbResult, Warehouse};

/// Create every warehouse table that does not exist yet
pub async fn create_tables(db: &dyn Warehouse) -> DbResult<()> {
    for table in Table::ALL {
        log::debug!("Creating table {}", table);
        db.execute_batch(table.create_sql()).await?;
    }
    Ok(())
}

/// Drop every warehouse table, ignoring tables that do not exist
pub async fn drop_tables(db: &dyn Warehouse) -> DbResult<()> {
    for table in Table::ALL {
        log::debug!("Dropping table {}", table);
        db.execute_batch(table.drop_sql()).await?;
    }
    Ok(())
}

/// Drop and recreate every warehouse table, leaving them empty
pub async fn reset_tables(db: &dyn Warehouse) -> DbResult<()> {
    drop_tables(db).await?;
    create_tables(db).await
}

/// Row count of every warehouse table, in table order; `None` for tables
/// that do not exist
pub async fn table_counts(db: &dyn Warehouse) -> DbResult<Vec<(Table, Option<usize>)>> {
    let mut counts = Vec::with_capacity(Table::ALL.len());
    for table in Table::ALL {
        let count = if db.relation_exists(table.name()).await? {
            Some(
                db.query_count(&format!("SELECT * FROM {}", table.sql_name()))
                    .await?,
            )
        } else {
            None
        };
        counts.push((table, count));
    }
    Ok(counts)
}

#[cfg(test)]
#[path = "setup_test.rs"]
mod tests;
