//! Warehouse trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use sp_core::SqlValue;

/// One result row, values in select-list order
pub type Row = Vec<SqlValue>;

/// Warehouse abstraction trait for Sparkify
///
/// Statements use `?` positional placeholders, bound in order from the
/// parameter slice. Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Warehouse: Send + Sync {
    /// Execute one parameterized statement, returns affected rows
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize>;

    /// Execute multiple unparameterized SQL statements
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Execute a parameterized query and return its first row, if any
    async fn query_one(&self, sql: &str, params: &[SqlValue]) -> DbResult<Option<Row>>;

    /// Execute query returning row count
    async fn query_count(&self, sql: &str) -> DbResult<usize>;

    /// Check if a table or view exists
    async fn relation_exists(&self, name: &str) -> DbResult<bool>;

    /// Open a transaction
    async fn begin(&self) -> DbResult<()>;

    /// Commit the open transaction
    async fn commit(&self) -> DbResult<()>;

    /// Roll back the open transaction
    async fn rollback(&self) -> DbResult<()>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
