//! DuckDB warehouse backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::{Row, Warehouse};
use async_trait::async_trait;
use duckdb::types::{ToSql, ToSqlOutput, Value};
use duckdb::{params_from_iter, Connection};
use sp_core::SqlValue;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// DuckDB warehouse backend
pub struct DuckDbBackend {
    conn: Mutex<Connection>,
}

/// Binds a [`SqlValue`] as a DuckDB statement parameter
struct Param<'a>(&'a SqlValue);

impl ToSql for Param<'_> {
    fn to_sql(&self) -> duckdb::Result<ToSqlOutput<'_>> {
        let value = match self.0 {
            SqlValue::Null => Value::Null,
            SqlValue::Int(i) => Value::BigInt(*i),
            SqlValue::Float(f) => Value::Double(*f),
            SqlValue::Text(s) => Value::Text(s.clone()),
        };
        Ok(ToSqlOutput::Owned(value))
    }
}

/// Convert an owned DuckDB value into a [`SqlValue`]
fn from_duckdb_value(value: Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Boolean(b) => SqlValue::Int(i64::from(b)),
        Value::TinyInt(i) => SqlValue::Int(i64::from(i)),
        Value::SmallInt(i) => SqlValue::Int(i64::from(i)),
        Value::Int(i) => SqlValue::Int(i64::from(i)),
        Value::BigInt(i) => SqlValue::Int(i),
        Value::UTinyInt(i) => SqlValue::Int(i64::from(i)),
        Value::USmallInt(i) => SqlValue::Int(i64::from(i)),
        Value::UInt(i) => SqlValue::Int(i64::from(i)),
        Value::UBigInt(i) => i64::try_from(i)
            .map(SqlValue::Int)
            .unwrap_or(SqlValue::Float(i as f64)),
        Value::HugeInt(i) => i64::try_from(i)
            .map(SqlValue::Int)
            .unwrap_or(SqlValue::Float(i as f64)),
        Value::Float(f) => SqlValue::Float(f64::from(f)),
        Value::Double(f) => SqlValue::Float(f),
        Value::Text(s) => SqlValue::Text(s),
        other => SqlValue::Text(format!("{:?}", other)),
    }
}

fn read_row(row: &duckdb::Row<'_>) -> DbResult<Row> {
    let column_count = row.as_ref().column_count();
    (0..column_count)
        .map(|i| {
            row.get::<_, Value>(i)
                .map(from_duckdb_value)
                .map_err(DbError::from)
        })
        .collect()
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DbError::ConnectionError(format!("{}: {}", e, path.display())))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))
    }

    /// Execute a parameterized statement synchronously
    fn execute_sync(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize> {
        let conn = self.lock()?;
        conn.execute(sql, params_from_iter(params.iter().map(Param)))
            .map_err(|e| {
                log::debug!("Statement failed: {}", sql);
                DbError::from(e)
            })
    }

    /// Execute batch SQL synchronously
    fn execute_batch_sync(&self, sql: &str) -> DbResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(sql).map_err(DbError::from)
    }

    /// Fetch the first row of a query synchronously
    fn query_one_sync(&self, sql: &str, params: &[SqlValue]) -> DbResult<Option<Row>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query(params_from_iter(params.iter().map(Param)))?;
        let first = match rows.next()? {
            Some(row) => Some(read_row(row)?),
            None => None,
        };
        Ok(first)
    }

    /// Query count synchronously
    fn query_count_sync(&self, sql: &str) -> DbResult<usize> {
        let conn = self.lock()?;
        let count_sql = format!("SELECT COUNT(*) FROM ({})", sql);
        let count: i64 = conn.query_row(&count_sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Check if relation exists synchronously
    fn relation_exists_sync(&self, name: &str) -> DbResult<bool> {
        let conn = self.lock()?;

        // Handle schema-qualified names
        let (schema, table) = match name.rfind('.') {
            Some(pos) => (&name[..pos], &name[pos + 1..]),
            None => ("main", name),
        };

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = ? AND table_name = ?",
            duckdb::params![schema, table],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    fn transaction_sync(&self, statement: &str) -> DbResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(statement)
            .map_err(|e| DbError::TransactionError(format!("{} failed: {}", statement, e)))
    }
}

#[async_trait]
impl Warehouse for DuckDbBackend {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize> {
        self.execute_sync(sql, params)
    }

    async fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.execute_batch_sync(sql)
    }

    async fn query_one(&self, sql: &str, params: &[SqlValue]) -> DbResult<Option<Row>> {
        self.query_one_sync(sql, params)
    }

    async fn query_count(&self, sql: &str) -> DbResult<usize> {
        self.query_count_sync(sql)
    }

    async fn relation_exists(&self, name: &str) -> DbResult<bool> {
        self.relation_exists_sync(name)
    }

    async fn begin(&self) -> DbResult<()> {
        self.transaction_sync("BEGIN TRANSACTION")
    }

    async fn commit(&self) -> DbResult<()> {
        self.transaction_sync("COMMIT")
    }

    async fn rollback(&self) -> DbResult<()> {
        self.transaction_sync("ROLLBACK")
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
