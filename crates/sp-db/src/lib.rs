//! sp-db - Warehouse abstraction layer for Sparkify
//!
//! This crate provides the `Warehouse` trait and its DuckDB implementation.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use self::duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use sp_core::SqlValue;
pub use traits::{Row, Warehouse};
