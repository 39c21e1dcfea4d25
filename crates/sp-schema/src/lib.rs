//! Schema catalog for the Sparkify warehouse.
//!
//! Defines the five-table star schema (one `songplays` fact table, four
//! dimensions), the positional-parameter statements used to load it, and the
//! song lookup query that resolves play events to songs and artists.

pub mod ddl;
pub mod setup;
pub mod statements;

pub use ddl::{Table, CREATE_TABLE_QUERIES, DROP_TABLE_QUERIES};
pub use setup::{create_tables, drop_tables, reset_tables, table_counts};
