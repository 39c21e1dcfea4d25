//! CLI command implementations

pub(crate) mod counts;
pub(crate) mod create_tables;
pub(crate) mod etl;
