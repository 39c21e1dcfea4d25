//! Embedded DDL for the warehouse tables.
//!
//! Each table's `CREATE` statement is a `.sql` file embedded via
//! `include_str!`. No foreign keys are declared, so neither the create nor
//! the drop order carries a dependency constraint.

use std::fmt;

/// The five warehouse tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    SongPlays,
    Users,
    Songs,
    Artists,
    Time,
}

impl Table {
    /// All tables, in create/drop list order
    pub const ALL: [Table; 5] = [
        Table::SongPlays,
        Table::Users,
        Table::Songs,
        Table::Artists,
        Table::Time,
    ];

    /// Unquoted table name
    pub fn name(&self) -> &'static str {
        match self {
            Table::SongPlays => "songplays",
            Table::Users => "users",
            Table::Songs => "songs",
            Table::Artists => "artists",
            Table::Time => "time",
        }
    }

    /// Table name as written in SQL (`time` is a type keyword)
    pub fn sql_name(&self) -> &'static str {
        match self {
            Table::Time => "\"time\"",
            _ => self.name(),
        }
    }

    pub fn create_sql(&self) -> &'static str {
        match self {
            Table::SongPlays => include_str!("songplays.sql"),
            Table::Users => include_str!("users.sql"),
            Table::Songs => include_str!("songs.sql"),
            Table::Artists => include_str!("artists.sql"),
            Table::Time => include_str!("time.sql"),
        }
    }

    pub fn drop_sql(&self) -> &'static str {
        match self {
            Table::SongPlays => "DROP TABLE IF EXISTS songplays;",
            Table::Users => "DROP TABLE IF EXISTS users;",
            Table::Songs => "DROP TABLE IF EXISTS songs;",
            Table::Artists => "DROP TABLE IF EXISTS artists;",
            Table::Time => "DROP TABLE IF EXISTS \"time\";",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// `CREATE TABLE` statements, one per table
pub static CREATE_TABLE_QUERIES: [&str; 5] = [
    include_str!("songplays.sql"),
    include_str!("users.sql"),
    include_str!("songs.sql"),
    include_str!("artists.sql"),
    include_str!("time.sql"),
];

/// `DROP TABLE` statements, one per table
pub static DROP_TABLE_QUERIES: [&str; 5] = [
    "DROP TABLE IF EXISTS songplays;",
    "DROP TABLE IF EXISTS users;",
    "DROP TABLE IF EXISTS songs;",
    "DROP TABLE IF EXISTS artists;",
    "DROP TABLE IF EXISTS \"time\";",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_lists_follow_table_order() {
        for (i, table) in Table::ALL.iter().enumerate() {
            assert_eq!(CREATE_TABLE_QUERIES[i], table.create_sql());
            assert_eq!(DROP_TABLE_QUERIES[i], table.drop_sql());
            assert!(table.create_sql().contains(table.sql_name()));
        }
    }
}
