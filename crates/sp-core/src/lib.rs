//! sp-core - Core library for Sparkify
//!
//! This crate provides configuration parsing, raw JSON-lines record handling
//! with null-filling, the pure transforms that turn song and event records
//! into warehouse rows, and dataset file discovery.

pub mod config;
pub mod dataset;
pub mod error;
pub mod event;
pub mod record;
pub mod rows;
pub mod song;
pub mod time_dim;
pub mod value;

pub use config::{Config, DatabaseConfig, DatasetsConfig, SongRecordPolicy, SongsConfig};
pub use dataset::discover_files;
pub use error::{CoreError, CoreResult};
pub use event::{EventBatch, EventRecord, PlayEvent, SongKey, NEXT_SONG_PAGE};
pub use record::{parse_json_lines, RawRecord};
pub use rows::{ArtistRow, SongPlayRow, SongRow, TimeRow, UserRow};
pub use song::{SongBatch, SongRecord};
pub use value::SqlValue;
