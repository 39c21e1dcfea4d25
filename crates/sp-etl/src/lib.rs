//! sp-etl - Load pipeline for Sparkify
//!
//! This crate resolves song plays against the loaded song catalog, turns
//! dataset files into warehouse writes, and drives a dataset through the
//! warehouse one transaction per file.

pub mod error;
pub mod loader;
pub mod processor;
pub mod resolver;
pub mod stats;

pub use error::{EtlError, EtlResult};
pub use loader::{load_dataset, Progress};
pub use processor::{FileProcessor, LogFileProcessor, SongFileProcessor};
pub use resolver::{resolve_song, SongMatch};
pub use stats::{FileStats, LoadSummary};
