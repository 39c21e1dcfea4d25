//! Dataset file processors
//!
//! A processor handles one file in two phases. `prepare` reads and transforms
//! the whole file in memory without touching the warehouse, so a malformed
//! file fails before anything is written. `write` then submits the prepared
//! rows; the loader wraps it in the file's transaction.

use crate::resolver::resolve_song;
use crate::stats::FileStats;
use async_trait::async_trait;
use sp_core::{
    parse_json_lines, CoreError, CoreResult, EventBatch, RawRecord, SongBatch, SongRecordPolicy,
};
use sp_db::{DbResult, Warehouse};
use sp_schema::statements::{
    ARTIST_TABLE_INSERT, SONGPLAY_TABLE_INSERT, SONG_TABLE_INSERT, TIME_TABLE_INSERT,
    USER_TABLE_UPSERT,
};
use std::path::Path;

/// Turns one dataset file into warehouse writes
#[async_trait]
pub trait FileProcessor: Send + Sync {
    /// Rows prepared from one file
    type Batch: Send;

    /// Dataset name for logging
    fn name(&self) -> &'static str;

    /// Read and transform a file; no warehouse access
    fn prepare(&self, path: &Path) -> CoreResult<Self::Batch>;

    /// Submit prepared rows. Does not commit.
    async fn write(&self, db: &dyn Warehouse, batch: Self::Batch) -> DbResult<FileStats>;
}

/// Read a JSON-lines dataset file into raw records
pub fn read_records(path: &Path) -> CoreResult<Vec<RawRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_json_lines(&content)
}

/// Loads song metadata files into `songs` and `artists`
#[derive(Debug, Clone, Copy, Default)]
pub struct SongFileProcessor {
    pub policy: SongRecordPolicy,
}

impl SongFileProcessor {
    pub fn new(policy: SongRecordPolicy) -> Self {
        Self { policy }
    }
}

#[async_trait]
impl FileProcessor for SongFileProcessor {
    type Batch = SongBatch;

    fn name(&self) -> &'static str {
        "song_data"
    }

    fn prepare(&self, path: &Path) -> CoreResult<SongBatch> {
        let records = read_records(path)?;
        SongBatch::from_records(&records, self.policy)
    }

    async fn write(&self, db: &dyn Warehouse, batch: SongBatch) -> DbResult<FileStats> {
        let mut stats = FileStats::default();
        for song in &batch.songs {
            db.execute(SONG_TABLE_INSERT, &song.params()).await?;
            stats.songs += 1;
        }
        for artist in &batch.artists {
            db.execute(ARTIST_TABLE_INSERT, &artist.params()).await?;
            stats.artists += 1;
        }
        Ok(stats)
    }
}

/// Loads event log files into `time`, `users` and `songplays`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFileProcessor;

#[async_trait]
impl FileProcessor for LogFileProcessor {
    type Batch = EventBatch;

    fn name(&self) -> &'static str {
        "log_data"
    }

    fn prepare(&self, path: &Path) -> CoreResult<EventBatch> {
        let records = read_records(path)?;
        EventBatch::from_records(&records)
    }

    async fn write(&self, db: &dyn Warehouse, batch: EventBatch) -> DbResult<FileStats> {
        let mut stats = FileStats {
            skipped_events: batch.skipped_events(),
            ..Default::default()
        };

        for time in &batch.times {
            db.execute(TIME_TABLE_INSERT, &time.params()).await?;
            stats.times += 1;
        }

        for user in &batch.users {
            db.execute(USER_TABLE_UPSERT, &user.params()).await?;
            stats.users += 1;
        }

        for play in batch.plays {
            let found = resolve_song(db, &play.key).await?;
            if found.is_some() {
                stats.matched_songplays += 1;
            }
            let (song_id, artist_id) = match found {
                Some(m) => (Some(m.song_id), Some(m.artist_id)),
                None => (None, None),
            };
            let row = play.into_row(song_id, artist_id);
            db.execute(SONGPLAY_TABLE_INSERT, &row.params()).await?;
            stats.songplays += 1;
        }

        Ok(stats)
    }
}

#[cfg(test)]
#[path = "processor_test.rs"]
mod tests;
