//! Per-file and per-dataset load counters

use std::ops::AddAssign;
use std::path::PathBuf;

/// Rows submitted for one file, per table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub songs: usize,
    pub artists: usize,
    pub times: usize,
    pub users: usize,
    pub songplays: usize,
    /// Songplays whose song and artist were found in the catalog
    pub matched_songplays: usize,
    /// Events dropped by the NextSong filter
    pub skipped_events: usize,
}

impl AddAssign for FileStats {
    fn add_assign(&mut self, other: Self) {
        self.songs += other.songs;
        self.artists += other.artists;
        self.times += other.times;
        self.users += other.users;
        self.songplays += other.songplays;
        self.matched_songplays += other.matched_songplays;
        self.skipped_events += other.skipped_events;
    }
}

/// Outcome of loading one dataset root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub root: PathBuf,
    pub files_found: usize,
    pub files_processed: usize,
    pub stats: FileStats,
}

impl LoadSummary {
    pub fn new(root: impl Into<PathBuf>, files_found: usize) -> Self {
        Self {
            root: root.into(),
            files_found,
            files_processed: 0,
            stats: FileStats::default(),
        }
    }

    /// Account for one committed file
    pub fn record(&mut self, stats: FileStats) {
        self.files_processed += 1;
        self.stats += stats;
    }

    /// Songplays that could not be resolved to a song
    pub fn unmatched_songplays(&self) -> usize {
        self.stats.songplays - self.stats.matched_songplays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sums_file_stats() {
        let mut summary = LoadSummary::new("/data/log_data", 2);
        summary.record(FileStats {
            times: 3,
            users: 3,
            songplays: 3,
            matched_songplays: 1,
            skipped_events: 4,
            ..Default::default()
        });
        summary.record(FileStats {
            times: 2,
            users: 2,
            songplays: 2,
            matched_songplays: 2,
            ..Default::default()
        });

        assert_eq!(summary.files_processed, 2);
        assert_eq!(summary.stats.songplays, 5);
        assert_eq!(summary.stats.skipped_events, 4);
        assert_eq!(summary.unmatched_songplays(), 2);
    }
}
