//! Song metadata records and their Song/Artist rows

use crate::config::SongRecordPolicy;
use crate::error::{CoreError, CoreResult};
use crate::record::RawRecord;
use crate::rows::{ArtistRow, SongRow};

/// A null-filled song metadata record
#[derive(Debug, Clone, PartialEq)]
pub struct SongRecord {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub year: i64,
    pub duration: f64,
    pub artist_name: String,
    pub artist_location: String,
    pub artist_latitude: f64,
    pub artist_longitude: f64,
}

impl SongRecord {
    /// Extract a null-filled song record
    pub fn from_raw(raw: &RawRecord) -> CoreResult<Self> {
        Ok(Self {
            song_id: raw.text("song_id"),
            title: raw.text("title"),
            artist_id: raw.text("artist_id"),
            year: raw.int("year")?,
            duration: raw.float("duration")?,
            artist_name: raw.text("artist_name"),
            artist_location: raw.text("artist_location"),
            artist_latitude: raw.float("artist_latitude")?,
            artist_longitude: raw.float("artist_longitude")?,
        })
    }

    pub fn song_row(&self) -> SongRow {
        SongRow {
            song_id: self.song_id.clone(),
            title: self.title.clone(),
            artist_id: self.artist_id.clone(),
            year: self.year,
            duration: self.duration,
        }
    }

    pub fn artist_row(&self) -> ArtistRow {
        ArtistRow {
            artist_id: self.artist_id.clone(),
            name: self.artist_name.clone(),
            location: self.artist_location.clone(),
            latitude: self.artist_latitude,
            longitude: self.artist_longitude,
        }
    }
}

/// Rows produced from one song file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongBatch {
    pub songs: Vec<SongRow>,
    pub artists: Vec<ArtistRow>,
}

impl SongBatch {
    /// Transform the records of one song file.
    ///
    /// With [`SongRecordPolicy::First`] only the first record is used and any
    /// further lines are ignored; with [`SongRecordPolicy::All`] every record
    /// yields a Song/Artist pair. A file without records is an error.
    pub fn from_records(records: &[RawRecord], policy: SongRecordPolicy) -> CoreResult<Self> {
        let selected = match policy {
            SongRecordPolicy::First => records.get(..1).ok_or(CoreError::EmptyFile)?,
            SongRecordPolicy::All => records,
        };
        if selected.is_empty() {
            return Err(CoreError::EmptyFile);
        }
        if policy == SongRecordPolicy::First && records.len() > 1 {
            log::debug!(
                "Song file has {} records, loading only the first",
                records.len()
            );
        }

        let mut batch = SongBatch::default();
        for raw in selected {
            let record = SongRecord::from_raw(raw)?;
            batch.songs.push(record.song_row());
            batch.artists.push(record.artist_row());
        }
        Ok(batch)
    }
}

#[cfg(test)]
#[path = "song_test.rs"]
mod tests;
