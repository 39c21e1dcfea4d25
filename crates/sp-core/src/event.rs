//! Application event records and the rows derived from play events
//!
//! Only events whose `page` is `NextSong` are song plays; every other event
//! (navigation, login, settings...) is dropped before any row is built.

use crate::error::CoreResult;
use crate::record::RawRecord;
use crate::rows::{SongPlayRow, TimeRow, UserRow};
use crate::time_dim::time_row;

/// `page` value marking an actual song playback
pub const NEXT_SONG_PAGE: &str = "NextSong";

/// A null-filled application event
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    /// 0-based position of the event within its file
    pub index: usize,
    pub line: usize,
    pub page: String,
    /// Epoch milliseconds
    pub ts: i64,
    pub song: String,
    pub artist: String,
    pub length: f64,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub level: String,
    pub session_id: String,
    pub location: String,
    pub user_agent: String,
}

impl EventRecord {
    /// True when the raw record is a song play
    pub fn is_play(raw: &RawRecord) -> bool {
        raw.text("page") == NEXT_SONG_PAGE
    }

    /// Extract a null-filled event; an absent `ts` becomes the epoch
    pub fn from_raw(raw: &RawRecord) -> CoreResult<Self> {
        Ok(Self {
            index: raw.index,
            line: raw.line,
            page: raw.text("page"),
            ts: raw.int("ts")?,
            song: raw.text("song"),
            artist: raw.text("artist"),
            length: raw.float("length")?,
            user_id: raw.text("userId"),
            first_name: raw.text("firstName"),
            last_name: raw.text("lastName"),
            gender: raw.text("gender"),
            level: raw.text("level"),
            session_id: raw.text("sessionId"),
            location: raw.text("location"),
            user_agent: raw.text("userAgent"),
        })
    }

    pub fn user_row(&self) -> UserRow {
        UserRow {
            user_id: self.user_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            level: self.level.clone(),
        }
    }

    pub fn time_row(&self) -> CoreResult<TimeRow> {
        time_row(self.ts, self.line)
    }

    /// The play half of the event, waiting on song/artist resolution
    pub fn play(&self) -> PlayEvent {
        PlayEvent {
            songplay_id: self.index.to_string(),
            start_time: self.ts.to_string(),
            user_id: self.user_id.clone(),
            level: self.level.clone(),
            session_id: self.session_id.clone(),
            location: self.location.clone(),
            user_agent: self.user_agent.clone(),
            key: SongKey {
                title: self.song.clone(),
                artist_name: self.artist.clone(),
                duration: self.length,
            },
        }
    }
}

/// Exact-match lookup key for a song across songs and artists
#[derive(Debug, Clone, PartialEq)]
pub struct SongKey {
    pub title: String,
    pub artist_name: String,
    pub duration: f64,
}

/// A song play whose song and artist ids are not yet resolved
#[derive(Debug, Clone, PartialEq)]
pub struct PlayEvent {
    pub songplay_id: String,
    pub start_time: String,
    pub user_id: String,
    pub level: String,
    pub session_id: String,
    pub location: String,
    pub user_agent: String,
    pub key: SongKey,
}

impl PlayEvent {
    /// Complete the fact row with the lookup result (both null on no match)
    pub fn into_row(self, song_id: Option<String>, artist_id: Option<String>) -> SongPlayRow {
        SongPlayRow {
            songplay_id: self.songplay_id,
            start_time: self.start_time,
            user_id: self.user_id,
            level: self.level,
            song_id,
            artist_id,
            session_id: self.session_id,
            location: self.location,
            user_agent: self.user_agent,
        }
    }
}

/// Rows produced from one event log file, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBatch {
    /// Number of events read from the file, plays or not
    pub total_events: usize,
    pub times: Vec<TimeRow>,
    pub users: Vec<UserRow>,
    pub plays: Vec<PlayEvent>,
}

impl EventBatch {
    /// Filter the records of one log file down to plays and derive their
    /// time, user and (unresolved) songplay rows
    pub fn from_records(records: &[RawRecord]) -> CoreResult<Self> {
        let mut batch = EventBatch {
            total_events: records.len(),
            ..Default::default()
        };

        for raw in records.iter().filter(|raw| EventRecord::is_play(raw)) {
            let event = EventRecord::from_raw(raw)?;
            batch.times.push(event.time_row()?);
            batch.users.push(event.user_row());
            batch.plays.push(event.play());
        }
        Ok(batch)
    }

    /// Events discarded by the NextSong filter
    pub fn skipped_events(&self) -> usize {
        self.total_events - self.plays.len()
    }
}

#[cfg(test)]
#[path = "event_test.rs"]
mod tests;
