//! Typed warehouse rows
//!
//! Each row type converts into its statement parameters in declared column
//! order; the matching statements live in `sp-schema`.

use crate::value::SqlValue;

/// `songs` dimension row
#[derive(Debug, Clone, PartialEq)]
pub struct SongRow {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub year: i64,
    pub duration: f64,
}

impl SongRow {
    /// Parameters for `(song_id, title, artist_id, year, duration)`
    pub fn params(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::from(self.song_id.as_str()),
            SqlValue::from(self.title.as_str()),
            SqlValue::from(self.artist_id.as_str()),
            SqlValue::Int(self.year),
            SqlValue::Float(self.duration),
        ]
    }
}

/// `artists` dimension row
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistRow {
    pub artist_id: String,
    pub name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ArtistRow {
    /// Parameters for `(artist_id, name, location, latitude, longitude)`
    pub fn params(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::from(self.artist_id.as_str()),
            SqlValue::from(self.name.as_str()),
            SqlValue::from(self.location.as_str()),
            SqlValue::Float(self.latitude),
            SqlValue::Float(self.longitude),
        ]
    }
}

/// `users` dimension row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub level: String,
}

impl UserRow {
    /// Parameters for `(user_id, first_name, last_name, gender, level)`
    pub fn params(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::from(self.user_id.as_str()),
            SqlValue::from(self.first_name.as_str()),
            SqlValue::from(self.last_name.as_str()),
            SqlValue::from(self.gender.as_str()),
            SqlValue::from(self.level.as_str()),
        ]
    }
}

/// `time` dimension row; every part is stored as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRow {
    pub start_time: String,
    pub hour: u32,
    pub day: u32,
    pub week: u32,
    pub month: u32,
    pub year: i32,
    pub weekday: u32,
}

impl TimeRow {
    /// Parameters for `(start_time, hour, day, week, month, year, weekday)`
    pub fn params(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::from(self.start_time.as_str()),
            SqlValue::Text(self.hour.to_string()),
            SqlValue::Text(self.day.to_string()),
            SqlValue::Text(self.week.to_string()),
            SqlValue::Text(self.month.to_string()),
            SqlValue::Text(self.year.to_string()),
            SqlValue::Text(self.weekday.to_string()),
        ]
    }
}

/// `songplays` fact row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongPlayRow {
    pub songplay_id: String,
    pub start_time: String,
    pub user_id: String,
    pub level: String,
    /// Resolved from `songs`, null when the lookup found no match
    pub song_id: Option<String>,
    /// Resolved from `artists`, null when the lookup found no match
    pub artist_id: Option<String>,
    pub session_id: String,
    pub location: String,
    pub user_agent: String,
}

impl SongPlayRow {
    /// Parameters for `(songplay_id, start_time, user_id, level, song_id,
    /// artist_id, session_id, location, user_agent)`
    pub fn params(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::from(self.songplay_id.as_str()),
            SqlValue::from(self.start_time.as_str()),
            SqlValue::from(self.user_id.as_str()),
            SqlValue::from(self.level.as_str()),
            SqlValue::text_or_null(self.song_id.as_deref()),
            SqlValue::text_or_null(self.artist_id.as_deref()),
            SqlValue::from(self.session_id.as_str()),
            SqlValue::from(self.location.as_str()),
            SqlValue::from(self.user_agent.as_str()),
        ]
    }
}
