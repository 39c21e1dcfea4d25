//! Load statements and the song lookup query.
//!
//! Parameters are `?` placeholders in declared column order; the row types
//! in `sp_core::rows` produce their parameters in the same order. Conflict
//! handling is per table: the `users` statement overwrites `level` only,
//! every other table keeps the first row written for a key.

/// `songplays` insert, first write wins
pub const SONGPLAY_TABLE_INSERT: &str = "INSERT INTO songplays \
    (songplay_id, start_time, user_id, level, song_id, artist_id, session_id, location, user_agent) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
    ON CONFLICT (songplay_id) DO NOTHING";

/// `users` upsert; a returning user only has `level` updated
pub const USER_TABLE_UPSERT: &str = "INSERT INTO users \
    (user_id, first_name, last_name, gender, level) \
    VALUES (?, ?, ?, ?, ?) \
    ON CONFLICT (user_id) DO UPDATE SET level = EXCLUDED.level";

/// `songs` insert, first write wins
pub const SONG_TABLE_INSERT: &str = "INSERT INTO songs \
    (song_id, title, artist_id, year, duration) \
    VALUES (?, ?, ?, ?, ?) \
    ON CONFLICT (song_id) DO NOTHING";

/// `artists` insert, first write wins
pub const ARTIST_TABLE_INSERT: &str = "INSERT INTO artists \
    (artist_id, name, location, latitude, longitude) \
    VALUES (?, ?, ?, ?, ?) \
    ON CONFLICT (artist_id) DO NOTHING";

/// `time` insert, first write wins
pub const TIME_TABLE_INSERT: &str = "INSERT INTO \"time\" \
    (start_time, hour, day, week, month, year, weekday) \
    VALUES (?, ?, ?, ?, ?, ?, ?) \
    ON CONFLICT (start_time) DO NOTHING";

/// Resolve `(song_id, artist_id)` from `(title, artist name, duration)`.
///
/// Exact match on all three. When several songs match, whichever row the
/// engine returns first is used; no ordering is imposed.
pub const SONG_SELECT: &str = "SELECT s.song_id, s.artist_id \
    FROM songs s JOIN artists a ON s.artist_id = a.artist_id \
    WHERE s.title = ? AND a.name = ? AND s.duration = ?";

/// Number of positional placeholders in a statement
pub fn placeholder_count(sql: &str) -> usize {
    sql.matches('?').count()
}

#[cfg(test)]
#[path = "statements_test.rs"]
mod tests;
