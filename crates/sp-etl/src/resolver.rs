//! Song and artist resolution for song plays

use sp_core::SongKey;
use sp_db::{DbError, DbResult, SqlValue, Warehouse};
use sp_schema::statements::SONG_SELECT;

/// Ids of the catalog song a play refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongMatch {
    pub song_id: String,
    pub artist_id: String,
}

/// Look up the song a play refers to by exact (title, artist name, duration).
///
/// No match is `Ok(None)`; a row that is not two text ids is an error.
/// With several matching songs the first row the warehouse returns wins,
/// which is not deterministic.
pub async fn resolve_song(db: &dyn Warehouse, key: &SongKey) -> DbResult<Option<SongMatch>> {
    let params = [
        SqlValue::from(key.title.as_str()),
        SqlValue::from(key.artist_name.as_str()),
        SqlValue::Float(key.duration),
    ];

    let Some(row) = db.query_one(SONG_SELECT, &params).await? else {
        return Ok(None);
    };

    match row.as_slice() {
        [SqlValue::Text(song_id), SqlValue::Text(artist_id)] => Ok(Some(SongMatch {
            song_id: song_id.clone(),
            artist_id: artist_id.clone(),
        })),
        other => Err(DbError::ExecutionError(format!(
            "song lookup returned {:?}, expected (song_id, artist_id) text",
            other
        ))),
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
