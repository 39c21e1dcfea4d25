use super::*;
use sp_core::rows::{ArtistRow, SongPlayRow, SongRow, TimeRow, UserRow};

fn song() -> SongRow {
    SongRow {
        song_id: "S1".to_string(),
        title: "Song A".to_string(),
        artist_id: "AR1".to_string(),
        year: 2000,
        duration: 200.5,
    }
}

#[test]
fn test_placeholders_match_row_params() {
    let artist = ArtistRow {
        artist_id: "AR1".to_string(),
        name: "Artist A".to_string(),
        location: String::new(),
        latitude: 0.0,
        longitude: 0.0,
    };
    let user = UserRow {
        user_id: "10".to_string(),
        first_name: "Sylvie".to_string(),
        last_name: "Cruz".to_string(),
        gender: "F".to_string(),
        level: "free".to_string(),
    };
    let time = TimeRow {
        start_time: "1541121934796".to_string(),
        hour: 1,
        day: 306,
        week: 44,
        month: 11,
        year: 2018,
        weekday: 4,
    };
    let play = SongPlayRow {
        songplay_id: "0".to_string(),
        start_time: "1541121934796".to_string(),
        user_id: "10".to_string(),
        level: "free".to_string(),
        song_id: None,
        artist_id: None,
        session_id: "182".to_string(),
        location: "Houston-TX".to_string(),
        user_agent: "Mozilla".to_string(),
    };

    assert_eq!(placeholder_count(SONG_TABLE_INSERT), song().params().len());
    assert_eq!(placeholder_count(ARTIST_TABLE_INSERT), artist.params().len());
    assert_eq!(placeholder_count(USER_TABLE_UPSERT), user.params().len());
    assert_eq!(placeholder_count(TIME_TABLE_INSERT), time.params().len());
    assert_eq!(placeholder_count(SONGPLAY_TABLE_INSERT), play.params().len());
    assert_eq!(placeholder_count(SONG_SELECT), 3);
}

#[test]
fn test_continuation_lines_keep_spacing() {
    assert!(SONG_TABLE_INSERT.starts_with("INSERT INTO songs (song_id,"));
    assert!(SONG_SELECT.contains("FROM songs s JOIN artists a ON"));
    assert!(!SONGPLAY_TABLE_INSERT.contains('\n'));
}

#[test]
fn test_song_params_are_typed() {
    use sp_core::SqlValue;
    assert_eq!(
        song().params(),
        vec![
            SqlValue::from("S1"),
            SqlValue::from("Song A"),
            SqlValue::from("AR1"),
            SqlValue::Int(2000),
            SqlValue::Float(200.5),
        ]
    );
}
