use super::*;
use sp_db::DuckDbBackend;
use sp_schema::statements::{ARTIST_TABLE_INSERT, SONG_TABLE_INSERT};

async fn catalog() -> DuckDbBackend {
    let db = DuckDbBackend::in_memory().unwrap();
    sp_schema::create_tables(&db).await.unwrap();
    db.execute(
        SONG_TABLE_INSERT,
        &[
            SqlValue::from("S1"),
            SqlValue::from("Song A"),
            SqlValue::from("AR1"),
            SqlValue::Int(2000),
            SqlValue::Float(200.5),
        ],
    )
    .await
    .unwrap();
    db.execute(
        ARTIST_TABLE_INSERT,
        &[
            SqlValue::from("AR1"),
            SqlValue::from("Artist A"),
            SqlValue::from(""),
            SqlValue::Float(0.0),
            SqlValue::Float(0.0),
        ],
    )
    .await
    .unwrap();
    db
}

fn key(title: &str, artist_name: &str, duration: f64) -> SongKey {
    SongKey {
        title: title.to_string(),
        artist_name: artist_name.to_string(),
        duration,
    }
}

#[tokio::test]
async fn test_resolve_exact_match() {
    let db = catalog().await;
    let found = resolve_song(&db, &key("Song A", "Artist A", 200.5))
        .await
        .unwrap();
    assert_eq!(
        found,
        Some(SongMatch {
            song_id: "S1".to_string(),
            artist_id: "AR1".to_string(),
        })
    );
}

#[tokio::test]
async fn test_resolve_requires_all_three_fields() {
    let db = catalog().await;
    for k in [
        key("Song B", "Artist A", 200.5),
        key("Song A", "Artist B", 200.5),
        key("Song A", "Artist A", 200.0),
    ] {
        assert_eq!(resolve_song(&db, &k).await.unwrap(), None, "{k:?}");
    }
}

#[tokio::test]
async fn test_resolve_null_filled_key_is_no_match() {
    let db = catalog().await;
    let found = resolve_song(&db, &key("0", "0", 0.0)).await.unwrap();
    assert_eq!(found, None);
}

#[tokio::test]
async fn test_resolve_without_tables_is_an_error() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = resolve_song(&db, &key("Song A", "Artist A", 200.5))
        .await
        .unwrap_err();
    assert!(matches!(err, sp_db::DbError::TableNotFound(_)), "{err}");
}

#[tokio::test]
async fn test_resolve_rejects_non_text_ids() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE songs (song_id INTEGER, title VARCHAR, artist_id VARCHAR, duration DOUBLE);
         CREATE TABLE artists (artist_id VARCHAR, name VARCHAR);
         INSERT INTO songs VALUES (1, 'Song A', 'AR1', 200.5);
         INSERT INTO artists VALUES ('AR1', 'Artist A');",
    )
    .await
    .unwrap();

    let err = resolve_song(&db, &key("Song A", "Artist A", 200.5))
        .await
        .unwrap_err();
    assert!(matches!(err, sp_db::DbError::ExecutionError(_)), "{err}");
}
