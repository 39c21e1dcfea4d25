use super::*;
use async_trait::async_trait;
use sp_core::{CoreError, CoreResult};
use sp_db::{DbResult, DuckDbBackend, SqlValue};
use std::fs;
use tempfile::TempDir;

/// Writes one `marks` row per file; file content steers failures
struct MarkProcessor;

#[async_trait]
impl FileProcessor for MarkProcessor {
    type Batch = (String, String);

    fn name(&self) -> &'static str {
        "marks"
    }

    fn prepare(&self, path: &Path) -> CoreResult<(String, String)> {
        let content = fs::read_to_string(path)?;
        if content == "unparsable" {
            return Err(CoreError::MalformedRecord {
                line: 1,
                message: "unparsable".to_string(),
            });
        }
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        Ok((name, content))
    }

    async fn write(&self, db: &dyn Warehouse, batch: (String, String)) -> DbResult<FileStats> {
        let (name, content) = batch;
        db.execute("INSERT INTO marks VALUES (?)", &[SqlValue::from(name)])
            .await?;
        if content == "fail" {
            db.execute_batch("INSERT INTO no_such_table VALUES (1)")
                .await?;
        }
        Ok(FileStats {
            songs: 1,
            ..Default::default()
        })
    }
}

async fn marks_db() -> DuckDbBackend {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_batch("CREATE TABLE marks (file VARCHAR)")
        .await
        .unwrap();
    db
}

fn dataset(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (rel, content) in files {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

async fn marks(db: &DuckDbBackend) -> usize {
    db.query_count("SELECT * FROM marks").await.unwrap()
}

#[tokio::test]
async fn test_load_reports_progress_in_order() {
    let db = marks_db().await;
    let dir = dataset(&[("b/2.json", "ok"), ("a/1.json", "ok"), ("a/skip.txt", "ok")]);

    let mut events = Vec::new();
    let summary = load_dataset(&db, dir.path(), "json", &MarkProcessor, &mut |p| {
        events.push(match p {
            Progress::Discovered { total, .. } => format!("found {total}"),
            Progress::Processed {
                index, total, path, ..
            } => format!("{index}/{total} {}", path.file_name().unwrap().to_string_lossy()),
        })
    })
    .await
    .unwrap();

    assert_eq!(events, vec!["found 2", "1/2 1.json", "2/2 2.json"]);
    assert_eq!(summary.files_found, 2);
    assert_eq!(summary.files_processed, 2);
    assert_eq!(summary.stats.songs, 2);
    assert_eq!(marks(&db).await, 2);
}

#[tokio::test]
async fn test_write_failure_rolls_back_file_and_keeps_earlier_files() {
    let db = marks_db().await;
    let dir = dataset(&[("1.json", "ok"), ("2.json", "fail"), ("3.json", "ok")]);

    let err = load_dataset(&db, dir.path(), "json", &MarkProcessor, &mut |_| {})
        .await
        .unwrap_err();

    match err {
        EtlError::Write { path, .. } => assert!(path.ends_with("2.json"), "{path}"),
        other => panic!("expected write error, got {other}"),
    }
    // 1.json committed, 2.json rolled back, 3.json never reached
    let row = db
        .query_one("SELECT file FROM marks", &[])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row, vec![SqlValue::from("1.json")]);
    assert_eq!(marks(&db).await, 1);
}

#[tokio::test]
async fn test_prepare_failure_aborts_before_writing() {
    let db = marks_db().await;
    let dir = dataset(&[("1.json", "ok"), ("2.json", "unparsable")]);

    let err = load_dataset(&db, dir.path(), "json", &MarkProcessor, &mut |_| {})
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            EtlError::Source {
                source: CoreError::MalformedRecord { .. },
                ..
            }
        ),
        "{err}"
    );
    assert_eq!(marks(&db).await, 1);
}

#[tokio::test]
async fn test_missing_root() {
    let db = marks_db().await;
    let dir = TempDir::new().unwrap();
    let err = load_dataset(
        &db,
        &dir.path().join("absent"),
        "json",
        &MarkProcessor,
        &mut |_| {},
    )
    .await
    .unwrap_err();
    assert!(
        matches!(err, EtlError::Core(CoreError::DatasetNotFound { .. })),
        "{err}"
    );
}

#[tokio::test]
async fn test_empty_root_yields_empty_summary() {
    let db = marks_db().await;
    let dir = TempDir::new().unwrap();
    let summary = load_dataset(&db, dir.path(), "json", &MarkProcessor, &mut |_| {})
        .await
        .unwrap();
    assert_eq!(summary.files_found, 0);
    assert_eq!(summary.stats, FileStats::default());
}
