use super::*;
use std::fs;
use tempfile::TempDir;

fn args(dir: &Path) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        project_dir: dir.display().to_string(),
        config: None,
        target: None,
    }
}

#[test]
fn test_defaults_without_config_file() {
    let dir = TempDir::new().unwrap();
    let ctx = RuntimeContext::new(&args(dir.path())).unwrap();
    assert_eq!(ctx.config.database.path, ":memory:");
    assert_eq!(ctx.db.db_type(), "duckdb");
}

#[test]
fn test_target_database_is_opened() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("prod.duckdb");
    fs::write(
        dir.path().join("sparkify.yml"),
        format!(
            "name: sparkify\ntargets:\n  prod:\n    database:\n      path: {}\n",
            db_path.display()
        ),
    )
    .unwrap();

    let mut global = args(dir.path());
    global.target = Some("prod".to_string());
    RuntimeContext::new(&global).unwrap();
    assert!(db_path.exists());
}

#[test]
fn test_unknown_target_fails() {
    let dir = TempDir::new().unwrap();
    let mut global = args(dir.path());
    global.target = Some("staging".to_string());
    let err = RuntimeContext::new(&global).err().unwrap();
    assert!(format!("{err:#}").contains("staging"), "{err:#}");
}

#[test]
fn test_explicit_config_path_must_exist() {
    let dir = TempDir::new().unwrap();
    let mut global = args(dir.path());
    global.config = Some(dir.path().join("missing.yml").display().to_string());
    assert!(RuntimeContext::new(&global).is_err());
}

#[test]
fn test_relative_database_path_is_under_project() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        resolve_db_path(dir.path(), "sparkify.duckdb"),
        dir.path().join("sparkify.duckdb").display().to_string()
    );
    assert_eq!(resolve_db_path(dir.path(), ":memory:"), ":memory:");
}
