//! Runtime context for CLI commands

use anyhow::{Context, Result};
use sp_core::Config;
use sp_db::{DuckDbBackend, Warehouse};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Runtime context containing the loaded configuration and warehouse connection
pub struct RuntimeContext {
    /// Project directory; dataset paths are relative to it
    pub root: PathBuf,

    /// Project configuration, defaults when no sparkify.yml exists
    pub config: Config,

    /// Warehouse connection
    pub db: Arc<dyn Warehouse>,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let root = PathBuf::from(&args.project_dir);
        let config = load_config(args, &root)?;

        let target = Config::resolve_target(args.target.as_deref());
        let database = config
            .get_database_config(target.as_deref())
            .context("Failed to resolve database target")?;

        let db_path = resolve_db_path(&root, &database.path);
        let db: Arc<dyn Warehouse> =
            Arc::new(DuckDbBackend::new(&db_path).context("Failed to connect to database")?);
        log::debug!(
            "Opened {} warehouse {}{}",
            db.db_type(),
            db_path,
            target
                .as_deref()
                .map(|t| format!(" (target '{}')", t))
                .unwrap_or_default()
        );

        Ok(Self { root, config, db })
    }
}

/// Relative database files live in the project directory
fn resolve_db_path(root: &Path, path: &str) -> String {
    if path == ":memory:" || Path::new(path).is_absolute() {
        path.to_string()
    } else {
        root.join(path).display().to_string()
    }
}

/// Load config from a custom path, or from the project directory with
/// defaults as fallback
fn load_config(args: &GlobalArgs, root: &Path) -> Result<Config> {
    match &args.config {
        Some(config_path) => {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")
        }
        None => Config::load_or_default(root).context("Failed to load project configuration"),
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
