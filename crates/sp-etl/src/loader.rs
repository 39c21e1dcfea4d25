//! Batch loader: one dataset root, one transaction per file

use crate::error::{EtlError, EtlResult};
use crate::processor::FileProcessor;
use crate::stats::{FileStats, LoadSummary};
use sp_core::discover_files;
use sp_db::Warehouse;
use std::path::Path;

/// Loader progress, reported once after discovery and once per committed file
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    Discovered {
        root: &'a Path,
        total: usize,
    },
    Processed {
        /// 1-based
        index: usize,
        total: usize,
        path: &'a Path,
        stats: &'a FileStats,
    },
}

/// Load every matching file under `root`, in discovery order.
///
/// Each file is prepared in memory first, then written and committed in its
/// own transaction. The first failing file is rolled back and aborts the
/// run; files committed before it are kept.
pub async fn load_dataset<P: FileProcessor>(
    db: &dyn Warehouse,
    root: &Path,
    extension: &str,
    processor: &P,
    progress: &mut dyn FnMut(Progress<'_>),
) -> EtlResult<LoadSummary> {
    let files = discover_files(root, extension)?;
    let total = files.len();
    log::info!(
        "Loading {} {} files from {}",
        total,
        processor.name(),
        root.display()
    );
    progress(Progress::Discovered { root, total });

    let mut summary = LoadSummary::new(root, total);
    for (i, path) in files.iter().enumerate() {
        let batch = processor
            .prepare(path)
            .map_err(|source| EtlError::Source {
                path: path.display().to_string(),
                source,
            })?;

        let stats = write_file(db, processor, path, batch).await?;
        log::debug!("Committed {}: {:?}", path.display(), stats);

        summary.record(stats);
        progress(Progress::Processed {
            index: i + 1,
            total,
            path,
            stats: &stats,
        });
    }
    Ok(summary)
}

/// Write one prepared file inside its own transaction
async fn write_file<P: FileProcessor>(
    db: &dyn Warehouse,
    processor: &P,
    path: &Path,
    batch: P::Batch,
) -> EtlResult<FileStats> {
    let write_error = |source| EtlError::Write {
        path: path.display().to_string(),
        source,
    };

    db.begin().await.map_err(write_error)?;

    let result = match processor.write(db, batch).await {
        Ok(stats) => db.commit().await.map(|_| stats),
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        log::warn!("Rolling back {}: {}", path.display(), e);
        if let Err(rollback_err) = db.rollback().await {
            log::warn!("Rollback of {} failed: {}", path.display(), rollback_err);
        }
    }
    result.map_err(write_error)
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
