//! Dataset file discovery
//!
//! Dataset roots contain JSON-lines files nested arbitrarily deep
//! (e.g. `song_data/A/B/C/TRABCEI128F424C983.json`).

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Recursively discover all files under `root` with the given extension.
///
/// Symlinked directories are skipped. Returns absolute paths sorted
/// lexicographically, so repeated runs over the same tree visit files in the
/// same order.
pub fn discover_files(root: &Path, extension: &str) -> CoreResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CoreError::DatasetNotFound {
            path: root.display().to_string(),
        });
    }

    let root = root.canonicalize().map_err(|e| CoreError::IoWithPath {
        path: root.display().to_string(),
        source: e,
    })?;

    let mut files = Vec::new();
    discover_files_recursive(&root, extension, &mut files)?;
    files.sort();
    Ok(files)
}

fn discover_files_recursive(
    dir: &Path,
    extension: &str,
    files: &mut Vec<PathBuf>,
) -> CoreResult<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
        path: dir.display().to_string(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();

        // Symlinked directories are not followed; symlinked files are
        if file_type.is_dir() {
            discover_files_recursive(&path, extension, files)?;
        } else if (file_type.is_file() || (file_type.is_symlink() && path.is_file()))
            && path.extension().is_some_and(|e| e == extension)
        {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
