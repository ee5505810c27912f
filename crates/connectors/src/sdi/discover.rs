use crate::error::ConnectorError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the per-database foreign key script. It lives next to the
/// dictionary documents and is never treated as one.
pub const FOREIGN_KEYS_FILE: &str = "__foreign_keys.sql";

/// Returns the database directories to process under `root`.
///
/// With an empty filter every sub-directory is a database; otherwise only
/// the named ones are returned, and missing names are logged and skipped.
pub async fn database_dirs(root: &Path, databases: &[String]) -> Result<Vec<PathBuf>, ConnectorError> {
    if databases.is_empty() {
        let mut dirs = Vec::new();
        let mut entries = tokio::fs::read_dir(root)
            .await
            .map_err(|e| ConnectorError::io(root, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ConnectorError::io(root, e))?
        {
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        dirs.sort();
        return Ok(dirs);
    }

    let mut dirs = Vec::with_capacity(databases.len());
    for database in databases {
        let path = root.join(database);
        if path.is_dir() {
            dirs.push(path);
        } else {
            warn!("Database directory '{}' not found, skipping", path.display());
        }
    }
    Ok(dirs)
}

/// The database a directory stands for.
pub fn database_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lists every file below `dir` whose extension is `ext` (any case),
/// sorted by path.
pub async fn files_with_extension(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, ConnectorError> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let mut entries = tokio::fs::read_dir(&current)
            .await
            .map_err(|e| ConnectorError::io(&current, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ConnectorError::io(&current, e))?
        {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            if path.file_name().is_some_and(|name| name == FOREIGN_KEYS_FILE) {
                continue;
            }
            let matches = path
                .extension()
                .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case(ext));
            if matches {
                files.push(path);
            }
        }
    }

    files.sort();
    debug!("Found {} .{ext} file(s) in '{}'", files.len(), dir.display());
    Ok(files)
}
