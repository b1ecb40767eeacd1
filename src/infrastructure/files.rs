//! Reading bookmark exports and persisting failed imports

use crate::domain::FlatBookmark;
use crate::error::{ImportError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse a bookmark export into memory
pub fn read_bookmarks_file(path: &Path) -> Result<Value> {
    let contents = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ImportError::InputNotFound(path.to_path_buf())
        } else {
            ImportError::Io(e)
        }
    })?;

    serde_json::from_slice(&contents).map_err(|source| ImportError::InputNotValidJSON {
        path: path.to_path_buf(),
        source,
    })
}

/// Write failed records as a JSON array.
///
/// Nothing is written for an empty list. Returns whether a file was written.
pub fn save_failed_bookmarks(path: &Path, failed: &[FlatBookmark]) -> Result<bool> {
    if failed.is_empty() {
        return Ok(false);
    }

    let contents = serde_json::to_string_pretty(failed)?;
    write_atomic(path, &contents)?;
    Ok(true)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_name = format!(
        "{}.tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("failed_import.json"),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, contents)?;

    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}
