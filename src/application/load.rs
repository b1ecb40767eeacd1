//! Load and flatten a bookmark export

use crate::domain::{flatten_document, Dialect, FlatBookmark};
use crate::error::Result;
use crate::infrastructure::read_bookmarks_file;
use std::path::Path;

/// Read `path` and flatten it as `dialect`
pub fn load_bookmarks(path: &Path, dialect: Dialect) -> Result<Vec<FlatBookmark>> {
    let document = read_bookmarks_file(path)?;
    let bookmarks = flatten_document(&document, dialect)?;
    tracing::debug!(
        count = bookmarks.len(),
        %dialect,
        path = %path.display(),
        "flattened bookmark export"
    );
    Ok(bookmarks)
}
