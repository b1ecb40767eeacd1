//! Domain layer - Bookmark trees, records and tags

pub mod bookmark;
pub mod dialect;
pub mod tags;
pub mod tree;

pub use bookmark::{BookmarkPayload, FlatBookmark};
pub use dialect::Dialect;
pub use tree::{flatten, flatten_document, BookmarkDialect, ChromeDialect, FirefoxDialect};
