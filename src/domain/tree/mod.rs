//! Flattening of bookmark export trees into tagged records
//!
//! The walk is written once against [`BookmarkDialect`]; each export shape
//! only says which nodes are leaves or containers and where their fields live.

pub mod chrome;
pub mod firefox;

pub use chrome::ChromeDialect;
pub use firefox::FirefoxDialect;

use crate::domain::bookmark::FlatBookmark;
use crate::domain::dialect::Dialect;
use crate::domain::tags::tags_from_ancestor_path;
use crate::error::{ImportError, Result};
use serde_json::Value;

/// Read access to the nodes of one export dialect
pub trait BookmarkDialect {
    /// Key holding a node's display name
    const NAME_FIELD: &'static str;

    /// Key holding a leaf's URL
    const URL_FIELD: &'static str;

    /// Top-level nodes the walk starts from, in document order
    fn roots<'a>(&self, document: &'a Value) -> Vec<&'a Value>;

    fn is_leaf(&self, node: &Value) -> bool;

    fn is_container(&self, node: &Value) -> bool;

    fn name<'a>(&self, node: &'a Value) -> Option<&'a str> {
        node.get(Self::NAME_FIELD).and_then(Value::as_str)
    }

    fn url<'a>(&self, node: &'a Value) -> Option<&'a str> {
        node.get(Self::URL_FIELD).and_then(Value::as_str)
    }

    fn children<'a>(&self, node: &'a Value) -> Option<&'a [Value]> {
        node.get("children")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}

/// Value of a node's `type` key, if any
pub(crate) fn node_type(node: &Value) -> Option<&str> {
    node.get("type").and_then(Value::as_str)
}

/// Flatten a parsed export document with the given dialect.
///
/// Results from each root are concatenated in root order. Documents without
/// the dialect's root key yield no records.
pub fn flatten<D: BookmarkDialect>(document: &Value, dialect: &D) -> Result<Vec<FlatBookmark>> {
    let mut bookmarks = Vec::new();
    for root in dialect.roots(document) {
        bookmarks.extend(flatten_node(root, "", dialect)?);
    }
    Ok(bookmarks)
}

/// Flatten a document, selecting the dialect implementation by name
pub fn flatten_document(document: &Value, dialect: Dialect) -> Result<Vec<FlatBookmark>> {
    match dialect {
        Dialect::Chrome => flatten(document, &ChromeDialect),
        Dialect::Firefox => flatten(document, &FirefoxDialect),
    }
}

fn flatten_node<D: BookmarkDialect>(
    node: &Value,
    ancestor_path: &str,
    dialect: &D,
) -> Result<Vec<FlatBookmark>> {
    if dialect.is_leaf(node) {
        let title = required(dialect.name(node), ancestor_path, D::NAME_FIELD)?;
        let url = required(dialect.url(node), ancestor_path, D::URL_FIELD)?;
        return Ok(vec![FlatBookmark::new(
            url,
            title,
            tags_from_ancestor_path(ancestor_path),
        )]);
    }

    if !dialect.is_container(node) {
        return Ok(Vec::new());
    }

    let Some(children) = dialect.children(node) else {
        return Ok(Vec::new());
    };

    let name = required(dialect.name(node), ancestor_path, D::NAME_FIELD)?;
    let current_path = if ancestor_path.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", ancestor_path, name)
    };

    let mut bookmarks = Vec::new();
    for child in children {
        bookmarks.extend(flatten_node(child, &current_path, dialect)?);
    }
    Ok(bookmarks)
}

fn required<'a>(value: Option<&'a str>, path: &str, field: &'static str) -> Result<&'a str> {
    value.ok_or_else(|| ImportError::MalformedNode {
        path: path.to_string(),
        field,
    })
}
