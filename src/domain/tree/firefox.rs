//! Firefox JSON backup layout

use super::{node_type, BookmarkDialect};
use serde_json::Value;

const PLACE: &str = "text/x-moz-place";
const PLACE_CONTAINER: &str = "text/x-moz-place-container";

/// Nodes are `{title, type, uri?, children?}` under a top-level `children`
/// sequence. Separators and other place types are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirefoxDialect;

impl BookmarkDialect for FirefoxDialect {
    const NAME_FIELD: &'static str = "title";
    const URL_FIELD: &'static str = "uri";

    fn roots<'a>(&self, document: &'a Value) -> Vec<&'a Value> {
        document
            .get("children")
            .and_then(Value::as_array)
            .map(|roots| roots.iter().collect())
            .unwrap_or_default()
    }

    fn is_leaf(&self, node: &Value) -> bool {
        node_type(node) == Some(PLACE)
    }

    fn is_container(&self, node: &Value) -> bool {
        node_type(node) == Some(PLACE_CONTAINER)
    }
}
