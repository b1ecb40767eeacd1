//! Chromium `Bookmarks` file layout

use super::{node_type, BookmarkDialect};
use serde_json::Value;

/// Nodes are `{name, type: "url" | "folder", url?, children?}` under a
/// top-level `roots` mapping (`bookmark_bar`, `other`, `synced`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeDialect;

impl BookmarkDialect for ChromeDialect {
    const NAME_FIELD: &'static str = "name";
    const URL_FIELD: &'static str = "url";

    fn roots<'a>(&self, document: &'a Value) -> Vec<&'a Value> {
        document
            .get("roots")
            .and_then(Value::as_object)
            .map(|roots| roots.values().collect())
            .unwrap_or_default()
    }

    fn is_leaf(&self, node: &Value) -> bool {
        node_type(node) == Some("url")
    }

    fn is_container(&self, node: &Value) -> bool {
        node_type(node) == Some("folder")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tree::flatten;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "checksum": "0f2a",
            "roots": {
                "bookmark_bar": {
                    "name": "Bookmarks Bar",
                    "type": "folder",
                    "children": [{
                        "name": "StarX",
                        "type": "folder",
                        "children": [{
                            "name": "Personal",
                            "type": "folder",
                            "children": [{
                                "name": "Active List",
                                "type": "folder",
                                "children": [{
                                    "name": "StartingPages",
                                    "type": "folder",
                                    "children": [{
                                        "name": "Home",
                                        "type": "url",
                                        "url": "https://home.example"
                                    }]
                                }]
                            }]
                        }]
                    }]
                },
                "other": {
                    "name": "Other Bookmarks",
                    "type": "folder",
                    "children": [
                        {"name": "Docs", "type": "url", "url": "https://docs.example"},
                        {"name": "Separator", "type": "separator"}
                    ]
                }
            },
            "version": 1
        })
    }

    #[test]
    fn nested_folders_become_tags() {
        let bookmarks = flatten(&fixture(), &ChromeDialect).unwrap();

        let home = &bookmarks[0];
        assert_eq!(home.title, "Home");
        assert_eq!(home.url, "https://home.example");
        assert_eq!(
            home.tags,
            vec!["bookmarks-bar", "starx", "personal", "active-list", "startingpages"]
        );
    }

    #[test]
    fn roots_concatenate_in_document_order() {
        let bookmarks = flatten(&fixture(), &ChromeDialect).unwrap();
        let titles: Vec<&str> = bookmarks.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Home", "Docs"]);
        assert_eq!(bookmarks[1].tags, vec!["other-bookmarks"]);
    }

    #[test]
    fn unknown_types_are_skipped() {
        let node = json!({"name": "Separator", "type": "separator", "children": []});
        assert!(!ChromeDialect.is_leaf(&node));
        assert!(!ChromeDialect.is_container(&node));
    }
}
