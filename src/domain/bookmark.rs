//! Flat bookmark records produced from an export tree

use serde::{Deserialize, Serialize};

/// A single bookmark with tags derived from its folder ancestry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatBookmark {
    pub url: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl FlatBookmark {
    pub fn new(url: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        FlatBookmark {
            url: url.into(),
            title: title.into(),
            tags,
        }
    }

    /// Request body for the bookmark API
    pub fn payload(&self) -> BookmarkPayload<'_> {
        BookmarkPayload {
            url: &self.url,
            title: &self.title,
            tag_names: &self.tags,
        }
    }
}

/// Create-bookmark request body
#[derive(Debug, Serialize)]
pub struct BookmarkPayload<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub tag_names: &'a [String],
}
