//! Folder name to tag normalization

use regex::Regex;
use std::sync::OnceLock;

fn whitespace_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn disallowed_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9-]").unwrap())
}

/// Normalize a folder name into a tag token.
///
/// Trims, lowercases, turns each whitespace run into a single `-`, then drops
/// everything outside `[a-z0-9-]`. The result may be empty.
pub fn normalize_tag(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let hyphenated = whitespace_regex().replace_all(&lowered, "-");
    disallowed_regex().replace_all(&hyphenated, "").into_owned()
}

/// Derive tags from a `/`-joined ancestor path, root-most first.
///
/// Empty segments are dropped before normalization; duplicates are kept.
pub fn tags_from_ancestor_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(normalize_tag)
        .collect()
}
