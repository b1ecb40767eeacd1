//! Parsing of free-text tag suggestions

/// Split a comma-separated suggestion reply into tags.
///
/// Pieces are trimmed and empty ones dropped. No normalization or
/// deduplication is applied.
pub fn parse_suggestions(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
