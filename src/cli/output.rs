//! Output formatting utilities

use crate::application::ImportSummary;
use crate::domain::FlatBookmark;

/// Format flattened bookmarks for a dry run
pub fn format_bookmark_list(bookmarks: &[FlatBookmark]) -> String {
    if bookmarks.is_empty() {
        return "No bookmarks found".to_string();
    }

    let mut output = String::new();
    for bookmark in bookmarks {
        output.push_str(&format!("{}  {}", bookmark.title, bookmark.url));
        for tag in &bookmark.tags {
            output.push_str(&format!(" #{}", tag));
        }
        output.push('\n');
    }
    output.push_str(&format!("{} bookmark(s) found.\n", bookmarks.len()));
    output
}

/// Format the end-of-run summary
pub fn format_summary(summary: &ImportSummary) -> String {
    let mut output = format!(
        "Imported {} of {} bookmark(s).\n",
        summary.imported, summary.total
    );

    if let Some(enrichment) = summary.enrichment {
        output.push_str(&format!(
            "Enriched {} bookmark(s), skipped {}.\n",
            enrichment.enriched, enrichment.skipped
        ));
    }

    if let Some(path) = &summary.failed_file {
        output.push_str(&format!(
            "{} bookmark(s) failed. Failed imports saved to {}\n",
            summary.failed.len(),
            path.display()
        ));
    }

    output
}
