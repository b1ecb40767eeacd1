//! Tag enrichment use case

use crate::domain::tags::parse_suggestions;
use crate::domain::FlatBookmark;
use crate::error::{ImportError, Result};
use crate::infrastructure::TagSuggester;
use std::str::FromStr;

/// What to do when the suggestion service fails for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrichmentPolicy {
    /// Stop the run with the failure
    #[default]
    Abort,
    /// Log the failure and keep the record's derived tags
    Skip,
}

impl FromStr for EnrichmentPolicy {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(EnrichmentPolicy::Abort),
            "skip" => Ok(EnrichmentPolicy::Skip),
            _ => Err(ImportError::Config(format!(
                "Invalid enrichment policy: '{}'. Valid policies are: abort, skip",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichReport {
    pub enriched: usize,
    pub skipped: usize,
}

/// Build the suggestion prompt for one bookmark
pub fn build_prompt(bookmark: &FlatBookmark) -> String {
    let existing = if bookmark.tags.is_empty() {
        "none".to_string()
    } else {
        bookmark.tags.join(", ")
    };

    format!(
        "Suggest up to 3 additional tags for this bookmark.\n\
        Title: {}\n\
        URL: {}\n\
        Existing tags: {}\n\
        Reply with the new tags only, separated by commas.",
        bookmark.title, bookmark.url, existing
    )
}

/// Appends service-suggested tags to each bookmark.
pub struct EnrichService<T> {
    suggester: T,
    policy: EnrichmentPolicy,
}

impl<T: TagSuggester> EnrichService<T> {
    pub fn new(suggester: T, policy: EnrichmentPolicy) -> Self {
        EnrichService { suggester, policy }
    }

    pub fn execute(&self, bookmarks: &mut [FlatBookmark]) -> Result<EnrichReport> {
        let mut report = EnrichReport::default();

        for bookmark in bookmarks.iter_mut() {
            match self.suggester.suggest(&build_prompt(bookmark)) {
                Ok(reply) => {
                    let suggested = parse_suggestions(&reply);
                    tracing::debug!(title = %bookmark.title, ?suggested, "suggested tags");
                    bookmark.tags.extend(suggested);
                    report.enriched += 1;
                }
                Err(e) if self.policy == EnrichmentPolicy::Skip => {
                    tracing::warn!(title = %bookmark.title, error = %e, "Skipping tag enrichment");
                    report.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }
}
