//! Import use case: load, enrich, upload, persist failures

use crate::application::enrich::{EnrichReport, EnrichService};
use crate::application::load::load_bookmarks;
use crate::application::upload::UploadService;
use crate::domain::{Dialect, FlatBookmark};
use crate::error::Result;
use crate::infrastructure::{save_failed_bookmarks, BookmarkSink, TagSuggester};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub file: PathBuf,
    pub dialect: Dialect,
    pub failed_output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub total: usize,
    pub imported: usize,
    pub failed: Vec<FlatBookmark>,
    /// Set when failed records were written out
    pub failed_file: Option<PathBuf>,
    pub enrichment: Option<EnrichReport>,
}

pub struct ImportService<S, T> {
    uploader: UploadService<S>,
    enricher: Option<EnrichService<T>>,
}

impl<S: BookmarkSink, T: TagSuggester> ImportService<S, T> {
    pub fn new(uploader: UploadService<S>, enricher: Option<EnrichService<T>>) -> Self {
        ImportService { uploader, enricher }
    }

    /// Load, flatten and (optionally) enrich without uploading
    pub fn prepare(&self, options: &ImportOptions) -> Result<(Vec<FlatBookmark>, Option<EnrichReport>)> {
        let mut bookmarks = load_bookmarks(&options.file, options.dialect)?;

        let enrichment = match &self.enricher {
            Some(enricher) => Some(enricher.execute(&mut bookmarks)?),
            None => None,
        };

        Ok((bookmarks, enrichment))
    }

    pub fn execute(&self, options: &ImportOptions) -> Result<ImportSummary> {
        let (bookmarks, enrichment) = self.prepare(options)?;
        let report = self.uploader.execute(bookmarks);

        let failed_file = if save_failed_bookmarks(&options.failed_output, &report.failed)? {
            tracing::info!(
                count = report.failed.len(),
                path = %options.failed_output.display(),
                "Failed imports saved"
            );
            Some(options.failed_output.clone())
        } else {
            None
        };

        Ok(ImportSummary {
            total: report.total(),
            imported: report.succeeded.len(),
            failed: report.failed,
            failed_file,
            enrichment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::enrich::EnrichmentPolicy;
    use crate::error::ImportError;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    struct RejectUrls(Vec<&'static str>);

    impl BookmarkSink for RejectUrls {
        fn create_bookmark(&self, bookmark: &FlatBookmark) -> Result<()> {
            if self.0.contains(&bookmark.url.as_str()) {
                Err(ImportError::UploadFailure {
                    title: bookmark.title.clone(),
                    reason: "Status: 500".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    struct NoSuggestions;

    impl TagSuggester for NoSuggestions {
        fn suggest(&self, _prompt: &str) -> Result<String> {
            Ok(String::new())
        }
    }

    struct SuggestNews;

    impl TagSuggester for SuggestNews {
        fn suggest(&self, _prompt: &str) -> Result<String> {
            Ok("news".to_string())
        }
    }

    const EXPORT: &str = r#"{
        "roots": {
            "bookmark_bar": {
                "name": "Bookmarks Bar",
                "type": "folder",
                "children": [
                    {"name": "One", "type": "url", "url": "https://one.example"},
                    {"name": "Reading", "type": "folder", "children": [
                        {"name": "Two", "type": "url", "url": "https://two.example"},
                        {"name": "Three", "type": "url", "url": "https://three.example"}
                    ]}
                ]
            }
        }
    }"#;

    fn options(temp: &TempDir) -> ImportOptions {
        let file = temp.path().join("Bookmarks");
        fs::write(&file, EXPORT).unwrap();
        ImportOptions {
            file,
            dialect: Dialect::Chrome,
            failed_output: temp.path().join("failed_import.json"),
        }
    }

    fn service(
        reject: Vec<&'static str>,
        enricher: Option<EnrichService<SuggestNews>>,
    ) -> ImportService<RejectUrls, SuggestNews> {
        ImportService::new(
            UploadService::new(RejectUrls(reject), Duration::ZERO),
            enricher,
        )
    }

    #[test]
    fn writes_exactly_the_failed_subset() {
        let temp = TempDir::new().unwrap();
        let options = options(&temp);

        let summary = service(vec!["https://three.example", "https://one.example"], None)
            .execute(&options)
            .unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.imported, 1);
        let failed_titles: Vec<&str> = summary.failed.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(failed_titles, vec!["One", "Three"]);
        assert_eq!(summary.failed_file.as_deref(), Some(options.failed_output.as_path()));

        let written: Vec<FlatBookmark> =
            serde_json::from_str(&fs::read_to_string(&options.failed_output).unwrap()).unwrap();
        assert_eq!(written, summary.failed);
        assert_eq!(written[1].tags, vec!["bookmarks-bar", "reading"]);
    }

    #[test]
    fn no_file_when_everything_succeeds() {
        let temp = TempDir::new().unwrap();
        let options = options(&temp);

        let summary = service(vec![], None).execute(&options).unwrap();

        assert_eq!(summary.imported, 3);
        assert!(summary.failed.is_empty());
        assert!(summary.failed_file.is_none());
        assert!(!options.failed_output.exists());
    }

    #[test]
    fn failed_records_include_enrichment_tags() {
        let temp = TempDir::new().unwrap();
        let options = options(&temp);
        let enricher = EnrichService::new(SuggestNews, EnrichmentPolicy::Abort);

        let summary = service(vec!["https://two.example"], Some(enricher))
            .execute(&options)
            .unwrap();

        assert_eq!(summary.enrichment, Some(EnrichReport { enriched: 3, skipped: 0 }));
        assert_eq!(summary.failed[0].tags, vec!["bookmarks-bar", "reading", "news"]);
    }

    #[test]
    fn prepare_does_not_upload() {
        let temp = TempDir::new().unwrap();
        let options = options(&temp);
        let service: ImportService<RejectUrls, NoSuggestions> = ImportService::new(
            UploadService::new(RejectUrls(vec!["https://one.example"]), Duration::ZERO),
            Some(EnrichService::new(NoSuggestions, EnrichmentPolicy::Abort)),
        );

        let (bookmarks, enrichment) = service.prepare(&options).unwrap();

        assert_eq!(bookmarks.len(), 3);
        assert_eq!(bookmarks[0].tags, vec!["bookmarks-bar"]);
        assert_eq!(enrichment, Some(EnrichReport { enriched: 3, skipped: 0 }));
        assert!(!options.failed_output.exists());
    }

    #[test]
    fn input_errors_abort_before_upload() {
        let temp = TempDir::new().unwrap();
        let options = ImportOptions {
            file: temp.path().join("missing.json"),
            dialect: Dialect::Firefox,
            failed_output: temp.path().join("failed_import.json"),
        };

        let result = service(vec![], None).execute(&options);
        assert!(matches!(result, Err(ImportError::InputNotFound(_))));
        assert!(!options.failed_output.exists());
    }
}
