//! Upload use case

use crate::domain::FlatBookmark;
use crate::infrastructure::BookmarkSink;
use std::thread;
use std::time::Duration;

/// Outcome of uploading a batch, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub succeeded: Vec<FlatBookmark>,
    pub failed: Vec<FlatBookmark>,
}

impl UploadReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Posts bookmarks one at a time with a fixed pause between requests.
pub struct UploadService<S> {
    sink: S,
    delay: Duration,
}

impl<S: BookmarkSink> UploadService<S> {
    pub fn new(sink: S, delay: Duration) -> Self {
        UploadService { sink, delay }
    }

    /// Upload every bookmark. Failures are collected, never retried.
    pub fn execute(&self, bookmarks: Vec<FlatBookmark>) -> UploadReport {
        let mut report = UploadReport::default();

        for (index, bookmark) in bookmarks.into_iter().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }

            match self.sink.create_bookmark(&bookmark) {
                Ok(()) => {
                    tracing::info!(title = %bookmark.title, "Successfully imported");
                    report.succeeded.push(bookmark);
                }
                Err(e) => {
                    tracing::warn!(title = %bookmark.title, error = %e, "Failed to import");
                    report.failed.push(bookmark);
                }
            }
        }

        report
    }
}
