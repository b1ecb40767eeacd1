//! Error types for linkding-import

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the importer
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Input file is not valid JSON: {path}: {source}")]
    InputNotValidJSON {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed bookmark node at '{path}': missing '{field}'")]
    MalformedNode { path: String, field: &'static str },

    #[error("Failed to import '{title}': {reason}")]
    UploadFailure { title: String, reason: String },

    #[error("Tag enrichment failed: {0}")]
    EnrichmentFailure(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ImportError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ImportError::InputNotFound(_) => 2,
            ImportError::InputNotValidJSON { .. } => 3,
            ImportError::UnsupportedFormat(_) => 4,
            ImportError::MalformedNode { .. } => 5,
            ImportError::EnrichmentFailure(_) => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ImportError::InputNotFound(path) => {
                format!(
                    "The file '{}' does not exist.\n\n\
                    Suggestions:\n\
                    • Check the path passed to --file\n\
                    • Chrome keeps bookmarks in a file named 'Bookmarks' in the profile directory\n\
                    • Firefox exports JSON backups from Library > Import and Backup > Backup",
                    path.display()
                )
            }
            ImportError::InputNotValidJSON { path, source } => {
                format!(
                    "The file '{}' is not a valid JSON file ({}).\n\n\
                    Suggestions:\n\
                    • Export bookmarks as JSON, not HTML\n\
                    • Make sure the export finished writing before importing",
                    path.display(),
                    source
                )
            }
            ImportError::UnsupportedFormat(format) => {
                format!(
                    "Unsupported format: '{}'\n\n\
                    Supported formats: chrome, firefox\n\
                    Example: linkding-import --file Bookmarks --format chrome",
                    format
                )
            }
            ImportError::EnrichmentFailure(msg) => {
                format!(
                    "Tag enrichment failed: {}\n\n\
                    Suggestions:\n\
                    • Check that OPENAI_API_KEY is set and valid\n\
                    • Rerun with --on-enrich-error skip to import without suggested tags\n\
                    • Rerun without --enrich",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ImportError
pub type Result<T> = std::result::Result<T, ImportError>;
