//! Bookmark API client

use crate::domain::FlatBookmark;
use crate::error::{ImportError, Result};
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Destination that accepts one bookmark at a time
pub trait BookmarkSink {
    /// Create a bookmark; any outcome other than creation is an
    /// [`ImportError::UploadFailure`]
    fn create_bookmark(&self, bookmark: &FlatBookmark) -> Result<()>;
}

/// linkding REST client (`POST /api/bookmarks/`)
pub struct LinkdingClient {
    client: Client,
    api_url: String,
    api_token: String,
}

impl LinkdingClient {
    pub fn new(api_url: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ImportError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(LinkdingClient {
            client,
            api_url: api_url.into(),
            api_token: api_token.into(),
        })
    }
}

impl BookmarkSink for LinkdingClient {
    fn create_bookmark(&self, bookmark: &FlatBookmark) -> Result<()> {
        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, format!("Token {}", self.api_token))
            .json(&bookmark.payload())
            .send()
            .map_err(|e| upload_failure(bookmark, format!("Error: {}", e)))?;

        let status = response.status();
        if status == StatusCode::CREATED {
            return Ok(());
        }

        let body = response.text().unwrap_or_default();
        Err(upload_failure(
            bookmark,
            format!("Status: {} | {}", status.as_u16(), body.trim()),
        ))
    }
}

fn upload_failure(bookmark: &FlatBookmark, reason: String) -> ImportError {
    ImportError::UploadFailure {
        title: bookmark.title.clone(),
        reason,
    }
}
