//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod files;
pub mod linkding;
pub mod suggester;

pub use config::Config;
pub use files::{read_bookmarks_file, save_failed_bookmarks};
pub use linkding::{BookmarkSink, LinkdingClient};
pub use suggester::{OpenAiSuggester, TagSuggester};
