//! CLI command definitions

use crate::infrastructure::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linkding-import")]
#[command(about = "Import Chrome or Firefox bookmark exports into linkding", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the bookmarks JSON file
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Bookmarks format (chrome, firefox)
    #[arg(long, value_name = "FORMAT")]
    pub format: String,

    /// TOML config file with API settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Bookmark API endpoint (overrides LINKDING_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Bookmark API token (overrides LINKDING_API_TOKEN)
    #[arg(long)]
    pub api_token: Option<String>,

    /// Where to write bookmarks that failed to import
    #[arg(long, value_name = "PATH")]
    pub failed_output: Option<PathBuf>,

    /// Pause between API requests in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Ask the text-generation service for extra tags
    #[arg(long)]
    pub enrich: bool,

    /// On enrichment failure: abort the run or skip the bookmark's suggestions
    #[arg(long, value_name = "POLICY", default_value = "abort")]
    pub on_enrich_error: String,

    /// Print the flattened bookmarks without uploading
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a resolved config
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(token) = &self.api_token {
            config.api_token = token.clone();
        }
        if let Some(path) = &self.failed_output {
            config.failed_output = path.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
        config
    }
}
