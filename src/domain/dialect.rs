//! Supported bookmark export dialects

use crate::error::ImportError;
use std::fmt;
use std::str::FromStr;

/// The JSON shape a bookmark export was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Chromium-family `Bookmarks` file with a top-level `roots` mapping
    Chrome,
    /// Firefox JSON backup with a top-level `children` sequence
    Firefox,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Chrome => "chrome",
            Dialect::Firefox => "firefox",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chrome" => Ok(Dialect::Chrome),
            "firefox" => Ok(Dialect::Firefox),
            _ => Err(ImportError::UnsupportedFormat(s.to_string())),
        }
    }
}
