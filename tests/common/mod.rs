#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn importer_cmd() -> Command {
    let mut cmd = Command::cargo_bin("linkding-import").unwrap();
    cmd.env_remove("LINKDING_API_URL");
    cmd.env_remove("LINKDING_API_TOKEN");
    cmd.env_remove("OPENAI_API_KEY");
    cmd.env_remove("OPENAI_BASE_URL");
    cmd.env_remove("OPENAI_MODEL");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub const CHROME_EXPORT: &str = r#"{
  "checksum": "5d41402abc4b2a76b9719d911017c592",
  "roots": {
    "bookmark_bar": {
      "name": "Bookmarks Bar",
      "type": "folder",
      "children": [
        {
          "name": "StarX",
          "type": "folder",
          "children": [
            {
              "name": "Personal",
              "type": "folder",
              "children": [
                {
                  "name": "Active List",
                  "type": "folder",
                  "children": [
                    {
                      "name": "StartingPages",
                      "type": "folder",
                      "children": [
                        { "name": "Home", "type": "url", "url": "https://home.example/" }
                      ]
                    }
                  ]
                }
              ]
            }
          ]
        }
      ]
    },
    "other": {
      "name": "Other Bookmarks",
      "type": "folder",
      "children": [
        { "name": "Docs", "type": "url", "url": "https://docs.example/" }
      ]
    }
  },
  "version": 1
}"#;

pub const FIREFOX_EXPORT: &str = r#"{
  "title": "",
  "type": "text/x-moz-place-container",
  "root": "placesRoot",
  "children": [
    {
      "title": "Toolbar",
      "type": "text/x-moz-place-container",
      "children": [
        {
          "title": "StarX",
          "type": "text/x-moz-place-container",
          "children": [
            {
              "title": "Personal",
              "type": "text/x-moz-place-container",
              "children": [
                {
                  "title": "Active List",
                  "type": "text/x-moz-place-container",
                  "children": [
                    {
                      "title": "StartingPages",
                      "type": "text/x-moz-place-container",
                      "children": [
                        { "title": "Home", "type": "text/x-moz-place", "uri": "https://home.example/" }
                      ]
                    }
                  ]
                }
              ]
            }
          ]
        },
        { "type": "text/x-moz-place-separator" }
      ]
    }
  ]
}"#;

pub fn write_export(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
