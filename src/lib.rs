//! linkding-import - Browser bookmark importer for linkding
//!
//! Flattens Chrome and Firefox bookmark exports into records tagged by their
//! folder path, then posts each record to a linkding instance.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ImportError;
