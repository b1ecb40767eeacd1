//! Tag system

pub mod normalize;
pub mod suggestions;

pub use normalize::{normalize_tag, tags_from_ancestor_path};
pub use suggestions::parse_suggestions;
