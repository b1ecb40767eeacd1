//! Application layer - Use cases and orchestration

pub mod enrich;
pub mod import;
pub mod load;
pub mod upload;

pub use enrich::{build_prompt, EnrichReport, EnrichService, EnrichmentPolicy};
pub use import::{ImportOptions, ImportService, ImportSummary};
pub use load::load_bookmarks;
pub use upload::{UploadReport, UploadService};
