//! Application layer - Use cases and orchestration

pub mod export_plist;
pub mod import_markdown;

pub use export_plist::{ExportService, ExportSummary};
pub use import_markdown::{ImportService, ImportSummary};
