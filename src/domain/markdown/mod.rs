//! Markdown journal format

pub mod formatter;
pub mod parser;

pub use formatter::{format_entries, format_entry};
pub use parser::{is_entry_header, parse_journal, LineKind, MarkdownParser};
