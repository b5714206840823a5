//! Output formatting utilities

use crate::application::{ExportSummary, ImportSummary};

/// Format the result of an import for display
pub fn format_import_summary(summary: &ImportSummary) -> String {
    let mut output = format!(
        "Imported {} entries from {} files",
        summary.imported, summary.files
    );
    if summary.skipped > 0 {
        output.push_str(&format!(" ({} without a date skipped)", summary.skipped));
    }
    output
}

/// Format the result of an export for display
pub fn format_export_summary(summary: &ExportSummary) -> String {
    if summary.files.is_empty() {
        return match summary.skipped {
            0 => "No entries found".to_string(),
            n => format!("No entries exported ({} skipped)", n),
        };
    }

    let mut output = String::new();
    for filename in &summary.files {
        output.push_str(&format!("{}\n", filename));
    }
    output.push_str(&format!(
        "Exported {} entries to {} files",
        summary.exported,
        summary.files.len()
    ));
    if summary.skipped > 0 {
        output.push_str(&format!(" ({} skipped)", summary.skipped));
    }
    output
}
