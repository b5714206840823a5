//! Export a Day One plist archive to monthly markdown files

use crate::domain::markdown::format_entries;
use crate::domain::plist::parse_plist_document;
use crate::domain::sort::bucket_by_month;
use crate::domain::{Entry, EntryAdapter};
use crate::error::Result;
use crate::infrastructure::{DayOneExport, FileSystemRepository, JournalRepository};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Counts reported after an export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub exported: usize,
    /// Entry files that could not be read, parsed or adapted
    pub skipped: usize,
    /// Files written, e.g. `2020-01.md`
    pub files: Vec<String>,
}

/// Service converting every entry of an export into `YYYY-MM.md` files
pub struct ExportService {
    export: DayOneExport,
    output: FileSystemRepository,
    photos_prefix: String,
}

impl ExportService {
    pub fn new(export: DayOneExport, output: FileSystemRepository, photos_prefix: String) -> Self {
        ExportService {
            export,
            output,
            photos_prefix,
        }
    }

    fn read_entry(&self, path: &Path, adapter: &EntryAdapter) -> Result<Entry> {
        let xml = fs::read_to_string(path)?;
        let dict = parse_plist_document(&xml)?;
        adapter.adapt(&dict)
    }

    pub fn execute(&self) -> Result<ExportSummary> {
        let photos: BTreeSet<String> = self.export.list_photos()?;
        let adapter = EntryAdapter::new(&photos, &self.photos_prefix);
        let mut summary = ExportSummary::default();

        let mut entries = Vec::new();
        for path in self.export.list_entry_files()? {
            match self.read_entry(&path, &adapter) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    summary.skipped += 1;
                }
            }
        }

        for (month, bucket) in bucket_by_month(entries) {
            let filename = format!("{}.md", month);
            self.output.write_note(&filename, &format_entries(&bucket)?)?;
            log::info!("Wrote {} entries to {}", bucket.len(), filename);

            summary.exported += bucket.len();
            summary.files.push(filename);
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plist(uuid: &str, date: &str, text: &str) -> String {
        format!(
            "<plist version=\"1.0\"><dict>\
             <key>Creation Date</key><date>{}</date>\
             <key>Entry Text</key><string>{}</string>\
             <key>UUID</key><string>{}</string>\
             </dict></plist>",
            date, text, uuid
        )
    }

    #[test]
    fn test_export_groups_by_month_in_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("Journal.dayone");
        fs::create_dir_all(root.join("entries")).unwrap();
        fs::create_dir_all(root.join("photos")).unwrap();
        fs::write(root.join("photos/B.jpg"), "").unwrap();

        fs::write(root.join("entries/A.doentry"), plist("A", "2020-01-31T08:00:00Z", "late")).unwrap();
        fs::write(root.join("entries/B.doentry"), plist("B", "2020-01-05T08:00:00Z", "early")).unwrap();
        fs::write(root.join("entries/C.doentry"), plist("C", "2020-02-01T08:00:00Z", "feb")).unwrap();
        fs::write(root.join("entries/D.doentry"), "<plist><dict>").unwrap();

        let out = temp.path().join("out");
        let service = ExportService::new(
            DayOneExport::open(root).unwrap(),
            FileSystemRepository::new(out.clone()),
            "./photos/".to_string(),
        );
        let summary = service.execute().unwrap();

        assert_eq!(summary.exported, 3);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.files, vec!["2020-01.md", "2020-02.md"]);

        let january = fs::read_to_string(out.join("2020-01.md")).unwrap();
        let early = january.find("early").unwrap();
        let late = january.find("late").unwrap();
        assert!(early < late);
        assert!(january.contains("![](./photos/B.jpg)"));
    }
}
