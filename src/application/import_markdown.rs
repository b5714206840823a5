//! Import markdown journal files into Day One

use crate::domain::markdown::parse_journal;
use crate::domain::{Entry, TimezoneLookup};
use crate::error::{DaymarkError, Result};
use crate::infrastructure::{EntrySink, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Counts reported after an import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub files: usize,
    pub imported: usize,
    /// Accumulators without a date (stray leading text, trailing blanks)
    pub skipped: usize,
}

/// Service for reading a markdown journal directory and creating entries
pub struct ImportService<'a> {
    repository: FileSystemRepository,
    lookup: &'a dyn TimezoneLookup,
}

impl<'a> ImportService<'a> {
    pub fn new(repository: FileSystemRepository, lookup: &'a dyn TimezoneLookup) -> Self {
        ImportService { repository, lookup }
    }

    /// Parse one file. Structural errors name the file.
    pub fn read_file(&self, path: &Path) -> Result<Vec<Entry>> {
        let content = fs::read_to_string(path)?;
        parse_journal(&content, self.lookup).map_err(|e| match e {
            DaymarkError::Parse { line, message } => DaymarkError::Parse {
                line,
                message: format!("{} ({})", message, path.display()),
            },
            other => other,
        })
    }

    /// Parse every markdown file, then send dated entries to the sink one at
    /// a time. A structural parse error aborts before anything is sent.
    pub fn execute(&self, sink: &mut dyn EntrySink, recursive: bool) -> Result<ImportSummary> {
        let files = self.repository.list_markdown_files(recursive)?;
        let mut summary = ImportSummary {
            files: files.len(),
            ..ImportSummary::default()
        };

        let mut entries = Vec::new();
        for path in &files {
            log::info!("Reading {}", path.display());
            entries.extend(self.read_file(path)?);
        }

        for entry in &entries {
            if entry.date.is_none() {
                summary.skipped += 1;
                continue;
            }
            sink.create(entry)?;
            summary.imported += 1;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::DisabledTimezoneLookup;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Collect(Vec<Entry>);

    impl EntrySink for Collect {
        fn create(&mut self, entry: &Entry) -> Result<()> {
            self.0.push(entry.clone());
            Ok(())
        }
    }

    #[test]
    fn test_import_sends_dated_entries() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("2016-03.md"),
            "stray\n# <2016-03-20 Sun 09:15>\none\n# <2016-03-21 Mon 10:00>\ntwo\n",
        )
        .unwrap();

        let lookup = DisabledTimezoneLookup;
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let service = ImportService::new(repo, &lookup);
        let mut sink = Collect::default();

        let summary = service.execute(&mut sink, false).unwrap();

        assert_eq!(summary.files, 1);
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(sink.0[0].text, "one\n");
        assert_eq!(sink.0[1].text, "two\n");
    }

    #[test]
    fn test_structural_error_names_file_and_sends_nothing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.md"), "# <2016-03-20 Sun 09:15>\n![x\n").unwrap();

        let lookup = DisabledTimezoneLookup;
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let service = ImportService::new(repo, &lookup);
        let mut sink = Collect::default();

        match service.execute(&mut sink, false).unwrap_err() {
            DaymarkError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("bad.md"));
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
        assert!(sink.0.is_empty());
    }
}
