//! File system access for markdown journals and Day One exports

use crate::error::{DaymarkError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract access to a directory of markdown journal files
pub trait JournalRepository {
    /// Markdown files, in directory listing order
    fn list_markdown_files(&self, recursive: bool) -> Result<Vec<PathBuf>>;

    /// Write (create or overwrite) a file relative to the root
    fn write_note(&self, filename: &str, content: &str) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Open an existing directory
    pub fn open(root: PathBuf) -> Result<Self> {
        if !root.is_dir() {
            return Err(DaymarkError::NotFound(root));
        }
        Ok(FileSystemRepository::new(root))
    }

    fn is_markdown(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "md")
    }

    fn collect_root_markdown_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if path.is_file() && Self::is_markdown(&path) {
                files.push(path);
            }
        }

        Ok(files)
    }

    fn collect_recursive_markdown_files(&self) -> Vec<PathBuf> {
        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file() && Self::is_markdown(entry.path()))
            .map(|entry| entry.into_path())
            .collect()
    }
}

impl JournalRepository for FileSystemRepository {
    fn list_markdown_files(&self, recursive: bool) -> Result<Vec<PathBuf>> {
        if recursive {
            Ok(self.collect_recursive_markdown_files())
        } else {
            self.collect_root_markdown_files()
        }
    }

    fn write_note(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content).map_err(DaymarkError::Io)
    }
}

/// A Day One export directory with `entries/` and `photos/`
#[derive(Debug, Clone)]
pub struct DayOneExport {
    pub root: PathBuf,
}

impl DayOneExport {
    /// Open an export; `entries/` must exist, `photos/` may not
    pub fn open(root: PathBuf) -> Result<Self> {
        let export = DayOneExport { root };
        if !export.entries_dir().is_dir() {
            return Err(DaymarkError::NotFound(export.entries_dir()));
        }
        Ok(export)
    }

    pub fn entries_dir(&self) -> PathBuf {
        self.root.join("entries")
    }

    pub fn photos_dir(&self) -> PathBuf {
        self.root.join("photos")
    }

    /// Entry files, hidden files excluded, sorted by name
    pub fn list_entry_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(self.entries_dir())? {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            let hidden = entry.file_name().to_str().is_some_and(|n| n.starts_with('.'));
            if path.is_file() && !hidden {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Photo filenames available in the export
    pub fn list_photos(&self) -> Result<BTreeSet<String>> {
        let dir = self.photos_dir();
        if !dir.is_dir() {
            return Ok(BTreeSet::new());
        }

        let mut names = BTreeSet::new();
        for entry in fs::read_dir(dir)? {
            let Ok(entry) = entry else {
                continue;
            };
            if let Some(name) = entry.file_name().to_str() {
                names.insert(name.to_string());
            }
        }
        Ok(names)
    }
}
