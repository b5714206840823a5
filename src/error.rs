//! Error types for daymark

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daymark application
#[derive(Debug, Error)]
pub enum DaymarkError {
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid plist: {0}")]
    InvalidPlist(String),

    #[error("Missing field '{field}' in {context}")]
    MissingField { field: String, context: String },

    #[error("Timezone lookup failed: {0}")]
    Timezone(String),

    #[error("Entry creation failed: {0}")]
    Sink(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DaymarkError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaymarkError::NotFound(_) => 2,
            DaymarkError::Parse { .. } => 3,
            DaymarkError::Sink(_) => 4,
            _ => 1,
        }
    }

    /// Build a structural parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        DaymarkError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Build a missing field error
    pub fn missing_field(field: &str, context: impl Into<String>) -> Self {
        DaymarkError::MissingField {
            field: field.to_string(),
            context: context.into(),
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaymarkError::NotFound(path) => {
                format!(
                    "Path not found: {}\n\n\
                    Suggestions:\n\
                    • Check the directory passed on the command line\n\
                    • An export directory must contain entries/ and may contain photos/",
                    path.display()
                )
            }
            DaymarkError::Parse { .. } => {
                format!(
                    "{}\n\n\
                    Expected entry headers look like:\n\
                    # <2016-03-20 Sun 09:15>\n\
                    # [Review] <2016-03-31 Thu 21:00>\n\n\
                    Photo lines must look like: ![](./photos/name.jpg)",
                    self
                )
            }
            DaymarkError::Sink(msg) => {
                format!(
                    "Entry creation failed: {}\n\n\
                    Suggestions:\n\
                    • Check that dayone2 is installed and in PATH\n\
                    • Set the program in the config file: program = \"dayone2\"\n\
                    • Use --dry-run to inspect the generated commands",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaymarkError
pub type Result<T> = std::result::Result<T, DaymarkError>;
