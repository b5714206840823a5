//! Configuration management

use crate::error::{DaymarkError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "DAYMARK_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Day One journal that imported entries are created in
    pub journal: String,
    /// Day One command line program
    pub program: String,
    /// Directory photo paths in markdown entries are relative to
    pub photo_base: PathBuf,
    /// Prefix written before photo filenames when exporting to markdown
    pub photos_prefix: String,
    /// Pause after each entry creation; dayone2 drops input sent too quickly
    pub command_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal: "TEST_IMPORT".to_string(),
            program: "dayone2".to_string(),
            photo_base: PathBuf::new(),
            photos_prefix: "./photos/".to_string(),
            command_delay_ms: 500,
        }
    }
}

impl Config {
    /// Load config from an explicit path, else from $DAYMARK_CONFIG, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match std::env::var_os(CONFIG_ENV) {
            Some(env_path) => Self::load_from_file(Path::new(&env_path)),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a TOML file; unset keys keep their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaymarkError::NotFound(path.to_path_buf())
            } else {
                DaymarkError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            DaymarkError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}
