//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daymark")]
#[command(about = "Convert journal entries between markdown and Day One", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $DAYMARK_CONFIG, then built-in defaults)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create Day One entries from markdown journal files
    Import {
        /// Directory containing *.md journal files
        dir: PathBuf,

        /// Day One journal to create entries in
        #[arg(short, long)]
        journal: Option<String>,

        /// Directory photo paths are relative to
        #[arg(long, value_name = "DIR")]
        photo_base: Option<PathBuf>,

        /// Also read markdown files in subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Print the dayone2 commands instead of running them
        #[arg(long)]
        dry_run: bool,

        /// Do not resolve timezones from coordinates
        #[arg(long)]
        no_timezones: bool,
    },

    /// Write monthly markdown files from a Day One plist export
    Export {
        /// Export directory containing entries/ and photos/
        dir: PathBuf,

        /// Output directory for YYYY-MM.md files
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Prefix for photo paths in the written markdown
        #[arg(long, value_name = "PREFIX")]
        photos_prefix: Option<String>,
    },
}
