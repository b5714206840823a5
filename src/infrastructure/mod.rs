//! Infrastructure layer - External I/O and collaborators

pub mod config;
pub mod repository;
pub mod sink;
pub mod timezone;

pub use config::Config;
pub use repository::{DayOneExport, FileSystemRepository, JournalRepository};
pub use sink::{DayOneCli, DayOneCommand, DryRunSink, EntrySink};
pub use timezone::{BoundaryTimezoneLookup, DisabledTimezoneLookup};
