//! daymark - Journal entry conversion between markdown and Day One
//!
//! Reads line-oriented markdown journals into entries that are handed to the
//! Day One command line tool, and turns Day One plist exports back into one
//! markdown file per month.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DaymarkError;
