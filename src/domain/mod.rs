//! Domain layer - Entry model, journal formats and conversions

pub mod adapter;
pub mod entry;
pub mod markdown;
pub mod plist;
pub mod sort;

pub use adapter::EntryAdapter;
pub use entry::{Coordinate, Entry, EntryTag, TimezoneLookup};
pub use plist::{PlistDict, PlistValue};
