//! Journal entry model shared by the markdown and plist pipelines

use crate::error::Result;
use chrono::{DateTime, Utc};

/// Unix timestamp of 2016-03-19 00:00 UTC.
///
/// Markdown coordinate markers on entries dated at or before this instant were
/// exported with the two numbers swapped.
pub const COORDINATE_FLIP_CUTOFF: i64 = 1_458_345_600;

/// Display format used inside markdown entry headers (minute precision)
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Returns true when coordinates written for an entry at `date` are stored reversed
pub fn coordinates_flipped(date: DateTime<Utc>) -> bool {
    date.timestamp() <= COORDINATE_FLIP_CUTOFF
}

/// Geocoding collaborator: resolves an IANA zone name for a position
pub trait TimezoneLookup {
    fn timezone_at(&self, latitude: f64, longitude: f64) -> Result<String>;

    /// False when lookups were turned off and should not be attempted
    fn enabled(&self) -> bool {
        true
    }
}

/// The only tag the journal format models
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryTag {
    /// Periodic retrospective rather than a daily log
    Review,
}

impl EntryTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryTag::Review => "Review",
        }
    }
}

/// A geographic position in decimal degrees
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
    pub place_name: Option<String>,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Coordinate {
            longitude,
            latitude,
            place_name: None,
        }
    }

    pub fn with_place_name(mut self, name: impl Into<String>) -> Self {
        self.place_name = Some(name.into());
        self
    }

    /// Build a coordinate from the two numbers of a markdown marker, in the
    /// order they were written, honouring the historical flip for `date`.
    ///
    /// Markers are written longitude first. Lookups and `dayone2` take
    /// latitude and longitude by name, so do not swap the pair here to match
    /// them (see "Coordinate order" in DESIGN.md).
    pub fn from_marker(first: f64, second: f64, date: DateTime<Utc>) -> Self {
        if coordinates_flipped(date) {
            Coordinate::new(second, first)
        } else {
            Coordinate::new(first, second)
        }
    }
}

/// One journal record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entry {
    /// Entry instant; absent only on the legacy leading/trailing accumulators
    pub date: Option<DateTime<Utc>>,
    /// Body text, newline preserving
    pub text: String,
    /// Photo path relative to the journal directory
    pub photo: Option<String>,
    pub coordinate: Option<Coordinate>,
    /// IANA zone name resolved from `coordinate`
    pub timezone: Option<String>,
    /// Why `timezone` could not be resolved, if a lookup was attempted
    pub timezone_error: Option<String>,
    pub tag: Option<EntryTag>,
}

impl Entry {
    pub fn new(date: DateTime<Utc>) -> Self {
        Entry {
            date: Some(date),
            ..Entry::default()
        }
    }

    /// True when the accumulator holds anything worth emitting
    pub fn has_content(&self) -> bool {
        !self.text.is_empty() || self.date.is_some()
    }

    pub fn is_review(&self) -> bool {
        self.tag == Some(EntryTag::Review)
    }

    /// `YYYY-MM` bucket for the entry's date
    pub fn month_key(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m").to_string())
    }

    /// Fill `timezone` from the coordinate. Failures are kept in
    /// `timezone_error` and never propagated.
    pub fn resolve_timezone(&mut self, lookup: &dyn TimezoneLookup) {
        let Some(coordinate) = &self.coordinate else {
            return;
        };
        if !lookup.enabled() {
            log::debug!("Timezone lookup disabled; leaving entry without a zone");
            return;
        }

        match lookup.timezone_at(coordinate.latitude, coordinate.longitude) {
            Ok(zone) => {
                self.timezone = Some(zone);
                self.timezone_error = None;
            }
            Err(e) => {
                log::warn!(
                    "No timezone for ({}, {}): {}",
                    coordinate.latitude,
                    coordinate.longitude,
                    e
                );
                self.timezone = None;
                self.timezone_error = Some(e.to_string());
            }
        }
    }
}
