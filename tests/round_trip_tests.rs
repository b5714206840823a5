//! Formatter output read back through the markdown parser

use chrono::{TimeZone, Utc};
use daymark::domain::adapter::escape_markers;
use daymark::domain::markdown::{format_entries, format_entry, parse_journal};
use daymark::domain::{Coordinate, Entry, EntryTag, TimezoneLookup};
use daymark::error::Result;

struct Zone;

impl TimezoneLookup for Zone {
    fn timezone_at(&self, _latitude: f64, _longitude: f64) -> Result<String> {
        Ok("America/Los_Angeles".to_string())
    }
}

fn sample() -> Entry {
    let mut e = Entry::new(Utc.with_ymd_and_hms(2019, 7, 4, 19, 45, 0).unwrap());
    e.text = "Fireworks over the bay.\nLate night.\n".to_string();
    e
}

fn assert_same(parsed: &Entry, original: &Entry) {
    assert_eq!(parsed.date, original.date);
    assert_eq!(parsed.photo, original.photo);
    assert_eq!(parsed.coordinate, original.coordinate);
    assert_eq!(parsed.tag, original.tag);
    assert_eq!(parsed.text.trim_end(), original.text.trim_end());
}

#[test]
fn test_plain_entry_round_trip() {
    let original = sample();
    let parsed = parse_journal(&format_entry(&original).unwrap(), &Zone).unwrap();

    assert_eq!(parsed.len(), 1);
    assert_same(&parsed[0], &original);
}

#[test]
fn test_full_entry_round_trip() {
    let mut original = sample();
    original.photo = Some("./photos/XYZ.jpg".to_string());
    original.coordinate = Some(Coordinate::new(-122.42, 37.77).with_place_name("Pier 39"));
    original.tag = Some(EntryTag::Review);

    let parsed = parse_journal(&format_entry(&original).unwrap(), &Zone).unwrap();

    assert_eq!(parsed.len(), 1);
    assert_same(&parsed[0], &original);
    assert_eq!(parsed[0].timezone.as_deref(), Some("America/Los_Angeles"));
}

#[test]
fn test_many_entries_round_trip() {
    let first = sample();
    let mut second = sample();
    second.date = Some(Utc.with_ymd_and_hms(2019, 7, 5, 8, 0, 0).unwrap());
    second.text = "Morning after.".to_string();

    let parsed = parse_journal(&format_entries(&[first.clone(), second.clone()]).unwrap(), &Zone)
        .unwrap();

    assert_eq!(parsed.len(), 2);
    assert_same(&parsed[0], &first);
    assert_same(&parsed[1], &second);
}

#[test]
fn test_escaped_heading_stays_in_body() {
    let mut original = sample();
    original.text = escape_markers("# Title\nBody");

    let parsed = parse_journal(&format_entry(&original).unwrap(), &Zone).unwrap();

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].text.trim_end(), "## Title\nBody");
}

#[test]
fn test_escaped_markers_stay_in_body() {
    let mut original = sample();
    original.text = escape_markers("![screenshot attached\n![](other.png)\n*@(1,2)*\nbody");

    let parsed = parse_journal(&format_entry(&original).unwrap(), &Zone).unwrap();

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].photo, None);
    assert_eq!(parsed[0].coordinate, None);
    assert_eq!(
        parsed[0].text.trim_end(),
        "\\![screenshot attached\n\\![](other.png)\n\\*@(1,2)*\nbody"
    );
}
