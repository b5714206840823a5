//! Build entries from flattened Day One plist records

use crate::domain::entry::{Coordinate, Entry, EntryTag};
use crate::domain::plist::PlistDict;
use crate::error::{DaymarkError, Result};
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

const CREATION_DATE: &str = "Creation Date";
const ENTRY_TEXT: &str = "Entry Text";
const LOCATION: &str = "Location";
const TAGS: &str = "Tags";
const UUID: &str = "UUID";

/// `2020-01-05T10:00:00Z`
const PLIST_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Turns plist mappings into entries, resolving photos against a listing
pub struct EntryAdapter<'a> {
    photos: &'a BTreeSet<String>,
    photo_prefix: &'a str,
}

impl<'a> EntryAdapter<'a> {
    /// `photos` holds the filenames present in the export's photo directory;
    /// `photo_prefix` is prepended to a matched filename.
    pub fn new(photos: &'a BTreeSet<String>, photo_prefix: &'a str) -> Self {
        EntryAdapter {
            photos,
            photo_prefix,
        }
    }

    pub fn adapt(&self, dict: &PlistDict) -> Result<Entry> {
        let uuid = dict.get(UUID).and_then(|v| v.as_str());
        let context = match uuid {
            Some(id) => format!("entry {}", id),
            None => "entry without UUID".to_string(),
        };

        let raw_date = dict
            .get(CREATION_DATE)
            .and_then(|v| v.as_str())
            .ok_or_else(|| DaymarkError::missing_field(CREATION_DATE, context.as_str()))?;
        let date = NaiveDateTime::parse_from_str(raw_date, PLIST_DATE_FORMAT)
            .map_err(|e| {
                DaymarkError::InvalidPlist(format!(
                    "{}: bad {} '{}': {}",
                    context, CREATION_DATE, raw_date, e
                ))
            })?
            .and_utc();

        let mut entry = Entry::new(date);
        entry.text = escape_markers(
            dict.get(ENTRY_TEXT)
                .and_then(|v| v.as_str())
                .unwrap_or_default(),
        );
        entry.coordinate = location(dict, &context);

        let review = dict
            .get(TAGS)
            .and_then(|v| v.as_array())
            .is_some_and(|tags| tags.iter().any(|t| t == EntryTag::Review.as_str()));
        if review {
            entry.tag = Some(EntryTag::Review);
        }

        if let Some(id) = uuid {
            let filename = format!("{}.jpg", id);
            if self.photos.contains(&filename) {
                entry.photo = Some(format!("{}{}", self.photo_prefix, filename));
            }
        }

        Ok(entry)
    }
}

fn location(dict: &PlistDict, context: &str) -> Option<Coordinate> {
    let location = dict.get(LOCATION)?.as_dict()?;
    let number = |key: &str| {
        location
            .get(key)
            .and_then(|v| v.as_str())
            .and_then(|s| s.trim().parse::<f64>().ok())
    };

    let (Some(longitude), Some(latitude)) = (number("Longitude"), number("Latitude")) else {
        log::warn!("{}: Location without usable Latitude/Longitude", context);
        return None;
    };

    let mut coordinate = Coordinate::new(longitude, latitude);
    coordinate.place_name = location
        .get("Place Name")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string);
    Some(coordinate)
}

/// Body lines the markdown parser would read as structure
const ESCAPED_PREFIXES: [&str; 2] = ["![", "*@("];

/// Keep body text from reading back as markup. Headings drop one level;
/// lines that look like photo or location markers get a leading `\`.
pub fn escape_markers(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.starts_with('#') {
                format!("#{}", line)
            } else if ESCAPED_PREFIXES.iter().any(|p| line.starts_with(p)) {
                format!("\\{}", line)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
