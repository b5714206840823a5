//! Serialize entries back into the markdown journal format

use crate::domain::entry::Entry;
use crate::error::{DaymarkError, Result};

/// Header date format, e.g. `2016-03-20 Sun 09:15`
const HEADER_DATE_FORMAT: &str = "%Y-%m-%d %a %H:%M";
const REVIEW_HEADER: &str = "# [Review] ";

/// Two blank lines close every entry
const RECORD_SEPARATOR: &str = "\n\n\n";

/// Render one entry as a markdown block.
///
/// Coordinates are written longitude first, never flipped.
pub fn format_entry(entry: &Entry) -> Result<String> {
    let date = entry
        .date
        .ok_or_else(|| DaymarkError::missing_field("date", "entry to format"))?;

    let mut out = String::new();

    if entry.is_review() {
        out.push_str(REVIEW_HEADER);
    } else {
        out.push_str("# ");
    }
    out.push_str(&format!("<{}>\n", date.format(HEADER_DATE_FORMAT)));

    if let Some(coordinate) = &entry.coordinate {
        match &coordinate.place_name {
            Some(name) => out.push_str(&format!(
                "*@({},{}: {})*\n",
                coordinate.longitude, coordinate.latitude, name
            )),
            None => out.push_str(&format!(
                "*@({},{})*\n",
                coordinate.longitude, coordinate.latitude
            )),
        }
    }

    if let Some(photo) = &entry.photo {
        out.push_str(&format!("![]({})\n", photo));
    }

    out.push_str(entry.text.trim_end_matches('\n'));
    out.push_str(RECORD_SEPARATOR);

    Ok(out)
}

/// Render entries one after another, in the given order
pub fn format_entries(entries: &[Entry]) -> Result<String> {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format_entry(entry)?);
    }
    Ok(out)
}
