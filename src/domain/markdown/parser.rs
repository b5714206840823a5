//! Line-oriented parser for markdown journal files

use crate::domain::entry::{Coordinate, Entry, EntryTag, TimezoneLookup, ENTRY_DATE_FORMAT};
use crate::error::{DaymarkError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Prefix every photo path is normalised under
pub const PHOTO_DIR_PREFIX: &str = "./photos/";

const DATE_HEADER_PREFIX: &str = "# <";
const REVIEW_HEADER_PREFIXES: [&str; 3] = ["# Quarterly Review ", "# [Review]", "# [REVIEW]"];
const PHOTO_PREFIX: &str = "![";
const COORDINATE_PREFIX: &str = "*@(";

/// `# ...<2016-03-20 Sun 09:15>`; the day of week is ignored
fn header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^# .*?<(.*) [a-zA-Z]{3,9} (.*)>").unwrap())
}

fn photo_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^!\[.*?\]\((.*?)\)").unwrap())
}

/// `*@(first,second)*` or `*@(first,second: place name)*`
fn coordinate_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^\*@\((-?[0-9.]+), ?(-?[0-9.]+)(?::\s*(.*))?\)").unwrap()
    })
}

/// What a single line means to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    DateHeader,
    ReviewHeader,
    Photo,
    Coordinate,
    Text,
}

impl LineKind {
    /// Classify a line by its opening token only
    pub fn classify(line: &str) -> Self {
        if line.starts_with(DATE_HEADER_PREFIX) {
            LineKind::DateHeader
        } else if REVIEW_HEADER_PREFIXES.iter().any(|p| line.starts_with(p)) {
            LineKind::ReviewHeader
        } else if line.starts_with(PHOTO_PREFIX) {
            LineKind::Photo
        } else if line.starts_with(COORDINATE_PREFIX) {
            LineKind::Coordinate
        } else {
            LineKind::Text
        }
    }

    pub fn starts_entry(&self) -> bool {
        matches!(self, LineKind::DateHeader | LineKind::ReviewHeader)
    }
}

/// True if `line` would begin a new entry when parsed
pub fn is_entry_header(line: &str) -> bool {
    LineKind::classify(line).starts_entry()
}

/// Extract the entry date from a header line
pub fn parse_header_date(line: &str) -> Option<DateTime<Utc>> {
    let caps = header_regex().captures(line)?;
    let stamp = format!("{} {}", &caps[1], &caps[2]);
    NaiveDateTime::parse_from_str(&stamp, ENTRY_DATE_FORMAT)
        .ok()
        .map(|d| d.and_utc())
}

/// Extract the embedded image path from a photo line
pub fn parse_photo_path(line: &str) -> Option<String> {
    photo_regex()
        .captures(line)
        .map(|caps| normalize_photo_path(&caps[1]))
}

/// Place `path` under `./photos/` unless it already is
pub fn normalize_photo_path(path: &str) -> String {
    if path.starts_with(PHOTO_DIR_PREFIX) {
        path.to_string()
    } else {
        format!("{}{}", PHOTO_DIR_PREFIX, path)
    }
}

/// Decode a coordinate marker for an entry dated `date`
pub fn parse_coordinate(line: &str, date: DateTime<Utc>) -> Option<Coordinate> {
    let caps = coordinate_regex().captures(line)?;
    let first: f64 = caps[1].parse().ok()?;
    let second: f64 = caps[2].parse().ok()?;

    let mut coordinate = Coordinate::from_marker(first, second, date);
    if let Some(name) = caps.get(3) {
        let name = name.as_str().trim();
        if !name.is_empty() {
            coordinate.place_name = Some(name.to_string());
        }
    }
    Some(coordinate)
}

/// State machine owning the one entry currently being accumulated
pub struct MarkdownParser<'a> {
    lookup: &'a dyn TimezoneLookup,
    current: Entry,
    line_number: usize,
}

impl<'a> MarkdownParser<'a> {
    pub fn new(lookup: &'a dyn TimezoneLookup) -> Self {
        MarkdownParser {
            lookup,
            current: Entry::default(),
            line_number: 0,
        }
    }

    /// Consume one line (without its terminator). Returns the previous entry
    /// when the line starts a new one.
    pub fn feed(&mut self, line: &str) -> Result<Option<Entry>> {
        self.line_number += 1;

        match LineKind::classify(line) {
            kind @ (LineKind::DateHeader | LineKind::ReviewHeader) => {
                let date = parse_header_date(line).ok_or_else(|| {
                    DaymarkError::parse(
                        self.line_number,
                        format!("Can't parse date from '{}'", line),
                    )
                })?;

                let mut next = Entry::new(date);
                if kind == LineKind::ReviewHeader {
                    next.tag = Some(EntryTag::Review);
                }

                let previous = std::mem::replace(&mut self.current, next);
                Ok(previous.has_content().then_some(previous))
            }
            LineKind::Photo => {
                let path = parse_photo_path(line).ok_or_else(|| {
                    DaymarkError::parse(
                        self.line_number,
                        format!("Can't parse photo from '{}'", line),
                    )
                })?;
                self.current.photo = Some(path);
                Ok(None)
            }
            LineKind::Coordinate => {
                self.read_coordinate(line);
                Ok(None)
            }
            LineKind::Text => {
                self.current.text.push_str(line);
                self.current.text.push('\n');
                Ok(None)
            }
        }
    }

    /// Coordinate problems never abort the file
    fn read_coordinate(&mut self, line: &str) {
        let Some(date) = self.current.date else {
            log::warn!(
                "line {}: coordinate before any entry header, dropped: {}",
                self.line_number,
                line
            );
            return;
        };

        match parse_coordinate(line, date) {
            Some(coordinate) => {
                self.current.coordinate = Some(coordinate);
                self.current.resolve_timezone(self.lookup);
            }
            None => {
                log::warn!(
                    "line {}: trouble parsing coordinate from: {}",
                    self.line_number,
                    line
                );
            }
        }
    }

    /// Hand back the final accumulator, even when empty
    pub fn finish(self) -> Entry {
        self.current
    }
}

/// Parse a whole journal file into entries, in file order.
///
/// The last accumulator is always appended, so the result may end with an
/// entry that has no date.
pub fn parse_journal(content: &str, lookup: &dyn TimezoneLookup) -> Result<Vec<Entry>> {
    let mut parser = MarkdownParser::new(lookup);
    let mut entries = Vec::new();

    for line in content.lines() {
        if let Some(entry) = parser.feed(line)? {
            entries.push(entry);
        }
    }
    entries.push(parser.finish());

    Ok(entries)
}
