//! Flattening of Day One plist exports into nested key/value maps
//!
//! Only the shapes the export emits are handled: scalars, nested `<dict>`
//! and `<array>` of scalars.

use crate::error::{DaymarkError, Result};
use roxmltree::{Document, Node, ParsingOptions};
use std::collections::BTreeMap;

/// Nested mapping produced by flattening a `<dict>`
pub type PlistDict = BTreeMap<String, PlistValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum PlistValue {
    String(String),
    Array(Vec<String>),
    Dict(PlistDict),
}

impl PlistValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PlistValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            PlistValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&PlistDict> {
        match self {
            PlistValue::Dict(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<&str> for PlistValue {
    fn from(s: &str) -> Self {
        PlistValue::String(s.to_string())
    }
}

/// Parse a plist document and flatten its top-level `<dict>`
pub fn parse_plist_document(xml: &str) -> Result<PlistDict> {
    // Exports carry the Apple plist DOCTYPE
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)
        .map_err(|e| DaymarkError::InvalidPlist(e.to_string()))?;
    let root = doc.root_element();

    let dict = if root.has_tag_name("dict") {
        root
    } else {
        root.children()
            .find(|n| n.has_tag_name("dict"))
            .ok_or_else(|| {
                DaymarkError::InvalidPlist(format!(
                    "no top-level <dict> under <{}>",
                    root.tag_name().name()
                ))
            })?
    };

    Ok(flatten_dict(dict))
}

/// Pair each `<key>` with the element that follows it, recursing into
/// nested dicts. Values with no pending key are ignored with a warning.
pub fn flatten_dict(dict: Node) -> PlistDict {
    let mut map = PlistDict::new();
    let mut pending: Option<String> = None;

    for node in dict.children().filter(|n| n.is_element()) {
        if node.has_tag_name("key") {
            let key = node.text().unwrap_or_default().to_string();
            if let Some(orphan) = pending.replace(key) {
                log::warn!("plist key '{}' has no value", orphan);
            }
            continue;
        }

        let Some(key) = pending.take() else {
            log::warn!(
                "plist <{}> without a preceding <key>, ignored",
                node.tag_name().name()
            );
            continue;
        };

        let value = match node.tag_name().name() {
            "dict" => PlistValue::Dict(flatten_dict(node)),
            "array" => PlistValue::Array(
                node.children()
                    .filter(|n| n.is_element())
                    .map(scalar_text)
                    .collect(),
            ),
            _ => PlistValue::String(scalar_text(node)),
        };
        map.insert(key, value);
    }

    if let Some(orphan) = pending {
        log::warn!("plist key '{}' has no value", orphan);
    }

    map
}

/// Inner text of a scalar; `<true/>` and `<false/>` become their tag name
fn scalar_text(node: Node) -> String {
    match node.tag_name().name() {
        name @ ("true" | "false") => name.to_string(),
        _ => node.text().unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>Creation Date</key>
	<date>2020-01-05T10:00:00Z</date>
	<key>Entry Text</key>
	<string>Walked to the lake &amp; back.</string>
	<key>Starred</key>
	<false/>
	<key>Tags</key>
	<array>
		<string>Review</string>
		<string>outdoors</string>
	</array>
	<key>UUID</key>
	<string>ABC123</string>
</dict>
</plist>
"#;

    #[test]
    fn test_flatten_scalars_and_arrays() {
        let dict = parse_plist_document(ENTRY).unwrap();

        assert_eq!(dict["Creation Date"].as_str(), Some("2020-01-05T10:00:00Z"));
        assert_eq!(dict["Entry Text"].as_str(), Some("Walked to the lake & back."));
        assert_eq!(dict["Starred"].as_str(), Some("false"));
        assert_eq!(
            dict["Tags"].as_array().unwrap(),
            &["Review".to_string(), "outdoors".to_string()]
        );
        assert_eq!(dict["UUID"].as_str(), Some("ABC123"));
    }

    #[test]
    fn test_flatten_nested_dict() {
        let xml = "<dict><key>Location</key><dict><key>Latitude</key><real>1.0</real>\
                   <key>Longitude</key><real>2.0</real></dict></dict>";
        let dict = parse_plist_document(xml).unwrap();

        let mut location = PlistDict::new();
        location.insert("Latitude".to_string(), "1.0".into());
        location.insert("Longitude".to_string(), "2.0".into());
        let mut expected = PlistDict::new();
        expected.insert("Location".to_string(), PlistValue::Dict(location));

        assert_eq!(dict, expected);
    }

    #[test]
    fn test_deeply_nested_dicts() {
        let xml = "<plist><dict><key>A</key><dict><key>B</key><dict>\
                   <key>C</key><string>deep</string></dict></dict>\
                   <key>D</key><string>top</string></dict></plist>";
        let dict = parse_plist_document(xml).unwrap();

        let c = dict["A"].as_dict().unwrap()["B"].as_dict().unwrap()["C"].as_str();
        assert_eq!(c, Some("deep"));
        assert_eq!(dict["D"].as_str(), Some("top"));
    }

    #[test]
    fn test_value_without_key_is_ignored() {
        let xml = "<dict><string>orphan</string><key>K</key><string>v</string>\
                   <dict><key>X</key><string>y</string></dict></dict>";
        let dict = parse_plist_document(xml).unwrap();

        assert_eq!(dict.len(), 1);
        assert_eq!(dict["K"].as_str(), Some("v"));
    }

    #[test]
    fn test_empty_string_value() {
        let dict = parse_plist_document("<dict><key>Entry Text</key><string/></dict>").unwrap();
        assert_eq!(dict["Entry Text"].as_str(), Some(""));
    }

    #[test]
    fn test_missing_dict_is_error() {
        let result = parse_plist_document("<plist><array/></plist>");
        assert!(matches!(result, Err(DaymarkError::InvalidPlist(_))));
    }

    #[test]
    fn test_malformed_xml_is_error() {
        let result = parse_plist_document("<plist><dict>");
        assert!(matches!(result, Err(DaymarkError::InvalidPlist(_))));
    }
}
