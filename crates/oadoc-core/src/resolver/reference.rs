//! `$ref` values and JSON pointers
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use percent_encoding::percent_decode_str;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A parsed `$ref` value of the form `source#/json/pointer`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    raw: String,
    source: Option<String>,
    pointer: JsonPointer,
}

impl Reference {
    /// Parse a `$ref` string
    pub fn parse(raw: &str) -> Result<Self> {
        let (source, fragment) = match raw.split_once('#') {
            Some((source, fragment)) => (source, fragment),
            None => (raw, ""),
        };

        if source.is_empty() && fragment.is_empty() && !raw.contains('#') {
            return Err(Error::invalid_reference(raw, "empty reference"));
        }

        let pointer = JsonPointer::parse(fragment)
            .map_err(|reason| Error::invalid_reference(raw, reason))?;

        Ok(Self {
            raw: raw.to_string(),
            source: (!source.is_empty()).then(|| source.to_string()),
            pointer,
        })
    }

    /// Reference to a named component, e.g. `#/components/schemas/User`
    pub fn component(section: &str, name: &str) -> Self {
        Self::from_pointer(JsonPointer::from_segments(["components", section, name]))
    }

    /// Same-document reference to `pointer`
    pub fn from_pointer(pointer: JsonPointer) -> Self {
        Self {
            raw: format!("#{pointer}"),
            source: None,
            pointer,
        }
    }

    /// The reference exactly as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Relative path or URL of the target document, `None` for the same document
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn pointer(&self) -> &JsonPointer {
        &self.pointer
    }

    /// Whether the target lives in the same document
    pub fn is_internal(&self) -> bool {
        self.source.is_none()
    }

    /// Short display name: the last pointer segment, or the file stem for whole-document references
    pub fn name(&self) -> &str {
        if let Some(last) = self.pointer.segments().last() {
            return last;
        }

        let source = self.source.as_deref().unwrap_or_default();
        let file = source.rsplit(['/', '\\']).next().unwrap_or(source);
        file.split('.').next().unwrap_or(file)
    }
}

impl FromStr for Reference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Decoded JSON pointer segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer {
    segments: Vec<String>,
}

impl JsonPointer {
    /// The pointer addressing the whole document
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a fragment such as `/components/schemas/User`
    pub fn parse(fragment: &str) -> std::result::Result<Self, String> {
        if fragment.is_empty() {
            return Ok(Self::root());
        }

        let rest = fragment
            .strip_prefix('/')
            .ok_or_else(|| format!("pointer '{fragment}' must start with '/'"))?;

        let segments = rest.split('/').map(decode_segment).collect();
        Ok(Self { segments })
    }

    /// Build a pointer from already decoded segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Walk `node` along the pointer. On failure returns the segment that could not be found.
    pub fn resolve<'a>(&self, node: &'a Value) -> std::result::Result<&'a Value, String> {
        let mut current = node;

        for segment in &self.segments {
            current = match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index)),
                _ => None,
            }
            .ok_or_else(|| segment.clone())?;
        }

        Ok(current)
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", escape_segment(segment))?;
        }
        Ok(())
    }
}

/// Percent-decode, then unescape `~1` and `~0`
fn decode_segment(segment: &str) -> String {
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    decoded.replace("~1", "/").replace("~0", "~")
}

/// Escape a key for use as a pointer segment
pub fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_internal_reference() {
        let reference = Reference::parse("#/components/schemas/User").unwrap();
        assert!(reference.is_internal());
        assert_eq!(reference.pointer().segments(), ["components", "schemas", "User"]);
        assert_eq!(reference.name(), "User");
        assert_eq!(reference.to_string(), "#/components/schemas/User");
    }

    #[test]
    fn test_parse_external_reference() {
        let reference = Reference::parse("./schemas/user.yaml#/User").unwrap();
        assert_eq!(reference.source(), Some("./schemas/user.yaml"));
        assert_eq!(reference.name(), "User");

        let whole = Reference::parse("./schemas/user.yaml").unwrap();
        assert!(whole.pointer().is_root());
        assert_eq!(whole.name(), "user");
    }

    #[test]
    fn test_segment_decoding() {
        let pointer = JsonPointer::parse("/paths/~1users~1{id}/get/a%20b/c~0d").unwrap();
        assert_eq!(pointer.segments(), ["paths", "/users/{id}", "get", "a b", "c~d"]);
        assert_eq!(pointer.to_string(), "/paths/~1users~1{id}/get/a b/c~0d");
    }

    #[test]
    fn test_invalid_fragment() {
        let error = Reference::parse("#components/schemas/User").unwrap_err();
        assert!(matches!(error, Error::InvalidReference { .. }));
        assert!(Reference::parse("").is_err());
    }

    #[test]
    fn test_resolve_through_sequences() {
        let document = json!({"servers": [{"url": "a"}, {"url": "b"}]});

        let pointer = JsonPointer::parse("/servers/1/url").unwrap();
        assert_eq!(pointer.resolve(&document).unwrap(), "b");

        let pointer = JsonPointer::parse("/servers/first/url").unwrap();
        assert_eq!(pointer.resolve(&document).unwrap_err(), "first");

        let pointer = JsonPointer::parse("/servers/7").unwrap();
        assert_eq!(pointer.resolve(&document).unwrap_err(), "7");
    }

    #[test]
    fn test_empty_fragment_is_whole_document() {
        let document = json!({"a": 1});
        let reference = Reference::parse("other.yaml#").unwrap();
        assert_eq!(reference.pointer().resolve(&document).unwrap(), &document);
    }

    #[test]
    fn test_component_reference() {
        let reference = Reference::component("schemas", "a/b");
        assert_eq!(reference.as_str(), "#/components/schemas/a~1b");
        assert_eq!(reference, Reference::parse("#/components/schemas/a~1b").unwrap());
    }
}
