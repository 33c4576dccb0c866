//! Document parsing for YAML and JSON formats
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use serde_json::Value;
use std::path::Path;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| LoaderError::unsupported_format(path.display()))
    }

    /// Map a bare extension to a format
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Guess the format of a fetched document from its content type, then its URL suffix
    pub fn from_remote(url: &str, content_type: Option<&str>) -> Option<Self> {
        let content_type = content_type.map(str::to_lowercase).unwrap_or_default();
        let url = url.to_lowercase();

        if content_type.contains("json") || url.ends_with(".json") {
            Some(Format::Json)
        } else if content_type.contains("yaml")
            || url.ends_with(".yaml")
            || url.ends_with(".yml")
        {
            Some(Format::Yaml)
        } else {
            None
        }
    }
}

/// Parser turning document text into a generic tree
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentParser;

impl DocumentParser {
    /// Create a new document parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a file, detecting format from extension
    pub fn parse_file(&self, path: &Path) -> LoaderResult<Value> {
        let format = Format::from_path(path)?;
        let content =
            std::fs::read_to_string(path).map_err(|e| LoaderError::io_error(path, e))?;

        self.parse_content(&content, format, &path.display().to_string())
    }

    /// Parse content with explicit format
    pub fn parse_content(&self, content: &str, format: Format, location: &str) -> LoaderResult<Value> {
        match format {
            Format::Yaml => self.parse_yaml(content, location),
            Format::Json => self.parse_json(content, location),
        }
    }

    /// Parse YAML content
    pub fn parse_yaml(&self, content: &str, location: &str) -> LoaderResult<Value> {
        // Going through serde_yaml::Value keeps integer keys such as status codes
        let yaml_value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|source| LoaderError::YamlParseError {
                location: location.to_string(),
                source,
            })?;

        serde_json::to_value(yaml_value).map_err(|source| LoaderError::ConversionError {
            location: location.to_string(),
            source,
        })
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &str, location: &str) -> LoaderResult<Value> {
        serde_json::from_str(content).map_err(|source| LoaderError::JsonParseError {
            location: location.to_string(),
            source,
        })
    }

    /// Parse content of unknown format, trying JSON first and YAML second
    pub fn parse_with_fallback(&self, content: &str, location: &str) -> LoaderResult<(Value, Format)> {
        if let Ok(value) = self.parse_json(content, location) {
            return Ok((value, Format::Json));
        }

        if let Ok(value) = self.parse_yaml(content, location) {
            return Ok((value, Format::Yaml));
        }

        Err(LoaderError::unsupported_format(location))
    }
}
