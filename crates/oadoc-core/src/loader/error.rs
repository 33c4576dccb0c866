//! Error types for document loading operations
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Failures while turning a locator into a parsed document tree
#[derive(Error, Debug)]
pub enum LoaderError {
    /// File I/O errors
    #[error("Failed to read file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The locator points to something that exists but is not a file
    #[error("The path '{}' is not a file", path.display())]
    NotAFile { path: PathBuf },

    /// The locator is neither an existing file nor an http(s) URL
    #[error("Unsupported source '{locator}': expected an existing file path or an http(s) URL")]
    InvalidSource { locator: String },

    /// YAML parsing errors
    #[error("Failed to parse YAML document '{location}': {source}")]
    YamlParseError {
        location: String,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON document '{location}': {source}")]
    JsonParseError {
        location: String,
        source: serde_json::Error,
    },

    /// A YAML tree that cannot be represented as JSON (e.g. non-scalar mapping keys)
    #[error("Failed to convert YAML document '{location}': {source}")]
    ConversionError {
        location: String,
        source: serde_json::Error,
    },

    /// Unsupported file format
    #[error("Unsupported format for '{location}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { location: String },

    /// Transport failure (DNS, TLS, timeout, body decoding)
    #[error("Failed to fetch '{url}': {source}")]
    HttpError { url: String, source: reqwest::Error },

    /// Non-success response status
    #[error("Failed to fetch '{url}': response status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Inline roots have no backing source to re-read
    #[error("An inline document cannot be loaded from a source")]
    InlineSource,
}

impl LoaderError {
    /// Create an I/O error for a path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(location: impl ToString) -> Self {
        Self::UnsupportedFormat {
            location: location.to_string(),
        }
    }

    /// The location this error relates to, when there is one
    pub fn location(&self) -> Option<String> {
        match self {
            Self::IoError { path, .. } | Self::NotAFile { path } => {
                Some(path.display().to_string())
            }
            Self::InvalidSource { locator } => Some(locator.clone()),
            Self::YamlParseError { location, .. }
            | Self::JsonParseError { location, .. }
            | Self::ConversionError { location, .. }
            | Self::UnsupportedFormat { location } => Some(location.clone()),
            Self::HttpError { url, .. } | Self::HttpStatus { url, .. } => Some(url.clone()),
            Self::InlineSource => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = LoaderError::unsupported_format("docs/api.txt");
        assert_eq!(
            error.to_string(),
            "Unsupported format for 'docs/api.txt'. Expected .yaml, .yml, or .json"
        );

        let error = LoaderError::HttpStatus {
            url: "https://example.com/openapi.json".to_string(),
            status: 404,
        };
        assert!(error.to_string().contains("404"));
    }

    #[test]
    fn test_error_location() {
        let error = LoaderError::io_error(
            "/tmp/missing.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(error.location().as_deref(), Some("/tmp/missing.yaml"));
        assert!(LoaderError::InlineSource.location().is_none());
    }
}
