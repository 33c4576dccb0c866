//! Error types for resolution, normalization and output
//!
//! Every variant here aborts a run. Limitations met while synthesizing
//! examples are reported as [`crate::synthesis::SynthesisWarning`] instead.
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

use crate::loader::LoaderError;
use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for oadoc core operations
#[derive(Error, Debug)]
pub enum Error {
    /// The source or an external `$ref` target could not be read or parsed
    #[error("Failed to load document: {0}")]
    Load(#[from] LoaderError),

    /// A pointer segment is absent from the target node
    #[error("Reference '{reference}' not found: segment '{segment}' does not exist in {location}")]
    ReferenceNotFound {
        reference: String,
        segment: String,
        location: String,
    },

    /// A `$ref` chain points back to itself
    #[error("Circular reference detected: {chain}")]
    CircularReference { chain: String },

    /// A `$ref` value that cannot be parsed
    #[error("Invalid reference '{reference}': {reason}")]
    InvalidReference { reference: String, reason: String },

    /// A schema keyword with a value of the wrong shape
    #[error("Invalid schema at '{path}': {reason}")]
    SchemaShape { path: String, reason: String },

    /// An output style name or number that does not exist
    #[error("Invalid style: {value}")]
    UnknownStyle { value: String },

    /// Writing rendered output failed
    #[error("Failed to write '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Create a circular reference error from the active resolution chain
    pub fn circular_reference<T: Display>(chain: &[T]) -> Self {
        let chain = chain
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        Self::CircularReference { chain }
    }

    /// Create a schema shape error
    pub fn schema_shape(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SchemaShape {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid reference error
    pub fn invalid_reference(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidReference {
            reference: reference.into(),
            reason: reason.into(),
        }
    }

    /// Short, stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Load(_) => "load",
            Self::ReferenceNotFound { .. } => "reference_not_found",
            Self::CircularReference { .. } => "circular_reference",
            Self::InvalidReference { .. } => "invalid_reference",
            Self::SchemaShape { .. } => "schema_shape",
            Self::UnknownStyle { .. } => "unknown_style",
            Self::Output { .. } => "output",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circular_reference_chain() {
        let error = Error::circular_reference(&["#/a", "#/b", "#/a"]);
        assert_eq!(
            error.to_string(),
            "Circular reference detected: #/a -> #/b -> #/a"
        );
        assert_eq!(error.kind(), "circular_reference");
    }

    #[test]
    fn test_reference_not_found_names_segment() {
        let error = Error::ReferenceNotFound {
            reference: "#/components/schemas/DoesNotExist".to_string(),
            segment: "DoesNotExist".to_string(),
            location: "<inline>".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("'DoesNotExist'"));
        assert!(message.contains("#/components/schemas/DoesNotExist"));
    }
}
