//! Example values and their provenance

use crate::schema::CompositionKind;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Where an example value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Taken verbatim from `example` / `examples`
    Explicit,
    /// Generated from the schema shape; not authoritative
    Synthesized,
}

/// Non-fatal limitation met while synthesizing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SynthesisWarning {
    /// Only the first member of a `oneOf` / `anyOf` was used
    UnsupportedComposition {
        composition: CompositionKind,
        path: String,
        alternatives: Vec<String>,
    },
    /// Reference depth bound reached; an empty placeholder was emitted
    DepthLimitReached { reference: String, depth: usize },
}

impl fmt::Display for SynthesisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthesisWarning::UnsupportedComposition {
                composition,
                path,
                alternatives,
            } => write!(
                f,
                "{composition} at '{path}' synthesized from its first member only; alternatives: {}",
                alternatives.join(", ")
            ),
            SynthesisWarning::DepthLimitReached { reference, depth } => write!(
                f,
                "reference '{reference}' not expanded beyond depth {depth}"
            ),
        }
    }
}

/// A representative value for a schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Example {
    pub value: Value,
    pub provenance: Provenance,
    /// Names of `oneOf` / `anyOf` members not shown in `value`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alt_types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<SynthesisWarning>,
}

impl Example {
    pub fn explicit(value: Value) -> Self {
        Self {
            value,
            provenance: Provenance::Explicit,
            alt_types: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn synthesized(value: Value) -> Self {
        Self {
            value,
            provenance: Provenance::Synthesized,
            alt_types: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn is_explicit(&self) -> bool {
        self.provenance == Provenance::Explicit
    }
}
