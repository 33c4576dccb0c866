//! Oadoc Core - documentation generation for OpenAPI documents
//!
//! This crate turns OpenAPI 3.x and Swagger 2 documents, possibly split across
//! several files or hosted remotely, into Markdown or PlantUML documentation.
//!
//! ## Stages
//!
//! - **Loading**: JSON or YAML from a path or URL ([`loader`])
//! - **Reference resolution**: `$ref` resolution with cycle detection and a
//!   per-document memo, plus bundling of external files ([`resolver`])
//! - **Schema normalization**: raw schema trees into the closed [`Schema`]
//!   sum type ([`schema`])
//! - **Example synthesis**: deterministic examples for schemas without
//!   explicit ones ([`synthesis`])
//! - **Document model and rendering**: [`ApiDocument`] and [`DocGenerator`]
//!
//! ## Quick Start
//!
//! ```rust
//! use oadoc_core::{build_model, DocGenerator, OutputStyle, ResolvedDocument};
//!
//! let mut document: ResolvedDocument = r#"
//! openapi: 3.0.0
//! info: {title: Pets, version: "1"}
//! paths: {}
//! "#
//! .parse()
//! .unwrap();
//!
//! let (api, catalog) = build_model(&mut document).unwrap();
//! let markdown = DocGenerator::with_style(OutputStyle::Markdown).generate(&api, &catalog);
//! assert!(markdown.starts_with("# Pets 1"));
//! ```
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

pub mod document;
pub mod documentation;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod resolver;
pub mod schema;
pub mod synthesis;

// Re-export commonly used types for convenience
pub use document::{ApiDocument, DocumentBuilder, SpecVersion};
pub use documentation::{DocGenerator, GeneratorConfig, OutputStyle};
pub use error::{Error, Result};
pub use loader::{LoadOptions, Location, LoaderError};
pub use pipeline::{
    build_model, build_model_with, generate_document, load_document, render_document,
    GenerationOptions,
};
pub use resolver::{Reference, ResolvedDocument};
pub use schema::{Schema, SchemaCatalog, SchemaKind, SchemaNormalizer};
pub use synthesis::{Example, ExampleSynthesizer, Provenance, SynthesisConfig, SynthesisWarning};
