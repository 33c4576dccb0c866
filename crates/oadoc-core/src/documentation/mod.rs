//! Documentation rendering
//!
//! This module turns an [`crate::document::ApiDocument`] into Markdown (plain
//! or for MkDocs with PyMdown extensions) or PlantUML class diagrams.
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

pub mod contents;
pub mod generator;
pub mod markdown;
pub mod plantuml;
pub mod style;
pub mod texts;

pub use contents::{writer_for, ContentWriter};
pub use generator::{DocGenerator, GeneratorConfig};
pub use style::OutputStyle;
pub use texts::Texts;
