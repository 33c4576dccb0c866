//! Output styles

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Kind of document the generator writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputStyle {
    /// Markdown for MkDocs with PyMdown extensions
    #[default]
    MkDocs = 1,
    /// Basic Markdown
    Markdown = 2,
    /// PlantUML class diagram of the component schemas
    PlantUmlSchemas = 100,
    /// PlantUML diagram of the operations with their request and response bodies
    PlantUmlApi = 101,
}

impl OutputStyle {
    pub const ALL: [OutputStyle; 4] = [
        OutputStyle::MkDocs,
        OutputStyle::Markdown,
        OutputStyle::PlantUmlSchemas,
        OutputStyle::PlantUmlApi,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputStyle::MkDocs => "MKDOCS",
            OutputStyle::Markdown => "MARKDOWN",
            OutputStyle::PlantUmlSchemas => "PLANTUML_SCHEMAS",
            OutputStyle::PlantUmlApi => "PLANTUML_API",
        }
    }

    pub fn value(self) -> u16 {
        self as u16
    }

    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.value() == value)
    }

    pub fn is_markdown(self) -> bool {
        matches!(self, OutputStyle::MkDocs | OutputStyle::Markdown)
    }
}

impl FromStr for OutputStyle {
    type Err = Error;

    /// Accepts the style name in any case, or its number
    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        let style = match value.parse::<u16>() {
            Ok(number) => Self::from_value(number),
            Err(_) => Self::ALL
                .into_iter()
                .find(|style| style.name().eq_ignore_ascii_case(value)),
        };

        style.ok_or_else(|| Error::UnknownStyle {
            value: value.to_string(),
        })
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
