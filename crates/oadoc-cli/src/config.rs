//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//! - Command-line arguments, applied by the command handlers

use crate::error::{Error, Result};
use oadoc_core::{GeneratorConfig, LoadOptions, OutputStyle, SynthesisConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation settings
    pub docs: DocsConfig,

    /// Example synthesis settings
    pub synthesis: SynthesisSettings,

    /// Settings for remote documents
    pub http: HttpConfig,

    /// Logging settings
    pub logging: LoggingSettings,
}

/// Documentation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Default output style, by name or number
    pub style: String,

    /// Include a table of contents
    pub include_toc: bool,

    /// Include request and response examples
    pub include_examples: bool,

    /// Include deprecated operations
    pub include_deprecated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisSettings {
    /// Reference depth at which examples stop expanding
    pub max_depth: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Timeout in seconds
    pub timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error); overrides verbosity flags
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,

    /// Log file path
    pub file: Option<PathBuf>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        let generator = GeneratorConfig::default();
        Self {
            style: generator.style.name().to_string(),
            include_toc: generator.include_toc,
            include_examples: generator.include_examples,
            include_deprecated: generator.include_deprecated,
        }
    }
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            max_depth: SynthesisConfig::default().max_depth,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: LoadOptions::default().http_timeout.as_secs(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml" | "yml") => serde_yaml::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Failed to load config");
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".oadoc.yaml"),
            PathBuf::from(".oadoc.json"),
            PathBuf::from(".oadoc.toml"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let oadoc_dir = config_dir.join("oadoc");
            paths.push(oadoc_dir.join("config.yaml"));
            paths.push(oadoc_dir.join("config.json"));
            paths.push(oadoc_dir.join("config.toml"));
        }

        paths
    }

    /// The configured default style
    pub fn style(&self) -> Result<OutputStyle> {
        self.docs
            .style
            .parse()
            .map_err(|e| Error::config(format!("docs.style: {e}")))
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            http_timeout: Duration::from_secs(self.http.timeout),
        }
    }

    pub fn synthesis_config(&self) -> SynthesisConfig {
        SynthesisConfig {
            max_depth: self.synthesis.max_depth,
        }
    }

    /// Generator settings for `style`
    pub fn generator_config(&self, style: OutputStyle) -> GeneratorConfig {
        GeneratorConfig {
            style,
            include_toc: self.docs.include_toc,
            include_examples: self.docs.include_examples,
            include_deprecated: self.docs.include_deprecated,
            ..GeneratorConfig::default()
        }
    }
}
