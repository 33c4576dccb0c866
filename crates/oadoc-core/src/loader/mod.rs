//! Document loading from files and URLs
//!
//! The resolver consumes documents through the [`DocumentLoader`] trait so
//! tests and embedders can supply documents without touching the file system.
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

pub mod cache;
pub mod error;
pub mod parser;
pub mod web;

pub use cache::{CacheStats, DocumentCache};
pub use error::{LoaderError, LoaderResult};
pub use parser::{DocumentParser, Format};

use serde_json::Value;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Identity of a loaded document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// A local file, canonicalized when it exists
    File(PathBuf),
    /// A remote document
    Url(Url),
    /// A root parsed from an in-memory string
    Inline,
}

impl Location {
    /// Classify a user supplied locator: an existing file, or an http(s) URL
    pub fn parse(locator: &str) -> LoaderResult<Self> {
        let path = Path::new(locator);

        if path.exists() {
            if !path.is_file() {
                return Err(LoaderError::NotAFile {
                    path: path.to_path_buf(),
                });
            }
            let canonical =
                std::fs::canonicalize(path).map_err(|e| LoaderError::io_error(path, e))?;
            return Ok(Location::File(canonical));
        }

        if is_http_url(locator) {
            return Url::parse(locator)
                .map(Location::Url)
                .map_err(|_| LoaderError::InvalidSource {
                    locator: locator.to_string(),
                });
        }

        Err(LoaderError::InvalidSource {
            locator: locator.to_string(),
        })
    }

    /// Resolve a relative source against this location
    pub fn join(&self, relative: &str) -> LoaderResult<Location> {
        let invalid = || LoaderError::InvalidSource {
            locator: relative.to_string(),
        };

        if is_http_url(relative) {
            return Url::parse(relative).map(Location::Url).map_err(|_| invalid());
        }

        match self {
            Location::Url(base) => base.join(relative).map(Location::Url).map_err(|_| invalid()),
            Location::File(path) => {
                let base = path.parent().unwrap_or_else(|| Path::new(""));
                Ok(Location::File(normalize_path(&base.join(relative))))
            }
            Location::Inline => Ok(Location::File(normalize_path(Path::new(relative)))),
        }
    }

    /// Whether the location names a remote document
    pub fn is_remote(&self) -> bool {
        matches!(self, Location::Url(_))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::File(path) => write!(f, "{}", path.display()),
            Location::Url(url) => write!(f, "{url}"),
            Location::Inline => f.write_str("<inline>"),
        }
    }
}

fn is_http_url(locator: &str) -> bool {
    let lower = locator.to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Canonicalize existing files; fold `.` and `..` lexically otherwise, so that the
/// same file reached through different relative paths gets one cache key.
fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = std::fs::canonicalize(path) {
        return canonical;
    }

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Options for reading sources
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Timeout of the single GET used for remote documents
    pub http_timeout: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            http_timeout: Duration::from_secs(20),
        }
    }
}

/// Source of parsed documents, injected into the resolver
pub trait DocumentLoader {
    /// Read and parse the document at `location`
    fn load(&self, location: &Location) -> LoaderResult<Value>;
}

/// Default loader reading local files and fetching URLs
#[derive(Debug, Clone, Default)]
pub struct SourceLoader {
    parser: DocumentParser,
    options: LoadOptions,
}

impl SourceLoader {
    /// Create a loader with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom options
    pub fn with_options(options: LoadOptions) -> Self {
        Self {
            parser: DocumentParser::new(),
            options,
        }
    }

    fn load_url(&self, url: &Url) -> LoaderResult<Value> {
        let document = web::fetch(url, self.options.http_timeout)?;
        let location = url.to_string();

        match Format::from_remote(url.as_str(), document.content_type.as_deref()) {
            Some(format) => self.parser.parse_content(&document.body, format, &location),
            None => self
                .parser
                .parse_with_fallback(&document.body, &location)
                .map(|(value, _)| value),
        }
    }
}

impl DocumentLoader for SourceLoader {
    fn load(&self, location: &Location) -> LoaderResult<Value> {
        debug!(location = %location, "Loading document");

        match location {
            Location::File(path) => {
                if path.exists() && !path.is_file() {
                    return Err(LoaderError::NotAFile { path: path.clone() });
                }
                self.parser.parse_file(path)
            }
            Location::Url(url) => self.load_url(url),
            Location::Inline => Err(LoaderError::InlineSource),
        }
    }
}
