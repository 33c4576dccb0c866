//! Document model
//!
//! The typed view of an OpenAPI document that renderers consume: info,
//! servers, operations grouped by tag, and normalized component schemas.
//! Built by [`DocumentBuilder`] from a bundled [`crate::ResolvedDocument`].
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

pub mod builder;
pub mod content;
pub mod security;

pub use builder::DocumentBuilder;
pub use content::{simplify_content, SimplifiedContent};
pub use security::{security_parameter, SecurityScheme};

use crate::schema::{Schema, SchemaKind};
use crate::synthesis::Example;
use indexmap::IndexMap;
use std::fmt;

/// Specification family of the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecVersion {
    Swagger2,
    OpenApi3,
    OpenApi31,
}

impl SpecVersion {
    /// Detect the version from the `swagger` / `openapi` root keys
    pub fn detect(root: &serde_json::Value) -> Self {
        if let Some(version) = root.get("swagger").and_then(serde_json::Value::as_str) {
            if version.starts_with('2') {
                return SpecVersion::Swagger2;
            }
        }

        match root.get("openapi").and_then(serde_json::Value::as_str) {
            Some(version) if version.starts_with("3.1") => SpecVersion::OpenApi31,
            _ => SpecVersion::OpenApi3,
        }
    }

    /// JSON pointer section holding reusable schemas
    pub fn schemas_pointer(self) -> &'static [&'static str] {
        match self {
            SpecVersion::Swagger2 => &["definitions"],
            _ => &["components", "schemas"],
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpecVersion::Swagger2 => "Swagger 2.0",
            SpecVersion::OpenApi3 => "OpenAPI 3.0",
            SpecVersion::OpenApi31 => "OpenAPI 3.1",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    pub terms_of_service: Option<String>,
    pub contact: Option<Contact>,
    pub license: Option<License>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    pub name: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct License {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalDocs {
    pub url: String,
    pub description: Option<String>,
}

/// HTTP methods an OpenAPI path item can declare, in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::Get,
        Method::Put,
        Method::Post,
        Method::Delete,
        Method::Options,
        Method::Head,
        Method::Patch,
        Method::Trace,
    ];

    /// Key of the operation inside a path item
    pub fn key(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Put => "put",
            Method::Post => "post",
            Method::Delete => "delete",
            Method::Options => "options",
            Method::Head => "head",
            Method::Patch => "patch",
            Method::Trace => "trace",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key().to_uppercase())
    }
}

/// Where a parameter travels
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    Other(String),
}

impl ParameterLocation {
    pub fn as_str(&self) -> &str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
            ParameterLocation::Other(other) => other,
        }
    }
}

impl From<&str> for ParameterLocation {
    fn from(value: &str) -> Self {
        match value {
            "path" => ParameterLocation::Path,
            "query" => ParameterLocation::Query,
            "header" => ParameterLocation::Header,
            "cookie" => ParameterLocation::Cookie,
            other => ParameterLocation::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub description: Option<String>,
    pub required: bool,
    pub deprecated: bool,
    pub schema: Schema,
}

/// A named example shown for one content type
#[derive(Debug, Clone, PartialEq)]
pub struct ContentExample {
    /// Key in the `examples` map, `None` for `example` or a synthesized value
    pub name: Option<String>,
    pub example: Example,
}

/// One content type of a request or response body
#[derive(Debug, Clone, PartialEq)]
pub struct MediaContent {
    pub content_type: String,
    pub schema: Option<Schema>,
    pub examples: Vec<ContentExample>,
    /// Equivalent content types folded into this one, sorted
    pub alt_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody {
    pub description: Option<String>,
    pub required: bool,
    pub content: Vec<MediaContent>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseHeader {
    pub name: String,
    pub description: Option<String>,
    pub schema: Option<Schema>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Status code as written, e.g. `200`, `4XX` or `default`
    pub status: String,
    pub description: Option<String>,
    pub headers: Vec<ResponseHeader>,
    pub content: Vec<MediaContent>,
}

impl Response {
    /// Standard reason phrase for numeric status codes
    pub fn status_phrase(&self) -> Option<&'static str> {
        self.status
            .parse::<u16>()
            .ok()
            .and_then(|code| reqwest::StatusCode::from_u16(code).ok())
            .and_then(|status| status.canonical_reason())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub method: Method,
    pub path: String,
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub deprecated: bool,
    /// Security parameters first, then declared parameters sorted by name
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    pub responses: Vec<Response>,
}

/// One entry of `paths` with its operations in method order
#[derive(Debug, Clone, PartialEq)]
pub struct PathItem {
    pub path: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub operations: Vec<Operation>,
}

/// The typed document handed to renderers
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDocument {
    pub version: SpecVersion,
    pub info: Info,
    pub servers: Vec<Server>,
    pub tags: Vec<Tag>,
    pub external_docs: Option<ExternalDocs>,
    /// Path items keyed by their common tag; the empty key collects the rest
    pub groups: IndexMap<String, Vec<PathItem>>,
    /// Component schemas in source order
    pub schemas: IndexMap<String, Schema>,
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

impl ApiDocument {
    /// Every operation, in group order
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.groups
            .values()
            .flatten()
            .flat_map(|item| item.operations.iter())
    }

    /// Component schemas sorted case-insensitively by name
    pub fn sorted_schemas(&self) -> Vec<(&str, &Schema)> {
        let mut schemas: Vec<_> = self
            .schemas
            .iter()
            .map(|(name, schema)| (name.as_str(), schema))
            .collect();
        schemas.sort_by_key(|(name, _)| name.to_lowercase());
        schemas
    }

    /// `(type name, referenced type name)` pairs between component schemas,
    /// from object properties, array items and array schemas
    pub fn schema_bindings(&self) -> Vec<(String, String)> {
        let mut bindings = Vec::new();

        for (name, schema) in self.sorted_schemas() {
            match &schema.kind {
                SchemaKind::Object(object) => {
                    let mut properties: Vec<_> = object.properties.iter().collect();
                    properties.sort_by_key(|(key, _)| key.to_lowercase());

                    for (_, property) in properties {
                        if let Some(target) = referenced_name(property) {
                            bindings.push((name.to_string(), target));
                        }
                    }
                }
                SchemaKind::Array { items } => {
                    if let Some(target) = items.as_reference() {
                        bindings.push((name.to_string(), target.name().to_string()));
                    }
                }
                _ => {}
            }
        }

        bindings
    }
}

/// Name of the schema referenced by `schema` directly or as array items
fn referenced_name(schema: &Schema) -> Option<String> {
    match &schema.kind {
        SchemaKind::Reference { target } => Some(target.name().to_string()),
        SchemaKind::Array { items } => items.as_reference().map(|target| target.name().to_string()),
        _ => None,
    }
}
