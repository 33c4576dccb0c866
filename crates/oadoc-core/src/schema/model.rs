//! Normalized schema model

use crate::resolver::Reference;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A normalized schema: one variant plus metadata shared by every variant
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub kind: SchemaKind,
    pub nullable: bool,
    pub description: Option<String>,
    pub title: Option<String>,
    /// Explicit example (`example`, or the first entry of `examples`)
    pub example: Option<Value>,
    pub deprecated: bool,
    pub read_only: bool,
    pub write_only: bool,
    /// Unrecognized keywords, kept verbatim in source order
    pub extensions: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    Primitive(PrimitiveSchema),
    Array { items: Box<Schema> },
    Object(ObjectSchema),
    Composite(CompositeSchema),
    /// Kept unresolved for display; the target lives in the schema catalog
    Reference { target: Reference },
    /// No constraint at all, e.g. the items of an array without `items`
    Any,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveSchema {
    pub kind: PrimitiveKind,
    pub format: Option<String>,
    pub enum_values: Option<Vec<Value>>,
    pub default: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Integer,
    Number,
    Boolean,
    Null,
    /// Any other `type` value, e.g. the Swagger 2 `file` type
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    pub properties: IndexMap<String, Schema>,
    /// May name keys missing from `properties`; such names are kept as written
    pub required: Vec<String>,
    pub additional_properties: AdditionalProperties,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Schema>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositeSchema {
    pub kind: CompositionKind,
    pub members: Vec<Schema>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompositionKind {
    #[serde(rename = "oneOf")]
    OneOf,
    #[serde(rename = "anyOf")]
    AnyOf,
    #[serde(rename = "allOf")]
    AllOf,
}

impl CompositionKind {
    /// Keyword order used when several composition keywords are present
    pub const ALL: [CompositionKind; 3] = [
        CompositionKind::OneOf,
        CompositionKind::AnyOf,
        CompositionKind::AllOf,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            CompositionKind::OneOf => "oneOf",
            CompositionKind::AnyOf => "anyOf",
            CompositionKind::AllOf => "allOf",
        }
    }
}

impl fmt::Display for CompositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl PrimitiveKind {
    pub fn as_str(&self) -> &str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Null => "null",
            PrimitiveKind::Other(name) => name,
        }
    }
}

impl From<&str> for PrimitiveKind {
    fn from(name: &str) -> Self {
        match name {
            "string" => PrimitiveKind::String,
            "integer" => PrimitiveKind::Integer,
            "number" => PrimitiveKind::Number,
            "boolean" => PrimitiveKind::Boolean,
            "null" => PrimitiveKind::Null,
            other => PrimitiveKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PrimitiveSchema {
    pub fn new(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            format: None,
            enum_values: None,
            default: None,
        }
    }
}

impl ObjectSchema {
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|required| required == name)
    }
}

impl Default for ObjectSchema {
    fn default() -> Self {
        Self {
            properties: IndexMap::new(),
            required: Vec::new(),
            additional_properties: AdditionalProperties::Allowed(true),
        }
    }
}

impl Schema {
    /// A schema of the given kind with empty metadata
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            nullable: false,
            description: None,
            title: None,
            example: None,
            deprecated: false,
            read_only: false,
            write_only: false,
            extensions: IndexMap::new(),
        }
    }

    pub fn any() -> Self {
        Self::new(SchemaKind::Any)
    }

    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::new(SchemaKind::Primitive(PrimitiveSchema::new(kind)))
    }

    pub fn reference(target: Reference) -> Self {
        Self::new(SchemaKind::Reference { target })
    }

    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match &self.kind {
            SchemaKind::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveSchema> {
        match &self.kind {
            SchemaKind::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match &self.kind {
            SchemaKind::Reference { target } => Some(target),
            _ => None,
        }
    }

    /// Call `visit` for every reference reachable without crossing into referenced targets
    pub fn for_each_reference<'a>(&'a self, visit: &mut impl FnMut(&'a Reference)) {
        match &self.kind {
            SchemaKind::Reference { target } => visit(target),
            SchemaKind::Array { items } => items.for_each_reference(visit),
            SchemaKind::Object(object) => {
                for property in object.properties.values() {
                    property.for_each_reference(visit);
                }
                if let AdditionalProperties::Schema(schema) = &object.additional_properties {
                    schema.for_each_reference(visit);
                }
            }
            SchemaKind::Composite(composite) => {
                for member in &composite.members {
                    member.for_each_reference(visit);
                }
            }
            SchemaKind::Primitive(_) | SchemaKind::Any => {}
        }
    }

    /// Human readable type, as shown in property tables
    pub fn type_name(&self) -> String {
        let name = match &self.kind {
            SchemaKind::Primitive(primitive) => match &primitive.format {
                Some(format) => format!("{}({format})", primitive.kind),
                None => primitive.kind.to_string(),
            },
            SchemaKind::Array { items } => format!("Array<{}>", items.type_name()),
            SchemaKind::Object(_) => self.title.clone().unwrap_or_else(|| "object".to_string()),
            SchemaKind::Composite(composite) => composite
                .members
                .iter()
                .map(Schema::type_name)
                .collect::<Vec<_>>()
                .join(match composite.kind {
                    CompositionKind::AllOf => " & ",
                    _ => " | ",
                }),
            SchemaKind::Reference { target } => target.name().to_string(),
            SchemaKind::Any => "any".to_string(),
        };

        if self.nullable {
            format!("{name} | null")
        } else {
            name
        }
    }
}
