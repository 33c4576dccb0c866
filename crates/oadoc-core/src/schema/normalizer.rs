//! Conversion of raw schema trees into [`Schema`] values
//!
//! Dispatch follows one ordered rule: `$ref`, then `oneOf`/`anyOf`/`allOf`,
//! then `type: array`, then `type: object` or `properties`, then a primitive
//! keyed by `type` (`string` when absent).
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::resolver::reference::escape_segment;
use crate::resolver::{Reference, ResolvedDocument};
use crate::schema::model::{
    AdditionalProperties, CompositeSchema, CompositionKind, ObjectSchema, PrimitiveKind,
    PrimitiveSchema, Schema, SchemaKind,
};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Keywords interpreted by the normalizer; everything else becomes an extension
const RECOGNIZED_KEYWORDS: &[&str] = &[
    "$ref",
    "oneOf",
    "anyOf",
    "allOf",
    "type",
    "items",
    "properties",
    "required",
    "additionalProperties",
    "format",
    "enum",
    "default",
    "nullable",
    "x-nullable",
    "description",
    "title",
    "example",
    "examples",
    "deprecated",
    "readOnly",
    "writeOnly",
];

/// Stateless schema normalizer
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaNormalizer;

impl SchemaNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize `node`; `path` names the node in errors, e.g. `#/components/schemas/User`
    pub fn normalize(&self, node: &Value, path: &str) -> Result<Schema> {
        let map = match node {
            Value::Object(map) => map,
            // JSON Schema boolean schemas
            Value::Bool(_) => return Ok(Schema::any()),
            other => {
                return Err(Error::schema_shape(
                    path,
                    format!("expected a mapping, found {}", value_kind(other)),
                ))
            }
        };

        if let Some(raw) = map.get("$ref") {
            let raw = raw
                .as_str()
                .ok_or_else(|| Error::schema_shape(child(path, "$ref"), "expected a string"))?;
            return Ok(Schema::reference(Reference::parse(raw)?));
        }

        let (types, null_in_type) = read_types(map, path)?;
        let mut schema = Schema::new(self.dispatch(map, &types, path)?);
        self.read_metadata(map, path, &mut schema)?;
        schema.nullable |= null_in_type;

        Ok(schema)
    }

    /// Resolve `reference` against the root of `document` and normalize the target
    pub fn normalize_reference(
        &self,
        document: &mut ResolvedDocument,
        reference: &Reference,
    ) -> Result<Schema> {
        let base = document.location().clone();
        let node = document.resolve(reference, &base)?;
        self.normalize(&node, reference.as_str())
    }

    fn dispatch(&self, map: &Map<String, Value>, types: &[String], path: &str) -> Result<SchemaKind> {
        for kind in CompositionKind::ALL {
            if let Some(members) = map.get(kind.keyword()) {
                return self.composite(kind, members, path);
            }
        }

        match types {
            [single] if single == "array" => {
                let items = match map.get("items") {
                    Some(items @ Value::Object(_)) => self.normalize(items, &child(path, "items"))?,
                    Some(_) => {
                        return Err(Error::schema_shape(child(path, "items"), "expected a mapping"))
                    }
                    None => Schema::any(),
                };
                Ok(SchemaKind::Array {
                    items: Box::new(items),
                })
            }
            [single] if single == "object" => self.object(map, path),
            _ if map.contains_key("properties") => self.object(map, path),
            [_, _, ..] => self.multi_type(map, types, path),
            _ => {
                let kind = types
                    .first()
                    .map(|name| PrimitiveKind::from(name.as_str()))
                    .unwrap_or(PrimitiveKind::String);
                self.primitive(map, kind, path)
            }
        }
    }

    fn composite(&self, kind: CompositionKind, members: &Value, path: &str) -> Result<SchemaKind> {
        let path = child(path, kind.keyword());
        let members = members
            .as_array()
            .ok_or_else(|| Error::schema_shape(&path, "expected a sequence"))?;

        let members = members
            .iter()
            .enumerate()
            .map(|(index, member)| self.normalize(member, &child(&path, &index.to_string())))
            .collect::<Result<Vec<_>>>()?;

        Ok(SchemaKind::Composite(CompositeSchema { kind, members }))
    }

    fn object(&self, map: &Map<String, Value>, path: &str) -> Result<SchemaKind> {
        let mut object = ObjectSchema::default();

        if let Some(properties) = map.get("properties") {
            let properties_path = child(path, "properties");
            let properties = properties
                .as_object()
                .ok_or_else(|| Error::schema_shape(&properties_path, "expected a mapping"))?;

            object.properties = properties
                .iter()
                .map(|(name, node)| {
                    let schema = self.normalize(node, &child(&properties_path, name))?;
                    Ok((name.clone(), schema))
                })
                .collect::<Result<IndexMap<_, _>>>()?;
        }

        if let Some(required) = map.get("required") {
            object.required = string_list(required)
                .ok_or_else(|| Error::schema_shape(child(path, "required"), "expected a sequence of strings"))?;
        }

        object.additional_properties = match map.get("additionalProperties") {
            None => AdditionalProperties::Allowed(true),
            Some(Value::Bool(allowed)) => AdditionalProperties::Allowed(*allowed),
            Some(node @ Value::Object(_)) => AdditionalProperties::Schema(Box::new(
                self.normalize(node, &child(path, "additionalProperties"))?,
            )),
            Some(_) => {
                return Err(Error::schema_shape(
                    child(path, "additionalProperties"),
                    "expected a boolean or a mapping",
                ))
            }
        };

        Ok(SchemaKind::Object(object))
    }

    fn primitive(&self, map: &Map<String, Value>, kind: PrimitiveKind, path: &str) -> Result<SchemaKind> {
        let mut primitive = PrimitiveSchema::new(kind);
        primitive.format = optional_string(map, "format", path)?;
        primitive.default = map.get("default").cloned();

        if let Some(values) = map.get("enum") {
            let values = values
                .as_array()
                .ok_or_else(|| Error::schema_shape(child(path, "enum"), "expected a sequence"))?;
            primitive.enum_values = Some(values.clone());
        }

        Ok(SchemaKind::Primitive(primitive))
    }

    /// `type: [string, integer]` becomes an `anyOf` over single-type copies of the node
    fn multi_type(&self, map: &Map<String, Value>, types: &[String], path: &str) -> Result<SchemaKind> {
        let members = types
            .iter()
            .map(|name| {
                let mut single: Map<String, Value> = map
                    .iter()
                    .filter(|(key, _)| !is_metadata(key))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();
                single.insert("type".to_string(), Value::String(name.clone()));
                self.normalize(&Value::Object(single), path)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SchemaKind::Composite(CompositeSchema {
            kind: CompositionKind::AnyOf,
            members,
        }))
    }

    fn read_metadata(&self, map: &Map<String, Value>, path: &str, schema: &mut Schema) -> Result<()> {
        schema.description = optional_string(map, "description", path)?;
        schema.title = optional_string(map, "title", path)?;
        schema.nullable = optional_bool(map, "nullable", path)? || optional_bool(map, "x-nullable", path)?;
        schema.deprecated = optional_bool(map, "deprecated", path)?;
        schema.read_only = optional_bool(map, "readOnly", path)?;
        schema.write_only = optional_bool(map, "writeOnly", path)?;

        schema.example = match (map.get("example"), map.get("examples")) {
            (Some(example), _) => Some(example.clone()),
            (None, Some(Value::Array(examples))) => examples.first().cloned(),
            _ => None,
        };

        schema.extensions = map
            .iter()
            .filter(|(key, _)| !RECOGNIZED_KEYWORDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(())
    }
}

/// Read `type` as a list of names, splitting out a `"null"` entry of a type sequence
fn read_types(map: &Map<String, Value>, path: &str) -> Result<(Vec<String>, bool)> {
    let types = match map.get("type") {
        None => return Ok((Vec::new(), false)),
        Some(Value::String(name)) => return Ok((vec![name.clone()], false)),
        Some(value) => string_list(value).ok_or_else(|| {
            Error::schema_shape(child(path, "type"), "expected a string or a sequence of strings")
        })?,
    };

    if !types.iter().any(|name| name == "null") {
        return Ok((types, false));
    }

    // a sequence holding only "null" still describes the null type
    let others: Vec<String> = types.into_iter().filter(|name| name != "null").collect();
    if others.is_empty() {
        return Ok((vec!["null".to_string()], true));
    }
    Ok((others, true))
}

fn is_metadata(key: &str) -> bool {
    matches!(
        key,
        "type" | "nullable" | "description" | "title" | "example" | "examples" | "deprecated"
    )
}

fn optional_string(map: &Map<String, Value>, key: &str, path: &str) -> Result<Option<String>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(Error::schema_shape(child(path, key), "expected a string")),
    }
}

fn optional_bool(map: &Map<String, Value>, key: &str, path: &str) -> Result<bool> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(value)) => Ok(*value),
        Some(_) => Err(Error::schema_shape(child(path, key), "expected a boolean")),
    }
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

fn child(path: &str, segment: &str) -> String {
    format!("{path}/{}", escape_segment(segment))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
