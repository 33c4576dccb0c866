//! Example synthesis from normalized schemas
//!
//! Explicit examples always win and stop recursion. Otherwise every variant
//! maps to a deterministic value; references are followed through the
//! [`SchemaCatalog`] up to a depth bound, after which an empty placeholder is
//! emitted.
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

use crate::schema::{
    AdditionalProperties, CompositeSchema, CompositionKind, ObjectSchema, Schema, SchemaCatalog,
    SchemaKind,
};
use crate::synthesis::example::{Example, SynthesisWarning};
use crate::synthesis::primitives;
use serde_json::{Map, Value};
use tracing::{trace, warn};

/// Synthesis settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Number of nested references followed before emitting a placeholder
    pub max_depth: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self { max_depth: 5 }
    }
}

/// Produces representative values for schemas of one document
#[derive(Debug, Clone)]
pub struct ExampleSynthesizer<'a> {
    catalog: &'a SchemaCatalog,
    config: SynthesisConfig,
}

/// Annotations gathered during one synthesis
#[derive(Default)]
struct Notes {
    alt_types: Vec<String>,
    warnings: Vec<SynthesisWarning>,
}

impl<'a> ExampleSynthesizer<'a> {
    pub fn new(catalog: &'a SchemaCatalog) -> Self {
        Self::with_config(catalog, SynthesisConfig::default())
    }

    pub fn with_config(catalog: &'a SchemaCatalog, config: SynthesisConfig) -> Self {
        Self { catalog, config }
    }

    /// Synthesize an example for `schema`, starting at reference depth 0
    pub fn synthesize(&self, schema: &Schema) -> Example {
        self.synthesize_at(schema, 0)
    }

    /// Synthesize an example for `schema` reached through `depth` references
    pub fn synthesize_at(&self, schema: &Schema, depth: usize) -> Example {
        if let Some(value) = self.explicit_example(schema) {
            return Example::explicit(value.clone());
        }

        let mut notes = Notes::default();
        let value = self.value(schema, depth, "$", &mut notes);

        for warning in &notes.warnings {
            warn!(%warning, "Example synthesis limitation");
        }

        Example {
            value,
            alt_types: notes.alt_types,
            warnings: notes.warnings,
            ..Example::synthesized(Value::Null)
        }
    }

    /// The explicit example of `schema`, looking through top-level references
    fn explicit_example<'s>(&'s self, schema: &'s Schema) -> Option<&'s Value> {
        schema
            .example
            .as_ref()
            .or_else(|| self.catalog.resolve(schema).example.as_ref())
    }

    fn value(&self, schema: &Schema, depth: usize, path: &str, notes: &mut Notes) -> Value {
        if let Some(example) = &schema.example {
            return example.clone();
        }
        if let Some(constant) = schema.extensions.get("const") {
            return constant.clone();
        }

        match &schema.kind {
            SchemaKind::Primitive(primitive) => primitives::sample(primitive),
            SchemaKind::Array { items } => {
                Value::Array(vec![self.value(items, depth, &format!("{path}[0]"), notes)])
            }
            SchemaKind::Object(object) => self.object(object, depth, path, notes),
            SchemaKind::Composite(composite) => self.composite(composite, depth, path, notes),
            SchemaKind::Reference { target } => {
                let Some(resolved) = self.catalog.get(target) else {
                    warn!(reference = %target, "Reference missing from the schema catalog");
                    return Value::Null;
                };

                let next = depth + 1;
                if next > self.config.max_depth {
                    trace!(reference = %target, depth, "Depth bound reached");
                    notes.warnings.push(SynthesisWarning::DepthLimitReached {
                        reference: target.to_string(),
                        depth: self.config.max_depth,
                    });
                    return placeholder(self.catalog.resolve(resolved));
                }

                self.value(resolved, next, path, notes)
            }
            SchemaKind::Any => Value::Null,
        }
    }

    fn object(&self, object: &ObjectSchema, depth: usize, path: &str, notes: &mut Notes) -> Value {
        let mut map = Map::with_capacity(object.properties.len());

        for (name, property) in &object.properties {
            let value = self.value(property, depth, &format!("{path}.{name}"), notes);
            map.insert(name.clone(), value);
        }

        if map.is_empty() {
            if let AdditionalProperties::Schema(values) = &object.additional_properties {
                let value = self.value(values, depth, &format!("{path}.additionalProp1"), notes);
                map.insert("additionalProp1".to_string(), value);
            }
        }

        Value::Object(map)
    }

    fn composite(&self, composite: &CompositeSchema, depth: usize, path: &str, notes: &mut Notes) -> Value {
        let Some(first) = composite.members.first() else {
            return Value::Null;
        };

        match composite.kind {
            CompositionKind::AllOf => {
                let values: Vec<Value> = composite
                    .members
                    .iter()
                    .map(|member| self.value(member, depth, path, notes))
                    .collect();

                if values.iter().all(Value::is_object) {
                    let mut merged = Map::new();
                    for value in values {
                        if let Value::Object(map) = value {
                            merged.extend(map);
                        }
                    }
                    Value::Object(merged)
                } else {
                    values.into_iter().next().unwrap_or(Value::Null)
                }
            }
            CompositionKind::OneOf | CompositionKind::AnyOf => {
                let alternatives: Vec<String> =
                    composite.members[1..].iter().map(member_name).collect();

                if !alternatives.is_empty() {
                    for name in &alternatives {
                        if !notes.alt_types.contains(name) {
                            notes.alt_types.push(name.clone());
                        }
                    }
                    notes.warnings.push(SynthesisWarning::UnsupportedComposition {
                        composition: composite.kind,
                        path: path.to_string(),
                        alternatives,
                    });
                }

                self.value(first, depth, path, notes)
            }
        }
    }
}

/// Identifying name of a composition member
fn member_name(schema: &Schema) -> String {
    match (&schema.kind, &schema.title) {
        (SchemaKind::Reference { target }, _) => target.name().to_string(),
        (_, Some(title)) => title.clone(),
        _ => schema.type_name(),
    }
}

/// Empty value shaped like `schema`
fn placeholder(schema: &Schema) -> Value {
    match &schema.kind {
        SchemaKind::Object(_) => Value::Object(Map::new()),
        SchemaKind::Composite(composite) if composite.kind == CompositionKind::AllOf => {
            Value::Object(Map::new())
        }
        SchemaKind::Array { .. } => Value::Array(Vec::new()),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{Reference, ResolvedDocument};
    use crate::schema::SchemaNormalizer;
    use crate::synthesis::Provenance;
    use serde_json::json;

    fn normalize(node: Value) -> Schema {
        SchemaNormalizer::new().normalize(&node, "#").unwrap()
    }

    fn catalog_for(root: Value, names: &[&str]) -> SchemaCatalog {
        let mut document = ResolvedDocument::from_value(root);
        let roots: Vec<Schema> = names
            .iter()
            .map(|name| Schema::reference(Reference::component("schemas", name)))
            .collect();
        SchemaCatalog::build(&mut document, &roots).unwrap()
    }

    #[test]
    fn test_explicit_example_wins() {
        let catalog = SchemaCatalog::new();
        let schema = normalize(json!({
            "type": "object",
            "properties": {"y": {"type": "string"}},
            "example": {"x": 1}
        }));

        let example = ExampleSynthesizer::new(&catalog).synthesize(&schema);
        assert_eq!(example.value, json!({"x": 1}));
        assert_eq!(example.provenance, Provenance::Explicit);
    }

    #[test]
    fn test_required_names_without_properties_are_ignored() {
        let catalog = SchemaCatalog::new();
        let schema = normalize(json!({
            "type": "object",
            "required": ["ghost"],
            "properties": {"id": {"type": "integer"}}
        }));

        let example = ExampleSynthesizer::new(&catalog).synthesize(&schema);
        assert_eq!(example.value, json!({"id": 0}));
        assert!(example.warnings.is_empty());
    }

    #[test]
    fn test_object_keeps_declared_order() {
        let catalog = SchemaCatalog::new();
        let schema = normalize(json!({
            "type": "object",
            "required": ["email"],
            "properties": {
                "id": {"type": "string", "format": "uuid"},
                "email": {"type": "string", "format": "email"},
                "createdAt": {"type": "string", "format": "date-time"}
            }
        }));

        let example = ExampleSynthesizer::new(&catalog).synthesize(&schema);
        let keys: Vec<_> = example.value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["id", "email", "createdAt"]);
        assert_eq!(example.provenance, Provenance::Synthesized);
    }

    #[test]
    fn test_all_of_merges_objects() {
        let catalog = catalog_for(
            json!({"components": {"schemas": {
                "Base": {"type": "object", "properties": {"id": {"type": "integer"}}}
            }}}),
            &["Base"],
        );
        let schema = normalize(json!({
            "allOf": [
                {"$ref": "#/components/schemas/Base"},
                {"type": "object", "properties": {"name": {"type": "string"}}}
            ]
        }));

        let example = ExampleSynthesizer::new(&catalog).synthesize(&schema);
        assert_eq!(example.value, json!({"id": 0, "name": "string"}));
        assert!(example.warnings.is_empty());
    }

    #[test]
    fn test_all_of_with_scalars_takes_first() {
        let catalog = SchemaCatalog::new();
        let schema = normalize(json!({"allOf": [{"type": "integer"}, {"type": "object"}]}));
        let example = ExampleSynthesizer::new(&catalog).synthesize(&schema);
        assert_eq!(example.value, json!(0));
    }

    #[test]
    fn test_one_of_takes_first_and_lists_alternatives() {
        let catalog = catalog_for(
            json!({"components": {"schemas": {
                "Cat": {"type": "object", "properties": {"meow": {"type": "boolean"}}},
                "Dog": {"type": "object", "properties": {"bark": {"type": "boolean"}}},
                "Fish": {"type": "object"}
            }}}),
            &["Cat", "Dog", "Fish"],
        );
        let schema = normalize(json!({"oneOf": [
            {"$ref": "#/components/schemas/Cat"},
            {"$ref": "#/components/schemas/Dog"},
            {"$ref": "#/components/schemas/Fish"}
        ]}));

        let example = ExampleSynthesizer::new(&catalog).synthesize(&schema);
        assert_eq!(example.value, json!({"meow": true}));
        assert_eq!(example.alt_types, ["Dog", "Fish"]);
        assert!(matches!(
            example.warnings.as_slice(),
            [SynthesisWarning::UnsupportedComposition { composition: CompositionKind::OneOf, .. }]
        ));
    }

    #[test]
    fn test_self_reference_stops_at_depth_bound() {
        let catalog = catalog_for(
            json!({"components": {"schemas": {
                "Node": {"type": "object", "properties": {
                    "value": {"type": "integer"},
                    "children": {"type": "array", "items": {"$ref": "#/components/schemas/Node"}}
                }}
            }}}),
            &["Node"],
        );
        let root = Schema::reference(Reference::component("schemas", "Node"));
        let synthesizer =
            ExampleSynthesizer::with_config(&catalog, SynthesisConfig { max_depth: 2 });

        let example = synthesizer.synthesize(&root);
        assert_eq!(
            example.value,
            json!({"value": 0, "children": [{"value": 0, "children": [{}]}]})
        );
        assert!(matches!(
            example.warnings.as_slice(),
            [SynthesisWarning::DepthLimitReached { depth: 2, .. }]
        ));
    }

    #[test]
    fn test_additional_properties_example() {
        let catalog = SchemaCatalog::new();
        let schema = normalize(json!({"type": "object", "additionalProperties": {"type": "integer"}}));
        let example = ExampleSynthesizer::new(&catalog).synthesize(&schema);
        assert_eq!(example.value, json!({"additionalProp1": 0}));
    }

    #[test]
    fn test_array_without_items() {
        let catalog = SchemaCatalog::new();
        let example = ExampleSynthesizer::new(&catalog).synthesize(&normalize(json!({"type": "array"})));
        assert_eq!(example.value, json!([null]));
    }

    #[test]
    fn test_nested_explicit_example_keeps_outer_synthesized() {
        let catalog = SchemaCatalog::new();
        let schema = normalize(json!({
            "type": "object",
            "properties": {"status": {"type": "string", "example": "active"}}
        }));
        let example = ExampleSynthesizer::new(&catalog).synthesize(&schema);
        assert_eq!(example.value, json!({"status": "active"}));
        assert_eq!(example.provenance, Provenance::Synthesized);
    }
}
