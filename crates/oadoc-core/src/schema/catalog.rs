//! Normalized targets of every reachable schema reference
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::resolver::{Reference, ResolvedDocument};
use crate::schema::model::{AdditionalProperties, Schema, SchemaKind};
use crate::schema::normalizer::SchemaNormalizer;
use indexmap::IndexMap;
use std::collections::VecDeque;
use tracing::debug;

/// Reference targets of one pass, each normalized exactly once
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    schemas: IndexMap<String, Schema>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve and normalize every reference reachable from `roots`, breadth first.
    ///
    /// Targets stay behind `Reference` nodes in the model, so schemas that
    /// refer to each other through properties terminate here.
    pub fn build<'a, I>(document: &mut ResolvedDocument, roots: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Schema>,
    {
        let normalizer = SchemaNormalizer::new();
        let mut catalog = Self::new();
        let mut pending = VecDeque::new();

        for root in roots {
            root.for_each_reference(&mut |reference| pending.push_back(reference.clone()));
        }

        while let Some(reference) = pending.pop_front() {
            if catalog.schemas.contains_key(reference.as_str()) {
                continue;
            }

            let schema = normalizer.normalize_reference(document, &reference)?;
            schema.for_each_reference(&mut |next| {
                if !catalog.schemas.contains_key(next.as_str()) {
                    pending.push_back(next.clone());
                }
            });
            catalog.schemas.insert(reference.as_str().to_string(), schema);
        }

        debug!(schemas = catalog.len(), "Schema catalog built");
        Ok(catalog)
    }

    /// Register a schema under a reference
    pub fn insert(&mut self, reference: &Reference, schema: Schema) {
        self.schemas.insert(reference.as_str().to_string(), schema);
    }

    pub fn get(&self, reference: &Reference) -> Option<&Schema> {
        self.schemas.get(reference.as_str())
    }

    /// Follow references until a non-reference schema
    pub fn resolve<'a>(&'a self, mut schema: &'a Schema) -> &'a Schema {
        // bounded by the catalog size, which rules out alias loops
        for _ in 0..=self.schemas.len() {
            match schema.as_reference().and_then(|target| self.get(target)) {
                Some(target) => schema = target,
                None => break,
            }
        }
        schema
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.schemas.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    /// Copy of `schema` with references inlined. A reference already being
    /// expanded on the current path stays a `Reference`.
    pub fn expand(&self, schema: &Schema) -> Schema {
        let mut active = Vec::new();
        self.expand_inner(schema, &mut active)
    }

    fn expand_inner(&self, schema: &Schema, active: &mut Vec<String>) -> Schema {
        let mut expanded = schema.clone();

        expanded.kind = match &schema.kind {
            SchemaKind::Reference { target } => {
                if active.iter().any(|name| name == target.as_str()) {
                    return expanded;
                }
                let Some(resolved) = self.get(target) else {
                    return expanded;
                };

                active.push(target.as_str().to_string());
                let inlined = self.expand_inner(resolved, active);
                active.pop();
                return inlined;
            }
            SchemaKind::Array { items } => SchemaKind::Array {
                items: Box::new(self.expand_inner(items, active)),
            },
            SchemaKind::Object(object) => {
                let mut object = object.clone();
                for property in object.properties.values_mut() {
                    *property = self.expand_inner(property, active);
                }
                if let AdditionalProperties::Schema(values) = &object.additional_properties {
                    object.additional_properties =
                        AdditionalProperties::Schema(Box::new(self.expand_inner(values, active)));
                }
                SchemaKind::Object(object)
            }
            SchemaKind::Composite(composite) => {
                let mut composite = composite.clone();
                composite.members = composite
                    .members
                    .iter()
                    .map(|member| self.expand_inner(member, active))
                    .collect();
                SchemaKind::Composite(composite)
            }
            SchemaKind::Primitive(_) | SchemaKind::Any => return expanded,
        };

        expanded
    }
}
