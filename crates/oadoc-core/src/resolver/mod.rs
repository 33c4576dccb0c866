//! Reference resolution
//!
//! This module handles:
//! - Internal (`#/components/...`) and external (`other.yaml#/Pet`) `$ref` resolution
//! - Circular reference detection through an explicit resolution stack
//! - Memoization of resolved subtrees for the duration of one pass
//! - Bundling external fragments into the working tree
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

pub mod bundle;
pub mod context;
pub mod reference;

pub use context::{Frame, ResolutionStack};
pub use reference::{JsonPointer, Reference};

use crate::error::{Error, Result};
use crate::loader::{
    CacheStats, DocumentCache, DocumentLoader, DocumentParser, LoadOptions, Location, SourceLoader,
};
use indexmap::IndexSet;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// A root document together with everything resolved from it during one pass
pub struct ResolvedDocument {
    /// The root exactly as loaded; never mutated
    source: Value,
    /// The working tree, equal to `source` until bundled
    tree: Value,
    location: Location,
    documents: DocumentCache,
    memo: HashMap<(Location, JsonPointer), Value>,
    /// Bundled external fragments, independent of where they are included
    fragments: HashMap<(Location, JsonPointer), Value>,
    memo_hits: usize,
    loader: Box<dyn DocumentLoader>,
    stack: ResolutionStack,
}

impl ResolvedDocument {
    /// Wrap an already parsed root with an explicit loader for external references
    pub fn new(root: Value, location: Location, loader: Box<dyn DocumentLoader>) -> Self {
        Self {
            tree: root.clone(),
            source: root,
            location,
            documents: DocumentCache::new(),
            memo: HashMap::new(),
            fragments: HashMap::new(),
            memo_hits: 0,
            loader,
            stack: ResolutionStack::default(),
        }
    }

    /// Wrap an in-memory root; relative external references resolve against the working directory
    pub fn from_value(root: Value) -> Self {
        Self::new(root, Location::Inline, Box::new(SourceLoader::new()))
    }

    /// Load the root from a file path or URL
    pub fn open(locator: &str, options: &LoadOptions) -> Result<Self> {
        let location = Location::parse(locator)?;
        let loader = SourceLoader::with_options(options.clone());
        let root = loader.load(&location)?;

        debug!(location = %location, "Root document loaded");
        Ok(Self::new(root, location, Box::new(loader)))
    }

    /// The working tree
    pub fn root(&self) -> &Value {
        &self.tree
    }

    /// The root as originally loaded, for diagnostics
    pub fn source(&self) -> &Value {
        &self.source
    }

    /// Location of the root document
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Resolve `reference` relative to the document at `base`.
    ///
    /// Targets that are themselves `$ref` nodes are followed until a concrete
    /// node is reached. Results are memoized by `(location, pointer)`.
    pub fn resolve(&mut self, reference: &Reference, base: &Location) -> Result<Value> {
        let location = match reference.source() {
            Some(source) => base.join(source)?,
            None => base.clone(),
        };

        let key = (location, reference.pointer().clone());
        if let Some(value) = self.memo.get(&key) {
            self.memo_hits += 1;
            trace!(reference = %reference, "Resolution cache hit");
            return Ok(value.clone());
        }

        let (location, pointer) = key;
        self.stack.push(Frame::new(location.clone(), pointer.clone()))?;
        let result = self.follow(&location, &pointer, reference);
        self.stack.pop();

        let value = result?;
        self.memo.insert((location, pointer), value.clone());
        Ok(value)
    }

    /// Resolve a `$ref` string against the root document
    pub fn resolve_str(&mut self, raw: &str) -> Result<Value> {
        let reference = Reference::parse(raw)?;
        let base = self.location.clone();
        self.resolve(&reference, &base)
    }

    /// Resolve `node` if it is a `$ref` node, otherwise return a copy
    pub fn resolve_node(&mut self, node: &Value) -> Result<Value> {
        match node.get("$ref").and_then(Value::as_str) {
            Some(raw) => self.resolve_str(raw),
            None => Ok(node.clone()),
        }
    }

    /// Resolve every `$ref` in the working tree once, failing on the first dangling one
    pub fn verify_references(&mut self) -> Result<usize> {
        let mut references = IndexSet::new();
        collect_references(&self.tree, &mut references);

        for raw in &references {
            self.resolve_str(raw)?;
        }

        debug!(count = references.len(), "All references verified");
        Ok(references.len())
    }

    /// Resolution statistics for this pass
    pub fn stats(&self) -> ResolutionStats {
        ResolutionStats {
            resolved: self.memo.len() + self.fragments.len(),
            memo_hits: self.memo_hits,
            documents: self.documents.stats(),
        }
    }

    fn follow(&mut self, location: &Location, pointer: &JsonPointer, reference: &Reference) -> Result<Value> {
        let target = self.target(location, pointer, reference)?;

        match target.get("$ref").and_then(Value::as_str) {
            Some(next) => {
                let next = Reference::parse(next)?;
                self.resolve(&next, location)
            }
            None => Ok(target),
        }
    }

    /// Copy of the node addressed by `pointer` inside the document at `location`
    pub(crate) fn target(
        &mut self,
        location: &Location,
        pointer: &JsonPointer,
        reference: &Reference,
    ) -> Result<Value> {
        let document = self.document(location)?;

        pointer
            .resolve(document)
            .cloned()
            .map_err(|segment| Error::ReferenceNotFound {
                reference: reference.to_string(),
                segment,
                location: location.to_string(),
            })
    }

    fn document(&mut self, location: &Location) -> Result<&Value> {
        if *location == self.location {
            return Ok(&self.tree);
        }

        Ok(self.documents.get_or_load(location, self.loader.as_ref())?)
    }
}

impl FromStr for ResolvedDocument {
    type Err = Error;

    /// Parse an inline JSON or YAML root
    fn from_str(content: &str) -> Result<Self> {
        let (root, _) = DocumentParser::new().parse_with_fallback(content, "<inline>")?;
        Ok(Self::from_value(root))
    }
}

impl fmt::Debug for ResolvedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedDocument")
            .field("location", &self.location)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

/// Statistics of one resolution pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionStats {
    /// Distinct `(location, pointer)` pairs resolved
    pub resolved: usize,
    /// Resolutions served from the memo
    pub memo_hits: usize,
    pub documents: CacheStats,
}

fn collect_references(node: &Value, out: &mut IndexSet<String>) {
    match node {
        Value::Object(map) => {
            if let Some(raw) = map.get("$ref").and_then(Value::as_str) {
                out.insert(raw.to_string());
            }
            for value in map.values() {
                collect_references(value, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_references(item, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn petstore() -> ResolvedDocument {
        ResolvedDocument::from_value(json!({
            "openapi": "3.0.0",
            "components": {
                "schemas": {
                    "Pet": {"type": "object", "properties": {"id": {"type": "integer"}}},
                    "PetAlias": {"$ref": "#/components/schemas/Pet"},
                    "Pets": {"type": "array", "items": {"$ref": "#/components/schemas/Pet"}}
                }
            }
        }))
    }

    #[test]
    fn test_resolve_internal() {
        let mut document = petstore();
        let pet = document.resolve_str("#/components/schemas/Pet").unwrap();
        assert_eq!(pet["type"], "object");
    }

    #[test]
    fn test_resolve_follows_alias_chain() {
        let mut document = petstore();
        let pet = document.resolve_str("#/components/schemas/PetAlias").unwrap();
        assert_eq!(pet["properties"]["id"]["type"], "integer");
    }

    #[test]
    fn test_resolve_is_memoized() {
        let mut document = petstore();
        let first = document.resolve_str("#/components/schemas/Pets").unwrap();
        let second = document.resolve_str("#/components/schemas/Pets").unwrap();

        assert_eq!(first, second);
        assert_eq!(document.stats().memo_hits, 1);
        assert_eq!(document.stats().resolved, 1);
    }

    #[test]
    fn test_missing_segment() {
        let mut document = petstore();
        let error = document
            .resolve_str("#/components/schemas/DoesNotExist")
            .unwrap_err();

        match error {
            Error::ReferenceNotFound { reference, segment, .. } => {
                assert_eq!(segment, "DoesNotExist");
                assert_eq!(reference, "#/components/schemas/DoesNotExist");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_alias_cycle_is_detected() {
        let mut document = ResolvedDocument::from_value(json!({
            "components": {"schemas": {
                "A": {"$ref": "#/components/schemas/B"},
                "B": {"$ref": "#/components/schemas/A"}
            }}
        }));

        let error = document.resolve_str("#/components/schemas/A").unwrap_err();
        assert!(matches!(error, Error::CircularReference { .. }));
        assert!(error.to_string().contains("#/components/schemas/B"));
    }

    #[test]
    fn test_root_is_not_mutated() {
        let mut document = petstore();
        let before = document.source().clone();
        document.resolve_str("#/components/schemas/PetAlias").unwrap();
        assert_eq!(document.source(), &before);
        assert_eq!(document.root(), &before);
    }

    #[test]
    fn test_verify_references() {
        let mut document = petstore();
        assert_eq!(document.verify_references().unwrap(), 1);

        let mut broken = ResolvedDocument::from_value(json!({
            "paths": {"/a": {"get": {"responses": {"200": {"$ref": "#/components/responses/Nope"}}}}}
        }));
        assert!(matches!(
            broken.verify_references(),
            Err(Error::ReferenceNotFound { .. })
        ));
    }

    #[test]
    fn test_from_str_yaml() {
        let document: ResolvedDocument = "openapi: 3.1.0\ninfo:\n  title: T\n".parse().unwrap();
        assert_eq!(document.root()["info"]["title"], "T");
        assert_eq!(document.location(), &Location::Inline);
    }
}
