//! Inlining of external `$ref` targets into the working tree
//!
//! External fragments are included where they are referenced. Internal
//! references found inside an included fragment keep their `#/...` form and
//! are interpreted against the root document, so split files can refer to the
//! root's components.
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::loader::Location;
use crate::resolver::context::Frame;
use crate::resolver::reference::Reference;
use crate::resolver::ResolvedDocument;
use serde_json::{Map, Value};
use tracing::{debug, instrument, trace};

impl ResolvedDocument {
    /// Replace every external reference in the working tree by its content.
    ///
    /// The original root stays available through [`ResolvedDocument::source`].
    #[instrument(skip(self), fields(location = %self.location()))]
    pub fn bundle(&mut self) -> Result<()> {
        let source = self.source().clone();
        let base = self.location().clone();

        let bundled = self.bundle_node(&source, &base)?;
        self.replace_tree(bundled);

        let stats = self.stats();
        debug!(
            documents = stats.documents.total_entries,
            loads = stats.documents.loads,
            "Document bundled"
        );
        Ok(())
    }

    fn bundle_node(&mut self, node: &Value, base: &Location) -> Result<Value> {
        match node {
            Value::Object(map) => {
                if let Some(raw) = map.get("$ref").and_then(Value::as_str) {
                    let reference = Reference::parse(raw)?;
                    if let Some(source) = reference.source() {
                        let location = base.join(source)?;
                        return self.include(&reference, location);
                    }
                }

                let mut bundled = Map::with_capacity(map.len());
                for (key, value) in map {
                    bundled.insert(key.clone(), self.bundle_node(value, base)?);
                }
                Ok(Value::Object(bundled))
            }
            Value::Array(items) => items
                .iter()
                .map(|item| self.bundle_node(item, base))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            other => Ok(other.clone()),
        }
    }

    fn include(&mut self, reference: &Reference, location: Location) -> Result<Value> {
        let key = (location, reference.pointer().clone());
        if let Some(fragment) = self.fragments.get(&key) {
            self.memo_hits += 1;
            trace!(reference = %reference, "Bundled fragment reused");
            return Ok(fragment.clone());
        }

        let (location, pointer) = key;
        self.stack.push(Frame::new(location.clone(), pointer.clone()))?;

        let result = self
            .target(&location, &pointer, reference)
            .and_then(|fragment| self.bundle_node(&fragment, &location));

        self.stack.pop();

        let fragment = result?;
        self.fragments.insert((location, pointer), fragment.clone());
        Ok(fragment)
    }

    fn replace_tree(&mut self, tree: Value) {
        let root = self.location.clone();
        self.memo.retain(|(location, _), _| *location != root);
        self.tree = tree;
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::loader::{LoadOptions, LoaderError};
    use crate::resolver::ResolvedDocument;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_bundle_inlines_external_files() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("openapi.yaml"),
            r#"
openapi: 3.0.0
info:
  title: Split
  version: "1"
paths: {}
components:
  schemas:
    User:
      $ref: "./schemas/user.yaml"
    Role:
      $ref: "./schemas/common.yaml#/Role"
    Team:
      $ref: "./schemas/common.yaml#/Team"
"#,
        )
        .unwrap();
        std::fs::create_dir(dir.path().join("schemas")).unwrap();
        std::fs::write(
            dir.path().join("schemas/user.yaml"),
            "type: object\nproperties:\n  role:\n    $ref: '#/components/schemas/Role'\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("schemas/common.yaml"),
            "Role:\n  type: string\n  enum: [admin, member]\nTeam:\n  type: object\n",
        )
        .unwrap();

        let path = dir.path().join("openapi.yaml");
        let mut document =
            ResolvedDocument::open(path.to_str().unwrap(), &LoadOptions::default()).unwrap();
        document.bundle().unwrap();

        let schemas = &document.root()["components"]["schemas"];
        assert_eq!(schemas["User"]["type"], "object");
        assert_eq!(
            schemas["User"]["properties"]["role"],
            json!({"$ref": "#/components/schemas/Role"})
        );
        assert_eq!(schemas["Role"]["enum"], json!(["admin", "member"]));

        // common.yaml is parsed once for both references
        let stats = document.stats().documents;
        assert_eq!(stats.loads, 2);
        assert_eq!(stats.hits, 1);

        // internal references inside included fragments resolve against the root
        let role = document.resolve_str("#/components/schemas/Role").unwrap();
        assert_eq!(role["type"], "string");

        // the source stays untouched
        assert_eq!(
            document.source()["components"]["schemas"]["User"],
            json!({"$ref": "./schemas/user.yaml"})
        );
    }

    #[test]
    fn test_shared_fragment_is_bundled_once() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("openapi.yaml"),
            r#"
openapi: 3.0.0
paths: {}
components:
  schemas:
    Admin:
      $ref: "./common.yaml#/Role"
    Member:
      $ref: "./common.yaml#/Role"
    Guest:
      $ref: "./common.yaml#/Role"
"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("common.yaml"),
            "Role:\n  type: object\n  properties:\n    scope:\n      $ref: ./scope.yaml\nScope: {}\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("scope.yaml"), "type: string\n").unwrap();

        let path = dir.path().join("openapi.yaml");
        let mut document =
            ResolvedDocument::open(path.to_str().unwrap(), &LoadOptions::default()).unwrap();
        document.bundle().unwrap();

        let schemas = &document.root()["components"]["schemas"];
        for name in ["Admin", "Member", "Guest"] {
            assert_eq!(schemas[name]["properties"]["scope"], json!({"type": "string"}));
        }

        let stats = document.stats();
        assert_eq!(stats.memo_hits, 2);
        assert_eq!(stats.resolved, 2);
        assert_eq!(stats.documents.loads, 2);
        assert_eq!(stats.documents.hits, 0);
    }

    #[test]
    fn test_bundle_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.json");
        std::fs::write(
            &path,
            r#"{"openapi": "3.0.0", "components": {"schemas": {"$ref": "./not-existing.yml"}}}"#,
        )
        .unwrap();

        let mut document =
            ResolvedDocument::open(path.to_str().unwrap(), &LoadOptions::default()).unwrap();
        let error = document.bundle().unwrap_err();
        assert!(matches!(error, Error::Load(LoaderError::IoError { .. })));
    }

    #[test]
    fn test_bundle_detects_file_cycles() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.yaml"), "next:\n  $ref: ./b.yaml\n").unwrap();
        std::fs::write(dir.path().join("b.yaml"), "next:\n  $ref: ./a.yaml\n").unwrap();
        std::fs::write(
            dir.path().join("root.yaml"),
            "openapi: 3.0.0\nx-chain:\n  $ref: ./a.yaml\n",
        )
        .unwrap();

        let path = dir.path().join("root.yaml");
        let mut document =
            ResolvedDocument::open(path.to_str().unwrap(), &LoadOptions::default()).unwrap();
        let error = document.bundle().unwrap_err();
        assert!(matches!(error, Error::CircularReference { .. }));
    }

    #[test]
    fn test_bundle_without_external_references_is_identity() {
        let root = json!({
            "openapi": "3.0.0",
            "components": {"schemas": {"A": {"$ref": "#/components/schemas/B"}, "B": {"type": "string"}}}
        });
        let mut document = ResolvedDocument::from_value(root.clone());
        document.bundle().unwrap();
        assert_eq!(document.root(), &root);
    }
}
