//! Folding of equivalent content types

use serde_json::{Map, Value};

/// A content declaration after folding its equivalent alternates
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifiedContent {
    pub content_type: String,
    pub declaration: Value,
    /// Folded content types, sorted
    pub alt_types: Vec<String>,
}

/// Main content types and the predicate recognizing their alternates
const FOLDABLE: [(&str, fn(&str) -> bool); 2] = [
    ("application/json", is_json_like),
    ("application/xml", is_xml_like),
];

fn is_json_like(content_type: &str) -> bool {
    content_type.contains("json") || content_type == "text/plain"
}

fn is_xml_like(content_type: &str) -> bool {
    content_type.contains("xml")
}

/// Fold content types declaring exactly the same thing as `application/json`
/// (or `application/xml`) into that entry, keeping source order otherwise.
pub fn simplify_content(content: &Map<String, Value>) -> Vec<SimplifiedContent> {
    let mut folded: Vec<(&str, Vec<String>)> = Vec::new();

    for (main, is_alternate) in FOLDABLE {
        let Some(declaration) = content.get(main) else {
            continue;
        };

        let mut alternates: Vec<String> = content
            .iter()
            .filter(|(other, other_declaration)| {
                other.as_str() != main
                    && is_alternate(other.as_str())
                    && *other_declaration == declaration
            })
            .map(|(other, _)| other.clone())
            .collect();
        alternates.sort();
        folded.push((main, alternates));
    }

    let removed = |content_type: &str| {
        folded
            .iter()
            .any(|(_, alternates)| alternates.iter().any(|alt| alt == content_type))
    };

    content
        .iter()
        .filter(|(content_type, _)| !removed(content_type.as_str()))
        .map(|(content_type, declaration)| SimplifiedContent {
            content_type: content_type.clone(),
            declaration: declaration.clone(),
            alt_types: folded
                .iter()
                .find(|(main, _)| *main == content_type.as_str())
                .map(|(_, alternates)| alternates.clone())
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn simplify(content: Value) -> Vec<(String, Vec<String>)> {
        let Value::Object(map) = content else {
            panic!("content must be a mapping");
        };
        simplify_content(&map)
            .into_iter()
            .map(|entry| (entry.content_type, entry.alt_types))
            .collect()
    }

    #[test]
    fn test_json_alternates_fold() {
        let release = json!({"schema": {"$ref": "#/components/schemas/Release"}});
        let result = simplify(json!({
            "text/plain": release,
            "application/json": release,
            "text/json": release
        }));

        assert_eq!(
            result,
            [(
                "application/json".to_string(),
                vec!["text/json".to_string(), "text/plain".to_string()]
            )]
        );
    }

    #[test]
    fn test_xml_alternates_fold() {
        let release = json!({"schema": {"$ref": "#/components/schemas/Release"}});
        let result = simplify(json!({
            "text/xml": release,
            "application/xml": release,
            "xml": release
        }));

        assert_eq!(
            result,
            [(
                "application/xml".to_string(),
                vec!["text/xml".to_string(), "xml".to_string()]
            )]
        );
    }

    #[test]
    fn test_different_declarations_stay() {
        let result = simplify(json!({
            "application/json": {"schema": {"$ref": "#/components/schemas/A"}},
            "text/json": {"schema": {"$ref": "#/components/schemas/B"}},
            "image/png": {"schema": {"type": "string", "format": "binary"}}
        }));

        let types: Vec<_> = result.iter().map(|(content_type, _)| content_type.as_str()).collect();
        assert_eq!(types, ["application/json", "text/json", "image/png"]);
        assert!(result.iter().all(|(_, alternates)| alternates.is_empty()));
    }

    #[test]
    fn test_without_main_type_nothing_folds() {
        let same = json!({"schema": {"type": "string"}});
        let result = simplify(json!({"text/plain": same, "text/json": same}));
        assert_eq!(result.len(), 2);
    }
}
