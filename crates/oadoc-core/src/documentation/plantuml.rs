//! PlantUML class diagrams

use crate::document::{ApiDocument, MediaContent};
use crate::schema::{Schema, SchemaKind};
use indexmap::IndexSet;
use std::fmt::Write;

/// One class per component schema, with links between schemas that refer to each other
pub fn schemas_diagram(api: &ApiDocument) -> String {
    let mut out = String::from("@startuml Schemas\n\n");
    write_schema_classes(&mut out, api);

    let bindings: IndexSet<(String, String)> = api.schema_bindings().into_iter().collect();
    for (from, to) in &bindings {
        let _ = writeln!(out, "{} --> {}", class_name(from), class_name(to));
    }
    if !bindings.is_empty() {
        out.push('\n');
    }

    out.push_str("@enduml\n");
    out
}

/// One class per operation, linked to the schemas of its bodies
pub fn api_diagram(api: &ApiDocument) -> String {
    let mut out = String::from("@startuml API\n\n");
    let mut links = Vec::new();

    for (index, operation) in api.operations().enumerate() {
        let alias = format!("op_{}", index + 1);
        let _ = writeln!(
            out,
            "class \"{} {}\" as {alias} <<operation>> {{",
            operation.method, operation.path
        );
        if let Some(id) = &operation.operation_id {
            let _ = writeln!(out, "    {id}");
        }
        for parameter in &operation.parameters {
            let _ = writeln!(
                out,
                "    {} ({}): {}",
                parameter.name,
                parameter.location,
                parameter.schema.type_name()
            );
        }
        out.push_str("}\n\n");

        let mut targets = IndexSet::new();
        if let Some(body) = &operation.request_body {
            collect_targets(&body.content, "request", &mut targets);
        }
        for response in &operation.responses {
            collect_targets(&response.content, &response.status, &mut targets);
        }
        links.extend(targets.into_iter().map(|(target, label)| (alias.clone(), target, label)));
    }

    write_schema_classes(&mut out, api);

    for (alias, target, label) in &links {
        let _ = writeln!(out, "{alias} --> {} : {label}", class_name(target));
    }
    if !links.is_empty() {
        out.push('\n');
    }

    out.push_str("@enduml\n");
    out
}

fn write_schema_classes(out: &mut String, api: &ApiDocument) {
    for (name, schema) in api.sorted_schemas() {
        let _ = writeln!(out, "class {} {{", class_name(name));
        match &schema.kind {
            SchemaKind::Object(object) => {
                for (property, value) in &object.properties {
                    let _ = writeln!(out, "    {property}: {}", value.type_name());
                }
            }
            _ => {
                let _ = writeln!(out, "    {}", schema.type_name());
            }
        }
        out.push_str("}\n\n");
    }
}

fn collect_targets(content: &[MediaContent], label: &str, targets: &mut IndexSet<(String, String)>) {
    for schema in content.iter().filter_map(|media| media.schema.as_ref()) {
        referenced_names(schema, &mut |name| {
            targets.insert((name, label.to_string()));
        });
    }
}

fn referenced_names(schema: &Schema, visit: &mut impl FnMut(String)) {
    schema.for_each_reference(&mut |reference| visit(reference.name().to_string()));
}

/// Class names may not contain characters PlantUML treats as syntax
fn class_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentBuilder;
    use crate::resolver::ResolvedDocument;
    use serde_json::json;

    fn pets_document() -> ApiDocument {
        let mut document = ResolvedDocument::from_value(json!({
            "openapi": "3.0.0",
            "paths": {"/pets": {"get": {
                "operationId": "listPets",
                "responses": {"200": {"description": "ok", "content": {"application/json": {
                    "schema": {"$ref": "#/components/schemas/Pets"}
                }}}}
            }}},
            "components": {"schemas": {
                "Pet": {"type": "object", "properties": {
                    "id": {"type": "integer", "format": "int64"},
                    "owner": {"$ref": "#/components/schemas/Owner"}
                }},
                "Owner": {"type": "object", "properties": {"name": {"type": "string"}}},
                "Pets": {"type": "array", "items": {"$ref": "#/components/schemas/Pet"}}
            }}
        }));
        DocumentBuilder::new().build(&mut document).unwrap()
    }

    #[test]
    fn test_schemas_diagram() {
        let diagram = schemas_diagram(&pets_document());

        assert!(diagram.starts_with("@startuml Schemas\n"));
        assert!(diagram.contains("class Pet {\n    id: integer(int64)\n    owner: Owner\n}"));
        assert!(diagram.contains("class Pets {\n    Array<Pet>\n}"));
        assert!(diagram.contains("Pet --> Owner\n"));
        assert!(diagram.contains("Pets --> Pet\n"));
        assert!(diagram.ends_with("@enduml\n"));
    }

    #[test]
    fn test_api_diagram() {
        let diagram = api_diagram(&pets_document());

        assert!(diagram.contains("class \"GET /pets\" as op_1 <<operation>> {\n    listPets\n}"));
        assert!(diagram.contains("op_1 --> Pets : 200"));
        assert!(diagram.contains("class Owner {"));
    }

    #[test]
    fn test_class_name() {
        assert_eq!(class_name("Api.V1-User"), "Api_V1_User");
    }
}
