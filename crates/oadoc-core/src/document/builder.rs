//! Construction of [`ApiDocument`] from a resolved source tree
//!
//! Handles both OpenAPI 3.x and Swagger 2 layouts. Schemas are normalized in
//! place and kept behind references; the [`SchemaCatalog`] built at the end
//! holds every reachable target, and examples missing from the source are
//! synthesized against it.
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

use crate::document::content::simplify_content;
use crate::document::security::{security_parameter, SecurityScheme};
use crate::document::{
    ApiDocument, Contact, ContentExample, ExternalDocs, Info, License, MediaContent, Method,
    Operation, Parameter, ParameterLocation, PathItem, RequestBody, Response, ResponseHeader,
    Server, SpecVersion, Tag,
};
use crate::error::{Error, Result};
use crate::resolver::reference::escape_segment;
use crate::resolver::{JsonPointer, Reference, ResolvedDocument};
use crate::schema::{Schema, SchemaCatalog, SchemaNormalizer};
use crate::synthesis::{Example, ExampleSynthesizer, SynthesisConfig};
use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use tracing::{debug, instrument, warn};

/// Keys of a Swagger 2 parameter that are not schema keywords
const PARAMETER_KEYS: &[&str] = &["name", "in", "required", "allowEmptyValue", "collectionFormat"];

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART: &str = "multipart/form-data";

/// Builds the document model
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    normalizer: SchemaNormalizer,
    synthesis: SynthesisConfig,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` when synthesizing missing examples
    pub fn with_synthesis(synthesis: SynthesisConfig) -> Self {
        Self {
            normalizer: SchemaNormalizer::new(),
            synthesis,
        }
    }

    /// Build the model, discarding the schema catalog
    pub fn build(&self, document: &mut ResolvedDocument) -> Result<ApiDocument> {
        self.build_with_catalog(document).map(|(api, _)| api)
    }

    /// Build the model together with the catalog of every reachable schema
    #[instrument(skip_all, fields(location = %document.location()))]
    pub fn build_with_catalog(&self, document: &mut ResolvedDocument) -> Result<(ApiDocument, SchemaCatalog)> {
        let root = document.root().clone();
        let version = SpecVersion::detect(&root);
        debug!(%version, "Building document model");

        let security_schemes = self.security_schemes(document, &root, version)?;
        let schemas = self.component_schemas(&root, version)?;

        let mut api = ApiDocument {
            version,
            info: read_info(&root),
            servers: read_servers(&root, version),
            tags: read_tags(&root),
            external_docs: root.get("externalDocs").and_then(read_external_docs),
            groups: IndexMap::new(),
            schemas,
            security_schemes,
        };

        if let Some(paths) = root.get("paths").and_then(Value::as_object) {
            for (path, node) in paths {
                let context = OperationContext {
                    root: &root,
                    version,
                    security_schemes: &api.security_schemes,
                };
                let item = self.path_item(document, &context, path, node)?;
                let tag = common_tag(&item.operations).unwrap_or_default();
                api.groups.entry(tag).or_default().push(item);
            }
        }

        let catalog = self.catalog(document, &api, version)?;
        self.synthesize_examples(&mut api, &catalog);

        debug!(
            operations = api.operations().count(),
            schemas = api.schemas.len(),
            catalog = catalog.len(),
            "Document model built"
        );
        Ok((api, catalog))
    }

    fn security_schemes(
        &self,
        document: &mut ResolvedDocument,
        root: &Value,
        version: SpecVersion,
    ) -> Result<IndexMap<String, SecurityScheme>> {
        let section = match version {
            SpecVersion::Swagger2 => root.get("securityDefinitions"),
            _ => root.pointer("/components/securitySchemes"),
        };

        let mut schemes = IndexMap::new();
        for (name, node) in section.and_then(Value::as_object).into_iter().flatten() {
            let node = document.resolve_node(node)?;
            schemes.insert(name.clone(), SecurityScheme::from_value(&node));
        }
        Ok(schemes)
    }

    fn component_schemas(&self, root: &Value, version: SpecVersion) -> Result<IndexMap<String, Schema>> {
        let mut section = Some(root);
        for key in version.schemas_pointer() {
            section = section.and_then(|node| node.get(*key));
        }

        let mut schemas = IndexMap::new();
        for (name, node) in section.and_then(Value::as_object).into_iter().flatten() {
            let reference = component_reference(version, name);
            let schema = self.normalizer.normalize(node, reference.as_str())?;
            schemas.insert(name.clone(), schema);
        }
        Ok(schemas)
    }

    fn path_item(
        &self,
        document: &mut ResolvedDocument,
        context: &OperationContext<'_>,
        path: &str,
        node: &Value,
    ) -> Result<PathItem> {
        let node = document.resolve_node(node)?;
        let pointer = format!("#/paths/{}", escape_segment(path));
        let shared = node.get("parameters").and_then(Value::as_array).cloned().unwrap_or_default();

        let mut operations = Vec::new();
        for method in Method::ALL {
            let Some(operation) = node.get(method.key()).filter(|value| value.is_object()) else {
                continue;
            };
            let pointer = format!("{pointer}/{}", method.key());
            operations.push(self.operation(document, context, path, method, operation, &shared, &pointer)?);
        }

        Ok(PathItem {
            path: path.to_string(),
            summary: text(&node, "summary"),
            description: text(&node, "description"),
            operations,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn operation(
        &self,
        document: &mut ResolvedDocument,
        context: &OperationContext<'_>,
        path: &str,
        method: Method,
        node: &Value,
        shared: &[Value],
        pointer: &str,
    ) -> Result<Operation> {
        let declared = merge_parameters(document, shared, node.get("parameters"))?;

        let mut parameters = Vec::new();
        let mut body = None;
        let mut form = Vec::new();

        for (index, parameter) in declared.iter().enumerate() {
            let parameter_pointer = format!("{pointer}/parameters/{index}");
            match parameter.get("in").and_then(Value::as_str) {
                Some("body") if context.version == SpecVersion::Swagger2 => body = Some((parameter, parameter_pointer)),
                Some("formData") if context.version == SpecVersion::Swagger2 => form.push(parameter),
                _ => parameters.push(self.parameter(parameter, context.version, &parameter_pointer)?),
            }
        }

        parameters.sort_by_key(|parameter| parameter.name.to_lowercase());

        let requirements = node.get("security").or_else(|| context.root.get("security"));
        for requirement in requirements.and_then(Value::as_array).into_iter().flatten() {
            for key in requirement.as_object().into_iter().flat_map(Map::keys) {
                let scheme = match context.security_schemes.get(key) {
                    Some(scheme) => scheme.clone(),
                    None => {
                        warn!(scheme = %key, path, "Security requirement names an undeclared scheme");
                        SecurityScheme::default()
                    }
                };
                parameters.insert(0, security_parameter(key, &scheme));
            }
        }

        let request_body = match context.version {
            SpecVersion::Swagger2 => {
                let consumes = media_types(node, context.root, "consumes");
                match body {
                    Some((body, body_pointer)) => Some(self.body_parameter(body, &consumes, &body_pointer)?),
                    None if !form.is_empty() => Some(self.form_body(&form, &consumes, pointer)?),
                    None => None,
                }
            }
            _ => match node.get("requestBody") {
                Some(request_body) => {
                    let pointer = format!("{pointer}/requestBody");
                    Some(self.request_body(document, request_body, &pointer)?)
                }
                None => None,
            },
        };

        let mut responses = Vec::new();
        for (status, response) in node.get("responses").and_then(Value::as_object).into_iter().flatten() {
            let pointer = format!("{pointer}/responses/{}", escape_segment(status));
            responses.push(self.response(document, context, node, status, response, &pointer)?);
        }

        Ok(Operation {
            method,
            path: path.to_string(),
            operation_id: text(node, "operationId"),
            summary: text(node, "summary"),
            description: text(node, "description"),
            tags: node
                .get("tags")
                .and_then(Value::as_array)
                .map(|tags| tags.iter().filter_map(Value::as_str).map(str::to_string).collect())
                .unwrap_or_default(),
            deprecated: flag(node, "deprecated"),
            parameters,
            request_body,
            responses,
        })
    }

    fn parameter(&self, node: &Value, version: SpecVersion, pointer: &str) -> Result<Parameter> {
        let name = text(node, "name")
            .ok_or_else(|| Error::schema_shape(pointer, "parameter without a name"))?;
        let location = ParameterLocation::from(node.get("in").and_then(Value::as_str).unwrap_or("query"));

        let schema = match version {
            SpecVersion::Swagger2 => self.normalizer.normalize(&parameter_schema_node(node), pointer)?,
            _ => match (node.get("schema"), node.pointer("/content")) {
                (Some(schema), _) => self.normalizer.normalize(schema, &format!("{pointer}/schema"))?,
                (None, Some(Value::Object(content))) => match content.iter().next() {
                    Some((content_type, media)) => match media.get("schema") {
                        Some(schema) => self.normalizer.normalize(
                            schema,
                            &format!("{pointer}/content/{}/schema", escape_segment(content_type)),
                        )?,
                        None => Schema::any(),
                    },
                    None => Schema::any(),
                },
                _ => Schema::any(),
            },
        };

        Ok(Parameter {
            required: flag(node, "required") || location == ParameterLocation::Path,
            name,
            location,
            description: text(node, "description"),
            deprecated: flag(node, "deprecated"),
            schema,
        })
    }

    fn request_body(&self, document: &mut ResolvedDocument, node: &Value, pointer: &str) -> Result<RequestBody> {
        let node = document.resolve_node(node)?;
        Ok(RequestBody {
            description: text(&node, "description"),
            required: flag(&node, "required"),
            content: self.content(document, node.get("content"), pointer)?,
        })
    }

    /// Swagger 2 `in: body` parameter; `pointer` addresses the parameter itself
    fn body_parameter(&self, node: &Value, consumes: &[String], pointer: &str) -> Result<RequestBody> {
        let schema = match node.get("schema") {
            Some(schema) => Some(self.normalizer.normalize(schema, &format!("{pointer}/schema"))?),
            None => None,
        };

        Ok(RequestBody {
            description: text(node, "description"),
            required: flag(node, "required"),
            content: consumes
                .iter()
                .map(|content_type| MediaContent {
                    content_type: content_type.clone(),
                    schema: schema.clone(),
                    examples: Vec::new(),
                    alt_types: Vec::new(),
                })
                .collect(),
        })
    }

    /// Swagger 2 `in: formData` parameters, gathered into one object schema
    fn form_body(&self, fields: &[&Value], consumes: &[String], pointer: &str) -> Result<RequestBody> {
        let mut properties = Map::new();
        let mut required = Vec::new();
        let mut has_file = false;

        for field in fields {
            let Some(name) = field.get("name").and_then(Value::as_str) else {
                continue;
            };
            has_file |= field.get("type").and_then(Value::as_str) == Some("file");
            if flag(field, "required") {
                required.push(Value::String(name.to_string()));
            }
            properties.insert(name.to_string(), parameter_schema_node(field));
        }

        let node = json!({"type": "object", "properties": properties, "required": required});
        let schema = self.normalizer.normalize(&node, &format!("{pointer}/parameters"))?;

        let content_type = if has_file || consumes.iter().any(|media| media == MULTIPART) {
            MULTIPART
        } else {
            FORM_URLENCODED
        };

        Ok(RequestBody {
            description: None,
            required: !required.is_empty(),
            content: vec![MediaContent {
                content_type: content_type.to_string(),
                schema: Some(schema),
                examples: Vec::new(),
                alt_types: Vec::new(),
            }],
        })
    }

    fn response(
        &self,
        document: &mut ResolvedDocument,
        context: &OperationContext<'_>,
        operation: &Value,
        status: &str,
        node: &Value,
        pointer: &str,
    ) -> Result<Response> {
        let node = document.resolve_node(node)?;

        let mut headers = Vec::new();
        for (name, header) in node.get("headers").and_then(Value::as_object).into_iter().flatten() {
            let header = document.resolve_node(header)?;
            let header_pointer = format!("{pointer}/headers/{}", escape_segment(name));
            let schema = match context.version {
                SpecVersion::Swagger2 => {
                    let mut schema_node = header.clone();
                    if let Some(map) = schema_node.as_object_mut() {
                        map.remove("description");
                    }
                    Some(self.normalizer.normalize(&schema_node, &header_pointer)?)
                }
                _ => match header.get("schema") {
                    Some(schema) => Some(self.normalizer.normalize(schema, &format!("{header_pointer}/schema"))?),
                    None => None,
                },
            };
            headers.push(ResponseHeader {
                name: name.clone(),
                description: text(&header, "description"),
                schema,
            });
        }

        let content = match context.version {
            SpecVersion::Swagger2 => match node.get("schema") {
                Some(schema) => {
                    let schema = self.normalizer.normalize(schema, &format!("{pointer}/schema"))?;
                    media_types(operation, context.root, "produces")
                        .into_iter()
                        .map(|content_type| MediaContent {
                            examples: node
                                .get("examples")
                                .and_then(|examples| examples.get(&content_type))
                                .map(|value| vec![named_example(None, value.clone())])
                                .unwrap_or_default(),
                            content_type,
                            schema: Some(schema.clone()),
                            alt_types: Vec::new(),
                        })
                        .collect()
                }
                None => Vec::new(),
            },
            _ => self.content(document, node.get("content"), pointer)?,
        };

        Ok(Response {
            status: status.to_string(),
            description: text(&node, "description"),
            headers,
            content,
        })
    }

    /// OpenAPI 3 `content` map, simplified, with the examples the source declares
    fn content(&self, document: &mut ResolvedDocument, node: Option<&Value>, pointer: &str) -> Result<Vec<MediaContent>> {
        let Some(content) = node.and_then(Value::as_object) else {
            return Ok(Vec::new());
        };

        let mut media = Vec::new();
        for entry in simplify_content(content) {
            let pointer = format!("{pointer}/content/{}", escape_segment(&entry.content_type));
            let declaration = &entry.declaration;

            let schema = match declaration.get("schema") {
                Some(schema) => Some(self.normalizer.normalize(schema, &format!("{pointer}/schema"))?),
                None => None,
            };

            let mut examples = Vec::new();
            for (name, example) in declaration.get("examples").and_then(Value::as_object).into_iter().flatten() {
                let value = match example {
                    Value::String(_) => example.clone(),
                    Value::Object(map) if map.contains_key("$ref") => {
                        let resolved = document.resolve_node(example)?;
                        resolved.get("value").cloned().unwrap_or(resolved)
                    }
                    other => other.get("value").cloned().unwrap_or(Value::Null),
                };
                examples.push(named_example(Some(name.clone()), value));
            }
            if let Some(example) = declaration.get("example") {
                examples.push(named_example(None, example.clone()));
            }

            media.push(MediaContent {
                content_type: entry.content_type,
                schema,
                examples,
                alt_types: entry.alt_types,
            });
        }
        Ok(media)
    }

    fn catalog(&self, document: &mut ResolvedDocument, api: &ApiDocument, version: SpecVersion) -> Result<SchemaCatalog> {
        let mut roots: Vec<&Schema> = api.schemas.values().collect();
        for operation in api.operations() {
            roots.extend(operation.parameters.iter().map(|parameter| &parameter.schema));
            let bodies = operation
                .request_body
                .iter()
                .flat_map(|body| body.content.iter())
                .chain(operation.responses.iter().flat_map(|response| response.content.iter()));
            roots.extend(bodies.filter_map(|media| media.schema.as_ref()));
            roots.extend(
                operation
                    .responses
                    .iter()
                    .flat_map(|response| response.headers.iter())
                    .filter_map(|header| header.schema.as_ref()),
            );
        }

        let mut catalog = SchemaCatalog::build(document, roots)?;
        for (name, schema) in &api.schemas {
            let reference = component_reference(version, name);
            if catalog.get(&reference).is_none() {
                catalog.insert(&reference, schema.clone());
            }
        }
        Ok(catalog)
    }

    /// Fill content entries that declare no example with a synthesized one
    fn synthesize_examples(&self, api: &mut ApiDocument, catalog: &SchemaCatalog) {
        let synthesizer = ExampleSynthesizer::with_config(catalog, self.synthesis.clone());

        for operation in api.groups.values_mut().flatten().flat_map(|item| item.operations.iter_mut()) {
            let bodies = operation
                .request_body
                .iter_mut()
                .flat_map(|body| body.content.iter_mut())
                .chain(operation.responses.iter_mut().flat_map(|response| response.content.iter_mut()));

            for media in bodies {
                if !media.examples.is_empty() {
                    continue;
                }
                if let Some(schema) = &media.schema {
                    media.examples.push(ContentExample {
                        name: None,
                        example: synthesizer.synthesize(schema),
                    });
                }
            }
        }
    }
}

/// Read-only inputs shared by every operation of a pass
struct OperationContext<'a> {
    root: &'a Value,
    version: SpecVersion,
    security_schemes: &'a IndexMap<String, SecurityScheme>,
}

/// Reference to the reusable schema `name` in the layout of `version`
pub(crate) fn component_reference(version: SpecVersion, name: &str) -> Reference {
    let mut segments: Vec<&str> = version.schemas_pointer().to_vec();
    segments.push(name);
    Reference::from_pointer(JsonPointer::from_segments(segments))
}

/// Path-item parameters overridden by operation parameters with the same `(name, in)`
fn merge_parameters(document: &mut ResolvedDocument, shared: &[Value], own: Option<&Value>) -> Result<Vec<Value>> {
    let mut merged: IndexMap<(String, String), Value> = IndexMap::new();
    let own = own.and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default();

    for node in shared.iter().chain(own) {
        let parameter = document.resolve_node(node)?;
        let key = (
            text(&parameter, "name").unwrap_or_default(),
            text(&parameter, "in").unwrap_or_default(),
        );
        merged.insert(key, parameter);
    }

    Ok(merged.into_values().collect())
}

/// Schema keywords of a Swagger 2 non-body parameter
fn parameter_schema_node(node: &Value) -> Value {
    let mut schema = node.clone();
    if let Some(map) = schema.as_object_mut() {
        for key in PARAMETER_KEYS {
            map.remove(*key);
        }
    }
    schema
}

/// `consumes` / `produces` of an operation, falling back to the root, then JSON
fn media_types(operation: &Value, root: &Value, key: &str) -> Vec<String> {
    let declared: Vec<String> = operation
        .get(key)
        .or_else(|| root.get(key))
        .and_then(Value::as_array)
        .map(|types| types.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default();

    if declared.is_empty() {
        vec!["application/json".to_string()]
    } else {
        declared
    }
}

fn named_example(name: Option<String>, value: Value) -> ContentExample {
    ContentExample {
        name,
        example: Example::explicit(value),
    }
}

/// The single tag every tagged operation of a path item agrees on
fn common_tag(operations: &[Operation]) -> Option<String> {
    let mut single: Option<&str> = None;

    for operation in operations {
        if operation.tags.is_empty() {
            continue;
        }
        single = operation
            .tags
            .iter()
            .map(String::as_str)
            .find(|tag| single.map_or(true, |current| current == *tag));
    }

    single.map(str::to_string)
}

fn read_info(root: &Value) -> Info {
    let Some(info) = root.get("info") else {
        return Info::default();
    };

    Info {
        title: text(info, "title").unwrap_or_default(),
        version: text(info, "version").unwrap_or_default(),
        description: text(info, "description"),
        terms_of_service: text(info, "termsOfService"),
        contact: info.get("contact").map(|contact| Contact {
            name: text(contact, "name"),
            url: text(contact, "url"),
            email: text(contact, "email"),
        }),
        license: info.get("license").and_then(|license| {
            Some(License {
                name: text(license, "name")?,
                url: text(license, "url"),
            })
        }),
    }
}

fn read_servers(root: &Value, version: SpecVersion) -> Vec<Server> {
    if version != SpecVersion::Swagger2 {
        return root
            .get("servers")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|server| {
                Some(Server {
                    url: text(server, "url")?,
                    description: text(server, "description"),
                })
            })
            .collect();
    }

    let base_path = text(root, "basePath").unwrap_or_default();
    let Some(host) = text(root, "host") else {
        if base_path.is_empty() {
            return Vec::new();
        }
        return vec![Server {
            url: base_path,
            description: None,
        }];
    };

    let schemes: Vec<&str> = root
        .get("schemes")
        .and_then(Value::as_array)
        .map(|schemes| schemes.iter().filter_map(Value::as_str).collect())
        .filter(|schemes: &Vec<&str>| !schemes.is_empty())
        .unwrap_or_else(|| vec!["https"]);

    schemes
        .into_iter()
        .map(|scheme| Server {
            url: format!("{scheme}://{host}{base_path}"),
            description: None,
        })
        .collect()
}

fn read_tags(root: &Value) -> Vec<Tag> {
    root.get("tags")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|tag| {
            Some(Tag {
                name: text(tag, "name")?,
                description: text(tag, "description"),
            })
        })
        .collect()
}

fn read_external_docs(node: &Value) -> Option<ExternalDocs> {
    Some(ExternalDocs {
        url: text(node, "url")?,
        description: text(node, "description"),
    })
}

fn text(node: &Value, key: &str) -> Option<String> {
    node.get(key).and_then(Value::as_str).map(str::to_string)
}

fn flag(node: &Value, key: &str) -> bool {
    node.get(key).and_then(Value::as_bool).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaKind;
    use crate::synthesis::Provenance;

    fn build(root: Value) -> (ApiDocument, SchemaCatalog) {
        let mut document = ResolvedDocument::from_value(root);
        DocumentBuilder::new().build_with_catalog(&mut document).unwrap()
    }

    #[test]
    fn test_operations_grouped_by_common_tag() {
        let (api, _) = build(json!({
            "openapi": "3.0.0",
            "info": {"title": "Cats", "version": "1"},
            "paths": {
                "/cats": {
                    "get": {"tags": ["Cats"], "responses": {}},
                    "post": {"tags": ["Cats"], "responses": {}}
                },
                "/health": {"get": {"responses": {}}}
            }
        }));

        let groups: Vec<_> = api.groups.keys().map(String::as_str).collect();
        assert_eq!(groups, ["Cats", ""]);
        let methods: Vec<_> = api.groups["Cats"][0].operations.iter().map(|op| op.method).collect();
        assert_eq!(methods, [Method::Get, Method::Post]);
    }

    #[test]
    fn test_common_tag_folds_like_the_source_tool() {
        let tagged = |tags: &[&str]| Operation {
            method: Method::Get,
            path: "/".to_string(),
            operation_id: None,
            summary: None,
            description: None,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            deprecated: false,
            parameters: Vec::new(),
            request_body: None,
            responses: Vec::new(),
        };

        assert_eq!(common_tag(&[tagged(&["A"]), tagged(&[]), tagged(&["B", "A"])]), Some("A".to_string()));
        assert_eq!(common_tag(&[tagged(&["A"]), tagged(&["B"])]), None);
        assert_eq!(common_tag(&[tagged(&[])]), None);
    }

    #[test]
    fn test_parameters_sorted_with_security_first() {
        let (api, _) = build(json!({
            "openapi": "3.0.0",
            "info": {"title": "t", "version": "1"},
            "security": [{"BearerAuth": []}],
            "components": {
                "securitySchemes": {"BearerAuth": {"type": "http", "scheme": "bearer"}},
                "parameters": {"Page": {"name": "page", "in": "query", "schema": {"type": "integer"}}}
            },
            "paths": {"/items/{id}": {
                "parameters": [{"name": "id", "in": "path", "schema": {"type": "string"}}],
                "get": {
                    "parameters": [
                        {"name": "Zeta", "in": "query", "schema": {"type": "string"}},
                        {"$ref": "#/components/parameters/Page"}
                    ],
                    "responses": {}
                }
            }}
        }));

        let operation = api.operations().next().unwrap();
        let names: Vec<_> = operation.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["BearerAuth", "id", "page", "Zeta"]);
        assert!(operation.parameters[1].required);
        assert_eq!(operation.parameters[0].description.as_deref(), Some("JWT Bearer token"));
    }

    #[test]
    fn test_operation_security_overrides_global() {
        let (api, _) = build(json!({
            "openapi": "3.0.0",
            "security": [{"BearerAuth": []}],
            "paths": {"/public": {"get": {"security": [], "responses": {}}}}
        }));

        assert!(api.operations().next().unwrap().parameters.is_empty());
    }

    #[test]
    fn test_content_examples_precedence() {
        let (api, _) = build(json!({
            "openapi": "3.0.0",
            "components": {
                "examples": {"Thin": {"value": {"name": "Thinny"}}},
                "schemas": {"Cat": {"type": "object", "properties": {"name": {"type": "string"}}}}
            },
            "paths": {"/cats": {"post": {
                "requestBody": {"content": {"application/json": {
                    "schema": {"$ref": "#/components/schemas/Cat"},
                    "examples": {
                        "fat": {"value": {"name": "Fatty"}},
                        "thin": {"$ref": "#/components/examples/Thin"},
                        "raw": "name=Raw"
                    }
                }}},
                "responses": {"200": {
                    "description": "A cat",
                    "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Cat"}}}
                }}
            }}}
        }));

        let operation = api.operations().next().unwrap();
        let request = &operation.request_body.as_ref().unwrap().content[0];
        let values: Vec<_> = request.examples.iter().map(|e| e.example.value.clone()).collect();
        assert_eq!(values, [json!({"name": "Fatty"}), json!({"name": "Thinny"}), json!("name=Raw")]);
        assert!(request.examples.iter().all(|e| e.example.is_explicit()));

        let response = &operation.responses[0].content[0];
        assert_eq!(response.examples.len(), 1);
        assert_eq!(response.examples[0].example.value, json!({"name": "string"}));
        assert_eq!(response.examples[0].example.provenance, Provenance::Synthesized);
    }

    #[test]
    fn test_swagger_body_form_and_responses() {
        let (api, catalog) = build(json!({
            "swagger": "2.0",
            "host": "api.example.com",
            "basePath": "/v1",
            "schemes": ["http", "https"],
            "produces": ["application/json"],
            "securityDefinitions": {"Key": {"type": "apiKey", "in": "header", "name": "X-Key"}},
            "definitions": {"Pet": {"type": "object", "properties": {"name": {"type": "string"}}}},
            "paths": {
                "/pets": {
                    "post": {
                        "security": [{"Key": []}],
                        "parameters": [{"name": "pet", "in": "body", "required": true,
                                        "schema": {"$ref": "#/definitions/Pet"}}],
                        "responses": {"200": {
                            "description": "ok",
                            "schema": {"type": "array", "items": {"$ref": "#/definitions/Pet"}},
                            "headers": {"X-Rate": {"type": "integer", "description": "Remaining"}}
                        }}
                    }
                },
                "/upload": {
                    "post": {
                        "parameters": [
                            {"name": "file", "in": "formData", "type": "file", "required": true},
                            {"name": "note", "in": "formData", "type": "string"}
                        ],
                        "responses": {"204": {"description": "done"}}
                    }
                }
            }
        }));

        assert_eq!(api.version, SpecVersion::Swagger2);
        let urls: Vec<_> = api.servers.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(urls, ["http://api.example.com/v1", "https://api.example.com/v1"]);
        assert!(catalog.get(&component_reference(SpecVersion::Swagger2, "Pet")).is_some());

        let mut operations = api.operations();
        let create = operations.next().unwrap();
        assert_eq!(create.parameters[0].name, "Key");
        let body = create.request_body.as_ref().unwrap();
        assert_eq!(body.content[0].content_type, "application/json");
        assert_eq!(body.content[0].examples[0].example.value, json!({"name": "string"}));

        let response = &create.responses[0];
        assert_eq!(response.headers[0].name, "X-Rate");
        assert_eq!(response.content[0].examples[0].example.value, json!([{"name": "string"}]));

        let upload = operations.next().unwrap();
        let form = upload.request_body.as_ref().unwrap();
        assert_eq!(form.content[0].content_type, "multipart/form-data");
        let SchemaKind::Object(object) = &form.content[0].schema.as_ref().unwrap().kind else {
            panic!("form body must be an object");
        };
        assert_eq!(object.required, ["file"]);
    }

    #[test]
    fn test_swagger_body_schema_error_points_at_the_parameter() {
        let mut document = ResolvedDocument::from_value(json!({
            "swagger": "2.0",
            "paths": {"/pets": {"post": {
                "parameters": [
                    {"name": "limit", "in": "query", "type": "integer"},
                    {"name": "pet", "in": "body", "schema": {"type": "object", "properties": ["name"]}}
                ],
                "responses": {}
            }}}
        }));

        let error = DocumentBuilder::new().build(&mut document).unwrap_err();
        assert!(matches!(
            error,
            Error::SchemaShape { ref path, .. } if path == "#/paths/~1pets/post/parameters/1/schema/properties"
        ));
    }

    #[test]
    fn test_unnamed_parameter_is_a_shape_error() {
        let mut document = ResolvedDocument::from_value(json!({
            "openapi": "3.0.0",
            "paths": {"/x": {"get": {"parameters": [{"in": "query"}], "responses": {}}}}
        }));

        let error = DocumentBuilder::new().build(&mut document).unwrap_err();
        assert!(matches!(error, Error::SchemaShape { ref path, .. } if path == "#/paths/~1x/get/parameters/0"));
    }
}
