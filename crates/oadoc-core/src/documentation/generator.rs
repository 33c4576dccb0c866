//! Main documentation generator
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

use crate::document::{ApiDocument, MediaContent, Operation, Parameter, PathItem, Response};
use crate::documentation::contents::writer_for;
use crate::documentation::markdown::{anchor, escape_cell, highlight_params, indent, write_table};
use crate::documentation::plantuml;
use crate::documentation::style::OutputStyle;
use crate::documentation::texts::Texts;
use crate::schema::{Schema, SchemaCatalog, SchemaKind};
use crate::synthesis::Provenance;
use std::fmt::Write;

/// Documentation generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub style: OutputStyle,
    /// Include table of contents
    pub include_toc: bool,
    /// Include request and response examples
    pub include_examples: bool,
    /// Include deprecated operations and properties
    pub include_deprecated: bool,
    pub texts: Texts,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            style: OutputStyle::default(),
            include_toc: true,
            include_examples: true,
            include_deprecated: true,
            texts: Texts::default(),
        }
    }
}

/// Main documentation generator
#[derive(Debug, Clone, Default)]
pub struct DocGenerator {
    config: GeneratorConfig,
}

impl DocGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Shorthand for a default configuration with another style
    pub fn with_style(style: OutputStyle) -> Self {
        Self::with_config(GeneratorConfig {
            style,
            ..GeneratorConfig::default()
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render `api` in the configured style
    pub fn generate(&self, api: &ApiDocument, catalog: &SchemaCatalog) -> String {
        match self.config.style {
            OutputStyle::MkDocs | OutputStyle::Markdown => MarkdownWriter {
                api,
                catalog,
                config: &self.config,
                texts: &self.config.texts,
                mkdocs: self.config.style == OutputStyle::MkDocs,
                out: String::new(),
            }
            .write(),
            OutputStyle::PlantUmlSchemas => plantuml::schemas_diagram(api),
            OutputStyle::PlantUmlApi => plantuml::api_diagram(api),
        }
    }
}

/// Which side of an exchange a body belongs to
#[derive(Clone, Copy)]
enum Direction {
    Request,
    Response,
}

struct MarkdownWriter<'a> {
    api: &'a ApiDocument,
    catalog: &'a SchemaCatalog,
    config: &'a GeneratorConfig,
    texts: &'a Texts,
    mkdocs: bool,
    out: String,
}

impl MarkdownWriter<'_> {
    fn write(mut self) -> String {
        self.header();
        if self.config.include_toc {
            self.table_of_contents();
        }
        self.servers();

        let api = self.api;
        for (tag, items) in &api.groups {
            self.group(tag, items);
        }

        self.schemas();
        self.security_schemes();

        let trimmed = self.out.trim_end().len();
        self.out.truncate(trimmed);
        self.out.push('\n');
        self.out
    }

    fn header(&mut self) {
        let info = &self.api.info;
        let title = if info.title.is_empty() { "API" } else { info.title.as_str() };

        if info.version.is_empty() {
            let _ = writeln!(self.out, "# {title}\n");
        } else {
            let _ = writeln!(self.out, "# {title} {}\n", info.version);
        }

        if let Some(description) = &info.description {
            let _ = writeln!(self.out, "{}\n", description.trim());
        }

        let mut facts = Vec::new();
        if let Some(terms) = &info.terms_of_service {
            facts.push(format!("**{}:** <{terms}>", self.texts.terms_of_service));
        }
        if let Some(contact) = &info.contact {
            let mut parts = Vec::new();
            if let Some(name) = &contact.name {
                parts.push(name.clone());
            }
            if let Some(email) = &contact.email {
                parts.push(format!("[{email}](mailto:{email})"));
            }
            if let Some(url) = &contact.url {
                parts.push(format!("<{url}>"));
            }
            facts.push(format!("**{}:** {}", self.texts.contact, parts.join(", ")));
        }
        if let Some(license) = &info.license {
            let name = match &license.url {
                Some(url) => format!("[{}]({url})", license.name),
                None => license.name.clone(),
            };
            facts.push(format!("**{}:** {name}", self.texts.license));
        }
        if let Some(docs) = &self.api.external_docs {
            let label = docs.description.as_deref().unwrap_or(self.texts.external_docs);
            facts.push(format!("[{label}]({})", docs.url));
        }

        if !facts.is_empty() {
            let _ = writeln!(self.out, "{}\n", facts.join("<br>\n"));
        }
        self.out.push_str("---\n\n");
    }

    fn table_of_contents(&mut self) {
        let mut sections: Vec<String> = Vec::new();
        if !self.api.servers.is_empty() {
            sections.push(self.texts.servers.to_string());
        }
        sections.extend(self.api.groups.keys().map(|tag| self.group_title(tag)));
        if !self.api.schemas.is_empty() {
            sections.push(self.texts.schemas.to_string());
        }
        if !self.api.security_schemes.is_empty() {
            sections.push(self.texts.security_schemes.to_string());
        }

        let _ = writeln!(self.out, "## {}\n", self.texts.table_of_contents);
        for section in &sections {
            let _ = writeln!(self.out, "- [{section}](#{})", anchor(section));
        }
        self.out.push('\n');
    }

    fn servers(&mut self) {
        if self.api.servers.is_empty() {
            return;
        }

        let mut rows = vec![vec![self.texts.description.to_string(), self.texts.url.to_string()]];
        for server in &self.api.servers {
            rows.push(vec![
                escape_cell(server.description.as_deref().unwrap_or("")),
                escape_cell(&server.url),
            ]);
        }
        let _ = writeln!(self.out, "## {}\n\n{}\n", self.texts.servers, write_table(&rows));
    }

    fn group_title(&self, tag: &str) -> String {
        if tag.is_empty() {
            self.texts.endpoints.to_string()
        } else {
            tag.to_string()
        }
    }

    fn group(&mut self, tag: &str, items: &[PathItem]) {
        let _ = writeln!(self.out, "## {}\n", self.group_title(tag));

        let api = self.api;
        let description = api
            .tags
            .iter()
            .find(|declared| declared.name == tag)
            .and_then(|declared| declared.description.as_deref());
        if let Some(description) = description {
            let _ = writeln!(self.out, "{}\n", description.trim());
        }

        for item in items {
            for operation in &item.operations {
                if operation.deprecated && !self.config.include_deprecated {
                    continue;
                }
                self.operation(operation);
            }
        }
    }

    fn operation(&mut self, operation: &Operation) {
        if self.mkdocs {
            let _ = writeln!(
                self.out,
                "### <span class=\"api-tag __{}\">{}</span> <span class=\"api-route\">{}</span>\n",
                operation.method.key(),
                operation.method,
                highlight_params(&operation.path)
            );
        } else {
            let _ = writeln!(self.out, "### {} {}\n", operation.method, operation.path);
        }

        if operation.deprecated {
            self.admonition("warning", self.texts.deprecated, "");
        }
        if let Some(summary) = &operation.summary {
            let _ = writeln!(self.out, "{}\n", summary.trim());
        }
        if let Some(description) = &operation.description {
            let _ = writeln!(self.out, "{}\n", description.trim());
        }

        self.parameters(&operation.parameters);

        if let Some(body) = &operation.request_body {
            let _ = writeln!(self.out, "#### {}\n", self.texts.request_body);
            if let Some(description) = &body.description {
                let _ = writeln!(self.out, "{}\n", description.trim());
            }
            self.content(&body.content, Direction::Request);
        }

        if !operation.responses.is_empty() {
            let _ = writeln!(self.out, "#### {}\n", self.texts.responses);
            for response in &operation.responses {
                self.response(response);
            }
        }
    }

    fn parameters(&mut self, parameters: &[Parameter]) {
        let _ = writeln!(self.out, "**{}**\n", self.texts.parameters);
        if parameters.is_empty() {
            let _ = writeln!(self.out, "*{}*\n", self.texts.no_parameters);
            return;
        }

        let texts = self.texts;
        let mut rows = vec![vec![
            texts.parameter.to_string(),
            texts.parameter_location.to_string(),
            texts.type_.to_string(),
            texts.default.to_string(),
            texts.nullable.to_string(),
            texts.description.to_string(),
        ]];
        for parameter in parameters {
            let default = parameter
                .schema
                .as_primitive()
                .and_then(|primitive| primitive.default.as_ref())
                .map(|value| format!("`{value}`"))
                .unwrap_or_default();
            let name = if parameter.required {
                format!("`{}` *", parameter.name)
            } else {
                format!("`{}`", parameter.name)
            };

            rows.push(vec![
                escape_cell(&name),
                parameter.location.to_string(),
                escape_cell(&self.type_cell(&parameter.schema)),
                escape_cell(&default),
                texts.yes_no(parameter.schema.nullable).to_string(),
                escape_cell(parameter.description.as_deref().unwrap_or("")),
            ]);
        }
        let _ = writeln!(self.out, "{}\n", write_table(&rows));
    }

    fn response(&mut self, response: &Response) {
        let phrase = response.status_phrase().unwrap_or("");
        let _ = writeln!(self.out, "##### {} {}\n", response.status, phrase);
        if let Some(description) = &response.description {
            let _ = writeln!(self.out, "{}\n", description.trim());
        }

        if !response.headers.is_empty() {
            let texts = self.texts;
            let mut rows = vec![vec![
                texts.name.to_string(),
                texts.type_.to_string(),
                texts.description.to_string(),
            ]];
            for header in &response.headers {
                rows.push(vec![
                    format!("`{}`", header.name),
                    header
                        .schema
                        .as_ref()
                        .map(|schema| escape_cell(&self.type_cell(schema)))
                        .unwrap_or_default(),
                    escape_cell(header.description.as_deref().unwrap_or("")),
                ]);
            }
            let _ = writeln!(self.out, "**{}**\n\n{}\n", texts.response_headers, write_table(&rows));
        }

        self.content(&response.content, Direction::Response);
    }

    fn content(&mut self, content: &[MediaContent], direction: Direction) {
        for media in content {
            let block = self.media_block(media, direction);
            if self.mkdocs {
                let _ = writeln!(self.out, "=== \"{}\"\n\n{}\n", media.content_type, indent(&block, 4));
            } else {
                let _ = writeln!(self.out, "{}: `{}`\n\n{}\n", self.texts.content_type, media.content_type, block);
            }
        }
    }

    fn media_block(&self, media: &MediaContent, direction: Direction) -> String {
        let texts = self.texts;
        let mut block = String::new();

        if self.config.include_examples {
            let writer = writer_for(&media.content_type);
            for example in &media.examples {
                match &example.name {
                    Some(name) => {
                        let _ = writeln!(block, "{}: {name}\n", texts.example);
                    }
                    None => {
                        let _ = writeln!(block, "{}\n", texts.example);
                    }
                }
                let _ = writeln!(
                    block,
                    "```{}\n{}\n```\n",
                    writer.language(),
                    writer.write(&example.example.value)
                );

                if example.example.provenance == Provenance::Synthesized {
                    block.push_str(&self.note("note", texts.auto_generated_example_note));
                }
                if !example.example.alt_types.is_empty() {
                    let others = example.example.alt_types.join(", ");
                    block.push_str(&self.note("info", &format!("{}: {others}.", texts.example_alternatives)));
                }
            }
        }

        if let Some(schema) = &media.schema {
            let label = match direction {
                Direction::Request => texts.schema_of_the_request_body,
                Direction::Response => texts.schema_of_the_response_body,
            };
            let _ = writeln!(block, "{label}: {}\n", self.type_cell(schema));

            let resolved = self.catalog.resolve(schema);
            if let SchemaKind::Object(_) = resolved.kind {
                if let Some(table) = self.properties_table(resolved) {
                    let _ = writeln!(block, "{table}\n");
                }
            }
        }

        if !media.alt_types.is_empty() {
            let label = match direction {
                Direction::Request => texts.other_accepted_types,
                Direction::Response => texts.other_possible_types,
            };
            let types: Vec<_> = media.alt_types.iter().map(|alt| format!("`{alt}`")).collect();
            let _ = writeln!(block, "{label}: {}\n", types.join(", "));
        }

        block.trim_end().to_string()
    }

    fn schemas(&mut self) {
        if self.api.schemas.is_empty() {
            return;
        }

        let _ = writeln!(self.out, "## {}\n\n{}\n", self.texts.schemas, self.texts.about_schemas);

        let api = self.api;
        for (name, schema) in api.sorted_schemas() {
            let _ = writeln!(self.out, "### {name}\n");
            if let Some(description) = &schema.description {
                let _ = writeln!(self.out, "{}\n", description.trim());
            }
            if schema.deprecated {
                self.admonition("warning", self.texts.deprecated, "");
            }

            match self.properties_table(schema) {
                Some(table) => {
                    let _ = writeln!(self.out, "{table}\n");
                }
                None => {
                    let _ = writeln!(self.out, "{}: {}\n", self.texts.type_, self.type_cell(schema));
                }
            }
        }
    }

    fn security_schemes(&mut self) {
        if self.api.security_schemes.is_empty() {
            return;
        }

        let texts = self.texts;
        let mut rows = vec![vec![
            texts.name.to_string(),
            texts.type_.to_string(),
            texts.scheme.to_string(),
            texts.parameter_location.to_string(),
            texts.description.to_string(),
        ]];
        for (name, scheme) in &self.api.security_schemes {
            rows.push(vec![
                escape_cell(name),
                escape_cell(&scheme.kind),
                escape_cell(scheme.scheme.as_deref().unwrap_or("")),
                escape_cell(scheme.location.as_deref().unwrap_or("")),
                escape_cell(scheme.description.as_deref().unwrap_or("")),
            ]);
        }
        let _ = writeln!(self.out, "## {}\n\n{}\n", texts.security_schemes, write_table(&rows));
    }

    /// Property table of an object schema, `None` for other shapes
    fn properties_table(&self, schema: &Schema) -> Option<String> {
        let SchemaKind::Object(object) = &schema.kind else {
            return None;
        };
        if object.properties.is_empty() {
            return None;
        }

        let texts = self.texts;
        let mut rows = vec![vec![
            texts.name.to_string(),
            texts.type_.to_string(),
            texts.nullable.to_string(),
            texts.required.to_string(),
        ]];
        for (name, property) in &object.properties {
            if property.deprecated && !self.config.include_deprecated {
                continue;
            }
            rows.push(vec![
                escape_cell(name),
                escape_cell(&self.type_cell(property)),
                texts.yes_no(property.nullable).to_string(),
                texts.yes_no(object.is_required(name)).to_string(),
            ]);
        }
        Some(write_table(&rows))
    }

    /// Type of `schema`, linking component schemas to their section
    fn type_cell(&self, schema: &Schema) -> String {
        let link = |target: &crate::resolver::Reference| {
            let name = target.name();
            if self.api.schemas.contains_key(name) {
                format!("[{name}](#{})", anchor(name))
            } else {
                format!("`{name}`")
            }
        };

        let cell = match &schema.kind {
            SchemaKind::Reference { target } => link(target),
            SchemaKind::Array { items } => match items.as_reference() {
                Some(target) => format!("Array<{}>", link(target)),
                None => format!("`{}`", schema.type_name()),
            },
            _ => return format!("`{}`", schema.type_name()),
        };

        if schema.nullable {
            format!("{cell} | null")
        } else {
            cell
        }
    }

    fn note(&self, kind: &str, text: &str) -> String {
        if self.mkdocs {
            format!("!!! {kind}\n\n{}\n\n", indent(text, 4))
        } else {
            format!("> {text}\n\n")
        }
    }

    fn admonition(&mut self, kind: &str, title: &str, text: &str) {
        if self.mkdocs {
            let _ = writeln!(self.out, "!!! {kind} \"{title}\"\n");
            if !text.is_empty() {
                let _ = writeln!(self.out, "{}\n", indent(text, 4));
            }
        } else if text.is_empty() {
            let _ = writeln!(self.out, "> **{title}**\n");
        } else {
            let _ = writeln!(self.out, "> **{title}**: {text}\n");
        }
    }
}
