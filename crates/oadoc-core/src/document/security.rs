//! Security schemes and the parameters they imply

use crate::document::{Parameter, ParameterLocation};
use crate::schema::{PrimitiveKind, PrimitiveSchema, Schema, SchemaKind};
use serde_json::Value;

/// A declared security scheme (`components.securitySchemes` or `securityDefinitions`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityScheme {
    /// `type`: http, apiKey, oauth2, openIdConnect, or basic in Swagger 2
    pub kind: String,
    pub description: Option<String>,
    /// HTTP authorization scheme, e.g. `bearer`
    pub scheme: Option<String>,
    pub bearer_format: Option<String>,
    /// `in` of an apiKey scheme
    pub location: Option<String>,
    /// `name` of an apiKey scheme
    pub parameter_name: Option<String>,
    pub open_id_connect_url: Option<String>,
}

impl SecurityScheme {
    /// Read a scheme node, mapping the Swagger 2 `basic` type to http basic
    pub fn from_value(node: &Value) -> Self {
        let text = |key: &str| node.get(key).and_then(Value::as_str).map(str::to_string);

        let mut scheme = Self {
            kind: text("type").unwrap_or_default(),
            description: text("description"),
            scheme: text("scheme"),
            bearer_format: text("bearerFormat"),
            location: text("in"),
            parameter_name: text("name"),
            open_id_connect_url: text("openIdConnectUrl"),
        };

        if scheme.kind == "basic" {
            scheme.kind = "http".to_string();
            scheme.scheme = Some("basic".to_string());
        }
        scheme
    }
}

/// The input a reader must send to satisfy the requirement `key`.
///
/// http schemes travel in a header, apiKey schemes where they declare.
pub fn security_parameter(key: &str, scheme: &SecurityScheme) -> Parameter {
    let (location, fallback) = match scheme.kind.as_str() {
        "http" => {
            let fallback = match scheme.scheme.as_deref() {
                Some("bearer") => "JWT Bearer token",
                Some("basic") => "Basic authentication",
                _ => "",
            };
            (ParameterLocation::Header, fallback)
        }
        "apiKey" => (
            scheme
                .location
                .as_deref()
                .map(ParameterLocation::from)
                .unwrap_or(ParameterLocation::Header),
            "API key",
        ),
        _ => (ParameterLocation::Header, ""),
    };

    Parameter {
        name: key.to_string(),
        location,
        description: Some(
            scheme
                .description
                .clone()
                .unwrap_or_else(|| fallback.to_string()),
        ),
        required: true,
        deprecated: false,
        schema: placeholder_schema(),
    }
}

/// `{type: string, default: "N/A", nullable: false}`
fn placeholder_schema() -> Schema {
    let mut primitive = PrimitiveSchema::new(PrimitiveKind::String);
    primitive.default = Some(Value::String("N/A".to_string()));
    Schema::new(SchemaKind::Primitive(primitive))
}
