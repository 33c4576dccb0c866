//! Labels used in rendered documentation

/// Every label a renderer writes; swap the struct to localize output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texts {
    pub contact: &'static str,
    pub license: &'static str,
    pub terms_of_service: &'static str,
    pub external_docs: &'static str,
    pub table_of_contents: &'static str,
    pub servers: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub endpoints: &'static str,
    pub parameters: &'static str,
    pub no_parameters: &'static str,
    pub parameter: &'static str,
    pub parameter_location: &'static str,
    pub name: &'static str,
    pub type_: &'static str,
    pub default: &'static str,
    pub nullable: &'static str,
    pub required: &'static str,
    pub deprecated: &'static str,
    pub request_body: &'static str,
    pub responses: &'static str,
    pub response_headers: &'static str,
    pub content_type: &'static str,
    pub example: &'static str,
    pub schema_of_the_request_body: &'static str,
    pub schema_of_the_response_body: &'static str,
    pub other_accepted_types: &'static str,
    pub other_possible_types: &'static str,
    pub example_alternatives: &'static str,
    pub auto_generated_example_note: &'static str,
    pub schemas: &'static str,
    pub about_schemas: &'static str,
    pub properties: &'static str,
    pub security_schemes: &'static str,
    pub scheme: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

impl Texts {
    pub const ENGLISH: Texts = Texts {
        contact: "Contact",
        license: "License",
        terms_of_service: "Terms of service",
        external_docs: "More documentation",
        table_of_contents: "Table of contents",
        servers: "Servers",
        url: "URL",
        description: "Description",
        endpoints: "Endpoints",
        parameters: "Input parameters",
        no_parameters: "No parameters",
        parameter: "Parameter",
        parameter_location: "In",
        name: "Name",
        type_: "Type",
        default: "Default",
        nullable: "Nullable",
        required: "Required",
        deprecated: "Deprecated",
        request_body: "Request body",
        responses: "Responses",
        response_headers: "Response headers",
        content_type: "Content type",
        example: "Example",
        schema_of_the_request_body: "Schema of the request body",
        schema_of_the_response_body: "Schema of the response body",
        other_accepted_types: "Other accepted types",
        other_possible_types: "Other possible types",
        example_alternatives: "This example shows the first of several possible schemas. Others",
        auto_generated_example_note: "This example has been generated automatically from the schema and it is not accurate. Refer to the schema for more information.",
        schemas: "Schemas",
        about_schemas: "This section describes all types of objects handled by the API.",
        properties: "Properties",
        security_schemes: "Security schemes",
        scheme: "Scheme",
        yes: "Yes",
        no: "No",
    };

    pub fn yes_no(&self, value: bool) -> &'static str {
        if value {
            self.yes
        } else {
            self.no
        }
    }
}

impl Default for Texts {
    fn default() -> Self {
        Self::ENGLISH
    }
}
