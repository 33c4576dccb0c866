//! Example command handler

use super::utils::load_model;
use crate::cli::ExampleArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use oadoc_core::ExampleSynthesizer;
use tracing::instrument;

/// Handle the example command
#[instrument(skip(config, output), fields(source = %args.source, schema = %args.schema))]
pub fn handle_example(args: ExampleArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let mut synthesis = config.synthesis_config();
    if let Some(max_depth) = args.max_depth {
        synthesis.max_depth = max_depth;
    }

    let (api, catalog) = load_model(&args.source, &config.load_options(), &synthesis, output)?;

    let schema = api.schemas.get(&args.schema).ok_or_else(|| Error::SchemaNotFound {
        name: args.schema.clone(),
        available: api
            .sorted_schemas()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect(),
    })?;

    let example = ExampleSynthesizer::with_config(&catalog, synthesis).synthesize(schema);
    output.example(&example)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::handlers::utils::fixtures;
    use crate::output::tests::writer;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    fn run(schema: &str, format: OutputFormat, max_depth: Option<usize>) -> Result<String> {
        let dir = tempdir().unwrap();
        let source = fixtures::pets_file(dir.path());
        let (mut output, buffer) = writer(format, false);

        handle_example(
            ExampleArgs {
                source: source.to_str().unwrap().to_string(),
                schema: schema.to_string(),
                max_depth,
            },
            &Config::default(),
            &mut output,
        )?;
        Ok(buffer.contents())
    }

    #[test]
    fn test_synthesized_example_as_json() {
        let printed = run("Pet", OutputFormat::Json, None).unwrap();
        let example: Value = serde_json::from_str(printed.trim()).unwrap();

        assert_eq!(example["provenance"], "synthesized");
        // Owner carries an explicit example, used as is
        assert_eq!(
            example["value"],
            json!({"id": 0, "name": "string", "owner": {"name": "Ada"}})
        );
    }

    #[test]
    fn test_explicit_example_in_human_format() {
        let printed = run("Owner", OutputFormat::Human, None).unwrap();
        assert!(printed.contains("\"name\": \"Ada\""));
        assert!(printed.contains("Provenance: explicit"));
    }

    #[test]
    fn test_composition_reports_alternatives() {
        let printed = run("Shape", OutputFormat::Human, None).unwrap();
        assert!(printed.contains("Alternatives: Owner"));
        assert!(printed.contains("Warnings:"));
    }

    #[test]
    fn test_depth_bound_from_arguments() {
        let printed = run("Pet", OutputFormat::Json, Some(0)).unwrap();
        let example: Value = serde_json::from_str(printed.trim()).unwrap();
        assert_eq!(example["value"]["owner"], json!({}));
        assert_eq!(example["warnings"][0]["kind"], "depth_limit_reached");
    }

    #[test]
    fn test_unknown_schema() {
        let error = run("Cat", OutputFormat::Human, None).unwrap_err();
        match error {
            Error::SchemaNotFound { name, available } => {
                assert_eq!(name, "Cat");
                assert_eq!(available, ["Owner", "Pet", "Shape"]);
            }
            other => panic!("expected SchemaNotFound, got {other:?}"),
        }
    }
}
