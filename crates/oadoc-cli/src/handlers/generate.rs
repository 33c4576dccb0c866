//! Gen-docs command handler

use super::utils::load_model;
use crate::cli::{GenDocsArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use oadoc_core::pipeline::write_output;
use oadoc_core::DocGenerator;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, instrument};

/// What a gen-docs run produced
#[derive(Debug, Serialize)]
struct GenerationSummary<'a> {
    source: &'a str,
    destination: String,
    style: &'static str,
    operations: usize,
    schemas: usize,
    bytes: usize,
}

/// Handle the gen-docs command
#[instrument(skip(config, output), fields(source = %args.source, destination = %args.destination.display()))]
pub fn handle_gen_docs(args: GenDocsArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let timer = Timer::with_details("gen_docs_command", &format!("source: {}", args.source));

    let style = match args.style {
        Some(style) => style,
        None => config.style()?,
    };

    let mut load = config.load_options();
    if let Some(timeout) = args.timeout {
        load.http_timeout = Duration::from_secs(timeout);
    }

    let mut synthesis = config.synthesis_config();
    if let Some(max_depth) = args.max_depth {
        synthesis.max_depth = max_depth;
    }

    let mut generator = config.generator_config(style);
    generator.include_toc &= !args.no_toc;
    generator.include_examples &= !args.no_examples;
    generator.include_deprecated &= !args.no_deprecated;

    output.info(&format!("Generating {} documentation for {}", style, args.source))?;
    let (api, catalog) = load_model(&args.source, &load, &synthesis, output)?;
    if api.operations().next().is_none() {
        output.warning(&format!("No operations found in {}", args.source))?;
    }

    let text = DocGenerator::with_config(generator).generate(&api, &catalog);
    write_output(&args.destination, &text)?;
    info!(
        bytes = text.len(),
        style = %style,
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Documentation written"
    );

    let summary = GenerationSummary {
        source: &args.source,
        destination: args.destination.display().to_string(),
        style: style.name(),
        operations: api.operations().count(),
        schemas: api.schemas.len(),
        bytes: text.len(),
    };

    if output.format() == OutputFormat::Human {
        output.success(&format!("✓ Documentation written to {}", summary.destination))?;
        output.section("Summary")?;
        output.table(
            &["Style", "Operations", "Schemas", "Bytes"],
            vec![vec![
                summary.style.to_string(),
                summary.operations.to_string(),
                summary.schemas.to_string(),
                summary.bytes.to_string(),
            ]],
        )?;
    } else {
        output.data(&summary)?;
    }

    timer.finish();
    Ok(())
}
