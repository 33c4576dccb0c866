//! End-to-end entry points: load, model, render, write

use crate::document::{ApiDocument, DocumentBuilder};
use crate::documentation::{DocGenerator, GeneratorConfig, OutputStyle};
use crate::error::{Error, Result};
use crate::loader::LoadOptions;
use crate::resolver::ResolvedDocument;
use crate::schema::SchemaCatalog;
use crate::synthesis::SynthesisConfig;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a full generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub load: LoadOptions,
    pub synthesis: SynthesisConfig,
    /// Its `style` is replaced by the style passed to [`generate_document`]
    pub generator: GeneratorConfig,
}

/// Load a document from a path or URL, inline its external references and
/// check that every reference resolves
#[instrument(skip(options))]
pub fn load_document(locator: &str, options: &LoadOptions) -> Result<ResolvedDocument> {
    let mut document = ResolvedDocument::open(locator, options)?;
    document.bundle()?;
    let references = document.verify_references()?;

    debug!(references, stats = ?document.stats(), "Document loaded");
    Ok(document)
}

/// Build the document model with default synthesis settings
pub fn build_model(document: &mut ResolvedDocument) -> Result<(ApiDocument, SchemaCatalog)> {
    build_model_with(document, &SynthesisConfig::default())
}

pub fn build_model_with(
    document: &mut ResolvedDocument,
    synthesis: &SynthesisConfig,
) -> Result<(ApiDocument, SchemaCatalog)> {
    DocumentBuilder::with_synthesis(synthesis.clone()).build_with_catalog(document)
}

/// Load `source` and render it in `style`
#[instrument(skip(style, options), fields(style = %style))]
pub fn render_document(source: &str, style: OutputStyle, options: &GenerationOptions) -> Result<String> {
    let mut document = load_document(source, &options.load)?;
    let (api, catalog) = build_model_with(&mut document, &options.synthesis)?;

    let generator = DocGenerator::with_config(GeneratorConfig {
        style,
        ..options.generator.clone()
    });
    Ok(generator.generate(&api, &catalog))
}

/// Load `source`, render it in `style` and write the result to `destination`
#[instrument(skip(destination, options), fields(destination = %destination.as_ref().display()))]
pub fn generate_document(
    source: &str,
    destination: impl AsRef<Path>,
    style: OutputStyle,
    options: &GenerationOptions,
) -> Result<()> {
    let destination = destination.as_ref();
    let text = render_document(source, style, options)?;
    write_output(destination, &text)?;

    info!(bytes = text.len(), "Documentation written");
    Ok(())
}

/// Write `text` to `path`, creating missing parent directories
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    let output_error = |source| Error::Output {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(output_error)?;
    }
    fs::write(path, text).map_err(output_error)
}
