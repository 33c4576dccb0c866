//! Shared utilities for command handlers

use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use oadoc_core::{build_model_with, load_document, ApiDocument, LoadOptions, SchemaCatalog, SynthesisConfig};
use tracing::debug;

/// Load `source`, resolve its references and build the document model
pub fn load_model(
    source: &str,
    load: &LoadOptions,
    synthesis: &SynthesisConfig,
    output: &OutputWriter,
) -> Result<(ApiDocument, SchemaCatalog)> {
    let _timer = Timer::with_details("load_model", &format!("source: {}", source));
    let spinner = output.spinner(&format!("Loading {}...", source));

    let result = load_document(source, load).and_then(|mut document| {
        if let Some(pb) = &spinner {
            pb.set_message("Building document model...");
        }
        build_model_with(&mut document, synthesis)
    });

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let (api, catalog) = result?;
    debug!(
        operations = api.operations().count(),
        schemas = api.schemas.len(),
        catalog = catalog.len(),
        "Document model built"
    );
    Ok((api, catalog))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};

    pub const PETS_YAML: &str = r##"
openapi: 3.0.3
info:
  title: Pets
  version: "2"
paths:
  /pets/{id}:
    get:
      tags: [Pets]
      parameters:
        - name: id
          in: path
          required: true
          schema:
            type: integer
            format: int64
      responses:
        '200':
          description: A pet
          content:
            application/json:
              schema:
                $ref: '#/components/schemas/Pet'
components:
  schemas:
    Pet:
      type: object
      properties:
        id:
          type: integer
          format: int64
        name:
          type: string
        owner:
          $ref: '#/components/schemas/Owner'
    Owner:
      type: object
      example:
        name: Ada
      properties:
        name:
          type: string
    Shape:
      oneOf:
        - $ref: '#/components/schemas/Pet'
        - $ref: '#/components/schemas/Owner'
"##;

    /// Write the pets document into `dir`
    pub fn pets_file(dir: &Path) -> PathBuf {
        let path = dir.join("pets.yaml");
        fs::write(&path, PETS_YAML).unwrap();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::output::tests::writer;
    use tempfile::tempdir;

    #[test]
    fn test_load_model() {
        let dir = tempdir().unwrap();
        let path = fixtures::pets_file(dir.path());
        let (output, _) = writer(OutputFormat::Human, false);

        let (api, catalog) = load_model(
            path.to_str().unwrap(),
            &LoadOptions::default(),
            &SynthesisConfig::default(),
            &output,
        )
        .unwrap();

        assert_eq!(api.info.title, "Pets");
        assert_eq!(api.schemas.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_missing_source() {
        let (output, _) = writer(OutputFormat::Human, false);
        let result = load_model(
            "does/not/exist.yaml",
            &LoadOptions::default(),
            &SynthesisConfig::default(),
            &output,
        );

        assert!(matches!(
            result,
            Err(crate::error::Error::Core(oadoc_core::Error::Load(_)))
        ));
    }
}
