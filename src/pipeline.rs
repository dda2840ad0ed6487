use std::path::{Path, PathBuf};

use crate::core::model::Document;
use crate::dict::{Morphology, VoikkoSpell};
use crate::error::{Result, TelelexError};
use crate::ocr::{OcrEngine, TesseractOcr};
use crate::prepare;
use crate::text::{Normalizer, Sanitizer, WordRepairer};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub work_dir: PathBuf,
}

impl PipelineConfig {
    pub fn new(input: PathBuf, work_dir: PathBuf) -> Self {
        Self { input, work_dir }
    }
}

/// Run the full pipeline on one frontpage image with the production engines.
pub fn extract_document(config: &PipelineConfig) -> Result<Document> {
    let ocr = TesseractOcr::new(config.work_dir.clone());
    let lexicon = VoikkoSpell::new();
    extract_with(&ocr, &lexicon, &config.input)
}

/// Run the full pipeline with caller-supplied engines.
///
/// image file → prepare → recognize → sanitize → repair → normalize.
pub fn extract_with(
    ocr: &dyn OcrEngine,
    lexicon: &dyn Morphology,
    input: &Path,
) -> Result<Document> {
    let image = image::open(input).map_err(|source| TelelexError::ImageLoad {
        path: input.to_path_buf(),
        source,
    })?;
    let prepared = prepare::prepare(&image)?;
    let raw_text = ocr.recognize(&prepared)?;
    Ok(postprocess(&raw_text, lexicon))
}

/// Turn raw engine text into a document of normalized word lines.
///
/// Total under a degraded dictionary: lookup failures leave tokens
/// unrepaired and unnormalized instead of failing the image.
pub fn postprocess(raw_text: &str, lexicon: &dyn Morphology) -> Document {
    let sanitizer = Sanitizer::new();
    let repairer = WordRepairer::new(lexicon);
    let normalizer = Normalizer::new(lexicon);

    let lines = sanitizer
        .sanitize(raw_text)
        .lines
        .iter()
        .map(|line| normalizer.normalize(&repairer.repair(line)))
        .collect();
    Document::new(lines)
}
