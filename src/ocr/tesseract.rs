use std::fs;
use std::path::PathBuf;
use std::process::Command;

use image::DynamicImage;

use crate::error::{Result, TelelexError};
use crate::ocr::OcrEngine;

/// Adapter around the external `tesseract` binary.
///
/// The prepared frame is written into `work_dir` and recognized with a fixed
/// language model and sparse-text page segmentation, which fits a handful of
/// disjoint headline lines better than document layout analysis.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    work_dir: PathBuf,
    binary: PathBuf,
    lang: String,
    psm: u32,
}

impl TesseractOcr {
    pub fn new(work_dir: PathBuf) -> Self {
        Self {
            work_dir,
            binary: PathBuf::from("tesseract"),
            lang: "fin".to_string(),
            psm: 11,
        }
    }

    pub fn with_binary(mut self, binary: PathBuf) -> Self {
        self.binary = binary;
        self
    }

    pub fn with_lang(mut self, lang: String) -> Self {
        self.lang = lang;
        self
    }

    pub fn with_psm(mut self, psm: u32) -> Self {
        self.psm = psm;
        self
    }

    fn write_input(&self, image: &DynamicImage) -> Result<PathBuf> {
        fs::create_dir_all(&self.work_dir).map_err(|e| TelelexError::OcrUnavailable {
            reason: format!("cannot create work dir {}: {e}", self.work_dir.display()),
        })?;
        let path = self.work_dir.join("ocr_input.png");
        image.save(&path).map_err(|e| TelelexError::OcrUnavailable {
            reason: format!("cannot write engine input {}: {e}", path.display()),
        })?;
        Ok(path)
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, image: &DynamicImage) -> Result<String> {
        let input = self.write_input(image)?;

        let output = Command::new(&self.binary)
            .arg(&input)
            .arg("stdout")
            .arg("-l")
            .arg(&self.lang)
            .arg("--psm")
            .arg(self.psm.to_string())
            .output()
            .map_err(|e| TelelexError::OcrUnavailable {
                reason: format!("failed to invoke tesseract: {e}; is it installed?"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TelelexError::OcrUnavailable {
                reason: format!("tesseract exited with {}: {}", output.status, stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
