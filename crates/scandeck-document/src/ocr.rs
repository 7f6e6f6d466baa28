// SPDX-License-Identifier: MIT
//
// On-device text extraction using the `ocrs` engine (pure-Rust OCR backed by
// neural network models executed via `rten`).
//
// Requires two model files, downloadable once via `ocrs-cli`:
//   - `text-detection.rten` — locates text regions
//   - `text-recognition.rten` — decodes characters
//
// Default location is `$XDG_CACHE_HOME/ocrs` (usually `~/.cache/ocrs`).
//
// NOTE: `ocrs`/`rten` must be compiled in release mode; debug builds are
// 10-100x slower.

use std::path::{Path, PathBuf};

use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;
use scandeck_core::error::{Result, ScandeckError};
use tracing::{debug, info};

const DETECTION_MODEL: &str = "text-detection.rten";
const RECOGNITION_MODEL: &str = "text-recognition.rten";

fn default_model_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
        PathBuf::from(xdg).join("ocrs")
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".cache").join("ocrs")
    } else {
        PathBuf::from("ocrs-models")
    }
}

/// Model file locations for the extractor.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    pub detection_model: PathBuf,
    pub recognition_model: PathBuf,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self::from_dir(default_model_dir())
    }
}

impl OcrConfig {
    /// Point at a directory containing both model files under their
    /// well-known names.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            detection_model: dir.join(DETECTION_MODEL),
            recognition_model: dir.join(RECOGNITION_MODEL),
        }
    }

    /// Check both model files exist before paying the load cost.
    pub fn validate(&self) -> Result<()> {
        for path in [&self.detection_model, &self.recognition_model] {
            if !path.exists() {
                return Err(ScandeckError::Recognition(format!(
                    "OCR model not found at {}; run `ocrs-cli` once to download models",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

/// Extracts text from scanned document images.
///
/// Model loading is the expensive step — construct once and reuse across
/// documents.
pub struct TextExtractor {
    engine: OcrEngine,
}

impl TextExtractor {
    pub fn new(config: OcrConfig) -> Result<Self> {
        config.validate()?;

        info!(
            detection = %config.detection_model.display(),
            recognition = %config.recognition_model.display(),
            "loading OCR models"
        );
        let detection = Model::load_file(&config.detection_model).map_err(|e| {
            ScandeckError::Recognition(format!(
                "load detection model {}: {e}",
                config.detection_model.display()
            ))
        })?;
        let recognition = Model::load_file(&config.recognition_model).map_err(|e| {
            ScandeckError::Recognition(format!(
                "load recognition model {}: {e}",
                config.recognition_model.display()
            ))
        })?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection),
            recognition_model: Some(recognition),
            ..Default::default()
        })
        .map_err(|e| ScandeckError::Recognition(format!("initialise OCR engine: {e}")))?;

        info!("OCR engine ready");
        Ok(Self { engine })
    }

    /// Extract all text from the image at `path`.
    ///
    /// Returns the recognised text as one newline-separated string; an image
    /// with no recognisable text yields an empty string.
    pub fn extract_from_file(&self, path: &Path) -> Result<String> {
        let decoded = image::open(path)
            .map_err(|e| ScandeckError::Image(format!("decode {}: {e}", path.display())))?;
        self.extract(&decoded)
    }

    /// Extract all text from an already-decoded image.
    pub fn extract(&self, image: &image::DynamicImage) -> Result<String> {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();

        let source = ImageSource::from_bytes(rgb.as_raw(), (width, height)).map_err(|e| {
            ScandeckError::Recognition(format!("prepare image source ({width}x{height}): {e}"))
        })?;
        let input = self
            .engine
            .prepare_input(source)
            .map_err(|e| ScandeckError::Recognition(format!("OCR preprocessing: {e}")))?;

        let text = self
            .engine
            .get_text(&input)
            .map_err(|e| ScandeckError::Recognition(format!("OCR recognition: {e}")))?;

        debug!(
            lines = text.lines().count(),
            chars = text.len(),
            "text extraction complete"
        );
        Ok(text)
    }
}
