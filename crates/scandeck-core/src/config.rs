// SPDX-License-Identifier: MIT
//
// Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persistent application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base file name (without extension) for PDFs rendered by "Share as PDF".
    pub pdf_file_name: String,
    /// Directory holding the OCR model files; `None` uses the default cache
    /// location.
    pub ocr_model_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pdf_file_name: "scanned_document".into(),
            ocr_model_dir: None,
        }
    }
}
