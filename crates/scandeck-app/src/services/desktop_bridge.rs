// SPDX-License-Identifier: MIT
//
// Desktop implementation of the platform bridge.
//
// There is no camera, share sheet, or ML Kit on the desktop: capture opens a
// file dialog for an image (the same stand-in a developer uses to exercise
// the flow), text recognition and PDF rendering run locally through
// scandeck-document, and share/clipboard report `PlatformUnavailable`.

use std::path::PathBuf;

use scandeck_bridge::traits::*;
use scandeck_core::error::{Result, ScandeckError};
use scandeck_core::types::{Capability, CapabilityStatus, DocumentRef, ShareOutcome};
use scandeck_core::AppConfig;
use tracing::{info, warn};

#[cfg(feature = "ocr")]
use std::sync::Mutex;

#[cfg(feature = "ocr")]
use scandeck_document::ocr::{OcrConfig, TextExtractor};

pub struct DesktopBridge {
    export_dir: PathBuf,
    #[cfg(feature = "ocr")]
    model_dir: Option<PathBuf>,
    /// Lazily constructed — model loading is expensive and OCR may never be
    /// used in a session.
    #[cfg(feature = "ocr")]
    extractor: Mutex<Option<TextExtractor>>,
}

impl DesktopBridge {
    #[cfg_attr(not(feature = "ocr"), allow(unused_variables))]
    pub fn new(config: &AppConfig, export_dir: PathBuf) -> Self {
        Self {
            export_dir,
            #[cfg(feature = "ocr")]
            model_dir: config.ocr_model_dir.clone(),
            #[cfg(feature = "ocr")]
            extractor: Mutex::new(None),
        }
    }
}

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop"
    }
}

impl CapabilityGate for DesktopBridge {
    fn request(&self, capability: Capability) -> Result<CapabilityStatus> {
        // The file dialog needs no runtime permission.
        info!(capability = capability.name(), "capability granted (desktop)");
        Ok(CapabilityStatus::Granted)
    }
}

impl NativeScanner for DesktopBridge {
    fn scan_document(&self) -> Result<Option<DocumentRef>> {
        let picked = rfd::FileDialog::new()
            .set_title("Select a scanned page")
            .add_filter("Images", &["jpg", "jpeg", "png", "tiff", "tif", "bmp"])
            .pick_file();

        match picked {
            Some(path) => {
                info!(path = %path.display(), "image selected as scanned page");
                Ok(Some(DocumentRef::new(path.to_string_lossy().into_owned())))
            }
            None => Ok(None),
        }
    }
}

impl NativeTextRecognition for DesktopBridge {
    #[cfg(feature = "ocr")]
    fn recognize(&self, document: &DocumentRef) -> Result<String> {
        let mut guard = self.extractor.lock().expect("extractor lock poisoned");
        if guard.is_none() {
            let config = match &self.model_dir {
                Some(dir) => OcrConfig::from_dir(dir),
                None => OcrConfig::default(),
            };
            *guard = Some(TextExtractor::new(config)?);
        }
        let extractor = guard.as_ref().expect("extractor initialised above");
        extractor.extract_from_file(&document.as_path())
    }

    #[cfg(not(feature = "ocr"))]
    fn recognize(&self, _document: &DocumentRef) -> Result<String> {
        warn!("text recognition requested but the ocr feature is disabled");
        Err(ScandeckError::PlatformUnavailable)
    }
}

impl NativePdfRender for DesktopBridge {
    fn render_pdf(&self, document: &DocumentRef, file_name: &str) -> Result<String> {
        let out = self.export_dir.join(format!("{file_name}.pdf"));
        scandeck_document::pdf::write_image_pdf(&document.as_path(), file_name, &out)?;
        Ok(out.to_string_lossy().into_owned())
    }
}

impl NativeShare for DesktopBridge {
    fn share_file(&self, path: &str, mime_type: &str) -> Result<ShareOutcome> {
        warn!(path, mime_type, "no share sheet on desktop");
        Err(ScandeckError::PlatformUnavailable)
    }
}

impl NativeClipboard for DesktopBridge {
    fn write_text(&self, _text: &str) -> Result<()> {
        warn!("no clipboard bridge on desktop");
        Err(ScandeckError::PlatformUnavailable)
    }
}
