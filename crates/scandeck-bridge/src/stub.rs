// SPDX-License-Identifier: MIT
//
// Stub bridge for builds where no native capabilities exist (CI, headless).
//
// The capability gate reports `Denied` — there is no camera to grant — and
// every other method returns `PlatformUnavailable`.

use scandeck_core::error::{Result, ScandeckError};
use scandeck_core::types::{Capability, CapabilityStatus, DocumentRef, ShareOutcome};

use crate::traits::*;

/// No-capability bridge.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Stub"
    }
}

impl CapabilityGate for StubBridge {
    fn request(&self, capability: Capability) -> Result<CapabilityStatus> {
        tracing::warn!(capability = capability.name(), "capability requested on stub bridge");
        Ok(CapabilityStatus::Denied)
    }
}

impl NativeScanner for StubBridge {
    fn scan_document(&self) -> Result<Option<DocumentRef>> {
        tracing::warn!("NativeScanner::scan_document called on stub bridge");
        Err(ScandeckError::PlatformUnavailable)
    }
}

impl NativeTextRecognition for StubBridge {
    fn recognize(&self, _document: &DocumentRef) -> Result<String> {
        tracing::warn!("NativeTextRecognition::recognize called on stub bridge");
        Err(ScandeckError::PlatformUnavailable)
    }
}

impl NativePdfRender for StubBridge {
    fn render_pdf(&self, _document: &DocumentRef, _file_name: &str) -> Result<String> {
        tracing::warn!("NativePdfRender::render_pdf called on stub bridge");
        Err(ScandeckError::PlatformUnavailable)
    }
}

impl NativeShare for StubBridge {
    fn share_file(&self, _path: &str, _mime_type: &str) -> Result<ShareOutcome> {
        tracing::warn!("NativeShare::share_file called on stub bridge");
        Err(ScandeckError::PlatformUnavailable)
    }
}

impl NativeClipboard for StubBridge {
    fn write_text(&self, _text: &str) -> Result<()> {
        tracing::warn!("NativeClipboard::write_text called on stub bridge");
        Err(ScandeckError::PlatformUnavailable)
    }
}
