// SPDX-License-Identifier: MIT
//
// Platform-agnostic trait definitions for native capabilities.
//
// One trait per capability so implementations can be composed; the
// `PlatformBridge` supertrait bundles them for the orchestrator.

use scandeck_core::error::Result;
use scandeck_core::types::{Capability, CapabilityStatus, DocumentRef, ShareOutcome};

/// Unified bridge grouping every native capability the scan flow uses.
pub trait PlatformBridge:
    CapabilityGate
    + NativeScanner
    + NativeTextRecognition
    + NativePdfRender
    + NativeShare
    + NativeClipboard
    + Send
    + Sync
{
    /// Human-readable platform name (e.g. "iOS 17", "Android 14").
    fn platform_name(&self) -> &str;
}

/// Ask the host platform for a capability before using it.
pub trait CapabilityGate {
    /// Request `capability` from the host. `Denied` is a normal outcome, not
    /// an error; errors are reserved for the request itself failing.
    fn request(&self, capability: Capability) -> Result<CapabilityStatus>;
}

/// Capture one document page with the device camera.
pub trait NativeScanner {
    /// Launch the capture UI and return a reference to the scanned image.
    /// Returns `Ok(None)` if the user cancelled.
    fn scan_document(&self) -> Result<Option<DocumentRef>>;
}

/// On-device text recognition.
pub trait NativeTextRecognition {
    /// Recognise text in the referenced image. An empty string means no text
    /// was found; failures are `ScandeckError::Recognition`.
    fn recognize(&self, document: &DocumentRef) -> Result<String>;
}

/// Render a scanned image into a shareable PDF file.
pub trait NativePdfRender {
    /// Render `document` to a PDF named `file_name` (no extension) and
    /// return the path of the written file.
    fn render_pdf(&self, document: &DocumentRef, file_name: &str) -> Result<String>;
}

/// Share content via the OS share sheet.
pub trait NativeShare {
    /// Present the share sheet for the file at `path`. The user dismissing
    /// the sheet is `Ok(ShareOutcome::Dismissed)`, not an error.
    fn share_file(&self, path: &str, mime_type: &str) -> Result<ShareOutcome>;
}

/// Write text to the system clipboard.
pub trait NativeClipboard {
    fn write_text(&self, text: &str) -> Result<()>;
}
