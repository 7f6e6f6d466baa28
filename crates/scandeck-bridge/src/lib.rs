// SPDX-License-Identifier: MIT
//
// Scandeck — Native platform capability abstractions.
//
// The orchestrator consumes every native capability (camera capture, text
// recognition, PDF rendering, share sheet, clipboard) through the narrow
// traits defined here. Mobile backends implement them against the platform
// SDKs; the stub stands in everywhere else so the flow never depends on a
// concrete plugin.

pub mod stub;
pub mod traits;

/// The bridge implementation for the current platform.
///
/// Desktop builds substitute their own bridge (file dialog capture, local
/// OCR/PDF) — see the app crate. This default is the no-capability stub.
pub fn platform_bridge() -> Box<dyn traits::PlatformBridge> {
    Box::new(stub::StubBridge)
}
