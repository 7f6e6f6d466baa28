// SPDX-License-Identifier: MIT
//
// Unified error types for Scandeck.
//
// A cancelled capture is deliberately NOT an error — collaborators report it
// as `Ok(None)` and the orchestrator treats it as a normal empty result.

use thiserror::Error;

/// Top-level error type for all Scandeck operations.
#[derive(Debug, Error)]
pub enum ScandeckError {
    // -- Capability / capture --
    #[error("capability denied: {0}")]
    CapabilityDenied(String),

    // -- Document processing --
    #[error("text recognition failed: {0}")]
    Recognition(String),

    #[error("PDF rendering failed: {0}")]
    Render(String),

    #[error("image processing failed: {0}")]
    Image(String),

    // -- Sharing --
    #[error("share failed: {0}")]
    Share(String),

    // -- Storage / persistence --
    #[error("persistence failed: {0}")]
    Persistence(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ScandeckError>;
