// SPDX-License-Identifier: MIT
//
// Core domain types for the Scandeck document scanner.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// MIME type used when sharing a document as a plain image.
pub const MIME_JPEG: &str = "image/jpeg";

/// MIME type used when sharing a rendered PDF.
pub const MIME_PDF: &str = "application/pdf";

/// An opaque reference to one scanned page — a URI or filesystem path to the
/// image data, never the image bytes themselves.
///
/// URIs are unique within the collection by convention only. Duplicate values
/// are a known, accepted limitation: removal is by value equality and takes
/// the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentRef(pub String);

impl DocumentRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The raw URI string.
    pub fn uri(&self) -> &str {
        &self.0
    }

    /// Interpret the reference as a local filesystem path, stripping a
    /// `file://` scheme prefix if present.
    pub fn as_path(&self) -> PathBuf {
        match self.0.strip_prefix("file://") {
            Some(rest) => PathBuf::from(rest),
            None => PathBuf::from(&self.0),
        }
    }
}

impl std::fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display label for the document at `index` in the collection.
///
/// Labels are 1-based render-time positions, not stable identifiers — they
/// re-number when an earlier document is deleted.
pub fn display_label(index: usize) -> String {
    format!("Document {}", index + 1)
}

/// Native capabilities the flow may need to request from the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    Camera,
}

impl Capability {
    /// Human-readable capability name for notices and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Camera => "camera",
        }
    }
}

/// Outcome of a capability request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapabilityStatus {
    Granted,
    Denied,
}

/// Outcome of a share-sheet invocation. Dismissal by the user is a normal
/// result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Dismissed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_one_based() {
        assert_eq!(display_label(0), "Document 1");
        assert_eq!(display_label(2), "Document 3");
    }

    #[test]
    fn as_path_strips_file_scheme() {
        let doc = DocumentRef::new("file:///tmp/scan-1.jpg");
        assert_eq!(doc.as_path(), PathBuf::from("/tmp/scan-1.jpg"));

        let plain = DocumentRef::new("/tmp/scan-2.jpg");
        assert_eq!(plain.as_path(), PathBuf::from("/tmp/scan-2.jpg"));
    }

    #[test]
    fn serializes_as_bare_string() {
        let doc = DocumentRef::new("/tmp/a.jpg");
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, "\"/tmp/a.jpg\"");
    }
}
