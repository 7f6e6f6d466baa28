// SPDX-License-Identifier: MIT
//
// The Document Store — single source of truth for the ordered collection of
// scanned-document references.
//
// Persistence format: one JSON array of URI strings under the fixed key
// `scannedDocuments`. No per-document metadata, no version field; the
// encoding is read-compatible with data written by earlier releases.

use scandeck_core::error::{Result, ScandeckError};
use scandeck_core::types::DocumentRef;
use tracing::{info, warn};

use crate::kv::KeyValueStore;

/// Storage key holding the serialized collection.
pub const STORAGE_KEY: &str = "scannedDocuments";

/// Durable, ordered, insertion-order collection of document references.
///
/// Invariant: immediately after every successful mutation the in-memory
/// collection equals the persisted one. All mutations are whole-collection
/// read-modify-write sequences and must be funnelled through a single owner
/// (the orchestrator), which processes one user action at a time.
pub struct DocumentStore {
    kv: Box<dyn KeyValueStore>,
    documents: Vec<DocumentRef>,
}

impl DocumentStore {
    /// Load the persisted collection from `kv`.
    ///
    /// Absent or unparseable stored data yields an empty collection — logged,
    /// never surfaced to the user as an error.
    pub fn open(kv: Box<dyn KeyValueStore>) -> Self {
        let documents = match kv.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<DocumentRef>>(&raw) {
                Ok(docs) => docs,
                Err(e) => {
                    warn!(error = %e, "stored document list unparseable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "stored document list unreadable, starting empty");
                Vec::new()
            }
        };
        info!(count = documents.len(), "document store loaded");
        Self { kv, documents }
    }

    /// The current collection, in insertion order.
    pub fn documents(&self) -> &[DocumentRef] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Append `document` to the end of the collection.
    ///
    /// Persist-then-commit: the new collection is written out first and only
    /// becomes visible in memory once the write succeeded. A failed write
    /// returns `Persistence` and leaves the collection exactly as it was —
    /// callers never observe a reference that was not durably written.
    pub fn append(&mut self, document: DocumentRef) -> Result<&[DocumentRef]> {
        let mut next = self.documents.clone();
        next.push(document);
        self.persist(&next)?;
        self.documents = next;
        info!(count = self.documents.len(), "document appended");
        Ok(&self.documents)
    }

    /// Remove the first occurrence of `document` (by value equality).
    ///
    /// A reference that is not present is a silent no-op, not an error. If
    /// URIs repeat, only the first occurrence goes — accepted limitation.
    ///
    /// The removal is applied in memory before the write; a failed write
    /// surfaces `Persistence` but is NOT rolled back (see DESIGN.md).
    pub fn remove(&mut self, document: &DocumentRef) -> Result<&[DocumentRef]> {
        let Some(pos) = self.documents.iter().position(|d| d == document) else {
            return Ok(&self.documents);
        };
        self.documents.remove(pos);
        info!(count = self.documents.len(), "document removed");
        self.persist_current()?;
        Ok(&self.documents)
    }

    fn persist(&self, documents: &[DocumentRef]) -> Result<()> {
        let raw = serde_json::to_string(documents)
            .map_err(|e| ScandeckError::Persistence(format!("encode collection: {e}")))?;
        self.kv.set(STORAGE_KEY, &raw)
    }

    fn persist_current(&self) -> Result<()> {
        self.persist(&self.documents)
    }
}
