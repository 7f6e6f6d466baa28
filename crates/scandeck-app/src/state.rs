// SPDX-License-Identifier: MIT
//
// Navigation state for the scan flow.
//
// A single tagged enum is the source of truth for which view is presented
// and which document it concerns — there is no way to represent a preview
// with no document selected.

use scandeck_core::types::DocumentRef;

/// Which view the user is currently in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    /// Home screen, nothing open.
    Idle,
    /// The saved-documents list.
    SavedDocuments,
    /// Per-document action sheet, opened by tapping a list row.
    ActionSheet { document: DocumentRef },
    /// Full-screen image preview. Only ever opened from the action sheet;
    /// closing returns there.
    Preview { document: DocumentRef },
    /// Extracted-text view with the recognised text (or the no-text
    /// placeholder). Closing returns to the action sheet.
    ExtractedText { document: DocumentRef, text: String },
}

/// The closed set of per-document actions offered by the action sheet.
///
/// Dispatching a fixed enum through one handler keeps every action's
/// pre/post-state transition exhaustively checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetAction {
    Preview,
    ShareImage,
    SharePdf,
    ExtractText,
    Delete,
    Close,
}

/// Where a pending delete confirmation was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOrigin {
    /// Long-press on a list row.
    List,
    /// "Delete" from the action sheet.
    Sheet,
}

/// A destructive delete awaiting user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub document: DocumentRef,
    pub origin: DeleteOrigin,
}
