// SPDX-License-Identifier: MIT
//
// The scan/view orchestrator.
//
// `ScanFlow` owns the navigation state machine and sequences every call into
// the document store and the platform collaborators. All mutations funnel
// through one instance processing one user action at a time; re-entrant
// triggers (rapid double-tap on "scan") are dropped via the nav-state gate
// plus the `busy` flag, so a second capture/persist sequence can never start
// while one is outstanding.
//
// Collaborator failures never escape: each one becomes a dismissible notice
// and the state machine keeps running.

use std::sync::Arc;

use scandeck_bridge::traits::PlatformBridge;
use scandeck_core::error::ScandeckError;
use scandeck_core::notice::{self, Notice};
use scandeck_core::types::{
    Capability, CapabilityStatus, DocumentRef, ShareOutcome, MIME_JPEG, MIME_PDF,
};
use scandeck_core::AppConfig;
use scandeck_store::DocumentStore;
use tracing::{debug, info};

use crate::state::{DeleteOrigin, NavState, PendingDelete, SheetAction};

/// Text shown when recognition succeeds but finds nothing.
pub const NO_TEXT_PLACEHOLDER: &str = "No text found";

pub struct ScanFlow {
    store: DocumentStore,
    bridge: Arc<dyn PlatformBridge>,
    config: AppConfig,
    nav: NavState,
    pending_delete: Option<PendingDelete>,
    notice: Option<Notice>,
    /// Held while a user action (capture, share, recognition) is in flight.
    busy: bool,
}

impl ScanFlow {
    pub fn new(store: DocumentStore, bridge: Arc<dyn PlatformBridge>, config: AppConfig) -> Self {
        Self {
            store,
            bridge,
            config,
            nav: NavState::Idle,
            pending_delete: None,
            notice: None,
            busy: false,
        }
    }

    // -- Read access for the UI ---------------------------------------------

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn documents(&self) -> &[DocumentRef] {
        self.store.documents()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // -- Scan ---------------------------------------------------------------

    /// Capture a new document: capability check → capture → append → show the
    /// saved list. Only allowed from `Idle` or `SavedDocuments`, and only
    /// while no other action is in flight.
    pub fn scan(&mut self) {
        if self.busy || !matches!(self.nav, NavState::Idle | NavState::SavedDocuments) {
            debug!("scan ignored: action in flight or wrong state");
            return;
        }
        self.busy = true;
        self.run_scan();
        self.busy = false;
    }

    fn run_scan(&mut self) {
        match self.bridge.request(Capability::Camera) {
            Ok(CapabilityStatus::Granted) => {}
            Ok(CapabilityStatus::Denied) => {
                info!("camera capability denied");
                self.notice = Some(notice::for_error(&ScandeckError::CapabilityDenied(
                    Capability::Camera.name().into(),
                )));
                return;
            }
            Err(e) => {
                self.notice = Some(notice::for_error(&e));
                return;
            }
        }

        match self.bridge.scan_document() {
            Ok(Some(document)) => match self.store.append(document) {
                // Only transition once the reference is durably written.
                Ok(_) => self.nav = NavState::SavedDocuments,
                Err(e) => self.notice = Some(notice::for_error(&e)),
            },
            Ok(None) => info!("capture cancelled by user"),
            Err(e) => self.notice = Some(notice::for_error(&e)),
        }
    }

    // -- Saved-documents list -----------------------------------------------

    pub fn open_saved_documents(&mut self) {
        if matches!(self.nav, NavState::Idle) {
            self.nav = NavState::SavedDocuments;
        }
    }

    pub fn close_saved_documents(&mut self) {
        if matches!(self.nav, NavState::SavedDocuments) {
            self.nav = NavState::Idle;
        }
    }

    /// Tap on a list row.
    pub fn select_document(&mut self, document: DocumentRef) {
        if self.busy || !matches!(self.nav, NavState::SavedDocuments) {
            return;
        }
        self.nav = NavState::ActionSheet { document };
    }

    /// Long-press on a list row: ask for delete confirmation.
    pub fn request_delete(&mut self, document: DocumentRef) {
        if self.busy || self.pending_delete.is_some() {
            return;
        }
        if !matches!(self.nav, NavState::SavedDocuments) {
            return;
        }
        self.pending_delete = Some(PendingDelete {
            document,
            origin: DeleteOrigin::List,
        });
    }

    // -- Action sheet -------------------------------------------------------

    /// Dispatch one of the fixed per-document actions. No-op outside the
    /// action sheet.
    pub fn sheet_action(&mut self, action: SheetAction) {
        if self.busy {
            return;
        }
        let NavState::ActionSheet { document } = &self.nav else {
            debug!(?action, "sheet action ignored outside action sheet");
            return;
        };
        let document = document.clone();

        match action {
            SheetAction::Preview => {
                self.nav = NavState::Preview { document };
            }

            SheetAction::ShareImage => {
                self.busy = true;
                self.share(document.uri().to_owned(), MIME_JPEG);
                // The sheet closes regardless of the share outcome.
                self.nav = NavState::SavedDocuments;
                self.busy = false;
            }

            SheetAction::SharePdf => {
                self.busy = true;
                match self.bridge.render_pdf(&document, &self.config.pdf_file_name) {
                    Ok(path) => self.share(path, MIME_PDF),
                    Err(e) => self.notice = Some(notice::for_error(&e)),
                }
                self.nav = NavState::SavedDocuments;
                self.busy = false;
            }

            SheetAction::ExtractText => {
                self.busy = true;
                match self.bridge.recognize(&document) {
                    Ok(text) => {
                        let text = if text.trim().is_empty() {
                            NO_TEXT_PLACEHOLDER.to_owned()
                        } else {
                            text
                        };
                        self.nav = NavState::ExtractedText { document, text };
                    }
                    // Recognition failure keeps the sheet open.
                    Err(e) => self.notice = Some(notice::for_error(&e)),
                }
                self.busy = false;
            }

            SheetAction::Delete => {
                if self.pending_delete.is_none() {
                    self.pending_delete = Some(PendingDelete {
                        document,
                        origin: DeleteOrigin::Sheet,
                    });
                }
            }

            SheetAction::Close => {
                self.nav = NavState::SavedDocuments;
            }
        }
    }

    fn share(&mut self, path: String, mime_type: &str) {
        match self.bridge.share_file(&path, mime_type) {
            Ok(ShareOutcome::Shared) => info!(mime_type, "document shared"),
            Ok(ShareOutcome::Dismissed) => info!(mime_type, "share dismissed by user"),
            Err(e) => self.notice = Some(notice::for_error(&e)),
        }
    }

    // -- Delete confirmation ------------------------------------------------

    /// User confirmed the pending delete: remove from the store and close
    /// every modal tied to the document.
    pub fn confirm_delete(&mut self) {
        let Some(pending) = self.pending_delete.take() else {
            return;
        };
        if let Err(e) = self.store.remove(&pending.document) {
            // Removal stays reflected in memory; only the write failed.
            self.notice = Some(notice::for_error(&e));
        }
        self.nav = NavState::SavedDocuments;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // -- Preview / extracted text -------------------------------------------

    /// Closing the preview returns to the action sheet that opened it.
    pub fn close_preview(&mut self) {
        if let NavState::Preview { document } = &self.nav {
            self.nav = NavState::ActionSheet {
                document: document.clone(),
            };
        }
    }

    /// Closing the extracted-text view returns to the action sheet.
    pub fn close_extracted_text(&mut self) {
        if let NavState::ExtractedText { document, .. } = &self.nav {
            self.nav = NavState::ActionSheet {
                document: document.clone(),
            };
        }
    }

    /// Copy the currently shown extracted text to the clipboard.
    pub fn copy_extracted_text(&mut self) {
        let NavState::ExtractedText { text, .. } = &self.nav else {
            return;
        };
        let text = text.clone();
        match self.bridge.write_text(&text) {
            Ok(()) => self.notice = Some(Notice::info("Extracted text copied to clipboard.")),
            Err(e) => self.notice = Some(notice::for_error(&e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use scandeck_bridge::traits::*;
    use scandeck_core::error::Result;
    use scandeck_core::notice::Severity;
    use scandeck_core::types::display_label;
    use scandeck_store::{DocumentStore, KeyValueStore, MemoryStore};

    use super::*;

    /// Scriptable collaborator double recording every call.
    struct MockBridge {
        grant_camera: bool,
        /// `Some(uri)` captures that document, `None` simulates user cancel.
        capture: Option<&'static str>,
        capture_calls: AtomicUsize,
        /// `Err` when `None`; otherwise the recognised text.
        recognize_text: Option<&'static str>,
        render_fails: bool,
        render_calls: Mutex<Vec<String>>,
        share_fails: bool,
        share_dismissed: bool,
        shares: Mutex<Vec<(String, String)>>,
        clipboard: Mutex<Vec<String>>,
    }

    impl Default for MockBridge {
        fn default() -> Self {
            Self {
                grant_camera: true,
                capture: Some("/scans/page-1.jpg"),
                capture_calls: AtomicUsize::new(0),
                recognize_text: Some("hello world"),
                render_fails: false,
                render_calls: Mutex::new(Vec::new()),
                share_fails: false,
                share_dismissed: false,
                shares: Mutex::new(Vec::new()),
                clipboard: Mutex::new(Vec::new()),
            }
        }
    }

    impl PlatformBridge for MockBridge {
        fn platform_name(&self) -> &str {
            "Mock"
        }
    }

    impl CapabilityGate for MockBridge {
        fn request(&self, _capability: Capability) -> Result<CapabilityStatus> {
            Ok(if self.grant_camera {
                CapabilityStatus::Granted
            } else {
                CapabilityStatus::Denied
            })
        }
    }

    impl NativeScanner for MockBridge {
        fn scan_document(&self) -> Result<Option<DocumentRef>> {
            self.capture_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.capture.map(DocumentRef::new))
        }
    }

    impl NativeTextRecognition for MockBridge {
        fn recognize(&self, _document: &DocumentRef) -> Result<String> {
            match self.recognize_text {
                Some(text) => Ok(text.to_owned()),
                None => Err(ScandeckError::Recognition("model crashed".into())),
            }
        }
    }

    impl NativePdfRender for MockBridge {
        fn render_pdf(&self, _document: &DocumentRef, file_name: &str) -> Result<String> {
            if self.render_fails {
                return Err(ScandeckError::Render("encoder failed".into()));
            }
            self.render_calls.lock().unwrap().push(file_name.to_owned());
            Ok(format!("/exports/{file_name}.pdf"))
        }
    }

    impl NativeShare for MockBridge {
        fn share_file(&self, path: &str, mime_type: &str) -> Result<ShareOutcome> {
            if self.share_fails {
                return Err(ScandeckError::Share("sheet failed to open".into()));
            }
            self.shares
                .lock()
                .unwrap()
                .push((path.to_owned(), mime_type.to_owned()));
            Ok(if self.share_dismissed {
                ShareOutcome::Dismissed
            } else {
                ShareOutcome::Shared
            })
        }
    }

    impl NativeClipboard for MockBridge {
        fn write_text(&self, text: &str) -> Result<()> {
            self.clipboard.lock().unwrap().push(text.to_owned());
            Ok(())
        }
    }

    /// Key-value backend whose writes always fail.
    struct BrokenKv;

    impl KeyValueStore for BrokenKv {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(ScandeckError::Persistence("disk full".into()))
        }
    }

    fn flow_with(bridge: Arc<MockBridge>) -> ScanFlow {
        let store = DocumentStore::open(Box::new(MemoryStore::new()));
        ScanFlow::new(store, bridge, AppConfig::default())
    }

    /// Drive a fresh flow to the action sheet for its first scanned document.
    fn flow_at_sheet(bridge: Arc<MockBridge>) -> ScanFlow {
        let mut flow = flow_with(bridge);
        flow.scan();
        let doc = flow.documents()[0].clone();
        flow.select_document(doc);
        assert!(matches!(flow.nav(), NavState::ActionSheet { .. }));
        flow
    }

    #[test]
    fn denied_capability_never_invokes_capture() {
        let bridge = Arc::new(MockBridge {
            grant_camera: false,
            ..Default::default()
        });
        let mut flow = flow_with(bridge.clone());

        flow.scan();

        assert_eq!(bridge.capture_calls.load(Ordering::SeqCst), 0);
        assert!(flow.documents().is_empty());
        assert_eq!(*flow.nav(), NavState::Idle);
        let notice = flow.notice().expect("denial surfaces a notice");
        assert_eq!(notice.severity, Severity::ActionRequired);
    }

    #[test]
    fn cancelled_capture_changes_nothing() {
        let bridge = Arc::new(MockBridge {
            capture: None,
            ..Default::default()
        });
        let mut flow = flow_with(bridge.clone());

        flow.scan();
        assert!(flow.documents().is_empty());
        assert_eq!(*flow.nav(), NavState::Idle);
        assert!(flow.notice().is_none());

        // Same from the saved-documents list.
        flow.open_saved_documents();
        flow.scan();
        assert!(flow.documents().is_empty());
        assert_eq!(*flow.nav(), NavState::SavedDocuments);
    }

    #[test]
    fn successful_scan_appends_and_shows_saved_list() {
        let mut flow = flow_with(Arc::new(MockBridge::default()));

        flow.scan();

        assert_eq!(flow.documents().len(), 1);
        assert_eq!(flow.documents()[0].uri(), "/scans/page-1.jpg");
        assert_eq!(*flow.nav(), NavState::SavedDocuments);
    }

    #[test]
    fn scans_append_in_order_with_one_based_labels() {
        let mut flow = flow_with(Arc::new(MockBridge::default()));
        flow.scan();
        flow.scan();

        assert_eq!(flow.documents().len(), 2);
        let labels: Vec<String> = (0..flow.documents().len()).map(display_label).collect();
        assert_eq!(labels, ["Document 1", "Document 2"]);
    }

    #[test]
    fn scan_is_dropped_while_an_action_is_in_flight() {
        let bridge = Arc::new(MockBridge::default());
        let mut flow = flow_with(bridge.clone());

        // Simulate the window where a capture is still outstanding.
        flow.busy = true;
        flow.scan();
        assert_eq!(bridge.capture_calls.load(Ordering::SeqCst), 0);
        assert!(flow.documents().is_empty());

        // Once it settles, exactly one capture/append per trigger.
        flow.busy = false;
        flow.scan();
        assert_eq!(bridge.capture_calls.load(Ordering::SeqCst), 1);
        assert_eq!(flow.documents().len(), 1);
    }

    #[test]
    fn scan_is_dropped_outside_idle_and_saved_list() {
        let bridge = Arc::new(MockBridge::default());
        let mut flow = flow_at_sheet(bridge.clone());
        let calls_before = bridge.capture_calls.load(Ordering::SeqCst);

        flow.scan();
        assert_eq!(bridge.capture_calls.load(Ordering::SeqCst), calls_before);
    }

    #[test]
    fn failed_persist_surfaces_notice_and_blocks_transition() {
        let bridge = Arc::new(MockBridge::default());
        let store = DocumentStore::open(Box::new(BrokenKv));
        let mut flow = ScanFlow::new(store, bridge, AppConfig::default());

        flow.scan();

        assert!(flow.documents().is_empty(), "unpersisted ref must not be visible");
        assert_eq!(*flow.nav(), NavState::Idle, "no optimistic transition");
        assert!(flow.notice().is_some());
    }

    #[test]
    fn select_opens_sheet_and_close_returns_to_list() {
        let mut flow = flow_at_sheet(Arc::new(MockBridge::default()));
        flow.sheet_action(SheetAction::Close);
        assert_eq!(*flow.nav(), NavState::SavedDocuments);
    }

    #[test]
    fn preview_round_trips_back_to_the_sheet() {
        let mut flow = flow_at_sheet(Arc::new(MockBridge::default()));
        let doc = flow.documents()[0].clone();

        flow.sheet_action(SheetAction::Preview);
        assert_eq!(*flow.nav(), NavState::Preview { document: doc.clone() });

        flow.close_preview();
        assert_eq!(*flow.nav(), NavState::ActionSheet { document: doc });
    }

    #[test]
    fn share_image_closes_sheet_whatever_the_outcome() {
        // Dismissed by the user: no notice.
        let bridge = Arc::new(MockBridge {
            share_dismissed: true,
            ..Default::default()
        });
        let mut flow = flow_at_sheet(bridge.clone());
        flow.sheet_action(SheetAction::ShareImage);
        assert_eq!(*flow.nav(), NavState::SavedDocuments);
        assert!(flow.notice().is_none());
        let shares = bridge.shares.lock().unwrap();
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].1, MIME_JPEG);
        drop(shares);

        // Failure: notice, sheet still closes.
        let bridge = Arc::new(MockBridge {
            share_fails: true,
            ..Default::default()
        });
        let mut flow = flow_at_sheet(bridge);
        flow.sheet_action(SheetAction::ShareImage);
        assert_eq!(*flow.nav(), NavState::SavedDocuments);
        assert!(flow.notice().is_some());
    }

    #[test]
    fn share_pdf_renders_with_configured_name_then_shares() {
        let bridge = Arc::new(MockBridge::default());
        let mut flow = flow_at_sheet(bridge.clone());

        flow.sheet_action(SheetAction::SharePdf);

        assert_eq!(
            *bridge.render_calls.lock().unwrap(),
            vec!["scanned_document".to_owned()]
        );
        let shares = bridge.shares.lock().unwrap();
        assert_eq!(shares[0].0, "/exports/scanned_document.pdf");
        assert_eq!(shares[0].1, MIME_PDF);
        assert_eq!(*flow.nav(), NavState::SavedDocuments);
    }

    #[test]
    fn share_pdf_render_failure_skips_share_but_closes_sheet() {
        let bridge = Arc::new(MockBridge {
            render_fails: true,
            ..Default::default()
        });
        let mut flow = flow_at_sheet(bridge.clone());

        flow.sheet_action(SheetAction::SharePdf);

        assert!(bridge.shares.lock().unwrap().is_empty());
        assert!(flow.notice().is_some());
        assert_eq!(*flow.nav(), NavState::SavedDocuments);
    }

    #[test]
    fn empty_recognition_result_shows_placeholder() {
        let bridge = Arc::new(MockBridge {
            recognize_text: Some("   \n"),
            ..Default::default()
        });
        let mut flow = flow_at_sheet(bridge);
        let doc = flow.documents()[0].clone();

        flow.sheet_action(SheetAction::ExtractText);

        assert_eq!(
            *flow.nav(),
            NavState::ExtractedText {
                document: doc,
                text: NO_TEXT_PLACEHOLDER.to_owned(),
            }
        );
    }

    #[test]
    fn recognition_failure_keeps_the_sheet_open() {
        let bridge = Arc::new(MockBridge {
            recognize_text: None,
            ..Default::default()
        });
        let mut flow = flow_at_sheet(bridge);

        flow.sheet_action(SheetAction::ExtractText);

        assert!(matches!(flow.nav(), NavState::ActionSheet { .. }));
        assert!(flow.notice().is_some());
    }

    #[test]
    fn extracted_text_close_returns_to_sheet_and_copy_hits_clipboard() {
        let bridge = Arc::new(MockBridge::default());
        let mut flow = flow_at_sheet(bridge.clone());
        let doc = flow.documents()[0].clone();

        flow.sheet_action(SheetAction::ExtractText);
        assert!(matches!(flow.nav(), NavState::ExtractedText { .. }));

        flow.copy_extracted_text();
        assert_eq!(*bridge.clipboard.lock().unwrap(), vec!["hello world".to_owned()]);
        assert_eq!(flow.notice().unwrap().severity, Severity::Info);

        flow.close_extracted_text();
        assert_eq!(*flow.nav(), NavState::ActionSheet { document: doc });
    }

    #[test]
    fn sheet_delete_requires_confirmation_then_closes_everything() {
        let mut flow = flow_at_sheet(Arc::new(MockBridge::default()));

        flow.sheet_action(SheetAction::Delete);
        let pending = flow.pending_delete().expect("confirmation pending");
        assert_eq!(pending.origin, DeleteOrigin::Sheet);
        // Still in the sheet until the user decides.
        assert!(matches!(flow.nav(), NavState::ActionSheet { .. }));

        // Cancel keeps the document and the sheet.
        flow.cancel_delete();
        assert!(flow.pending_delete().is_none());
        assert_eq!(flow.documents().len(), 1);
        assert!(matches!(flow.nav(), NavState::ActionSheet { .. }));

        // Confirm removes and returns to the list.
        flow.sheet_action(SheetAction::Delete);
        flow.confirm_delete();
        assert!(flow.documents().is_empty());
        assert_eq!(*flow.nav(), NavState::SavedDocuments);
    }

    #[test]
    fn list_long_press_delete_renumbers_labels() {
        let mut flow = flow_with(Arc::new(MockBridge::default()));
        // Build ["a", "b", "c"] directly through the store path used by scan.
        for uri in ["a", "b", "c"] {
            flow.store.append(DocumentRef::new(uri)).unwrap();
        }
        flow.open_saved_documents();

        flow.request_delete(DocumentRef::new("b"));
        assert_eq!(flow.pending_delete().unwrap().origin, DeleteOrigin::List);
        flow.confirm_delete();

        let uris: Vec<&str> = flow.documents().iter().map(|d| d.uri()).collect();
        assert_eq!(uris, ["a", "c"]);
        assert_eq!(*flow.nav(), NavState::SavedDocuments);
        let labels: Vec<String> = (0..flow.documents().len()).map(display_label).collect();
        assert_eq!(labels, ["Document 1", "Document 2"]);
    }

    #[test]
    fn notices_are_dismissible() {
        let bridge = Arc::new(MockBridge {
            grant_camera: false,
            ..Default::default()
        });
        let mut flow = flow_with(bridge);
        flow.scan();
        assert!(flow.notice().is_some());

        flow.dismiss_notice();
        assert!(flow.notice().is_none());
    }
}
