// SPDX-License-Identifier: MIT
//
// Saved-documents list — full-screen layer under the per-document modals.
//
// Rows are labelled "Document N" by render-time position; labels re-number
// after a deletion. Right-click on a row stands in for the mobile
// long-press delete gesture.

use dioxus::prelude::*;

use scandeck_core::types::{display_label, DocumentRef};

use crate::flow::ScanFlow;
use crate::state::NavState;

#[component]
pub fn SavedDocuments() -> Element {
    let mut flow = use_context::<Signal<ScanFlow>>();

    // The list stays mounted underneath the action sheet, preview, and
    // extracted-text modals.
    if matches!(*flow.read().nav(), NavState::Idle) {
        return rsx! {};
    }
    let documents: Vec<DocumentRef> = flow.read().documents().to_vec();

    rsx! {
        div { style: "position: fixed; inset: 0; background: #FFF; display: flex; flex-direction: column; align-items: center; padding-top: 20px; overflow-y: auto;",

            h2 { style: "font-size: 22px; font-weight: bold; color: #212529; margin-bottom: 15px;",
                "Saved Documents"
            }

            if documents.is_empty() {
                p { style: "font-size: 18px; font-weight: bold; color: #999; margin-top: 20px;",
                    "No documents saved yet."
                }
            } else {
                for (i, document) in documents.iter().enumerate() {
                    {
                        let doc_tap = document.clone();
                        let doc_hold = document.clone();
                        let uri = document.uri().to_owned();
                        let label = display_label(i);
                        rsx! {
                            div {
                                style: "display: flex; align-items: center; background: #E9ECEF; padding: 10px; margin: 5px 0; border-radius: 10px; width: 360px; cursor: pointer;",
                                onclick: move |_| flow.write().select_document(doc_tap.clone()),
                                oncontextmenu: move |evt| {
                                    evt.prevent_default();
                                    flow.write().request_delete(doc_hold.clone());
                                },
                                img {
                                    src: "{uri}",
                                    style: "width: 50px; height: 50px; border-radius: 5px; margin-right: 10px; object-fit: cover;",
                                }
                                span { style: "font-size: 16px; font-weight: bold; color: #212529;",
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }

            button {
                style: "background: #FF5733; color: white; font-weight: bold; font-size: 16px; padding: 15px; border: none; border-radius: 10px; width: 360px; margin: 20px 0; cursor: pointer;",
                onclick: move |_| flow.write().close_saved_documents(),
                "Close"
            }
        }
    }
}
