// SPDX-License-Identifier: MIT
//
// Destructive-delete confirmation dialog.

use dioxus::prelude::*;

use crate::flow::ScanFlow;

#[component]
pub fn ConfirmDelete() -> Element {
    let mut flow = use_context::<Signal<ScanFlow>>();

    if flow.read().pending_delete().is_none() {
        return rsx! {};
    }

    rsx! {
        div { style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center;",
            div { style: "width: 320px; background: #fff; border-radius: 15px; padding: 20px; text-align: center;",

                h3 { style: "font-size: 18px; font-weight: bold; color: #212529; margin-bottom: 8px;",
                    "Delete Document"
                }
                p { style: "font-size: 14px; color: #333; margin-bottom: 16px;",
                    "Are you sure you want to delete this document?"
                }

                div { style: "display: flex; gap: 10px;",
                    button {
                        style: "flex: 1; background: #E9ECEF; color: #212529; font-weight: bold; font-size: 16px; padding: 12px; border: none; border-radius: 8px; cursor: pointer;",
                        onclick: move |_| flow.write().cancel_delete(),
                        "Cancel"
                    }
                    button {
                        style: "flex: 1; background: #FF3B30; color: white; font-weight: bold; font-size: 16px; padding: 12px; border: none; border-radius: 8px; cursor: pointer;",
                        onclick: move |_| flow.write().confirm_delete(),
                        "Delete"
                    }
                }
            }
        }
    }
}
