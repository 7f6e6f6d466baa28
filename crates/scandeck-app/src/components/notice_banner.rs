// SPDX-License-Identifier: MIT
//
// Dismissible notice banner — the single surface for every collaborator
// failure and info confirmation.

use dioxus::prelude::*;

use scandeck_core::notice::Severity;

use crate::flow::ScanFlow;

#[component]
pub fn NoticeBanner() -> Element {
    let mut flow = use_context::<Signal<ScanFlow>>();

    let Some(notice) = flow.read().notice().cloned() else {
        return rsx! {};
    };

    let accent = match notice.severity {
        Severity::Info => "#28A745",
        Severity::Transient => "#FF9500",
        Severity::ActionRequired => "#007AFF",
        Severity::Permanent => "#FF3B30",
    };

    rsx! {
        div { style: "position: fixed; left: 50%; bottom: 24px; transform: translateX(-50%); width: 360px; background: #fff; border-left: 6px solid {accent}; border-radius: 10px; padding: 14px; box-shadow: 0 2px 8px rgba(0,0,0,0.25); z-index: 10;",
            p { style: "font-size: 15px; font-weight: bold; color: #212529; margin: 0 0 4px 0;",
                "{notice.message}"
            }
            if !notice.suggestion.is_empty() {
                p { style: "font-size: 13px; color: #555; margin: 0 0 8px 0;",
                    "{notice.suggestion}"
                }
            }
            button {
                style: "background: none; border: none; color: #007AFF; font-weight: bold; font-size: 14px; padding: 0; cursor: pointer;",
                onclick: move |_| flow.write().dismiss_notice(),
                "Dismiss"
            }
        }
    }
}
