// SPDX-License-Identifier: MIT
//
// Extracted-text view — shows recognition output with copy and close.

use dioxus::prelude::*;

use crate::flow::ScanFlow;
use crate::state::NavState;

#[component]
pub fn ExtractedTextModal() -> Element {
    let mut flow = use_context::<Signal<ScanFlow>>();

    let text = match flow.read().nav() {
        NavState::ExtractedText { text, .. } => text.clone(),
        _ => return rsx! {},
    };

    rsx! {
        div { style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center;",
            div { style: "width: 90%; max-width: 480px; max-height: 80%; background: #fff; border-radius: 15px; padding: 20px; display: flex; flex-direction: column; align-items: center;",

                h3 { style: "font-size: 18px; font-weight: bold; color: #333; margin-bottom: 10px;",
                    "Extracted Text"
                }

                div { style: "background: #f8f9fa; padding: 15px; border-radius: 10px; width: 100%; min-height: 80px; max-height: 300px; overflow-y: auto;",
                    p { style: "font-size: 16px; color: #212529; white-space: pre-wrap; text-align: center;",
                        "{text}"
                    }
                }

                div { style: "display: flex; gap: 10px; margin-top: 10px; width: 100%;",
                    button {
                        style: "flex: 1; display: flex; align-items: center; justify-content: center; background: #007AFF; color: white; font-weight: bold; font-size: 16px; padding: 12px; border: none; border-radius: 8px; cursor: pointer;",
                        onclick: move |_| flow.write().copy_extracted_text(),
                        "Copy"
                    }
                    button {
                        style: "flex: 1; display: flex; align-items: center; justify-content: center; background: #FF5733; color: white; font-weight: bold; font-size: 16px; padding: 12px; border: none; border-radius: 8px; cursor: pointer;",
                        onclick: move |_| flow.write().close_extracted_text(),
                        "Close"
                    }
                }
            }
        }
    }
}
