// SPDX-License-Identifier: MIT
//
// Home screen — welcome instructions plus the two primary actions.

use dioxus::prelude::*;

use crate::flow::ScanFlow;

#[component]
pub fn Home() -> Element {
    let mut flow = use_context::<Signal<ScanFlow>>();

    rsx! {
        div { style: "display: flex; flex-direction: column; align-items: center;",

            h1 { style: "color: #212529; font-size: 24px;", "Document Scanner" }

            div { style: "background: #E9ECEF; padding: 15px; border-radius: 10px; width: 360px; margin-bottom: 15px; text-align: center;",
                p { style: "font-size: 18px; font-weight: bold; color: #007AFF; margin-bottom: 5px;",
                    "Welcome To Document Scanner App"
                }
                p { style: "font-size: 14px; color: #333; margin-bottom: 3px;",
                    "1. To scan a new document, click on the 'Scan Document' button."
                }
                p { style: "font-size: 14px; color: #333; margin-bottom: 3px;",
                    "2. To view your saved documents, click on 'Saved Documents'."
                }
                p { style: "font-size: 14px; color: #333; margin-bottom: 3px;",
                    "3. To manage a document, tap on it and select the desired option."
                }
                p { style: "font-size: 14px; font-weight: bold; color: #28A745; margin-top: 5px;",
                    "Enjoy seamless document scanning and management!"
                }
            }

            button {
                style: "display: flex; align-items: center; justify-content: center; background: #007AFF; color: white; font-weight: bold; font-size: 16px; padding: 15px; border: none; border-radius: 10px; width: 360px; margin: 10px 0; cursor: pointer;",
                onclick: move |_| flow.write().scan(),
                "\u{1F4F7} Scan Document"
            }

            button {
                style: "display: flex; align-items: center; justify-content: center; background: #28A745; color: white; font-weight: bold; font-size: 16px; padding: 15px; border: none; border-radius: 10px; width: 360px; margin-bottom: 15px; cursor: pointer;",
                onclick: move |_| flow.write().open_saved_documents(),
                "\u{1F4C1} Saved Documents"
            }
        }
    }
}
