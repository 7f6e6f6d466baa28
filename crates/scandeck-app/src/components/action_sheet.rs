// SPDX-License-Identifier: MIT
//
// Per-document action sheet — a bottom sheet over the saved-documents list.
//
// The options are the closed `SheetAction` set; every click goes through the
// single `ScanFlow::sheet_action` handler.

use dioxus::prelude::*;

use crate::flow::ScanFlow;
use crate::state::{NavState, SheetAction};

const OPTIONS: [(&str, SheetAction); 6] = [
    ("\u{1F5BC} Preview", SheetAction::Preview),
    ("\u{1F4E4} Share as Image", SheetAction::ShareImage),
    ("\u{1F4C4} Share as PDF", SheetAction::SharePdf),
    ("\u{1F50D} Extract Text", SheetAction::ExtractText),
    ("\u{1F5D1} Delete", SheetAction::Delete),
    ("\u{2715} Close", SheetAction::Close),
];

#[component]
pub fn ActionSheet() -> Element {
    let mut flow = use_context::<Signal<ScanFlow>>();

    if !matches!(*flow.read().nav(), NavState::ActionSheet { .. }) {
        return rsx! {};
    }

    rsx! {
        // Tapping the dimmed backdrop dismisses the sheet.
        div {
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4);",
            onclick: move |_| flow.write().sheet_action(SheetAction::Close),
        }
        div { style: "position: fixed; bottom: 0; left: 0; right: 0; background: #fff; border-radius: 20px 20px 0 0; padding: 15px 0; box-shadow: 0 -2px 4px rgba(0,0,0,0.2);",
            for (label, action) in OPTIONS {
                button {
                    style: "display: block; width: 100%; text-align: left; font-size: 18px; font-weight: bold; color: #333; padding: 15px 20px; background: none; border: none; border-bottom: 1px solid #ccc; cursor: pointer;",
                    onclick: move |_| flow.write().sheet_action(action),
                    "{label}"
                }
            }
        }
    }
}
