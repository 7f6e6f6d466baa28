// SPDX-License-Identifier: MIT
//
// Full-screen image preview. Closing returns to the action sheet that
// opened it.

use dioxus::prelude::*;

use crate::flow::ScanFlow;
use crate::state::NavState;

#[component]
pub fn PreviewModal() -> Element {
    let mut flow = use_context::<Signal<ScanFlow>>();

    let uri = match flow.read().nav() {
        NavState::Preview { document } => document.uri().to_owned(),
        _ => return rsx! {},
    };

    rsx! {
        div { style: "position: fixed; inset: 0; background: #000; display: flex; align-items: center; justify-content: center;",
            img {
                src: "{uri}",
                style: "max-width: 90%; max-height: 90%; object-fit: contain;",
            }
            button {
                style: "position: absolute; top: 40px; right: 20px; background: rgba(0, 0, 0, 0.5); color: #fff; font-size: 20px; border: none; border-radius: 20px; padding: 10px 14px; cursor: pointer;",
                onclick: move |_| flow.write().close_preview(),
                "\u{2715}"
            }
        }
    }
}
