// SPDX-License-Identifier: MIT
//
// Scandeck — document scanning, sharing, and text extraction.
//
// Entry point. Initialises logging and backend services, then launches the
// Dioxus UI. The whole screen is driven by one `ScanFlow` signal; components
// decide their own visibility from its navigation state.

mod components;
mod flow;
mod services;
mod state;

use dioxus::prelude::*;

use components::action_sheet::ActionSheet;
use components::confirm::ConfirmDelete;
use components::extracted_text::ExtractedTextModal;
use components::home::Home;
use components::notice_banner::NoticeBanner;
use components::preview::PreviewModal;
use components::saved_docs::SavedDocuments;

use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Scandeck starting");

    dioxus::launch(app);
}

/// Root component.
fn app() -> Element {
    use_context_provider(|| {
        Signal::new(match AppServices::init() {
            Ok(flow) => {
                tracing::info!("backend services initialised");
                flow
            }
            Err(e) => {
                tracing::error!(error = %e, "persistent storage failed — using in-memory fallback");
                AppServices::fallback()
            }
        })
    });

    rsx! {
        div { class: "app-container",
            style: "height: 100vh; background: #F8F9FA; font-family: system-ui, -apple-system, sans-serif; display: flex; flex-direction: column; align-items: center; padding-top: 20px;",

            Home {}

            // Modal layers; each renders only when the flow state says so.
            SavedDocuments {}
            ActionSheet {}
            PreviewModal {}
            ExtractedTextModal {}
            ConfirmDelete {}
            NoticeBanner {}
        }
    }
}
