// SPDX-License-Identifier: MIT
//
// Startup wiring — opens the persistent backend, loads config, picks the
// platform bridge, and hands the UI a ready orchestrator.

use std::path::Path;
use std::sync::Arc;

use scandeck_bridge::traits::PlatformBridge;
use scandeck_core::error::Result;
use scandeck_core::AppConfig;
use scandeck_store::{DocumentStore, FileStore, MemoryStore};
use tracing::info;

use super::data_dir;
use super::desktop_bridge::DesktopBridge;
use crate::flow::ScanFlow;

const CONFIG_FILE: &str = "config.json";

/// Builds the fully wired orchestrator at app startup.
pub struct AppServices;

impl AppServices {
    /// Initialise persistent storage and the platform bridge.
    pub fn init() -> Result<ScanFlow> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = load_config(&dir).unwrap_or_default();
        let kv = FileStore::open(&dir)?;
        let store = DocumentStore::open(Box::new(kv));
        let bridge: Arc<dyn PlatformBridge> =
            Arc::new(DesktopBridge::new(&config, data_dir::data_subdir("exports")));

        info!(platform = bridge.platform_name(), "app services initialised");
        Ok(ScanFlow::new(store, bridge, config))
    }

    /// In-memory fallback when no data directory is writable. Scans are kept
    /// for the session only.
    pub fn fallback() -> ScanFlow {
        let config = AppConfig::default();
        let store = DocumentStore::open(Box::new(MemoryStore::new()));
        let bridge: Arc<dyn PlatformBridge> =
            Arc::new(DesktopBridge::new(&config, std::env::temp_dir()));
        ScanFlow::new(store, bridge, config)
    }
}

fn load_config(dir: &Path) -> Option<AppConfig> {
    let raw = std::fs::read_to_string(dir.join(CONFIG_FILE)).ok()?;
    serde_json::from_str(&raw).ok()
}
