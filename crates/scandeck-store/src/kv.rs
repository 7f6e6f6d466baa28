// SPDX-License-Identifier: MIT
//
// Key-value persistence backends.
//
// The store only ever reads and writes whole string values under well-known
// keys, so the trait is deliberately two methods. On mobile the native
// key-value plugin sits behind this same seam.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use scandeck_core::error::{Result, ScandeckError};
use tracing::debug;

/// Minimal key-value persistence: whole-string get and set.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`. Absent keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Durably write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: one file per key inside a directory.
///
/// Writes go through a temporary file and a rename so that a crash mid-write
/// never leaves a truncated value behind.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| ScandeckError::Persistence(format!("create {}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ScandeckError::Persistence(format!("read {key}: {e}"))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp, value)
            .map_err(|e| ScandeckError::Persistence(format!("write {key}: {e}")))?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| ScandeckError::Persistence(format!("commit {key}: {e}")))?;
        debug!(key, bytes = value.len(), path = %path.display(), "value persisted");
        Ok(())
    }
}

/// In-memory store for tests and for the fallback path when no data
/// directory is writable. Contents are lost on process exit.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().expect("memory store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("memory store lock poisoned");
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
