// SPDX-License-Identifier: MIT
//
// Scandeck — Durable ordered collection of scanned-document references.

pub mod kv;
pub mod store;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use store::{DocumentStore, STORAGE_KEY};
