// SPDX-License-Identifier: MIT
//
// Scandeck — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod notice;
pub mod types;

pub use config::AppConfig;
pub use error::ScandeckError;
pub use types::*;
