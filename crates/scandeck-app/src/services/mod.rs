// SPDX-License-Identifier: MIT
//
// Service layer — wires the orchestrator to concrete backends: the file
// persistence, the desktop bridge, and the data directory.

pub mod app_services;
pub mod data_dir;
pub mod desktop_bridge;
