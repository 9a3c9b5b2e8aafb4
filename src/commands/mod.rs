//! Tauri IPC commands
//!
//! All commands exposed to the frontend via Tauri's invoke system.

pub mod metrics;
pub mod securities;
pub mod view;
