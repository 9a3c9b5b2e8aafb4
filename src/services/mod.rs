//! Services Layer
//!
//! Fetch/create/delete orchestration shared by the Tauri IPC commands.
//! Each mutating operation validates its draft, issues the backend
//! request, then clears local draft state and refetches the affected
//! list.
//!
//! - `SecuritiesService` - Fetch, create, delete securities
//! - `MetricsService` - Fetch, create, delete metrics; yield-change report
//! - `RefreshService` - Combined concurrent fetch of both lists

pub mod metrics_service;
pub mod refresh_service;
pub mod securities_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use metrics_service::MetricsService;
pub use refresh_service::RefreshService;
pub use securities_service::SecuritiesService;
