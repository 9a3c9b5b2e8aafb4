//! Combined refresh of both record kinds
//!
//! The initial load and the "fetch by date" action issue both list
//! requests concurrently. Completions are not ordered against each other
//! and in-flight requests are never cancelled, so for a single kind the
//! last response to resolve wins.

use crate::backend::types::MetricsQuery;
use crate::error::Result;
use crate::services::{MetricsService, SecuritiesService};
use crate::state::AppState;
use futures_util::future;
use tracing::error;

/// Whole-app refresh orchestration
pub struct RefreshService;

impl RefreshService {
    /// Fetch securities and metrics concurrently with the same optional
    /// date filter.
    ///
    /// A failed fetch leaves its list stale and is only logged; the other
    /// list still lands.
    pub async fn fetch_all(state: &AppState, date: Option<&str>) -> Result<()> {
        let query = MetricsQuery {
            date: date.map(str::to_string),
            security_id: None,
        };

        let (securities, metrics) = future::join(
            SecuritiesService::fetch(state, date),
            MetricsService::fetch(state, &query),
        )
        .await;

        if let Err(e) = securities {
            error!("Securities fetch failed: {}", e);
        }
        if let Err(e) = metrics {
            error!("Metrics fetch failed: {}", e);
        }

        Ok(())
    }
}
