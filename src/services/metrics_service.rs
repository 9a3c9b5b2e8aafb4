//! Metrics Service
//!
//! Fetch, create, and delete metrics against the REST backend, plus the
//! backend's largest-yield-change report.

use crate::backend::types::{Metric, MetricKey, MetricsQuery, YieldChange};
use crate::error::{AppError, Result};
use crate::schema::{self, METRIC_REQUIRED};
use crate::state::AppState;
use serde_json::Value;
use tracing::info;

/// Metrics orchestration
pub struct MetricsService;

impl MetricsService {
    /// Fetch the metrics list and replace the displayed rows wholesale.
    ///
    /// When date-filtered the backend returns the most recent version of
    /// each metric per security.
    pub async fn fetch(state: &AppState, query: &MetricsQuery) -> Result<Vec<Value>> {
        let rows = state.backend.list_metrics(query).await?;
        state.set_metrics(rows.clone());
        Ok(rows)
    }

    /// Create a metric from the current draft.
    pub async fn create(state: &AppState) -> Result<Vec<Value>> {
        let draft = state.metric_draft();

        let missing = schema::missing_fields(METRIC_REQUIRED, &draft);
        if !missing.is_empty() {
            return Err(AppError::Validation(schema::required_fields_message(&missing)));
        }

        let metric = Metric::from_draft(&draft);
        info!(
            "Creating metric {} for {}",
            metric.metric_name, metric.security_id
        );
        state.backend.create_metric(&metric).await?;

        state.clear_metric_draft();
        Self::refetch_with_filter(state).await
    }

    /// Delete the metric named by the pending delete fields.
    ///
    /// Both identity fields are required; on success both pending fields
    /// are cleared and the list refetched with the current date filter.
    pub async fn delete(state: &AppState) -> Result<Vec<Value>> {
        let pending = state.metric_delete();
        let metric_name = pending.metric_name.unwrap_or_default();
        let security_id = pending.security_id.unwrap_or_default();

        if metric_name.is_empty() || security_id.is_empty() {
            return Err(AppError::Validation(
                "Both Metric Name and Security ID are required to delete a metric.".to_string(),
            ));
        }

        info!("Deleting metric {} for {}", metric_name, security_id);
        let key = MetricKey {
            metric_name,
            security_id,
        };
        state.backend.delete_metric(&key).await?;

        state.set_metric_delete_name(None);
        state.set_metric_delete_security_id(None);
        Self::refetch_with_filter(state).await
    }

    /// Security with the largest first-to-last Yield change
    pub async fn largest_yield_change(state: &AppState) -> Result<YieldChange> {
        state.backend.largest_yield_change().await
    }

    async fn refetch_with_filter(state: &AppState) -> Result<Vec<Value>> {
        let query = MetricsQuery {
            date: state.filter_date(),
            security_id: None,
        };
        Self::fetch(state, &query).await
    }
}
