//! Application state management
//!
//! One managed container holds all mutable UI state: drafts,
//! delete-drafts, the selected filter date, and the two displayed row
//! arrays. Each row slot is replaced wholesale by its kind's fetch;
//! overlapping fetches are not coordinated, so the last response to
//! resolve wins.

use crate::backend::{RefDataBackend, RestBackend};
use crate::config::BackendConfig;
use crate::draft::Draft;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

/// Pending identity fields for a security delete
#[derive(Debug, Clone, Default)]
pub struct SecurityDeleteDraft {
    pub security_id: Option<String>,
    pub as_of_date: Option<String>,
}

/// Pending identity fields for a metric delete
#[derive(Debug, Clone, Default)]
pub struct MetricDeleteDraft {
    pub metric_name: Option<String>,
    pub security_id: Option<String>,
}

/// Application state shared across all commands
pub struct AppState {
    /// Backend the services fetch from and mutate against
    pub backend: Arc<dyn RefDataBackend>,

    /// Connection settings the backend was built from
    pub config: BackendConfig,

    securities: RwLock<Vec<Value>>,
    metrics: RwLock<Vec<Value>>,

    security_draft: RwLock<Draft>,
    metric_draft: RwLock<Draft>,

    security_delete: RwLock<SecurityDeleteDraft>,
    metric_delete: RwLock<MetricDeleteDraft>,

    filter_date: RwLock<Option<String>>,

    securities_refreshed_at: RwLock<Option<DateTime<Utc>>>,
    metrics_refreshed_at: RwLock<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create application state backed by the REST client
    pub fn new(config: BackendConfig) -> Self {
        let backend = Arc::new(RestBackend::new(&config));
        Self::with_backend(backend, config)
    }

    /// Create application state over an arbitrary backend implementation
    pub fn with_backend(backend: Arc<dyn RefDataBackend>, config: BackendConfig) -> Self {
        Self {
            backend,
            config,
            securities: RwLock::new(Vec::new()),
            metrics: RwLock::new(Vec::new()),
            security_draft: RwLock::new(Draft::new()),
            metric_draft: RwLock::new(Draft::new()),
            security_delete: RwLock::new(SecurityDeleteDraft::default()),
            metric_delete: RwLock::new(MetricDeleteDraft::default()),
            filter_date: RwLock::new(None),
            securities_refreshed_at: RwLock::new(None),
            metrics_refreshed_at: RwLock::new(None),
        }
    }

    // ------------------------------------------------------------------
    // Displayed rows
    // ------------------------------------------------------------------

    pub fn securities(&self) -> Vec<Value> {
        self.securities.read().clone()
    }

    /// Replace the securities rows wholesale
    pub fn set_securities(&self, rows: Vec<Value>) {
        tracing::debug!("Replacing securities rows ({} rows)", rows.len());
        *self.securities.write() = rows;
        *self.securities_refreshed_at.write() = Some(Utc::now());
    }

    pub fn metrics(&self) -> Vec<Value> {
        self.metrics.read().clone()
    }

    /// Replace the metrics rows wholesale
    pub fn set_metrics(&self, rows: Vec<Value>) {
        tracing::debug!("Replacing metrics rows ({} rows)", rows.len());
        *self.metrics.write() = rows;
        *self.metrics_refreshed_at.write() = Some(Utc::now());
    }

    pub fn securities_refreshed_at(&self) -> Option<DateTime<Utc>> {
        *self.securities_refreshed_at.read()
    }

    pub fn metrics_refreshed_at(&self) -> Option<DateTime<Utc>> {
        *self.metrics_refreshed_at.read()
    }

    // ------------------------------------------------------------------
    // Create drafts
    // ------------------------------------------------------------------

    pub fn security_draft(&self) -> Draft {
        self.security_draft.read().clone()
    }

    /// Replace one field of the security draft, returning the new draft
    pub fn update_security_draft(&self, field: &str, value: &str) -> Draft {
        let mut draft = self.security_draft.write();
        *draft = draft.with(field, value);
        draft.clone()
    }

    pub fn clear_security_draft(&self) {
        *self.security_draft.write() = Draft::new();
    }

    pub fn metric_draft(&self) -> Draft {
        self.metric_draft.read().clone()
    }

    /// Replace one field of the metric draft, returning the new draft
    pub fn update_metric_draft(&self, field: &str, value: &str) -> Draft {
        let mut draft = self.metric_draft.write();
        *draft = draft.with(field, value);
        draft.clone()
    }

    pub fn clear_metric_draft(&self) {
        *self.metric_draft.write() = Draft::new();
    }

    // ------------------------------------------------------------------
    // Delete drafts
    // ------------------------------------------------------------------

    pub fn security_delete(&self) -> SecurityDeleteDraft {
        self.security_delete.read().clone()
    }

    pub fn set_security_delete_id(&self, security_id: Option<String>) {
        self.security_delete.write().security_id = security_id;
    }

    pub fn set_security_delete_date(&self, as_of_date: Option<String>) {
        self.security_delete.write().as_of_date = as_of_date;
    }

    pub fn metric_delete(&self) -> MetricDeleteDraft {
        self.metric_delete.read().clone()
    }

    pub fn set_metric_delete_name(&self, metric_name: Option<String>) {
        self.metric_delete.write().metric_name = metric_name;
    }

    pub fn set_metric_delete_security_id(&self, security_id: Option<String>) {
        self.metric_delete.write().security_id = security_id;
    }

    // ------------------------------------------------------------------
    // Date filter
    // ------------------------------------------------------------------

    pub fn filter_date(&self) -> Option<String> {
        self.filter_date.read().clone()
    }

    pub fn set_filter_date(&self, date: Option<String>) {
        *self.filter_date.write() = date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::RecordingBackend;
    use serde_json::json;

    fn state() -> AppState {
        AppState::with_backend(Arc::new(RecordingBackend::new()), BackendConfig::default())
    }

    #[test]
    fn test_rows_are_replaced_wholesale() {
        let state = state();
        state.set_securities(vec![json!({"SecurityId": "SEC1"})]);
        state.set_securities(vec![json!({"SecurityId": "SEC2"})]);

        let rows = state.securities();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["SecurityId"], "SEC2");
        assert!(state.securities_refreshed_at().is_some());
    }

    #[test]
    fn test_draft_updates_accumulate_and_clear() {
        let state = state();
        state.update_security_draft("SecurityId", "SEC1");
        let draft = state.update_security_draft("Currency", "USD");

        assert_eq!(draft.get("SecurityId"), Some("SEC1"));
        assert_eq!(draft.get("Currency"), Some("USD"));

        state.clear_security_draft();
        assert!(state.security_draft().is_empty());
    }

    #[test]
    fn test_delete_draft_fields_are_independent() {
        let state = state();
        state.set_security_delete_id(Some("SEC1".to_string()));
        state.set_security_delete_date(Some("2024-01-01".to_string()));

        state.set_security_delete_id(None);
        let pending = state.security_delete();
        assert!(pending.security_id.is_none());
        assert_eq!(pending.as_of_date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_filter_date_round_trip() {
        let state = state();
        assert!(state.filter_date().is_none());

        state.set_filter_date(Some("2024-06-01".to_string()));
        assert_eq!(state.filter_date().as_deref(), Some("2024-06-01"));
    }
}
