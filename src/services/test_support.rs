//! Recording backend used by service tests

use crate::backend::types::{Metric, MetricKey, MetricsQuery, Security, YieldChange};
use crate::backend::RefDataBackend;
use crate::config::BackendConfig;
use crate::error::Result;
use crate::state::AppState;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

/// One observed backend call, with the arguments it carried
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    ListSecurities { date: Option<String> },
    CreateSecurity(Security),
    DeleteSecurity { security_id: String, as_of_date: String },
    ListMetrics { date: Option<String>, security_id: Option<String> },
    CreateMetric(Metric),
    DeleteMetric(MetricKey),
    LargestYieldChange,
}

/// Backend that records every call and serves canned rows
pub struct RecordingBackend {
    calls: Mutex<Vec<BackendCall>>,
    pub securities: Vec<Value>,
    pub metrics: Vec<Value>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            securities: vec![json!({"SecurityId": "SEC1", "AsOfDate": "2024-01-01"})],
            metrics: vec![json!({"MetricName": "Yield", "SecurityId": "SEC1"})],
        }
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: BackendCall) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl RefDataBackend for RecordingBackend {
    async fn list_securities(&self, date: Option<&str>) -> Result<Vec<Value>> {
        self.record(BackendCall::ListSecurities {
            date: date.map(str::to_string),
        });
        Ok(self.securities.clone())
    }

    async fn create_security(&self, security: &Security) -> Result<()> {
        self.record(BackendCall::CreateSecurity(security.clone()));
        Ok(())
    }

    async fn delete_security(&self, security_id: &str, as_of_date: &str) -> Result<()> {
        self.record(BackendCall::DeleteSecurity {
            security_id: security_id.to_string(),
            as_of_date: as_of_date.to_string(),
        });
        Ok(())
    }

    async fn list_metrics(&self, query: &MetricsQuery) -> Result<Vec<Value>> {
        self.record(BackendCall::ListMetrics {
            date: query.date.clone(),
            security_id: query.security_id.clone(),
        });
        Ok(self.metrics.clone())
    }

    async fn create_metric(&self, metric: &Metric) -> Result<()> {
        self.record(BackendCall::CreateMetric(metric.clone()));
        Ok(())
    }

    async fn delete_metric(&self, key: &MetricKey) -> Result<()> {
        self.record(BackendCall::DeleteMetric(key.clone()));
        Ok(())
    }

    async fn largest_yield_change(&self) -> Result<YieldChange> {
        self.record(BackendCall::LargestYieldChange);
        Ok(YieldChange {
            security_id: "SEC1".to_string(),
            first_yield: json!("4.2"),
            last_yield: json!("5.1"),
            yield_change: 0.9,
        })
    }
}

/// App state over a recording backend, plus a handle to the recorder
pub fn recording_state() -> (AppState, Arc<RecordingBackend>) {
    let backend = Arc::new(RecordingBackend::new());
    let state = AppState::with_backend(backend.clone(), BackendConfig::default());
    (state, backend)
}
