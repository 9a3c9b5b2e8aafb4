//! Securities backend adapter
//!
//! `RefDataBackend` is the seam between the orchestration services and the
//! REST backend; `RestBackend` is the production implementation. Tests
//! exercise the services against a recording implementation of the trait.

pub mod rest;
pub mod types;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use types::{Metric, MetricKey, MetricsQuery, Security, YieldChange};

pub use rest::RestBackend;

/// Operations the securities backend exposes to the app
#[async_trait]
pub trait RefDataBackend: Send + Sync {
    /// List securities, optionally filtered by exact AsOfDate
    async fn list_securities(&self, date: Option<&str>) -> Result<Vec<Value>>;

    /// Create a security from the full draft payload
    async fn create_security(&self, security: &Security) -> Result<()>;

    /// Delete the security identified by (SecurityId, AsOfDate)
    async fn delete_security(&self, security_id: &str, as_of_date: &str) -> Result<()>;

    /// List metrics; when date-filtered the backend returns the most
    /// recent version per security
    async fn list_metrics(&self, query: &MetricsQuery) -> Result<Vec<Value>>;

    /// Create a metric from the full draft payload
    async fn create_metric(&self, metric: &Metric) -> Result<()>;

    /// Delete the metric identified by (MetricName, SecurityId)
    async fn delete_metric(&self, key: &MetricKey) -> Result<()>;

    /// Security with the largest first-to-last Yield change
    async fn largest_yield_change(&self) -> Result<YieldChange>;
}
