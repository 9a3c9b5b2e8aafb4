//! Wire types for the securities backend
//!
//! Mutating requests carry typed payloads with PascalCase wire names;
//! list responses stay untyped (`serde_json::Value`) because the backend
//! owns the row schema.

use crate::draft::Draft;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A security record, keyed by (SecurityId, AsOfDate)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Security {
    pub security_id: String,
    pub as_of_date: String,
    pub description: String,
    pub sector: String,
    pub subsector: String,
    pub currency: String,
}

impl Security {
    /// Build the create payload from a validated draft
    pub fn from_draft(draft: &Draft) -> Self {
        Self {
            security_id: draft.get("SecurityId").unwrap_or_default().to_string(),
            as_of_date: draft.get("AsOfDate").unwrap_or_default().to_string(),
            description: draft.get("Description").unwrap_or_default().to_string(),
            sector: draft.get("Sector").unwrap_or_default().to_string(),
            subsector: draft.get("Subsector").unwrap_or_default().to_string(),
            currency: draft.get("Currency").unwrap_or_default().to_string(),
        }
    }
}

/// A metric record, keyed by (MetricName, SecurityId)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Metric {
    pub as_of_date_time: String,
    pub security_id: String,
    pub metric_name: String,
    pub metric_value: String,
}

impl Metric {
    /// Build the create payload from a validated draft
    pub fn from_draft(draft: &Draft) -> Self {
        Self {
            as_of_date_time: draft.get("AsOfDateTime").unwrap_or_default().to_string(),
            security_id: draft.get("SecurityId").unwrap_or_default().to_string(),
            metric_name: draft.get("MetricName").unwrap_or_default().to_string(),
            metric_value: draft.get("MetricValue").unwrap_or_default().to_string(),
        }
    }
}

/// Identity body for a metric delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricKey {
    pub metric_name: String,
    pub security_id: String,
}

/// Optional filters for a metrics list request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsQuery {
    pub date: Option<String>,
    pub security_id: Option<String>,
}

/// Backend report: the security whose Yield moved most, first to last
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct YieldChange {
    pub security_id: String,
    pub first_yield: Value,
    pub last_yield: Value,
    pub yield_change: f64,
}
