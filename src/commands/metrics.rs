//! Metrics commands

use crate::backend::types::{MetricsQuery, YieldChange};
use crate::draft::Draft;
use crate::error::Result;
use crate::services::MetricsService;
use crate::state::AppState;
use serde_json::Value;
use tauri::State;

/// List metrics, optionally filtered by date and/or security
#[tauri::command]
pub async fn fetch_metrics(
    state: State<'_, AppState>,
    date: Option<String>,
    security_id: Option<String>,
) -> Result<Vec<Value>> {
    let query = MetricsQuery { date, security_id };
    MetricsService::fetch(&state, &query).await
}

/// Create a metric from the current draft
#[tauri::command]
pub async fn create_metric(state: State<'_, AppState>) -> Result<Vec<Value>> {
    MetricsService::create(&state).await
}

/// Delete the metric named by the pending delete fields
#[tauri::command]
pub async fn delete_metric(state: State<'_, AppState>) -> Result<Vec<Value>> {
    MetricsService::delete(&state).await
}

/// Replace one field of the metric draft
#[tauri::command]
pub async fn update_metric_draft(
    state: State<'_, AppState>,
    field: String,
    value: String,
) -> Result<Draft> {
    Ok(state.update_metric_draft(&field, &value))
}

/// Current metric draft
#[tauri::command]
pub async fn get_metric_draft(state: State<'_, AppState>) -> Result<Draft> {
    Ok(state.metric_draft())
}

/// Set the pending delete Metric Name
#[tauri::command]
pub async fn set_metric_delete_name(
    state: State<'_, AppState>,
    metric_name: Option<String>,
) -> Result<()> {
    state.set_metric_delete_name(metric_name);
    Ok(())
}

/// Set the pending delete Security ID
#[tauri::command]
pub async fn set_metric_delete_security_id(
    state: State<'_, AppState>,
    security_id: Option<String>,
) -> Result<()> {
    state.set_metric_delete_security_id(security_id);
    Ok(())
}

/// Security with the largest first-to-last Yield change
#[tauri::command]
pub async fn metrics_largest_yield_change(state: State<'_, AppState>) -> Result<YieldChange> {
    MetricsService::largest_yield_change(&state).await
}
