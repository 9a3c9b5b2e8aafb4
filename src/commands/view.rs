//! View commands: field schemas, grid data, date filter, app status

use crate::error::Result;
use crate::grid::{self, GridData};
use crate::schema::{EntityKind, FieldSpec};
use crate::services::RefreshService;
use crate::state::AppState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tauri::State;

/// Snapshot of the app's backend connection and refresh times
#[derive(Debug, Serialize)]
pub struct AppStatus {
    pub backend_url: String,
    pub filter_date: Option<String>,
    pub securities_refreshed_at: Option<DateTime<Utc>>,
    pub metrics_refreshed_at: Option<DateTime<Utc>>,
}

/// Field schema driving a kind's create form
#[tauri::command]
pub async fn get_field_schema(kind: EntityKind) -> Result<Vec<FieldSpec>> {
    Ok(kind.fields().to_vec())
}

/// Columns and current rows for a kind's grid
///
/// Columns are schema-driven unless `dynamic_columns` opts into key-set
/// inference from the first row.
#[tauri::command]
pub async fn get_grid_data(
    state: State<'_, AppState>,
    kind: EntityKind,
    dynamic_columns: Option<bool>,
) -> Result<GridData> {
    let rows = match kind {
        EntityKind::Securities => state.securities(),
        EntityKind::Metrics => state.metrics(),
    };

    Ok(grid::grid_data(kind, rows, dynamic_columns.unwrap_or(false)))
}

/// Store the selected date filter; an empty value clears it
#[tauri::command]
pub async fn set_filter_date(state: State<'_, AppState>, date: Option<String>) -> Result<()> {
    state.set_filter_date(date.filter(|d| !d.is_empty()));
    Ok(())
}

/// Currently selected date filter
#[tauri::command]
pub async fn get_filter_date(state: State<'_, AppState>) -> Result<Option<String>> {
    Ok(state.filter_date())
}

/// Fetch securities and metrics concurrently with the stored date filter
#[tauri::command]
pub async fn fetch_all(state: State<'_, AppState>) -> Result<()> {
    let date = state.filter_date();
    RefreshService::fetch_all(&state, date.as_deref()).await
}

/// Backend connection and refresh status
#[tauri::command]
pub async fn get_app_status(state: State<'_, AppState>) -> Result<AppStatus> {
    Ok(AppStatus {
        backend_url: state.config.base_url.clone(),
        filter_date: state.filter_date(),
        securities_refreshed_at: state.securities_refreshed_at(),
        metrics_refreshed_at: state.metrics_refreshed_at(),
    })
}
