//! Securities commands

use crate::draft::Draft;
use crate::error::Result;
use crate::services::SecuritiesService;
use crate::state::AppState;
use serde_json::Value;
use tauri::State;

/// List securities, optionally filtered by exact AsOfDate
#[tauri::command]
pub async fn fetch_securities(
    state: State<'_, AppState>,
    date: Option<String>,
) -> Result<Vec<Value>> {
    SecuritiesService::fetch(&state, date.as_deref()).await
}

/// Create a security from the current draft
#[tauri::command]
pub async fn create_security(state: State<'_, AppState>) -> Result<Vec<Value>> {
    SecuritiesService::create(&state).await
}

/// Delete the security named by the pending delete fields
#[tauri::command]
pub async fn delete_security(state: State<'_, AppState>) -> Result<Vec<Value>> {
    SecuritiesService::delete(&state).await
}

/// Replace one field of the security draft
#[tauri::command]
pub async fn update_security_draft(
    state: State<'_, AppState>,
    field: String,
    value: String,
) -> Result<Draft> {
    Ok(state.update_security_draft(&field, &value))
}

/// Current security draft
#[tauri::command]
pub async fn get_security_draft(state: State<'_, AppState>) -> Result<Draft> {
    Ok(state.security_draft())
}

/// Set the pending delete Security ID
#[tauri::command]
pub async fn set_security_delete_id(
    state: State<'_, AppState>,
    security_id: Option<String>,
) -> Result<()> {
    state.set_security_delete_id(security_id);
    Ok(())
}

/// Set the pending delete AsOfDate
#[tauri::command]
pub async fn set_security_delete_date(
    state: State<'_, AppState>,
    as_of_date: Option<String>,
) -> Result<()> {
    state.set_security_delete_date(as_of_date);
    Ok(())
}
