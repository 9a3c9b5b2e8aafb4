//! Securities Service
//!
//! Fetch, create, and delete securities against the REST backend,
//! replacing the displayed rows after every operation.

use crate::backend::types::Security;
use crate::error::{AppError, Result};
use crate::schema::{self, SECURITY_REQUIRED};
use crate::state::AppState;
use serde_json::Value;
use tracing::info;

/// Securities orchestration
pub struct SecuritiesService;

impl SecuritiesService {
    /// Fetch the securities list, optionally filtered by exact AsOfDate,
    /// and replace the displayed rows wholesale.
    pub async fn fetch(state: &AppState, date: Option<&str>) -> Result<Vec<Value>> {
        let rows = state.backend.list_securities(date).await?;
        state.set_securities(rows.clone());
        Ok(rows)
    }

    /// Create a security from the current draft.
    ///
    /// Missing required fields abort before any network call; otherwise
    /// the draft is cleared and the list refetched with the currently
    /// selected date filter.
    pub async fn create(state: &AppState) -> Result<Vec<Value>> {
        let draft = state.security_draft();

        let missing = schema::missing_fields(SECURITY_REQUIRED, &draft);
        if !missing.is_empty() {
            return Err(AppError::Validation(schema::required_fields_message(&missing)));
        }

        let security = Security::from_draft(&draft);
        info!(
            "Creating security {} as of {}",
            security.security_id, security.as_of_date
        );
        state.backend.create_security(&security).await?;

        state.clear_security_draft();
        let date = state.filter_date();
        Self::fetch(state, date.as_deref()).await
    }

    /// Delete the security named by the pending delete fields.
    ///
    /// Both identity fields are required; on success the pending id is
    /// cleared and the list refetched with the deleted record's AsOfDate.
    pub async fn delete(state: &AppState) -> Result<Vec<Value>> {
        let pending = state.security_delete();
        let security_id = pending.security_id.unwrap_or_default();
        let as_of_date = pending.as_of_date.unwrap_or_default();

        if security_id.is_empty() || as_of_date.is_empty() {
            return Err(AppError::Validation(
                "Both Security ID and Date are required to delete a security.".to_string(),
            ));
        }

        info!("Deleting security {} as of {}", security_id, as_of_date);
        state.backend.delete_security(&security_id, &as_of_date).await?;

        state.set_security_delete_id(None);
        Self::fetch(state, Some(&as_of_date)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{recording_state, BackendCall};

    #[tokio::test]
    async fn test_fetch_replaces_rows_wholesale() {
        let (state, backend) = recording_state();
        state.set_securities(vec![serde_json::json!({"SecurityId": "STALE"})]);

        let rows = SecuritiesService::fetch(&state, None).await.unwrap();

        assert_eq!(rows, backend.securities);
        assert_eq!(state.securities(), backend.securities);
        assert_eq!(backend.calls(), vec![BackendCall::ListSecurities { date: None }]);
    }

    #[tokio::test]
    async fn test_create_with_empty_draft_lists_all_fields_and_skips_network() {
        let (state, backend) = recording_state();

        let err = SecuritiesService::create(&state).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "The following fields are required: AsOfDate, SecurityId, Description, Sector, Subsector, Currency"
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_names_only_the_missing_fields() {
        let (state, backend) = recording_state();
        state.update_security_draft("SecurityId", "SEC1");
        state.update_security_draft("Description", "10Y Treasury");
        state.update_security_draft("Sector", "");

        let err = SecuritiesService::create(&state).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "The following fields are required: AsOfDate, Sector, Subsector, Currency"
        );
        assert!(backend.calls().is_empty());
        // The draft survives a failed validation.
        assert_eq!(state.security_draft().get("SecurityId"), Some("SEC1"));
    }

    #[tokio::test]
    async fn test_create_posts_draft_then_clears_and_refetches() {
        let (state, backend) = recording_state();
        state.update_security_draft("SecurityId", "SEC1");
        state.update_security_draft("AsOfDate", "2024-01-01");
        state.update_security_draft("Description", "X");
        state.update_security_draft("Sector", "Y");
        state.update_security_draft("Subsector", "Z");
        state.update_security_draft("Currency", "USD");

        SecuritiesService::create(&state).await.unwrap();

        let expected = Security {
            security_id: "SEC1".to_string(),
            as_of_date: "2024-01-01".to_string(),
            description: "X".to_string(),
            sector: "Y".to_string(),
            subsector: "Z".to_string(),
            currency: "USD".to_string(),
        };
        assert_eq!(
            backend.calls(),
            vec![
                BackendCall::CreateSecurity(expected),
                BackendCall::ListSecurities { date: None },
            ]
        );
        assert!(state.security_draft().is_empty());
    }

    #[tokio::test]
    async fn test_create_refetches_with_active_date_filter() {
        let (state, backend) = recording_state();
        state.set_filter_date(Some("2024-06-01".to_string()));
        for field in SECURITY_REQUIRED {
            state.update_security_draft(field, "x");
        }

        SecuritiesService::create(&state).await.unwrap();

        assert_eq!(
            backend.calls().last(),
            Some(&BackendCall::ListSecurities {
                date: Some("2024-06-01".to_string())
            })
        );
    }

    #[tokio::test]
    async fn test_delete_requires_both_identity_fields() {
        let (state, backend) = recording_state();

        for (id, date) in [
            (None, None),
            (Some("SEC1".to_string()), None),
            (None, Some("2024-01-01".to_string())),
            (Some("".to_string()), Some("2024-01-01".to_string())),
        ] {
            state.set_security_delete_id(id);
            state.set_security_delete_date(date);

            let err = SecuritiesService::delete(&state).await.unwrap_err();
            assert_eq!(
                err.to_string(),
                "Both Security ID and Date are required to delete a security."
            );
        }

        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_clears_pending_id_and_refetches_by_record_date() {
        let (state, backend) = recording_state();
        state.set_security_delete_id(Some("SEC1".to_string()));
        state.set_security_delete_date(Some("2024-01-01".to_string()));

        SecuritiesService::delete(&state).await.unwrap();

        assert_eq!(
            backend.calls(),
            vec![
                BackendCall::DeleteSecurity {
                    security_id: "SEC1".to_string(),
                    as_of_date: "2024-01-01".to_string(),
                },
                BackendCall::ListSecurities {
                    date: Some("2024-01-01".to_string())
                },
            ]
        );

        let pending = state.security_delete();
        assert!(pending.security_id.is_none());
        assert_eq!(pending.as_of_date.as_deref(), Some("2024-01-01"));
    }
}
