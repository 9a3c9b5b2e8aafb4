//! Backend endpoint configuration

use crate::error::{AppError, Result};
use url::Url;

/// Default backend base URL when no override is set
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable overriding the backend base URL
pub const BASE_URL_ENV: &str = "REFDATA_BACKEND_URL";

/// Connection settings for the securities backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
}

impl BackendConfig {
    /// Read configuration from the environment, falling back to the default
    pub fn from_env() -> Result<Self> {
        match std::env::var(BASE_URL_ENV) {
            Ok(raw) => Self::with_base_url(&raw),
            Err(_) => Self::with_base_url(DEFAULT_BASE_URL),
        }
    }

    /// Build a configuration from an explicit base URL
    pub fn with_base_url(raw: &str) -> Result<Self> {
        Url::parse(raw)
            .map_err(|e| AppError::Config(format!("Invalid backend URL '{}': {}", raw, e)))?;

        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
