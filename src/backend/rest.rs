//! reqwest-based client for the securities backend

use crate::backend::types::{Metric, MetricKey, MetricsQuery, Security, YieldChange};
use crate::backend::RefDataBackend;
use crate::config::BackendConfig;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

/// REST client for the securities backend
pub struct RestBackend {
    base_url: String,
    client: Client,
}

impl RestBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    fn securities_url(&self, date: Option<&str>) -> String {
        let url = format!("{}/securities", self.base_url);
        match date {
            Some(date) => format!("{}?date={}", url, urlencoding::encode(date)),
            None => url,
        }
    }

    fn metrics_url(&self, query: &MetricsQuery) -> String {
        let mut params = Vec::new();
        if let Some(date) = &query.date {
            params.push(format!("date={}", urlencoding::encode(date)));
        }
        if let Some(security_id) = &query.security_id {
            params.push(format!("securityId={}", urlencoding::encode(security_id)));
        }

        let url = format!("{}/metrics", self.base_url);
        if params.is_empty() {
            url
        } else {
            format!("{}?{}", url, params.join("&"))
        }
    }

    fn delete_security_url(&self, security_id: &str, as_of_date: &str) -> String {
        format!(
            "{}/securities/{}?date={}",
            self.base_url,
            security_id,
            urlencoding::encode(as_of_date)
        )
    }
}

#[async_trait]
impl RefDataBackend for RestBackend {
    async fn list_securities(&self, date: Option<&str>) -> Result<Vec<Value>> {
        let request_id = Uuid::new_v4();
        let url = self.securities_url(date);
        tracing::debug!(%request_id, %url, "GET securities");

        let response = self.client.get(&url).send().await?;
        Ok(response.json().await?)
    }

    async fn create_security(&self, security: &Security) -> Result<()> {
        let request_id = Uuid::new_v4();
        let url = format!("{}/securities/addSecurity", self.base_url);
        tracing::debug!(%request_id, %url, security_id = %security.security_id, "POST security");

        // The response body and status are not inspected; the caller
        // refreshes the list either way.
        self.client.post(&url).json(security).send().await?;
        Ok(())
    }

    async fn delete_security(&self, security_id: &str, as_of_date: &str) -> Result<()> {
        let request_id = Uuid::new_v4();
        let url = self.delete_security_url(security_id, as_of_date);
        tracing::debug!(%request_id, %url, "DELETE security");

        self.client.delete(&url).send().await?;
        Ok(())
    }

    async fn list_metrics(&self, query: &MetricsQuery) -> Result<Vec<Value>> {
        let request_id = Uuid::new_v4();
        let url = self.metrics_url(query);
        tracing::debug!(%request_id, %url, "GET metrics");

        let response = self.client.get(&url).send().await?;
        Ok(response.json().await?)
    }

    async fn create_metric(&self, metric: &Metric) -> Result<()> {
        let request_id = Uuid::new_v4();
        let url = format!("{}/metrics", self.base_url);
        tracing::debug!(%request_id, %url, metric_name = %metric.metric_name, "POST metric");

        self.client.post(&url).json(metric).send().await?;
        Ok(())
    }

    async fn delete_metric(&self, key: &MetricKey) -> Result<()> {
        let request_id = Uuid::new_v4();
        let url = format!("{}/metrics", self.base_url);
        tracing::debug!(%request_id, %url, metric_name = %key.metric_name, "DELETE metric");

        self.client.delete(&url).json(key).send().await?;
        Ok(())
    }

    async fn largest_yield_change(&self) -> Result<YieldChange> {
        let request_id = Uuid::new_v4();
        let url = format!("{}/metricsLargestChangeOnYield", self.base_url);
        tracing::debug!(%request_id, %url, "GET largest yield change");

        let response = self.client.get(&url).send().await?;
        Ok(response.json().await?)
    }
}
