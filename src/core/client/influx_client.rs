use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use reqwest::header;
use serde_json::json;

use crate::config::InfluxSettings;
use crate::core::client::flux_csv::decode_flux_csv;
use crate::core::client::flux_record::FluxRecord;
use crate::core::client::query_executor_trait::FluxQueryExecutor;

/// Client for the InfluxDB v2 `/api/v2/query` endpoint. Built once at startup
/// and shared process-wide; `reqwest::Client` pools connections internally.
pub struct InfluxClient {
    http: reqwest::Client,
    url: String,
    token: String,
    org: String,
}

impl InfluxClient {
    pub fn new(settings: &InfluxSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            url: settings.url.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
            org: settings.org.clone(),
        })
    }

    async fn query_csv(&self, flux: &str) -> Result<String> {
        let url = format!("{}/api/v2/query", self.url);
        // Plain header row, no annotations; keeps the CSV decoding simple.
        let body = json!({
            "query": flux,
            "type": "flux",
            "dialect": { "header": true, "annotations": [] },
        });

        let resp = self
            .http
            .post(&url)
            .query(&[("org", self.org.as_str())])
            .header(header::AUTHORIZATION, format!("Token {}", self.token))
            .header(header::ACCEPT, "application/csv")
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to call InfluxDB (url={}): {}", url, e))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read InfluxDB response: {}", e))?;

        if !status.is_success() {
            bail!("InfluxDB returned {}: {}", status, text);
        }
        Ok(text)
    }
}

#[async_trait]
impl FluxQueryExecutor for InfluxClient {
    async fn query(&self, flux: &str) -> Result<Vec<FluxRecord>> {
        let csv = self.query_csv(flux).await?;
        decode_flux_csv(&csv)
    }
}
