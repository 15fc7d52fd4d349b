//! HTTP client for the remote execution service.
//!
//! Implements the ExecutorClient trait over the JSON endpoints exposed by
//! the backend: `GET /queries` for the catalog and `POST /query` for
//! execution.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::api::types::{CatalogEntry, QueryResult, RawCatalogEntry};
use crate::api::ExecutorClient;
use crate::error::{Result, SquintError};

/// Default timeout for requests to the execution service.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP executor client configuration.
#[derive(Debug, Clone)]
pub struct HttpExecutorConfig {
    /// Base URL of the execution service (e.g., "http://localhost:1219").
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl HttpExecutorConfig {
    /// Creates a new config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// HTTP client for the catalog and execution endpoints.
#[derive(Debug, Clone)]
pub struct HttpExecutorClient {
    config: HttpExecutorConfig,
    client: Client,
}

/// Request body for the execution endpoint.
#[derive(Debug, Serialize)]
struct ExecuteRequest<'a> {
    endpoint: &'a str,
    sql: &'a str,
    predefined: bool,
}

/// Response body from the execution endpoint.
#[derive(Debug, Deserialize)]
struct ExecuteResponse {
    column_names: Vec<String>,
    rows: Vec<Vec<serde_json::Value>>,
}

/// Error body the backend returns on failed requests.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

impl HttpExecutorClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: HttpExecutorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SquintError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Extracts a readable message from an error response body.
    fn parse_error(status: reqwest::StatusCode, body: &str) -> String {
        if let Ok(err) = serde_json::from_str::<ErrorResponse>(body) {
            return err.error;
        }
        format!("backend returned {status}: {body}")
    }
}

#[async_trait]
impl ExecutorClient for HttpExecutorClient {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>> {
        let response = self
            .client
            .get(self.url("queries"))
            .send()
            .await
            .map_err(|e| SquintError::catalog(format!("Catalog request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SquintError::catalog(Self::parse_error(status, &body)));
        }

        let raw: Vec<RawCatalogEntry> = response
            .json()
            .await
            .map_err(|e| SquintError::catalog(format!("Invalid catalog payload: {e}")))?;

        Ok(raw.into_iter().map(CatalogEntry::from_raw).collect())
    }

    async fn execute(&self, endpoint: &str, sql: &str, predefined: bool) -> Result<QueryResult> {
        let response = self
            .client
            .post(self.url("query"))
            .json(&ExecuteRequest {
                endpoint,
                sql,
                predefined,
            })
            .send()
            .await
            .map_err(|e| SquintError::execution(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SquintError::execution(Self::parse_error(status, &body)));
        }

        let body: ExecuteResponse = response
            .json()
            .await
            .map_err(|e| SquintError::execution(format!("Invalid result payload: {e}")))?;

        QueryResult::from_wire(body.column_names, body.rows)
    }
}
