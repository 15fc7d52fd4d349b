//! Mock executor clients for testing.
//!
//! Provides in-memory implementations of the ExecutorClient trait for
//! headless testing and the `--mock` demo mode.

use async_trait::async_trait;
use serde_json::json;

use crate::api::types::{CatalogEntry, QueryResult, RawCatalogEntry};
use crate::api::ExecutorClient;
use crate::error::{Result, SquintError};

/// A mock executor that returns a fixed catalog and canned results.
pub struct MockExecutorClient {
    catalog: Vec<CatalogEntry>,
}

impl MockExecutorClient {
    /// Creates a mock with a small demo catalog.
    pub fn new() -> Self {
        let raw = vec![
            RawCatalogEntry {
                name: Some("active_users".to_string()),
                sql: Some("    SELECT id, name\n    FROM users\n    WHERE active".to_string()),
                description: Some("Users currently marked active".to_string()),
                selected: None,
            },
            RawCatalogEntry {
                name: Some("row_counts".to_string()),
                sql: Some("    SELECT count(*)\n    FROM events".to_string()),
                description: None,
                selected: None,
            },
        ];
        Self {
            catalog: raw.into_iter().map(CatalogEntry::from_raw).collect(),
        }
    }

    /// Creates a mock with the given catalog entries.
    pub fn with_catalog(catalog: Vec<CatalogEntry>) -> Self {
        Self { catalog }
    }
}

impl Default for MockExecutorClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExecutorClient for MockExecutorClient {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>> {
        Ok(self.catalog.clone())
    }

    async fn execute(&self, _endpoint: &str, sql: &str, _predefined: bool) -> Result<QueryResult> {
        QueryResult::from_wire(
            vec!["sql".to_string(), "rows_read".to_string()],
            vec![vec![json!(sql), json!(1)]],
        )
    }
}

/// An executor whose every operation fails, for error-path testing.
pub struct FailingExecutorClient;

#[async_trait]
impl ExecutorClient for FailingExecutorClient {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>> {
        Err(SquintError::catalog("catalog endpoint unreachable"))
    }

    async fn execute(&self, _endpoint: &str, _sql: &str, _predefined: bool) -> Result<QueryResult> {
        Err(SquintError::execution("executor unavailable"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_catalog() {
        let client = MockExecutorClient::new();
        let catalog = client.fetch_catalog().await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog[0].as_valid().is_some());
    }

    #[tokio::test]
    async fn test_mock_execute_echoes_sql() {
        let client = MockExecutorClient::new();
        let result = client.execute("default", "SELECT 1", false).await.unwrap();
        assert_eq!(result.row_count(), 1);
        assert_eq!(result.rows[0][0].to_display_string(), "SELECT 1");
    }

    #[tokio::test]
    async fn test_failing_client() {
        let client = FailingExecutorClient;
        assert!(client.fetch_catalog().await.is_err());
        assert!(client.execute("default", "SELECT 1", false).await.is_err());
    }
}
