//! Collaborator contracts for the remote execution service.
//!
//! Provides a trait-based interface over the catalog and query-execution
//! endpoints, allowing the HTTP client and test mocks to be used
//! interchangeably.

mod http;
mod mock;
mod types;

pub use http::{HttpExecutorClient, HttpExecutorConfig};
pub use mock::{FailingExecutorClient, MockExecutorClient};
pub use types::{CatalogEntry, PredefinedQuery, QueryResult, RawCatalogEntry, Row, Value};

use crate::error::Result;
use async_trait::async_trait;

/// Trait defining the interface to the remote execution service.
///
/// All operations are async and return Results with SquintError.
#[async_trait]
pub trait ExecutorClient: Send + Sync {
    /// Fetches the list of predefined queries from the catalog endpoint.
    ///
    /// Called exactly once per console lifetime.
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>>;

    /// Submits a SQL statement to the named execution endpoint.
    ///
    /// `predefined` tells the backend the statement came from the catalog
    /// rather than being operator-typed.
    async fn execute(&self, endpoint: &str, sql: &str, predefined: bool) -> Result<QueryResult>;
}
