//! Console flow integration tests.
//!
//! Drives the selector and display state machines end to end against the
//! mock executor, covering the pick/confirm/clear flow and submission
//! outcomes.
//!
//! Run with: `cargo test --test console_test`

use pretty_assertions::assert_eq;
use serde_json::json;

use squint::api::{
    CatalogEntry, ExecutorClient, FailingExecutorClient, MockExecutorClient, QueryResult,
    RawCatalogEntry,
};
use squint::console::{Outcome, QueryDisplay, QuerySelector, Selection};
use squint::error::SquintError;

fn catalog_entry(name: &str, sql: &str, description: Option<&str>) -> CatalogEntry {
    CatalogEntry::from_raw(RawCatalogEntry {
        name: Some(name.to_string()),
        sql: Some(sql.to_string()),
        description: description.map(String::from),
        selected: None,
    })
}

async fn loaded_selector(catalog: Vec<CatalogEntry>) -> QuerySelector {
    let client = MockExecutorClient::with_catalog(catalog);
    let mut selector = QuerySelector::new();
    selector.load_catalog(&client).await;
    selector
}

#[tokio::test]
async fn test_catalog_sql_is_formatted_on_load() {
    let selector = loaded_selector(vec![catalog_entry(
        "A",
        "    SELECT 1\n    FROM x",
        Some("d"),
    )])
    .await;

    let q = selector.catalog()[0].as_valid().unwrap();
    assert_eq!(q.sql, "SELECT 1\nFROM x");
    assert!(!q.sql.starts_with(' '));
    assert!(!q.sql.ends_with('\n'));
}

#[tokio::test]
async fn test_confirmed_sql_flows_into_read_only_display() {
    let mut selector = loaded_selector(vec![catalog_entry(
        "A",
        "    SELECT 1\n    FROM x",
        Some("d"),
    )])
    .await;
    let mut display = QueryDisplay::new("clickhouse");

    selector.select_by_name("A");
    selector.confirm_selection();

    let sql = selector.selection().confirmed_sql().unwrap().to_string();
    display.set_predefined_sql(&sql);

    assert_eq!(display.buffer(), "SELECT 1\nFROM x");
    assert!(display.is_read_only());
}

#[tokio::test]
async fn test_picked_selection_forwards_nothing() {
    let mut selector = loaded_selector(vec![catalog_entry("A", "SELECT 1", None)]).await;

    selector.select_by_name("A");
    assert!(matches!(selector.selection(), Selection::Picked(_)));
    assert_eq!(selector.selection().confirmed_sql(), None);
}

#[tokio::test]
async fn test_result_table_dimensions_match_response() {
    struct TwoByTwo;

    #[async_trait::async_trait]
    impl ExecutorClient for TwoByTwo {
        async fn fetch_catalog(&self) -> squint::error::Result<Vec<CatalogEntry>> {
            Ok(vec![])
        }

        async fn execute(
            &self,
            _endpoint: &str,
            _sql: &str,
            _predefined: bool,
        ) -> squint::error::Result<QueryResult> {
            QueryResult::from_wire(
                vec!["id".to_string(), "name".to_string()],
                vec![vec![json!(1), json!("a")], vec![json!(2), json!("b")]],
            )
        }
    }

    let mut display = QueryDisplay::new("clickhouse");
    for c in "SELECT id, name FROM t".chars() {
        display.insert(c);
    }
    display.submit(&TwoByTwo).await;

    let Outcome::Table(result) = display.outcome() else {
        panic!("expected a table outcome");
    };
    assert_eq!(result.column_names.len(), 2);
    assert_eq!(result.rows.len(), 2);
    for row in &result.rows {
        assert_eq!(row.len(), 2);
    }
}

#[tokio::test]
async fn test_execution_error_replaces_prior_table() {
    let mut display = QueryDisplay::new("clickhouse");
    for c in "SELECT 1".chars() {
        display.insert(c);
    }

    display.submit(&MockExecutorClient::new()).await;
    assert!(matches!(display.outcome(), Outcome::Table(_)));

    display.submit(&FailingExecutorClient).await;
    assert!(matches!(display.outcome(), Outcome::Error(_)));
}

#[tokio::test]
async fn test_catalog_fetch_failure_is_silent() {
    let mut selector = QuerySelector::new();
    selector.load_catalog(&FailingExecutorClient).await;

    assert!(selector.catalog().is_empty());
    // The selector stays usable after the swallowed failure.
    selector.select_by_name("anything");
    assert!(selector.selection().is_empty());
}

#[tokio::test]
async fn test_clear_selection_is_idempotent_from_any_state() {
    let mut selector = loaded_selector(vec![catalog_entry("A", "SELECT 1", None)]).await;

    selector.select_by_name("A");
    selector.confirm_selection();
    selector.clear_selection();
    selector.clear_selection();
    assert_eq!(*selector.selection(), Selection::Empty);
}

#[tokio::test]
async fn test_slow_response_applies_after_finish() {
    // begin/finish split: the host renders between the two, the display
    // refuses a second submission in between.
    let mut display = QueryDisplay::new("clickhouse");
    for c in "SELECT 1".chars() {
        display.insert(c);
    }

    let sql = display.begin_submit().unwrap();
    assert!(display.begin_submit().is_none());

    let response = MockExecutorClient::new()
        .execute("clickhouse", &sql, false)
        .await;
    display.finish_submit(response);

    assert!(matches!(display.outcome(), Outcome::Table(_)));
    assert!(display.begin_submit().is_some());
}

#[tokio::test]
async fn test_error_messages_keep_backend_text() {
    let mut display = QueryDisplay::new("clickhouse");
    for c in "SELECT bogus".chars() {
        display.insert(c);
    }

    struct SyntaxError;

    #[async_trait::async_trait]
    impl ExecutorClient for SyntaxError {
        async fn fetch_catalog(&self) -> squint::error::Result<Vec<CatalogEntry>> {
            Ok(vec![])
        }

        async fn execute(
            &self,
            _endpoint: &str,
            _sql: &str,
            _predefined: bool,
        ) -> squint::error::Result<QueryResult> {
            Err(SquintError::execution("Unknown identifier: bogus"))
        }
    }

    display.submit(&SyntaxError).await;
    let Outcome::Error(message) = display.outcome() else {
        panic!("expected an error outcome");
    };
    assert!(message.contains("Unknown identifier: bogus"));
}
