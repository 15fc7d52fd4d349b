//! Wire and domain types for the executor and catalog collaborators.
//!
//! Defines the structures used to represent catalog entries and query
//! results returned by the remote execution service.

use crate::error::{Result, SquintError};
use serde::Deserialize;
use std::fmt;

/// A predefined query parsed from the catalog with all required fields present.
#[derive(Debug, Clone, PartialEq)]
pub struct PredefinedQuery {
    /// Catalog key, unique among fetched entries.
    pub name: String,
    /// The SQL statement body.
    pub sql: String,
    /// Operator-facing description, if the catalog provides one.
    pub description: Option<String>,
}

/// A catalog entry as fetched from the catalog service.
///
/// Entries missing `name` or `sql` are kept as `Malformed` so they can still
/// be listed, but they can never be picked into a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEntry {
    /// An entry with all required fields.
    Valid(PredefinedQuery),
    /// An entry the catalog returned incomplete.
    Malformed {
        name: Option<String>,
        sql: Option<String>,
        description: Option<String>,
    },
}

/// Raw catalog entry as it appears on the wire, everything optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalogEntry {
    pub name: Option<String>,
    pub sql: Option<String>,
    pub description: Option<String>,
    /// Present in some catalog payloads; selection state is owned by the
    /// console, so the flag is accepted and ignored.
    #[serde(default)]
    #[allow(dead_code)]
    pub selected: Option<bool>,
}

impl CatalogEntry {
    /// Classifies a raw wire entry into valid or malformed form.
    pub fn from_raw(raw: RawCatalogEntry) -> Self {
        match (raw.name, raw.sql) {
            (Some(name), Some(sql)) => Self::Valid(PredefinedQuery {
                name,
                sql,
                description: raw.description,
            }),
            (name, sql) => Self::Malformed {
                name,
                sql,
                description: raw.description,
            },
        }
    }

    /// Returns the valid entry, if this one is.
    pub fn as_valid(&self) -> Option<&PredefinedQuery> {
        match self {
            Self::Valid(q) => Some(q),
            Self::Malformed { .. } => None,
        }
    }

    /// Name to show in the selector list. Malformed entries without a name
    /// fall back to a placeholder.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Valid(q) => &q.name,
            Self::Malformed { name, .. } => name.as_deref().unwrap_or("(unnamed)"),
        }
    }
}

/// Represents the result of executing a SQL query on the remote service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    /// Column names for the result set, in order.
    pub column_names: Vec<String>,
    /// Rows of data; every row has exactly `column_names.len()` values.
    pub rows: Vec<Row>,
}

impl QueryResult {
    /// Creates a result from wire data, checking the row-width invariant.
    pub fn from_wire(column_names: Vec<String>, rows: Vec<Vec<serde_json::Value>>) -> Result<Self> {
        let width = column_names.len();
        let mut converted = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(SquintError::execution(format!(
                    "row {} has {} values but {} columns were returned",
                    i,
                    row.len(),
                    width
                )));
            }
            converted.push(row.into_iter().map(Value::from).collect());
        }
        Ok(Self {
            column_names,
            rows: converted,
        })
    }

    /// Returns true if the result set has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows in the result.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A row of data from a query result.
pub type Row = Vec<Value>;

/// A single value from a query result.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// NULL value.
    #[default]
    Null,

    /// Boolean value.
    Bool(bool),

    /// Signed integer (up to i64).
    Int(i64),

    /// Floating point number.
    Float(f64),

    /// Text/string value.
    String(String),

    /// Nested JSON (arrays, objects) passed through as-is.
    Json(serde_json::Value),
}

impl Value {
    /// Returns true if this value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Converts the value to a string representation for table cells.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
            Value::Json(v) => v.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            other => Value::Json(other),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_display_string(), "NULL");
        assert_eq!(Value::Bool(true).to_display_string(), "true");
        assert_eq!(Value::Int(42).to_display_string(), "42");
        assert_eq!(Value::Float(2.71).to_display_string(), "2.71");
        assert_eq!(
            Value::String("hello".to_string()).to_display_string(),
            "hello"
        );
        assert_eq!(
            Value::Json(json!([1, 2])).to_display_string(),
            "[1,2]"
        );
    }

    #[test]
    fn test_value_from_json() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(true)), Value::Bool(true));
        assert_eq!(Value::from(json!(42)), Value::Int(42));
        assert_eq!(Value::from(json!(2.5)), Value::Float(2.5));
        assert_eq!(Value::from(json!("a")), Value::String("a".to_string()));
        assert_eq!(Value::from(json!({"k": 1})), Value::Json(json!({"k": 1})));
    }

    #[test]
    fn test_query_result_from_wire() {
        let result = QueryResult::from_wire(
            vec!["id".to_string(), "name".to_string()],
            vec![vec![json!(1), json!("a")], vec![json!(2), json!("b")]],
        )
        .unwrap();

        assert_eq!(result.column_names, vec!["id", "name"]);
        assert_eq!(result.row_count(), 2);
        assert_eq!(result.rows[0], vec![Value::Int(1), Value::from("a")]);
    }

    #[test]
    fn test_query_result_rejects_ragged_rows() {
        let err = QueryResult::from_wire(
            vec!["id".to_string(), "name".to_string()],
            vec![vec![json!(1)]],
        )
        .unwrap_err();

        assert!(err.to_string().contains("row 0"));
    }

    #[test]
    fn test_catalog_entry_valid() {
        let entry = CatalogEntry::from_raw(RawCatalogEntry {
            name: Some("A".to_string()),
            sql: Some("SELECT 1".to_string()),
            description: Some("d".to_string()),
            selected: None,
        });

        let query = entry.as_valid().unwrap();
        assert_eq!(query.name, "A");
        assert_eq!(query.sql, "SELECT 1");
        assert_eq!(entry.display_name(), "A");
    }

    #[test]
    fn test_catalog_entry_malformed_missing_sql() {
        let entry = CatalogEntry::from_raw(RawCatalogEntry {
            name: Some("broken".to_string()),
            sql: None,
            ..Default::default()
        });

        assert!(entry.as_valid().is_none());
        assert_eq!(entry.display_name(), "broken");
    }

    #[test]
    fn test_catalog_entry_malformed_missing_name() {
        let entry = CatalogEntry::from_raw(RawCatalogEntry::default());
        assert!(entry.as_valid().is_none());
        assert_eq!(entry.display_name(), "(unnamed)");
    }
}
