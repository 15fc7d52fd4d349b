//! SQL formatting for catalog-stored statements.
//!
//! The catalog stores predefined SQL with a fixed 4-space indentation prefix
//! on every line. This module strips that prefix for display. It is a
//! formatting convention, not a general SQL pretty-printer: the function is
//! idempotent only on input that has no 4-space-indented lines.

/// Width of the indentation prefix the catalog imposes on stored SQL.
const CATALOG_INDENT: &str = "    ";

/// Strips the catalog's 4-space indentation prefix from every line and trims
/// leading/trailing whitespace from the result.
pub fn format_sql(raw: &str) -> String {
    let stripped: Vec<&str> = raw
        .lines()
        .map(|line| line.strip_prefix(CATALOG_INDENT).unwrap_or(line))
        .collect();
    stripped.join("\n").trim().to_string()
}

/// Formats an optional SQL string; absent input yields the empty string.
pub fn format_sql_opt(raw: Option<&str>) -> String {
    raw.map(format_sql).unwrap_or_default()
}
