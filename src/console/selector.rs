//! Query selector state machine.
//!
//! Owns the predefined-query catalog and the current selection. Selection is
//! an explicit tagged state rather than flags on the entries themselves: the
//! hosting shell reads the state and re-renders, nothing mutates entries
//! after the catalog is loaded.

use tracing::{debug, warn};

use crate::api::{CatalogEntry, ExecutorClient, PredefinedQuery};
use crate::console::format::format_sql;

/// The selector's current selection.
///
/// `Picked` is "chosen but not yet confirmed": the entry's SQL and
/// description are shown read-only but nothing is forwarded downstream.
/// Only `Confirmed` forwards the SQL to the query display.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    /// No query chosen.
    #[default]
    Empty,
    /// A query is highlighted for preview.
    Picked(PredefinedQuery),
    /// The highlighted query is confirmed for execution.
    Confirmed(PredefinedQuery),
}

impl Selection {
    /// Returns true if no query is chosen.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The entry currently picked or confirmed, if any.
    pub fn entry(&self) -> Option<&PredefinedQuery> {
        match self {
            Self::Empty => None,
            Self::Picked(q) | Self::Confirmed(q) => Some(q),
        }
    }

    /// The SQL to forward downstream. Only a confirmed selection yields one.
    pub fn confirmed_sql(&self) -> Option<&str> {
        match self {
            Self::Confirmed(q) => Some(&q.sql),
            _ => None,
        }
    }
}

/// Owns the predefined-query catalog and the active selection.
#[derive(Debug, Default)]
pub struct QuerySelector {
    catalog: Vec<CatalogEntry>,
    selection: Selection,
    loaded: bool,
}

impl QuerySelector {
    /// Creates a selector with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the catalog from the collaborator, once.
    ///
    /// Every valid entry's SQL is normalized through the formatter before
    /// storage. Fetch errors are swallowed into an empty list; the selector
    /// stays usable, the operator just sees no predefined queries.
    pub async fn load_catalog(&mut self, client: &dyn ExecutorClient) {
        if self.loaded {
            return;
        }
        self.loaded = true;

        match client.fetch_catalog().await {
            Ok(entries) => {
                self.catalog = entries
                    .into_iter()
                    .map(|entry| match entry {
                        CatalogEntry::Valid(mut q) => {
                            q.sql = format_sql(&q.sql);
                            CatalogEntry::Valid(q)
                        }
                        malformed => malformed,
                    })
                    .collect();
                debug!("Loaded {} predefined queries", self.catalog.len());
            }
            Err(e) => {
                warn!("Catalog fetch failed, continuing with empty list: {e}");
                self.catalog = Vec::new();
            }
        }
    }

    /// The fetched catalog entries, in catalog order.
    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    /// The current selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Picks the valid catalog entry with the given name.
    ///
    /// Picking is not confirming: the new state is `Picked`, even when the
    /// previous state was `Confirmed`. Unknown or malformed names clear the
    /// selection instead of erroring.
    pub fn select_by_name(&mut self, name: &str) {
        let hit = self
            .catalog
            .iter()
            .filter_map(CatalogEntry::as_valid)
            .find(|q| q.name == name);

        self.selection = match hit {
            Some(q) => Selection::Picked(q.clone()),
            None => Selection::Empty,
        };
    }

    /// Confirms the current pick for execution. No-op without a pick.
    pub fn confirm_selection(&mut self) {
        if let Selection::Picked(q) = &self.selection {
            self.selection = Selection::Confirmed(q.clone());
        }
    }

    /// Resets the selection to empty. Idempotent.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::Empty;
    }
}
