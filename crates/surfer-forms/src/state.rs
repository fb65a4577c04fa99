//! UI state for the search page, kept as pure data.
//!
//! The page has two states: idle (search button showing) and searching
//! (progress indicator plus stop button showing). The results table fills
//! while a search runs and is reset before the next one. Nothing here
//! touches a DOM; a renderer reads [`ControlVisibility`] and the table and
//! draws whatever it likes.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which of the two page states the search UI is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
}

impl SearchPhase {
    /// Idle -> Searching. Returns false when already searching.
    pub fn start_search(&mut self) -> bool {
        match self {
            SearchPhase::Idle => {
                *self = SearchPhase::Searching;
                debug!("search started");
                true
            }
            SearchPhase::Searching => false,
        }
    }

    /// Searching -> Idle, whether the user stopped it or it completed.
    /// Returns false when already idle.
    pub fn finish(&mut self) -> bool {
        match self {
            SearchPhase::Searching => {
                *self = SearchPhase::Idle;
                debug!("search finished");
                true
            }
            SearchPhase::Idle => false,
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, SearchPhase::Searching)
    }

    /// The controls a renderer shows for this phase.
    pub fn controls(&self) -> ControlVisibility {
        match self {
            SearchPhase::Idle => ControlVisibility {
                search_button: true,
                searching_indicator: false,
                stop_button: false,
            },
            SearchPhase::Searching => ControlVisibility {
                search_button: false,
                searching_indicator: true,
                stop_button: true,
            },
        }
    }
}

/// Visibility of the three search controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlVisibility {
    pub search_button: bool,
    pub searching_indicator: bool,
    pub stop_button: bool,
}

/// One row of the results table, as pushed over the wire during a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub name: String,
    pub link: String,
}

/// The results table: a count display plus the accumulated rows.
///
/// Independent of [`SearchPhase`]; resetting the table does not stop a
/// running search, and finishing a search keeps the rows on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsTable {
    rows: Vec<ResultRow>,
}

impl ResultsTable {
    pub fn new() -> Self {
        ResultsTable::default()
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    /// What the count display shows.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Clears the table for a fresh search: count back to zero, all rows
    /// removed.
    pub fn reset(&mut self) {
        debug!(discarded = self.rows.len(), "results table reset");
        self.rows.clear();
    }
}
