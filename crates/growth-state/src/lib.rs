//! # growth-state
//!
//! Reactive state for the GDP growth chart.
//! The chart reads a single derived signal: the dataset for the selected
//! year, or `None` while the table or the year is still missing.

use growth_core::{Dataset, GrowthTable, Year};
use leptos::prelude::*;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global application state with reactive signals
#[derive(Clone, Copy)]
pub struct AppState {
    /// Raw growth table, once loaded
    pub table: RwSignal<Option<GrowthTable>>,
    /// Year picked in the toggle; none before the first click
    pub year: RwSignal<Option<Year>>,
    /// Sort bars by growth instead of table order
    pub ranked: RwSignal<bool>,
    /// Current error message
    pub error: RwSignal<Option<String>>,
    selected: Memo<Option<Dataset>>,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        let table = RwSignal::new(None::<GrowthTable>);
        let year = RwSignal::new(None::<Year>);
        let ranked = RwSignal::new(false);

        let selected = Memo::new(move |_| {
            let year = year.get()?;
            let ranked = ranked.get();
            table.with(|table| {
                let dataset = table.as_ref()?.select_year(&year);
                Some(if ranked { dataset.ranked() } else { dataset })
            })
        });

        Self {
            table,
            year,
            ranked,
            error: RwSignal::new(None),
            selected,
        }
    }

    // ========================================================================
    // Data
    // ========================================================================

    /// Install a freshly loaded table
    pub fn set_table(&self, table: GrowthTable) {
        tracing::info!("Growth table ready: {} rows", table.len());
        self.table.set(Some(table));
        self.clear_error();
    }

    /// Number of rows in the loaded table (0 before load)
    pub fn row_count(&self) -> usize {
        self.table.with(|t| t.as_ref().map_or(0, GrowthTable::len))
    }

    /// Dataset for the selected year, `None` until both table and year exist
    pub fn dataset(&self) -> Signal<Option<Dataset>> {
        self.selected.into()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Select a year
    pub fn select_year(&self, year: impl Into<Year>) {
        let year = year.into();
        tracing::debug!("Year selected: {}", year);
        self.year.set(Some(year));
    }

    /// Selected year label, empty before the first selection
    pub fn year_label(&self) -> String {
        self.year
            .with(|y| y.as_ref().map(Year::to_string).unwrap_or_default())
    }

    /// Toggle ranked ordering
    pub fn toggle_ranked(&self) {
        self.ranked.update(|r| *r = !*r);
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Set error message
    pub fn set_error(&self, msg: impl Into<String>) {
        self.error.set(Some(msg.into()));
    }

    /// Clear error
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Check if has error
    pub fn has_error(&self) -> bool {
        self.error.with(Option::is_some)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state context to component tree
pub fn provide_app_state() -> AppState {
    let state = AppState::new();
    provide_context(state);
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
