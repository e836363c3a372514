//! # Listing Handlers
//!
//! Search and sort actions. Both only swap the active [`ViewMode`]; the
//! Data Store is never touched and no fetch is started.

use crate::app::state::AppState;
use crate::app::view::{SortKey, ViewMode};
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle a change of the search box text.
///
/// Internal handler function - use [`crate::app::App::handle_search_input`] instead.
pub(crate) fn handle_search_input(state: Arc<RwLock<AppState>>, text: String) {
    let mut state = state.write();
    state.listing.view_mode = ViewMode::Filtered(text.clone());
    state.listing.search_text = text;
    // Re-rendering from the store replaces a stale error message
    state.listing.error = None;
}

/// Handle a sort button.
///
/// Internal handler function - use [`crate::app::App::handle_sort`] instead.
pub(crate) fn handle_sort(state: Arc<RwLock<AppState>>, key: SortKey) {
    let mut state = state.write();
    tracing::debug!(sort = key.label(), "Sort selected");
    state.listing.view_mode = ViewMode::Sorted(key);
    state.listing.error = None;
}
