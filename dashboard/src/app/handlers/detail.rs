//! # Detail Handlers
//!
//! Opening and closing the detail surface.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::core::service::MarketService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Open the detail surface for `asset_id` and start a fresh detail fetch.
///
/// Any previous chart is disposed before anything else happens, and the
/// generation bump orphans a fetch still running for a previous asset.
///
/// Internal handler function - use [`crate::app::App::open_detail`] instead.
pub(crate) fn handle_open_detail(
    state: Arc<RwLock<AppState>>,
    service: Arc<dyn MarketService>,
    event_tx: Sender<AppEvent>,
    asset_id: String,
) {
    let generation = {
        let mut state = state.write();
        let detail = &mut state.detail;

        detail.clear();
        detail.generation += 1;
        detail.open = true;
        detail.loading = true;
        detail.asset_id = Some(asset_id.clone());
        detail.generation
    };

    tracing::info!(asset_id = %asset_id, generation, "Opening detail view");
    tasks::market::fetch_detail(service, event_tx, generation, asset_id);
}

/// Close the detail surface and invalidate any in-flight detail fetch.
///
/// Internal handler function - use [`crate::app::App::close_detail`] instead.
pub(crate) fn handle_close_detail(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let detail = &mut state.detail;

    if !detail.open {
        return;
    }

    detail.clear();
    detail.generation += 1;
    detail.open = false;
    detail.asset_id = None;
    tracing::debug!(generation = detail.generation, "Detail view closed");
}
