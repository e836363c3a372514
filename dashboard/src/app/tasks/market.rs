//! # Market Data Tasks
//!
//! Async tasks for the listing refresh and the per-asset detail fetch.
//! Tasks never touch `AppState` after spawning; every outcome travels back
//! to the UI thread as an [`AppEvent`].

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::MarketService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;
use tracing::{debug, error, info};

/// Start one listing refresh for the tracked asset set.
///
/// Returns `false` without spawning when a listing fetch is already in flight.
/// The in-flight flag is cleared by the listing-result handler.
pub(crate) fn fetch_listing(
    state: Arc<RwLock<AppState>>,
    service: Arc<dyn MarketService>,
    event_tx: Sender<AppEvent>,
) -> bool {
    let ids = {
        let mut state = state.write();

        // Skip if already fetching (prevents task pileup)
        if state.listing.loading {
            debug!("Listing fetch still in flight - skipping tick");
            return false;
        }

        state.listing.loading = true;
        state
            .tracked_assets
            .iter()
            .map(|asset| asset.id.clone())
            .collect::<Vec<_>>()
    }; // Lock released here

    spawn(async move {
        let result = service.get_markets(&ids).await;

        match &result {
            Ok(rows) => info!(row_count = rows.len(), "Listing refresh succeeded"),
            Err(e) => error!(error = %e, "Listing refresh failed - keeping last snapshot"),
        }

        let _ = event_tx.send(AppEvent::ListingResult(result)).await;
    });

    true
}

/// Fetch the detail record for `asset_id` under detail generation `generation`.
pub(crate) fn fetch_detail(
    service: Arc<dyn MarketService>,
    event_tx: Sender<AppEvent>,
    generation: u64,
    asset_id: String,
) {
    spawn(async move {
        let result = service.get_asset_detail(&asset_id).await;

        if let Err(e) = &result {
            error!(error = %e, asset_id = %asset_id, generation, "Detail fetch failed");
        }

        let _ = event_tx
            .send(AppEvent::DetailResult {
                generation,
                asset_id,
                result,
            })
            .await;
    });
}
