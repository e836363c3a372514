//! # Event Handler
//!
//! Applies results from background tasks to application state. This is the
//! only place the Data Store is written.

use crate::app::state::{AssetDetail, AssetSummary, DETAIL_ERROR_MESSAGE, LISTING_ERROR_MESSAGE};
use crate::app::{App, AppEvent};
use crate::core::error::AppError;
use chrono::Local;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle one async result.
    ///
    /// Acquires the write lock per event and releases it before returning.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::ListingResult(result) => {
                self.handle_listing_result(result);
            }
            AppEvent::DetailResult {
                generation,
                asset_id,
                result,
            } => {
                self.handle_detail_result(generation, asset_id, result);
            }
        }
    }
}

impl App {
    fn handle_listing_result(&mut self, result: Result<Vec<AssetSummary>, AppError>) {
        let mut state = self.state.write();
        state.listing.loading = false;

        match result {
            Ok(rows) => {
                tracing::debug!(row_count = rows.len(), "Replacing market snapshot");
                state.listing.store.replace(rows);
                state.listing.error = None;
                state.listing.last_updated = Some(Local::now());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Showing listing error");
                state.listing.error = Some(LISTING_ERROR_MESSAGE.to_string());
            }
        }
    }

    fn handle_detail_result(
        &mut self,
        generation: u64,
        asset_id: String,
        result: Result<AssetDetail, AppError>,
    ) {
        let mut state = self.state.write();
        let detail = &mut state.detail;

        if generation != detail.generation {
            tracing::debug!(
                asset_id = %asset_id,
                generation,
                current = detail.generation,
                "Discarding stale detail result"
            );
            return;
        }

        detail.loading = false;
        match result {
            Ok(record) => {
                detail.install_chart(&record);
                detail.detail = Some(record);
                detail.error = None;
            }
            Err(e) => {
                tracing::warn!(asset_id = %asset_id, error = %e, "Showing detail error");
                detail.error = Some(DETAIL_ERROR_MESSAGE.to_string());
            }
        }
    }
}
