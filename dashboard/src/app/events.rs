//! # Application Events
//!
//! Results sent from background fetch tasks back to the UI thread.

use crate::app::state::{AssetDetail, AssetSummary};
use crate::core::error::AppError;

/// Events processed on the UI thread by [`crate::app::App::handle_event`].
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Outcome of one listing refresh
    ListingResult(Result<Vec<AssetSummary>, AppError>),

    /// Outcome of one detail fetch, tagged with the detail generation it was
    /// started under
    DetailResult {
        generation: u64,
        asset_id: String,
        result: Result<AssetDetail, AppError>,
    },
}
