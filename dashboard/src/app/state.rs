//! # Application State Types
//!
//! All state owned by the dashboard: the Data Store of listing rows, the
//! listing view inputs, and the detail view with its chart.

use crate::app::view::ViewMode;
use crate::core::config::TrackedAsset;
use crate::ui::chart::PriceChart;
use chrono::{DateTime, Local};

pub use crate::core::models::{AssetDetail, AssetSummary, Polarity};

/// Message that replaces the listing area when a listing fetch fails.
pub const LISTING_ERROR_MESSAGE: &str = "⚠ Error fetching data. Please try again later.";

/// Inline message shown in the detail surface when its fetch fails.
pub const DETAIL_ERROR_MESSAGE: &str = "⚠ Error fetching details. Please try again later.";

/// The last successfully fetched listing.
///
/// Only ever written by the listing-result handler, and always replaced as a
/// whole.
#[derive(Debug, Clone, Default)]
pub struct MarketStore {
    assets: Vec<AssetSummary>,
}

impl MarketStore {
    pub fn replace(&mut self, assets: Vec<AssetSummary>) {
        self.assets = assets;
    }

    pub fn snapshot(&self) -> &[AssetSummary] {
        &self.assets
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }
}

/// Listing sub-state: store plus everything needed to derive the view.
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    pub store: MarketStore,
    /// Active transform; the most recent search or sort action wins
    pub view_mode: ViewMode,
    /// Text currently in the search box
    pub search_text: String,
    /// A listing fetch is in flight (drives the loading indicator and the skip guard)
    pub loading: bool,
    /// Set when the last listing fetch failed; replaces the cards
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Local>>,
}

/// Detail sub-state.
///
/// `generation` increases on every open and close; a detail result is only
/// applied when it carries the current generation.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub open: bool,
    pub generation: u64,
    pub asset_id: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub detail: Option<AssetDetail>,
    /// The single live chart instance
    pub chart: Option<PriceChart>,
    pub charts_created: u64,
    pub charts_disposed: u64,
}

impl DetailState {
    /// Dispose the live chart, if any.
    pub(crate) fn dispose_chart(&mut self) {
        if let Some(chart) = self.chart.take() {
            chart.dispose();
            self.charts_disposed += 1;
        }
    }

    /// Build the chart for `detail`, disposing the previous instance first.
    pub(crate) fn install_chart(&mut self, detail: &AssetDetail) {
        self.dispose_chart();
        self.charts_created += 1;
        self.chart = Some(PriceChart::new(self.charts_created, detail));
    }

    /// Drop the record, error and chart.
    pub(crate) fn clear(&mut self) {
        self.detail = None;
        self.error = None;
        self.loading = false;
        self.dispose_chart();
    }
}

/// Complete application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Assets requested on every refresh; fixed at startup
    pub tracked_assets: Vec<TrackedAsset>,
    pub listing: ListingState,
    pub detail: DetailState,
}

impl AppState {
    pub fn new(tracked_assets: Vec<TrackedAsset>) -> Self {
        Self {
            tracked_assets,
            listing: ListingState::default(),
            detail: DetailState::default(),
        }
    }

    /// Label for the "last updated" footer.
    pub fn last_updated_label(&self) -> Option<String> {
        self.listing
            .last_updated
            .map(|t| format!("Last Updated: {}", t.format("%-I:%M:%S %p")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(change: f64) -> AssetDetail {
        AssetDetail {
            id: "ethereum".to_string(),
            name: "Ethereum".to_string(),
            logo_url: String::new(),
            price: 3100.5,
            change_24h: change,
            market_cap: 1.0,
            volume_24h: 1.0,
            price_history: vec![1.0, 2.0, 3.0],
        }
    }

    #[test]
    fn test_store_replace_is_wholesale() {
        let mut store = MarketStore::default();
        let row = |id: &str| AssetSummary {
            id: id.to_string(),
            symbol: id.to_string(),
            name: id.to_string(),
            logo_url: String::new(),
            price: 1.0,
            change_24h: 0.0,
        };

        store.replace(vec![row("bitcoin"), row("ethereum")]);
        store.replace(vec![row("dogecoin")]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].id, "dogecoin");
    }

    #[test]
    fn test_install_chart_disposes_previous_instance() {
        let mut state = DetailState::default();

        state.install_chart(&detail(1.0));
        assert_eq!(state.charts_created, 1);
        assert_eq!(state.charts_disposed, 0);

        state.install_chart(&detail(-1.0));
        assert_eq!(state.charts_created, 2);
        assert_eq!(state.charts_disposed, 1);
        assert_eq!(state.chart.as_ref().map(|c| c.instance()), Some(2));
    }

    #[test]
    fn test_clear_disposes_chart_once() {
        let mut state = DetailState::default();
        state.install_chart(&detail(1.0));

        state.clear();
        state.clear();

        assert!(state.chart.is_none());
        assert_eq!(state.charts_disposed, 1);
    }

    #[test]
    fn test_last_updated_label_absent_before_first_fetch() {
        let state = AppState::new(Vec::new());
        assert!(state.last_updated_label().is_none());
    }
}
