//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the refresh scheduler, the background fetch
//! tasks, and the state read by the UI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains events, polls the scheduler    │   │
//! │  │  - handle_event() - applies async results            │   │
//! │  │  - handle_search_input() / handle_sort()             │   │
//! │  │  - open_detail() / close_detail()                    │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - written only on this thread                       │   │
//! │  │  - read by ui::render every frame                    │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Task Threads (Tokio)                     │
//! │  - tasks::market::fetch_listing() - batched listing         │
//! │  - tasks::market::fetch_detail()  - one asset, generation   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Event-Driven Communication
//!
//! ```rust,ignore
//! // Async task sends its result
//! event_tx.send(AppEvent::ListingResult(result)).await;
//!
//! // Main thread receives it in on_tick()
//! while let Ok(event) = app.event_rx.try_recv() {
//!     app.handle_event(event);
//! }
//! ```
//!
//! ## Related Modules
//!
//! - [`state`]: Application state types
//! - [`view`]: Filter/sort projection of the Data Store
//! - [`scheduler`]: Fixed-cadence refresh timer
//! - [`events`]: Event enum for async results

pub mod events;
pub mod scheduler;
pub mod state;
pub mod view;

mod event_handler;
mod handlers;
mod tasks;

pub use events::AppEvent;
pub use scheduler::RefreshScheduler;
pub use state::*;
pub use view::{SortKey, ViewMode};

use crate::core::config::DashboardConfig;
use crate::core::error::Result;
use crate::core::service::MarketService;
use crate::services::api::ApiClient;
use async_channel::{unbounded, Receiver, Sender};
use event_handler::AppEventHandler;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main application orchestrator.
///
/// Owns the event channel, the market data service and the refresh
/// scheduler. Everything that mutates [`AppState`] runs on the thread that
/// calls into `App`.
pub struct App {
    /// Shared application state.
    ///
    /// Hold locks briefly; the render path takes a read lock every frame.
    pub state: Arc<RwLock<AppState>>,

    /// Receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned task.
    event_tx: Sender<AppEvent>,

    service: Arc<dyn MarketService>,
    scheduler: RefreshScheduler,
}

impl App {
    /// Create an app backed by the HTTP market data client.
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let client = ApiClient::new(config)?;
        Ok(Self::with_service(config, Arc::new(client)))
    }

    /// Create an app backed by any [`MarketService`].
    pub fn with_service(config: &DashboardConfig, service: Arc<dyn MarketService>) -> Self {
        let (event_tx, event_rx) = unbounded();
        let state = AppState::new(config.tracked_assets.clone());

        tracing::info!(
            tracked = state.tracked_assets.len(),
            refresh_secs = config.refresh_interval.as_secs(),
            "App state initialized"
        );

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            service,
            scheduler: RefreshScheduler::new(config.refresh_interval),
        }
    }

    /// Called every frame: applies pending results, then starts a listing
    /// refresh when one is due. The first call always refreshes.
    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    pub(crate) fn on_tick_at(&mut self, now: Instant) {
        self.process_pending_events();

        if self.scheduler.poll(now) {
            self.refresh();
        }
    }

    /// Start a listing refresh. Returns `false` when one is already in flight.
    pub fn refresh(&mut self) -> bool {
        tasks::market::fetch_listing(
            self.state.clone(),
            self.service.clone(),
            self.event_tx.clone(),
        )
    }

    /// Apply every event already waiting in the channel without blocking.
    pub fn process_pending_events(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        processed
    }

    /// Apply one async result to state.
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    /// Search box changed: filter the current snapshot by `text`.
    pub fn handle_search_input(&mut self, text: String) {
        handlers::listing::handle_search_input(self.state.clone(), text);
    }

    /// Sort button pressed: order the current snapshot by `key`.
    pub fn handle_sort(&mut self, key: SortKey) {
        handlers::listing::handle_sort(self.state.clone(), key);
    }

    /// "View Details" pressed on a card.
    pub fn open_detail(&mut self, asset_id: &str) {
        handlers::detail::handle_open_detail(
            self.state.clone(),
            self.service.clone(),
            self.event_tx.clone(),
            asset_id.to_string(),
        );
    }

    /// Close control of the detail surface.
    pub fn close_detail(&mut self) {
        handlers::detail::handle_close_detail(self.state.clone());
    }

    /// Time until the scheduler fires again, for repaint scheduling.
    pub fn time_until_next_refresh(&self) -> Duration {
        self.scheduler.time_until_next(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::core::service::mock::MockMarketService;
    use crate::ui::screens::detail::DetailView;
    use crate::ui::screens::listing::{listing_area, ListingArea};
    use crate::ui::theme::Theme;

    fn asset(id: &str, symbol: &str, name: &str, price: f64, change: f64) -> AssetSummary {
        AssetSummary {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            logo_url: format!("https://assets.example/{}.png", id),
            price,
            change_24h: change,
        }
    }

    fn detail(id: &str, name: &str, change: f64) -> AssetDetail {
        AssetDetail {
            id: id.to_string(),
            name: name.to_string(),
            logo_url: format!("https://assets.example/{}-large.png", id),
            price: 3100.5,
            change_24h: change,
            market_cap: 372_000_000_000.0,
            volume_24h: 15_000_000_000.0,
            price_history: vec![3000.0, 3050.0, 3100.5],
        }
    }

    fn app_with(mock: Arc<MockMarketService>) -> App {
        App::with_service(&DashboardConfig::default(), mock)
    }

    /// Wait for the next task result and apply it.
    async fn apply_next_event(app: &mut App) {
        let event = tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv())
            .await
            .expect("timed out waiting for event")
            .expect("event channel closed");
        app.handle_event(event);
    }

    fn visible_ids(app: &App) -> Vec<String> {
        let state = app.state.read();
        view::project(state.listing.store.snapshot(), &state.listing.view_mode)
            .iter()
            .map(|a| a.id.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_first_tick_fetches_and_store_equals_result() {
        let mock = Arc::new(MockMarketService::new());
        let rows = vec![
            asset("bitcoin", "btc", "Bitcoin", 50000.0, 5.0),
            asset("dogecoin", "doge", "Dogecoin", 0.1, -3.0),
        ];
        mock.set_listing(Ok(rows.clone()));
        let mut app = app_with(mock.clone());

        app.on_tick();
        assert!(app.state.read().listing.loading);

        apply_next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(mock.listing_calls(), 1);
        assert_eq!(state.listing.store.snapshot(), rows.as_slice());
        assert!(!state.listing.loading);
        assert!(state.listing.error.is_none());
        assert!(state.last_updated_label().is_some());
    }

    #[tokio::test]
    async fn test_refresh_replaces_store_without_merge() {
        let mock = Arc::new(MockMarketService::new());
        mock.set_listing(Ok(vec![
            asset("bitcoin", "btc", "Bitcoin", 50000.0, 5.0),
            asset("ethereum", "eth", "Ethereum", 3000.0, 1.0),
        ]));
        let mut app = app_with(mock.clone());
        app.refresh();
        apply_next_event(&mut app).await;

        let second = vec![asset("dogecoin", "doge", "Dogecoin", 0.1, -3.0)];
        mock.set_listing(Ok(second.clone()));
        app.refresh();
        apply_next_event(&mut app).await;

        assert_eq!(app.state.read().listing.store.snapshot(), second.as_slice());
    }

    #[tokio::test]
    async fn test_listing_failure_keeps_store_and_shows_warning() {
        let mock = Arc::new(MockMarketService::new());
        let rows = vec![asset("bitcoin", "btc", "Bitcoin", 50000.0, 5.0)];
        mock.set_listing(Ok(rows.clone()));
        let mut app = app_with(mock.clone());
        app.refresh();
        apply_next_event(&mut app).await;

        mock.set_listing(Err(AppError::Api("HTTP 500 Internal Server Error".to_string())));
        app.refresh();
        apply_next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.listing.store.snapshot(), rows.as_slice());
        assert!(!state.listing.loading);
        assert_eq!(
            listing_area(&state.listing),
            ListingArea::Error(LISTING_ERROR_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_tick_during_inflight_fetch_is_skipped() {
        let mock = Arc::new(MockMarketService::new());
        let mut app = app_with(mock.clone());

        assert!(app.refresh());
        assert!(!app.refresh());
        apply_next_event(&mut app).await;

        assert_eq!(mock.listing_calls(), 1);
        assert!(app.event_rx.is_empty());

        assert!(app.refresh());
        apply_next_event(&mut app).await;
        assert_eq!(mock.listing_calls(), 2);
    }

    #[tokio::test]
    async fn test_scheduler_drives_refresh_cadence() {
        let mock = Arc::new(MockMarketService::new());
        let mut app = app_with(mock.clone());
        let start = Instant::now();

        app.on_tick_at(start);
        apply_next_event(&mut app).await;
        app.on_tick_at(start + Duration::from_secs(10));
        assert!(!app.state.read().listing.loading);

        app.on_tick_at(start + Duration::from_secs(30));
        assert!(app.state.read().listing.loading);
        apply_next_event(&mut app).await;

        assert_eq!(mock.listing_calls(), 2);
    }

    #[tokio::test]
    async fn test_sort_and_filter_scenario() {
        let mock = Arc::new(MockMarketService::new());
        mock.set_listing(Ok(vec![
            asset("bitcoin", "btc", "Bitcoin", 50000.0, 5.0),
            asset("dogecoin", "doge", "Dogecoin", 0.1, -3.0),
        ]));
        let mut app = app_with(mock.clone());
        app.refresh();
        apply_next_event(&mut app).await;

        app.handle_sort(SortKey::PriceHigh);
        assert_eq!(visible_ids(&app), vec!["bitcoin", "dogecoin"]);

        app.handle_sort(SortKey::Losers);
        assert_eq!(visible_ids(&app), vec!["dogecoin", "bitcoin"]);

        app.handle_search_input("do".to_string());
        assert_eq!(visible_ids(&app), vec!["dogecoin"]);

        // Most recent action wins: sorting drops the filter
        app.handle_sort(SortKey::Gainers);
        assert_eq!(visible_ids(&app), vec!["bitcoin", "dogecoin"]);
        assert_eq!(mock.listing_calls(), 1);
    }

    #[tokio::test]
    async fn test_refresh_reapplies_active_sort() {
        let mock = Arc::new(MockMarketService::new());
        let mut app = app_with(mock.clone());
        app.handle_sort(SortKey::PriceLow);

        mock.set_listing(Ok(vec![
            asset("bitcoin", "btc", "Bitcoin", 50000.0, 5.0),
            asset("solana", "sol", "Solana", 150.0, 2.0),
            asset("dogecoin", "doge", "Dogecoin", 0.1, -3.0),
        ]));
        app.refresh();
        apply_next_event(&mut app).await;

        assert_eq!(visible_ids(&app), vec!["dogecoin", "solana", "bitcoin"]);
    }

    #[tokio::test]
    async fn test_view_action_clears_listing_error() {
        let mock = Arc::new(MockMarketService::new());
        mock.set_listing(Err(AppError::Api("Network error".to_string())));
        let mut app = app_with(mock.clone());
        app.refresh();
        apply_next_event(&mut app).await;
        assert!(app.state.read().listing.error.is_some());

        app.handle_search_input("btc".to_string());
        assert!(app.state.read().listing.error.is_none());
    }

    #[tokio::test]
    async fn test_opening_second_detail_disposes_exactly_one_chart() {
        let mock = Arc::new(MockMarketService::new());
        mock.set_detail("bitcoin", Ok(detail("bitcoin", "Bitcoin", 5.0)));
        mock.set_detail("ethereum", Ok(detail("ethereum", "Ethereum", -2.5)));
        let mut app = app_with(mock.clone());

        app.open_detail("bitcoin");
        apply_next_event(&mut app).await;
        {
            let state = app.state.read();
            assert_eq!(state.detail.charts_created, 1);
            assert_eq!(state.detail.charts_disposed, 0);
        }

        app.open_detail("ethereum");
        {
            let state = app.state.read();
            assert!(state.detail.chart.is_none());
            assert_eq!(state.detail.charts_disposed, 1);
            assert_eq!(state.detail.charts_created, 1);
        }

        apply_next_event(&mut app).await;
        let state = app.state.read();
        assert_eq!(state.detail.charts_created, 2);
        assert_eq!(state.detail.charts_disposed, 1);
        assert_eq!(mock.detail_calls(), 2);
    }

    #[tokio::test]
    async fn test_ethereum_detail_with_negative_change() {
        let mock = Arc::new(MockMarketService::new());
        mock.set_detail("ethereum", Ok(detail("ethereum", "Ethereum", -2.5)));
        let mut app = app_with(mock.clone());

        app.open_detail("ethereum");
        apply_next_event(&mut app).await;

        let state = app.state.read();
        let record = state.detail.detail.as_ref().expect("detail loaded");
        let chart = state.detail.chart.as_ref().expect("chart built");
        let theme = Theme::default();
        let view = DetailView::new(record, &theme);

        assert_eq!(chart.polarity(), Polarity::Loss);
        assert_eq!(chart.color(&theme), theme.chart_loss);
        assert_eq!(view.change, "24h Change: -2.50%");
        assert_eq!(view.change_color, theme.price_down);
        assert!(!state.detail.loading);
    }

    #[tokio::test]
    async fn test_stale_detail_result_is_discarded() {
        let mock = Arc::new(MockMarketService::new());
        mock.set_detail("bitcoin", Ok(detail("bitcoin", "Bitcoin", 5.0)));
        mock.set_detail("ethereum", Ok(detail("ethereum", "Ethereum", -2.5)));
        let mut app = app_with(mock.clone());

        app.open_detail("bitcoin");
        app.open_detail("ethereum");
        apply_next_event(&mut app).await;
        apply_next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.detail.asset_id.as_deref(), Some("ethereum"));
        assert_eq!(
            state.detail.detail.as_ref().map(|d| d.id.as_str()),
            Some("ethereum")
        );
        assert_eq!(state.detail.charts_created, 1);
    }

    #[tokio::test]
    async fn test_close_invalidates_inflight_detail() {
        let mock = Arc::new(MockMarketService::new());
        mock.set_detail("bitcoin", Ok(detail("bitcoin", "Bitcoin", 5.0)));
        let mut app = app_with(mock.clone());

        app.open_detail("bitcoin");
        app.close_detail();
        apply_next_event(&mut app).await;

        let state = app.state.read();
        assert!(!state.detail.open);
        assert!(state.detail.detail.is_none());
        assert!(state.detail.chart.is_none());
        assert_eq!(state.detail.charts_created, 0);
    }

    #[tokio::test]
    async fn test_close_disposes_live_chart() {
        let mock = Arc::new(MockMarketService::new());
        mock.set_detail("bitcoin", Ok(detail("bitcoin", "Bitcoin", 5.0)));
        let mut app = app_with(mock.clone());

        app.open_detail("bitcoin");
        apply_next_event(&mut app).await;
        app.close_detail();

        let state = app.state.read();
        assert!(state.detail.chart.is_none());
        assert_eq!(state.detail.charts_disposed, 1);
    }

    #[tokio::test]
    async fn test_detail_failure_shows_inline_error() {
        let mock = Arc::new(MockMarketService::new());
        let mut app = app_with(mock.clone());

        app.open_detail("unknown-coin");
        apply_next_event(&mut app).await;

        let state = app.state.read();
        assert!(state.detail.open);
        assert!(!state.detail.loading);
        assert_eq!(state.detail.error.as_deref(), Some(DETAIL_ERROR_MESSAGE));
        assert!(state.detail.chart.is_none());
        assert!(state.listing.error.is_none());
    }
}
