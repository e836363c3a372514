//! # Crypto Market Dashboard - Library Root
//!
//! A **native desktop dashboard** that polls a CoinGecko-compatible API,
//! renders the tracked assets as searchable and sortable cards, and opens a
//! detail window with a 7-day price chart on demand.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  egui_plot      - 7-day price chart                    │
//! │  egui_extras    - Logo image loading                   │
//! │  Tokio          - Async runtime for fetch tasks        │
//! │  Reqwest        - HTTP client                          │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTPS/JSON
//!          ▼
//! ┌─────────────────────────────┐
//! │  CoinGecko v3 compatible API │
//! └─────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator, state, refresh scheduler, filter/sort projection,
//!   async tasks and their result handling
//! - **core**: configuration, error type, `MarketService` trait
//! - **services**: HTTP client for the market data API
//! - **ui**: screens, widgets, theme and chart rendering
//! - **debug**: logging setup
//! - **utils**: process-wide Tokio runtime
//!
//! ## Data Flow
//!
//! ```text
//! RefreshScheduler ──tick──► tasks::fetch_listing ──► MarketService
//!                                                          │
//!        ui::render ◄── AppState ◄── handle_event ◄── AppEvent
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState};
pub use crate::core::{AppError, DashboardConfig, MarketService, Result};
