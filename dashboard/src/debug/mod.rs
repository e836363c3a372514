//! # Logging
//!
//! Structured logging for the dashboard.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at app startup
//! dashboard::debug::init();
//!
//! // Log with structured fields
//! tracing::info!(asset_count = 5, duration_ms = 234, "Listing fetched");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `dashboard=info,warn`)
//! - `DASHBOARD_LOG_DIR`: Log directory (default `logs`)
//! - `DASHBOARD_LOG_STDERR`: Set to `1` to mirror logs to stderr

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init;
