//! # Shared Market Data Library
//!
//! This library defines the wire contract between the dashboard and the remote
//! market data source (a CoinGecko v3 compatible API), plus the display
//! formatting helpers used wherever prices are shown.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects decoded from the remote API
//!   - **[`dto::market`]**: Listing rows and per-coin detail records
//! - **[`utils`]**: Shared formatting functions
//!   - **[`utils::format_usd`]**: Fixed two-decimal dollar amounts
//!   - **[`utils::format_percent`]**: Signed two-decimal percentages
//!   - **[`utils::format_grouped`]**: Thousands-grouped numbers
//!
//! ## Wire Format
//!
//! All DTOs decode from JSON using `serde`:
//! - Field names match the remote API's snake_case keys
//! - Numeric fields the dashboard renders are **required**: a `null` or a
//!   missing value fails decoding, so partial payloads surface as fetch errors
//! - Fields the dashboard never reads are simply not declared and are ignored
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::dto::market::MarketListing;
//! use shared::utils::{format_percent, format_usd};
//!
//! let body = r#"[{"id":"bitcoin","symbol":"btc","name":"Bitcoin",
//!     "image":"https://example.com/btc.png","current_price":50000.0,
//!     "price_change_percentage_24h":5.0}]"#;
//! let rows: Vec<MarketListing> = serde_json::from_str(body).unwrap();
//!
//! assert_eq!(format_usd(rows[0].current_price), "$50000.00");
//! assert_eq!(format_percent(rows[0].price_change_percentage_24h), "5.00%");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
