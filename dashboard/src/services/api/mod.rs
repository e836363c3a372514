//! # Market Data API Client Module
//!
//! HTTP client for the remote market data source.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - ApiClient struct, endpoint building, MarketService impl
//! └── market.rs   - Listing and detail endpoints, DTO → domain mapping
//! ```

pub mod client;
pub mod market;

pub use client::ApiClient;
pub use market::{detail_url, listing_url};
