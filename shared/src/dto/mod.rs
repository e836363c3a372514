//! # Data Transfer Objects (DTOs)
//!
//! Data structures decoded from the remote market data API.
//!
//! ## Module Organization
//!
//! - [`market`] - Listing rows (`/coins/markets`) and coin detail (`/coins/{id}`)
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/v3/coins/markets?vs_currency=usd&ids=bitcoin,dogecoin&sparkline=true&price_change_percentage=24h
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! [
//!   {
//!     "id": "bitcoin",
//!     "symbol": "btc",
//!     "name": "Bitcoin",
//!     "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
//!     "current_price": 50000.0,
//!     "price_change_percentage_24h": 5.0
//!   }
//! ]
//! ```

pub mod market;

pub use market::*;
