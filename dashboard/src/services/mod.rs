//! # Services Module
//!
//! External service integrations.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                Dashboard                 │
//! │   app::tasks ──► dyn MarketService       │
//! │                       │                  │
//! │                 ApiClient (api/)         │
//! └───────────────────────┼──────────────────┘
//!                         │ HTTPS/JSON
//!                         ▼
//!          ┌──────────────────────────────┐
//!          │  CoinGecko v3 compatible API │
//!          │  /coins/markets              │
//!          │  /coins/{id}                 │
//!          └──────────────────────────────┘
//! ```

pub mod api;
