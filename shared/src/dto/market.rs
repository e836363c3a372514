//! # Market DTOs
//!
//! Wire types for the two remote endpoints the dashboard consumes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the batched listing endpoint (`/coins/markets`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketListing {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Logo URL
    pub image: String,
    pub current_price: f64,
    pub price_change_percentage_24h: f64,
}

/// Per-coin detail record (`/coins/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub name: String,
    pub image: CoinImage,
    pub market_data: CoinMarketData,
}

/// Logo URLs at the sizes the API publishes. Only `large` is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinImage {
    pub large: String,
}

/// Quote currency code (`"usd"`, `"eur"`, ...) to amount.
pub type CurrencyMap = HashMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinMarketData {
    pub current_price: CurrencyMap,
    pub price_change_percentage_24h: f64,
    pub market_cap: CurrencyMap,
    pub total_volume: CurrencyMap,
    pub sparkline_7d: Sparkline,
}

/// Seven days of hourly prices, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
    pub price: Vec<f64>,
}

impl CoinMarketData {
    /// Look up one quote currency across price, market cap and volume.
    ///
    /// Returns `None` if any of the three maps lacks the currency.
    pub fn quote(&self, currency: &str) -> Option<CoinQuote> {
        Some(CoinQuote {
            price: *self.current_price.get(currency)?,
            market_cap: *self.market_cap.get(currency)?,
            total_volume: *self.total_volume.get(currency)?,
        })
    }
}

/// Price, market cap and volume in a single quote currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinQuote {
    pub price: f64,
    pub market_cap: f64,
    pub total_volume: f64,
}
