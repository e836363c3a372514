//! # Domain Models
//!
//! Market data as the dashboard sees it, independent of the wire format in
//! `shared::dto::market`.

/// Sign class of a 24h change. Zero counts as a gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Gain,
    Loss,
}

impl Polarity {
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Polarity::Gain
        } else {
            Polarity::Loss
        }
    }
}

/// One listing row for a tracked asset.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetSummary {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub logo_url: String,
    /// Current price in the quote currency
    pub price: f64,
    /// 24h price change in percent
    pub change_24h: f64,
}

impl AssetSummary {
    pub fn polarity(&self) -> Polarity {
        Polarity::from_change(self.change_24h)
    }
}

/// Extended record for the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDetail {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    pub price: f64,
    pub change_24h: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    /// 7 days of prices at a fixed cadence, oldest first
    pub price_history: Vec<f64>,
}

impl AssetDetail {
    pub fn polarity(&self) -> Polarity {
        Polarity::from_change(self.change_24h)
    }
}
