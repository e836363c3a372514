//! # Dashboard Configuration
//!
//! Runtime configuration read from environment variables at startup.
//!
//! | Variable                         | Default                            |
//! |----------------------------------|------------------------------------|
//! | `DASHBOARD_API_URL`              | `https://api.coingecko.com/api/v3` |
//! | `DASHBOARD_VS_CURRENCY`          | `usd`                              |
//! | `DASHBOARD_REFRESH_SECS`         | `30`                               |
//! | `DASHBOARD_REQUEST_TIMEOUT_SECS` | `10`                               |
//! | `DASHBOARD_ASSETS`               | `bitcoin:BTC,ethereum:ETH,...`     |
//!
//! The tracked asset set is fixed once the configuration is loaded.

use crate::core::error::{AppError, Result};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_VS_CURRENCY: &str = "usd";
pub const DEFAULT_REFRESH_SECS: u64 = 30;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ASSETS: &str = "bitcoin:BTC,ethereum:ETH,dogecoin:DOGE,solana:SOL,cardano:ADA";

/// One entry of the tracked asset set: remote identifier plus display symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedAsset {
    pub id: String,
    pub symbol: String,
}

impl TrackedAsset {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
        }
    }

    /// Parse a comma-separated `id:SYMBOL` list.
    ///
    /// A bare `id` without a symbol uses the uppercased id as its symbol.
    ///
    /// ```rust
    /// use dashboard::core::config::TrackedAsset;
    ///
    /// let assets = TrackedAsset::parse_list("bitcoin:BTC, dogecoin").unwrap();
    /// assert_eq!(assets[0], TrackedAsset::new("bitcoin", "BTC"));
    /// assert_eq!(assets[1], TrackedAsset::new("dogecoin", "DOGECOIN"));
    /// ```
    pub fn parse_list(raw: &str) -> Result<Vec<TrackedAsset>> {
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (id, symbol) = match entry.split_once(':') {
                    Some((id, symbol)) => (id.trim(), symbol.trim().to_string()),
                    None => (entry, entry.to_uppercase()),
                };
                if id.is_empty() || symbol.is_empty() {
                    return Err(AppError::Config(format!(
                        "DASHBOARD_ASSETS entry '{}' must look like id:SYMBOL",
                        entry
                    )));
                }
                Ok(TrackedAsset::new(id, symbol))
            })
            .collect()
    }
}

/// Configuration for the dashboard process.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the CoinGecko-compatible API (no trailing path segments required)
    pub api_base_url: String,
    /// Quote currency for listing and detail figures
    pub vs_currency: String,
    /// Fixed period between listing refreshes
    pub refresh_interval: Duration,
    /// Per-request client timeout
    pub request_timeout: Duration,
    /// Assets requested on every listing fetch, in display order
    pub tracked_assets: Vec<TrackedAsset>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            tracked_assets: TrackedAsset::parse_list(DEFAULT_ASSETS).unwrap_or_default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from the process environment and validate it.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("DASHBOARD_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let vs_currency = lookup("DASHBOARD_VS_CURRENCY")
            .map(|v| v.trim().to_lowercase())
            .unwrap_or_else(|| DEFAULT_VS_CURRENCY.to_string());

        let refresh_secs: u64 = lookup("DASHBOARD_REFRESH_SECS")
            .unwrap_or_else(|| DEFAULT_REFRESH_SECS.to_string())
            .trim()
            .parse()
            .map_err(|_| AppError::Config("DASHBOARD_REFRESH_SECS must be a whole number of seconds".to_string()))?;

        let timeout_secs: u64 = lookup("DASHBOARD_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .trim()
            .parse()
            .map_err(|_| AppError::Config("DASHBOARD_REQUEST_TIMEOUT_SECS must be a whole number of seconds".to_string()))?;

        let tracked_assets = TrackedAsset::parse_list(
            &lookup("DASHBOARD_ASSETS").unwrap_or_else(|| DEFAULT_ASSETS.to_string()),
        )?;

        let config = Self {
            api_base_url,
            vs_currency,
            refresh_interval: Duration::from_secs(refresh_secs),
            request_timeout: Duration::from_secs(timeout_secs),
            tracked_assets,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.api_base_url).map_err(|e| {
            AppError::Config(format!("DASHBOARD_API_URL '{}' is not a valid URL: {}", self.api_base_url, e))
        })?;

        if self.vs_currency.is_empty() {
            return Err(AppError::Config("DASHBOARD_VS_CURRENCY must not be empty".to_string()));
        }

        if self.refresh_interval < Duration::from_secs(1) {
            return Err(AppError::Config("DASHBOARD_REFRESH_SECS must be at least 1".to_string()));
        }

        if self.request_timeout < Duration::from_secs(1) {
            return Err(AppError::Config("DASHBOARD_REQUEST_TIMEOUT_SECS must be at least 1".to_string()));
        }

        if self.tracked_assets.is_empty() {
            return Err(AppError::Config("DASHBOARD_ASSETS must name at least one asset".to_string()));
        }

        for (i, asset) in self.tracked_assets.iter().enumerate() {
            let valid_id = asset
                .id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
            if !valid_id {
                return Err(AppError::Config(format!(
                    "asset id '{}' may only contain a-z, 0-9 and '-'",
                    asset.id
                )));
            }
            if self.tracked_assets[..i].iter().any(|a| a.id == asset.id) {
                return Err(AppError::Config(format!("asset id '{}' is listed twice", asset.id)));
            }
        }

        Ok(())
    }

    /// Identifiers of the tracked set, in configured order.
    pub fn tracked_ids(&self) -> Vec<String> {
        self.tracked_assets.iter().map(|a| a.id.clone()).collect()
    }
}
