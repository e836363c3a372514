//! # API Client
//!
//! HTTP client for the remote market data API.

use crate::core::models::{AssetDetail, AssetSummary};
use crate::core::config::DashboardConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::MarketService;
use reqwest::{Client, Url};

/// HTTP client for a CoinGecko v3 compatible API.
///
/// Holds one connection pool for the life of the process. Every request
/// carries the configured timeout so a hung call cannot pin the listing's
/// in-flight guard.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: Url,
    vs_currency: String,
}

impl ApiClient {
    /// Create a client from the dashboard configuration.
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            AppError::Config(format!("invalid API base URL '{}': {}", config.api_base_url, e))
        })?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("coin-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            vs_currency: config.vs_currency.clone(),
        })
    }

    /// Build an endpoint URL by appending path segments to the base URL.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("API base URL '{}' cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Quote currency requested from the API.
    pub(crate) fn vs_currency(&self) -> &str {
        &self.vs_currency
    }
}

#[async_trait::async_trait]
impl MarketService for ApiClient {
    async fn get_markets(&self, ids: &[String]) -> Result<Vec<AssetSummary>> {
        crate::services::api::market::get_markets(self, ids).await
    }

    async fn get_asset_detail(&self, id: &str) -> Result<AssetDetail> {
        crate::services::api::market::get_asset_detail(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> ApiClient {
        let config = DashboardConfig {
            api_base_url: base.to_string(),
            ..DashboardConfig::default()
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let client = client_for("https://api.coingecko.com/api/v3");
        let url = client.endpoint(&["coins", "markets"]).unwrap();
        assert_eq!(url.as_str(), "https://api.coingecko.com/api/v3/coins/markets");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = client_for("http://127.0.0.1:8080/api/v3/");
        let url = client.endpoint(&["coins", "bitcoin"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v3/coins/bitcoin");
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let config = DashboardConfig {
            api_base_url: "::not a url::".to_string(),
            ..DashboardConfig::default()
        };
        assert!(matches!(ApiClient::new(&config), Err(AppError::Config(_))));
    }
}
