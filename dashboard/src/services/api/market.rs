//! # Market Data Endpoints
//!
//! The batched listing call and the per-asset detail call.

use super::client::ApiClient;
use crate::core::models::{AssetDetail, AssetSummary};
use crate::core::error::{AppError, Result};
use reqwest::Url;
use serde::de::DeserializeOwned;
use shared::dto::market::{CoinDetail, MarketListing};
use std::time::Instant;

/// Decode a JSON response body, naming `what` in the log.
async fn decode<T: DeserializeOwned>(response: reqwest::Response, what: &str) -> Result<T> {
    response.json::<T>().await.map_err(|e| {
        tracing::error!(error = %e, what, "Response parse error");
        AppError::from(e)
    })
}

/// Listing URL: `{base}/coins/markets?vs_currency=..&ids=a,b&sparkline=true&price_change_percentage=24h`.
pub fn listing_url(client: &ApiClient, ids: &[String]) -> Result<Url> {
    let mut url = client.endpoint(&["coins", "markets"])?;
    url.query_pairs_mut()
        .append_pair("vs_currency", client.vs_currency())
        .append_pair("ids", &ids.join(","))
        .append_pair("sparkline", "true")
        .append_pair("price_change_percentage", "24h");
    Ok(url)
}

/// Detail URL: `{base}/coins/{id}?localization=false&sparkline=true`.
pub fn detail_url(client: &ApiClient, id: &str) -> Result<Url> {
    let mut url = client.endpoint(&["coins", id])?;
    url.query_pairs_mut()
        .append_pair("localization", "false")
        .append_pair("sparkline", "true");
    Ok(url)
}

/// Fetch listing rows for the tracked asset ids.
#[tracing::instrument(skip(client, ids), fields(asset_count = ids.len()))]
pub async fn get_markets(client: &ApiClient, ids: &[String]) -> Result<Vec<AssetSummary>> {
    let start = Instant::now();
    let url = listing_url(client, ids)?;

    tracing::debug!(url = %url, "Fetching market listing");

    let response = client.client.get(url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Listing fetch network error");
        AppError::from(e)
    })?;

    let status = response.status();
    let duration = start.elapsed();

    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Listing fetch failed"
        );
        return Err(AppError::Api(format!("Failed to fetch listing: {}", status)));
    }

    let rows: Vec<MarketListing> = decode(response, "listing").await?;

    tracing::debug!(
        row_count = rows.len(),
        duration_ms = duration.as_millis(),
        "Listing fetched successfully"
    );

    Ok(rows.into_iter().map(AssetSummary::from).collect())
}

/// Fetch one asset's detail record.
#[tracing::instrument(skip(client))]
pub async fn get_asset_detail(client: &ApiClient, id: &str) -> Result<AssetDetail> {
    let start = Instant::now();
    let url = detail_url(client, id)?;

    tracing::debug!(url = %url, "Fetching asset detail");

    let response = client.client.get(url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Detail fetch network error");
        AppError::from(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Detail fetch failed"
        );
        return Err(AppError::Api(format!("Failed to fetch detail for {}: {}", id, status)));
    }

    let coin: CoinDetail = decode(response, "detail").await?;

    let detail = AssetDetail::from_coin(coin, client.vs_currency())?;

    tracing::debug!(
        history_len = detail.price_history.len(),
        duration_ms = start.elapsed().as_millis(),
        "Detail fetched successfully"
    );

    Ok(detail)
}

impl From<MarketListing> for AssetSummary {
    fn from(row: MarketListing) -> Self {
        AssetSummary {
            id: row.id,
            symbol: row.symbol,
            name: row.name,
            logo_url: row.image,
            price: row.current_price,
            change_24h: row.price_change_percentage_24h,
        }
    }
}

impl AssetDetail {
    /// Map a decoded detail record, picking figures in `currency`.
    pub fn from_coin(coin: CoinDetail, currency: &str) -> Result<Self> {
        let quote = coin.market_data.quote(currency).ok_or_else(|| {
            AppError::Api(format!("Detail for {} has no '{}' quote", coin.id, currency))
        })?;

        Ok(AssetDetail {
            id: coin.id,
            name: coin.name,
            logo_url: coin.image.large,
            price: quote.price,
            change_24h: coin.market_data.price_change_percentage_24h,
            market_cap: quote.market_cap,
            volume_24h: quote.total_volume,
            price_history: coin.market_data.sparkline_7d.price,
        })
    }
}
