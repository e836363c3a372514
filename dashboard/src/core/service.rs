//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::models::{AssetDetail, AssetSummary};
use crate::core::error::Result;
use async_trait::async_trait;

/// Remote market data source.
///
/// The production implementation is [`crate::services::api::ApiClient`]; tests
/// substitute an in-memory mock.
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Fetch listing rows for the given asset ids in one batched call.
    ///
    /// The returned order is the remote order, not the order of `ids`.
    async fn get_markets(&self, ids: &[String]) -> Result<Vec<AssetSummary>>;

    /// Fetch one asset's extended record including its 7-day price history.
    async fn get_asset_detail(&self, id: &str) -> Result<AssetDetail>;
}
