//! # View Projection
//!
//! Pure functions from a store snapshot to the list of rows to render.
//! Nothing here mutates the store; every search or sort works on the
//! snapshot as it is at the moment of the action.

use crate::app::state::AssetSummary;
use std::cmp::Ordering;

/// Sort orders offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// 24h change, descending
    Gainers,
    /// 24h change, ascending
    Losers,
    /// Price, descending
    PriceHigh,
    /// Price, ascending
    PriceLow,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Gainers,
        SortKey::Losers,
        SortKey::PriceHigh,
        SortKey::PriceLow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Gainers => "Top Gainers",
            SortKey::Losers => "Top Losers",
            SortKey::PriceHigh => "Price: High → Low",
            SortKey::PriceLow => "Price: Low → High",
        }
    }

    fn compare(self, a: &AssetSummary, b: &AssetSummary) -> Ordering {
        match self {
            SortKey::Gainers => b.change_24h.total_cmp(&a.change_24h),
            SortKey::Losers => a.change_24h.total_cmp(&b.change_24h),
            SortKey::PriceHigh => b.price.total_cmp(&a.price),
            SortKey::PriceLow => a.price.total_cmp(&b.price),
        }
    }
}

/// Transform applied to the snapshot before rendering.
///
/// Sorting and filtering do not compose: whichever the user touched last
/// replaces the other.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewMode {
    /// Store order
    #[default]
    All,
    Sorted(SortKey),
    /// Case-insensitive substring match on name or symbol
    Filtered(String),
}

/// Rows of `snapshot` whose name or symbol contains `query`, ignoring case.
///
/// An empty query matches every row. Store order is kept.
pub fn filter<'a>(snapshot: &'a [AssetSummary], query: &str) -> Vec<&'a AssetSummary> {
    let needle = query.to_lowercase();
    snapshot
        .iter()
        .filter(|asset| {
            asset.name.to_lowercase().contains(&needle)
                || asset.symbol.to_lowercase().contains(&needle)
        })
        .collect()
}

/// All rows of `snapshot` ordered by `key`. Ties keep store order.
pub fn sort(snapshot: &[AssetSummary], key: SortKey) -> Vec<&AssetSummary> {
    let mut rows: Vec<&AssetSummary> = snapshot.iter().collect();
    rows.sort_by(|a, b| key.compare(a, b));
    rows
}

/// Apply `mode` to `snapshot`.
pub fn project<'a>(snapshot: &'a [AssetSummary], mode: &ViewMode) -> Vec<&'a AssetSummary> {
    match mode {
        ViewMode::All => snapshot.iter().collect(),
        ViewMode::Sorted(key) => sort(snapshot, *key),
        ViewMode::Filtered(query) => filter(snapshot, query),
    }
}
