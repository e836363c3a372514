//! # Listing Screen
//!
//! Toolbar (search box and sort buttons) plus the card grid.

use crate::app::state::{AppState, ListingState};
use crate::app::view::{self, SortKey, ViewMode};
use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::asset_card::{render_asset_card, AssetCard};
use egui;

/// What the listing area shows this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingArea {
    /// Nothing fetched yet
    Waiting,
    /// Cards in projection order; may be empty when a search matches nothing
    Cards(Vec<AssetCard>),
    /// Last fetch failed
    Error(String),
}

/// Project the listing state into the listing area.
pub fn listing_area(listing: &ListingState) -> ListingArea {
    if let Some(message) = &listing.error {
        return ListingArea::Error(message.clone());
    }
    if listing.store.is_empty() {
        return ListingArea::Waiting;
    }

    let cards = view::project(listing.store.snapshot(), &listing.view_mode)
        .into_iter()
        .map(AssetCard::from_summary)
        .collect();
    ListingArea::Cards(cards)
}

/// Render the toolbar: search box, sort buttons, loading spinner.
pub fn render_toolbar(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        let mut search = state.listing.search_text.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search by name or symbol")
                .desired_width(240.0),
        );
        if response.changed() {
            app.handle_search_input(search);
        }

        ui.separator();

        for key in SortKey::ALL {
            let active = state.listing.view_mode == ViewMode::Sorted(key);
            let label = egui::RichText::new(key.label());
            let label = if active { label.color(theme.selected) } else { label };
            if ui.selectable_label(active, label).clicked() {
                app.handle_sort(key);
            }
        }

        if state.listing.loading {
            ui.separator();
            ui.spinner();
        }
    });
}

/// Render the card grid.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    match listing_area(&state.listing) {
        ListingArea::Error(message) => {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(theme.error, message);
            });
        }
        ListingArea::Waiting => {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.colored_label(theme.dim, "Waiting for market data…");
            });
        }
        ListingArea::Cards(cards) if cards.is_empty() => {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(theme.dim, "No assets match your search");
            });
        }
        ListingArea::Cards(cards) => {
            let mut selected = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for card in &cards {
                        if render_asset_card(ui, card, theme) {
                            selected = Some(card.id.clone());
                        }
                    }
                });
            });

            if let Some(id) = selected {
                app.open_detail(&id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AssetSummary;

    fn asset(id: &str, symbol: &str, price: f64, change: f64) -> AssetSummary {
        AssetSummary {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: id.to_string(),
            logo_url: String::new(),
            price,
            change_24h: change,
        }
    }

    fn listing_with(rows: Vec<AssetSummary>) -> ListingState {
        let mut listing = ListingState::default();
        listing.store.replace(rows);
        listing
    }

    fn card_ids(area: ListingArea) -> Vec<String> {
        match area {
            ListingArea::Cards(cards) => cards.into_iter().map(|c| c.id).collect(),
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_store_waits() {
        assert_eq!(listing_area(&ListingState::default()), ListingArea::Waiting);
    }

    #[test]
    fn test_cards_follow_store_order() {
        let listing = listing_with(vec![
            asset("dogecoin", "doge", 0.1, -3.0),
            asset("bitcoin", "btc", 50000.0, 5.0),
        ]);
        assert_eq!(card_ids(listing_area(&listing)), vec!["dogecoin", "bitcoin"]);
    }

    #[test]
    fn test_cards_follow_active_mode() {
        let mut listing = listing_with(vec![
            asset("bitcoin", "btc", 50000.0, 5.0),
            asset("dogecoin", "doge", 0.1, -3.0),
        ]);
        listing.view_mode = ViewMode::Filtered("BTC".to_string());
        assert_eq!(card_ids(listing_area(&listing)), vec!["bitcoin"]);

        listing.view_mode = ViewMode::Sorted(SortKey::PriceLow);
        assert_eq!(card_ids(listing_area(&listing)), vec!["dogecoin", "bitcoin"]);
    }

    #[test]
    fn test_error_replaces_cards() {
        let mut listing = listing_with(vec![asset("bitcoin", "btc", 50000.0, 5.0)]);
        listing.error = Some("boom".to_string());
        assert_eq!(listing_area(&listing), ListingArea::Error("boom".to_string()));
    }
}
