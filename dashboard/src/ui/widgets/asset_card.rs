//! # Asset Card Widget
//!
//! One card per listing row: logo, symbol, price, 24h change, and the
//! "View Details" button.

use crate::app::state::{AssetSummary, Polarity};
use crate::ui::theme::Theme;
use egui;
use shared::utils::{format_percent, format_usd};

const CARD_WIDTH: f32 = 220.0;
const LOGO_SIZE: f32 = 32.0;

/// Render model of one card.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetCard {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub logo_url: String,
    /// `$50000.00`
    pub price: String,
    /// `-3.00%`
    pub change: String,
    pub polarity: Polarity,
}

impl AssetCard {
    pub fn from_summary(asset: &AssetSummary) -> Self {
        AssetCard {
            id: asset.id.clone(),
            symbol: asset.symbol.to_uppercase(),
            name: asset.name.clone(),
            logo_url: asset.logo_url.clone(),
            price: format_usd(asset.price),
            change: format_percent(asset.change_24h),
            polarity: asset.polarity(),
        }
    }
}

/// Render one card. Returns true when "View Details" was clicked.
pub fn render_asset_card(ui: &mut egui::Ui, card: &AssetCard, theme: &Theme) -> bool {
    let mut details_clicked = false;

    ui.group(|ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Image::from_uri(card.logo_url.clone())
                        .fit_to_exact_size(egui::vec2(LOGO_SIZE, LOGO_SIZE)),
                );
                ui.vertical(|ui| {
                    ui.strong(&card.symbol);
                    ui.colored_label(theme.dim, &card.name);
                });
            });

            ui.add_space(4.0);
            ui.heading(&card.price);
            ui.colored_label(theme.polarity_color(card.polarity), &card.change);
            ui.add_space(4.0);

            if ui.button("View Details").clicked() {
                details_clicked = true;
            }
        });
    });

    details_clicked
}
