//! # Detail Window
//!
//! Modal-style window with one asset's figures and its 7-day chart.

use crate::app::state::{AppState, AssetDetail};
use crate::app::App;
use crate::ui::chart::render_price_chart;
use crate::ui::theme::Theme;
use egui;
use shared::utils::{format_grouped, format_percent};

const DETAIL_LOGO_SIZE: f32 = 64.0;

/// Labels shown in the detail window.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub name: String,
    pub logo_url: String,
    pub price: String,
    pub change: String,
    pub change_color: egui::Color32,
    pub market_cap: String,
    pub volume: String,
}

impl DetailView {
    pub fn new(detail: &AssetDetail, theme: &Theme) -> Self {
        DetailView {
            name: detail.name.clone(),
            logo_url: detail.logo_url.clone(),
            price: format!("Price: ${}", detail.price),
            change: format!("24h Change: {}", format_percent(detail.change_24h)),
            change_color: theme.polarity_color(detail.polarity()),
            market_cap: format!("Market Cap: ${}", format_grouped(detail.market_cap)),
            volume: format!("24h Volume: ${}", format_grouped(detail.volume_24h)),
        }
    }
}

/// Render the detail window when it is open.
pub fn render(ctx: &egui::Context, state: &AppState, app: &mut App, theme: &Theme) {
    let detail = &state.detail;
    if !detail.open {
        return;
    }

    let title = detail
        .detail
        .as_ref()
        .map(|d| d.name.clone())
        .or_else(|| detail.asset_id.clone())
        .unwrap_or_default();

    let mut open = true;
    let mut close_clicked = false;

    egui::Window::new(title)
        .id(egui::Id::new("asset_detail_window"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(480.0)
        .show(ctx, |ui| {
            if detail.loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.colored_label(theme.dim, "Loading details…");
                });
            } else if let Some(message) = &detail.error {
                ui.colored_label(theme.error, message);
            } else if let Some(record) = &detail.detail {
                let view = DetailView::new(record, theme);

                ui.horizontal(|ui| {
                    ui.add(
                        egui::Image::from_uri(view.logo_url.clone())
                            .fit_to_exact_size(egui::vec2(DETAIL_LOGO_SIZE, DETAIL_LOGO_SIZE)),
                    );
                    ui.heading(&view.name);
                });
                ui.add_space(6.0);
                ui.label(&view.price);
                ui.colored_label(view.change_color, &view.change);
                ui.label(&view.market_cap);
                ui.label(&view.volume);
                ui.add_space(8.0);

                if let Some(chart) = &detail.chart {
                    render_price_chart(ui, chart, theme);
                }
            }

            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if !open || close_clicked {
        app.close_detail();
    }
}
