//! # Status Bar Widget
//!
//! Bottom bar with the visible asset count and the last refresh time.

use crate::app::AppState;
use crate::ui::theme::Theme;
use egui;

/// Render the status bar.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, visible: usize, theme: &Theme) {
    ui.horizontal(|ui| {
        let total = state.listing.store.len();
        if visible == total {
            ui.label(format!("{} assets", total));
        } else {
            ui.label(format!("{} of {} assets", visible, total));
        }

        ui.separator();

        match state.last_updated_label() {
            Some(label) => ui.label(label),
            None => ui.colored_label(theme.dim, "Not updated yet"),
        };

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.listing.loading {
                ui.spinner();
                ui.colored_label(theme.dim, "Refreshing…");
            }
        });
    });
}
