//! # GUI Rendering
//!
//! Immediate-mode rendering of the dashboard. Every frame rebuilds the whole
//! surface from a cloned [`AppState`] snapshot:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ header: title, search box, sort buttons, spinner     │
//! ├──────────────────────────────────────────────────────┤
//! │ card grid  (or waiting placeholder / error message)  │
//! ├──────────────────────────────────────────────────────┤
//! │ status bar: asset count, last updated                │
//! └──────────────────────────────────────────────────────┘
//!            + detail window (when open)
//! ```

pub mod chart;
pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, AppState};
use egui;
use std::time::Duration;
use theme::Theme;

/// Repaint cadence while a fetch is in flight, so results show promptly.
const INFLIGHT_REPAINT: Duration = Duration::from_millis(100);

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    let state: AppState = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => {
            // Lock is held elsewhere, try again next frame
            ctx.request_repaint();
            return;
        }
    }; // Lock released here - rendering happens without holding lock

    egui::TopBottomPanel::top("dashboard_header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.heading("Crypto Dashboard");
        ui.add_space(4.0);
        screens::listing::render_toolbar(ui, &state, app, theme);
        ui.add_space(6.0);
    });

    let visible = visible_count(&state);
    egui::TopBottomPanel::bottom("dashboard_status").show(ctx, |ui| {
        widgets::status_bar::render_status_bar(ui, &state, visible, theme);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        screens::listing::render(ui, &state, app, theme);
    });

    screens::detail::render(ctx, &state, app, theme);

    let in_flight = state.listing.loading || state.detail.loading;
    let next = if in_flight {
        INFLIGHT_REPAINT
    } else {
        app.time_until_next_refresh()
    };
    ctx.request_repaint_after(next);
}

fn visible_count(state: &AppState) -> usize {
    match screens::listing::listing_area(&state.listing) {
        screens::listing::ListingArea::Cards(cards) => cards.len(),
        _ => 0,
    }
}
