//! # Chart Module
//!
//! The 7-day price line chart shown in the detail view, drawn with egui_plot.

use crate::app::state::{AssetDetail, Polarity};
use crate::ui::theme::Theme;
use egui;
use egui_plot::{Line, Plot, PlotPoints};

/// One live chart instance.
///
/// Points are `[index, price]` so the x axis runs 0..N-1. The instance number
/// doubles as the plot id, which keeps zoom and bounds memory from leaking
/// into the next chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChart {
    instance: u64,
    points: Vec<[f64; 2]>,
    polarity: Polarity,
}

impl PriceChart {
    pub fn new(instance: u64, detail: &AssetDetail) -> Self {
        let points = detail
            .price_history
            .iter()
            .enumerate()
            .map(|(idx, price)| [idx as f64, *price])
            .collect();

        tracing::debug!(
            instance,
            asset_id = %detail.id,
            points = detail.price_history.len(),
            "Price chart created"
        );

        Self {
            instance,
            points,
            polarity: detail.polarity(),
        }
    }

    pub fn instance(&self) -> u64 {
        self.instance
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn color(&self, theme: &Theme) -> egui::Color32 {
        theme.chart_color(self.polarity)
    }

    pub fn plot_id(&self) -> String {
        format!("price_chart_{}", self.instance)
    }

    /// Tear the instance down. Consumes the chart so it cannot be drawn again.
    pub fn dispose(self) {
        tracing::debug!(instance = self.instance, "Price chart disposed");
    }
}

/// Render the price line.
pub fn render_price_chart(ui: &mut egui::Ui, chart: &PriceChart, theme: &Theme) {
    if chart.points.is_empty() {
        ui.colored_label(theme.dim, "No price history available");
        return;
    }

    Plot::new(chart.plot_id())
        .height(220.0)
        .show_axes([false, true])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Price (7d)", PlotPoints::from(chart.points.clone()))
                    .color(chart.color(theme))
                    .width(2.0),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(history: Vec<f64>, change: f64) -> AssetDetail {
        AssetDetail {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            logo_url: String::new(),
            price: 50000.0,
            change_24h: change,
            market_cap: 0.0,
            volume_24h: 0.0,
            price_history: history,
        }
    }

    #[test]
    fn test_points_are_indexed_from_zero() {
        let chart = PriceChart::new(1, &detail(vec![10.0, 12.5, 11.0], 1.0));
        assert_eq!(chart.points(), &[[0.0, 10.0], [1.0, 12.5], [2.0, 11.0]]);
    }

    #[test]
    fn test_zero_change_draws_gain_color() {
        let theme = Theme::default();
        let chart = PriceChart::new(1, &detail(vec![1.0], 0.0));
        assert_eq!(chart.polarity(), Polarity::Gain);
        assert_eq!(chart.color(&theme), theme.chart_gain);
    }

    #[test]
    fn test_instances_get_distinct_plot_ids() {
        let a = PriceChart::new(1, &detail(vec![1.0], 1.0));
        let b = PriceChart::new(2, &detail(vec![1.0], 1.0));
        assert_ne!(a.plot_id(), b.plot_id());
    }
}
