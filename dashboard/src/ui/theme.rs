//! # GUI Theme
//!
//! Dark dashboard palette and egui visuals. Gains render green and losses
//! red, both on cards and on the detail chart.

use crate::app::state::Polarity;
use egui::{Color32, Stroke, Visuals};

/// Dashboard color palette
#[derive(Debug, Clone)]
pub struct DashboardColors {
    /// Near-black background
    pub background: Color32,
    /// Card and panel fill
    pub surface: Color32,
    /// Primary text
    pub text: Color32,
    /// Secondary text
    pub gray_secondary: Color32,
    /// Card borders
    pub border: Color32,
    /// Accent for selected sort buttons
    pub accent: Color32,
    /// Gains
    pub green: Color32,
    /// Losses and errors
    pub red: Color32,
    /// Warnings
    pub yellow_warning: Color32,
}

impl Default for DashboardColors {
    fn default() -> Self {
        DashboardColors {
            background: Color32::from_rgb(18, 18, 18),      // #121212
            surface: Color32::from_rgb(30, 30, 30),         // #1E1E1E
            text: Color32::from_rgb(240, 240, 240),         // #F0F0F0
            gray_secondary: Color32::from_rgb(150, 150, 150), // #969696
            border: Color32::from_rgb(51, 51, 51),          // #333333
            accent: Color32::from_rgb(52, 152, 219),        // #3498DB
            green: Color32::from_rgb(0x2e, 0xcc, 0x71),     // #2ECC71
            red: Color32::from_rgb(0xe7, 0x4c, 0x3c),       // #E74C3C
            yellow_warning: Color32::from_rgb(255, 170, 0), // #FFAA00
        }
    }
}

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: DashboardColors,
    pub normal: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub selected: Color32,
    /// Card text for a non-negative 24h change
    pub price_up: Color32,
    /// Card text for a negative 24h change
    pub price_down: Color32,
    /// Chart line for a non-negative 24h change
    pub chart_gain: Color32,
    /// Chart line for a negative 24h change
    pub chart_loss: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = DashboardColors::default();
        Theme {
            normal: colors.text,
            dim: colors.gray_secondary,
            error: colors.red,
            warning: colors.yellow_warning,
            selected: colors.accent,
            price_up: colors.green,
            price_down: colors.red,
            chart_gain: colors.green,
            chart_loss: colors.red,
            colors,
        }
    }
}

impl Theme {
    /// Text color for a change of the given polarity.
    pub fn polarity_color(&self, polarity: Polarity) -> Color32 {
        match polarity {
            Polarity::Gain => self.price_up,
            Polarity::Loss => self.price_down,
        }
    }

    /// Chart line color for a change of the given polarity.
    pub fn chart_color(&self, polarity: Polarity) -> Color32 {
        match polarity {
            Polarity::Gain => self.chart_gain,
            Polarity::Loss => self.chart_loss,
        }
    }

    /// egui visuals for the dashboard.
    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = colors.surface;
        visuals.extreme_bg_color = colors.background;

        visuals.widgets.noninteractive.bg_fill = colors.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.accent);
        visuals.selection.bg_fill = colors.accent.linear_multiply(0.4);
        visuals.selection.stroke = Stroke::new(1.0, colors.accent);
        visuals.hyperlink_color = colors.accent;

        visuals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_colors_follow_polarity() {
        let theme = Theme::default();
        assert_eq!(theme.chart_color(Polarity::Gain), Color32::from_rgb(0x2e, 0xcc, 0x71));
        assert_eq!(theme.chart_color(Polarity::Loss), Color32::from_rgb(0xe7, 0x4c, 0x3c));
    }

    #[test]
    fn test_polarity_color() {
        let theme = Theme::default();
        assert_eq!(theme.polarity_color(Polarity::Gain), theme.price_up);
        assert_eq!(theme.polarity_color(Polarity::Loss), theme.price_down);
        assert_ne!(theme.price_up, theme.price_down);
    }
}
