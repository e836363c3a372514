//! Crypto Market Dashboard - native window entry point.

use dashboard::core::DashboardConfig;
use dashboard::ui::theme::Theme;
use dashboard::utils::runtime::TOKIO_RT;
use dashboard::App;

const WINDOW_TITLE: &str = "Crypto Dashboard";

/// eframe adapter around [`App`].
struct DashboardApp {
    app: App,
    theme: Theme,
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        dashboard::ui::render(ctx, &mut self.app, &self.theme);
    }
}

fn load_config() -> DashboardConfig {
    match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration - falling back to defaults");
            DashboardConfig::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    dashboard::debug::init();

    let config = load_config();
    tracing::info!(
        api = %config.api_base_url,
        assets = ?config.tracked_ids(),
        refresh_secs = config.refresh_interval.as_secs(),
        "Starting dashboard"
    );

    // tokio::spawn from the egui thread needs an entered runtime
    let _runtime = TOKIO_RT.enter();

    let app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create API client - falling back to defaults");
            App::new(&DashboardConfig::default())
                .map_err(|e| eframe::Error::AppCreation(Box::new(e)))?
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let theme = Theme::default();
            cc.egui_ctx.set_visuals(theme.visuals());
            Ok(Box::new(DashboardApp { app, theme }))
        }),
    )
}
