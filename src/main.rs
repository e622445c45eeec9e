//! Data Visualizer - Interactive Synthetic Data Dashboard
//!
//! Pick a data pattern, a chart type and cosmetic parameters; view statistics and export CSV.

use data_visualizer::config::AppConfig;
use data_visualizer::gui::DataVisualizerApp;
use data_visualizer::telemetry;
use eframe::egui;
use tracing::info;

fn main() -> eframe::Result<()> {
    telemetry::init_tracing();

    let config = AppConfig::load();
    let title = config.profile.title();
    info!(profile = %config.profile, seed = config.seed, "starting");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([900.0, 600.0])
            .with_title(title),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        title,
        options,
        Box::new(move |cc| Ok(Box::new(DataVisualizerApp::new(cc, config)))),
    )
}
