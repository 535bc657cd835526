//! Gomoku GUI
//!
//! Two players take turns on one machine.

use gomoku::ui::GomokuApp;
use gomoku::AppConfig;

fn main() -> Result<(), eframe::Error> {
    let config = AppConfig::default();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title(&config.title),
        ..Default::default()
    };

    log::info!("starting {}", config.title);
    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
}
