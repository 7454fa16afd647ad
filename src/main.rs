mod app;
mod chart;
mod config;
mod data;
mod error;
mod render;
mod state;
mod ui;

use std::path::Path;

use app::PopscopeApp;
use config::{AppConfig, CONFIG_FILE};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load_or_default(Path::new(CONFIG_FILE));
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1450.0, 880.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Popscope – Population Trends",
        options,
        Box::new(move |_cc| Ok(Box::new(PopscopeApp::new(config)))),
    )
}
