//! FareView - Flight Fare Data Explorer & Interactive Chart Dashboard
//!
//! A Rust application for exploring flight-price records with interactive charts.

use eframe::egui;
use fareview::config::AppConfig;
use fareview::data::{normalize, FlightLoader};
use fareview::gui::FareViewApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let cfg = AppConfig::load();

    // Load and normalize once; every later interaction reuses the result.
    let mut loader = FlightLoader::new(cfg.train_path.clone(), cfg.test_path.clone());
    let combined = match loader.load_or_cached() {
        Ok(df) => df.clone(),
        Err(e) => {
            log::error!("failed to load flight data: {e}");
            std::process::exit(1);
        }
    };

    let dataset = match normalize(combined) {
        Ok(df) => df,
        Err(e) => {
            log::error!("normalization failed: {e}");
            std::process::exit(1);
        }
    };

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1100.0, 650.0])
            .with_title("FareView"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "FareView",
        options,
        Box::new(move |cc| Ok(Box::new(FareViewApp::new(cc, dataset)))),
    )
}
