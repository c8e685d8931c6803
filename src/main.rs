//! UrbanScope entry point.

use eframe::egui;
use urbanscope::config::AppConfig;
use urbanscope::gui::UrbanScopeApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = AppConfig::load();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([1100.0, 650.0])
            .with_title("UrbanScope"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "UrbanScope",
        options,
        Box::new(|cc| Ok(Box::new(UrbanScopeApp::new(cc, config)))),
    )
}
