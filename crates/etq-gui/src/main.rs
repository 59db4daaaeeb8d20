//! Etiqueta Studio - Desktop label printing application
//!
//! Loads an inventory CSV, lets the user filter and select rows, and hands
//! a rendered label sheet to the system browser for printing.

use etq_gui::app::StudioApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Etiqueta Studio")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Etiqueta Studio",
        options,
        Box::new(|cc| Ok(Box::new(StudioApp::new(cc)))),
    )
}
