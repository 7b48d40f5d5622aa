use eframe::egui;
use voltview::gui::VoltviewApp;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 760.0])
            .with_min_inner_size([480.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Voltview",
        native_options,
        Box::new(|cc| Ok(Box::new(VoltviewApp::new(cc)))),
    )
}
