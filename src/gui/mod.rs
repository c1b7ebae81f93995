mod app;
mod state;
mod ui;

pub use app::QrForgeGui;

pub fn run_gui() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([460.0, 620.0]).with_min_inner_size([400.0, 520.0]).with_title(env!("CARGO_PKG_NAME")),
        ..Default::default()
    };
    eframe::run_native(env!("CARGO_PKG_NAME"), options, Box::new(|_cc| Ok(Box::new(QrForgeGui::default()))))
}
