use eframe::egui;
use super::super::app::QrForgeGui;

pub fn show_menu_bar(app: &mut QrForgeGui, ui: &mut egui::Ui) {
    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.add_enabled(app.generated.is_some(), egui::Button::new("Save as PNG...")).clicked() {
                app.save_png();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Exit").clicked() {
                std::process::exit(0);
            }
        });
        ui.menu_button("Help", |ui| {
            if ui.button("About").clicked() {
                app.status_message = format!("{} v{} - {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), env!("CARGO_PKG_DESCRIPTION"));
                ui.close_menu();
            }
        });
    });
}
