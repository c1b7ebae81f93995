use eframe::egui;
use super::super::app::QrForgeGui;

pub fn show_error_dialog(app: &mut QrForgeGui, ctx: &egui::Context) {
    if app.error_message.is_empty() {
        return;
    }
    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(app.error_message.as_str());
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    app.error_message.clear();
                }
            });
        });
}
