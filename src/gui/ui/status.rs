use eframe::egui;
use super::super::app::QrForgeGui;

pub fn show_status_bar(app: &QrForgeGui, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if !app.error_message.is_empty() {
            ui.colored_label(egui::Color32::RED, app.error_message.as_str());
        } else if !app.status_message.is_empty() {
            ui.colored_label(egui::Color32::GREEN, app.status_message.as_str());
        } else {
            ui.label("Ready");
        }
    });
}
