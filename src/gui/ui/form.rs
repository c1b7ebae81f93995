use eframe::egui;

use qrforge::content::{ContentKind, WifiSecurity};

use super::super::app::QrForgeGui;

pub fn show_form(app: &mut QrForgeGui, ui: &mut egui::Ui) {
    ui.heading("Generate");
    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Type:");
        let previous = app.kind;
        egui::ComboBox::from_id_salt("content_kind").selected_text(app.kind.label()).show_ui(ui, |ui| {
            for kind in ContentKind::ALL {
                ui.selectable_value(&mut app.kind, kind, kind.label());
            }
        });
        if app.kind != previous {
            app.on_kind_selected();
        }
    });

    let layout = app.kind.form_layout();

    let response = ui.add(egui::TextEdit::singleline(&mut app.content).hint_text(layout.content_hint).desired_width(300.0));

    if let Some(hint) = layout.extra {
        ui.add(egui::TextEdit::singleline(&mut app.extra).hint_text(hint).desired_width(300.0));
    }
    if let Some(hint) = layout.extra2 {
        ui.add(egui::TextEdit::singleline(&mut app.extra2).hint_text(hint).desired_width(300.0));
    }
    if layout.wifi_controls {
        ui.horizontal(|ui| {
            ui.label("Security:");
            egui::ComboBox::from_id_salt("wifi_security").selected_text(app.wifi_security.label()).show_ui(ui, |ui| {
                for security in WifiSecurity::ALL {
                    ui.selectable_value(&mut app.wifi_security, security, security.label());
                }
            });
            ui.checkbox(&mut app.wifi_hidden, "Hidden network");
        });
    }

    ui.separator();
    ui.horizontal(|ui| {
        let should_generate =
            ui.button("Generate").clicked() || (response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)));
        if should_generate {
            app.generate();
        }
        if ui.add_enabled(app.generated.is_some(), egui::Button::new("Save as PNG")).clicked() {
            app.save_png();
        }
    });
}
