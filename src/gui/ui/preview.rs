use eframe::egui;
use super::super::app::QrForgeGui;

pub fn show_preview(app: &QrForgeGui, ui: &mut egui::Ui) {
    let Some(ref qr) = app.generated else {
        return;
    };
    ui.separator();
    let texture = ui.ctx().load_texture("qr_preview", qr.preview.clone(), Default::default());
    ui.add(egui::Image::new(&texture).fit_to_exact_size(egui::Vec2::splat(256.0)));
    ui.code(qr.payload.as_str());
}
