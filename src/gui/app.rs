use eframe::egui;
use tracing::{info, warn};

use qrforge::content::{ContentKind, QrRequest, WifiSecurity};
use qrforge::{payload, render, validate};

use super::state::{preview_from_image, GeneratedQr};
use super::ui;

pub struct QrForgeGui {
    pub(crate) kind: ContentKind,
    pub(crate) content: String,
    pub(crate) extra: String,
    pub(crate) extra2: String,
    pub(crate) wifi_security: WifiSecurity,
    pub(crate) wifi_hidden: bool,
    pub(crate) generated: Option<GeneratedQr>,
    pub(crate) status_message: String,
    pub(crate) error_message: String,
}

impl Default for QrForgeGui {
    fn default() -> Self {
        Self {
            kind: ContentKind::Url,
            content: String::new(),
            extra: String::new(),
            extra2: String::new(),
            wifi_security: WifiSecurity::Wpa,
            wifi_hidden: false,
            generated: None,
            status_message: String::new(),
            error_message: String::new(),
        }
    }
}

impl QrForgeGui {
    pub fn set_status_ok(&mut self, message: &str) {
        self.status_message = message.to_string();
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: &str) {
        self.error_message = message.to_string();
        self.status_message.clear();
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }

    pub fn on_kind_selected(&mut self) {
        // A stale open-network selection must not carry over to the next
        // visit of the WiFi form.
        if self.kind != ContentKind::Wifi {
            self.wifi_security = WifiSecurity::Wpa;
        }
        self.clear_messages();
    }

    pub fn request(&self) -> QrRequest {
        QrRequest {
            kind: self.kind,
            content: self.content.clone(),
            extra: self.extra.clone(),
            extra2: self.extra2.clone(),
            security: self.wifi_security,
            hidden: self.wifi_hidden,
        }
    }

    pub fn generate(&mut self) {
        let request = self.request();
        match generate_internal(&request) {
            Ok(qr) => {
                info!(kind = request.kind.label(), payload_len = qr.payload.len(), "generated QR code");
                self.generated = Some(qr);
                self.set_status_ok("QR code generated.");
            }
            Err(e) => {
                warn!(kind = request.kind.label(), "generation failed: {e}");
                self.generated = None;
                self.set_error(&e.to_string());
            }
        }
    }

    pub fn save_png(&mut self) {
        let Some(ref qr) = self.generated else {
            return;
        };
        let Some(path) = rfd::FileDialog::new().add_filter("PNG image", &["png"]).set_file_name("qrcode.png").save_file() else {
            return;
        };
        match render::save_png(&qr.image, &path) {
            Ok(_) => {
                info!(path = %path.display(), "saved QR code");
                self.set_status_ok(&format!("Saved to {}.", path.display()));
            }
            Err(e) => {
                warn!(path = %path.display(), "save failed: {e}");
                self.set_error(&format!("Save failed: {}", e));
            }
        }
    }
}

fn generate_internal(request: &QrRequest) -> qrforge::Result<GeneratedQr> {
    validate::validate(request)?;
    let payload = payload::build_payload(request);
    let image = render::render_qr(&payload)?;
    let preview = preview_from_image(&image);
    Ok(GeneratedQr { image, preview, payload })
}

impl eframe::App for QrForgeGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui::menu::show_menu_bar(self, ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui::form::show_form(self, ui);
                ui::preview::show_preview(self, ui);
            });
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui::status::show_status_bar(self, ui);
        });
        ui::dialog::show_error_dialog(self, ctx);
    }
}
