use eframe::egui;
use image::DynamicImage;

/// The last successful generation, kept until the next generate action.
/// `image` is the full-size raster handed to the save flow; `preview`
/// holds the same pixels in the texture format the UI consumes.
pub struct GeneratedQr {
    pub image: DynamicImage,
    pub preview: egui::ColorImage,
    pub payload: String,
}

pub fn preview_from_image(image: &DynamicImage) -> egui::ColorImage {
    let gray = image.to_luma8();
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    let pixels = gray.into_raw().into_iter().map(|pixel| egui::Color32::from_gray(if pixel > 128 { 255 } else { 0 })).collect();
    egui::ColorImage { size: [width, height], pixels }
}
