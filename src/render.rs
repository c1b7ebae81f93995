//! QR rasterization and PNG export
//!
//! Encoding policy is fixed: medium error correction and a 512x512 pixel
//! raster. The renderer produces dark modules on a light background with
//! the standard quiet zone.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

use crate::error::{Error, Result};

/// Output raster edge length in pixels.
pub const QR_IMAGE_SIZE: u32 = 512;

/// Rasterize a payload string into a 512x512 grayscale QR image.
///
/// Fails with [`Error::QrEncode`] when the payload does not fit a QR
/// symbol at medium error correction.
pub fn render_qr(payload: &str) -> Result<DynamicImage> {
    let code = QrCode::with_error_correction_level(payload, EcLevel::M)
        .map_err(|e| Error::QrEncode(e.to_string()))?;

    let modules = code
        .render::<Luma<u8>>()
        .min_dimensions(QR_IMAGE_SIZE, QR_IMAGE_SIZE)
        .build();

    // The module renderer only guarantees a minimum size; scale to the
    // exact target with nearest-neighbor so modules stay hard-edged.
    let scaled = imageops::resize(&modules, QR_IMAGE_SIZE, QR_IMAGE_SIZE, FilterType::Nearest);

    Ok(DynamicImage::ImageLuma8(scaled))
}

/// Encode the raster as PNG and write it to `path`.
///
/// The file handle lives entirely inside this call; any create, encode
/// or write failure is reported through the returned error.
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    image.write_to(&mut writer, ImageFormat::Png)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_produces_exact_target_size() {
        let image = render_qr("https://example.com").unwrap();
        assert_eq!(image.width(), QR_IMAGE_SIZE);
        assert_eq!(image.height(), QR_IMAGE_SIZE);
    }

    #[test]
    fn test_render_rejects_oversized_payload() {
        // Version 40 at medium error correction tops out well below this.
        let payload = "a".repeat(3000);
        assert!(matches!(render_qr(&payload), Err(Error::QrEncode(_))));
    }

    #[test]
    fn test_round_trip() {
        let original = "WIFI:S:MyNet;T:WPA;P:pass123;H:true;";
        let image = render_qr(original).unwrap();

        let mut prepared = rqrr::PreparedImage::prepare(image.to_luma8());
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1);

        let (_meta, content) = grids[0].decode().unwrap();
        assert_eq!(content, original);
    }

    #[test]
    fn test_save_png_writes_readable_file() {
        let image = render_qr("tel:5551234").unwrap();
        let path = std::env::temp_dir().join("qrforge_render_test.png");

        save_png(&image, &path).unwrap();
        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.width(), QR_IMAGE_SIZE);
        assert_eq!(reloaded.height(), QR_IMAGE_SIZE);

        let _ = std::fs::remove_file(&path);
    }
}
