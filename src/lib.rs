//! # qrforge
//!
//! Desktop QR code generator for URLs, phone numbers, email, SMS,
//! WhatsApp links, WiFi credentials and FaceTime addresses.
//!
//! The binary is an [eframe](https://docs.rs/eframe)/egui application:
//! pick a content type, fill in the fields, generate, and save the
//! result as a 512x512 PNG. This library holds everything below the UI:
//! the content model, the per-kind input validation, the payload
//! templates and the QR rasterizer. None of it depends on a UI toolkit,
//! so the same flow works headless:
//!
//! ```
//! use qrforge::{ContentKind, QrRequest};
//!
//! let request = QrRequest {
//!     kind: ContentKind::Phone,
//!     content: "5551234".to_string(),
//!     ..Default::default()
//! };
//!
//! qrforge::validate::validate(&request).unwrap();
//! let payload = qrforge::payload::build_payload(&request);
//! assert_eq!(payload, "tel:5551234");
//!
//! let image = qrforge::render::render_qr(&payload).unwrap();
//! assert_eq!(image.width(), 512);
//! ```
//!
//! Payload formats follow the common URI schemes (`tel:`, `mailto:`,
//! `smsto:`, `facetime:`, `https://wa.me/`) plus the `WIFI:` network
//! config notation. The exact templates are documented in
//! [`payload::build_payload`].

pub mod content;
pub mod error;
pub mod payload;
pub mod render;
pub mod validate;

// Re-exports for convenience
pub use content::{ContentKind, FormLayout, QrRequest, WifiSecurity};
pub use error::{Error, Result};
pub use validate::ValidationError;
