//! Error types for qrforge operations

use thiserror::Error;

use crate::validate::ValidationError;

/// Result type alias using qrforge's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrforge operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected by the validator
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    /// QR code encoding failed (e.g. payload too long for the symbol)
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// Image processing or PNG encoding error
    #[error("Image processing error: {0}")]
    Image(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}
