//! Input validation for QR requests
//!
//! Pure and total: every request resolves to `Ok` or one of the defined
//! failure reasons, never a panic. The error display strings are shown
//! verbatim in the GUI error dialog.

use thiserror::Error;

use crate::content::{ContentKind, QrRequest, WifiSecurity};

/// A specific reason the validator rejected a request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("input cannot be empty")]
    EmptyContent,

    #[error("not a valid number")]
    InvalidNumber,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("wifi password required")]
    PasswordRequired,
}

/// Check a request against the per-kind input rules.
///
/// Phone, SMS and WhatsApp require an integer phone number (digits with
/// an optional leading sign). Email requires an `@`. WiFi requires a
/// password unless the network is open. FaceTime recipients may be
/// phone-like or email-like, so only the empty check applies.
pub fn validate(request: &QrRequest) -> Result<(), ValidationError> {
    if request.content.is_empty() {
        return Err(ValidationError::EmptyContent);
    }

    match request.kind {
        ContentKind::Phone | ContentKind::Sms | ContentKind::WhatsApp => {
            if request.content.parse::<i64>().is_err() {
                return Err(ValidationError::InvalidNumber);
            }
        }
        ContentKind::Email => {
            if !request.content.contains('@') {
                return Err(ValidationError::InvalidEmail);
            }
        }
        ContentKind::Wifi => {
            if request.security != WifiSecurity::Open && request.extra.is_empty() {
                return Err(ValidationError::PasswordRequired);
            }
        }
        ContentKind::Url | ContentKind::FaceTime => {}
    }

    Ok(())
}
