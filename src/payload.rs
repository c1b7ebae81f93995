//! Payload templates mapping a request to the QR content string
//!
//! The templates are fixed per content kind and must stay bit-exact:
//! readers in the wild parse these URI schemes. Note the asymmetry: the
//! SMS message is embedded verbatim while the Email and WhatsApp message
//! fields are percent-encoded. That matches the established output of
//! earlier releases and is deliberately preserved.

use std::fmt::Write;

use crate::content::{ContentKind, QrRequest};

/// Build the exact string handed to the QR encoder for this request.
///
/// The request is expected to have passed [`crate::validate::validate`];
/// building from an unvalidated request still succeeds but may produce a
/// payload no reader understands.
pub fn build_payload(request: &QrRequest) -> String {
    match request.kind {
        ContentKind::Url => request.content.clone(),
        ContentKind::Phone => format!("tel:{}", request.content),
        ContentKind::Email => format!(
            "mailto:{}?subject={}&body={}",
            request.content,
            percent_encode(&request.extra),
            percent_encode(&request.extra2)
        ),
        ContentKind::Sms => format!("smsto:{}:{}", request.content, request.extra),
        ContentKind::WhatsApp => format!(
            "https://wa.me/{}?text={}",
            request.content,
            percent_encode(&request.extra)
        ),
        ContentKind::Wifi => format!(
            "WIFI:S:{};T:{};P:{};H:{};",
            request.content,
            request.security.label(),
            request.extra,
            request.hidden
        ),
        ContentKind::FaceTime => format!("facetime:{}", request.content),
    }
}

/// RFC 3986 percent-encoding: unreserved bytes pass through, everything
/// else becomes `%XX` with uppercase hex.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::WifiSecurity;

    fn request(kind: ContentKind, content: &str, extra: &str, extra2: &str) -> QrRequest {
        QrRequest {
            kind,
            content: content.to_string(),
            extra: extra.to_string(),
            extra2: extra2.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_url_payload_is_verbatim() {
        let req = request(ContentKind::Url, "https://example.com/?q=1&r=2", "", "");
        assert_eq!(build_payload(&req), "https://example.com/?q=1&r=2");
    }

    #[test]
    fn test_phone_payload() {
        let req = request(ContentKind::Phone, "1234567890", "", "");
        assert_eq!(build_payload(&req), "tel:1234567890");
    }

    #[test]
    fn test_email_payload_encodes_subject_and_body() {
        let req = request(ContentKind::Email, "a@b.com", "Hi", "Body text");
        assert_eq!(
            build_payload(&req),
            "mailto:a@b.com?subject=Hi&body=Body%20text"
        );
    }

    #[test]
    fn test_sms_message_is_not_percent_encoded() {
        // Regression guard: the SMS message field is embedded verbatim,
        // unlike the Email and WhatsApp fields.
        let req = request(ContentKind::Sms, "5551234", "Hello there", "");
        assert_eq!(build_payload(&req), "smsto:5551234:Hello there");
    }

    #[test]
    fn test_whatsapp_payload_encodes_message() {
        let req = request(ContentKind::WhatsApp, "5551234", "Hello there", "");
        assert_eq!(
            build_payload(&req),
            "https://wa.me/5551234?text=Hello%20there"
        );
    }

    #[test]
    fn test_wifi_payload() {
        let mut req = request(ContentKind::Wifi, "MyNet", "pass123", "");
        req.security = WifiSecurity::Wpa;
        req.hidden = true;
        assert_eq!(build_payload(&req), "WIFI:S:MyNet;T:WPA;P:pass123;H:true;");
    }

    #[test]
    fn test_open_wifi_payload() {
        let mut req = request(ContentKind::Wifi, "CafeNet", "", "");
        req.security = WifiSecurity::Open;
        assert_eq!(build_payload(&req), "WIFI:S:CafeNet;T:None;P:;H:false;");
    }

    #[test]
    fn test_facetime_payload() {
        let req = request(ContentKind::FaceTime, "a@b.com", "", "");
        assert_eq!(build_payload(&req), "facetime:a@b.com");
    }

    #[test]
    fn test_percent_encode_reserved_characters() {
        assert_eq!(percent_encode("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(percent_encode("safe-chars_.~"), "safe-chars_.~");
        assert_eq!(percent_encode("100%"), "100%25");
    }

    #[test]
    fn test_percent_encode_multibyte_utf8() {
        assert_eq!(percent_encode("café"), "caf%C3%A9");
    }

    #[test]
    fn test_distinct_requests_produce_distinct_payloads() {
        let a = request(ContentKind::Sms, "5551234", "Hello", "");
        let b = request(ContentKind::Sms, "5551234", "Hello!", "");
        assert_ne!(build_payload(&a), build_payload(&b));
    }
}
