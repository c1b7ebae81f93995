//! Content model for a single QR generation request
//!
//! A [`QrRequest`] is built from widget state immediately before use and
//! discarded afterwards. The [`FormLayout`] table drives which auxiliary
//! widgets the shell shows for each content kind, so the show/hide rules
//! stay out of the UI code.

/// The kind of content encoded into the QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Url,
    Phone,
    Email,
    Sms,
    WhatsApp,
    Wifi,
    FaceTime,
}

impl ContentKind {
    /// All kinds in the order they appear in the type selector.
    pub const ALL: [ContentKind; 7] = [
        ContentKind::Url,
        ContentKind::Phone,
        ContentKind::Email,
        ContentKind::Sms,
        ContentKind::WhatsApp,
        ContentKind::Wifi,
        ContentKind::FaceTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Url => "URL/Text",
            ContentKind::Phone => "Phone",
            ContentKind::Email => "Email",
            ContentKind::Sms => "SMS",
            ContentKind::WhatsApp => "WhatsApp",
            ContentKind::Wifi => "WiFi",
            ContentKind::FaceTime => "FaceTime",
        }
    }

    /// Which fields the input form shows for this kind, with their
    /// placeholder texts. An auxiliary field is visible iff its
    /// placeholder is `Some`.
    pub fn form_layout(self) -> FormLayout {
        match self {
            ContentKind::Url => FormLayout::content_only("https://example.com"),
            ContentKind::Phone => FormLayout::content_only("1234567890"),
            ContentKind::Email => FormLayout {
                content_hint: "mail@example.com",
                extra: Some("Subject"),
                extra2: Some("Body"),
                wifi_controls: false,
            },
            ContentKind::Sms | ContentKind::WhatsApp => FormLayout {
                content_hint: "1234567890",
                extra: Some("Message"),
                extra2: None,
                wifi_controls: false,
            },
            ContentKind::Wifi => FormLayout {
                content_hint: "SSID",
                extra: Some("Password"),
                extra2: None,
                wifi_controls: true,
            },
            ContentKind::FaceTime => FormLayout::content_only("phone or email"),
        }
    }
}

impl Default for ContentKind {
    fn default() -> Self {
        ContentKind::Url
    }
}

/// WiFi security protocol for the `WIFI:` payload.
///
/// The label doubles as the `T:` tag written into the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiSecurity {
    Wpa,
    Wep,
    Open,
}

impl WifiSecurity {
    /// All protocols in the order they appear in the security selector.
    pub const ALL: [WifiSecurity; 3] = [WifiSecurity::Wpa, WifiSecurity::Wep, WifiSecurity::Open];

    pub fn label(self) -> &'static str {
        match self {
            WifiSecurity::Wpa => "WPA",
            WifiSecurity::Wep => "WEP",
            WifiSecurity::Open => "None",
        }
    }
}

impl Default for WifiSecurity {
    fn default() -> Self {
        WifiSecurity::Wpa
    }
}

/// One QR generation request, assembled from the form fields.
///
/// The auxiliary field semantics depend on `kind`: for Email, `extra` is
/// the subject and `extra2` the body; for SMS and WhatsApp, `extra` is
/// the message; for WiFi, `extra` is the password. `security` and
/// `hidden` are only meaningful for WiFi.
#[derive(Debug, Clone, Default)]
pub struct QrRequest {
    pub kind: ContentKind,
    pub content: String,
    pub extra: String,
    pub extra2: String,
    pub security: WifiSecurity,
    pub hidden: bool,
}

/// Per-kind form layout: primary placeholder, auxiliary field
/// placeholders (visible iff `Some`), and whether the WiFi security
/// selector and hidden-network checkbox are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub content_hint: &'static str,
    pub extra: Option<&'static str>,
    pub extra2: Option<&'static str>,
    pub wifi_controls: bool,
}

impl FormLayout {
    fn content_only(content_hint: &'static str) -> Self {
        Self {
            content_hint,
            extra: None,
            extra2: None,
            wifi_controls: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_order_matches_labels() {
        let labels: Vec<&str> = ContentKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            ["URL/Text", "Phone", "Email", "SMS", "WhatsApp", "WiFi", "FaceTime"]
        );
    }

    #[test]
    fn test_aux_fields_hidden_for_single_field_kinds() {
        for kind in [ContentKind::Url, ContentKind::Phone, ContentKind::FaceTime] {
            let layout = kind.form_layout();
            assert_eq!(layout.extra, None);
            assert_eq!(layout.extra2, None);
            assert!(!layout.wifi_controls);
        }
    }

    #[test]
    fn test_email_layout_shows_subject_and_body() {
        let layout = ContentKind::Email.form_layout();
        assert_eq!(layout.content_hint, "mail@example.com");
        assert_eq!(layout.extra, Some("Subject"));
        assert_eq!(layout.extra2, Some("Body"));
        assert!(!layout.wifi_controls);
    }

    #[test]
    fn test_message_kinds_show_single_extra_field() {
        for kind in [ContentKind::Sms, ContentKind::WhatsApp] {
            let layout = kind.form_layout();
            assert_eq!(layout.extra, Some("Message"));
            assert_eq!(layout.extra2, None);
        }
    }

    #[test]
    fn test_wifi_layout_shows_security_controls() {
        let layout = ContentKind::Wifi.form_layout();
        assert_eq!(layout.content_hint, "SSID");
        assert_eq!(layout.extra, Some("Password"));
        assert_eq!(layout.extra2, None);
        assert!(layout.wifi_controls);
    }

    #[test]
    fn test_security_tags() {
        assert_eq!(WifiSecurity::Wpa.label(), "WPA");
        assert_eq!(WifiSecurity::Wep.label(), "WEP");
        assert_eq!(WifiSecurity::Open.label(), "None");
    }
}
