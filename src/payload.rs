//! Text payloads for the kinds of content people usually put in a QR code.
//!
//! Each builder produces plain text; encode it with
//! [`QrModel::encode_text`](crate::qrcode::QrModel::encode_text) like any other string.

use core::str::FromStr;

use crate::error::QrError;

/// Authentication type advertised in a Wi-Fi payload.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WifiSecurity {
    #[default]
    Wpa,
    Wep,
    /// Open network, no password.
    None,
}

impl WifiSecurity {
    fn code(self) -> &'static str {
        match self {
            WifiSecurity::Wpa => "WPA",
            WifiSecurity::Wep => "WEP",
            WifiSecurity::None => "nopass",
        }
    }
}

impl FromStr for WifiSecurity {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wpa" | "wpa2" | "wpa3" => Ok(WifiSecurity::Wpa),
            "wep" => Ok(WifiSecurity::Wep),
            "nopass" | "none" | "open" => Ok(WifiSecurity::None),
            _ => Err(QrError::InvalidSecurity(s.to_owned())),
        }
    }
}

/// Network credentials in the `WIFI:` format understood by phone cameras.
///
/// # Example
///
/// ```rust
/// use qrmint::payload::{WifiCredentials, WifiSecurity};
///
/// let wifi = WifiCredentials {
///     ssid: "Home".into(),
///     password: "p;ss".into(),
///     security: WifiSecurity::Wpa,
///     hidden: false,
/// };
/// assert_eq!(wifi.to_text(), r"WIFI:T:WPA;S:Home;P:p\;ss;;");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct WifiCredentials {
    pub ssid: String,
    pub password: String,
    pub security: WifiSecurity,
    pub hidden: bool,
}

impl WifiCredentials {
    pub fn to_text(&self) -> String {
        let mut out = format!("WIFI:T:{};S:{};", self.security.code(), escape_wifi(&self.ssid));
        if self.security != WifiSecurity::None {
            out.push_str(&format!("P:{};", escape_wifi(&self.password)));
        }
        if self.hidden {
            out.push_str("H:true;");
        }
        out.push(';');
        out
    }
}

fn escape_wifi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | ':' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// A contact, rendered as a vCard 3.0 record.
///
/// Empty fields are left out of the card.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ContactCard {
    pub first_name: String,
    pub last_name: String,
    pub organization: String,
    pub title: String,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub url: String,
    pub address: String,
    pub note: String,
}

impl ContactCard {
    pub fn to_text(&self) -> String {
        let mut out = String::from("BEGIN:VCARD\nVERSION:3.0\n");
        out.push_str(&format!(
            "N:{};{};;;\n",
            escape_vcard(&self.last_name),
            escape_vcard(&self.first_name),
        ));
        let full_name = [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        push_field(&mut out, "FN", &full_name);
        push_field(&mut out, "ORG", &self.organization);
        push_field(&mut out, "TITLE", &self.title);
        for phone in &self.phones {
            push_field(&mut out, "TEL", phone);
        }
        for email in &self.emails {
            push_field(&mut out, "EMAIL", email);
        }
        push_field(&mut out, "URL", &self.url);
        // Single free-form line goes in the street slot.
        if !self.address.is_empty() {
            out.push_str(&format!("ADR:;;{};;;;\n", escape_vcard(&self.address)));
        }
        push_field(&mut out, "NOTE", &self.note);
        out.push_str("END:VCARD\n");
        out
    }
}

fn push_field(out: &mut String, name: &str, value: &str) {
    if !value.is_empty() {
        out.push_str(&format!("{}:{}\n", name, escape_vcard(value)));
    }
}

fn escape_vcard(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | ',' | ';' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Anything that can be turned into QR text.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Payload {
    Text(String),
    Contact(ContactCard),
    Wifi(WifiCredentials),
}

impl Payload {
    pub fn to_text(&self) -> String {
        match self {
            Payload::Text(text) => text.clone(),
            Payload::Contact(card) => card.to_text(),
            Payload::Wifi(wifi) => wifi.to_text(),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_owned())
    }
}

impl From<ContactCard> for Payload {
    fn from(card: ContactCard) -> Self {
        Payload::Contact(card)
    }
}

impl From<WifiCredentials> for Payload {
    fn from(wifi: WifiCredentials) -> Self {
        Payload::Wifi(wifi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qrcode::{ErrorCorrectionLevel, ModuleGrid, QrModel};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(WifiSecurity::Wpa, false, "WIFI:T:WPA;S:Cafe;P:secret;;")]
    #[test_case(WifiSecurity::Wep, true, "WIFI:T:WEP;S:Cafe;P:secret;H:true;;")]
    #[test_case(WifiSecurity::None, false, "WIFI:T:nopass;S:Cafe;;")]
    fn test_wifi_text(security: WifiSecurity, hidden: bool, expected: &str) {
        let wifi = WifiCredentials {
            ssid: "Cafe".into(),
            password: "secret".into(),
            security,
            hidden,
        };
        assert_eq!(wifi.to_text(), expected);
    }

    #[test]
    fn test_wifi_escapes_special_characters() {
        let wifi = WifiCredentials {
            ssid: r#"a;b,c:d"e\f"#.into(),
            password: "x".into(),
            ..Default::default()
        };
        assert_eq!(wifi.to_text(), r#"WIFI:T:WPA;S:a\;b\,c\:d\"e\\f;P:x;;"#);
    }

    #[test_case("WPA2", WifiSecurity::Wpa)]
    #[test_case("wep", WifiSecurity::Wep)]
    #[test_case("open", WifiSecurity::None)]
    fn test_security_from_str(s: &str, expected: WifiSecurity) {
        assert_eq!(s.parse::<WifiSecurity>().unwrap(), expected);
    }

    #[test]
    fn test_security_from_str_rejects_unknown() {
        assert!(matches!("wpa9".parse::<WifiSecurity>(), Err(QrError::InvalidSecurity(_))));
    }

    #[test]
    fn test_contact_card_full() {
        let card = ContactCard {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            organization: "Analytical Engines, Ltd".into(),
            title: "Programmer".into(),
            phones: vec!["+44 20 1234 5678".into()],
            emails: vec!["ada@example.com".into()],
            url: "https://example.com".into(),
            address: "12 St James's Square; London".into(),
            note: "first line\nsecond line".into(),
        };
        assert_eq!(
            card.to_text(),
            "BEGIN:VCARD\n\
             VERSION:3.0\n\
             N:Lovelace;Ada;;;\n\
             FN:Ada Lovelace\n\
             ORG:Analytical Engines\\, Ltd\n\
             TITLE:Programmer\n\
             TEL:+44 20 1234 5678\n\
             EMAIL:ada@example.com\n\
             URL:https://example.com\n\
             ADR:;;12 St James's Square\\; London;;;;\n\
             NOTE:first line\\nsecond line\n\
             END:VCARD\n"
        );
    }

    #[test]
    fn test_contact_card_omits_empty_fields() {
        let card = ContactCard {
            first_name: "Grace".into(),
            ..Default::default()
        };
        assert_eq!(card.to_text(), "BEGIN:VCARD\nVERSION:3.0\nN:;Grace;;;\nFN:Grace\nEND:VCARD\n");
    }

    #[test]
    fn test_payload_dispatch() {
        assert_eq!(Payload::from("plain").to_text(), "plain");
        let wifi = WifiCredentials {
            ssid: "n".into(),
            security: WifiSecurity::None,
            ..Default::default()
        };
        assert_eq!(Payload::from(wifi).to_text(), "WIFI:T:nopass;S:n;;");
    }

    #[test]
    fn test_contact_card_encodes() {
        let card = ContactCard {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            emails: vec!["ada@example.com".into()],
            ..Default::default()
        };
        let qr = QrModel::encode_text(&Payload::from(card).to_text(), ErrorCorrectionLevel::M).unwrap();
        assert!(qr.module_count() > 21);
    }
}
