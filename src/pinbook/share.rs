//! # Sharing
//!
//! A record leaves pinbook as plain text, never as stored JSON:
//!
//! ```text
//! Jane Doe
//! PIN: A12 3456 789
//! ```
//!
//! That text is handed to one of several sinks. Clipboard and link opening live in
//! [`crate::clipboard`] and [`crate::launcher`]; this module only builds strings,
//! so everything here is pure and testable.
//!
//! Links use the `sms:` and `mailto:` schemes with percent-encoded query values.
//! Encoding keeps the RFC 3986 unreserved set (`A-Z a-z 0-9 - . _ ~`) and turns
//! every other byte of the UTF-8 text into `%XX`.

use crate::model::Record;

/// Label used in share text when none is configured.
pub const DEFAULT_LABEL: &str = "PIN";

/// Where a share goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareTarget {
    #[default]
    Clipboard,
    Message,
    Email,
    Code,
}

impl std::str::FromStr for ShareTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clipboard" | "copy" => Ok(ShareTarget::Clipboard),
            "message" | "sms" => Ok(ShareTarget::Message),
            "email" | "mail" => Ok(ShareTarget::Email),
            "code" | "qr" => Ok(ShareTarget::Code),
            other => Err(format!(
                "Unknown share target '{}' (clipboard, message, email, code)",
                other
            )),
        }
    }
}

impl std::fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShareTarget::Clipboard => "clipboard",
            ShareTarget::Message => "message",
            ShareTarget::Email => "email",
            ShareTarget::Code => "code",
        };
        f.write_str(name)
    }
}

pub fn share_text(record: &Record, label: &str) -> String {
    format!("{}\n{}: {}", record.name, label, record.identifier)
}

pub fn message_link(text: &str) -> String {
    format!("sms:?body={}", percent_encode(text))
}

pub fn email_link(subject: &str, text: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        percent_encode(subject),
        percent_encode(text)
    )
}

/// What a scannable-code renderer should encode: the identifier alone.
pub fn code_payload(record: &Record) -> &str {
    &record.identifier
}

pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;
    use chrono::Utc;

    fn jane() -> Record {
        Record::new(
            RecordId::from("x"),
            "Jane Doe".into(),
            "A12 3456 789".into(),
            Utc::now(),
        )
    }

    #[test]
    fn text_has_name_then_labelled_identifier() {
        assert_eq!(share_text(&jane(), "PIN"), "Jane Doe\nPIN: A12 3456 789");
        assert_eq!(
            share_text(&jane(), "Passport"),
            "Jane Doe\nPassport: A12 3456 789"
        );
    }

    #[test]
    fn encodes_reserved_and_non_ascii() {
        assert_eq!(percent_encode("a-b.c_d~e"), "a-b.c_d~e");
        assert_eq!(percent_encode("a b\n&="), "a%20b%0A%26%3D");
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn message_link_encodes_body() {
        let text = share_text(&jane(), "PIN");
        assert_eq!(
            message_link(&text),
            "sms:?body=Jane%20Doe%0APIN%3A%20A12%203456%20789"
        );
    }

    #[test]
    fn email_link_encodes_subject_and_body() {
        assert_eq!(
            email_link("My PIN", "a&b"),
            "mailto:?subject=My%20PIN&body=a%26b"
        );
    }

    #[test]
    fn code_payload_is_identifier() {
        assert_eq!(code_payload(&jane()), "A12 3456 789");
    }

    #[test]
    fn parses_targets() {
        assert_eq!("Email".parse::<ShareTarget>().unwrap(), ShareTarget::Email);
        assert_eq!("sms".parse::<ShareTarget>().unwrap(), ShareTarget::Message);
        assert!("fax".parse::<ShareTarget>().is_err());
    }
}
