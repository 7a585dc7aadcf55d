// src/domain/chat_link.rs

use crate::errors::ValidationError;
use url::form_urlencoded;

const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// Strips formatting from a phone number and returns its E.164 digits.
pub fn normalize_phone(phone: &str) -> Result<String, ValidationError> {
    let trimmed = phone.trim();
    let without_plus = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let mut digits = String::with_capacity(without_plus.len());
    for c in without_plus.chars() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' | '(' | ')' | '.' => {}
            other => {
                return Err(ValidationError::Invalid {
                    field: "phone",
                    reason: format!("unexpected character {other:?}"),
                })
            }
        }
    }

    if digits.is_empty() {
        return Err(ValidationError::Missing { field: "phone" });
    }
    // E.164 allows at most 15 digits.
    if digits.len() > 15 {
        return Err(ValidationError::Invalid {
            field: "phone",
            reason: format!("{} digits is longer than E.164 allows", digits.len()),
        });
    }
    Ok(digits)
}

/// Builds a click-to-chat link with a pre-filled message.
pub fn whatsapp_link(phone: &str, message: &str) -> Result<String, ValidationError> {
    let digits = normalize_phone(phone)?;
    let text: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
    // byte_serialize writes spaces as '+'; a literal plus is already %2B.
    let text = text.replace('+', "%20");
    Ok(format!("{WHATSAPP_SEND_URL}?phone={digits}&text={text}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_link_with_encoded_text() {
        let link = whatsapp_link("+34 600-123 456", "Hola, I own 2 flats & a room").unwrap();
        assert_eq!(
            link,
            "https://api.whatsapp.com/send?phone=34600123456&text=Hola%2C%20I%20own%202%20flats%20%26%20a%20room"
        );
    }

    #[test]
    fn keeps_literal_plus_in_message() {
        let link = whatsapp_link("34600123456", "1+1").unwrap();
        assert!(link.ends_with("text=1%2B1"));
    }

    #[test]
    fn rejects_bad_phone_numbers() {
        assert_eq!(
            normalize_phone("  "),
            Err(ValidationError::Missing { field: "phone" })
        );
        assert!(normalize_phone("call me").is_err());
        assert!(normalize_phone("1234567890123456").is_err());
        assert_eq!(normalize_phone("(91) 555.12.34").unwrap(), "915551234");
    }
}
