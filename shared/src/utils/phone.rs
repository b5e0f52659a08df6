//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is valid (international E.164 format)
pub fn is_valid_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    INTERNATIONAL_PHONE_REGEX.is_match(&normalized)
}

/// Mask a phone number for logging, keeping only the last four digits
pub fn mask_phone(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() > 4 {
        format!("***{}", &normalized[normalized.len() - 4..])
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("+1 415 555-2671"), "+14155552671");
        assert_eq!(normalize_phone_number("(415) 555-2671"), "4155552671");
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+14155552671"));
        assert!(is_valid_phone("+442071838750"));
        assert!(!is_valid_phone("14155552671")); // Missing +
        assert!(!is_valid_phone("+0123456789")); // Invalid country code
        assert!(!is_valid_phone("+1"));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+14155552671"), "***2671");
        assert_eq!(mask_phone("+123"), "****");
    }
}
