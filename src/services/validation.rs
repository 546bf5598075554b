//! Form checks shared by the dashboard services. Each returns the cleaned
//! value or a message suitable for showing to the user.

use crate::models::{MAX_RATING, MIN_RATING};

pub const MIN_PHONE_DIGITS: usize = 10;

pub fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(trimmed)
}

pub fn validate_phone(phone: &str) -> Result<&str, String> {
    let trimmed = phone.trim();
    if trimmed.len() < MIN_PHONE_DIGITS {
        return Err(format!(
            "Phone number must have at least {MIN_PHONE_DIGITS} digits"
        ));
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err("Phone number can only contain digits".to_string());
    }
    Ok(trimmed)
}

pub fn validate_rating(rating: u8) -> Result<u8, String> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        ));
    }
    Ok(rating)
}

pub fn require_positive(value: u32, field: &str) -> Result<u32, String> {
    if value == 0 {
        return Err(format!("{field} must be greater than zero"));
    }
    Ok(value)
}

/// Trims and drops blank optional text.
#[must_use]
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_rules() {
        assert_eq!(validate_phone(" 9800011101 ").unwrap(), "9800011101");
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("98000111ab").is_err());
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert_eq!(validate_rating(5).unwrap(), 5);
        assert_eq!(validate_rating(1).unwrap(), 1);
    }

    #[test]
    fn text_rules() {
        assert!(require_text("   ", "Name").is_err());
        assert_eq!(require_text(" Raju ", "Name").unwrap(), "Raju");
        assert_eq!(optional_text(Some("  ".to_string())), None);
        assert_eq!(optional_text(Some(" hi ".to_string())).as_deref(), Some("hi"));
        assert!(require_positive(0, "Payment").is_err());
    }
}
