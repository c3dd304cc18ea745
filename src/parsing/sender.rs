//! Sender classification.
//!
//! When the exporting device has no saved contact for a participant, the
//! transcript shows their phone number instead of a name. This heuristic
//! tells the two apart; it does not validate real phone numbers.

use std::sync::LazyLock;

use regex::Regex;

/// Optional `+`, a digit, then at least six digits, spaces, hyphens or periods.
pub const PHONE_PATTERN: &str = r"^\+?\d[\d\s\-.]{6,}$";

static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(PHONE_PATTERN).unwrap());

/// Returns `true` if `name` looks like an unregistered contact's number.
///
/// # Examples
///
/// ```
/// use chatstats::parsing::is_phone_identity;
///
/// assert!(is_phone_identity("+237 6 90 99 37 08"));
/// assert!(!is_phone_identity("Alice Dupont"));
/// ```
pub fn is_phone_identity(name: &str) -> bool {
    RE_PHONE.is_match(name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international_grouped() {
        assert!(is_phone_identity("+237 6 90 99 37 08"));
        assert!(is_phone_identity("+33 6 12 34 56 78"));
        assert!(is_phone_identity("+237690993708"));
    }

    #[test]
    fn test_local_punctuated() {
        assert!(is_phone_identity("06.12.34.56.78"));
        assert!(is_phone_identity("555-123-4567"));
        assert!(is_phone_identity("  0612345678  "));
    }

    #[test]
    fn test_minimum_length() {
        // digit + six more characters
        assert!(is_phone_identity("1234567"));
        assert!(!is_phone_identity("123456"));
        assert!(!is_phone_identity("+123456"));
    }

    #[test]
    fn test_names_rejected() {
        assert!(!is_phone_identity("Alice Dupont"));
        assert!(!is_phone_identity("Alice 2"));
        assert!(!is_phone_identity("+237 6 90 99 37 08 (work)"));
        assert!(!is_phone_identity("User1234567"));
        assert!(!is_phone_identity(""));
    }

    #[test]
    fn test_must_start_with_digit_after_plus() {
        assert!(!is_phone_identity("+ 237 690 993 708"));
        assert!(!is_phone_identity("-1234567"));
        assert!(!is_phone_identity("++2376909937"));
    }
}
