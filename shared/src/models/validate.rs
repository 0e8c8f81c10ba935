//! Validation helpers shared by the payload types
//!
//! The `validator` derive covers length rules; everything it cannot express
//! (decimal ranges, charset rules, cross-field constraints) is checked by the
//! payloads' `validate_payload()` methods, which merge their findings into the
//! same `ValidationErrors` so every problem is reported in one pass.

use std::borrow::Cow;
use validator::ValidationError;

/// Slug charset rule: lowercase ASCII letters, digits, and hyphens only.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Build a `ValidationError` with a fixed code and message.
pub(crate) fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_charset() {
        assert!(is_valid_slug("mens-wear"));
        assert!(is_valid_slug("aisle-3"));
        assert!(!is_valid_slug("Men's Wear"));
        assert!(!is_valid_slug("MENS-WEAR"));
        assert!(!is_valid_slug("mens wear"));
        assert!(!is_valid_slug(""));
    }
}
