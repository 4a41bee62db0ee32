//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so every free-text
//! field coming in over the API is bounded here.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Guest first/last names and titles
pub const MAX_NAME_LEN: usize = 100;

/// Per-guest invitation messages
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Free-text RSVP fields: guest names, song request
pub const MAX_RSVP_TEXT_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Last-name prefix accepted by the public search endpoints
pub const MAX_PREFIX_LEN: usize = 100;

// ── Validation helpers (handlers) ───────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that a bounded string (possibly empty) is within the length limit.
pub fn validate_bounded_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_empty_and_whitespace() {
        assert!(validate_required_text("", "first_name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "first_name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Popescu", "first_name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn required_text_enforces_length() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "last_name", MAX_NAME_LEN).is_err());
        let exact = "x".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&exact, "last_name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn optional_text_accepts_none_and_bounds_some() {
        assert!(validate_optional_text(&None, "title", MAX_NAME_LEN).is_ok());
        let long = Some("x".repeat(MAX_NAME_LEN + 1));
        assert!(validate_optional_text(&long, "title", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn bounded_text_allows_empty() {
        assert!(validate_bounded_text("", "song_request", MAX_RSVP_TEXT_LEN).is_ok());
        let long = "x".repeat(MAX_RSVP_TEXT_LEN + 1);
        assert!(validate_bounded_text(&long, "song_request", MAX_RSVP_TEXT_LEN).is_err());
    }
}
