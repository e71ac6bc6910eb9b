//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen as reasonable UX limits for names; the store has
//! no built-in length enforcement.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: table name
pub const MAX_NAME_LEN: usize = 200;

/// Local phone numbers: leading `0` plus 9 digits
pub const PHONE_LEN: usize = 10;

// ── Validation helpers ──────────────────────────────────────────────

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

/// Local-format phone check: exactly 10 ASCII digits starting with `0`.
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    phone.len() == PHONE_LEN
        && phone.starts_with('0')
        && phone.chars().all(|c| c.is_ascii_digit())
}
