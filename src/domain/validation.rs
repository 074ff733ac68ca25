//! Admin record validation.
//!
//! Rules are checked in a fixed order and the first failure is reported,
//! so clients always see the same message for the same payload.

use once_cell::sync::Lazy;
use regex::Regex;

use super::admin::AdminPayload;
use crate::errors::{AppError, AppResult};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("email regex is valid")
});

/// Validate a candidate admin record before it reaches the store.
pub fn validate_admin(admin: &AdminPayload) -> AppResult<()> {
    if admin.first_name.is_empty() {
        return Err(AppError::validation("firstName is required"));
    }
    if admin.last_name.is_empty() {
        return Err(AppError::validation("lastName is required"));
    }
    if admin.email_id.is_empty() {
        return Err(AppError::validation("emailId is required"));
    }
    if !is_valid_email(&admin.email_id) {
        return Err(AppError::validation("invalid email format"));
    }
    if admin.password.is_empty() {
        return Err(AppError::validation("password is required"));
    }
    Ok(())
}

/// Simple `local@domain.tld` check (lowercase only).
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
