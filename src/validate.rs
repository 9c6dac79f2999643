// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side field validation, applied before any request leaves the device.

use chrono::{Datelike, NaiveDate, Utc};
use validator::ValidationError;

use crate::error::AppError;

/// Minimum password length (register, reset).
pub const MIN_PASSWORD_LEN: usize = 6;

/// Verification / reset codes are 6-10 digits.
pub const CODE_MIN_DIGITS: usize = 6;
pub const CODE_MAX_DIGITS: usize = 10;

/// Minimum age at registration, in years.
pub const MIN_AGE_YEARS: i32 = 13;

/// Lower-case and trim an email before transmission.
///
/// Applied uniformly on every operation that sends an email field; the
/// server matches emails case-insensitively only because the client holds
/// up this contract.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check the minimum password length.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Coerce raw code input to digits only, capped at the maximum length.
///
/// Mirrors what the code entry field does as the user types.
pub fn sanitize_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(CODE_MAX_DIGITS)
        .collect()
}

/// Check a sanitized code's length (6-10 digits).
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if code.len() < CODE_MIN_DIGITS || code.len() > CODE_MAX_DIGITS {
        return Err(AppError::Validation(format!(
            "Code must be {}-{} digits",
            CODE_MIN_DIGITS, CODE_MAX_DIGITS
        )));
    }
    Ok(())
}

/// Parse and check a birth date: `YYYY-MM-DD`, not in the future, and at
/// least the minimum age.
pub fn validate_birth_date(raw: &str) -> Result<NaiveDate, AppError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Birth date must be YYYY-MM-DD".to_string()))?;

    let today = Utc::now().date_naive();
    if date > today {
        return Err(AppError::Validation(
            "Birth date cannot be in the future".to_string(),
        ));
    }

    let cutoff = today
        .with_year(today.year() - MIN_AGE_YEARS)
        .unwrap_or(today);
    if date > cutoff {
        return Err(AppError::Validation(format!(
            "You must be at least {} years old",
            MIN_AGE_YEARS
        )));
    }

    Ok(date)
}

/// `validator`-derive adapter for the birth-date rule.
pub fn birth_date_rule(raw: &str) -> Result<(), ValidationError> {
    validate_birth_date(raw).map(|_| ()).map_err(|e| {
        let mut err = ValidationError::new("birth_date");
        err.message = Some(e.user_message().into());
        err
    })
}

/// Flatten `validator` derive output into a single user-facing message.
pub fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    for (field, errs) in errors.field_errors() {
        if let Some(err) = errs.first() {
            if let Some(msg) = &err.message {
                return msg.to_string();
            }
            return format!("Invalid value for {}", field);
        }
    }
    "Invalid input".to_string()
}
