// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Input validation for the presentation layer. Everything here runs before
//! any store mutation; the repositories trust their inputs.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::ValidationError;

static FORBIDDEN_NAME_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[<>:"/\\|?*]"#).expect("forbidden-chars regex")
});

static COLOR_HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Fa-f]{6}$").expect("color regex"));

static MONTH_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("month regex"));

/// Parse a user-entered amount. Currency symbols and thousands separators
/// are stripped, so "$1,234.50" parses to 1234.50. Amounts must be strictly
/// positive.
pub fn validate_amount(amount: &str) -> Result<Decimal, ValidationError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty("amount"));
    }
    let cleaned: String = trimmed
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | ','))
        .collect();
    let parsed = cleaned
        .trim()
        .parse::<Decimal>()
        .map_err(|_| ValidationError::BadAmount)?;
    if parsed <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(parsed)
}

/// Budget caps follow the same rule as amounts: strictly positive.
pub fn validate_budget_amount(amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(amount)
}

pub fn validate_account_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty("account name"));
    }
    if trimmed.chars().count() > 100 {
        return Err(ValidationError::TooLong("account name"));
    }
    Ok(())
}

pub fn validate_category_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty("category name"));
    }
    if trimmed.chars().count() > 100 {
        return Err(ValidationError::TooLong("category name"));
    }
    if FORBIDDEN_NAME_CHARS.is_match(name) {
        return Err(ValidationError::ForbiddenChars);
    }
    Ok(())
}

/// Accepts "RRGGBB" with or without a leading '#'.
pub fn validate_color_hex(color: &str) -> Result<(), ValidationError> {
    if color.is_empty() {
        return Err(ValidationError::Empty("color"));
    }
    let stripped = color.strip_prefix('#').unwrap_or(color);
    if !COLOR_HEX.is_match(stripped) {
        return Err(ValidationError::BadColor);
    }
    Ok(())
}

pub fn validate_note(note: &str) -> Result<(), ValidationError> {
    if note.chars().count() > 1000 {
        return Err(ValidationError::NoteTooLong);
    }
    Ok(())
}

/// Validate a "YYYY-MM" month token and return its (year, month) parts.
/// Rejects months outside 01-12 and years outside 1900-2100.
pub fn validate_month_string(month: &str) -> Result<(i32, u32), ValidationError> {
    if month.is_empty() {
        return Err(ValidationError::Empty("month"));
    }
    if !MONTH_TOKEN.is_match(month) {
        return Err(ValidationError::BadMonth);
    }
    let (year_s, month_s) = month.split_at(4);
    let year: i32 = year_s.parse().map_err(|_| ValidationError::BadMonth)?;
    let month_num: u32 = month_s[1..].parse().map_err(|_| ValidationError::BadMonth)?;
    if !(1..=12).contains(&month_num) {
        return Err(ValidationError::MonthOutOfRange);
    }
    if !(1900..=2100).contains(&year) {
        return Err(ValidationError::YearOutOfRange);
    }
    Ok((year, month_num))
}
