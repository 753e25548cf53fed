// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Month-token arithmetic. A month token is a "YYYY-MM" string, the primary
//! time-bucketing key for dashboards and budgets.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ValidationError;
use crate::validate::validate_month_string;

fn first_day(year: i32, month: u32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ValidationError::BadMonth)
}

/// Start and end calendar days of a month. The end day is computed as the
/// first day of the next month minus one day, which handles December
/// rollover and variable month lengths including leap years.
pub fn month_to_range(month: &str) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    let (year, month_num) = validate_month_string(month)?;
    let start = first_day(year, month_num)?;
    let next = if month_num == 12 {
        first_day(year + 1, 1)?
    } else {
        first_day(year, month_num + 1)?
    };
    Ok((start, next - Duration::days(1)))
}

/// Datetime window covering a whole month: first day at midnight through the
/// last instant of the last day. Suitable as-is for the inclusive
/// `get_by_date_range` bounds.
pub fn month_span(month: &str) -> Result<(NaiveDateTime, NaiveDateTime), ValidationError> {
    let (start, end) = month_to_range(month)?;
    Ok((start.and_time(NaiveTime::MIN), end.and_time(end_of_day())))
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

pub fn days_in_month(month: &str) -> Result<u32, ValidationError> {
    let (start, end) = month_to_range(month)?;
    Ok((end - start).num_days() as u32 + 1)
}

pub fn prev_month(month: &str) -> Result<String, ValidationError> {
    let (year, month_num) = validate_month_string(month)?;
    Ok(if month_num == 1 {
        format!("{}-12", year - 1)
    } else {
        format!("{}-{:02}", year, month_num - 1)
    })
}

pub fn next_month(month: &str) -> Result<String, ValidationError> {
    let (year, month_num) = validate_month_string(month)?;
    Ok(if month_num == 12 {
        format!("{}-01", year + 1)
    } else {
        format!("{}-{:02}", year, month_num + 1)
    })
}

pub fn current_month() -> String {
    Local::now().format("%Y-%m").to_string()
}

/// Human display form, e.g. "March 2024".
pub fn format_month_display(month: &str) -> Result<String, ValidationError> {
    let (start, _) = month_to_range(month)?;
    Ok(start.format("%B %Y").to_string())
}
