// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlite::dates::{
    days_in_month, format_month_display, month_span, month_to_range, next_month, prev_month,
};
use ledgerlite::error::ValidationError;

#[test]
fn month_range_regular_month() {
    let (start, end) = month_to_range("2024-03").unwrap();
    assert_eq!(start, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
}

#[test]
fn month_range_december_rolls_into_next_year() {
    let (start, end) = month_to_range("2023-12").unwrap();
    assert_eq!(start, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
    assert_eq!(end, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
}

#[test]
fn february_length_tracks_leap_years() {
    assert_eq!(days_in_month("2024-02").unwrap(), 29);
    assert_eq!(days_in_month("2023-02").unwrap(), 28);
    assert_eq!(days_in_month("2024-04").unwrap(), 30);
}

#[test]
fn month_span_covers_first_midnight_to_last_instant() {
    let (start, end) = month_span("2024-02").unwrap();
    assert_eq!(start.to_string(), "2024-02-01 00:00:00");
    assert_eq!(end.to_string(), "2024-02-29 23:59:59");
}

#[test]
fn month_navigation_wraps_year_boundaries() {
    assert_eq!(prev_month("2024-01").unwrap(), "2023-12");
    assert_eq!(next_month("2024-12").unwrap(), "2025-01");
    assert_eq!(prev_month("2024-07").unwrap(), "2024-06");
    assert_eq!(next_month("2024-07").unwrap(), "2024-08");
}

#[test]
fn display_form_spells_out_the_month() {
    assert_eq!(format_month_display("2024-03").unwrap(), "March 2024");
}

#[test]
fn bad_tokens_are_rejected() {
    assert!(matches!(
        month_to_range("2024-13"),
        Err(ValidationError::MonthOutOfRange)
    ));
    assert!(matches!(
        month_to_range("202403"),
        Err(ValidationError::BadMonth)
    ));
}
