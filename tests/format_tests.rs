// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerlite::models::EntryKind;
use ledgerlite::utils::{fmt_currency, fmt_signed};
use rust_decimal::Decimal;

#[test]
fn currency_symbol_tracks_the_currency_code() {
    let amount: Decimal = "1234.5".parse().unwrap();
    assert_eq!(fmt_currency(amount, "USD"), "$1,234.50");
    assert_eq!(fmt_currency(amount, "EUR"), "€1,234.50");
    assert_eq!(fmt_currency(amount, "GBP"), "£1,234.50");
    assert_eq!(fmt_currency(amount, "CHF"), "1,234.50 CHF");
}

#[test]
fn thousands_grouping_handles_small_and_large_magnitudes() {
    assert_eq!(fmt_currency("0.5".parse().unwrap(), "USD"), "$0.50");
    assert_eq!(fmt_currency("999.99".parse().unwrap(), "USD"), "$999.99");
    assert_eq!(
        fmt_currency("1234567.89".parse().unwrap(), "USD"),
        "$1,234,567.89"
    );
}

#[test]
fn signed_form_uses_the_account_currency() {
    let amount: Decimal = "42.50".parse().unwrap();
    assert_eq!(fmt_signed(amount, EntryKind::Expense, "EUR"), "-€42.50");
    assert_eq!(fmt_signed(amount, EntryKind::Income, "USD"), "+$42.50");
}
