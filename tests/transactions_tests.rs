// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use ledgerlite::db;
use ledgerlite::models::{AccountKind, EntryKind};
use ledgerlite::repo::{AccountRepo, CategoryRepo, TransactionRepo};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> (Connection, i64, i64) {
    let conn = db::open_in_memory().unwrap();
    let account = AccountRepo::new(&conn)
        .create("Cash", AccountKind::Cash, "USD")
        .unwrap();
    let category = CategoryRepo::new(&conn)
        .create("Food & Dining", EntryKind::Expense, "#e74c3c", None)
        .unwrap();
    (conn, account.id, category.id)
}

fn at_noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDateTime::new(
        NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        NaiveTime::from_hms_opt(12, 30, 45).unwrap(),
    )
}

#[test]
fn created_transaction_round_trips_all_fields() {
    let (conn, account_id, category_id) = setup();
    let repo = TransactionRepo::new(&conn);
    let amount: Decimal = "42.50".parse().unwrap();
    let tx = repo
        .create(
            account_id,
            category_id,
            at_noon(2024, 3, 15),
            amount,
            EntryKind::Expense,
            Some("lunch"),
        )
        .unwrap();

    let fetched = repo.get_by_id(tx.id).unwrap().unwrap();
    assert_eq!(fetched.account_id, account_id);
    assert_eq!(fetched.category_id, category_id);
    assert_eq!(fetched.amount, amount);
    assert_eq!(fetched.amount.to_string(), "42.50");
    assert_eq!(fetched.kind, EntryKind::Expense);
    assert_eq!(fetched.note.as_deref(), Some("lunch"));
    // time portion is normalized to midnight
    assert_eq!(fetched.date.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert_eq!(fetched.date.time(), NaiveTime::MIN);
}

#[test]
fn delete_missing_id_returns_false() {
    let (conn, _, _) = setup();
    assert!(!TransactionRepo::new(&conn).delete(9999).unwrap());
}

#[test]
fn delete_existing_returns_true_and_removes() {
    let (conn, account_id, category_id) = setup();
    let repo = TransactionRepo::new(&conn);
    let tx = repo
        .create(
            account_id,
            category_id,
            at_noon(2024, 3, 1),
            Decimal::ONE,
            EntryKind::Expense,
            None,
        )
        .unwrap();
    assert!(repo.delete(tx.id).unwrap());
    assert!(repo.get_by_id(tx.id).unwrap().is_none());
}

#[test]
fn date_range_bounds_are_inclusive() {
    let (conn, account_id, category_id) = setup();
    let repo = TransactionRepo::new(&conn);
    for day in [1, 15, 31] {
        repo.create(
            account_id,
            category_id,
            at_noon(2024, 1, day),
            Decimal::TEN,
            EntryKind::Expense,
            None,
        )
        .unwrap();
    }
    repo.create(
        account_id,
        category_id,
        at_noon(2024, 2, 1),
        Decimal::TEN,
        EntryKind::Expense,
        None,
    )
    .unwrap();

    let (start, end) = ledgerlite::dates::month_span("2024-01").unwrap();
    let january = repo.get_by_date_range(start, end).unwrap();
    assert_eq!(january.len(), 3);
    // newest first
    assert!(january.windows(2).all(|w| w[0].date >= w[1].date));
    assert_eq!(repo.get_count_by_date_range(start, end).unwrap(), 3);
}

#[test]
fn totals_by_type_defaults_to_zero_pair() {
    let (conn, _, _) = setup();
    let (income, expense) = TransactionRepo::new(&conn)
        .get_totals_by_type(None, None)
        .unwrap();
    assert_eq!(income, Decimal::ZERO);
    assert_eq!(expense, Decimal::ZERO);
}

#[test]
fn totals_split_by_kind_over_open_window() {
    let (conn, account_id, category_id) = setup();
    let repo = TransactionRepo::new(&conn);
    let salary = CategoryRepo::new(&conn)
        .create("Salary", EntryKind::Income, "#27ae60", None)
        .unwrap();
    repo.create(
        account_id,
        category_id,
        at_noon(2024, 3, 5),
        "20.25".parse().unwrap(),
        EntryKind::Expense,
        None,
    )
    .unwrap();
    repo.create(
        account_id,
        salary.id,
        at_noon(2024, 3, 7),
        "100.00".parse().unwrap(),
        EntryKind::Income,
        None,
    )
    .unwrap();

    let (income, expense) = repo.get_totals_by_type(None, None).unwrap();
    assert_eq!(income.to_string(), "100.00");
    assert_eq!(expense.to_string(), "20.25");

    // start-only bound excludes earlier rows
    let cutoff = NaiveDateTime::new(
        NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
        NaiveTime::MIN,
    );
    let (income, expense) = repo.get_totals_by_type(Some(cutoff), None).unwrap();
    assert_eq!(income.to_string(), "100.00");
    assert_eq!(expense, Decimal::ZERO);
}

#[test]
fn search_matches_notes_case_insensitively() {
    let (conn, account_id, category_id) = setup();
    let repo = TransactionRepo::new(&conn);
    repo.create(
        account_id,
        category_id,
        at_noon(2024, 3, 1),
        Decimal::TEN,
        EntryKind::Expense,
        Some("Groceries at MARKET"),
    )
    .unwrap();
    repo.create(
        account_id,
        category_id,
        at_noon(2024, 3, 2),
        Decimal::TEN,
        EntryKind::Expense,
        None,
    )
    .unwrap();

    let hits = repo.search("market").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].note.as_deref(), Some("Groceries at MARKET"));
    // no-note rows never match, even for an empty term
    assert_eq!(repo.search("").unwrap().len(), 1);
}

#[test]
fn get_all_pages_newest_first() {
    let (conn, account_id, category_id) = setup();
    let repo = TransactionRepo::new(&conn);
    for day in 1..=5 {
        repo.create(
            account_id,
            category_id,
            at_noon(2024, 3, day),
            Decimal::ONE,
            EntryKind::Expense,
            None,
        )
        .unwrap();
    }
    let page = repo.get_all(Some(2), Some(1)).unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].date.date(), NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    assert_eq!(page[1].date.date(), NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
}

#[test]
fn get_by_category_filters_and_sorts() {
    let (conn, account_id, category_id) = setup();
    let repo = TransactionRepo::new(&conn);
    let other = CategoryRepo::new(&conn)
        .create("Transportation", EntryKind::Expense, "#3498db", None)
        .unwrap();
    for day in [3, 1] {
        repo.create(
            account_id,
            category_id,
            at_noon(2024, 3, day),
            Decimal::TEN,
            EntryKind::Expense,
            None,
        )
        .unwrap();
    }
    repo.create(
        account_id,
        other.id,
        at_noon(2024, 3, 2),
        Decimal::TEN,
        EntryKind::Expense,
        None,
    )
    .unwrap();

    let rows = repo.get_by_category(category_id).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date.date(), NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
    assert_eq!(rows[1].date.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
}

#[test]
fn update_persists_caller_mutations() {
    let (conn, account_id, category_id) = setup();
    let repo = TransactionRepo::new(&conn);
    let mut tx = repo
        .create(
            account_id,
            category_id,
            at_noon(2024, 3, 15),
            "42.50".parse().unwrap(),
            EntryKind::Expense,
            Some("lunch"),
        )
        .unwrap();

    tx.amount = "55.00".parse().unwrap();
    tx.note = None;
    let updated = repo.update(&tx).unwrap();
    assert_eq!(updated.amount.to_string(), "55.00");
    assert!(updated.note.is_none());
    assert_eq!(updated.id, tx.id);
}
