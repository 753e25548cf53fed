// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use ledgerlite::db;
use ledgerlite::models::{AccountKind, EntryKind};
use ledgerlite::repo::{AccountRepo, AttachmentRepo, CategoryRepo, TransactionRepo};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> (Connection, i64) {
    let conn = db::open_in_memory().unwrap();
    let account = AccountRepo::new(&conn)
        .create("Cash", AccountKind::Cash, "USD")
        .unwrap();
    let category = CategoryRepo::new(&conn)
        .create("Food & Dining", EntryKind::Expense, "#e74c3c", None)
        .unwrap();
    let tx = TransactionRepo::new(&conn)
        .create(
            account.id,
            category.id,
            NaiveDateTime::new(
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                NaiveTime::MIN,
            ),
            Decimal::TEN,
            EntryKind::Expense,
            Some("lunch"),
        )
        .unwrap();
    (conn, tx.id)
}

#[test]
fn created_attachment_round_trips_via_transaction_lookup() {
    let (conn, tx_id) = setup();
    let repo = AttachmentRepo::new(&conn);
    let attachment = repo.create(tx_id, "/receipts/lunch.pdf").unwrap();

    let fetched = repo.get_by_transaction(tx_id).unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].id, attachment.id);
    assert_eq!(fetched[0].transaction_id, tx_id);
    assert_eq!(fetched[0].file_path, "/receipts/lunch.pdf");
}

#[test]
fn transaction_lookup_filters_and_orders_by_id() {
    let (conn, tx_id) = setup();
    let repo = AttachmentRepo::new(&conn);
    let first = repo.create(tx_id, "/receipts/a.pdf").unwrap();
    let second = repo.create(tx_id, "/receipts/b.pdf").unwrap();
    repo.create(9999, "/receipts/unrelated.pdf").unwrap();

    let fetched = repo.get_by_transaction(tx_id).unwrap();
    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched[0].id, first.id);
    assert_eq!(fetched[1].id, second.id);
    assert_eq!(repo.get_all().unwrap().len(), 3);
}

#[test]
fn delete_missing_id_returns_false() {
    let (conn, _) = setup();
    assert!(!AttachmentRepo::new(&conn).delete(9999).unwrap());
}

#[test]
fn delete_existing_returns_true_and_removes() {
    let (conn, tx_id) = setup();
    let repo = AttachmentRepo::new(&conn);
    let attachment = repo.create(tx_id, "/receipts/lunch.pdf").unwrap();
    assert!(repo.delete(attachment.id).unwrap());
    assert!(repo.get_by_id(attachment.id).unwrap().is_none());
    assert!(repo.get_by_transaction(tx_id).unwrap().is_empty());
}
