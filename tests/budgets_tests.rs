// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerlite::db;
use ledgerlite::models::EntryKind;
use ledgerlite::repo::{BudgetRepo, CategoryRepo};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> (Connection, i64, i64) {
    let conn = db::open_in_memory().unwrap();
    let repo = CategoryRepo::new(&conn);
    let dining = repo
        .create("Dining", EntryKind::Expense, "#e74c3c", None)
        .unwrap();
    let travel = repo
        .create("Travel", EntryKind::Expense, "#2ecc71", None)
        .unwrap();
    (conn, dining.id, travel.id)
}

#[test]
fn budget_round_trips_with_two_decimal_places() {
    let (conn, dining, _) = setup();
    let repo = BudgetRepo::new(&conn);
    let budget = repo
        .create(dining, "2024-03", "250.00".parse().unwrap())
        .unwrap();
    let fetched = repo.get_by_id(budget.id).unwrap().unwrap();
    assert_eq!(fetched.month, "2024-03");
    assert_eq!(fetched.amount_cap.to_string(), "250.00");
}

#[test]
fn lookup_by_pair_is_optional_not_an_error() {
    let (conn, dining, _) = setup();
    let repo = BudgetRepo::new(&conn);
    assert!(repo
        .get_by_category_and_month(dining, "2024-03")
        .unwrap()
        .is_none());
    repo.create(dining, "2024-03", Decimal::new(5000, 2)).unwrap();
    let found = repo
        .get_by_category_and_month(dining, "2024-03")
        .unwrap()
        .unwrap();
    assert_eq!(found.category_id, dining);
}

#[test]
fn set_upserts_one_budget_per_pair() {
    let (conn, dining, _) = setup();
    let repo = BudgetRepo::new(&conn);
    repo.set(dining, "2024-03", "100.00".parse().unwrap()).unwrap();
    repo.set(dining, "2024-03", "175.50".parse().unwrap()).unwrap();

    let march = repo.get_by_month("2024-03").unwrap();
    assert_eq!(march.len(), 1);
    assert_eq!(march[0].amount_cap.to_string(), "175.50");
}

#[test]
fn get_all_orders_month_desc_then_category() {
    let (conn, dining, travel) = setup();
    let repo = BudgetRepo::new(&conn);
    repo.create(travel, "2024-02", Decimal::ONE_HUNDRED).unwrap();
    repo.create(dining, "2024-03", Decimal::ONE_HUNDRED).unwrap();
    repo.create(travel, "2024-03", Decimal::ONE_HUNDRED).unwrap();

    let all = repo.get_all().unwrap();
    let keys: Vec<_> = all
        .iter()
        .map(|b| (b.month.as_str(), b.category_id))
        .collect();
    assert_eq!(
        keys,
        [("2024-03", dining), ("2024-03", travel), ("2024-02", travel)]
    );
}

#[test]
fn month_listing_orders_by_category() {
    let (conn, dining, travel) = setup();
    let repo = BudgetRepo::new(&conn);
    repo.create(travel, "2024-03", Decimal::TEN).unwrap();
    repo.create(dining, "2024-03", Decimal::TEN).unwrap();

    let march = repo.get_by_month("2024-03").unwrap();
    let ids: Vec<_> = march.iter().map(|b| b.category_id).collect();
    assert_eq!(ids, [dining, travel]);
    assert!(repo.get_by_month("2024-04").unwrap().is_empty());
}

#[test]
fn delete_missing_budget_returns_false() {
    let (conn, _, _) = setup();
    assert!(!BudgetRepo::new(&conn).delete(404).unwrap());
}
