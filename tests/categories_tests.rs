// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerlite::db;
use ledgerlite::error::StoreError;
use ledgerlite::models::EntryKind;
use ledgerlite::repo::CategoryRepo;
use rusqlite::Connection;

fn setup() -> Connection {
    db::open_in_memory().unwrap()
}

#[test]
fn get_by_type_filters_and_sorts_by_name() {
    let conn = setup();
    let repo = CategoryRepo::new(&conn);
    repo.create("Travel", EntryKind::Expense, "#2ecc71", None)
        .unwrap();
    repo.create("Food & Dining", EntryKind::Expense, "#e74c3c", None)
        .unwrap();
    repo.create("Salary", EntryKind::Income, "#27ae60", None)
        .unwrap();

    let expenses = repo.get_by_type(EntryKind::Expense).unwrap();
    let names: Vec<_> = expenses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Food & Dining", "Travel"]);
}

#[test]
fn parent_assignment_builds_a_tree() {
    let conn = setup();
    let repo = CategoryRepo::new(&conn);
    let food = repo
        .create("Food", EntryKind::Expense, "#e74c3c", None)
        .unwrap();
    let takeout = repo
        .create("Takeout", EntryKind::Expense, "#e74c3c", Some(food.id))
        .unwrap();
    assert_eq!(takeout.parent_id, Some(food.id));
}

#[test]
fn reparenting_onto_a_descendant_is_rejected() {
    let conn = setup();
    let repo = CategoryRepo::new(&conn);
    let a = repo.create("A", EntryKind::Expense, "#111111", None).unwrap();
    let mut b = repo
        .create("B", EntryKind::Expense, "#222222", Some(a.id))
        .unwrap();
    let c = repo
        .create("C", EntryKind::Expense, "#333333", Some(b.id))
        .unwrap();

    // A -> C would close the loop A -> B -> C -> A
    let mut a = repo.get_by_id(a.id).unwrap().unwrap();
    a.parent_id = Some(c.id);
    assert!(matches!(
        repo.update(&a),
        Err(StoreError::CategoryCycle { .. })
    ));

    // a category can never be its own parent
    b.parent_id = Some(b.id);
    assert!(matches!(
        repo.update(&b),
        Err(StoreError::CategoryCycle { .. })
    ));

    // legal reparenting still works
    let mut c = repo.get_by_id(c.id).unwrap().unwrap();
    c.parent_id = None;
    assert!(repo.update(&c).unwrap().parent_id.is_none());
}

#[test]
fn delete_returns_presence() {
    let conn = setup();
    let repo = CategoryRepo::new(&conn);
    let cat = repo
        .create("Gone", EntryKind::Expense, "#abcdef", None)
        .unwrap();
    assert!(repo.delete(cat.id).unwrap());
    assert!(!repo.delete(cat.id).unwrap());
}

#[test]
fn seeded_store_carries_default_palette() {
    let conn = setup();
    db::seed_defaults(&conn).unwrap();
    let repo = CategoryRepo::new(&conn);
    assert_eq!(repo.get_by_type(EntryKind::Expense).unwrap().len(), 9);
    assert_eq!(repo.get_by_type(EntryKind::Income).unwrap().len(), 5);
    let accounts = ledgerlite::repo::AccountRepo::new(&conn).get_all().unwrap();
    assert_eq!(accounts.len(), 4);
    // seeding is idempotent once accounts exist
    db::seed_defaults(&conn).unwrap();
    assert_eq!(
        ledgerlite::repo::AccountRepo::new(&conn).get_all().unwrap().len(),
        4
    );
}
