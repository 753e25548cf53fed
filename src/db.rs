// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;

use crate::error::Result;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "LedgerLite", "ledgerlite"));

/// TEXT storage format for transaction dates. Fixed-width, so lexicographic
/// order in SQLite matches chronological order.
pub(crate) const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(crate::error::StoreError::DataDir)?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir)?;
    Ok(data_dir.join("ledgerlite.sqlite"))
}

/// Open the per-user store, creating schema and first-run seed data if needed.
pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn = Connection::open(&path)?;
    init_schema(&conn)?;
    seed_defaults(&conn)?;
    Ok(conn)
}

/// In-memory store with the full schema and no seed data. Test entry point.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Drop everything and rebuild the schema plus seed data.
pub fn reset(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS attachments;
        DROP TABLE IF EXISTS budgets;
        DROP TABLE IF EXISTS transactions;
        DROP TABLE IF EXISTS categories;
        DROP TABLE IF EXISTS accounts;
        "#,
    )?;
    init_schema(conn)?;
    seed_defaults(conn)?;
    Ok(())
}

// Foreign keys stay declarative only: deleting an account or category must
// not fail or cascade when dependent transactions exist. Warning the user
// about dependents is the presentation layer's job.
fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS accounts(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        currency TEXT NOT NULL DEFAULT 'USD',
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );

    CREATE TABLE IF NOT EXISTS categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        color_hex TEXT NOT NULL DEFAULT '#3498db',
        parent_id INTEGER REFERENCES categories(id),
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        account_id INTEGER NOT NULL REFERENCES accounts(id),
        category_id INTEGER NOT NULL REFERENCES categories(id),
        date TEXT NOT NULL,
        amount TEXT NOT NULL,
        type TEXT NOT NULL,
        note TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    CREATE INDEX IF NOT EXISTS idx_transactions_category_id ON transactions(category_id);
    CREATE INDEX IF NOT EXISTS idx_transactions_account_id ON transactions(account_id);

    CREATE TABLE IF NOT EXISTS budgets(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        category_id INTEGER NOT NULL REFERENCES categories(id),
        month TEXT NOT NULL,
        amount_cap TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_budgets_category_month ON budgets(category_id, month);

    CREATE TABLE IF NOT EXISTS attachments(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        transaction_id INTEGER NOT NULL REFERENCES transactions(id),
        file_path TEXT NOT NULL,
        added_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
    )?;
    Ok(())
}

/// First-run data: four stock accounts plus the standard category palette.
/// No-op when any account already exists.
pub fn seed_defaults(conn: &Connection) -> Result<()> {
    let accounts: i64 = conn.query_row("SELECT COUNT(*) FROM accounts", [], |r| r.get(0))?;
    if accounts > 0 {
        return Ok(());
    }

    const DEFAULT_ACCOUNTS: &[(&str, &str)] = &[
        ("Cash", "cash"),
        ("Checking Account", "bank"),
        ("Savings Account", "bank"),
        ("Credit Card", "card"),
    ];

    const EXPENSE_CATEGORIES: &[(&str, &str)] = &[
        ("Food & Dining", "#e74c3c"),
        ("Transportation", "#f39c12"),
        ("Shopping", "#9b59b6"),
        ("Entertainment", "#1abc9c"),
        ("Bills & Utilities", "#34495e"),
        ("Healthcare", "#e67e22"),
        ("Education", "#3498db"),
        ("Travel", "#2ecc71"),
        ("Other", "#95a5a6"),
    ];

    const INCOME_CATEGORIES: &[(&str, &str)] = &[
        ("Salary", "#27ae60"),
        ("Freelance", "#16a085"),
        ("Investment", "#2980b9"),
        ("Gift", "#8e44ad"),
        ("Other", "#7f8c8d"),
    ];

    for (name, kind) in DEFAULT_ACCOUNTS {
        conn.execute(
            "INSERT INTO accounts(name, type, currency) VALUES (?1, ?2, 'USD')",
            rusqlite::params![name, kind],
        )?;
    }
    for (name, color) in EXPENSE_CATEGORIES {
        conn.execute(
            "INSERT INTO categories(name, type, color_hex) VALUES (?1, 'expense', ?2)",
            rusqlite::params![name, color],
        )?;
    }
    for (name, color) in INCOME_CATEGORIES {
        conn.execute(
            "INSERT INTO categories(name, type, color_hex) VALUES (?1, 'income', ?2)",
            rusqlite::params![name, color],
        )?;
    }
    Ok(())
}
