// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::Result;
use crate::models::{Account, AccountKind};

pub struct AccountRepo<'c> {
    conn: &'c Connection,
}

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: row.get(2)?,
        currency: row.get(3)?,
        created_at: row.get(4)?,
    })
}

const COLUMNS: &str = "id, name, type, currency, created_at";

impl<'c> AccountRepo<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, name: &str, kind: AccountKind, currency: &str) -> Result<Account> {
        self.conn.execute(
            "INSERT INTO accounts(name, type, currency) VALUES (?1, ?2, ?3)",
            params![name, kind, currency],
        )?;
        self.fetch(self.conn.last_insert_rowid())
    }

    pub fn get_all(&self) -> Result<Vec<Account>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {COLUMNS} FROM accounts ORDER BY name"))?;
        let rows = stmt.query_map([], account_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Account>> {
        let account = self
            .conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM accounts WHERE id=?1"),
                params![id],
                account_from_row,
            )
            .optional()?;
        Ok(account)
    }

    /// Persist the caller-mutated fields of a previously fetched account and
    /// return the refreshed row.
    pub fn update(&self, account: &Account) -> Result<Account> {
        self.conn.execute(
            "UPDATE accounts SET name=?1, type=?2, currency=?3 WHERE id=?4",
            params![account.name, account.kind, account.currency, account.id],
        )?;
        self.fetch(account.id)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM accounts WHERE id=?1", params![id])?;
        Ok(removed > 0)
    }

    fn fetch(&self, id: i64) -> Result<Account> {
        Ok(self.conn.query_row(
            &format!("SELECT {COLUMNS} FROM accounts WHERE id=?1"),
            params![id],
            account_from_row,
        )?)
    }
}
