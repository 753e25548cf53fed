// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDateTime, NaiveTime};
use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;

use crate::db::DATETIME_FMT;
use crate::error::Result;
use crate::models::{EntryKind, Transaction};
use crate::repo::decimal_column;

pub struct TransactionRepo<'c> {
    conn: &'c Connection,
}

fn tx_from_row(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: row.get(0)?,
        account_id: row.get(1)?,
        category_id: row.get(2)?,
        date: row.get(3)?,
        amount: decimal_column(row, 4)?,
        kind: row.get(5)?,
        note: row.get(6)?,
        created_at: row.get(7)?,
    })
}

const COLUMNS: &str = "id, account_id, category_id, date, amount, type, note, created_at";

fn to_db_datetime(dt: NaiveDateTime) -> String {
    dt.format(DATETIME_FMT).to_string()
}

impl<'c> TransactionRepo<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Persist a new transaction. The time portion of `date` is normalized
    /// to midnight and the amount rounded to two decimal places before the
    /// row is written.
    pub fn create(
        &self,
        account_id: i64,
        category_id: i64,
        date: NaiveDateTime,
        amount: Decimal,
        kind: EntryKind,
        note: Option<&str>,
    ) -> Result<Transaction> {
        let midnight = NaiveDateTime::new(date.date(), NaiveTime::MIN);
        self.conn.execute(
            "INSERT INTO transactions(account_id, category_id, date, amount, type, note)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                account_id,
                category_id,
                to_db_datetime(midnight),
                amount.round_dp(2).to_string(),
                kind,
                note
            ],
        )?;
        self.fetch(self.conn.last_insert_rowid())
    }

    /// All transactions, newest first. `limit`/`offset` page through large
    /// ledgers for the transaction list view.
    pub fn get_all(&self, limit: Option<usize>, offset: Option<usize>) -> Result<Vec<Transaction>> {
        let mut sql = format!("SELECT {COLUMNS} FROM transactions ORDER BY date DESC, id DESC");
        if limit.is_some() || offset.is_some() {
            // SQLite needs a LIMIT clause to accept OFFSET; -1 means unbounded.
            let limit = limit.map(|n| n as i64).unwrap_or(-1);
            sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset.unwrap_or(0)));
        }
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], tx_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Transaction>> {
        let tx = self
            .conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM transactions WHERE id=?1"),
                params![id],
                tx_from_row,
            )
            .optional()?;
        Ok(tx)
    }

    /// Transactions with `start <= date <= end`, newest first. Both bounds
    /// inclusive; pass an end-of-day `end` to cover that whole calendar day.
    pub fn get_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM transactions WHERE date >= ?1 AND date <= ?2
             ORDER BY date DESC, id DESC"
        ))?;
        let rows = stmt.query_map(
            params![to_db_datetime(start), to_db_datetime(end)],
            tx_from_row,
        )?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn get_by_category(&self, category_id: i64) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM transactions WHERE category_id=?1 ORDER BY date DESC, id DESC"
        ))?;
        let rows = stmt.query_map(params![category_id], tx_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Case-insensitive substring match against the note field. Rows with no
    /// note never match.
    pub fn search(&self, term: &str) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM transactions WHERE note LIKE '%' || ?1 || '%'
             ORDER BY date DESC, id DESC"
        ))?;
        let rows = stmt.query_map(params![term], tx_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Summed (income, expense) amounts over an optional date window. An
    /// absent bound leaves that side open; no matching rows yields zeros.
    pub fn get_totals_by_type(
        &self,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<(Decimal, Decimal)> {
        let mut sql = String::from("SELECT type, amount FROM transactions WHERE 1=1");
        let mut bounds: Vec<String> = Vec::new();
        if let Some(start) = start {
            sql.push_str(" AND date >= ?");
            bounds.push(to_db_datetime(start));
        }
        if let Some(end) = end {
            sql.push_str(" AND date <= ?");
            bounds.push(to_db_datetime(end));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(rusqlite::params_from_iter(bounds.iter()))?;
        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;
        while let Some(row) = rows.next()? {
            let kind: EntryKind = row.get(0)?;
            let amount = decimal_column(row, 1)?;
            match kind {
                EntryKind::Income => income += amount,
                EntryKind::Expense => expense += amount,
            }
        }
        Ok((income, expense))
    }

    pub fn get_count_by_date_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM transactions WHERE date >= ?1 AND date <= ?2",
            params![to_db_datetime(start), to_db_datetime(end)],
            |r| r.get(0),
        )?;
        Ok(count)
    }

    pub fn update(&self, tx: &Transaction) -> Result<Transaction> {
        let midnight = NaiveDateTime::new(tx.date.date(), NaiveTime::MIN);
        self.conn.execute(
            "UPDATE transactions SET account_id=?1, category_id=?2, date=?3, amount=?4,
             type=?5, note=?6 WHERE id=?7",
            params![
                tx.account_id,
                tx.category_id,
                to_db_datetime(midnight),
                tx.amount.round_dp(2).to_string(),
                tx.kind,
                tx.note,
                tx.id
            ],
        )?;
        self.fetch(tx.id)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        Ok(removed > 0)
    }

    fn fetch(&self, id: i64) -> Result<Transaction> {
        Ok(self.conn.query_row(
            &format!("SELECT {COLUMNS} FROM transactions WHERE id=?1"),
            params![id],
            tx_from_row,
        )?)
    }
}
