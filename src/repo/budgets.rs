// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::Budget;
use crate::repo::decimal_column;

pub struct BudgetRepo<'c> {
    conn: &'c Connection,
}

fn budget_from_row(row: &Row<'_>) -> rusqlite::Result<Budget> {
    Ok(Budget {
        id: row.get(0)?,
        category_id: row.get(1)?,
        month: row.get(2)?,
        amount_cap: decimal_column(row, 3)?,
        created_at: row.get(4)?,
    })
}

const COLUMNS: &str = "id, category_id, month, amount_cap, created_at";

impl<'c> BudgetRepo<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, category_id: i64, month: &str, amount_cap: Decimal) -> Result<Budget> {
        self.conn.execute(
            "INSERT INTO budgets(category_id, month, amount_cap) VALUES (?1, ?2, ?3)",
            params![category_id, month, amount_cap.round_dp(2).to_string()],
        )?;
        self.fetch(self.conn.last_insert_rowid())
    }

    pub fn get_all(&self) -> Result<Vec<Budget>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM budgets ORDER BY month DESC, category_id"
        ))?;
        let rows = stmt.query_map([], budget_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Budget>> {
        let budget = self
            .conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM budgets WHERE id=?1"),
                params![id],
                budget_from_row,
            )
            .optional()?;
        Ok(budget)
    }

    pub fn get_by_month(&self, month: &str) -> Result<Vec<Budget>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM budgets WHERE month=?1 ORDER BY category_id"
        ))?;
        let rows = stmt.query_map(params![month], budget_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// The at-most-one budget for a (category, month) pair. Uniqueness is by
    /// convention, backed by an index, not a constraint; if duplicates exist
    /// the first wins.
    pub fn get_by_category_and_month(&self, category_id: i64, month: &str) -> Result<Option<Budget>> {
        let budget = self
            .conn
            .query_row(
                &format!(
                    "SELECT {COLUMNS} FROM budgets WHERE category_id=?1 AND month=?2
                     ORDER BY id LIMIT 1"
                ),
                params![category_id, month],
                budget_from_row,
            )
            .optional()?;
        Ok(budget)
    }

    /// Upsert the cap for a (category, month) pair, preserving the
    /// one-budget-per-pair convention.
    pub fn set(&self, category_id: i64, month: &str, amount_cap: Decimal) -> Result<Budget> {
        match self.get_by_category_and_month(category_id, month)? {
            Some(mut existing) => {
                existing.amount_cap = amount_cap;
                self.update(&existing)
            }
            None => self.create(category_id, month, amount_cap),
        }
    }

    pub fn update(&self, budget: &Budget) -> Result<Budget> {
        self.conn.execute(
            "UPDATE budgets SET category_id=?1, month=?2, amount_cap=?3 WHERE id=?4",
            params![
                budget.category_id,
                budget.month,
                budget.amount_cap.round_dp(2).to_string(),
                budget.id
            ],
        )?;
        self.fetch(budget.id)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM budgets WHERE id=?1", params![id])?;
        Ok(removed > 0)
    }

    fn fetch(&self, id: i64) -> Result<Budget> {
        Ok(self.conn.query_row(
            &format!("SELECT {COLUMNS} FROM budgets WHERE id=?1"),
            params![id],
            budget_from_row,
        )?)
    }
}
