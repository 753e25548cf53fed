// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One repository per entity family. Each borrows a live connection, holds no
//! other state, and exposes the common contract: `create`, `get_all`,
//! `get_by_id`, `update`, `delete`, plus entity-specific reads. Point lookups
//! return `Option` and deletes return `bool`; only storage failures error.

pub mod accounts;
pub mod attachments;
pub mod budgets;
pub mod categories;
pub mod transactions;

pub use accounts::AccountRepo;
pub use attachments::AttachmentRepo;
pub use budgets::BudgetRepo;
pub use categories::CategoryRepo;
pub use transactions::TransactionRepo;

use rusqlite::Row;
use rust_decimal::Decimal;

/// Amounts are persisted as TEXT decimal strings so no precision is lost.
pub(crate) fn decimal_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let raw: String = row.get(idx)?;
    raw.parse::<Decimal>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
