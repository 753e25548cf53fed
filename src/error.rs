// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Structured validation failures. These are detected before any store
/// mutation and reported to the caller as values, never panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),
    #[error("{0} must be 100 characters or less")]
    TooLong(&'static str),
    #[error("name contains invalid characters")]
    ForbiddenChars,
    #[error("invalid amount format")]
    BadAmount,
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("invalid hex color format, use #RRGGBB")]
    BadColor,
    #[error("note must be 1000 characters or less")]
    NoteTooLong,
    #[error("invalid month format, use YYYY-MM")]
    BadMonth,
    #[error("month must be between 01 and 12")]
    MonthOutOfRange,
    #[error("year must be between 1900 and 2100")]
    YearOutOfRange,
    #[error("unknown kind '{0}', expected 'expense' or 'income'")]
    BadEntryKind(String),
    #[error("unknown account type '{0}', expected 'cash', 'bank' or 'card'")]
    BadAccountKind(String),
}

/// Failures surfaced by the store and repositories. "Not found" is never an
/// error here; point lookups return `Option` and deletes return `bool`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("could not determine platform-specific data dir")]
    DataDir,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("category {child} cannot take {parent} as parent: would create a cycle")]
    CategoryCycle { child: i64, parent: i64 },
}

pub type Result<T> = std::result::Result<T, StoreError>;
