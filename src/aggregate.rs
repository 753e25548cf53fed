// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Turns raw transaction rows into the summaries the dashboard and charts
//! consume, keyed by a "YYYY-MM" month token. The per-day series is always
//! exposed raw; outlier handling is a display concern supported by the
//! helpers at the bottom.

use std::collections::{BTreeMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::dates::{month_span, month_to_range};
use crate::error::Result;
use crate::models::EntryKind;
use crate::repo::{CategoryRepo, TransactionRepo};

/// Per-category totals for one month and direction. Only categories of the
/// given kind are considered, only their transactions of that same kind are
/// summed, and zero-total categories are omitted.
pub fn category_totals(
    conn: &Connection,
    month: &str,
    kind: EntryKind,
) -> Result<BTreeMap<String, Decimal>> {
    let (start, end) = month_span(month)?;

    let categories = CategoryRepo::new(conn).get_by_type(kind)?;
    let wanted: HashSet<i64> = categories.iter().map(|c| c.id).collect();

    let mut by_id: BTreeMap<i64, Decimal> = BTreeMap::new();
    for tx in TransactionRepo::new(conn).get_by_date_range(start, end)? {
        if tx.kind == kind && wanted.contains(&tx.category_id) {
            *by_id.entry(tx.category_id).or_insert(Decimal::ZERO) += tx.amount;
        }
    }

    let mut totals = BTreeMap::new();
    for category in categories {
        if let Some(total) = by_id.get(&category.id) {
            if !total.is_zero() {
                totals.insert(category.name, *total);
            }
        }
    }
    Ok(totals)
}

/// Net amount (income - expense) for every calendar day of the month, in
/// date order. Days without transactions map to zero, so the series always
/// has exactly `days_in_month` entries.
pub fn daily_net(conn: &Connection, month: &str) -> Result<BTreeMap<NaiveDate, Decimal>> {
    let (first, last) = month_to_range(month)?;
    let (start, end) = month_span(month)?;

    let mut series: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut day = first;
    while day <= last {
        series.insert(day, Decimal::ZERO);
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    for tx in TransactionRepo::new(conn).get_by_date_range(start, end)? {
        let entry = series.entry(tx.date.date()).or_insert(Decimal::ZERO);
        match tx.kind {
            EntryKind::Income => *entry += tx.amount,
            EntryKind::Expense => *entry -= tx.amount,
        }
    }
    Ok(series)
}

/// (income, expense) totals over an optional window; zeros when nothing
/// matches.
pub fn totals_by_type(
    conn: &Connection,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Result<(Decimal, Decimal)> {
    TransactionRepo::new(conn).get_totals_by_type(start, end)
}

/// Re-bucket category totals for a bar chart with at most `max_bars` bars.
/// When the input exceeds that, the top `max_bars - 1` categories by amount
/// survive and the rest collapse into an "Other" bucket, which is kept only
/// when its sum is positive. Output is sorted by amount descending.
pub fn bucket_top_categories(
    totals: &BTreeMap<String, Decimal>,
    max_bars: usize,
) -> Vec<(String, Decimal)> {
    let mut sorted: Vec<(String, Decimal)> =
        totals.iter().map(|(n, a)| (n.clone(), *a)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    if sorted.len() > max_bars && max_bars > 0 {
        let rest: Decimal = sorted[max_bars - 1..].iter().map(|(_, a)| *a).sum();
        sorted.truncate(max_bars - 1);
        if rest > Decimal::ZERO {
            sorted.push(("Other".to_string(), rest));
        }
    }
    sorted
}

/// 95th percentile of the absolute values of a daily net series, linearly
/// interpolated between order statistics. A day whose |net| exceeds this is
/// worth flagging as an outlier; scale the display range to 1.2x this value.
/// Returns `None` for an empty series.
pub fn outlier_threshold(series: &[Decimal]) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    let mut magnitudes: Vec<f64> = series
        .iter()
        .map(|d| d.abs().to_f64().unwrap_or(0.0))
        .collect();
    magnitudes.sort_by(|a, b| a.total_cmp(b));

    let rank = 0.95 * (magnitudes.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;
    Some(magnitudes[lower] + (magnitudes[upper] - magnitudes[lower]) * frac)
}

/// Display range half-height for the daily net chart.
pub fn display_limit(threshold: f64) -> f64 {
    threshold * 1.2
}
