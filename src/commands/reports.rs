// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::aggregate::{
    bucket_top_categories, category_totals, daily_net, outlier_threshold, totals_by_type,
};
use crate::config::Config;
use crate::dates::{current_month, format_month_display, month_span, next_month, prev_month};
use crate::models::EntryKind;
use crate::repo::TransactionRepo;
use crate::utils::{fmt_currency, maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("spend-by-category", sub)) => spend_by_category(conn, sub)?,
        Some(("daily-net", sub)) => daily_net_report(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Dashboard headline: income, expense, net and transaction count for one
/// month. Without `--month`, falls back to the last viewed month and
/// remembers the choice for next time; `--prev`/`--next` step from there.
fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut config = Config::load();
    let mut month = sub
        .get_one::<String>("month")
        .cloned()
        .or_else(|| config.last_month.clone())
        .unwrap_or_else(current_month);
    if sub.get_flag("prev") {
        month = prev_month(&month)?;
    } else if sub.get_flag("next") {
        month = next_month(&month)?;
    }

    let (start, end) = month_span(&month)?;
    let (income, expense) = totals_by_type(conn, Some(start), Some(end))?;
    let count = TransactionRepo::new(conn).get_count_by_date_range(start, end)?;
    let net = income - expense;

    if config.last_month.as_deref() != Some(month.as_str()) {
        config.last_month = Some(month.clone());
        config.save();
    }

    let data = vec![
        vec!["Income".to_string(), fmt_currency(income, "USD")],
        vec!["Expense".to_string(), fmt_currency(expense, "USD")],
        vec!["Net".to_string(), fmt_currency(net, "USD")],
        vec!["Transactions".to_string(), count.to_string()],
    ];
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!("{}", format_month_display(&month)?);
        println!("{}", pretty_table(&["Metric", "Value"], data));
    }
    Ok(())
}

fn spend_by_category(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = sub.get_one::<String>("month").unwrap();
    let kind: EntryKind = sub.get_one::<String>("type").unwrap().parse()?;

    let totals = category_totals(conn, month, kind)?;
    let buckets = bucket_top_categories(&totals, 8);

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &buckets)? {
        let rows = buckets
            .into_iter()
            .map(|(name, amount)| vec![name, format!("{:.2}", amount)])
            .collect();
        println!("{}", pretty_table(&["Category", "Total"], rows));
    }
    Ok(())
}

fn daily_net_report(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = sub.get_one::<String>("month").unwrap();
    let series = daily_net(conn, month)?;

    let nets: Vec<_> = series.values().copied().collect();
    let threshold = outlier_threshold(&nets).unwrap_or(0.0);

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &series)? {
        let rows = series
            .into_iter()
            .map(|(day, net)| {
                use rust_decimal::prelude::ToPrimitive;
                let flag = if net.abs().to_f64().unwrap_or(0.0) > threshold {
                    "*"
                } else {
                    ""
                };
                vec![day.to_string(), format!("{:.2}", net), flag.to_string()]
            })
            .collect();
        println!("{}", pretty_table(&["Date", "Net", "Outlier"], rows));
    }
    Ok(())
}
