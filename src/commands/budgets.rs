// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::aggregate::category_totals;
use crate::models::EntryKind;
use crate::repo::{BudgetRepo, CategoryRepo};
use crate::utils::{id_for_category, maybe_print_json, pretty_table};
use crate::validate::{validate_amount, validate_budget_amount, validate_month_string};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("report", sub)) => report(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = sub.get_one::<String>("month").unwrap();
    validate_month_string(month)?;
    let category = sub.get_one::<String>("category").unwrap();
    let kind: EntryKind = sub.get_one::<String>("type").unwrap().parse()?;
    let amount = validate_budget_amount(validate_amount(sub.get_one::<String>("amount").unwrap())?)?;

    let category_id = id_for_category(conn, category, kind)?;
    let budget = BudgetRepo::new(conn).set(category_id, month, amount)?;
    println!(
        "Budget for '{}' in {} set to {:.2}",
        category, budget.month, budget.amount_cap
    );
    Ok(())
}

fn category_names(conn: &Connection) -> Result<HashMap<i64, String>> {
    Ok(CategoryRepo::new(conn)
        .get_all()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let repo = BudgetRepo::new(conn);
    let budgets = match sub.get_one::<String>("month") {
        Some(month) => repo.get_by_month(month)?,
        None => repo.get_all()?,
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &budgets)? {
        let names = category_names(conn)?;
        let rows = budgets
            .into_iter()
            .map(|b| {
                vec![
                    b.id.to_string(),
                    b.month,
                    names.get(&b.category_id).cloned().unwrap_or_default(),
                    format!("{:.2}", b.amount_cap),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Month", "Category", "Cap"], rows));
    }
    Ok(())
}

/// Compare each budgeted category's cap against what was actually spent on
/// it that month.
fn report(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = sub.get_one::<String>("month").unwrap();
    validate_month_string(month)?;

    let spent_by_name = category_totals(conn, month, EntryKind::Expense)?;
    let names = category_names(conn)?;

    let mut data = Vec::new();
    for budget in BudgetRepo::new(conn).get_by_month(month)? {
        let name = names
            .get(&budget.category_id)
            .cloned()
            .unwrap_or_default();
        let spent = spent_by_name.get(&name).copied().unwrap_or(Decimal::ZERO);
        let remaining = budget.amount_cap - spent;
        data.push(vec![
            name,
            format!("{:.2}", budget.amount_cap),
            format!("{:.2}", spent),
            format!("{:.2}", remaining),
        ]);
    }
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!(
            "{}",
            pretty_table(&["Category", "Cap", "Spent", "Remaining"], data)
        );
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if BudgetRepo::new(conn).delete(id)? {
        println!("Removed budget {}", id);
    } else {
        println!("No budget with id {}", id);
    }
    Ok(())
}
