// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::dates::month_span;
use crate::models::{EntryKind, Transaction};
use crate::repo::{AccountRepo, AttachmentRepo, CategoryRepo, TransactionRepo};
use crate::utils::{
    fmt_signed, id_for_account, id_for_category, maybe_print_json, midnight, parse_date,
    pretty_table,
};
use crate::validate::{validate_amount, validate_note};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("search", sub)) => search(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("attach", sub)) => attach(conn, sub)?,
        Some(("attachments", sub)) => attachments(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let account = sub.get_one::<String>("account").unwrap();
    let category = sub.get_one::<String>("category").unwrap();
    let kind: EntryKind = sub.get_one::<String>("type").unwrap().parse()?;
    let amount = validate_amount(sub.get_one::<String>("amount").unwrap())?;
    let note = sub.get_one::<String>("note").map(|s| s.as_str());
    if let Some(note) = note {
        validate_note(note)?;
    }

    let account_id = id_for_account(conn, account)?;
    let category_id = id_for_category(conn, category, kind)?;
    let currency = AccountRepo::new(conn)
        .get_by_id(account_id)?
        .map(|a| a.currency)
        .unwrap_or_else(|| "USD".to_string());
    let tx = TransactionRepo::new(conn).create(
        account_id,
        category_id,
        midnight(date),
        amount,
        kind,
        note,
    )?;
    println!(
        "Recorded {} on {} in '{}' (id {})",
        fmt_signed(tx.amount, tx.kind, &currency),
        tx.date.date(),
        category,
        tx.id
    );
    Ok(())
}

#[derive(Serialize)]
struct TransactionRow {
    id: i64,
    date: String,
    account: String,
    category: String,
    kind: String,
    amount: String,
    note: String,
}

fn name_maps(conn: &Connection) -> Result<(HashMap<i64, String>, HashMap<i64, String>)> {
    let accounts = AccountRepo::new(conn)
        .get_all()?
        .into_iter()
        .map(|a| (a.id, a.name))
        .collect();
    let categories = CategoryRepo::new(conn)
        .get_all()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    Ok((accounts, categories))
}

fn to_rows(conn: &Connection, txs: Vec<Transaction>) -> Result<Vec<TransactionRow>> {
    let (accounts, categories) = name_maps(conn)?;
    Ok(txs
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.date().to_string(),
            account: accounts.get(&t.account_id).cloned().unwrap_or_default(),
            category: categories.get(&t.category_id).cloned().unwrap_or_default(),
            kind: t.kind.to_string(),
            amount: format!("{:.2}", t.amount),
            note: t.note.unwrap_or_default(),
        })
        .collect())
}

fn print_rows(sub: &clap::ArgMatches, rows: Vec<TransactionRow>) -> Result<()> {
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let table_rows = rows
            .into_iter()
            .map(|r| vec![r.id.to_string(), r.date, r.account, r.category, r.kind, r.amount, r.note])
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Account", "Category", "Type", "Amount", "Note"],
                table_rows,
            )
        );
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let repo = TransactionRepo::new(conn);
    let txs = match sub.get_one::<String>("month") {
        Some(month) => {
            let (start, end) = month_span(month)?;
            repo.get_by_date_range(start, end)?
        }
        None => repo.get_all(
            sub.get_one::<usize>("limit").copied(),
            sub.get_one::<usize>("offset").copied(),
        )?,
    };
    print_rows(sub, to_rows(conn, txs)?)
}

fn search(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let term = sub.get_one::<String>("term").unwrap();
    let txs = TransactionRepo::new(conn).search(term)?;
    print_rows(sub, to_rows(conn, txs)?)
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if TransactionRepo::new(conn).delete(id)? {
        println!("Removed transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

fn attach(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let file = sub.get_one::<String>("file").unwrap();
    let attachment = AttachmentRepo::new(conn).create(id, file)?;
    println!(
        "Attached '{}' to transaction {} (attachment {})",
        attachment.file_path, attachment.transaction_id, attachment.id
    );
    Ok(())
}

fn attachments(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let rows = AttachmentRepo::new(conn)
        .get_by_transaction(id)?
        .into_iter()
        .map(|a| vec![a.id.to_string(), a.file_path, a.added_at.to_string()])
        .collect();
    println!("{}", pretty_table(&["Id", "File", "Added"], rows));
    Ok(())
}
