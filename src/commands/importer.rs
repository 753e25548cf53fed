// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::{hash_map::Entry, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use rusqlite::{params, Connection};

use crate::db::DATETIME_FMT;
use crate::models::EntryKind;
use crate::utils::{midnight, parse_date};
use crate::validate::{validate_amount, validate_note};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => {
            let path = sub.get_one::<String>("path").unwrap().trim();
            let imported = import_transactions_csv(conn, Path::new(path))?;
            println!("Imported {} transactions from {}", imported, path);
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Load transactions from a CSV with header
/// `date,account,category,type,amount,note`. Accounts and categories are
/// resolved by name; the whole file lands in one SQLite transaction so a bad
/// row aborts cleanly.
pub fn import_transactions_csv(conn: &mut Connection, path: &Path) -> Result<usize> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path.display()))?;

    let tx = conn.transaction()?;
    let mut account_cache: HashMap<String, i64> = HashMap::new();
    let mut category_cache: HashMap<(String, EntryKind), i64> = HashMap::new();
    let mut imported = 0usize;

    for result in rdr.records() {
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim();
        let account = rec.get(1).context("account missing")?.trim().to_string();
        let category = rec.get(2).context("category missing")?.trim().to_string();
        let kind: EntryKind = rec.get(3).context("type missing")?.trim().parse()?;
        let amount_raw = rec.get(4).context("amount missing")?.trim();
        let note = rec
            .get(5)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        let date = parse_date(date_raw)
            .with_context(|| format!("Invalid transaction date '{}'", date_raw))?;
        let amount = validate_amount(amount_raw)
            .with_context(|| format!("Invalid amount '{}' for {}", amount_raw, account))?;
        if let Some(note) = note.as_deref() {
            validate_note(note)?;
        }

        let account_id = match account_cache.entry(account.clone()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id: i64 = tx
                    .query_row(
                        "SELECT id FROM accounts WHERE name=?1",
                        params![&account],
                        |r| r.get(0),
                    )
                    .with_context(|| format!("Account '{}' not found", account))?;
                *entry.insert(id)
            }
        };
        let category_id = match category_cache.entry((category.clone(), kind)) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let id: i64 = tx
                    .query_row(
                        "SELECT id FROM categories WHERE name=?1 AND type=?2",
                        params![&category, kind],
                        |r| r.get(0),
                    )
                    .with_context(|| format!("{} category '{}' not found", kind, category))?;
                *entry.insert(id)
            }
        };

        tx.execute(
            "INSERT INTO transactions(account_id, category_id, date, amount, type, note)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                account_id,
                category_id,
                midnight(date).format(DATETIME_FMT).to_string(),
                amount.round_dp(2).to_string(),
                kind,
                note.as_deref()
            ],
        )?;
        imported += 1;
    }
    tx.commit()?;
    Ok(imported)
}
