// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => {
            let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
            let out = sub.get_one::<String>("out").unwrap();
            export_transactions(conn, Path::new(out), &fmt)
        }
        _ => Ok(()),
    }
}

type ExportRow = (String, String, String, String, String, Option<String>);

fn export_rows(conn: &Connection) -> Result<Vec<ExportRow>> {
    let mut stmt = conn.prepare(
        "SELECT substr(t.date,1,10), a.name, c.name, t.type, t.amount, t.note
         FROM transactions t
         LEFT JOIN accounts a ON t.account_id=a.id
         LEFT JOIN categories c ON t.category_id=c.id
         ORDER BY t.date, t.id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, Option<String>>(5)?,
        ))
    })?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

pub fn export_transactions(conn: &Connection, out: &Path, fmt: &str) -> Result<()> {
    let rows = export_rows(conn)?;
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "account", "category", "type", "amount", "note"])?;
            for (date, account, category, kind, amount, note) in rows {
                wtr.write_record([
                    date,
                    account,
                    category,
                    kind,
                    amount,
                    note.unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = rows
                .into_iter()
                .map(|(date, account, category, kind, amount, note)| {
                    json!({
                        "date": date, "account": account, "category": category,
                        "type": kind, "amount": amount, "note": note
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => {
            eprintln!("Unknown format: {} (use csv|json)", other);
            return Ok(());
        }
    }
    println!("Exported transactions to {}", out.display());
    Ok(())
}
