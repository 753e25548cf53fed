// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::models::AccountKind;
use crate::repo::AccountRepo;
use crate::utils::{maybe_print_json, pretty_table};
use crate::validate::validate_account_name;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let repo = AccountRepo::new(conn);
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let kind: AccountKind = sub.get_one::<String>("type").unwrap().parse()?;
            let currency = sub.get_one::<String>("currency").unwrap().to_uppercase();
            validate_account_name(name)?;
            let account = repo.create(name.trim(), kind, &currency)?;
            println!(
                "Added account '{}' ({}, {}) with id {}",
                account.name, account.kind, account.currency, account.id
            );
        }
        Some(("list", sub)) => {
            let accounts = repo.get_all()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &accounts)? {
                let rows = accounts
                    .into_iter()
                    .map(|a| {
                        vec![
                            a.id.to_string(),
                            a.name,
                            a.kind.to_string(),
                            a.currency,
                            a.created_at.to_string(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Name", "Type", "Currency", "Created"], rows)
                );
            }
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            if repo.delete(id)? {
                println!("Removed account {}", id);
            } else {
                println!("No account with id {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}
