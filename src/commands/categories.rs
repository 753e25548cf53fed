// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use rusqlite::Connection;

use crate::models::EntryKind;
use crate::repo::CategoryRepo;
use crate::utils::{maybe_print_json, pretty_table};
use crate::validate::{validate_category_name, validate_color_hex};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let repo = CategoryRepo::new(conn);
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let kind: EntryKind = sub.get_one::<String>("type").unwrap().parse()?;
            let color = sub.get_one::<String>("color").unwrap();
            let parent = sub.get_one::<i64>("parent").copied();
            validate_category_name(name)?;
            validate_color_hex(color)?;
            let category = repo.create(name.trim(), kind, color, parent)?;
            println!(
                "Added {} category '{}' with id {}",
                category.kind, category.name, category.id
            );
        }
        Some(("list", sub)) => {
            let categories = match sub.get_one::<String>("type") {
                Some(kind) => repo.get_by_type(kind.parse::<EntryKind>()?)?,
                None => repo.get_all()?,
            };
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &categories)? {
                let rows = categories
                    .into_iter()
                    .map(|c| {
                        vec![
                            c.id.to_string(),
                            c.name,
                            c.kind.to_string(),
                            c.color_hex,
                            c.parent_id.map(|p| p.to_string()).unwrap_or_default(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Name", "Type", "Color", "Parent"], rows)
                );
            }
        }
        Some(("set-parent", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let parent = sub.get_one::<i64>("parent").copied();
            let mut category = repo
                .get_by_id(id)?
                .ok_or_else(|| anyhow!("Category {} not found", id))?;
            category.parent_id = parent;
            let category = repo.update(&category)?;
            match category.parent_id {
                Some(p) => println!("Category {} now has parent {}", category.id, p),
                None => println!("Category {} no longer has a parent", category.id),
            }
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            if repo.delete(id)? {
                println!("Removed category {}", id);
            } else {
                println!("No category with id {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}
