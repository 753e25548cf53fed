// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{Result, StoreError};
use crate::models::{Category, EntryKind};

pub struct CategoryRepo<'c> {
    conn: &'c Connection,
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: row.get(2)?,
        color_hex: row.get(3)?,
        parent_id: row.get(4)?,
        created_at: row.get(5)?,
    })
}

const COLUMNS: &str = "id, name, type, color_hex, parent_id, created_at";

impl<'c> CategoryRepo<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn create(
        &self,
        name: &str,
        kind: EntryKind,
        color_hex: &str,
        parent_id: Option<i64>,
    ) -> Result<Category> {
        self.conn.execute(
            "INSERT INTO categories(name, type, color_hex, parent_id) VALUES (?1, ?2, ?3, ?4)",
            params![name, kind, color_hex, parent_id],
        )?;
        self.fetch(self.conn.last_insert_rowid())
    }

    pub fn get_all(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {COLUMNS} FROM categories ORDER BY name"))?;
        let rows = stmt.query_map([], category_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn get_by_type(&self, kind: EntryKind) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM categories WHERE type=?1 ORDER BY name"
        ))?;
        let rows = stmt.query_map(params![kind], category_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Category>> {
        let category = self
            .conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM categories WHERE id=?1"),
                params![id],
                category_from_row,
            )
            .optional()?;
        Ok(category)
    }

    /// Persist caller-mutated fields. Parent reassignment walks the ancestor
    /// chain of the new parent and is rejected if it would close a cycle;
    /// nothing in the table itself prevents one.
    pub fn update(&self, category: &Category) -> Result<Category> {
        if let Some(parent) = category.parent_id {
            self.ensure_acyclic(category.id, parent)?;
        }
        self.conn.execute(
            "UPDATE categories SET name=?1, type=?2, color_hex=?3, parent_id=?4 WHERE id=?5",
            params![
                category.name,
                category.kind,
                category.color_hex,
                category.parent_id,
                category.id
            ],
        )?;
        self.fetch(category.id)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM categories WHERE id=?1", params![id])?;
        Ok(removed > 0)
    }

    fn ensure_acyclic(&self, child: i64, new_parent: i64) -> Result<()> {
        if child == new_parent {
            return Err(StoreError::CategoryCycle {
                child,
                parent: new_parent,
            });
        }
        // Visited set guards against walking a cycle already present in the
        // data (e.g. hand-edited store).
        let mut seen = HashSet::new();
        let mut current = Some(new_parent);
        while let Some(id) = current {
            if id == child {
                return Err(StoreError::CategoryCycle {
                    child,
                    parent: new_parent,
                });
            }
            if !seen.insert(id) {
                break;
            }
            current = self
                .conn
                .query_row(
                    "SELECT parent_id FROM categories WHERE id=?1",
                    params![id],
                    |r| r.get::<_, Option<i64>>(0),
                )
                .optional()?
                .flatten();
        }
        Ok(())
    }

    fn fetch(&self, id: i64) -> Result<Category> {
        Ok(self.conn.query_row(
            &format!("SELECT {COLUMNS} FROM categories WHERE id=?1"),
            params![id],
            category_from_row,
        )?)
    }
}
