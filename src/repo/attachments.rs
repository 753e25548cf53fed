// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::Result;
use crate::models::Attachment;

pub struct AttachmentRepo<'c> {
    conn: &'c Connection,
}

fn attachment_from_row(row: &Row<'_>) -> rusqlite::Result<Attachment> {
    Ok(Attachment {
        id: row.get(0)?,
        transaction_id: row.get(1)?,
        file_path: row.get(2)?,
        added_at: row.get(3)?,
    })
}

const COLUMNS: &str = "id, transaction_id, file_path, added_at";

impl<'c> AttachmentRepo<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, transaction_id: i64, file_path: &str) -> Result<Attachment> {
        self.conn.execute(
            "INSERT INTO attachments(transaction_id, file_path) VALUES (?1, ?2)",
            params![transaction_id, file_path],
        )?;
        self.fetch(self.conn.last_insert_rowid())
    }

    pub fn get_all(&self) -> Result<Vec<Attachment>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {COLUMNS} FROM attachments ORDER BY id"))?;
        let rows = stmt.query_map([], attachment_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Attachment>> {
        let attachment = self
            .conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM attachments WHERE id=?1"),
                params![id],
                attachment_from_row,
            )
            .optional()?;
        Ok(attachment)
    }

    pub fn get_by_transaction(&self, transaction_id: i64) -> Result<Vec<Attachment>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COLUMNS} FROM attachments WHERE transaction_id=?1 ORDER BY id"
        ))?;
        let rows = stmt.query_map(params![transaction_id], attachment_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn update(&self, attachment: &Attachment) -> Result<Attachment> {
        self.conn.execute(
            "UPDATE attachments SET transaction_id=?1, file_path=?2 WHERE id=?3",
            params![attachment.transaction_id, attachment.file_path, attachment.id],
        )?;
        self.fetch(attachment.id)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM attachments WHERE id=?1", params![id])?;
        Ok(removed > 0)
    }

    fn fetch(&self, id: i64) -> Result<Attachment> {
        Ok(self.conn.query_row(
            &format!("SELECT {COLUMNS} FROM attachments WHERE id=?1"),
            params![id],
            attachment_from_row,
        )?)
    }
}
