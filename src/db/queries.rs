//! Entry and user collections over SQLite.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, HoursByMonth, User};
use crate::store::{EntryStore, UserStore};
use rusqlite::{OptionalExtension, Row, params};

fn map_entry(row: &Row) -> rusqlite::Result<Entry> {
    Ok(Entry {
        employee_name: row.get("employee_name")?,
        date: row.get("date")?,
        hours: row.get("hours")?,
        task: row.get("task")?,
    })
}

impl EntryStore for DbPool {
    fn load_entries(&self) -> AppResult<Vec<Entry>> {
        let mut stmt = self.conn.prepare(
            "SELECT employee_name, date, hours, task FROM entries
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], map_entry)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Replace-whole-collection: the persisted list always mirrors the last
    /// in-memory mutation, ids are reassigned from scratch.
    fn replace_entries(&mut self, entries: &[Entry]) -> AppResult<()> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM entries", [])?;
        for e in entries {
            tx.execute(
                "INSERT INTO entries (employee_name, date, hours, task)
                 VALUES (?1, ?2, ?3, ?4)",
                params![e.employee_name, e.date, e.hours, e.task],
            )?;
        }

        tx.commit()?;
        Ok(())
    }
}

impl UserStore for DbPool {
    fn get_user(&self, username: &str) -> AppResult<Option<User>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT hours FROM users WHERE username = ?1",
                [username],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            None => Ok(None),
            Some(json) => {
                let hours: HoursByMonth = serde_json::from_str(&json).map_err(|e| {
                    AppError::MalformedRecord(format!("user '{}': {}", username, e))
                })?;
                Ok(Some(User {
                    username: username.to_string(),
                    hours,
                }))
            }
        }
    }

    fn put_user(&mut self, user: &User) -> AppResult<()> {
        let json = serde_json::to_string(&user.hours)?;
        self.conn.execute(
            "INSERT INTO users (username, hours) VALUES (?1, ?2)
             ON CONFLICT(username) DO UPDATE SET hours = excluded.hours",
            params![user.username, json],
        )?;
        Ok(())
    }
}
