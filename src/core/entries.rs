//! Entry list mutation.
//!
//! Pure list logic: the CLI handlers load the list through the entry store
//! port, mutate it here, and re-save the whole collection afterwards.

use crate::errors::{AppError, AppResult};
use crate::models::Entry;

/// The in-memory ordered entry list.
pub struct EntryLog {
    entries: Vec<Entry>,
}

/// First empty field of an entry, in form order, if any.
fn first_empty_field(entry: &Entry) -> Option<&'static str> {
    if entry.employee_name.is_empty() {
        Some("employee name")
    } else if entry.date.is_empty() {
        Some("date")
    } else if entry.hours.is_empty() {
        Some("hours")
    } else if entry.task.is_empty() {
        Some("task")
    } else {
        None
    }
}

impl EntryLog {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry. All four fields must be non-empty; duplicates are
    /// allowed.
    pub fn add(&mut self, entry: Entry) -> AppResult<()> {
        if let Some(field) = first_empty_field(&entry) {
            return Err(AppError::EmptyField(field));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Empty the list unconditionally, returning how many entries it held.
    pub fn clear(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    /// Remove the entry at the 0-based position, shifting later entries.
    pub fn delete_at(&mut self, index: usize) -> AppResult<Entry> {
        if index >= self.entries.len() {
            return Err(AppError::InvalidIndex(index));
        }
        Ok(self.entries.remove(index))
    }
}
