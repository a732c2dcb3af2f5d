//! Storage ports.
//!
//! The core logic never touches SQLite directly: it goes through these
//! traits, so calendar generation, aggregation and list CRUD stay testable
//! with plain data. The SQLite implementations live in `crate::db`.

use crate::errors::AppResult;
use crate::models::{Entry, User};

/// Simple key-value text store.
///
/// Holds the remembered username and the calendar month cursor.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&mut self, key: &str) -> AppResult<()>;
}

/// Ordered entry collection with replace-whole-collection semantics:
/// every mutation of the in-memory list is followed by a full re-save.
pub trait EntryStore {
    fn load_entries(&self) -> AppResult<Vec<Entry>>;
    fn replace_entries(&mut self, entries: &[Entry]) -> AppResult<()>;
}

/// Per-user record collection, keyed by username. `put_user` is an upsert.
pub trait UserStore {
    fn get_user(&self, username: &str) -> AppResult<Option<User>>;
    fn put_user(&mut self, user: &User) -> AppResult<()>;
}
