//! Session state: LOGGED_OUT / LOGGED_IN plus the remembered identity.
//!
//! The remembered username lives in the key-value store, so any later
//! invocation restores the session automatically.

use crate::errors::{AppError, AppResult};
use crate::store::KeyValueStore;

pub const REMEMBERED_USER_KEY: &str = "remembered_user";
pub const MONTH_CURSOR_KEY: &str = "month_cursor";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    /// Blank or whitespace-only username: the transition is a no-op.
    RejectedBlank,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    username: Option<String>,
}

impl Session {
    /// Restore the session from the remembered identity, if any.
    pub fn restore<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<Self> {
        let username = store.get_item(REMEMBERED_USER_KEY)?;
        Ok(Self { username })
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    /// The logged-in username, or `NotLoggedIn`.
    pub fn require_user(&self) -> AppResult<&str> {
        self.username.as_deref().ok_or(AppError::NotLoggedIn)
    }

    /// Transition to LOGGED_IN and persist the remembered identity.
    ///
    /// A blank username leaves the session untouched.
    pub fn login<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        username: &str,
    ) -> AppResult<LoginOutcome> {
        let name = username.trim();
        if name.is_empty() {
            return Ok(LoginOutcome::RejectedBlank);
        }

        store.set_item(REMEMBERED_USER_KEY, name)?;
        self.username = Some(name.to_string());
        Ok(LoginOutcome::Accepted)
    }

    /// Transition to LOGGED_OUT and forget the remembered identity.
    pub fn logout<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> AppResult<()> {
        store.remove_item(REMEMBERED_USER_KEY)?;
        self.username = None;
        Ok(())
    }
}
