use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{LoginOutcome, Session};
use crate::db::log::wlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::User;
use crate::store::UserStore;
use crate::ui::messages::{success, warning};

/// Log in to the calendar tracker. The username is remembered across
/// invocations until `logout`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        let mut session = Session::restore(&pool)?;
        match session.login(&mut pool, username)? {
            LoginOutcome::RejectedBlank => {
                warning("Username cannot be empty.");
                return Ok(());
            }
            LoginOutcome::Accepted => {}
        }

        // First login for a username creates its record.
        let name = session.require_user()?.to_string();
        if pool.get_user(&name)?.is_none() {
            pool.put_user(&User::new(&name))?;
        }

        let _ = wlog(&pool.conn, "login", &name, "User logged in");
        success(format!("Logged in as {}.", name));
    }
    Ok(())
}
