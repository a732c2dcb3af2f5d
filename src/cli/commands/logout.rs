use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::db::log::wlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Logout) {
        let mut pool = DbPool::open(&cfg.database)?;

        let mut session = Session::restore(&pool)?;
        if !session.is_logged_in() {
            info("No user logged in.");
            return Ok(());
        }

        let name = session.require_user()?.to_string();
        session.logout(&mut pool)?;

        let _ = wlog(&pool.conn, "logout", &name, "User logged out");
        info("Logged out.");
    }
    Ok(())
}
