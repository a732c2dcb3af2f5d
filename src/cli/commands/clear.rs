use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLog;
use crate::db::log::wlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::EntryStore;
use crate::ui::messages::{info, success};

/// Delete all entries from the list tracker.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Clear) {
        if !ask_confirmation("Delete ALL entries? This action is irreversible.") {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::open(&cfg.database)?;

        let mut entries = EntryLog::new(pool.load_entries()?);
        let removed = entries.clear();
        pool.replace_entries(entries.entries())?;

        let _ = wlog(
            &pool.conn,
            "clear",
            "",
            &format!("{} entries removed", removed),
        );
        success("All entries cleared.");
    }
    Ok(())
}
