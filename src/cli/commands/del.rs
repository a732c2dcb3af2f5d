use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLog;
use crate::db::log::wlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::store::EntryStore;
use crate::ui::messages::{info, success};

/// Delete one entry by its 1-based list position.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index } = cmd {
        let idx = index
            .checked_sub(1)
            .ok_or(AppError::InvalidIndex(*index))?;

        let prompt = format!(
            "Delete entry #{}? This action is irreversible.",
            index
        );
        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::open(&cfg.database)?;

        let mut entries = EntryLog::new(pool.load_entries()?);
        let removed = entries.delete_at(idx)?;
        pool.replace_entries(entries.entries())?;

        let _ = wlog(
            &pool.conn,
            "del",
            &removed.employee_name,
            &format!("Entry #{} deleted ({})", index, removed.date),
        );
        success(format!("Entry #{} deleted.", index));
    }
    Ok(())
}
