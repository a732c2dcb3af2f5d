use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLog;
use crate::db::log::wlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::store::EntryStore;
use crate::ui::messages::{success, warning};

/// Add a time entry to the list tracker.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        date,
        hours,
        task,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.database)?;

        //
        // 1. Load the current list
        //
        let mut entries = EntryLog::new(pool.load_entries()?);

        //
        // 2. Append; the only validation rule is non-emptiness of all fields
        //
        match entries.add(Entry::new(name, date, hours, task)) {
            Err(AppError::EmptyField(_)) => {
                warning("All fields are required.");
                return Ok(());
            }
            other => other?,
        }

        //
        // 3. Re-save the whole collection
        //
        pool.replace_entries(entries.entries())?;

        let _ = wlog(
            &pool.conn,
            "add",
            name,
            &format!("Entry added for {}", date),
        );
        success("Entry added successfully.");
    }
    Ok(())
}
