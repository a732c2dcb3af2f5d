use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{days_in_month, is_weekend_day};
use crate::core::navigator::MonthCursor;
use crate::core::session::{MONTH_CURSOR_KEY, Session};
use crate::db::log::wlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::store::{KeyValueStore, UserStore};
use crate::ui::messages::{success, warning};

/// Record hours for one day of the current calendar month.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { day, hours } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        let session = Session::restore(&pool)?;
        let username = session.require_user()?.to_string();

        let cursor = pool
            .get_item(MONTH_CURSOR_KEY)?
            .and_then(|s| MonthCursor::parse(&s))
            .unwrap_or_else(MonthCursor::current);

        if *day < 1 || *day > days_in_month(cursor.year, cursor.month) {
            return Err(AppError::InvalidDay(*day));
        }

        // Saturday and Sunday are never editable.
        if is_weekend_day(cursor.year, cursor.month, *day) {
            warning(format!(
                "Day {} of {} falls on a weekend and is locked.",
                day,
                cursor.label()
            ));
            return Ok(());
        }

        let value = match hours {
            Some(h) => h.clone(),
            None => cfg.default_hours.clone(),
        };

        let mut user = pool
            .get_user(&username)?
            .unwrap_or_else(|| User::new(&username));
        user.set_day(&cursor.key(), *day, &value);
        pool.put_user(&user)?;

        let _ = wlog(
            &pool.conn,
            "set",
            &username,
            &format!("{}-{:02} = {}", cursor.key(), day, value),
        );
        success(format!(
            "Recorded {} h on day {} of {}.",
            value,
            day,
            cursor.label()
        ));
    }
    Ok(())
}
