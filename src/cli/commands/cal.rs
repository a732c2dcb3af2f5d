use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{monthly_total, weekly_totals};
use crate::core::calendar::{MonthGrid, is_weekend_column, month_grid};
use crate::core::navigator::MonthCursor;
use crate::core::session::{MONTH_CURSOR_KEY, Session};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{DayHours, User};
use crate::store::{KeyValueStore, UserStore};
use crate::ui::messages::warning;
use crate::utils::colors::{RESET, color_for_total, colorize_cell};
use crate::utils::date::WEEKDAY_HEADERS;
use crate::utils::format_hours;
use crate::utils::formatting::pad_left;

const CELL_WIDTH: usize = 8;

/// Show the hours calendar for the logged-in user's current month.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cal { month, next, prev } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        let session = Session::restore(&pool)?;
        let Some(username) = session.username().map(str::to_string) else {
            warning("No user logged in. Use `workhours login <username>` first.");
            return Ok(());
        };

        //
        // 1. Resolve the month cursor: --month jumps, --next/--prev step,
        //    otherwise reuse the remembered cursor (or the current month)
        //
        let mut cursor = match month {
            Some(m) => {
                MonthCursor::parse(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?
            }
            None => pool
                .get_item(MONTH_CURSOR_KEY)?
                .and_then(|s| MonthCursor::parse(&s))
                .unwrap_or_else(MonthCursor::current),
        };
        if *next {
            cursor.next();
        }
        if *prev {
            cursor.prev();
        }
        pool.set_item(MONTH_CURSOR_KEY, &cursor.key())?;

        //
        // 2. Re-fetch this month's hours for the user
        //
        let user = pool
            .get_user(&username)?
            .unwrap_or_else(|| User::new(&username));
        let hours = user.month_hours(&cursor.key());

        //
        // 3. Render
        //
        print_calendar(&cursor, &username, &hours);
    }
    Ok(())
}

fn cell_text(day: u32, hours: &DayHours) -> String {
    match hours.get(&day) {
        Some(h) if !h.trim().is_empty() => format!("{}={}", day, h.trim()),
        _ => day.to_string(),
    }
}

fn render_week_row(week: &[Option<u32>; 7], hours: &DayHours, total: f64) -> String {
    let mut line = String::new();
    for (col, cell) in week.iter().enumerate() {
        let text = match cell {
            None => String::new(),
            Some(day) => cell_text(*day, hours),
        };
        line.push_str(&colorize_cell(
            &pad_left(&text, CELL_WIDTH),
            is_weekend_column(col),
        ));
    }
    line.push_str(&format!(
        " |{}{}{}",
        color_for_total(total),
        pad_left(&format_hours(total), 7),
        RESET
    ));
    line
}

fn print_calendar(cursor: &MonthCursor, username: &str, hours: &DayHours) {
    let grid: MonthGrid = month_grid(cursor.year, cursor.month);

    println!();
    println!("{} · {}", cursor.label(), username);
    println!();

    let mut header = String::new();
    for (col, name) in WEEKDAY_HEADERS.iter().enumerate() {
        header.push_str(&colorize_cell(
            &pad_left(name, CELL_WIDTH),
            is_weekend_column(col),
        ));
    }
    header.push_str(" | Weekly");
    println!("{}", header);

    let totals = weekly_totals(&grid, hours);
    for (week, total) in grid.weeks.iter().zip(totals.iter()) {
        println!("{}", render_week_row(week, hours, *total));
    }

    let month_sum = monthly_total(cursor.year, cursor.month, hours);
    println!();
    println!(
        "Monthly total: {} h (weekends excluded)",
        format_hours(month_sum)
    );
}
