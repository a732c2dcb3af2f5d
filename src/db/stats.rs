use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) SCHEMA VERSION
    //
    let version: i32 = pool
        .conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))?;
    println!("{}• Schema version:{} {}", CYAN, RESET, version);

    //
    // 3) ENTRY COUNT
    //
    let entries: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, entries, RESET
    );

    //
    // 4) USER COUNT
    //
    let users: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    println!("{}• Users:{} {}{}{}", CYAN, RESET, GREEN, users, RESET);

    //
    // 5) ENTRY DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM entries ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM entries ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    match (first_date, last_date) {
        (Some(first), Some(last)) => {
            println!(
                "{}• Entry dates:{} {} {}→{} {}",
                CYAN, RESET, first, GREY, RESET, last
            );
        }
        _ => {
            println!("{}• Entry dates:{} {}none{}", CYAN, RESET, GREY, RESET);
        }
    }

    println!();
    Ok(())
}
