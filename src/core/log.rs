use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for an operation name in the log listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" | "clear" => Colour::Red,
        "set" => Colour::Yellow,
        "login" | "logout" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Print the internal operation log, oldest first.
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i32 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            Ok((id, date, operation, op_target, message))
        })?;

        let mut lines = Vec::new();
        for r in rows {
            let (id, date, operation, op_target, message) = r?;
            let colored_op = color_for_operation(&operation).paint(op_target).to_string();
            lines.push((id, date, colored_op, message));
        }

        if lines.is_empty() {
            println!("Log is empty.");
            return Ok(());
        }

        let op_width = lines
            .iter()
            .map(|(_, _, op, _)| strip_ansi(op).len())
            .max()
            .unwrap_or(0);

        for (id, date, op, message) in &lines {
            let pad = op_width.saturating_sub(strip_ansi(op).len());
            println!("{:>4}  {}  {}{}  {}", id, date, op, " ".repeat(pad), message);
        }

        Ok(())
    }
}
