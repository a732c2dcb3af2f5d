use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::EntryStore;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let pool = DbPool::open(&cfg.database)?;
        let entries = pool.load_entries()?;

        if entries.is_empty() {
            info("No entries found. Start tracking your hours now!");
            return Ok(());
        }

        let indexes: Vec<String> = (1..=entries.len()).map(|i| i.to_string()).collect();

        let columns = vec![
            Column::fitted("#", indexes.iter().map(String::as_str)),
            Column::fitted(
                "Employee Name",
                entries.iter().map(|e| e.employee_name.as_str()),
            ),
            Column::fitted("Date", entries.iter().map(|e| e.date.as_str())),
            Column::fitted("Hours", entries.iter().map(|e| e.hours.as_str())),
            Column::fitted("Task", entries.iter().map(|e| e.task.as_str())),
        ];

        let mut table = Table::new(columns);
        for (idx, e) in indexes.iter().zip(entries.iter()) {
            table.add_row(vec![
                idx.clone(),
                e.employee_name.clone(),
                e.date.clone(),
                e.hours.clone(),
                e.task.clone(),
            ]);
        }

        print!("{}", table.render(&cfg.separator_char));
    }
    Ok(())
}
