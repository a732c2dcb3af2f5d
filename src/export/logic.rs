use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::json::write_json;
use crate::export::notify_export_success;
use crate::store::EntryStore;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the entry list.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "output file already exists (use --force to overwrite): {}",
                path.display()
            )));
        }

        let entries = pool.load_entries()?;

        if entries.is_empty() {
            warning("No entries found, nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => write_csv(path, &entries)?,
            ExportFormat::Json => write_json(path, &entries)?,
        }
        notify_export_success(format.as_str(), path);

        Ok(())
    }
}
