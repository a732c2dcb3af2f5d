use crate::errors::AppResult;
use crate::models::Entry;
use csv::Writer;
use std::path::Path;

/// Write the entry list as CSV to the given file.
pub fn write_csv(path: &Path, entries: &[Entry]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["employee_name", "date", "hours", "task"])?;

    for e in entries {
        wtr.write_record([
            e.employee_name.as_str(),
            e.date.as_str(),
            e.hours.as_str(),
            e.task.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
