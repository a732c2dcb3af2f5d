use crate::errors::AppResult;
use crate::models::Entry;
use std::path::Path;

/// Write the entry list as pretty-printed JSON.
pub fn write_json(path: &Path, entries: &[Entry]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json)?;
    Ok(())
}
