//! Configuration file checks.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Fields a complete configuration file must carry.
const EXPECTED_FIELDS: [&str; 3] = ["database", "default_hours", "separator_char"];

/// Report config fields missing from the YAML file on disk.
///
/// Missing fields are not an error by themselves: `Config::load` fills them
/// with defaults through serde. The check exists so users can spot a config
/// written by an older release.
pub fn check_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;

    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))?;

    let Some(map) = yaml.as_mapping() else {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        )));
    };

    let missing = EXPECTED_FIELDS
        .iter()
        .filter(|field| !map.contains_key(&Value::String(field.to_string())))
        .map(|field| field.to_string())
        .collect();

    Ok(missing)
}

/// Run the check and print the outcome.
pub fn report(path: &Path) -> AppResult<()> {
    let missing = check_missing_fields(path)?;

    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        warning(format!(
            "Missing fields (defaults are used): {}",
            missing.join(", ")
        ));
    }

    Ok(())
}
