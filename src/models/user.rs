use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hours recorded for one month: day of month → hours string.
pub type DayHours = BTreeMap<u32, String>;

/// Per-user nested hours map: "YYYY-MM" → (day → hours string).
pub type HoursByMonth = BTreeMap<String, DayHours>;

/// A calendar-tracker user.
///
/// Created on first login for a username, mutated per edited day, never
/// deleted by the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub hours: HoursByMonth,
}

impl User {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            hours: HoursByMonth::new(),
        }
    }

    /// Hours recorded for the given month key, empty if none yet.
    pub fn month_hours(&self, month_key: &str) -> DayHours {
        self.hours.get(month_key).cloned().unwrap_or_default()
    }

    /// Record (or overwrite) the hours string for one day of one month.
    pub fn set_day(&mut self, month_key: &str, day: u32, hours: &str) {
        self.hours
            .entry(month_key.to_string())
            .or_default()
            .insert(day, hours.to_string());
    }
}
