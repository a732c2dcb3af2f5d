use serde::{Deserialize, Serialize};

/// One row of the entry list tracker.
///
/// All fields are kept as the raw strings the user typed: the list tracker
/// validates emptiness only, and entries are never mutated in place
/// (delete + re-add is the only way to "edit" one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub employee_name: String,
    pub date: String,  // YYYY-MM-DD as typed
    pub hours: String, // number-as-string, coerced at aggregation time
    pub task: String,
}

impl Entry {
    pub fn new(employee_name: &str, date: &str, hours: &str, task: &str) -> Self {
        Self {
            employee_name: employee_name.to_string(),
            date: date.to_string(),
            hours: hours.to_string(),
            task: task.to_string(),
        }
    }
}
