//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Render an hours total without trailing noise: 8 → "8", 7.5 → "7.5".
pub fn format_hours(hours: f64) -> String {
    if hours == hours.trunc() {
        format!("{}", hours as i64)
    } else {
        format!("{:.2}", hours)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
