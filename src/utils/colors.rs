/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out weekend cells and empty values in the calendar view.
pub fn colorize_cell(value: &str, weekend: bool) -> String {
    if weekend || value.trim().is_empty() {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Totals: zero renders grey, anything recorded renders green.
pub fn color_for_total(value: f64) -> &'static str {
    if value > 0.0 { GREEN } else { GREY }
}
