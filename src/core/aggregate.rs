//! Hours aggregation over the calendar grid.
//!
//! Sunday and Saturday never contribute to weekly or monthly sums, whatever
//! value happens to be stored for them.

use crate::core::calendar::{MonthGrid, Week, is_weekend_column, is_weekend_day};
use crate::models::DayHours;

/// Coerce a stored hours string to a number; unparseable values count as
/// zero rather than failing the whole aggregation.
pub fn parse_hours(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Sum of hours in one week row, weekend columns excluded.
pub fn week_total(week: &Week, hours: &DayHours) -> f64 {
    week.iter()
        .enumerate()
        .filter(|(col, _)| !is_weekend_column(*col))
        .filter_map(|(_, cell)| *cell)
        .filter_map(|day| hours.get(&day))
        .map(|raw| parse_hours(raw))
        .sum()
}

/// Weekly totals for every week row of the grid, in order.
pub fn weekly_totals(grid: &MonthGrid, hours: &DayHours) -> Vec<f64> {
    grid.weeks.iter().map(|w| week_total(w, hours)).collect()
}

/// Monthly total: every recorded day whose date is a weekday.
///
/// Days that do not exist in the month are skipped entirely.
pub fn monthly_total(year: i32, month: u32, hours: &DayHours) -> f64 {
    hours
        .iter()
        .filter(|(day, _)| !is_weekend_day(year, month, **day))
        .map(|(_, raw)| parse_hours(raw))
        .sum()
}
