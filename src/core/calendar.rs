//! Calendar grid generation.
//!
//! A month is laid out as Sunday-first week rows of exactly 7 cells each.
//! Leading cells pad the first week so day 1 lands on its weekday, and the
//! last partial week is right-padded.

use chrono::{Datelike, NaiveDate};

pub const WEEK_LEN: usize = 7;

/// One week row: 7 cells, each a day number or empty.
pub type Week = [Option<u32>; WEEK_LEN];

#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32, // 1..=12
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    /// Day numbers in grid order (the flattened non-empty cells).
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().flatten().filter_map(|c| *c)
    }
}

/// Number of days in the month, 0 when `(year, month)` is not a valid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };

    let mut d = first;
    let mut count = 0;
    while d.month() == month {
        count += 1;
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    count
}

/// Weekday of the first day of the month, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Whether a week column holds Sunday or Saturday.
pub fn is_weekend_column(col: usize) -> bool {
    col == 0 || col == WEEK_LEN - 1
}

/// Whether a concrete date falls on Sunday or Saturday.
/// Non-existent dates count as weekend so they never contribute hours.
pub fn is_weekend_day(year: i32, month: u32, day: u32) -> bool {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => {
            let wd = d.weekday().num_days_from_sunday();
            wd == 0 || wd == 6
        }
        None => true,
    }
}

/// Build the week-by-week grid for a month.
///
/// An invalid `(year, month)` yields a degenerate grid with no weeks.
pub fn month_grid(year: i32, month: u32) -> MonthGrid {
    let days = days_in_month(year, month);
    if days == 0 {
        return MonthGrid {
            year,
            month,
            weeks: Vec::new(),
        };
    }

    let lead = first_weekday(year, month) as usize;
    let mut weeks = Vec::new();
    let mut week: Week = [None; WEEK_LEN];
    let mut col = lead;

    for day in 1..=days {
        week[col] = Some(day);
        col += 1;
        if col == WEEK_LEN {
            weeks.push(week);
            week = [None; WEEK_LEN];
            col = 0;
        }
    }

    // right-pad the final partial week
    if col > 0 {
        weeks.push(week);
    }

    MonthGrid { year, month, weeks }
}
