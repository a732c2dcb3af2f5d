//! Month navigation.
//!
//! A cursor over `{year, month}` pairs: `next` wraps December into January
//! of the following year, `prev` wraps January back into December. Years are
//! unbounded in both directions.

use crate::utils::date::today;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32, // 1..=12
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Cursor on the current local month.
    pub fn current() -> Self {
        let now = today();
        Self::new(now.year(), now.month())
    }

    pub fn next(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    /// Storage key, e.g. "2024-05". Doubles as the per-user hours map key.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Human label, e.g. "May 2024".
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(d) => d.format("%B %Y").to_string(),
            None => self.key(),
        }
    }

    /// Parse a "YYYY-MM" string back into a cursor.
    pub fn parse(s: &str) -> Option<Self> {
        let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()?;
        Some(Self::new(d.year(), d.month()))
    }
}
