pub mod entry;
pub mod user;

pub use entry::Entry;
pub use user::{DayHours, HoursByMonth, User};
