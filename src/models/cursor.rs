//! The month shown in the calendar grid.

use chrono::{Datelike, NaiveDate};

use crate::utils::date;

/// A displayed (year, month). Carries no day, so navigating never has to
/// clamp anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cursor {
    year: i32,
    month: u32,
}

impl Cursor {
    /// `None` when the month is out of range or unrepresentable.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day.year() == self.year && day.month() == self.month
    }

    /// Move by whole months; `None` past the edge of the calendar.
    pub fn shifted(&self, months: i32) -> Option<Self> {
        date::shift_month(self.first_day(), months).map(Self::from_date)
    }

    /// Header text such as "March 2024".
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}
