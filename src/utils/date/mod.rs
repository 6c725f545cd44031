//! Calendar-day arithmetic.
//!
//! Everything here works on `NaiveDate` values and whole calendar days, so
//! a daylight-saving transition can never skip or repeat a day the way
//! elapsed-duration arithmetic on zoned timestamps can.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// The fixed first column of every calendar week.
pub const WEEK_START: Weekday = Weekday::Sun;

/// Number of days in the given month, or `None` for an unrepresentable month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = shift_month_start(first, 1)?;
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> Option<NaiveDate> {
    shift_month_start(first_of_month(date), 1)?.pred_opt()
}

/// Move a first-of-month date by `delta` whole months.
fn shift_month_start(first: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let total = first.year() * 12 + first.month0() as i32 + delta;
    NaiveDate::from_ymd_opt(total.div_euclid(12), total.rem_euclid(12) as u32 + 1, 1)
}

/// Shift a date by the given number of months, clamping the day to the
/// length of the target month (Jan 31 + 1 month = Feb 28/29).
pub fn shift_month(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let target = shift_month_start(first_of_month(date), delta)?;
    let max_day = days_in_month(target.year(), target.month())?;
    target.with_day(date.day().min(max_day))
}

/// The date `days` calendar days after `date`.
pub fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}

/// The date `days` calendar days before `date`.
pub fn sub_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(days))
}

/// Start of the week (on or before `date`) for the fixed week start.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    let offset = days_from_week_start(date.weekday());
    sub_days(date, offset as u64)
}

/// End of the week (on or after `date`) for the fixed week start.
pub fn week_end(date: NaiveDate) -> Option<NaiveDate> {
    let offset = 6 - days_from_week_start(date.weekday());
    add_days(date, offset as u64)
}

/// Column index of `weekday` in a week beginning on [`WEEK_START`].
pub fn days_from_week_start(weekday: Weekday) -> u32 {
    (weekday.num_days_from_sunday() + 7 - WEEK_START.num_days_from_sunday()) % 7
}
