//! Month grid generation for the calendar popup.
//!
//! A grid runs from the week start on or before the 1st of the displayed
//! month to the week end on or after its last day, so boundary weeks are
//! completed with days borrowed from the neighbouring months.

use chrono::NaiveDate;

use crate::models::cursor::Cursor;
use crate::utils::date;

/// One day entry in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for days borrowed from the previous or next month
    pub in_displayed_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

pub type Week = [CalendarCell; 7];

/// The dates of every week row for `cursor`, Sunday first.
///
/// Depends on nothing but the cursor, which makes it safe to cache.
/// Returns an empty grid only at the very edge of chrono's date range.
pub fn month_weeks(cursor: Cursor) -> Vec<[NaiveDate; 7]> {
    match collect_weeks(cursor) {
        Some(weeks) => weeks,
        None => {
            log::warn!(
                "Cannot build a calendar grid for {}-{:02}: outside the supported date range",
                cursor.year(),
                cursor.month()
            );
            Vec::new()
        }
    }
}

fn collect_weeks(cursor: Cursor) -> Option<Vec<[NaiveDate; 7]>> {
    let first = cursor.first_day();
    let start = date::week_start(first)?;
    let end = date::week_end(date::last_of_month(first)?)?;

    let mut weeks = Vec::with_capacity(6);
    let mut week_first = start;
    while week_first <= end {
        let mut week = [week_first; 7];
        for (offset, slot) in week.iter_mut().enumerate().skip(1) {
            *slot = date::add_days(week_first, offset as u64)?;
        }
        weeks.push(week);
        week_first = date::add_days(week_first, 7)?;
    }
    Some(weeks)
}

/// Decorate the month's dates with today / selection / spill-over flags.
pub fn build_month_grid(cursor: Cursor, today: NaiveDate, selected: Option<NaiveDate>) -> Vec<Week> {
    decorate(&month_weeks(cursor), cursor, today, selected)
}

fn decorate(
    weeks: &[[NaiveDate; 7]],
    cursor: Cursor,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<Week> {
    weeks
        .iter()
        .map(|week| {
            week.map(|day| CalendarCell {
                date: day,
                in_displayed_month: cursor.contains(day),
                is_today: day == today,
                is_selected: selected == Some(day),
            })
        })
        .collect()
}

/// Keeps the dates of the last built month so repeated renders of the same
/// cursor skip the date walk.
#[derive(Debug, Default)]
pub struct GridCache {
    cached: Option<(Cursor, Vec<[NaiveDate; 7]>)>,
}

impl GridCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&mut self, cursor: Cursor, today: NaiveDate, selected: Option<NaiveDate>) -> Vec<Week> {
        let stale = !matches!(&self.cached, Some((cached, _)) if *cached == cursor);
        if stale {
            self.cached = Some((cursor, month_weeks(cursor)));
        }
        match &self.cached {
            Some((_, weeks)) => decorate(weeks, cursor, today, selected),
            None => Vec::new(),
        }
    }
}
