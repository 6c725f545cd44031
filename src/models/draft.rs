//! The selection under active edit.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::value::CommittedValue;

/// Draft selection: a calendar date plus a time of day.
///
/// The date and the time are stored separately and each is only ever
/// replaced as a whole, so picking a date never disturbs the time and
/// picking a time never disturbs the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draft {
    date: NaiveDate,
    time: NaiveTime,
}

impl Draft {
    /// Seed a draft from a timestamp, keeping whole seconds. Sub-second
    /// precision is not representable on the wire and is dropped.
    pub fn from_datetime(instant: NaiveDateTime) -> Self {
        let time = NaiveTime::from_hms_opt(instant.hour(), instant.minute(), instant.second())
            .unwrap_or(NaiveTime::MIN);
        Self {
            date: instant.date(),
            time,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Replace the time of day with `hour:minute:00`. Out-of-range input
    /// leaves the draft untouched and returns `false`.
    pub fn set_time(&mut self, hour: u32, minute: u32) -> bool {
        match NaiveTime::from_hms_opt(hour, minute, 0) {
            Some(time) => {
                self.time = time;
                true
            }
            None => false,
        }
    }

    pub fn to_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn to_committed(&self) -> CommittedValue {
        CommittedValue::at(self.to_datetime())
    }
}
