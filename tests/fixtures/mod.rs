// Test fixtures - reusable test data
// Provides consistent dates, geometry and picker setups across test files
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use datetime_picker::models::settings::PickerSettings;
use datetime_picker::services::field::{Activation, DateTimeField, PageContext};
use datetime_picker::services::placement::{AnchorRect, Viewport};
use datetime_picker::utils::clock::FixedClock;
use std::cell::RefCell;
use std::rc::Rc;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2025 at midnight
    pub fn jan_1_2025() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Returns Feb 14, 2025 at 14:00 (Valentine's Day)
    pub fn valentine_2025() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 14)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    /// The moment every fixture clock reports: Jun 15, 2025 at 09:41
    pub fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(9, 41, 0)
            .unwrap()
    }
}

/// Trigger/viewport geometry
pub mod geometry {
    use super::*;

    /// A trigger near the bottom of a 600px-high viewport
    pub fn low_trigger(sequence: u64) -> Activation {
        Activation {
            sequence,
            anchor: AnchorRect::new(24.0, 500.0, 180.0, 50.0),
            viewport: Viewport::new(1024.0, 600.0),
        }
    }

    /// A trigger near the top of a tall viewport
    pub fn high_trigger(sequence: u64) -> Activation {
        Activation {
            sequence,
            anchor: AnchorRect::new(24.0, 40.0, 180.0, 30.0),
            viewport: Viewport::new(1024.0, 900.0),
        }
    }
}

/// Commits received by the host's change callback
pub type CommitLog = Rc<RefCell<Vec<Option<String>>>>;

/// A picker on its own page, pinned to `dates::now()`, recording commits.
pub struct Harness {
    pub page: PageContext,
    pub field: DateTimeField<FixedClock>,
    pub commits: CommitLog,
}

pub fn harness(settings: PickerSettings, value: Option<&str>) -> Harness {
    let page = PageContext::new();
    let commits: CommitLog = Rc::new(RefCell::new(Vec::new()));
    let sink = commits.clone();
    let field = DateTimeField::with_clock(settings, &page, value, FixedClock(dates::now()))
        .on_change_commit(move |value| sink.borrow_mut().push(value));
    Harness { page, field, commits }
}

pub fn date_only() -> PickerSettings {
    PickerSettings::default()
}

pub fn date_time() -> PickerSettings {
    PickerSettings {
        show_time: true,
        ..Default::default()
    }
}

pub fn read_only() -> PickerSettings {
    PickerSettings {
        editable: false,
        ..Default::default()
    }
}
