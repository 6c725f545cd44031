//! Selection state machine.
//!
//! Owns the draft, the displayed month and the open/closed state, and
//! reconciles them against the host's committed value. Date-only pickers
//! commit as soon as a day is picked; date+time pickers only commit on an
//! explicit confirm.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::cursor::Cursor;
use crate::models::draft::Draft;
use crate::models::value::CommittedValue;
use crate::services::time_slots::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Closed,
    Open,
}

/// A value surfaced to the host. Produced only by a date pick in date-only
/// mode, a confirm, or a clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit(CommittedValue);

impl Commit {
    pub fn value(&self) -> CommittedValue {
        self.0
    }

    pub fn to_wire(&self) -> Option<String> {
        self.0.to_wire()
    }
}

#[derive(Debug, Clone)]
pub struct SelectionMachine {
    show_time: bool,
    editable: bool,
    state: PickerState,
    /// The committed value as last observed from the host
    tracked: CommittedValue,
    draft: Draft,
    cursor: Cursor,
}

impl SelectionMachine {
    /// First observation of the committed value. An absent value seeds the
    /// draft and cursor from `now`.
    pub fn new(value: CommittedValue, show_time: bool, editable: bool, now: NaiveDateTime) -> Self {
        let seed = value.instant().unwrap_or(now);
        Self {
            show_time,
            editable,
            state: PickerState::Closed,
            tracked: value,
            draft: Draft::from_datetime(seed),
            cursor: Cursor::from_date(seed.date()),
        }
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PickerState::Open
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn tracked(&self) -> CommittedValue {
        self.tracked
    }

    pub fn show_time(&self) -> bool {
        self.show_time
    }

    pub fn editable(&self) -> bool {
        self.editable
    }

    /// Closed -> Open. Returns whether the popup opened.
    pub fn activate_trigger(&mut self) -> bool {
        if !self.editable {
            log::debug!("Ignoring trigger activation: picker is read-only");
            return false;
        }
        if self.is_open() {
            return false;
        }
        self.state = PickerState::Open;
        log::debug!("Picker opened on {}", self.cursor.title());
        true
    }

    /// Replace the draft's date. In date-only mode this commits and closes.
    ///
    /// The time of day, seconds included, is carried over unchanged.
    pub fn pick_date(&mut self, date: NaiveDate) -> Option<Commit> {
        if !self.is_open() {
            return None;
        }
        self.draft.set_date(date);
        self.cursor = Cursor::from_date(date);

        if self.show_time {
            log::debug!("Draft date set to {}", date);
            None
        } else {
            self.state = PickerState::Closed;
            Some(self.commit_draft())
        }
    }

    /// Replace the draft's time of day. Never commits.
    pub fn pick_time(&mut self, slot: &TimeSlot) -> bool {
        if !self.is_open() || !self.show_time {
            return false;
        }
        let changed = self.draft.set_time(slot.hour, slot.minute);
        if changed {
            log::debug!("Draft time set to {}", slot.label);
        }
        changed
    }

    /// Commit the draft and close. Only available in date+time mode.
    pub fn confirm(&mut self) -> Option<Commit> {
        if !self.is_open() || !self.show_time {
            return None;
        }
        self.state = PickerState::Closed;
        Some(self.commit_draft())
    }

    /// Commit "no value". The draft is left for the next external sync to
    /// reset.
    pub fn clear(&mut self) -> Option<Commit> {
        if !self.editable {
            return None;
        }
        self.state = PickerState::Closed;
        log::debug!("Picker cleared");
        Some(Commit(CommittedValue::ABSENT))
    }

    /// Close without committing; the draft is kept as is.
    pub fn dismiss(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = PickerState::Closed;
        log::debug!("Picker dismissed without commit");
        true
    }

    /// Observe the host's committed value. Draft and cursor are reset only
    /// when the value differs from the tracked one, so re-observing the same
    /// value (including absent after absent) changes nothing.
    pub fn sync(&mut self, value: CommittedValue, now: NaiveDateTime) -> bool {
        if value == self.tracked {
            return false;
        }
        self.tracked = value;
        let seed = value.instant().unwrap_or(now);
        self.draft = Draft::from_datetime(seed);
        self.cursor = Cursor::from_date(seed.date());
        log::debug!("Committed value changed to {}; draft reset", value);
        true
    }

    pub fn set_show_time(&mut self, show_time: bool) {
        self.show_time = show_time;
    }

    /// Turning editing off while open closes the popup without committing.
    pub fn set_editable(&mut self, editable: bool) -> bool {
        self.editable = editable;
        if !editable {
            return self.dismiss();
        }
        false
    }

    pub fn previous_month(&mut self) {
        self.shift_cursor(-1);
    }

    pub fn next_month(&mut self) {
        self.shift_cursor(1);
    }

    pub fn previous_year(&mut self) {
        self.shift_cursor(-12);
    }

    pub fn next_year(&mut self) {
        self.shift_cursor(12);
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.cursor = Cursor::from_date(today);
    }

    fn shift_cursor(&mut self, months: i32) {
        if let Some(cursor) = self.cursor.shifted(months) {
            self.cursor = cursor;
        }
    }

    fn commit_draft(&self) -> Commit {
        let value = self.draft.to_committed();
        log::debug!("Committing {}", value);
        Commit(value)
    }
}
