//! Half-hour time slots for the time picker.

use std::sync::OnceLock;

use chrono::{NaiveTime, Timelike};

pub const SLOTS_PER_DAY: usize = 48;

/// One half-hour entry. Slots are wall-clock labels; picking one applies its
/// hour and minute to whatever date the draft holds.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    pub hour: u32,
    pub minute: u32,
    pub label: String,
}

impl TimeSlot {
    fn new(hour: u32, minute: u32) -> Self {
        Self {
            hour,
            minute,
            label: format!("{:02}:{:02}", hour, minute),
        }
    }

    pub fn time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Whether this slot shows the given time of day (seconds ignored).
    pub fn matches(&self, time: NaiveTime) -> bool {
        time.hour() == self.hour && time.minute() == self.minute
    }
}

/// The shared list of 48 slots, 00:00 through 23:30, built on first use.
pub fn time_slots() -> &'static [TimeSlot] {
    static SLOTS: OnceLock<Vec<TimeSlot>> = OnceLock::new();
    SLOTS.get_or_init(|| {
        (0..24)
            .flat_map(|hour| [0, 30].map(|minute| TimeSlot::new(hour, minute)))
            .collect()
    })
}
