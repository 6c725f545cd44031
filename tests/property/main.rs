// Property-based tests for grid building, time slots, placement and sync
// Checks the picker's guarantees over random months, geometry and values

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Datelike, NaiveDate, Weekday};
use datetime_picker::models::cursor::Cursor;
use datetime_picker::models::value::CommittedValue;
use datetime_picker::services::calendar_grid::build_month_grid;
use datetime_picker::services::placement::{compute_placement, AnchorRect, PopupSide, PopupSize, Viewport};
use datetime_picker::services::selection::SelectionMachine;
use datetime_picker::services::time_slots::time_slots;
use datetime_picker::utils::date::days_in_month;
use proptest::prelude::*;

const SIZE: PopupSize = PopupSize {
    width: 300.0,
    height: 350.0,
    gap: 4.0,
    margin: 8.0,
};

proptest! {
    /// Property: every grid is whole weeks, starts on Sunday and holds each
    /// day of the month exactly once
    #[test]
    fn prop_grid_covers_month_in_whole_weeks(year in 1900..2200i32, month in 1..=12u32) {
        let cursor = Cursor::new(year, month).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let grid = build_month_grid(cursor, today, None);
        let cells: Vec<_> = grid.iter().flatten().collect();

        prop_assert_eq!(cells.len() % 7, 0);
        prop_assert!((4..=6).contains(&grid.len()));
        prop_assert_eq!(cells[0].date.weekday(), Weekday::Sun);

        let in_month: Vec<_> = cells.iter().filter(|c| c.in_displayed_month).collect();
        prop_assert_eq!(in_month.len() as u32, days_in_month(year, month).unwrap());
        for (index, cell) in in_month.iter().enumerate() {
            prop_assert_eq!(cell.date.day(), index as u32 + 1);
        }
        for cell in &cells {
            prop_assert_eq!(cell.in_displayed_month, cursor.contains(cell.date));
        }
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    /// Property: slots stay the same 48 ordered entries whatever the draft
    /// and displayed month are
    #[test]
    fn prop_time_slots_ignore_draft_and_cursor(
        days in 0i64..3650,
        seconds in 0u32..86_400,
        navigation in -24i32..24,
    ) {
        let before: Vec<_> = time_slots().to_vec();
        let seed = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(days);
        let seed = seed.and_hms_opt(seconds / 3600, seconds / 60 % 60, seconds % 60).unwrap();

        let mut machine = SelectionMachine::new(CommittedValue::at(seed), true, true, fixtures::dates::now());
        machine.activate_trigger();
        for _ in 0..navigation.unsigned_abs() {
            if navigation > 0 { machine.next_month() } else { machine.previous_month() }
        }
        machine.pick_time(&time_slots()[(seconds / 1800) as usize]);

        let slots = time_slots();
        prop_assert_eq!(slots, before.as_slice());
        prop_assert_eq!(slots.len(), 48);
        for pair in slots.windows(2) {
            prop_assert!((pair[0].hour, pair[0].minute) < (pair[1].hour, pair[1].minute));
        }
    }

    /// Property: the popup goes above only when it does not fit below and
    /// does fit above, and never starts past the right edge
    #[test]
    fn prop_placement_rules(
        top in 0.0f32..1000.0,
        height in 0.0f32..80.0,
        left in 0.0f32..1400.0,
        viewport_width in 400.0f32..1600.0,
        viewport_height in 300.0f32..1200.0,
    ) {
        let anchor = AnchorRect::new(left, top, 120.0, height);
        let viewport = Viewport::new(viewport_width, viewport_height);
        let placed = compute_placement(anchor, viewport, SIZE);

        let space_below = viewport_height - anchor.bottom;
        let above = space_below < SIZE.height && anchor.top >= SIZE.height;
        prop_assert_eq!(placed.side == PopupSide::Above, above);
        if above {
            prop_assert!(placed.top + SIZE.height <= anchor.top);
        } else {
            prop_assert_eq!(placed.top, anchor.bottom + SIZE.gap);
        }
        prop_assert!(placed.left + SIZE.width <= viewport_width || placed.left == left);
        prop_assert!(placed.left <= left);
    }

    /// Property: re-observing the same committed value never moves the
    /// draft or the cursor
    #[test]
    fn prop_sync_is_idempotent(
        days in 0i64..40_000,
        minutes in 0u32..1440,
        navigation in -30i32..30,
        absent in any::<bool>(),
    ) {
        let base = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + chrono::Duration::days(days);
        let instant = base.and_hms_opt(minutes / 60, minutes % 60, 0).unwrap();
        let value = if absent { CommittedValue::ABSENT } else { CommittedValue::at(instant) };

        let mut machine = SelectionMachine::new(value, false, true, fixtures::dates::now());
        for _ in 0..navigation.unsigned_abs() {
            if navigation > 0 { machine.next_month() } else { machine.previous_month() }
        }
        let draft = *machine.draft();
        let cursor = machine.cursor();

        for _ in 0..3 {
            prop_assert!(!machine.sync(value, fixtures::dates::jan_1_2025()));
        }
        prop_assert_eq!(*machine.draft(), draft);
        prop_assert_eq!(machine.cursor(), cursor);
    }

    /// Property: a date-only pick commits that date with the prior time of day
    #[test]
    fn prop_date_only_pick_keeps_time_of_day(days in 0i64..3650, seconds in 0u32..86_400) {
        let prior = fixtures::dates::valentine_2025()
            .date()
            .and_hms_opt(seconds / 3600, seconds / 60 % 60, seconds % 60)
            .unwrap();
        let picked = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(days);

        let mut machine = SelectionMachine::new(CommittedValue::at(prior), false, true, fixtures::dates::now());
        machine.activate_trigger();
        let commit = machine.pick_date(picked).unwrap();
        let instant = commit.value().instant().unwrap();

        prop_assert_eq!(instant.date(), picked);
        prop_assert_eq!(instant.time(), prior.time());
        prop_assert!(!machine.is_open());
    }
}
