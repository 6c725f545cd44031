// Integration tests for the picker boundary: host value in, commits out
mod fixtures;

use chrono::NaiveDate;
use datetime_picker::services::dismissal::{HitTarget, PointerDown};
use datetime_picker::services::field::DateTimeField;
use datetime_picker::services::placement::PopupSide;
use fixtures::{date_only, date_time, dates, geometry, harness, read_only};
use pretty_assertions::assert_eq;

#[test]
fn test_registration_form_round_trip() {
    // Host starts empty, user picks a birthday, host echoes it back.
    let mut h = harness(date_only(), None);
    assert_eq!(h.field.display_label(), "Select date");

    assert!(h.field.activate_trigger(geometry::high_trigger(1)));
    let june_2 = h
        .field
        .calendar()
        .into_iter()
        .flatten()
        .find(|cell| cell.date == NaiveDate::from_ymd_opt(2025, 6, 2).unwrap())
        .expect("June 2 is in the June grid");
    h.field.pick_cell(&june_2);

    let committed = h.commits.borrow().last().cloned().flatten();
    assert_eq!(committed.as_deref(), Some("2025-06-02T09:41:00"));

    // Echoing the commit resyncs once, then is idempotent.
    let draft = *h.field.draft();
    assert!(h.field.set_value(committed.as_deref()));
    assert_eq!(*h.field.draft(), draft);
    assert!(!h.field.set_value(committed.as_deref()));
    assert_eq!(h.field.display_label(), "02 Jun 2025");
}

#[test]
fn test_each_commit_path_calls_back_exactly_once() {
    let mut h = harness(date_time(), Some("2025-02-14T14:00:00"));

    h.field.activate_trigger(geometry::high_trigger(1));
    h.field.pick_date(NaiveDate::from_ymd_opt(2025, 2, 20).unwrap());
    let slot = h.field.time_slots()[20].clone();
    h.field.pick_time(&slot);
    assert!(h.commits.borrow().is_empty());

    h.field.confirm();
    h.field.clear();
    assert_eq!(
        *h.commits.borrow(),
        vec![Some("2025-02-20T10:00:00".to_string()), None]
    );
}

#[test]
fn test_spill_over_cell_moves_cursor() {
    let mut h = harness(date_only(), Some("2025-03-10T08:00:00"));
    h.field.activate_trigger(geometry::high_trigger(1));
    let leading = h.field.calendar()[0][0];
    assert!(!leading.in_displayed_month);

    h.field.pick_cell(&leading);
    assert_eq!(h.field.cursor().month(), 2);
    assert_eq!(h.field.draft().date(), NaiveDate::from_ymd_opt(2025, 2, 23).unwrap());
}

#[test]
fn test_dismiss_then_reopen_resumes_draft() {
    let mut h = harness(date_time(), None);
    h.field.activate_trigger(geometry::high_trigger(1));
    h.field.pick_date(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
    assert!(h.field.handle_pointer_down(PointerDown {
        sequence: 2,
        target: HitTarget::Outside,
    }));

    h.field.set_value(None);
    h.field.activate_trigger(geometry::high_trigger(3));
    assert_eq!(h.field.draft().date(), NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
    assert!(h.commits.borrow().is_empty());
}

#[test]
fn test_placement_flips_for_low_trigger() {
    let mut h = harness(date_only(), None);
    h.field.activate_trigger(geometry::low_trigger(1));
    let placed = h.field.geometry().unwrap();
    assert_eq!(placed.side, PopupSide::Above);
    assert_eq!(placed.top, 500.0 - 350.0 - 4.0);

    h.field.handle_escape();
    h.field.activate_trigger(geometry::high_trigger(2));
    assert_eq!(h.field.geometry().unwrap().side, PopupSide::Below);
}

#[test]
fn test_read_only_picker_is_inert() {
    let mut h = harness(read_only(), Some("2025-01-01T00:00:00"));
    assert!(!h.field.activate_trigger(geometry::high_trigger(1)));
    assert!(h.field.clear().is_none());
    assert!(h.field.pick_date(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()).is_none());
    assert!(h.commits.borrow().is_empty());
    assert!(!h.field.is_open());
}

#[test]
fn test_pickers_sharing_a_page_release_their_resources() {
    let h = harness(date_only(), None);
    let mut second = DateTimeField::new(date_time(), &h.page, Some("2025-05-05T05:30:00"));
    let mut first = h.field;

    first.activate_trigger(geometry::high_trigger(1));
    second.activate_trigger(geometry::high_trigger(1));
    assert_eq!(h.page.listeners.active_count(), 2);
    assert_eq!(h.page.overlay.mounted_count(), 2);
    assert_ne!(first.overlay_node(), second.overlay_node());

    first.pick_date(dates::valentine_2025().date());
    assert_eq!(h.page.listeners.active_count(), 1);
    drop(second);
    assert_eq!(h.page.listeners.active_count(), 0);
    assert_eq!(h.page.overlay.mounted_count(), 0);
}

#[test]
fn test_leap_day_value() {
    let mut h = harness(date_only(), Some("2024-02-29T12:00:00"));
    assert_eq!(h.field.draft().to_datetime(), dates::leap_day_2024());
    let grid = h.field.calendar();
    let selected: Vec<_> = grid.iter().flatten().filter(|c| c.is_selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].date, dates::leap_day_2024().date());
}
