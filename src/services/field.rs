//! The picker as seen by a host page.
//!
//! [`DateTimeField`] ties the selection machine to the page: it reads the
//! host's value, reports commits through the change callback, positions the
//! popup, and holds the overlay node and pointer listener for exactly as
//! long as the popup is open.

use std::fmt::Write as _;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::cursor::Cursor;
use crate::models::draft::Draft;
use crate::models::settings::PickerSettings;
use crate::models::value::{CommittedValue, ValueError, WIRE_FORMAT};
use crate::services::calendar_grid::{CalendarCell, GridCache, Week};
use crate::services::dismissal::{DismissalController, PageListeners, PointerDown};
use crate::services::overlay::{OverlayNode, OverlaySurface};
use crate::services::placement::{compute_placement, AnchorRect, PopupGeometry, PopupSize, Viewport};
use crate::services::selection::{Commit, SelectionMachine};
use crate::services::time_slots::{time_slots, TimeSlot};
use crate::utils::clock::{Clock, SystemClock};

pub type CommitCallback = Box<dyn FnMut(Option<String>)>;

/// Page-wide resources shared by every picker on a page.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub overlay: OverlaySurface,
    pub listeners: PageListeners,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A trigger activation as delivered by the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    /// Sequence number of the event that activated the trigger
    pub sequence: u64,
    pub anchor: AnchorRect,
    pub viewport: Viewport,
}

/// Resources held while the popup is open.
#[derive(Debug)]
struct OpenScope {
    node: OverlayNode,
    anchor: AnchorRect,
    viewport: Viewport,
    geometry: PopupGeometry,
}

pub struct DateTimeField<C: Clock = SystemClock> {
    settings: PickerSettings,
    machine: SelectionMachine,
    clock: C,
    on_change_commit: Option<CommitCallback>,
    last_value_error: Option<ValueError>,
    overlay: OverlaySurface,
    dismissal: DismissalController,
    open: Option<OpenScope>,
    grid_cache: GridCache,
}

impl DateTimeField<SystemClock> {
    pub fn new(settings: PickerSettings, page: &PageContext, value: Option<&str>) -> Self {
        Self::with_clock(settings, page, value, SystemClock)
    }
}

impl<C: Clock> DateTimeField<C> {
    pub fn with_clock(settings: PickerSettings, page: &PageContext, value: Option<&str>, clock: C) -> Self {
        let (committed, error) = CommittedValue::from_wire(value);
        if let Some(err) = &error {
            log::warn!("Treating picker value as absent: {}", err);
        }
        let machine = SelectionMachine::new(committed, settings.show_time, settings.editable, clock.now());
        Self {
            settings,
            machine,
            clock,
            on_change_commit: None,
            last_value_error: error,
            overlay: page.overlay.clone(),
            dismissal: DismissalController::new(page.listeners.clone()),
            open: None,
            grid_cache: GridCache::new(),
        }
    }

    /// Register the host's change callback, called once per commit.
    pub fn on_change_commit(mut self, callback: impl FnMut(Option<String>) + 'static) -> Self {
        self.on_change_commit = Some(Box::new(callback));
        self
    }

    // ── Host inputs ─────────────────────────────────────────────────────

    /// Observe the host's current value. Safe to call on every render.
    pub fn set_value(&mut self, value: Option<&str>) -> bool {
        let (committed, error) = CommittedValue::from_wire(value);
        if let Some(err) = &error {
            if self.last_value_error.as_ref() != Some(err) {
                log::warn!("Treating picker value as absent: {}", err);
            }
        }
        self.last_value_error = error;
        let now = self.clock.now();
        self.machine.sync(committed, now)
    }

    /// Switch between date-only and date+time mode. An open popup is
    /// re-placed for the new height preset.
    pub fn set_show_time(&mut self, show_time: bool) {
        if self.settings.show_time == show_time {
            return;
        }
        self.settings.show_time = show_time;
        self.machine.set_show_time(show_time);

        let size = self.popup_size();
        if let Some(scope) = self.open.as_mut() {
            scope.geometry = compute_placement(scope.anchor, scope.viewport, size);
        }
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.settings.editable = editable;
        self.machine.set_editable(editable);
        self.release_if_closed();
    }

    // ── User intents ────────────────────────────────────────────────────

    pub fn activate_trigger(&mut self, activation: Activation) -> bool {
        if !self.machine.activate_trigger() {
            return false;
        }
        let geometry = compute_placement(activation.anchor, activation.viewport, self.popup_size());
        self.open = Some(OpenScope {
            node: self.overlay.mount("datetime-picker"),
            anchor: activation.anchor,
            viewport: activation.viewport,
            geometry,
        });
        // Only after the open state exists, so the activating event is not
        // seen as an outside click.
        self.dismissal.arm(activation.sequence);
        true
    }

    pub fn pick_date(&mut self, date: NaiveDate) -> Option<Commit> {
        let commit = self.machine.pick_date(date);
        self.finish(commit)
    }

    pub fn pick_cell(&mut self, cell: &CalendarCell) -> Option<Commit> {
        self.pick_date(cell.date)
    }

    pub fn pick_time(&mut self, slot: &TimeSlot) -> bool {
        self.machine.pick_time(slot)
    }

    pub fn confirm(&mut self) -> Option<Commit> {
        let commit = self.machine.confirm();
        self.finish(commit)
    }

    pub fn clear(&mut self) -> Option<Commit> {
        let commit = self.machine.clear();
        self.finish(commit)
    }

    pub fn dismiss(&mut self) -> bool {
        let dismissed = self.machine.dismiss();
        self.release_if_closed();
        dismissed
    }

    /// Page-level pointer-down. Dismisses when it landed outside both the
    /// popup and the trigger.
    pub fn handle_pointer_down(&mut self, event: PointerDown) -> bool {
        if self.dismissal.should_dismiss(&event) {
            log::debug!("Outside pointer-down (event {}) dismisses picker", event.sequence);
            return self.dismiss();
        }
        false
    }

    pub fn handle_escape(&mut self) -> bool {
        self.dismiss()
    }

    pub fn previous_month(&mut self) {
        self.machine.previous_month();
    }

    pub fn next_month(&mut self) {
        self.machine.next_month();
    }

    pub fn previous_year(&mut self) {
        self.machine.previous_year();
    }

    pub fn next_year(&mut self) {
        self.machine.next_year();
    }

    pub fn go_to_today(&mut self) {
        let today = self.clock.now().date();
        self.machine.go_to_today(today);
    }

    // ── Render outputs ──────────────────────────────────────────────────

    pub fn is_open(&self) -> bool {
        self.machine.is_open()
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn committed(&self) -> CommittedValue {
        self.machine.tracked()
    }

    pub fn draft(&self) -> &Draft {
        self.machine.draft()
    }

    pub fn cursor(&self) -> Cursor {
        self.machine.cursor()
    }

    pub fn geometry(&self) -> Option<PopupGeometry> {
        self.open.as_ref().map(|scope| scope.geometry)
    }

    pub fn anchor(&self) -> Option<AnchorRect> {
        self.open.as_ref().map(|scope| scope.anchor)
    }

    /// Address of the popup on the overlay surface while open.
    pub fn overlay_node(&self) -> Option<u64> {
        self.open.as_ref().map(|scope| scope.node.id())
    }

    pub fn last_value_error(&self) -> Option<&ValueError> {
        self.last_value_error.as_ref()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Week rows for the displayed month, with the draft date selected.
    pub fn calendar(&mut self) -> Vec<Week> {
        let today = self.clock.now().date();
        let selected = self.machine.draft().date();
        self.grid_cache.grid(self.machine.cursor(), today, Some(selected))
    }

    pub fn time_slots(&self) -> &'static [TimeSlot] {
        time_slots()
    }

    pub fn is_slot_selected(&self, slot: &TimeSlot) -> bool {
        slot.matches(self.machine.draft().time())
    }

    /// Text for the trigger: the committed value formatted for display, or
    /// the placeholder.
    pub fn display_label(&self) -> String {
        let Some(instant) = self.machine.tracked().instant() else {
            return self.settings.placeholder.clone();
        };
        let format = if self.settings.show_time {
            format!("{} {}", self.settings.date_format, self.settings.time_format)
        } else {
            self.settings.date_format.clone()
        };
        let mut label = String::new();
        if write!(label, "{}", instant.format(&format)).is_err() {
            log::warn!("Invalid display format '{}'; falling back to ISO-8601", format);
            return instant.format(WIRE_FORMAT).to_string();
        }
        label
    }

    fn popup_size(&self) -> PopupSize {
        PopupSize {
            width: self.settings.popup_width,
            height: self.settings.popup_height(),
            gap: self.settings.gap,
            margin: self.settings.margin,
        }
    }

    fn finish(&mut self, commit: Option<Commit>) -> Option<Commit> {
        self.release_if_closed();
        if let Some(commit) = &commit {
            let wire = commit.to_wire();
            log::info!("Picker committed {:?}", wire);
            if let Some(callback) = self.on_change_commit.as_mut() {
                callback(wire);
            }
        }
        commit
    }

    fn release_if_closed(&mut self) {
        if !self.machine.is_open() && self.open.is_some() {
            self.open = None;
            self.dismissal.disarm();
        }
    }
}

impl<C: Clock> std::fmt::Debug for DateTimeField<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateTimeField")
            .field("settings", &self.settings)
            .field("machine", &self.machine)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}
