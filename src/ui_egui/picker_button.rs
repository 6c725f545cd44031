//! egui rendering of the date/time picker.
//!
//! Draws the trigger inline and, while the field holds an overlay node, the
//! popup as a foreground `Area` so it is never clipped by the trigger's parent
//! layout. The `Area` id is fixed per picker: egui keeps every layer it has
//! seen, so one id means one layer however often the popup opens.

use egui::{Color32, RichText};

use crate::services::dismissal::{classify_pointer, PointerDown};
use crate::services::field::{Activation, DateTimeField};
use crate::services::placement::{AnchorRect, PopupGeometry, Viewport};
use crate::services::selection::Commit;
use crate::utils::clock::Clock;

const DAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const SLOT_COLUMNS: usize = 4;

/// What one frame of the picker produced.
pub struct PickerOutput {
    pub response: egui::Response,
    pub commit: Option<Commit>,
}

/// Trigger button plus popup for a [`DateTimeField`].
pub struct DateTimePickerButton<'a, C: Clock> {
    field: &'a mut DateTimeField<C>,
    id_salt: &'a str,
}

impl<'a, C: Clock> DateTimePickerButton<'a, C> {
    /// `id_salt` must be unique among pickers in the same `Ui`.
    pub fn new(field: &'a mut DateTimeField<C>, id_salt: &'a str) -> Self {
        Self { field, id_salt }
    }

    pub fn show(self, ui: &mut egui::Ui) -> PickerOutput {
        let field = self.field;
        let id_salt = self.id_salt;
        let editable = field.settings().editable;
        let frame_nr = ui.ctx().frame_nr();

        let (mut response, clear_clicked) = ui
            .horizontal(|ui| {
                let text = format!("📅 {}", field.display_label());
                let trigger = ui
                    .add_enabled(editable, egui::SelectableLabel::new(field.is_open(), text))
                    .on_hover_text("Click to select date");
                let clear_clicked = !field.committed().is_absent()
                    && ui
                        .add_enabled(editable, egui::Button::new("✖").small())
                        .on_hover_text("Clear")
                        .clicked();
                (trigger, clear_clicked)
            })
            .inner;

        let trigger_rect = response.rect;
        let anchor = AnchorRect::new(
            trigger_rect.left(),
            trigger_rect.top(),
            trigger_rect.width(),
            trigger_rect.height(),
        );

        let mut commit = None;
        if clear_clicked {
            commit = field.clear();
        } else if response.clicked() && !field.is_open() {
            let screen = ui.ctx().screen_rect();
            field.activate_trigger(Activation {
                sequence: frame_nr,
                anchor,
                viewport: Viewport::new(screen.width(), screen.height()),
            });
        }

        let mut popup_bounds = None;
        if let (Some(geometry), Some(_)) = (field.geometry(), field.overlay_node()) {
            let area = egui::Area::new(ui.make_persistent_id((id_salt, "popup")))
                .order(egui::Order::Foreground)
                .fixed_pos(egui::pos2(geometry.left, geometry.top))
                .show(ui.ctx(), |ui| {
                    egui::Frame::popup(ui.style())
                        .show(ui, |ui| {
                            ui.set_max_width(geometry.width);
                            render_popup(ui, field, id_salt)
                        })
                        .inner
                });
            commit = commit.or(area.inner);
            let rect = area.response.rect;
            popup_bounds = Some(PopupGeometry {
                top: rect.top(),
                left: rect.left(),
                width: rect.width(),
                height: rect.height(),
                side: geometry.side,
            });
        }

        if field.is_open() {
            let (escape, pressed_at) = ui.input(|input| {
                let pressed_at = if input.pointer.any_pressed() {
                    input.pointer.interact_pos()
                } else {
                    None
                };
                (input.key_pressed(egui::Key::Escape), pressed_at)
            });
            if escape {
                field.handle_escape();
            } else if let Some(pos) = pressed_at {
                let target = classify_pointer(pos.x, pos.y, &anchor, popup_bounds.as_ref());
                field.handle_pointer_down(PointerDown {
                    sequence: frame_nr,
                    target,
                });
            }
        }

        if commit.is_some() {
            response.mark_changed();
        }
        PickerOutput { response, commit }
    }
}

fn render_popup<C: Clock>(ui: &mut egui::Ui, field: &mut DateTimeField<C>, id_salt: &str) -> Option<Commit> {
    let mut commit = None;

    render_header(ui, field);
    ui.separator();

    egui::Grid::new((id_salt, "calendar_grid"))
        .num_columns(7)
        .spacing([2.0, 2.0])
        .min_col_width(28.0)
        .show(ui, |ui| {
            for name in DAY_NAMES {
                ui.label(RichText::new(name).small().strong());
            }
            ui.end_row();

            for week in field.calendar() {
                for cell in week {
                    let day = cell.date.format("%-d").to_string();
                    let text = if cell.is_today {
                        RichText::new(day).strong().color(Color32::from_rgb(50, 150, 50))
                    } else if !cell.in_displayed_month {
                        RichText::new(day).weak()
                    } else {
                        RichText::new(day)
                    };
                    if ui.selectable_label(cell.is_selected, text).clicked() {
                        commit = field.pick_cell(&cell);
                    }
                }
                ui.end_row();
            }
        });

    if field.settings().show_time && field.is_open() {
        ui.separator();
        ui.label(RichText::new("Time").small().strong());
        egui::ScrollArea::vertical()
            .id_source((id_salt, "time_slots"))
            .max_height(150.0)
            .show(ui, |ui| {
                egui::Grid::new((id_salt, "time_grid"))
                    .num_columns(SLOT_COLUMNS)
                    .spacing([4.0, 2.0])
                    .show(ui, |ui| {
                        for (index, slot) in field.time_slots().iter().enumerate() {
                            let selected = field.is_slot_selected(slot);
                            if ui.selectable_label(selected, slot.label.as_str()).clicked() {
                                field.pick_time(slot);
                            }
                            if (index + 1) % SLOT_COLUMNS == 0 {
                                ui.end_row();
                            }
                        }
                    });
            });
    }

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Today").clicked() {
            field.go_to_today();
        }
        if field.settings().show_time && field.is_open() {
            let draft = field.draft().to_datetime();
            ui.label(RichText::new(draft.format("%d %b %Y %H:%M").to_string()).weak());
            if ui.button("Confirm").clicked() {
                commit = field.confirm();
            }
        }
    });

    commit
}

/// Month/year header with year and month navigation arrows.
fn render_header<C: Clock>(ui: &mut egui::Ui, field: &mut DateTimeField<C>) {
    ui.horizontal(|ui| {
        if ui.small_button("◀◀").on_hover_text("Previous year").clicked() {
            field.previous_year();
        }
        if ui.small_button("◀").on_hover_text("Previous month").clicked() {
            field.previous_month();
        }

        ui.add_space(4.0);
        let title = field.cursor().title();
        if ui
            .selectable_label(false, title)
            .on_hover_text("Go to today")
            .clicked()
        {
            field.go_to_today();
        }
        ui.add_space(4.0);

        if ui.small_button("▶").on_hover_text("Next month").clicked() {
            field.next_month();
        }
        if ui.small_button("▶▶").on_hover_text("Next year").clicked() {
            field.next_year();
        }
    });
}
