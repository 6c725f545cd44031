//! Demo host: a small scheduling form embedding two pickers.
//!
//! The form owns the committed values as plain strings and feeds them back
//! into the pickers every frame, the way any controlled host would.

use serde::Serialize;

use super::picker_button::DateTimePickerButton;
use crate::models::settings::PickerSettings;
use crate::services::field::{DateTimeField, PageContext};

/// Host-side form state. The only persisted artifact is these strings.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ScheduleForm {
    pub name: String,
    pub date_of_birth: Option<String>,
    pub appointment: Option<String>,
}

pub struct PickerDemoApp {
    /// Shared overlay layer and pointer listeners for every picker on the page
    _page: PageContext,
    form: ScheduleForm,
    birth_picker: DateTimeField,
    appointment_picker: DateTimeField,
    appointment_with_time: bool,
    read_only: bool,
    last_submission: Option<String>,
}

impl PickerDemoApp {
    pub fn new(settings: PickerSettings) -> Self {
        let page = PageContext::new();
        let form = ScheduleForm::default();

        let birth_settings = PickerSettings {
            show_time: false,
            placeholder: "Date of birth".to_string(),
            ..settings.clone()
        };
        let appointment_settings = PickerSettings {
            show_time: true,
            ..settings
        };

        Self {
            birth_picker: DateTimeField::new(birth_settings, &page, form.date_of_birth.as_deref()),
            appointment_picker: DateTimeField::new(appointment_settings, &page, form.appointment.as_deref()),
            _page: page,
            form,
            appointment_with_time: true,
            read_only: false,
            last_submission: None,
        }
    }

    fn submit(&mut self) {
        match serde_json::to_string_pretty(&self.form) {
            Ok(json) => {
                log::info!("Submitted schedule form: {}", json);
                self.last_submission = Some(json);
            }
            Err(err) => log::error!("Failed to serialize schedule form: {}", err),
        }
    }
}

impl eframe::App for PickerDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Controlled inputs: observe the host values before drawing.
        self.birth_picker.set_value(self.form.date_of_birth.as_deref());
        self.appointment_picker.set_value(self.form.appointment.as_deref());
        self.appointment_picker.set_show_time(self.appointment_with_time);
        self.birth_picker.set_editable(!self.read_only);
        self.appointment_picker.set_editable(!self.read_only);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Schedule an appointment");
            ui.add_space(8.0);

            egui::Grid::new("schedule_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut self.form.name);
                    ui.end_row();

                    ui.label("Date of birth:");
                    let output = DateTimePickerButton::new(&mut self.birth_picker, "date_of_birth").show(ui);
                    if let Some(commit) = output.commit {
                        self.form.date_of_birth = commit.to_wire();
                    }
                    ui.end_row();

                    ui.label("Appointment:");
                    let output = DateTimePickerButton::new(&mut self.appointment_picker, "appointment").show(ui);
                    if let Some(commit) = output.commit {
                        self.form.appointment = commit.to_wire();
                    }
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.checkbox(&mut self.appointment_with_time, "Appointment includes a time");
            ui.checkbox(&mut self.read_only, "Read-only");

            ui.add_space(8.0);
            if ui.button("Submit").clicked() {
                self.submit();
            }

            if let Some(json) = &self.last_submission {
                ui.separator();
                ui.label(egui::RichText::new(json).monospace());
            }
        });
    }
}
