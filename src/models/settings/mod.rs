// Settings module
// Picker behaviour and popup geometry presets

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{field} must be a positive, finite size (got {value})")]
    InvalidSize { field: &'static str, value: f32 },
    #[error("{field} must be zero or more (got {value})")]
    NegativeSpacing { field: &'static str, value: f32 },
    #[error("{0} must not be empty")]
    EmptyFormat(&'static str),
    #[error("{field} is not a valid strftime format: '{format}'")]
    InvalidFormat { field: &'static str, format: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// Date+time mode (explicit confirm) instead of date-only (commit on pick)
    pub show_time: bool,
    pub editable: bool,
    pub popup_width: f32,
    /// Popup height preset used when the time grid is hidden
    pub date_only_height: f32,
    /// Popup height preset used when the time grid is shown
    pub date_time_height: f32,
    /// Distance between trigger and popup
    pub gap: f32,
    /// Distance kept from the right viewport edge when clamping
    pub margin: f32,
    pub date_format: String,
    pub time_format: String,
    pub placeholder: String,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            show_time: false,
            editable: true,
            popup_width: 300.0,
            date_only_height: 350.0,
            date_time_height: 520.0,
            gap: 4.0,
            margin: 8.0,
            date_format: "%d %b %Y".to_string(),
            time_format: "%H:%M".to_string(),
            placeholder: "Select date".to_string(),
        }
    }
}

impl PickerSettings {
    /// Height preset for the current mode.
    pub fn popup_height(&self) -> f32 {
        if self.show_time {
            self.date_time_height
        } else {
            self.date_only_height
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("popup_width", self.popup_width),
            ("date_only_height", self.date_only_height),
            ("date_time_height", self.date_time_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::InvalidSize { field, value });
            }
        }

        for (field, value) in [("gap", self.gap), ("margin", self.margin)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::NegativeSpacing { field, value });
            }
        }

        for (field, format) in [("date_format", &self.date_format), ("time_format", &self.time_format)] {
            if format.trim().is_empty() {
                return Err(SettingsError::EmptyFormat(field));
            }
            if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
                return Err(SettingsError::InvalidFormat {
                    field,
                    format: format.clone(),
                });
            }
        }

        Ok(())
    }
}
