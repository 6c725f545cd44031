// Settings persistence for the picker

mod service;

pub use service::{SettingsService, CONFIG_ENV_VAR};
