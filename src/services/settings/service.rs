use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::PickerSettings;

/// Overrides the settings file location when set.
pub const CONFIG_ENV_VAR: &str = "DATETIME_PICKER_CONFIG";

const CONFIG_FILE_NAME: &str = "picker.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `$DATETIME_PICKER_CONFIG`, else the platform config directory.
    pub fn from_environment() -> Option<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Some(Self::new(path));
        }
        Self::default_path().map(Self::new)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "DateTimePicker", "DateTimePicker")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the settings file
    pub fn load(&self) -> Result<PickerSettings> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: PickerSettings = toml::from_str(&text)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load_or_default(&self) -> PickerSettings {
        if !self.path.exists() {
            log::info!("No settings file at {}; using defaults", self.path.display());
            return PickerSettings::default();
        }
        match self.load() {
            Ok(settings) => {
                log::info!("Loaded picker settings from {}", self.path.display());
                settings
            }
            Err(err) => {
                log::warn!("{:#}; using defaults", err);
                PickerSettings::default()
            }
        }
    }

    /// Validate and write settings as TOML, creating parent directories
    pub fn save(&self, settings: &PickerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Refusing to save invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;
        log::debug!("Saved picker settings to {}", self.path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.save(&PickerSettings::default())
    }
}
