// Settings persistence
// Timeline layout settings stored as TOML in the user's config directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::TimelineSettings;

const SETTINGS_FILE: &str = "timeline.toml";

/// `<config dir>/timeline.toml`, if the platform has a config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "BookingTimeline", "BookingTimeline")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<TimelineSettings> {
    if !path.exists() {
        log::debug!("No settings at {}, using defaults", path.display());
        return Ok(TimelineSettings::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings: TimelineSettings = toml::from_str(&data)
        .with_context(|| format!("failed to parse settings from {}", path.display()))?;
    settings
        .validate()
        .with_context(|| format!("invalid settings in {}", path.display()))?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &TimelineSettings) -> Result<()> {
    settings.validate().context("refusing to save invalid settings")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    Ok(())
}
