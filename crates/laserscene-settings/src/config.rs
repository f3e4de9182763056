//! Editor settings and their persistence.
//!
//! Settings are stored as JSON or TOML, picked by file extension. The
//! default location is `<config dir>/laserscene/settings.toml`.

use laserscene_core::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};
use crate::recent::RecentFiles;

/// Valid range for `cell_size`.
pub const CELL_SIZE_RANGE: RangeInclusive<i32> = 1..=16;
/// Valid range for `circle_steps`.
pub const CIRCLE_STEPS_RANGE: RangeInclusive<u32> = 8..=360;

const APP_DIR: &str = "laserscene";
const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Json,
    Toml,
}

impl SettingsFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Persisted editor preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Edge length of the editing grid
    pub grid_size: i32,
    /// On-screen pixels per grid cell
    pub cell_size: i32,
    /// Points per circle in laser exports
    pub circle_steps: u32,
    /// Rescale exported coordinates to 0..=255
    pub normalize_export: bool,
    /// Directory of the last export, used as the next dialog start
    pub last_export_dir: Option<PathBuf>,
    /// Recently opened or written files
    pub recent_files: RecentFiles,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_size: 1,
            circle_steps: 90,
            normalize_export: false,
            last_export_dir: None,
            recent_files: RecentFiles::new(),
        }
    }
}

impl EditorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a `.json` or `.toml` file.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = SettingsFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;

        let mut settings: Self = match format {
            SettingsFormat::Json => serde_json::from_str(&content)?,
            SettingsFormat::Toml => toml::from_str(&content)?,
        };
        settings.recent_files.truncate();
        settings.validate()?;

        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save settings to a `.json` or `.toml` file, creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = SettingsFormat::from_path(path)?;

        let content = match format {
            SettingsFormat::Json => serde_json::to_string_pretty(self)?,
            SettingsFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;

        info!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Check every value against its valid range.
    pub fn validate(&self) -> SettingsResult<()> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(SettingsError::invalid(
                "grid_size",
                format!("{} is outside {MIN_GRID_SIZE}..={MAX_GRID_SIZE}", self.grid_size),
            ));
        }
        if !CELL_SIZE_RANGE.contains(&self.cell_size) {
            return Err(SettingsError::invalid(
                "cell_size",
                format!("{} is outside {CELL_SIZE_RANGE:?}", self.cell_size),
            ));
        }
        if !CIRCLE_STEPS_RANGE.contains(&self.circle_steps) {
            return Err(SettingsError::invalid(
                "circle_steps",
                format!("{} is outside {CIRCLE_STEPS_RANGE:?}", self.circle_steps),
            ));
        }
        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: impl Into<PathBuf>) {
        self.recent_files.add(path);
    }

    /// Remember the directory an export was written to.
    pub fn record_export(&mut self, path: &Path) {
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_export_dir = Some(dir.to_path_buf());
        }
        self.add_recent_file(path);
    }
}

/// Platform default location of the settings file.
pub fn default_settings_path() -> SettingsResult<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        SettingsError::ConfigDirectory("no config directory on this platform".to_string())
    })?;
    Ok(base.join(APP_DIR).join(SETTINGS_FILE))
}
