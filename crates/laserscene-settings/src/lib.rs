//! LaserScene Settings Crate
//!
//! Editor preferences (grid and cell size, circle export steps, normalize
//! flag, last export directory) and the recent-files list, persisted as
//! JSON or TOML.

pub mod config;
pub mod error;
pub mod recent;

pub use config::{default_settings_path, EditorSettings, CELL_SIZE_RANGE, CIRCLE_STEPS_RANGE};
pub use error::{SettingsError, SettingsResult};
pub use recent::{RecentFiles, MAX_RECENT_FILES};
