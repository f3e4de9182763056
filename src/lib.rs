//! # LaserScene
//!
//! Editor core for small vector scenes drawn on a square integer grid and
//! sent to a three-color laser device.
//!
//! ## Architecture
//!
//! LaserScene is organized as a workspace with multiple crates:
//!
//! 1. **laserscene-core** - Grid points, RGB triples, color quantisation, rasterisation
//! 2. **laserscene-designer** - Scene document, undo history, laser and CSV codecs
//! 3. **laserscene-settings** - Persisted editor preferences and recent files
//! 4. **laserscene** - Logging setup and the `laserscene` command line tool
//!
//! ## Formats
//!
//! - **Laser stream**: `COLOR n` / `x,y` / `STOP` groups, circles rasterised
//! - **CSV**: `kind,x,y,r,g,b,radius`, one row per polyline point or circle

pub mod cli;

pub use laserscene_core::{
    circle_to_points, clamp_to_grid, code_to_rgb, rgb_to_code, ColorCode, CoreError, GridPoint,
    Rgb,
};

pub use laserscene_designer::{
    parse_csv, parse_laser, write_csv, write_laser, Circle, DrawingTool, ElementId, ImportMode,
    ImportReport, LaserExportOptions, LineDiagnostic, Polyline, SceneDocument, SceneElement,
    SceneError, SceneResult, Shape, ShapeKind, TableRow, UndoManager,
};

pub use laserscene_settings::{EditorSettings, RecentFiles, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// `RUST_LOG` takes precedence; otherwise INFO and above is shown.
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with_default(tracing::Level::INFO)
}

/// Initialize logging, using `level` when `RUST_LOG` is not set.
///
/// Output goes to stderr so command output on stdout stays machine readable.
pub fn init_logging_with_default(level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
