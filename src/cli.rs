//! Command line front end: format conversion and scene inspection.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use laserscene_designer::{ImportMode, ImportReport, SceneDocument, DEFAULT_CELL_SIZE};
use laserscene_settings::{default_settings_path, EditorSettings};

/// Convert and inspect LaserScene files.
#[derive(Debug, Parser)]
#[command(
    name = "laserscene",
    version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about
)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert between the laser stream and CSV formats
    Convert(ConvertArgs),
    /// Print the element table of a file
    Inspect(InspectArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Input file (`.csv` or laser stream)
    pub input: PathBuf,

    /// Output file (`.csv` or laser stream)
    pub output: PathBuf,

    /// Points per rasterised circle
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub steps: Option<u32>,

    /// Rescale coordinates to 0..=255 on laser export
    #[arg(long)]
    pub normalize: bool,

    /// Editing grid size the coordinates live on
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=255))]
    pub grid_size: Option<i32>,

    /// Reject input files with malformed records
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Input file (`.csv` or laser stream)
    pub input: PathBuf,

    /// Reject input files with malformed records
    #[arg(long)]
    pub strict: bool,
}

/// File format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Laser,
    Csv,
}

impl FileFormat {
    /// `.csv` (any case) is CSV; everything else is a laser stream.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Laser,
        }
    }
}

fn import_mode(strict: bool) -> ImportMode {
    if strict {
        ImportMode::Strict
    } else {
        ImportMode::Lenient
    }
}

/// Reads `path` into a fresh document on a `grid_size` grid.
pub fn load_document(
    path: &Path,
    grid_size: i32,
    mode: ImportMode,
) -> Result<(SceneDocument, ImportReport)> {
    let mut doc = SceneDocument::new(grid_size, DEFAULT_CELL_SIZE);
    let report = match FileFormat::from_path(path) {
        FileFormat::Csv => doc.import_csv(path, mode),
        FileFormat::Laser => doc.import_laser(path, mode),
    }
    .with_context(|| format!("Failed to import {}", path.display()))?;
    Ok((doc, report))
}

/// Converts one file into another, updating `settings` with the result.
pub fn convert(args: &ConvertArgs, settings: &mut EditorSettings) -> Result<ImportReport> {
    let grid_size = args.grid_size.unwrap_or(settings.grid_size);
    let steps = args.steps.unwrap_or(settings.circle_steps);
    let normalize = args.normalize || settings.normalize_export;

    let (doc, report) = load_document(&args.input, grid_size, import_mode(args.strict))?;

    match FileFormat::from_path(&args.output) {
        FileFormat::Csv => doc.export_csv(&args.output),
        FileFormat::Laser => doc.export_laser(&args.output, steps, normalize),
    }
    .with_context(|| format!("Failed to export {}", args.output.display()))?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        elements = doc.len(),
        "converted"
    );
    settings.add_recent_file(&args.input);
    settings.record_export(&args.output);
    Ok(report)
}

/// Writes the element table of `args.input` to `out`.
pub fn inspect(
    args: &InspectArgs,
    settings: &EditorSettings,
    out: &mut impl Write,
) -> Result<()> {
    let (doc, report) = load_document(&args.input, settings.grid_size, import_mode(args.strict))?;

    writeln!(out, "element\tpoint\tid\tkind\tcolor\tx\ty\tradius")?;
    for row in doc.table_rows() {
        let radius = row.radius.map(|r| r.to_string()).unwrap_or_default();
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.element_index,
            row.sub_index,
            row.id,
            row.kind,
            row.color.label(),
            row.x,
            row.y,
            radius
        )?;
    }
    for d in &report.diagnostics {
        writeln!(out, "# skipped {d}")?;
    }
    Ok(())
}

/// Settings location and contents for this invocation.
pub fn load_settings(explicit: Option<&Path>) -> Result<(Option<PathBuf>, EditorSettings)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => match default_settings_path() {
            Ok(path) => Some(path),
            Err(err) => {
                warn!("{err}; using default settings");
                None
            }
        },
    };
    let settings = match &path {
        Some(path) => EditorSettings::load_or_default(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => EditorSettings::default(),
    };
    Ok((path, settings))
}

/// Runs a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let (settings_path, mut settings) = load_settings(cli.settings.as_deref())?;

    match &cli.command {
        Command::Convert(args) => {
            // Skipped records are already logged at warn level
            convert(args, &mut settings)?;
            if let Some(path) = &settings_path {
                // Not fatal: the conversion itself succeeded
                if let Err(err) = settings.save_to_file(path) {
                    warn!(path = %path.display(), "could not save settings: {err}");
                }
            }
        }
        Command::Inspect(args) => {
            let stdout = std::io::stdout();
            inspect(args, &settings, &mut stdout.lock())?;
        }
    }
    Ok(())
}
