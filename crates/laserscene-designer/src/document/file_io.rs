//! File I/O operations (export, import) for the scene document.
//!
//! Files are read completely and parsed before the document changes, and
//! output is rendered in memory before anything is written, so an I/O
//! failure never leaves the document half-updated.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{info, warn};

use super::SceneDocument;
use crate::csv_format::{csv_to_string, parse_csv};
use crate::diagnostics::{ImportMode, ImportReport, ParsedScene};
use crate::error::{SceneError, SceneResult};
use crate::laser_format::{laser_to_string, parse_laser, LaserExportOptions};

impl SceneDocument {
    /// Export options for this document's grid.
    pub fn laser_options(&self, circle_steps: u32, normalize: bool) -> LaserExportOptions {
        LaserExportOptions {
            circle_steps,
            normalize,
            grid_size: self.grid_size,
        }
    }

    /// Renders the laser stream without touching the file system.
    pub fn to_laser_string(&self, circle_steps: u32, normalize: bool) -> io::Result<String> {
        laser_to_string(self.shapes(), &self.laser_options(circle_steps, normalize))
    }

    /// Writes all elements to `path` in the laser format.
    pub fn export_laser(
        &self,
        path: impl AsRef<Path>,
        circle_steps: u32,
        normalize: bool,
    ) -> SceneResult<()> {
        let path = path.as_ref();
        let text = self
            .to_laser_string(circle_steps, normalize)
            .map_err(|e| SceneError::io(path, e))?;
        fs::write(path, text).map_err(|e| SceneError::io(path, e))?;
        info!(path = %path.display(), elements = self.len(), "exported laser stream");
        Ok(())
    }

    /// Reads a laser stream and appends its groups as polylines.
    pub fn import_laser(
        &mut self,
        path: impl AsRef<Path>,
        mode: ImportMode,
    ) -> SceneResult<ImportReport> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SceneError::io(path, e))?;
        let report = self.commit_parsed(parse_laser(&text), mode)?;
        info!(
            path = %path.display(),
            added = report.added.len(),
            skipped = report.diagnostics.len(),
            "imported laser stream"
        );
        Ok(report)
    }

    /// Renders the CSV text without touching the file system.
    pub fn to_csv_string(&self) -> SceneResult<String> {
        csv_to_string(self.shapes())
    }

    /// Writes all elements to `path` as CSV.
    pub fn export_csv(&self, path: impl AsRef<Path>) -> SceneResult<()> {
        let path = path.as_ref();
        let text = self.to_csv_string()?;
        fs::write(path, text).map_err(|e| SceneError::io(path, e))?;
        info!(path = %path.display(), elements = self.len(), "exported csv");
        Ok(())
    }

    /// Reads a CSV file and appends its elements.
    pub fn import_csv(
        &mut self,
        path: impl AsRef<Path>,
        mode: ImportMode,
    ) -> SceneResult<ImportReport> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SceneError::io(path, e))?;
        let report = self.commit_parsed(parse_csv(text.as_bytes())?, mode)?;
        info!(
            path = %path.display(),
            added = report.added.len(),
            skipped = report.diagnostics.len(),
            "imported csv"
        );
        Ok(report)
    }

    /// Appends parsed shapes through the regular add path.
    ///
    /// In strict mode any diagnostic rejects the whole batch and the document
    /// is left as it was.
    pub fn commit_parsed(
        &mut self,
        parsed: ParsedScene,
        mode: ImportMode,
    ) -> SceneResult<ImportReport> {
        let ParsedScene {
            shapes,
            diagnostics,
        } = parsed;

        if mode == ImportMode::Strict && !diagnostics.is_empty() {
            return Err(SceneError::Malformed { diagnostics });
        }
        for d in &diagnostics {
            warn!(line = d.line, content = %d.content, "skipped record: {}", d.reason);
        }

        let added = shapes.into_iter().map(|s| self.add_shape(s)).collect();
        Ok(ImportReport { added, diagnostics })
    }
}
