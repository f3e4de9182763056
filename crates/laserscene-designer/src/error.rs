//! Error types for the designer crate.
//!
//! Only genuine failures are errors here. Nothing-to-commit, undo on an empty
//! stack and removal of an absent element are ordinary outcomes reported via
//! `Option`/`bool` return values.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::diagnostics::LineDiagnostic;

/// Errors that can occur while exporting or importing a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSV reader or writer failed outside of a single record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A strict import found records it could not interpret.
    #[error("Import rejected: {} malformed record(s)", .diagnostics.len())]
    Malformed { diagnostics: Vec<LineDiagnostic> },
}

impl SceneError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_error_display() {
        let err = SceneError::io(
            "/tmp/missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "I/O error on /tmp/missing.txt: not found");

        let err = SceneError::Malformed {
            diagnostics: vec![
                LineDiagnostic::new(3, "abc", "expected <int>,<int>"),
                LineDiagnostic::new(9, "1;2", "expected <int>,<int>"),
            ],
        };
        assert_eq!(err.to_string(), "Import rejected: 2 malformed record(s)");
    }
}
