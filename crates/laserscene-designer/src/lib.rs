//! # LaserScene Designer
//!
//! The document model and exchange formats of the scene editor.
//!
//! ## Core Components
//!
//! ### Document
//! - **SceneDocument**: ordered element list, in-progress drawing state and
//!   the editing API used by the UI layer
//! - **UndoManager**: two-stack add/remove history keyed by element identity
//!
//! ### Exchange formats
//! - **Laser format**: `COLOR n` / `x,y` / `STOP` text stream for the device
//! - **CSV**: one row per polyline point or circle
//!
//! ## Architecture
//!
//! ```text
//! SceneDocument (editing API)
//!   ├── Vec<SceneElement> (z-order = table order)
//!   ├── UndoManager (history by ElementId)
//!   └── in-progress polyline points / circle center
//!
//! laser_format / csv_format
//!   └── Shape <-> text, with per-line diagnostics
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use laserscene_designer::{GridPoint, Rgb, SceneDocument};
//!
//! let mut doc = SceneDocument::new(255, 1);
//! doc.set_drawing_color(Rgb::RED);
//! doc.append_temp_point(GridPoint::new(0, 0));
//! doc.append_temp_point(GridPoint::new(10, 0));
//! let id = doc.commit_polyline().unwrap();
//!
//! assert_eq!(doc.len(), 1);
//! doc.undo();
//! assert!(doc.element(id).is_none());
//! ```

pub mod csv_format;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod history;
pub mod laser_format;
pub mod model;

pub use csv_format::{csv_to_string, parse_csv, write_csv, CSV_HEADER};
pub use diagnostics::{ImportMode, ImportReport, LineDiagnostic, ParsedScene};
pub use document::{DrawingTool, SceneDocument, TableRow, DEFAULT_CELL_SIZE, MAX_CELL_SIZE};
pub use error::{SceneError, SceneResult};
pub use history::{HistoryOp, UndoManager};
pub use laser_format::{laser_to_string, parse_laser, write_laser, LaserExportOptions};
pub use model::{Circle, ElementId, Polyline, SceneElement, Shape, ShapeKind};

pub use laserscene_core::{ColorCode, GridPoint, Rgb};
