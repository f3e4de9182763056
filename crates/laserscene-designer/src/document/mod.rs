//! Scene document: the single source of truth the UI layer edits.
//!
//! This module is split into submodules:
//! - `shapes`: drawing, commit, removal, undo/redo
//! - `table`: element table rows and in-place table edits
//! - `file_io`: laser and CSV export/import

mod file_io;
mod shapes;
mod table;

pub use table::TableRow;

use laserscene_core::{clamp_grid_size, GridPoint, Rgb, DEFAULT_GRID_SIZE};
use tracing::debug;

use crate::history::UndoManager;
use crate::model::{ElementId, SceneElement, Shape};

/// Default on-screen size of one grid cell, in pixels.
pub const DEFAULT_CELL_SIZE: i32 = 1;
/// Largest accepted cell size.
pub const MAX_CELL_SIZE: i32 = 16;

/// Shape the next pointer placements build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawingTool {
    #[default]
    Polyline,
    Circle,
}

/// An editable scene.
///
/// Elements are kept in insertion order, which is both z-order and table
/// order. All mutation goes through this type so that history entries stay
/// in step with the list.
#[derive(Debug, Clone)]
pub struct SceneDocument {
    elements: Vec<SceneElement>,
    history: UndoManager,
    grid_size: i32,
    cell_size: i32,
    drawing_color: Rgb,
    tool: DrawingTool,
    temp_points: Vec<GridPoint>,
    circle_center: Option<GridPoint>,
    next_id: u64,
}

impl SceneDocument {
    /// Creates an empty document. Sizes are clamped into their valid ranges.
    pub fn new(grid_size: i32, cell_size: i32) -> Self {
        Self {
            elements: Vec::new(),
            history: UndoManager::new(),
            grid_size: clamp_grid_size(grid_size),
            cell_size: cell_size.clamp(1, MAX_CELL_SIZE),
            drawing_color: Rgb::RED,
            tool: DrawingTool::Polyline,
            temp_points: Vec::new(),
            circle_center: None,
            next_id: 1,
        }
    }

    /// Sets the color used for subsequently committed shapes.
    pub fn set_drawing_color(&mut self, color: Rgb) {
        self.drawing_color = color;
    }

    pub fn drawing_color(&self) -> Rgb {
        self.drawing_color
    }

    /// Selects the drawing tool. In-progress state is kept.
    pub fn set_tool(&mut self, tool: DrawingTool) {
        debug!(?tool, "tool selected");
        self.tool = tool;
    }

    pub fn tool(&self) -> DrawingTool {
        self.tool
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// Changes the grid edge length (clamped to 1..=255). Existing
    /// coordinates are left as they are.
    pub fn set_grid_size(&mut self, grid_size: i32) {
        self.grid_size = clamp_grid_size(grid_size);
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn set_cell_size(&mut self, cell_size: i32) {
        self.cell_size = cell_size.clamp(1, MAX_CELL_SIZE);
    }

    /// Committed elements in z-order.
    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.elements.iter().map(|el| &el.shape)
    }

    pub fn element(&self, id: ElementId) -> Option<&SceneElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    /// Position of an element in the list.
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|el| el.id == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Read access to the history, e.g. for enabling toolbar buttons.
    pub fn history(&self) -> &UndoManager {
        &self.history
    }

    fn generate_id(&mut self) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut SceneElement> {
        self.elements.iter_mut().find(|el| el.id == id)
    }
}

impl Default for SceneDocument {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, DEFAULT_CELL_SIZE)
    }
}
