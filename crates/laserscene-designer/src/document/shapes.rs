//! Drawing and history operations for the scene document.

use laserscene_core::{clamp_to_grid, radius_between, GridPoint};
use tracing::debug;

use super::{DrawingTool, SceneDocument};
use crate::model::{Circle, ElementId, Polyline, SceneElement, Shape};

impl SceneDocument {
    /// Appends a point to the in-progress polyline, clamped to the grid.
    pub fn append_temp_point(&mut self, p: GridPoint) {
        self.temp_points.push(clamp_to_grid(p, self.grid_size));
    }

    /// Points of the polyline being drawn.
    pub fn temp_points(&self) -> &[GridPoint] {
        &self.temp_points
    }

    /// Center placed by the circle tool, if any.
    pub fn circle_center(&self) -> Option<GridPoint> {
        self.circle_center
    }

    /// Handles a placement from the pointer, already mapped to grid space.
    ///
    /// With the polyline tool the point extends the in-progress polyline.
    /// With the circle tool the first placement sets the center and the
    /// second commits a circle through that point. Returns the committed
    /// element, if any.
    pub fn place_point(&mut self, p: GridPoint) -> Option<ElementId> {
        let p = clamp_to_grid(p, self.grid_size);
        match self.tool {
            DrawingTool::Polyline => {
                self.temp_points.push(p);
                None
            }
            DrawingTool::Circle => match self.circle_center {
                None => {
                    self.circle_center = Some(p);
                    None
                }
                Some(center) => Some(self.commit_circle(center, radius_between(center, p))),
            },
        }
    }

    /// Commits the in-progress polyline if it has at least two points.
    ///
    /// Returns `None`, leaving everything untouched, when there is nothing to commit.
    pub fn commit_polyline(&mut self) -> Option<ElementId> {
        if self.temp_points.len() < 2 {
            return None;
        }
        let points = std::mem::take(&mut self.temp_points);
        let id = self.add_shape(Shape::Polyline(Polyline::new(points, self.drawing_color)));
        Some(id)
    }

    /// Commits a circle in the current drawing color. Radius 0 is allowed.
    pub fn commit_circle(&mut self, center: GridPoint, radius: u32) -> ElementId {
        let center = clamp_to_grid(center, self.grid_size);
        let id = self.add_shape(Shape::Circle(Circle::new(
            center,
            radius,
            self.drawing_color,
        )));
        self.circle_center = None;
        id
    }

    /// Appends a shape and records it in history. Interactive commits and
    /// imports both go through here.
    pub fn add_shape(&mut self, shape: Shape) -> ElementId {
        let id = self.generate_id();
        debug!(%id, kind = %shape.kind(), "element added");
        self.elements.push(SceneElement::new(id, shape));
        self.history.push_add(id);
        id
    }

    /// Removes an element by identity. Returns `false` if it is not on the list.
    pub fn remove_element(&mut self, id: ElementId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let element = self.elements.remove(index);
        debug!(%id, "element removed");
        self.history.push_remove(element);
        true
    }

    /// Drops in-progress points and circle center.
    pub fn clear_temporary(&mut self) {
        self.temp_points.clear();
        self.circle_center = None;
    }

    /// Empties the document and starts a fresh history.
    pub fn clear_all(&mut self) {
        debug!(removed = self.elements.len(), "document cleared");
        self.elements.clear();
        self.history = crate::history::UndoManager::new();
        self.clear_temporary();
    }

    /// Reverts the last add/remove. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.elements).is_some()
    }

    /// Re-applies the last undone add/remove. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.elements).is_some()
    }
}
