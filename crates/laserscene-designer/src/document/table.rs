//! Element table: one row per polyline point and per circle.
//!
//! Edits made through the table change elements in place and are not
//! recorded in the undo history.

use laserscene_core::{clamp_to_grid, ColorCode, GridPoint};
use serde::Serialize;
use tracing::debug;

use super::SceneDocument;
use crate::model::{ElementId, Shape, ShapeKind};

/// A flattened view of one table line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Position of the owning element in the list.
    pub element_index: usize,
    /// Point index inside a polyline; always 0 for circles.
    pub sub_index: usize,
    pub id: ElementId,
    pub kind: ShapeKind,
    pub color: ColorCode,
    pub x: i32,
    pub y: i32,
    pub radius: Option<u32>,
}

impl SceneDocument {
    /// Builds the table rows in element order.
    pub fn table_rows(&self) -> Vec<TableRow> {
        let mut rows = Vec::new();
        for (element_index, el) in self.elements.iter().enumerate() {
            let color = ColorCode::from_rgb(el.color());
            match &el.shape {
                Shape::Polyline(poly) => {
                    rows.extend(poly.points.iter().enumerate().map(|(sub_index, p)| {
                        TableRow {
                            element_index,
                            sub_index,
                            id: el.id,
                            kind: ShapeKind::Polyline,
                            color,
                            x: p.x,
                            y: p.y,
                            radius: None,
                        }
                    }));
                }
                Shape::Circle(circle) => rows.push(TableRow {
                    element_index,
                    sub_index: 0,
                    id: el.id,
                    kind: ShapeKind::Circle,
                    color,
                    x: circle.center.x,
                    y: circle.center.y,
                    radius: Some(circle.radius),
                }),
            }
        }
        rows
    }

    /// Maps a table row number to the element and point it shows.
    pub fn row_target(&self, row: usize) -> Option<(ElementId, usize)> {
        let mut remaining = row;
        for el in &self.elements {
            let span = match &el.shape {
                Shape::Polyline(poly) => poly.points.len(),
                Shape::Circle(_) => 1,
            };
            if remaining < span {
                return Some((el.id, remaining));
            }
            remaining -= span;
        }
        None
    }

    /// Moves one point of an element, clamped to the grid.
    ///
    /// For a circle, `sub_index` 0 is the center. Returns `false` if the
    /// element or point does not exist.
    pub fn mutate_point(&mut self, id: ElementId, sub_index: usize, p: GridPoint) -> bool {
        let p = clamp_to_grid(p, self.grid_size);
        let Some(el) = self.element_mut(id) else {
            return false;
        };
        let target = match &mut el.shape {
            Shape::Polyline(poly) => poly.points.get_mut(sub_index),
            Shape::Circle(circle) if sub_index == 0 => Some(&mut circle.center),
            Shape::Circle(_) => None,
        };
        match target {
            Some(slot) => {
                *slot = p;
                debug!(%id, sub_index, x = p.x, y = p.y, "point edited");
                true
            }
            None => false,
        }
    }

    /// Sets a circle's radius; negative values become 0. Returns `false` for
    /// a missing element or a polyline.
    pub fn mutate_radius(&mut self, id: ElementId, radius: i64) -> bool {
        let radius = u32::try_from(radius.max(0)).unwrap_or(u32::MAX);
        match self.element_mut(id).map(|el| &mut el.shape) {
            Some(Shape::Circle(circle)) => {
                circle.radius = radius;
                debug!(%id, radius, "radius edited");
                true
            }
            _ => false,
        }
    }

    /// Recolors an element to the primary of `code`.
    pub fn set_element_color(&mut self, id: ElementId, code: ColorCode) -> bool {
        let Some(el) = self.element_mut(id) else {
            return false;
        };
        el.shape.set_color(code.rgb());
        debug!(%id, %code, "color edited");
        true
    }
}
