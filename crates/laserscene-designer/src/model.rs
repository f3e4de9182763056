//! Scene elements.
//!
//! A [`SceneElement`] pairs a stable [`ElementId`] with a [`Shape`]. History
//! and table edits address elements by id, so two geometrically identical
//! shapes are never confused.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use laserscene_core::{circle_to_points, GridPoint, Rgb};

/// Identity of an element within one document. Never reused by that document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(u64);

impl ElementId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discriminant of a [`Shape`], also the `kind` column of the CSV format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Polyline,
    Circle,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Polyline => "polyline",
            ShapeKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("polyline") {
            Ok(ShapeKind::Polyline)
        } else if s.eq_ignore_ascii_case("circle") {
            Ok(ShapeKind::Circle)
        } else {
            Err(format!("unknown kind '{s}'"))
        }
    }
}

/// An open chain of straight segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<GridPoint>,
    pub color: Rgb,
}

impl Polyline {
    pub fn new(points: Vec<GridPoint>, color: Rgb) -> Self {
        Self { points, color }
    }
}

/// A circle. Radius 0 is a legal degenerate point that exports no geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub center: GridPoint,
    pub radius: u32,
    pub color: Rgb,
}

impl Circle {
    pub fn new(center: GridPoint, radius: u32, color: Rgb) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }
}

/// Geometry of a scene element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Polyline(Polyline),
    Circle(Circle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Polyline(_) => ShapeKind::Polyline,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Shape::Polyline(p) => p.color,
            Shape::Circle(c) => c.color,
        }
    }

    pub fn set_color(&mut self, color: Rgb) {
        match self {
            Shape::Polyline(p) => p.color = color,
            Shape::Circle(c) => c.color = color,
        }
    }

    /// Points sent to the device: stored vertices for polylines, a
    /// `steps`-point ring for circles.
    pub fn device_points(&self, steps: u32) -> Vec<GridPoint> {
        match self {
            Shape::Polyline(p) => p.points.clone(),
            Shape::Circle(c) => circle_to_points(c.center, c.radius, steps),
        }
    }
}

impl From<Polyline> for Shape {
    fn from(p: Polyline) -> Self {
        Shape::Polyline(p)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

/// An element stored in a [`crate::SceneDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneElement {
    pub id: ElementId,
    pub shape: Shape,
}

impl SceneElement {
    pub fn new(id: ElementId, shape: Shape) -> Self {
        Self { id, shape }
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn color(&self) -> Rgb {
        self.shape.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!("Circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!(" polyline ".parse::<ShapeKind>(), Ok(ShapeKind::Polyline));
        assert!("arc".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_device_points_for_degenerate_circle() {
        let shape = Shape::from(Circle::new(GridPoint::new(5, 5), 0, Rgb::BLUE));
        assert!(shape.device_points(90).is_empty());
    }

    #[test]
    fn test_set_color_reaches_variant() {
        let mut shape = Shape::from(Polyline::new(vec![], Rgb::RED));
        shape.set_color(Rgb::GREEN);
        assert_eq!(shape.color(), Rgb::GREEN);
    }
}
