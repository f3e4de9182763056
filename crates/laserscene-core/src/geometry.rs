//! Grid geometry: clamping and circle rasterisation.
//!
//! All rounding in this module is half away from zero (`f64::round`).

use std::f64::consts::TAU;

use crate::types::GridPoint;

/// Default edge length of the square editing grid.
pub const DEFAULT_GRID_SIZE: i32 = 255;
/// Smallest grid the editor accepts.
pub const MIN_GRID_SIZE: i32 = 1;
/// Largest grid the editor accepts; also the device coordinate range.
pub const MAX_GRID_SIZE: i32 = 255;

/// Clamps a requested grid size into `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
pub fn clamp_grid_size(size: i32) -> i32 {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

/// Clamps each coordinate independently into `[0, grid_size]`.
///
/// A negative `grid_size` is treated as 0.
pub fn clamp_to_grid(p: GridPoint, grid_size: i32) -> GridPoint {
    let upper = grid_size.max(0);
    GridPoint::new(p.x.clamp(0, upper), p.y.clamp(0, upper))
}

/// Rasterises a circle into `steps` points.
///
/// Point `i` sits at angle `2π·i/steps`, starting on the positive x axis and
/// moving towards positive y. On the y-down editing grid that is clockwise.
/// The ring is open: the first point is not repeated at the end.
/// Returns an empty vector when `radius` or `steps` is zero.
pub fn circle_to_points(center: GridPoint, radius: u32, steps: u32) -> Vec<GridPoint> {
    if radius == 0 || steps == 0 {
        return Vec::new();
    }

    let cx = f64::from(center.x);
    let cy = f64::from(center.y);
    let r = f64::from(radius);
    let n = f64::from(steps);

    (0..steps)
        .map(|i| {
            let t = TAU * (f64::from(i) / n);
            GridPoint::new(
                (cx + r * t.cos()).round() as i32,
                (cy + r * t.sin()).round() as i32,
            )
        })
        .collect()
}

/// Radius of a circle centred on `center` passing through `edge`, rounded.
pub fn radius_between(center: GridPoint, edge: GridPoint) -> u32 {
    center.distance_to(&edge).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_grid() {
        assert_eq!(
            clamp_to_grid(GridPoint::new(-3, 300), 255),
            GridPoint::new(0, 255)
        );
        assert_eq!(
            clamp_to_grid(GridPoint::new(12, 40), 32),
            GridPoint::new(12, 32)
        );
        assert_eq!(clamp_to_grid(GridPoint::new(5, 5), -1), GridPoint::new(0, 0));
    }

    #[test]
    fn test_clamp_grid_size() {
        assert_eq!(clamp_grid_size(0), 1);
        assert_eq!(clamp_grid_size(1000), 255);
        assert_eq!(clamp_grid_size(64), 64);
    }

    #[test]
    fn test_quarter_steps_hit_axes() {
        let pts = circle_to_points(GridPoint::new(100, 100), 10, 4);
        assert_eq!(
            pts,
            vec![
                GridPoint::new(110, 100),
                GridPoint::new(100, 110),
                GridPoint::new(90, 100),
                GridPoint::new(100, 90),
            ]
        );
    }

    #[test]
    fn test_degenerate_circles_are_empty() {
        assert!(circle_to_points(GridPoint::new(1, 1), 0, 90).is_empty());
        assert!(circle_to_points(GridPoint::new(1, 1), 5, 0).is_empty());
    }

    #[test]
    fn test_radius_between_rounds() {
        assert_eq!(radius_between(GridPoint::new(0, 0), GridPoint::new(3, 4)), 5);
        // hypot(1, 1) = 1.414...
        assert_eq!(radius_between(GridPoint::new(0, 0), GridPoint::new(1, 1)), 1);
        // hypot(1, 2) = 2.236...
        assert_eq!(radius_between(GridPoint::new(0, 0), GridPoint::new(2, 1)), 2);
    }
}
