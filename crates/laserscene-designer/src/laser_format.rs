//! Laser device stream format.
//!
//! ```text
//! COLOR <1|2|3>
//! <int>,<int>
//! ...
//! STOP
//! ```
//!
//! One group per element. Circles are rasterised on export, so every group
//! reads back as a polyline; a circle does not survive a round trip.

use std::io::{self, Write};

use laserscene_core::{ColorCode, GridPoint, Rgb, MAX_GRID_SIZE};
use tracing::debug;

use crate::diagnostics::{LineDiagnostic, ParsedScene};
use crate::model::{Polyline, Shape};

const COLOR_DIRECTIVE: &str = "COLOR";
const STOP_DIRECTIVE: &str = "STOP";

/// Export parameters for the laser stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaserExportOptions {
    /// Points per rasterised circle.
    pub circle_steps: u32,
    /// Rescale coordinates from `[0, grid_size]` to `[0, 255]`.
    pub normalize: bool,
    /// Edge length of the editing grid the coordinates live on.
    pub grid_size: i32,
}

impl Default for LaserExportOptions {
    fn default() -> Self {
        Self {
            circle_steps: 90,
            normalize: false,
            grid_size: MAX_GRID_SIZE,
        }
    }
}

impl LaserExportOptions {
    fn output_point(&self, p: GridPoint) -> GridPoint {
        if self.normalize {
            GridPoint::new(
                normalize_coordinate(p.x, self.grid_size),
                normalize_coordinate(p.y, self.grid_size),
            )
        } else {
            p
        }
    }
}

/// `round(value / max(1, grid_size) * 255)`, rounding half away from zero.
pub fn normalize_coordinate(value: i32, grid_size: i32) -> i32 {
    let span = f64::from(grid_size.max(1));
    (f64::from(value) / span * 255.0).round() as i32
}

/// Writes `shapes` as a laser stream, one `COLOR`/points/`STOP` group each.
pub fn write_laser<'a, W: Write>(
    shapes: impl IntoIterator<Item = &'a Shape>,
    options: &LaserExportOptions,
    out: &mut W,
) -> io::Result<()> {
    for shape in shapes {
        writeln!(out, "{} {}", COLOR_DIRECTIVE, shape.color().code())?;
        for p in shape.device_points(options.circle_steps) {
            let p = options.output_point(p);
            writeln!(out, "{},{}", p.x, p.y)?;
        }
        writeln!(out, "{}", STOP_DIRECTIVE)?;
    }
    Ok(())
}

/// Renders `shapes` as a laser stream string.
pub fn laser_to_string<'a>(
    shapes: impl IntoIterator<Item = &'a Shape>,
    options: &LaserExportOptions,
) -> io::Result<String> {
    let mut buf = Vec::new();
    write_laser(shapes, options, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parses a laser stream. Never fails: unreadable lines become diagnostics.
///
/// Points seen before the first `COLOR` join the first color group. A `STOP`
/// or the end of the stream with points but no color discards those points.
/// An integer code other than 1 or 2 selects blue without a diagnostic.
pub fn parse_laser(text: &str) -> ParsedScene {
    let mut parser = LaserParser::default();
    let mut last_line = 0;
    for (idx, raw) in text.lines().enumerate() {
        last_line = idx + 1;
        parser.feed(last_line, raw.trim());
    }
    parser.finish(last_line)
}

#[derive(Default)]
struct LaserParser {
    color: Option<Rgb>,
    points: Vec<GridPoint>,
    out: ParsedScene,
}

impl LaserParser {
    fn feed(&mut self, line: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        if starts_with_ignore_case(text, COLOR_DIRECTIVE) {
            if self.color.is_some() {
                self.flush();
            }
            self.color = Some(self.color_code(line, text).rgb());
        } else if text.eq_ignore_ascii_case(STOP_DIRECTIVE) {
            if self.color.is_some() {
                self.flush();
            } else if !self.points.is_empty() {
                self.diagnose(line, text, "points without a COLOR directive discarded");
                self.points.clear();
            }
        } else {
            match parse_coordinate(text) {
                Some(p) => self.points.push(p),
                None => self.diagnose(line, text, "expected <int>,<int>"),
            }
        }
    }

    fn color_code(&mut self, line: usize, text: &str) -> ColorCode {
        match text.split_whitespace().nth(1).map(str::parse::<i64>) {
            Some(Ok(code)) => ColorCode::from_code(code),
            Some(Err(_)) => {
                self.diagnose(line, text, "invalid color code, using red");
                ColorCode::Red
            }
            None => {
                self.diagnose(line, text, "missing color code, using red");
                ColorCode::Red
            }
        }
    }

    fn flush(&mut self) {
        if let (Some(color), false) = (self.color, self.points.is_empty()) {
            let points = std::mem::take(&mut self.points);
            self.out
                .shapes
                .push(Shape::Polyline(Polyline::new(points, color)));
        }
    }

    fn diagnose(&mut self, line: usize, text: &str, reason: &str) {
        self.out
            .diagnostics
            .push(LineDiagnostic::new(line, text, reason));
    }

    fn finish(mut self, last_line: usize) -> ParsedScene {
        if self.color.is_some() {
            self.flush();
        } else if !self.points.is_empty() {
            let dropped = self.points.len();
            self.diagnose(
                last_line,
                "",
                &format!("{dropped} point(s) without a COLOR directive discarded"),
            );
        }
        debug!(
            shapes = self.out.shapes.len(),
            skipped = self.out.diagnostics.len(),
            "parsed laser stream"
        );
        self.out
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// `"<x>,<y>"` with decimal numbers, truncated toward zero.
fn parse_coordinate(text: &str) -> Option<GridPoint> {
    let (x, y) = text.split_once(',')?;
    Some(GridPoint::new(parse_number(x)?, parse_number(y)?))
}

fn parse_number(s: &str) -> Option<i32> {
    let v = s.trim().parse::<f64>().ok()?;
    v.is_finite().then(|| v.trunc() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_propagate() {
        let shape = Shape::Polyline(Polyline::new(vec![GridPoint::new(1, 1)], Rgb::RED));
        let err = write_laser([&shape], &LaserExportOptions::default(), &mut FailingWriter)
            .unwrap_err();
        assert_eq!(err.to_string(), "disk full");

        let text = laser_to_string([&shape], &LaserExportOptions::default()).unwrap();
        assert_eq!(text, "COLOR 1\n1,1\nSTOP\n");
    }

    #[test]
    fn test_normalize_coordinate() {
        assert_eq!(normalize_coordinate(0, 100), 0);
        assert_eq!(normalize_coordinate(100, 100), 255);
        assert_eq!(normalize_coordinate(50, 100), 128); // 127.5 rounds away from zero
        assert_eq!(normalize_coordinate(3, 0), 765); // grid size 0 behaves as 1
    }

    #[test]
    fn test_parse_coordinate_variants() {
        assert_eq!(parse_coordinate("3,4"), Some(GridPoint::new(3, 4)));
        assert_eq!(parse_coordinate(" 3 , 4 "), Some(GridPoint::new(3, 4)));
        assert_eq!(parse_coordinate("3.9,-4.9"), Some(GridPoint::new(3, -4)));
        assert_eq!(parse_coordinate("3;4"), None);
        assert_eq!(parse_coordinate("1,2,3"), None);
        assert_eq!(parse_coordinate("inf,2"), None);
    }

    #[test]
    fn test_directive_prefix_is_case_insensitive() {
        assert!(starts_with_ignore_case("color 2", "COLOR"));
        assert!(!starts_with_ignore_case("COL", "COLOR"));
        assert!(!starts_with_ignore_case("žžž", "COLOR"));
    }
}
