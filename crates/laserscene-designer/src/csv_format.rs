//! Tabular exchange format.
//!
//! Header `kind,x,y,r,g,b,radius`. Polylines write one row per point with a
//! blank radius; circles write a single row. Rows carry the element's stored
//! RGB. On import, consecutive polyline rows with the same `(r,g,b)` form one
//! element; a color change or a circle row closes the current group. Imported
//! colors are quantised to their primary.
//!
//! Parsing is lenient: a field that is not a number reads as 0 and is
//! reported as a diagnostic, so callers can choose to reject the file.

use std::io;

use laserscene_core::{GridPoint, Rgb};
use tracing::debug;

use crate::diagnostics::{LineDiagnostic, ParsedScene};
use crate::error::SceneResult;
use crate::model::{Circle, Polyline, Shape, ShapeKind};

/// Column names, in output order.
pub const CSV_HEADER: [&str; 7] = ["kind", "x", "y", "r", "g", "b", "radius"];

/// Writes `shapes` as CSV with each element's stored RGB.
pub fn write_csv<'a, W: io::Write>(
    shapes: impl IntoIterator<Item = &'a Shape>,
    out: W,
) -> SceneResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;

    for shape in shapes {
        let color = shape.color();
        let (r, g, b) = (color.r.to_string(), color.g.to_string(), color.b.to_string());
        match shape {
            Shape::Polyline(poly) => {
                for p in &poly.points {
                    let (x, y) = (p.x.to_string(), p.y.to_string());
                    writer.write_record([
                        ShapeKind::Polyline.as_str(),
                        x.as_str(),
                        y.as_str(),
                        r.as_str(),
                        g.as_str(),
                        b.as_str(),
                        "",
                    ])?;
                }
            }
            Shape::Circle(circle) => {
                let (x, y) = (circle.center.x.to_string(), circle.center.y.to_string());
                let radius = circle.radius.to_string();
                writer.write_record([
                    ShapeKind::Circle.as_str(),
                    x.as_str(),
                    y.as_str(),
                    r.as_str(),
                    g.as_str(),
                    b.as_str(),
                    radius.as_str(),
                ])?;
            }
        }
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Renders `shapes` as a CSV string.
pub fn csv_to_string<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> SceneResult<String> {
    let mut buf = Vec::new();
    write_csv(shapes, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parses CSV text into shapes.
///
/// Fails only when the header cannot be read; bad rows become diagnostics.
pub fn parse_csv<R: io::Read>(input: R) -> SceneResult<ParsedScene> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let columns = Columns::from_header(reader.headers()?);
    let mut builder = CsvSceneBuilder::default();

    for result in reader.records() {
        match result {
            Ok(record) => {
                let line = record
                    .position()
                    .map_or(0, |pos| usize::try_from(pos.line()).unwrap_or(usize::MAX));
                builder.row(line, &columns, &record);
            }
            Err(err) => {
                let line = err
                    .position()
                    .map_or(0, |pos| usize::try_from(pos.line()).unwrap_or(usize::MAX));
                builder.diagnose(line, "", &format!("unreadable row: {err}"));
            }
        }
    }

    let parsed = builder.finish();
    debug!(
        shapes = parsed.shapes.len(),
        skipped = parsed.diagnostics.len(),
        "parsed csv"
    );
    Ok(parsed)
}

/// Column positions looked up by header name, so column order is free.
struct Columns {
    kind: Option<usize>,
    x: Option<usize>,
    y: Option<usize>,
    r: Option<usize>,
    g: Option<usize>,
    b: Option<usize>,
    radius: Option<usize>,
}

impl Columns {
    fn from_header(header: &csv::StringRecord) -> Self {
        let find = |name: &str| header.iter().position(|h| h.eq_ignore_ascii_case(name));
        Self {
            kind: find("kind"),
            x: find("x"),
            y: find("y"),
            r: find("r"),
            g: find("g"),
            b: find("b"),
            radius: find("radius"),
        }
    }
}

#[derive(Default)]
struct CsvSceneBuilder {
    group_color: Option<Rgb>,
    group_points: Vec<GridPoint>,
    out: ParsedScene,
}

impl CsvSceneBuilder {
    fn row(&mut self, line: usize, columns: &Columns, record: &csv::StringRecord) {
        let raw = record.iter().collect::<Vec<_>>().join(",");
        let field = |col: Option<usize>| col.map(|i| record.get(i).unwrap_or(""));

        let kind = match field(columns.kind).map(str::parse::<ShapeKind>) {
            None => ShapeKind::Polyline,
            Some(Ok(kind)) => kind,
            Some(Err(reason)) => {
                self.diagnose(line, &raw, &reason);
                return;
            }
        };

        let mut number = |name: &str, col: Option<usize>| -> i64 {
            match field(col) {
                None => 0,
                Some(text) => coerce_number(text).unwrap_or_else(|| {
                    self.out.diagnostics.push(LineDiagnostic::new(
                        line,
                        raw.as_str(),
                        format!("non-numeric {name} read as 0"),
                    ));
                    0
                }),
            }
        };

        let x = number("x", columns.x);
        let y = number("y", columns.y);
        let (r, g, b) = (
            number("r", columns.r),
            number("g", columns.g),
            number("b", columns.b),
        );
        // Blank radius is 0; polyline rows ignore the column entirely
        let radius = match field(columns.radius) {
            Some(text) if kind == ShapeKind::Circle && !text.is_empty() => {
                number("radius", columns.radius)
            }
            _ => 0,
        };

        let color = Rgb::try_from_channels(r, g, b).unwrap_or_else(|err| {
            self.diagnose(line, &raw, &err.to_string());
            Rgb::saturating_from_channels(r, g, b)
        });
        let point = GridPoint::new(saturate_i32(x), saturate_i32(y));

        match kind {
            ShapeKind::Polyline => {
                if self.group_color != Some(color) {
                    self.flush();
                    self.group_color = Some(color);
                }
                self.group_points.push(point);
            }
            ShapeKind::Circle => {
                self.flush();
                self.group_color = None;
                let radius = u32::try_from(radius).unwrap_or_else(|_| {
                    if radius < 0 {
                        self.diagnose(line, &raw, "negative radius read as 0");
                        0
                    } else {
                        u32::MAX
                    }
                });
                self.out
                    .shapes
                    .push(Shape::Circle(Circle::new(point, radius, color.quantized())));
            }
        }
    }

    fn flush(&mut self) {
        if self.group_points.is_empty() {
            return;
        }
        if let Some(color) = self.group_color {
            let points = std::mem::take(&mut self.group_points);
            self.out
                .shapes
                .push(Shape::Polyline(Polyline::new(points, color.quantized())));
        }
    }

    fn diagnose(&mut self, line: usize, raw: &str, reason: &str) {
        self.out
            .diagnostics
            .push(LineDiagnostic::new(line, raw, reason));
    }

    fn finish(mut self) -> ParsedScene {
        self.flush();
        self.out
    }
}

/// Parses a decimal number and truncates it toward zero.
fn coerce_number(text: &str) -> Option<i64> {
    let v = text.trim().parse::<f64>().ok()?;
    v.is_finite().then(|| v.trunc() as i64)
}

fn saturate_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
