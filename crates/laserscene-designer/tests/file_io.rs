//! Export/import through the file system

use laserscene_designer::{
    GridPoint, ImportMode, Rgb, SceneDocument, SceneError, Shape, ShapeKind,
};
use std::fs;
use tempfile::tempdir;

fn sample_document() -> SceneDocument {
    let mut doc = SceneDocument::default();
    doc.set_drawing_color(Rgb::new(250, 10, 10));
    for (x, y) in [(0, 0), (10, 0), (10, 10)] {
        doc.append_temp_point(GridPoint::new(x, y));
    }
    doc.commit_polyline().unwrap();
    doc.set_drawing_color(Rgb::new(0, 0, 255));
    doc.commit_circle(GridPoint::new(100, 100), 10);
    doc
}

#[test]
fn test_laser_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scene.txt");
    let doc = sample_document();
    doc.export_laser(&path, 4, false).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "COLOR 1\n0,0\n10,0\n10,10\nSTOP\nCOLOR 3\n110,100\n100,110\n90,100\n100,90\nSTOP\n"
    );

    let mut imported = SceneDocument::default();
    let report = imported.import_laser(&path, ImportMode::Strict).unwrap();
    assert_eq!(report.added.len(), 2);
    assert!(report.diagnostics.is_empty());
    assert!(imported
        .elements()
        .iter()
        .all(|el| el.kind() == ShapeKind::Polyline));
    assert_eq!(imported.elements()[0].color(), Rgb::RED);
}

#[test]
fn test_csv_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scene.csv");
    let doc = sample_document();
    doc.export_csv(&path).unwrap();

    let mut imported = SceneDocument::default();
    imported.import_csv(&path, ImportMode::Strict).unwrap();

    let shapes: Vec<&Shape> = imported.shapes().collect();
    let original: Vec<&Shape> = doc.shapes().collect();
    assert_eq!(shapes.len(), 2);
    // Colors come back as primaries; geometry is exact
    assert_eq!(shapes[1], original[1]);
    assert_eq!(imported.elements()[0].color(), Rgb::RED);
}

#[test]
fn test_import_is_undoable_per_element() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scene.csv");
    sample_document().export_csv(&path).unwrap();

    let mut doc = SceneDocument::default();
    let report = doc.import_csv(&path, ImportMode::Lenient).unwrap();
    assert_eq!(doc.history().undo_count(), 2);

    assert!(doc.undo());
    assert!(doc.element(report.added[1]).is_none());
    assert!(doc.element(report.added[0]).is_some());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let mut doc = sample_document();

    let err = doc
        .import_laser(dir.path().join("missing.txt"), ImportMode::Lenient)
        .unwrap_err();
    assert!(matches!(err, SceneError::Io { .. }));
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.history().undo_count(), 2);
}

#[test]
fn test_unwritable_path_is_io_error() {
    let dir = tempdir().unwrap();
    let doc = sample_document();
    let err = doc
        .export_csv(dir.path().join("no-such-dir").join("out.csv"))
        .unwrap_err();
    assert!(matches!(err, SceneError::Io { .. }));
}

#[test]
fn test_strict_import_rejects_and_leaves_document_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "COLOR 2\n1,1\n2,2\noops\nSTOP\n").unwrap();

    let mut doc = sample_document();
    match doc.import_laser(&path, ImportMode::Strict) {
        Err(SceneError::Malformed { diagnostics }) => {
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(diagnostics[0].line, 4);
        }
        other => panic!("expected malformed error, got {other:?}"),
    }
    assert_eq!(doc.len(), 2);

    let report = doc.import_laser(&path, ImportMode::Lenient).unwrap();
    assert_eq!(report.added.len(), 1);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(doc.len(), 3);
}

#[test]
fn test_strict_import_accepts_unknown_integer_color() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blue.txt");
    fs::write(&path, "COLOR 7\n1,1\n2,2\nSTOP\n").unwrap();

    let mut doc = SceneDocument::default();
    let report = doc.import_laser(&path, ImportMode::Strict).unwrap();
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.added.len(), 1);
    assert_eq!(doc.elements()[0].color(), Rgb::BLUE);
}
