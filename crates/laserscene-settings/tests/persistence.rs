//! Settings persistence round trips

use laserscene_settings::{EditorSettings, SettingsError, MAX_RECENT_FILES};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn customised() -> EditorSettings {
    let mut settings = EditorSettings {
        grid_size: 128,
        cell_size: 4,
        circle_steps: 36,
        normalize_export: true,
        ..EditorSettings::default()
    };
    settings.record_export(Path::new("/tmp/out/scene.txt"));
    settings.add_recent_file("/tmp/in/scene.csv");
    settings
}

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");
    let settings = customised();

    settings.save_to_file(&path).unwrap();
    let loaded = EditorSettings::load_from_file(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.last_export_dir, Some(PathBuf::from("/tmp/out")));
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = customised();

    settings.save_to_file(&path).unwrap();
    assert_eq!(EditorSettings::load_from_file(&path).unwrap(), settings);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "grid_size = 64\n").unwrap();

    let loaded = EditorSettings::load_from_file(&path).unwrap();
    assert_eq!(loaded.grid_size, 64);
    assert_eq!(loaded.circle_steps, 90);
    assert!(loaded.recent_files.is_empty());
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let loaded = EditorSettings::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(loaded, EditorSettings::default());
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"grid_size": 0}"#).unwrap();

    assert!(matches!(
        EditorSettings::load_from_file(&path),
        Err(SettingsError::InvalidSetting { .. })
    ));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let err = EditorSettings::default()
        .save_to_file(&dir.path().join("settings.ini"))
        .unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
}

#[test]
fn test_oversized_recent_list_is_trimmed_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let files: Vec<String> = (0..70).map(|i| format!("\"/f/{i}.txt\"")).collect();
    fs::write(&path, format!(r#"{{"recent_files": [{}]}}"#, files.join(","))).unwrap();

    let loaded = EditorSettings::load_from_file(&path).unwrap();
    assert_eq!(loaded.recent_files.len(), MAX_RECENT_FILES);
    assert_eq!(loaded.recent_files.recent(1), vec![Path::new("/f/69.txt")]);
}
