use super::*;
use std::fs::write;

fn settings_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.json");
    write(&path, contents).expect("write settings file");
    (dir, path)
}

#[test]
fn from_file_reads_all_fields() {
    let (_dir, path) = settings_file(
        r#"{
            "root_folder_id": "folder-1",
            "root_label": "Unidad",
            "spreadsheet_id": "sheet-1",
            "batch_size": 25
        }"#,
    );

    let settings = AuditSettings::from_file(&path).expect("load settings");

    assert_eq!(settings.root_folder_id, "folder-1");
    assert_eq!(settings.root_label, "Unidad");
    assert_eq!(settings.spreadsheet_id, "sheet-1");
    assert_eq!(settings.batch_size, 25);
}

#[test]
fn from_file_applies_defaults() {
    let (_dir, path) = settings_file(
        r#"{
            "root_folder_id": "folder-1",
            "spreadsheet_id": "sheet-1"
        }"#,
    );

    let settings = AuditSettings::from_file(&path).expect("load settings");

    assert_eq!(settings.root_label, DEFAULT_ROOT_LABEL);
    assert_eq!(settings.batch_size, DEFAULT_BATCH_SIZE);
}

#[test]
fn from_file_fails_when_missing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing.json");

    assert!(AuditSettings::from_file(&path).is_err());
}

#[test]
fn from_file_rejects_malformed_json() {
    let (_dir, path) = settings_file("{ not json");

    assert!(AuditSettings::from_file(&path).is_err());
}
