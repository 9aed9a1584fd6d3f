//! Document file I/O and end-to-end tab workflows.

use std::fs;

use plume::{Document, Theme, ThemeManager};

#[test]
fn open_edit_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "first draft").unwrap();

    let mut doc = Document::open(&path).unwrap();
    assert_eq!(doc.text(), "first draft");
    assert!(!doc.is_modified());
    assert_eq!(doc.display_name(), "notes.txt");

    doc.set_text("second draft");
    assert!(doc.is_modified());

    doc.save().unwrap();
    assert!(!doc.is_modified());
    assert_eq!(fs::read_to_string(&path).unwrap(), "second draft");
}

#[test]
fn save_without_path_fails() {
    let mut doc = Document::from_text("unsaved");
    assert!(doc.save().is_err());
}

#[test]
fn save_as_binds_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.txt");

    let mut doc = Document::from_text("content");
    doc.save_as(&path).unwrap();
    assert_eq!(doc.path(), Some(path.as_path()));
    assert!(!doc.is_modified());
    assert_eq!(fs::read_to_string(&path).unwrap(), "content");

    // Subsequent plain saves go to the bound path
    doc.set_text("updated");
    doc.save().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
}

#[test]
fn open_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Document::open(dir.path().join("absent.txt")).is_err());
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");

    let mut doc = Document::from_text("x");
    doc.save_as(&path).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["doc.txt".to_string()]);
}

#[test]
fn themes_load_from_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("paper.json"),
        r##"{"name": "Paper", "colors": {"editor_bg": "#ffffff", "editor_fg": "#111111"}}"##,
    )
    .unwrap();
    fs::write(dir.path().join("broken.json"), "{ nope").unwrap();
    fs::write(dir.path().join("readme.txt"), "not a theme").unwrap();

    let mut manager = ThemeManager::load_dir(dir.path());

    // The parseable theme and the built-in default; the rest are skipped
    assert_eq!(manager.theme_ids(), vec!["midnight", "paper"]);

    assert!(manager.set_current("paper"));
    assert_eq!(manager.current().name, "Paper");
    assert_eq!(manager.current().colors.editor_bg, "#ffffff");
    // Unspecified colors fall back to the default palette
    assert_eq!(
        manager.current().colors.border,
        Theme::default().colors.border
    );
}
