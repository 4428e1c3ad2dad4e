use camino::{Utf8Path, Utf8PathBuf};
use datafix_organize::{OrganizeError, OrganizeOptions, organize_dir};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn session(temp: &TempDir, files: &[&str]) -> Utf8PathBuf {
    let dir = Utf8PathBuf::from_path_buf(temp.path().join("session")).unwrap();
    fs::create_dir_all(&dir).unwrap();
    for f in files {
        fs::write(dir.join(f), f.as_bytes()).unwrap();
    }
    dir
}

fn names_in(dir: &Utf8Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn moves_captures_and_removes_sentinel() {
    let temp = tempfile::tempdir().unwrap();
    let dir = session(&temp, &["0002.dm", "0001.dm", "testdata.txt", "floor.txt"]);

    let outcome = organize_dir(&dir, &OrganizeOptions::default()).unwrap();

    assert_eq!(outcome.moved, vec!["0001.dm", "0002.dm"]);
    assert!(outcome.sentinel_removed);
    assert!(outcome.changed());
    assert_eq!(names_in(&dir), vec!["maps", "testdata.txt"]);
    assert_eq!(names_in(&dir.join("maps")), vec!["0001.dm", "0002.dm"]);
}

#[test]
fn existing_target_dir_is_reused() {
    let temp = tempfile::tempdir().unwrap();
    let dir = session(&temp, &["0003.dm"]);
    fs::create_dir_all(dir.join("maps")).unwrap();
    fs::write(dir.join("maps").join("0001.dm"), "old").unwrap();

    let outcome = organize_dir(&dir, &OrganizeOptions::default()).unwrap();
    assert_eq!(outcome.moved, vec!["0003.dm"]);
    assert!(!outcome.sentinel_removed);
    assert_eq!(names_in(&dir.join("maps")), vec!["0001.dm", "0003.dm"]);
}

#[test]
fn nothing_to_do_creates_target_dir_only() {
    let temp = tempfile::tempdir().unwrap();
    let dir = session(&temp, &["testdata.txt"]);

    let outcome = organize_dir(&dir, &OrganizeOptions::default()).unwrap();
    assert!(!outcome.changed());
    assert!(dir.join("maps").is_dir());
}

#[test]
fn dry_run_touches_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let dir = session(&temp, &["0001.dm", "floor.txt"]);

    let opts = OrganizeOptions {
        dry_run: true,
        ..OrganizeOptions::default()
    };
    let outcome = organize_dir(&dir, &opts).unwrap();

    assert_eq!(outcome.moved, vec!["0001.dm"]);
    assert!(outcome.sentinel_removed);
    assert_eq!(names_in(&dir), vec!["0001.dm", "floor.txt"]);
}

#[test]
fn collision_aborts_before_moving() {
    let temp = tempfile::tempdir().unwrap();
    let dir = session(&temp, &["0001.dm", "0002.dm"]);
    fs::create_dir_all(dir.join("maps")).unwrap();
    fs::write(dir.join("maps").join("0002.dm"), "old").unwrap();

    let err = organize_dir(&dir, &OrganizeOptions::default()).unwrap_err();
    assert!(matches!(err, OrganizeError::Collision { .. }));
    assert_eq!(names_in(&dir), vec!["0001.dm", "0002.dm", "maps"]);
}

#[test]
fn custom_extension_with_leading_dot() {
    let temp = tempfile::tempdir().unwrap();
    let dir = session(&temp, &["a.raw", "b.dm"]);

    let opts = OrganizeOptions {
        extension: ".raw".to_string(),
        target_dir: "raw".to_string(),
        ..OrganizeOptions::default()
    };
    let outcome = organize_dir(&dir, &opts).unwrap();
    assert_eq!(outcome.moved, vec!["a.raw"]);
    assert_eq!(names_in(&dir), vec!["b.dm", "raw"]);
}

#[test]
fn rejects_nested_target_dir() {
    let temp = tempfile::tempdir().unwrap();
    let dir = session(&temp, &[]);

    let opts = OrganizeOptions {
        target_dir: "../elsewhere".to_string(),
        ..OrganizeOptions::default()
    };
    let err = organize_dir(&dir, &opts).unwrap_err();
    assert!(matches!(
        err,
        OrganizeError::InvalidOption {
            field: "target_dir",
            ..
        }
    ));
}
