#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bookmarks_cmd(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bookmarks").unwrap();
    cmd.env_remove("RUST_LOG").arg("--bookmarks").arg(file);
    cmd
}

#[test]
fn add_twice_lists_once() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bookmarks");

    bookmarks_cmd(&file)
        .args(["add", "https://a.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added https://a.com"));

    bookmarks_cmd(&file)
        .args(["add", "https://a.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added").not());

    bookmarks_cmd(&file)
        .arg("list")
        .assert()
        .success()
        .stdout("https://a.com\n");
}

#[test]
fn list_keeps_insertion_order() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bookmarks");

    bookmarks_cmd(&file)
        .args(["add", "https://a.com", "https://b.com"])
        .assert()
        .success();
    bookmarks_cmd(&file)
        .args(["add", "https://c.com"])
        .assert()
        .success();

    bookmarks_cmd(&file)
        .arg("list")
        .assert()
        .success()
        .stdout("https://a.com\nhttps://b.com\nhttps://c.com\n");
}

#[test]
fn creates_missing_parent_directories() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("data").join("0.1.0").join("bookmarks");

    bookmarks_cmd(&file).arg("list").assert().success().stdout("");

    assert!(file.is_file());
}

#[test]
fn reads_hand_written_records() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bookmarks");
    fs::write(
        &file,
        "{\"title\": \"A\", \"url\": \"https://a.com\"}\n\n{\"url\": \"https://b.com\", \"title\": null}\n",
    )
    .unwrap();

    bookmarks_cmd(&file)
        .arg("list")
        .assert()
        .success()
        .stdout("https://a.com\nhttps://b.com\n");
}

#[test]
fn corrupt_record_aborts_with_line_number() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bookmarks");
    fs::write(
        &file,
        "{\"url\":\"https://a.com\"}\n{\"url\":\n{\"url\":\"https://b.com\"}\n",
    )
    .unwrap();

    bookmarks_cmd(&file)
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains(file.to_str().unwrap()));

    let before = fs::read_to_string(&file).unwrap();
    bookmarks_cmd(&file)
        .args(["add", "https://c.com"])
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&file).unwrap(), before);
}

#[test]
fn no_create_flag_requires_existing_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bookmarks");

    bookmarks_cmd(&file)
        .args(["--no-create-bookmarks-file", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unavailable"));

    bookmarks_cmd(&file)
        .args(["--no-create-bookmarks-file", "add", "https://a.com"])
        .assert()
        .failure();

    assert!(!file.exists());
}

#[test]
fn init_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bookmarks");

    bookmarks_cmd(&file)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    bookmarks_cmd(&file)
        .args(["add", "https://a.com"])
        .assert()
        .success();

    bookmarks_cmd(&file)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already present"));

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "{\"url\":\"https://a.com\"}\n"
    );
}

#[test]
fn directory_at_path_is_left_alone_but_unusable() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bookmarks");
    fs::create_dir(&file).unwrap();

    bookmarks_cmd(&file)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("not a regular file"));

    bookmarks_cmd(&file)
        .arg("list")
        .assert()
        .failure()
        .code(1);

    assert!(file.is_dir());
}

#[test]
fn path_prints_location_without_creating_it() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bookmarks");

    bookmarks_cmd(&file)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains(file.to_str().unwrap()));

    assert!(!file.exists());
}

#[test]
fn debug_logs_go_to_stderr() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bookmarks");

    bookmarks_cmd(&file)
        .args(["--debug", "add", "https://a.com"])
        .assert()
        .success();

    bookmarks_cmd(&file)
        .args(["--debug", "list"])
        .assert()
        .success()
        .stdout("https://a.com\n")
        .stderr(predicate::str::contains("loaded bookmarks"));
}

#[test]
fn add_requires_url_argument() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bookmarks");

    bookmarks_cmd(&file).arg("add").assert().failure();
}

#[test]
fn add_after_hand_edited_file_without_trailing_newline() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bookmarks");
    fs::write(&file, "{\"url\":\"https://a.com\"}").unwrap();

    bookmarks_cmd(&file)
        .args(["add", "https://b.com"])
        .assert()
        .success();

    bookmarks_cmd(&file)
        .arg("list")
        .assert()
        .success()
        .stdout("https://a.com\nhttps://b.com\n");
}
