//! End-to-end tests for the `list_files` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

fn bin() -> Command {
    Command::cargo_bin("list_files").unwrap()
}

fn write_file(path: &Path, contents: &[u8], mode: u32) {
    fs::write(path, contents).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

/// A tempdir holding `d/` with a 5-byte file `a` and an empty subdir `b`.
fn sample_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let d = tmp.path().join("d");
    fs::create_dir(&d).unwrap();
    write_file(&d.join("a"), b"12345", 0o644);
    fs::create_dir(d.join("b")).unwrap();
    tmp
}

#[test]
fn lists_named_directory_with_header_and_joined_paths() {
    let tmp = sample_tree();

    bin()
        .current_dir(tmp.path())
        .arg("d")
        .assert()
        .success()
        .stdout(predicate::str::contains("d:\n"))
        .stdout(predicate::str::contains(" d/a\n"))
        .stdout(predicate::str::contains(" d/b\n"));
}

#[test]
fn no_arguments_lists_cwd_without_header() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("alpha"), b"x", 0o644);
    write_file(&tmp.path().join("beta"), b"y", 0o644);

    bin()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(" alpha\n"))
        .stdout(predicate::str::contains(" beta\n"))
        .stdout(predicate::str::contains(":").not());
}

#[test]
fn long_format_renders_mode_links_and_size() {
    let tmp = sample_tree();

    bin()
        .current_dir(tmp.path())
        .args(["-l", "d/a"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-rw-r--r--  1 "))
        .stdout(predicate::str::contains("       5 "))
        .stdout(predicate::str::ends_with(" d/a\n"));
}

#[test]
fn long_format_with_all_renders_the_sample_scenario() {
    let tmp = sample_tree();

    let assert = bin()
        .current_dir(tmp.path())
        .args(["-l", "-a", "d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("d:\n"))
        .stdout(predicate::str::is_match(r"(?m)^-rw-r--r--  1 .*       5 .* d/a$").unwrap());

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    // `b`, `.` and `..` all classify as directories.
    let dir_lines = stdout.lines().filter(|l| l.starts_with('d') && !l.ends_with(':'));
    assert_eq!(dir_lines.count(), 3, "stdout:\n{stdout}");
}

#[test]
fn show_all_adds_exactly_the_two_pseudo_entries() {
    let tmp = sample_tree();

    let assert = bin()
        .current_dir(tmp.path())
        .args(["-a", "d"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" d/.\n"))
        .stdout(predicate::str::contains(" d/..\n"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    // header + `.` + `..` + two children
    assert_eq!(stdout.lines().count(), 5, "stdout:\n{stdout}");
}

#[test]
fn without_show_all_only_the_pseudo_entries_are_skipped() {
    let tmp = TempDir::new().unwrap();
    let d = tmp.path().join("d");
    fs::create_dir(&d).unwrap();
    write_file(&d.join(".hidden"), b"x", 0o644);

    bin()
        .current_dir(tmp.path())
        .arg("d")
        .assert()
        .success()
        .stdout(predicate::str::contains(" d/.hidden\n"))
        .stdout(predicate::str::contains(" d/.\n").not())
        .stdout(predicate::str::contains(" d/..\n").not());
}

#[test]
fn missing_target_is_reported_and_later_targets_still_list() {
    let tmp = sample_tree();

    bin()
        .current_dir(tmp.path())
        .args(["no-such-entry", "d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-entry: "))
        .stdout(predicate::str::contains("d:\n"))
        .stdout(predicate::str::contains(" d/a\n"));
}

#[test]
fn unreadable_directory_reports_and_later_targets_still_list() {
    let tmp = sample_tree();
    let locked = tmp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        // Running as root: permission bits are not enforced here.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let assert = bin()
        .current_dir(tmp.path())
        .args(["locked", "d"])
        .assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert
        .failure()
        .stderr(predicate::str::is_match(r"(?m)^locked: ").unwrap())
        // The header is printed before the open attempt; the directory
        // contributes no entries of its own.
        .stdout(predicate::str::contains("locked:\n"))
        .stdout(predicate::str::contains(" locked/").not())
        .stdout(predicate::str::contains("d:\n"))
        .stdout(predicate::str::contains(" d/a\n"));
}

#[test]
fn unknown_flag_prints_usage_and_exits_nonzero() {
    bin()
        .arg("-z")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn repeated_runs_produce_identical_output() {
    let tmp = sample_tree();

    let first = bin()
        .current_dir(tmp.path())
        .args(["-l", "-a", "d"])
        .assert()
        .success();
    let second = bin()
        .current_dir(tmp.path())
        .args(["-l", "-a", "d"])
        .assert()
        .success();

    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}
