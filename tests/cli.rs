use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const REPORT: &str = "weird_names_report.csv";

fn namescan() -> Command {
    Command::cargo_bin("namescan").unwrap()
}

fn touch(path: &Path) {
    fs::write(path, "x").unwrap();
}

#[test]
fn reports_one_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("report.txt"));
    touch(&dir.path().join("bad<name>.txt"));

    namescan()
        .current_dir(dir.path())
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 problematic items."))
        .stdout(predicate::str::contains(REPORT))
        .stdout(predicate::str::contains(
            "- [file] bad<name>.txt | issues=illegal-chars | bad=<> | suggestion=bad_name_.txt",
        ))
        .stdout(predicate::str::contains("nothing was renamed"));

    let csv = fs::read_to_string(dir.path().join(REPORT)).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("type,path,issues,bad_chars,suggested_safe_name")
    );
    assert_eq!(
        lines.next(),
        Some("file,bad<name>.txt,illegal-chars,<>,bad_name_.txt")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn clean_tree_writes_no_report() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("report.txt"));
    fs::create_dir(dir.path().join("src")).unwrap();
    touch(&dir.path().join("src").join("main.rs"));

    namescan()
        .current_dir(dir.path())
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("No problematic names detected"));

    assert!(!dir.path().join(REPORT).exists());
}

#[test]
fn missing_root_exits_with_status_2() {
    let dir = tempfile::tempdir().unwrap();
    namescan()
        .current_dir(dir.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Path does not exist: does-not-exist"));
    assert!(!dir.path().join(REPORT).exists());
}

#[test]
fn defaults_to_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("résumés")).unwrap();

    namescan()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanning: "))
        .stdout(predicate::str::contains("Found 1 problematic items."));

    let csv = fs::read_to_string(dir.path().join(REPORT)).unwrap();
    assert!(csv.lines().any(|l| l == "dir,résumés,non-ascii,é,r_sum_s"));
}

#[test]
fn flags_directories_and_files_at_every_level() {
    let dir = tempfile::tempdir().unwrap();
    let weird_dir = dir.path().join("stuff ");
    fs::create_dir(&weird_dir).unwrap();
    touch(&weird_dir.join("CON.txt"));
    touch(&dir.path().join("fine.txt"));

    namescan()
        .current_dir(dir.path())
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 problematic items."));

    let csv = fs::read_to_string(dir.path().join(REPORT)).unwrap();
    assert!(csv
        .lines()
        .any(|l| l == "dir,stuff ,leading/trailing-space-or-dot,,stuff"));
    // Reserved name nested one level down, path is root-relative.
    let sep = std::path::MAIN_SEPARATOR;
    let expected = format!("file,stuff {sep}CON.txt,windows-reserved-name,,CON.txt");
    assert!(csv.lines().any(|l| l == expected), "csv was:\n{csv}");
}

#[test]
fn rejects_extra_arguments() {
    namescan()
        .args(["a", "b"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unexpected argument: b"));
}
