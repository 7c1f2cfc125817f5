use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::Command;

fn is_numbered_rs(entry: &fs::DirEntry) -> bool {
    let path = entry.path();
    path.is_file()
        && path.extension() == Some(OsStr::new("rs"))
        && path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|n| n.chars().next().is_some_and(|c| c.is_ascii_digit()))
}

fn run_example(name: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::new("cargo");
    cmd.arg("run").arg("--quiet").arg("--example").arg(name);
    cmd.env("STOCKAI_DEMOS_USE_MOCK", "1");
    cmd.assert()
}

#[test]
fn run_all_examples_with_mock() {
    let examples_dir = Path::new("examples");
    let entries = fs::read_dir(examples_dir).expect("read examples dir");
    let mut found_any = false;
    for entry in entries.flatten().filter(is_numbered_rs) {
        let path = entry.path();
        let name = path
            .file_stem()
            .and_then(OsStr::to_str)
            .expect("example name")
            .to_string();
        found_any = true;
        run_example(&name)
            .success()
            .stdout(predicate::str::contains("Using Mock Connector"));
    }
    assert!(found_any, "no examples found to run");
}

#[test]
fn search_example_lists_fixture_tickers() {
    run_example("01_search")
        .success()
        .stdout(predicate::str::contains("AAPL.US").and(predicate::str::contains("AAL.US")));
}

#[test]
fn bars_example_pages_fifty_rows() {
    run_example("02_bars_table")
        .success()
        .stdout(predicate::str::contains("Page 1 of 4"))
        .stdout(predicate::str::contains("After load more: Some(400) bars"));
}
