use assert_cmd::{cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn cli() -> Command {
    cargo_bin_cmd!("runtime-analysis")
}

fn log_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_prints_sorted_report() {
    let file = log_file(
        "[2020-01-01 00:00:00] Initialising estimates for: A\n\
         [2020-01-01 00:00:00] Initialising estimates for: B\n\
         [2020-01-01 00:00:00] Initialising estimates for: C\n\
         [2020-01-01 00:10:00] Completed estimates for: A\n\
         [2020-01-01 00:05:00] Completed estimates for: B\n",
    );

    cli()
        .arg(file.path())
        .assert()
        .success()
        .stdout("B, 0:05:00\nA, 0:10:00\nC, 23:59:59\n");
}

#[test]
fn test_missing_file_fails() {
    cli()
        .arg("/no/such/dir/estimates.log")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot read log file"));
}

#[test]
fn test_malformed_timestamp_fails_without_report() {
    let file = log_file(
        "[2020-01-01 00:00:00] Initialising estimates for: Region1\n\
         [2020-01-01 00:05:00] Completed estimates for: Region1\n\
         [bad-date] Initialising estimates for: RegionX\n",
    );

    cli()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed timestamp"));
}

#[test]
fn test_requires_log_file_argument() {
    cli().assert().failure().code(2);
}
