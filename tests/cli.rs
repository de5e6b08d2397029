//! Black-box tests for the `bugfind` binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn bugfind() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bugfind"))
}

fn fixture(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(rel)
}

#[test]
fn counts_bugs_given_as_arguments() {
    bugfind()
        .arg(fixture("bug_files/bug.txt"))
        .arg(fixture("test_files/test.txt"))
        .assert()
        .success()
        .stdout("A total of 3 bugs were found!\n");
}

#[test]
fn counts_bugs_in_noisy_landscape() {
    bugfind()
        .arg(fixture("bug_files/bug_small.txt"))
        .arg(fixture("test_files/test_with_noise.txt"))
        .assert()
        .success()
        .stdout("A total of 3 bugs were found!\n");
}

#[test]
fn lists_locations() {
    bugfind()
        .arg("--locations")
        .arg(fixture("bug_files/bug_small.txt"))
        .arg(fixture("test_files/test_with_noise.txt"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("bug at row 0, column 2\n")
                .and(predicate::str::contains("bug at row 2, column 1\n"))
                .and(predicate::str::contains("bug at row 2, column 8\n"))
                .and(predicate::str::ends_with("A total of 3 bugs were found!\n")),
        );
}

#[test]
fn prompts_until_file_exists() {
    let stdin = format!(
        "missing.txt\n{}\n{}\n",
        fixture("bug_files/bug.txt").display(),
        fixture("test_files/test.txt").display()
    );
    bugfind()
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Please enter the bug file's name:")
                .and(predicate::str::contains(
                    "An error has occurred! No such file exists. Please try again!",
                ))
                .and(predicate::str::contains("Please enter the landscape file's name:"))
                .and(predicate::str::ends_with("A total of 3 bugs were found!\n")),
        );
}

#[test]
fn fails_when_input_runs_out() {
    bugfind()
        .write_stdin("missing.txt\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input ended before a bug file was named"));
}

#[test]
fn fails_on_missing_argument_file() {
    bugfind()
        .arg(fixture("bug_files/absent.txt"))
        .arg(fixture("test_files/test.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such bug file"));
}
