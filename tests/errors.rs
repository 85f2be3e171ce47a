use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn bfi() -> Command {
    Command::cargo_bin("bfi").unwrap()
}

#[test]
fn unmatched_open_bracket_fails_validation_with_a_count() {
    bfi()
        .timeout(Duration::from_secs(2))
        .write_stdin("[+")
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 more '[' than ']'"));
}

#[test]
fn several_unmatched_open_brackets_are_all_counted() {
    bfi()
        .timeout(Duration::from_secs(2))
        .write_stdin("[[+[")
        .assert()
        .failure()
        .stderr(predicate::str::contains("3 more '[' than ']'"));
}

#[test]
fn unmatched_close_bracket_fails_validation_with_its_position() {
    bfi()
        .timeout(Duration::from_secs(2))
        .write_stdin("+]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unmatched ']' at instruction 1"));
}

#[test]
fn moving_left_of_cell_zero_reports_pointer_and_bound() {
    bfi()
        .timeout(Duration::from_secs(2))
        .write_stdin("<")
        .assert()
        .failure()
        .stderr(predicate::str::contains("data pointer out of bounds: -1"));
}

#[test]
fn validation_failures_produce_no_program_output() {
    bfi()
        .timeout(Duration::from_secs(2))
        .write_stdin("+++.[")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
