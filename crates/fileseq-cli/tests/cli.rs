//! End-to-end tests for the `fileseq` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn fileseq() -> Command {
    Command::cargo_bin("fileseq").expect("binary exists")
}

#[test]
fn expands_a_pattern_line_by_line() {
    fileseq()
        .arg("1-3#.exr")
        .assert()
        .success()
        .stdout("0001.exr\n0002.exr\n0003.exr\n");
}

#[test]
fn expands_multiple_patterns_in_argument_order() {
    fileseq()
        .args(["1-2@.exr", "5-4@.png"])
        .assert()
        .success()
        .stdout("1.exr\n2.exr\n5.png\n4.png\n");
}

#[test]
fn lazy_flag_produces_identical_output() {
    let eager = fileseq().arg("1-10x2@.exr").output().expect("runs");
    let lazy = fileseq()
        .args(["--lazy", "1-10x2@.exr"])
        .output()
        .expect("runs");
    assert!(eager.status.success());
    assert!(lazy.status.success());
    assert_eq!(eager.stdout, lazy.stdout);
}

#[test]
fn rejects_an_unparseable_pattern() {
    fileseq()
        .arg("frame.exr")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse frame.exr"));
}

#[test]
fn one_bad_pattern_fails_the_whole_invocation() {
    fileseq()
        .args(["1-2@.exr", "not-a-sequence.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse not-a-sequence.txt"));
}

#[test]
fn honours_a_custom_delimiter_set() {
    fileseq()
        .args(["--delimiters", "_", "a_1-2@_b"])
        .assert()
        .success()
        .stdout("a_1_b\na_2_b\n");
}

#[test]
fn honours_a_custom_pad_character() {
    fileseq()
        .args(["--pad-char", " ", "9-10@@.exr"])
        .assert()
        .success()
        .stdout(" 9.exr\n10.exr\n");
}

#[test]
fn requires_at_least_one_pattern() {
    fileseq().assert().failure();
}
