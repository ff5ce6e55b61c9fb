use assert_cmd::Command;
use predicates::prelude::*;

fn knn() -> Command {
    Command::cargo_bin("knn").unwrap()
}

#[test]
fn classifies_each_complete_query_vector() {
    knn()
        .write_stdin("1 3 2\n0 0 0\n1 10 10\n0 0 1\n0 0\n10 9\n")
        .assert()
        .success()
        .stdout("0\n1\n");
}

#[test]
fn integral_labels_print_without_fractional_noise() {
    knn()
        .write_stdin("1 1 1\n7 0.5\n0.4\n")
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn partial_trailing_vector_produces_no_output_line() {
    knn()
        .write_stdin("1 1 3\n2 0 0 0\n0 0 0\n1 1\n")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn zero_queries_is_a_normal_run() {
    knn().write_stdin("1 1 2\n0 1 2\n").assert().success().stdout("");
}

#[test]
fn neighbor_count_beyond_training_set_uses_the_whole_set() {
    knn()
        .write_stdin("10 2 1\n4 0\n4 1\n0.5\n")
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn empty_training_set_fails_before_any_query() {
    knn()
        .write_stdin("1 0 2\n0 0\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("training set is empty"));
}

#[test]
fn zero_neighbor_count_is_rejected() {
    knn()
        .write_stdin("0 1 1\n1 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("neighbor count"));
}

#[test]
fn malformed_token_is_a_fatal_error() {
    knn()
        .write_stdin("1 1 2\n0 1 2\n3 potato\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed numeric token"));
}
