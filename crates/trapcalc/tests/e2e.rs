//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn trapcalc() -> Command {
    let mut cmd = Command::cargo_bin("trapcalc").expect("binary not found");
    cmd.env_remove("TRAPCALC_BACKEND").env_remove("RUST_LOG");
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let output = trapcalc().args(args).output().expect("failed to run");
    assert!(output.status.success(), "trapcalc {args:?} failed");
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

#[test]
fn help_flag() {
    trapcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trapezoidal"));
}

#[test]
fn version_flag() {
    trapcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trapcalc"));
}

#[test]
fn zero_to_one_four_workers() {
    trapcalc()
        .args(["0", "1", "1000", "4"])
        .assert()
        .success()
        .stdout("1.6421\n");
}

#[test]
fn four_workers_match_one() {
    assert_eq!(stdout_of(&["0", "1", "1000", "4"]), stdout_of(&["0", "1", "1000", "1"]));
}

#[test]
fn worker_count_invariance() {
    let reference = stdout_of(&["0", "10", "1000", "1"]);
    for tn in ["2", "5", "10"] {
        assert_eq!(stdout_of(&["0", "10", "1000", tn]), reference, "tn = {tn}");
    }
}

#[test]
fn zero_width_interval() {
    trapcalc()
        .args(["3", "3", "100", "4"])
        .assert()
        .success()
        .stdout("0.0000\n");
}

#[test]
fn large_magnitude_keeps_four_decimals() {
    trapcalc()
        .args(["0", "50", "100000", "16"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\.\d{4}\n$").unwrap());
}

#[test]
fn uneven_split() {
    trapcalc()
        .args(["0", "1", "10", "3"])
        .assert()
        .success()
        .stdout("1.6423\n");
}

#[test]
fn three_arguments_fail() {
    trapcalc()
        .args(["0", "1", "1000"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("wrong number of arguments"));
}

#[test]
fn six_arguments_fail() {
    trapcalc()
        .args(["0", "1", "1000", "4", "5", "6"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("wrong number of arguments"));
}

#[test]
fn extra_negative_argument_is_count_error() {
    trapcalc()
        .args(["0", "1", "1000", "4", "-3"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("wrong number of arguments"));
}

#[test]
fn extreme_bounds_rejected_without_panic() {
    trapcalc()
        .args(["-9223372036854775808", "9223372036854775807", "1", "1"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid request"));
}

#[test]
fn bound_above_domain_rejected() {
    trapcalc()
        .args(["0", "1000", "10", "2"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("outside [0, 50]"));
}

#[test]
fn reversed_bounds_rejected() {
    trapcalc()
        .args(["5", "2", "10", "2"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn upper_domain_edge() {
    trapcalc()
        .args(["0", "50", "1000", "4"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\.\d{4}\n$").unwrap());
}

#[test]
fn non_numeric_argument_fails() {
    trapcalc()
        .args(["0", "x", "1000", "4"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value 'x'"));
}

#[test]
fn zero_workers_fail() {
    trapcalc()
        .args(["0", "1", "1000", "0"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn rayon_backend() {
    trapcalc()
        .args(["0", "1", "1000", "4", "--backend", "rayon"])
        .assert()
        .success()
        .stdout("1.6421\n");
}

#[test]
fn backend_from_env() {
    Command::cargo_bin("trapcalc")
        .expect("binary not found")
        .env("TRAPCALC_BACKEND", "sequential")
        .args(["2", "7", "999", "4"])
        .assert()
        .success()
        .stdout("61.1281\n");
}

#[test]
fn all_backends_cross_check() {
    trapcalc()
        .args(["1", "5", "10000", "8", "--backend", "all"])
        .assert()
        .success()
        .stdout("21.5752\n");
}

#[test]
fn unknown_backend_fails() {
    trapcalc()
        .args(["0", "1", "1000", "4", "--backend", "gpu"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn details_go_to_stderr() {
    trapcalc()
        .args(["0", "2", "100", "4", "-d"])
        .assert()
        .success()
        .stdout("4.0070\n")
        .stderr(predicate::str::contains("Workers: 4"));
}

#[test]
fn verbose_keeps_stdout_clean() {
    trapcalc()
        .args(["0", "1", "1000", "4", "-v"])
        .assert()
        .success()
        .stdout("1.6421\n");
}
