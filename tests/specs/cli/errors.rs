//! Error-path specs
//!
//! Usage errors and resource-acquisition failures are fatal, reported on
//! stderr, and exit non-zero.

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn stray_argument_is_a_usage_error() {
    let temp = Workdir::empty();

    temp.np()
        .arg("extra")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let temp = Workdir::empty();

    temp.np()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn usage_error_narrates_nothing() {
    let temp = Workdir::empty();

    temp.np()
        .arg("extra")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn malformed_config_is_fatal() {
    let temp = Workdir::empty();
    temp.file("np.toml", "elves = \"many\"\n");

    temp.np()
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn unknown_config_key_is_fatal() {
    let temp = Workdir::empty();
    temp.file("np.toml", "reindeer_team = 12\n");

    temp.np().assert().failure();
}

#[test]
fn help_describes_the_workshop() {
    let temp = Workdir::empty();

    temp.np()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("North Pole workshop"));
}

#[test]
fn version_flag_reports_the_crate_version() {
    let temp = Workdir::empty();

    temp.np()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("np"));
}
