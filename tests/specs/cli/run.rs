//! Clean-run specs
//!
//! Verify a full session narrates the protocol and exits cleanly.

use crate::prelude::*;
use predicates::prelude::*;

/// Config that keeps specs fast and deterministic where possible.
const QUICK: &str = r#"
elves = 6
vacation_max = "5ms"
workload_max = "5ms"
"#;

#[test]
fn clean_run_exits_zero() {
    let temp = Workdir::empty();
    temp.file("np.toml", QUICK);

    temp.np().assert().success();
}

#[test]
fn run_narrates_sleep_and_sleigh() {
    let temp = Workdir::empty();
    temp.file("np.toml", QUICK);

    temp.np()
        .assert()
        .success()
        .stdout(predicate::str::contains("Santa: I am going to sleep."))
        .stdout(predicate::str::contains(
            "Santa: The nine reindeer arrived, prepare the sleigh.",
        ));
}

#[test]
fn run_narrates_all_nine_reindeer() {
    let temp = Workdir::empty();
    temp.file("np.toml", QUICK);

    let assert = temp.np().assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let arrivals = stdout
        .lines()
        .filter(|line| line.starts_with("Reindeer "))
        .count();
    assert_eq!(arrivals, 9);
}

#[test]
fn elf_pool_of_zero_keeps_elves_out_of_the_narration() {
    let temp = Workdir::empty();
    temp.file(
        "np.toml",
        r#"
elves = 0
vacation_max = "5ms"
workload_max = "5ms"
"#,
    );

    temp.np()
        .assert()
        .success()
        .stdout(predicate::str::contains("Elf").not());
}

#[test]
fn json_output_emits_tagged_events() {
    let temp = Workdir::empty();
    temp.file("np.toml", QUICK);

    temp.np()
        .env("NP_OUTPUT", "json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"SleighReady\""))
        .stdout(predicate::str::contains("Santa:").not());
}

#[test]
fn missing_config_still_runs_with_defaults() {
    let temp = Workdir::empty();

    temp.np()
        .assert()
        .success()
        .stdout(predicate::str::contains("prepare the sleigh"));
}
