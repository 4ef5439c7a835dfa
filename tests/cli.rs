use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("huectl")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("lights"))
        .stdout(predicate::str::contains("set"));
}

#[test]
fn set_without_state_flags_is_rejected_before_any_request() {
    // --light is given so an accidental lights enumeration would be skipped
    // anyway, and the unroutable ip guards against any request going out.
    Command::cargo_bin("huectl")
        .unwrap()
        .args(["--ip", "127.0.0.1:1", "set", "--light", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No state changes requested"));
}

#[test]
fn set_rejects_out_of_range_brightness() {
    Command::cargo_bin("huectl")
        .unwrap()
        .args(["--ip", "127.0.0.1:1", "set", "--light", "1", "--bri", "255"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("255"));
}
