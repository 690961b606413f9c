//! `gamectl act` end to end.
//!
//! Piped stdin stands in for the requester's answer: one `yes`/`no` line,
//! or EOF for no answer at all.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::support::Fleet;

#[test]
fn test_status_reports_running() {
    Fleet::default_fleet()
        .gamectl()
        .args(["act", "icarus", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Icarus Dedicated Server: 🟢 running"));
}

#[test]
fn test_status_json_outcome() {
    let output = Fleet::default_fleet()
        .gamectl()
        .args(["act", "sotf", "status", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["server"], "sotf");
    assert_eq!(value["action"], "status");
    assert_eq!(value["kind"], "succeeded");
    assert_eq!(value["status"], "running");
}

#[test]
fn test_start_runs_without_prompt() {
    Fleet::default_fleet()
        .gamectl()
        .args(["act", "icarus", "up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Icarus Dedicated Server is starting..."))
        .stdout(predicate::str::contains("Are you sure").not());
}

#[test]
fn test_unknown_server_exits_one() {
    Fleet::default_fleet()
        .gamectl()
        .args(["act", "minecraft", "status"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown server 'minecraft'"));
}

#[test]
fn test_unknown_server_json_error() {
    let output = Fleet::default_fleet()
        .gamectl()
        .args(["act", "minecraft", "status", "--json"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "unknown_server");
}

#[test]
fn test_unknown_action_exits_one() {
    Fleet::default_fleet()
        .gamectl()
        .args(["act", "icarus", "explode"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown action 'explode'"));
}

#[test]
fn test_stop_with_yes_flag_runs_script() {
    Fleet::default_fleet()
        .gamectl()
        .args(["act", "icarus", "down", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure you want to STOP the Icarus Dedicated Server?"))
        .stdout(predicate::str::contains("Icarus Dedicated Server stopped..."));
}

#[test]
fn test_stop_confirmed_on_stdin() {
    Fleet::default_fleet()
        .gamectl()
        .args(["act", "icarus", "restart"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("This will restart the server and disconnect all players!"))
        .stdout(predicate::str::contains("Icarus Dedicated Server restarting..."));
}

#[test]
fn test_piped_answer_is_read_as_a_line() {
    Fleet::default_fleet()
        .gamectl()
        .args(["act", "sotf", "restart"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sons of the Forest Server restarting..."))
        .stdout(predicate::str::contains("Answer yes or no").not())
        .stderr(predicate::str::contains("Answer yes or no").not());
}

#[test]
fn test_stop_declined_on_stdin_is_cancelled() {
    Fleet::default_fleet()
        .gamectl()
        .args(["act", "icarus", "stop"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Action cancelled."))
        .stdout(predicate::str::contains("stopped...").not());
}

#[test]
fn test_no_answer_times_out() {
    Fleet::default_fleet()
        .gamectl()
        .args(["act", "icarus", "stop"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Confirmation timed out. Action cancelled."));
}

#[test]
fn test_unparsable_answer_times_out() {
    let yaml = crate::support::FLEET.replace("servers:", "confirmation_timeout_secs: 1\nservers:");
    Fleet::new(&yaml)
        .gamectl()
        .args(["act", "icarus", "restart"])
        .write_stdin("maybe\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Confirmation timed out."));
}

#[test]
fn test_failed_script_exits_one_with_raw_error() {
    Fleet::default_fleet()
        .gamectl()
        .args(["act", "sotf", "stop", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("container sotf is not running"));
}

#[test]
fn test_wrong_channel_rejected() {
    let yaml = format!("control_channel: server-control\n{}", crate::support::FLEET);
    let fleet = Fleet::new(&yaml);

    fleet
        .gamectl()
        .args(["act", "icarus", "status"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("only works in the #server-control channel"));

    fleet
        .gamectl()
        .args(["act", "icarus", "status", "--channel", "server-control"])
        .assert()
        .success();
}

#[test]
fn test_json_confirmation_keeps_stdout_single_document() {
    let output = Fleet::default_fleet()
        .gamectl()
        .args(["act", "icarus", "stop", "--json"])
        .write_stdin("no\n")
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["kind"], "cancelled");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Are you sure"));
}
