//! `gamectl config` and `gamectl servers`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::support::{Fleet, gamectl};

#[test]
fn test_config_path_prints_override() {
    let fleet = Fleet::default_fleet();
    fleet
        .gamectl()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(fleet.path().display().to_string()));
}

#[test]
fn test_config_path_flag_wins() {
    gamectl()
        .args(["--config", "/srv/gamectl/fleet.yaml", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/srv/gamectl/fleet.yaml"));
}

#[test]
fn test_config_show_prints_yaml() {
    Fleet::default_fleet()
        .gamectl()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confirmation_timeout_secs: 30"))
        .stdout(predicate::str::contains("icarus-dedicated"));
}

#[test]
fn test_config_show_json() {
    let output = Fleet::default_fleet()
        .gamectl()
        .args(["config", "show", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["servers"]["sotf"]["name"], "Sons of the Forest Server");
}

#[test]
fn test_missing_config_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    gamectl()
        .env("GAMECTL_CONFIG", dir.path().join("absent.yaml"))
        .arg("servers")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No configuration at"));
}

#[test]
fn test_invalid_config_is_an_error() {
    Fleet::new("servers: {}\n")
        .gamectl()
        .arg("servers")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No servers configured"));
}

#[test]
fn test_servers_lists_registry() {
    Fleet::default_fleet()
        .gamectl()
        .arg("servers")
        .assert()
        .success()
        .stdout(predicate::str::contains("icarus"))
        .stdout(predicate::str::contains("Sons of the Forest Server (sotf)"));
}

#[test]
fn test_servers_json_is_sorted_by_key() {
    let output = Fleet::default_fleet()
        .gamectl()
        .args(["servers", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value[0]["key"], "icarus");
    assert_eq!(value[1]["key"], "sotf");
    assert_eq!(value[0]["operations"]["stop"], "true");
}

#[test]
fn test_oversized_timeout_is_an_error() {
    let yaml = crate::support::FLEET.replace("servers:", "confirmation_timeout_secs: 18446744073709551615\nservers:");
    Fleet::new(&yaml)
        .gamectl()
        .arg("servers")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at most 86400 seconds"));
}
