//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with an isolated config directory and no colors
fn lipunto_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lipunto").expect("binary is built");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("LIPUNTO_LAYOUT")
        .env_remove("LIPUNTO_SOURCE");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    lipunto_bin(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("keyboard layout"))
        .stdout(predicate::str::contains("--layout"))
        .stdout(predicate::str::contains("--source"))
        .stdout(predicate::str::contains("--delay-paste"))
        .stdout(predicate::str::contains("--show-popup"))
        .stdout(predicate::str::contains("--no-popup"))
        .stdout(predicate::str::contains("selected"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    lipunto_bin(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lipunto"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    lipunto_bin(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            home.path().to_string_lossy().to_string(),
        ))
        .stdout(predicate::str::contains("lipunto"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    let home = TempDir::new().unwrap();
    lipunto_bin(&home)
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_init_then_list_shows_defaults() {
    let home = TempDir::new().unwrap();
    lipunto_bin(&home)
        .args(["config", "init"])
        .assert()
        .success();

    assert!(home.path().join("lipunto").join("config.toml").exists());

    lipunto_bin(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("layout: en_ru"))
        .stdout(predicate::str::contains("delays.paste: 0.1"))
        .stdout(predicate::str::contains("ui.popup_timeout: 5"));
}

#[test]
fn config_init_twice_fails() {
    let home = TempDir::new().unwrap();
    lipunto_bin(&home).args(["config", "init"]).assert().success();
    lipunto_bin(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    lipunto_bin(&home)
        .args(["config", "set", "delays.text_process", "0.35"])
        .assert()
        .success();

    lipunto_bin(&home)
        .args(["config", "get", "delays.text_process"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0.35\n"));
}

#[test]
fn config_get_unset_key() {
    let home = TempDir::new().unwrap();
    lipunto_bin(&home)
        .args(["config", "get", "layout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn popup_flags_conflict() {
    let home = TempDir::new().unwrap();
    lipunto_bin(&home)
        .args(["--show-popup", "--no-popup"])
        .assert()
        .code(2);
}

#[test]
fn unknown_mode_is_usage_error() {
    let home = TempDir::new().unwrap();
    lipunto_bin(&home).arg("paragraph").assert().code(2);
}

#[test]
fn missing_tools_fail_before_any_action() {
    let home = TempDir::new().unwrap();
    let empty_path = TempDir::new().unwrap();
    lipunto_bin(&home)
        .env("PATH", empty_path.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing required tools"))
        .stderr(predicate::str::contains("qdbus"))
        .stderr(predicate::str::contains("ydotool"));
}
