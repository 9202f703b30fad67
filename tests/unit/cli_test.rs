//! Integration tests for repath CLI

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// A repath invocation isolated from the user's home config
fn repath(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("repath"));
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    repath(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repath"));
}

#[test]
fn test_version_command_json() {
    let home = TempDir::new().unwrap();
    repath(&home)
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""version""#));
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    repath(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Express-style route paths"));
}

#[test]
fn test_tokens() {
    let home = TempDir::new().unwrap();
    repath(&home)
        .args(["tokens", "/user/:id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"/user\""))
        .stdout(predicate::str::contains("id pattern=[^/]+?"));
}

#[test]
fn test_regex() {
    let home = TempDir::new().unwrap();
    repath(&home)
        .args(["regex", "/user/:id"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r"^/user/([^/]+?)(?:/(?=$))?$"))
        .stdout(predicate::str::contains("Keys:"));
}

#[test]
fn test_regex_strict_flag() {
    let home = TempDir::new().unwrap();
    repath(&home)
        .args(["--strict", "regex", "/test/"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r"^/test/$"));
}

#[test]
fn test_regex_json_lists_keys() {
    let home = TempDir::new().unwrap();
    let output = repath(&home).args(["--json", "regex", "/a", "/b/:id"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["keys"][0]["name"], "id");
    assert!(json["regex"].as_str().unwrap().starts_with("(?:^/a"));
}

#[test]
fn test_match() {
    let home = TempDir::new().unwrap();
    repath(&home)
        .args(["match", "/user/:id", "/user/42", "/team/1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id = 42"))
        .stdout(predicate::str::contains("/team/1"));
}

#[test]
fn test_match_json() {
    let home = TempDir::new().unwrap();
    let output = repath(&home)
        .args(["--json", "match", "/:test*", "/some/basic/route"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["results"][0]["match"]["groups"][0], "some/basic/route");
}

#[test]
fn test_build_pairs() {
    let home = TempDir::new().unwrap();
    repath(&home)
        .args(["build", "/:test+", "-p", "test=a", "-p", "test=b"])
        .assert()
        .success()
        .stdout("/a/b\n");
}

#[test]
fn test_build_json_params() {
    let home = TempDir::new().unwrap();
    repath(&home)
        .args(["build", "/user/:id/:tab?", "--params", r#"{"id": 7}"#])
        .assert()
        .success()
        .stdout("/user/7\n");
}

#[test]
fn test_build_missing_param_fails() {
    let home = TempDir::new().unwrap();
    repath(&home)
        .args(["build", "/user/:id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#"Expected "id" to be defined"#));
}

#[test]
fn test_config_file_sets_defaults() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("repath.toml");
    fs::write(&config, "[options]\nstrict = true\n").unwrap();

    repath(&home)
        .args(["--config", config.to_str().unwrap(), "regex", "/test"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r"^/test$"));
}

#[test]
fn test_home_config_is_read() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".repath")).unwrap();
    fs::write(home.path().join(".repath/config.toml"), "[options]\nend = false\n").unwrap();

    repath(&home)
        .args(["regex", "/test"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r"(?=/|$)"));
}

#[test]
fn test_missing_config_file_fails() {
    let home = TempDir::new().unwrap();
    repath(&home)
        .args(["--config", "does-not-exist.toml", "regex", "/test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
