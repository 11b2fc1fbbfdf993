use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("sweetshop")
        .env("SWEETSHOP_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_prints_effective_values() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "api_base_url = \"http://shop.test\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("sweetshop")
        .env("SWEETSHOP_HOME", dir.path())
        .env_remove("SWEETSHOP_BASE_URL")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_base_url = \"http://shop.test\""))
        .stdout(predicate::str::contains("request_timeout_secs = 30"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("sweetshop")
        .env("SWEETSHOP_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    assert!(config_path.exists());

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("# api_base_url ="));
    assert!(contents.contains("# request_timeout_secs ="));
}
