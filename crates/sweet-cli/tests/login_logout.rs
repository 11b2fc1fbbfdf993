//! Integration tests for login/logout commands.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn grant(token: &str, role: &str) -> serde_json::Value {
    serde_json::json!({
        "access_token": token,
        "token_type": "bearer",
        "role": role,
    })
}

#[tokio::test]
async fn test_login_stores_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_string_contains("username=alice"))
        .and(body_string_contains("password=s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(grant("tok-abc123", "user")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp = tempdir().unwrap();
    let creds_path = temp.path().join("credentials.json");

    cargo_bin_cmd!("sweetshop")
        .env("SWEETSHOP_HOME", temp.path())
        .env("SWEETSHOP_BASE_URL", mock_server.uri())
        .args(["login", "--username", "alice", "--password", "s3cret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in to Sweet Shop as alice"));

    assert!(creds_path.exists(), "credentials.json should exist");
    let contents = fs::read_to_string(&creds_path).unwrap();
    let creds: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(creds["token"], "tok-abc123");
    assert_eq!(creds["role"], "user");
    assert_eq!(creds["username"], "alice");
}

#[tokio::test]
async fn test_login_reads_password_from_stdin() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_string_contains("password=from-pipe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(grant("tok-pipe", "admin")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp = tempdir().unwrap();

    cargo_bin_cmd!("sweetshop")
        .env("SWEETSHOP_HOME", temp.path())
        .env("SWEETSHOP_BASE_URL", mock_server.uri())
        .args(["login", "--username", "boss"])
        .write_stdin("from-pipe\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(admin)"));
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"detail": "Incorrect username or password"})),
        )
        .mount(&mock_server)
        .await;

    let temp = tempdir().unwrap();

    cargo_bin_cmd!("sweetshop")
        .env("SWEETSHOP_HOME", temp.path())
        .env("SWEETSHOP_BASE_URL", mock_server.uri())
        .args(["login", "--username", "alice", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect username or password"));

    assert!(!temp.path().join("credentials.json").exists());
}

#[test]
fn test_logout_when_not_logged_in() {
    let temp = tempdir().unwrap();

    cargo_bin_cmd!("sweetshop")
        .env("SWEETSHOP_HOME", temp.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in to Sweet Shop"));
}

#[test]
fn test_logout_clears_stored_session() {
    let temp = tempdir().unwrap();
    let creds_path = temp.path().join("credentials.json");
    fs::write(
        &creds_path,
        r#"{"token":"tok-old","role":"user","username":"alice"}"#,
    )
    .unwrap();

    cargo_bin_cmd!("sweetshop")
        .env("SWEETSHOP_HOME", temp.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out from Sweet Shop"));

    let contents = fs::read_to_string(&creds_path).unwrap();
    let creds: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(creds.get("token").is_none(), "token should be cleared");
}
