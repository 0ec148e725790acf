use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

/// Nothing listens on the discard port, so any request that gets sent fails
/// fast with a transport error.
const UNREACHABLE: &str = "http://127.0.0.1:9";

/// A command isolated from the caller's environment and config file.
fn cmd(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocketsmith").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("POCKETSMITH_DEVELOPER_KEY")
        .env_remove("POCKETSMITH_ALLOW_WRITES")
        .env_remove("POCKETSMITH_LOG")
        .env("POCKETSMITH_CONFIG", dir.path().join("config.toml"))
        .env("POCKETSMITH_BASE_URL", UNREACHABLE);
    cmd
}

/// Answers one request on loopback with `status` and a JSON `body`, then
/// returns the raw request.
fn stub_api(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/v2", listener.local_addr().unwrap());
    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let len = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .map_or(0, |v| v.trim().parse::<usize>().unwrap());
                if buf.len() >= end + 4 + len {
                    break;
                }
            }
        }
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\n\
             content-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8(buf).unwrap()
    });
    (base_url, handle)
}

fn stderr_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stderr).unwrap()
}

#[test]
fn missing_developer_key_fails_before_network() {
    let dir = tempfile::tempdir().unwrap();
    let output = cmd(&dir).arg("me").assert().code(1).stdout("").get_output().clone();

    let err = stderr_json(&output);
    assert_eq!(err["kind"], "config");
    assert!(err["error"]
        .as_str()
        .unwrap()
        .contains("POCKETSMITH_DEVELOPER_KEY"));
}

#[test]
fn update_blocked_when_writes_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let output = cmd(&dir)
        .env("POCKETSMITH_DEVELOPER_KEY", "test_developer_key")
        .args(["transactions", "update", "987654", "--category-id", "28637787"])
        .assert()
        .code(1)
        .stdout("")
        .get_output()
        .clone();

    let err = stderr_json(&output);
    assert_eq!(err["kind"], "permission");
    assert!(err["error"]
        .as_str()
        .unwrap()
        .starts_with("write operations are disabled"));
}

#[test]
fn every_write_command_is_gated() {
    let dir = tempfile::tempdir().unwrap();
    let commands: [&[&str]; 8] = [
        &["transactions", "delete", "123"],
        &[
            "transactions", "create", "456", "--payee", "Test", "--amount", "-10", "--date",
            "2024-01-01",
        ],
        &["categories", "create", "123", "--title", "New"],
        &["categories", "update", "123", "--title", "Updated"],
        &["categories", "delete", "123"],
        &["budget", "refresh", "123"],
        &["attachments", "assign", "789", "123"],
        &["attachments", "unassign", "789", "123"],
    ];
    for args in commands {
        cmd(&dir)
            .env("POCKETSMITH_DEVELOPER_KEY", "k")
            .env("POCKETSMITH_ALLOW_WRITES", "false")
            .args(args)
            .assert()
            .code(1)
            .stdout("")
            .stderr(contains("POCKETSMITH_ALLOW_WRITES"));
    }
}

#[test]
fn allowed_write_reaches_the_transport() {
    let dir = tempfile::tempdir().unwrap();
    let output = cmd(&dir)
        .env("POCKETSMITH_DEVELOPER_KEY", "k")
        .env("POCKETSMITH_ALLOW_WRITES", "TRUE")
        .args(["transactions", "update", "987654", "--category-id", "28637787"])
        .assert()
        .code(1)
        .get_output()
        .clone();

    assert_eq!(stderr_json(&output)["kind"], "transport");
}

#[test]
fn invalid_date_is_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = cmd(&dir)
        .env("POCKETSMITH_DEVELOPER_KEY", "k")
        .args(["transactions", "list-by-user", "123456", "--start-date", "2024-13-01"])
        .assert()
        .code(1)
        .stdout("")
        .get_output()
        .clone();

    let err = stderr_json(&output);
    assert_eq!(err["kind"], "validation");
    assert!(err["error"].as_str().unwrap().contains("2024-13-01"));
}

#[test]
fn unreachable_api_is_a_transport_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = cmd(&dir)
        .env("POCKETSMITH_DEVELOPER_KEY", "k")
        .args(["transactions", "get", "987654"])
        .assert()
        .code(1)
        .stdout("")
        .get_output()
        .clone();

    let err = stderr_json(&output);
    assert_eq!(err["kind"], "transport");
    assert!(err.get("status_code").is_none());
}

#[test]
fn config_show_never_prints_the_key() {
    let dir = tempfile::tempdir().unwrap();
    let output = cmd(&dir)
        .env("POCKETSMITH_DEVELOPER_KEY", "very-secret-key")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("very-secret-key").not())
        .get_output()
        .clone();

    let shown: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["developer_key_set"], true);
    assert_eq!(shown["writes_allowed"], false);
    assert_eq!(shown["base_url"], UNREACHABLE);
}

#[test]
fn config_show_works_without_a_key() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "per_page = 100\n").unwrap();
    let output = cmd(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .get_output()
        .clone();

    let shown: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["developer_key_set"], false);
    assert_eq!(shown["per_page"], 100);
    assert_eq!(shown["config_file_exists"], true);
}

#[test]
fn broken_config_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "per_page = \"lots\"\n").unwrap();
    let output = cmd(&dir)
        .env("POCKETSMITH_DEVELOPER_KEY", "k")
        .arg("me")
        .assert()
        .code(1)
        .get_output()
        .clone();

    assert_eq!(stderr_json(&output)["kind"], "config");
}

#[test]
fn usage_errors_come_from_clap() {
    let dir = tempfile::tempdir().unwrap();
    cmd(&dir)
        .args(["transactions", "frobnicate"])
        .assert()
        .code(2)
        .stdout("");
}

#[test]
fn not_found_goes_to_stderr_only() {
    let dir = tempfile::tempdir().unwrap();
    let (base_url, server) = stub_api("404 Not Found", r#"{"error":"Transaction not found"}"#);
    let output = cmd(&dir)
        .env("POCKETSMITH_DEVELOPER_KEY", "test_developer_key")
        .env("POCKETSMITH_BASE_URL", &base_url)
        .args(["transactions", "get", "987654"])
        .assert()
        .code(1)
        .stdout("")
        .get_output()
        .clone();

    let request = server.join().unwrap().to_lowercase();
    assert!(request.starts_with("get /v2/transactions/987654 "));
    assert!(request.contains("x-developer-key: test_developer_key"));

    let err = stderr_json(&output);
    assert_eq!(err["kind"], "remote");
    assert_eq!(err["status_code"], 404);
    assert!(err["error"].as_str().unwrap().contains("not found"));
}

#[test]
fn allowed_update_prints_the_updated_transaction() {
    let dir = tempfile::tempdir().unwrap();
    let (base_url, server) = stub_api(
        "200 OK",
        r#"{"id":987654,"payee":"Cafe","category":{"id":28637787}}"#,
    );
    let output = cmd(&dir)
        .env("POCKETSMITH_DEVELOPER_KEY", "test_developer_key")
        .env("POCKETSMITH_ALLOW_WRITES", "true")
        .env("POCKETSMITH_BASE_URL", &base_url)
        .args(["transactions", "update", "987654", "--category-id", "28637787"])
        .assert()
        .success()
        .stderr("")
        .get_output()
        .clone();

    let request = server.join().unwrap();
    assert!(request.starts_with("PUT /v2/transactions/987654 "));
    assert!(request.ends_with(r#"{"category_id":28637787}"#));

    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["category"]["id"], 28637787);
}
