//! End-to-end tests for the composepin CLI
//!
//! These tests run the compiled binary against a one-shot stub registry
//! served from a local TCP listener, and verify:
//! - `:latest` images are rewritten from the registry's tag listing
//! - Non-200 registry responses fall back to the literal latest tag
//! - Fatal paths (missing file, missing flags) exit non-zero

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

/// Serve `requests` HTTP responses with the given status line and body,
/// then shut down. Returns the base URL to point the binary at.
fn spawn_registry(status: &'static str, body: &'static str, requests: usize) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub registry");
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        for _ in 0..requests {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    (format!("http://{}", addr), handle)
}

fn composepin() -> Command {
    Command::cargo_bin("composepin").expect("binary under test")
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_latest_image_versioned_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(
        &temp_dir,
        "docker-compose.yml",
        "services:\n  web:\n    image: nginx:latest\n",
    );
    let output_dir = temp_dir.path().join("out");
    fs::create_dir(&output_dir).unwrap();

    let (url, server) = spawn_registry(
        "200 OK",
        r#"{"count": 2, "results": [
            {"name": "1.25", "last_updated": "2023-01-01T00:00:00.000000+00:00"},
            {"name": "1.26", "last_updated": "2023-06-01T00:00:00.000000+00:00"}
        ]}"#,
        1,
    );

    composepin()
        .arg("--files")
        .arg(&input)
        .arg("--output_dir")
        .arg(&output_dir)
        .arg("--tag_regex")
        .arg(r"^\d+\.\d+$")
        .arg("--docker_registry_url")
        .arg(&url)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing:"))
        .stdout(predicate::str::contains("versioned: nginx:1.26"));

    server.join().unwrap();

    let written = fs::read_to_string(output_dir.join("docker-compose.yml")).unwrap();
    let doc: serde_yaml::Value = serde_yaml::from_str(&written).unwrap();
    assert_eq!(
        doc["services"]["web"]["image"].as_str().unwrap(),
        "nginx:1.26"
    );
}

#[test]
fn test_registry_404_keeps_latest() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(
        &temp_dir,
        "stack.yml",
        "services:\n  svc:\n    image: foo:latest\n",
    );
    let output_dir = temp_dir.path().join("out");
    fs::create_dir(&output_dir).unwrap();

    let (url, server) = spawn_registry("404 Not Found", r#"{"detail": "not found"}"#, 1);

    composepin()
        .arg("--files")
        .arg(&input)
        .arg("--output_dir")
        .arg(&output_dir)
        .arg("--docker_registry_url")
        .arg(&url)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "version is not set using latest for foo",
        ));

    server.join().unwrap();

    let doc: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(output_dir.join("stack.yml")).unwrap()).unwrap();
    assert_eq!(doc["services"]["svc"]["image"].as_str().unwrap(), "foo:latest");
}

#[test]
fn test_pinned_and_untagged_services_need_no_registry() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_file(
        &temp_dir,
        "stack.yml",
        "services:\n  db:\n    image: postgres:15.2\n  cache:\n    image: redis\n",
    );
    let output_dir = temp_dir.path().join("out");
    fs::create_dir(&output_dir).unwrap();

    // Unroutable registry URL: the run must not issue any request
    composepin()
        .arg("--files")
        .arg(&input)
        .arg("--output_dir")
        .arg(&output_dir)
        .arg("--docker_registry_url")
        .arg("http://127.0.0.1:1")
        .assert()
        .success();

    let doc: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(output_dir.join("stack.yml")).unwrap()).unwrap();
    assert_eq!(
        doc["services"]["db"]["image"].as_str().unwrap(),
        "postgres:15.2"
    );
    assert_eq!(doc["services"]["cache"]["image"].as_str().unwrap(), "redis");
}

#[test]
fn test_multiple_files_processed_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_file(
        &temp_dir,
        "first.yml",
        "services:\n  a:\n    image: alpha:latest\n",
    );
    let second = write_file(
        &temp_dir,
        "second.yml",
        "services:\n  b:\n    image: beta:latest\n",
    );
    let output_dir = temp_dir.path().join("out");
    fs::create_dir(&output_dir).unwrap();

    let (url, server) = spawn_registry(
        "200 OK",
        r#"{"results": [{"name": "2.0", "last_updated": "2023-01-01T00:00:00.000000+00:00"}]}"#,
        2,
    );

    let assert = composepin()
        .arg("--files")
        .arg(&first)
        .arg(&second)
        .arg("--output_dir")
        .arg(&output_dir)
        .arg("--docker_registry_url")
        .arg(&url)
        .assert()
        .success();

    server.join().unwrap();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let first_pos = stdout.find("first.yml").unwrap();
    let second_pos = stdout.find("second.yml").unwrap();
    assert!(first_pos < second_pos, "files must be processed in order");

    assert!(output_dir.join("first.yml").exists());
    assert!(output_dir.join("second.yml").exists());
}

#[test]
fn test_missing_input_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("out");
    fs::create_dir(&output_dir).unwrap();

    composepin()
        .arg("--files")
        .arg(temp_dir.path().join("missing.yml"))
        .arg("--output_dir")
        .arg(&output_dir)
        .arg("--docker_registry_url")
        .arg("http://127.0.0.1:1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("compose file not found"))
        .stderr(predicate::str::contains("missing.yml"));
}

#[test]
fn test_earlier_outputs_remain_after_failure() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_file(
        &temp_dir,
        "good.yml",
        "services:\n  db:\n    image: postgres:15.2\n",
    );
    let output_dir = temp_dir.path().join("out");
    fs::create_dir(&output_dir).unwrap();

    composepin()
        .arg("--files")
        .arg(&good)
        .arg(temp_dir.path().join("missing.yml"))
        .arg("--output_dir")
        .arg(&output_dir)
        .arg("--docker_registry_url")
        .arg("http://127.0.0.1:1")
        .assert()
        .failure();

    // The file processed before the failure stays on disk
    assert!(output_dir.join("good.yml").exists());
    assert!(!output_dir.join("missing.yml").exists());
}

#[test]
fn test_required_flags() {
    composepin()
        .arg("--output_dir")
        .arg("out")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--files"));

    composepin()
        .arg("--files")
        .arg("a.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output_dir"));
}

#[test]
fn test_invalid_tag_regex_is_usage_error() {
    composepin()
        .args(["--files", "a.yml", "--output_dir", "out", "--tag_regex", "("])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid tag regex"));
}
