//! CLI info integration tests
//!
//! These tests drive the built binary end to end: a real runtime, the
//! real tracing facility, and the build-script metadata.

use std::process::Command;

#[test]
fn test_info_prints_version_constant() {
    let bin = env!("CARGO_BIN_EXE_emberlog-cli");

    let output = Command::new(bin)
        .arg("info")
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("version="),
        "Output should carry the version constant, got: {}",
        stdout
    );
    assert!(stdout.contains("build_number="));
    assert!(stdout.contains("commit="));
}

#[test]
fn test_info_json_carries_every_published_constant() {
    let bin = env!("CARGO_BIN_EXE_emberlog-cli");

    let output = Command::new(bin)
        .args(["info", "--json"])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let doc: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");

    for name in [
        "version",
        "build_number",
        "host",
        "date",
        "commit",
        "compiler",
        "cmake",
        "all",
    ] {
        assert!(
            doc.get(name).is_some(),
            "JSON output should carry '{}'",
            name
        );
    }
    assert!(
        doc["build_number"].is_i64(),
        "build_number should publish as an integer"
    );
}
