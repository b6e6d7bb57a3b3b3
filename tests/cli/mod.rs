//! E2E tests against the actual crate binary: generated payloads come out as
//! one JSON object per line.

use std::process::Command;

#[test]
fn binary_emits_the_requested_number_of_json_payloads() {
    let output = Command::new(env!("CARGO_BIN_EXE_shipping-fixtures"))
        .args(["address", "3"])
        .output()
        .expect("failed to execute binary");

    assert!(
        output.status.success(),
        "binary exited with non-zero status.\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("binary output was not valid UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);

    for line in lines {
        let payload: serde_json::Value =
            serde_json::from_str(line).expect("line was not valid JSON");
        assert!(payload.get("street1").is_some());
    }
}

#[test]
fn binary_rejects_unknown_payload_kinds() {
    let output = Command::new(env!("CARGO_BIN_EXE_shipping-fixtures"))
        .arg("carrier-pigeon")
        .output()
        .expect("failed to execute binary");

    assert!(!output.status.success());
}
