use assert_cmd::Command;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("tempfile");
    std::io::Write::write_all(&mut f, contents.as_bytes()).expect("write");
    f
}

const VALID_DOC: &str = r#"{
  "name": "user-flow",
  "executionMode": "Sequential",
  "requests": [
    {
      "id": "create",
      "name": "create-user",
      "method": "POST",
      "url": "https://api.example.com/users",
      "body": "{\"name\":\"ada\"}",
      "order": 1
    },
    {
      "id": "fetch",
      "name": "fetch-user",
      "url": "https://api.example.com/users/{{$[0].id}}",
      "order": 2,
      "dependsOn": ["create"]
    }
  ]
}"#;

#[test]
fn validate_accepts_a_valid_document() {
    let f = write_temp(VALID_DOC);

    let bin = assert_cmd::cargo::cargo_bin!("relay");
    let assert = Command::new(bin)
        .args(["validate", f.path().to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("ok: valid integration document"));
}

#[test]
fn validate_rejects_an_invalid_document() {
    let doc = r#"{
  "name": "",
  "requests": [
    {"name": "a", "url": "https://example.com/a", "order": 1},
    {"name": "b", "url": "https://example.com/b", "order": 1}
  ]
}"#;
    let f = write_temp(doc);

    let bin = assert_cmd::cargo::cargo_bin!("relay");
    let assert = Command::new(bin)
        .args(["validate", f.path().to_string_lossy().as_ref()])
        .assert()
        .code(2); // VALIDATION_FAILED

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("$.name"));
    assert!(stderr.contains("order"));
}

#[test]
fn validate_reports_missing_files_as_validation_failures() {
    let bin = assert_cmd::cargo::cargo_bin!("relay");
    Command::new(bin)
        .args(["validate", "/nonexistent/integration.json"])
        .assert()
        .code(2); // VALIDATION_FAILED
}

#[test]
fn validate_emits_json_when_asked() {
    let f = write_temp(VALID_DOC);

    let bin = assert_cmd::cargo::cargo_bin!("relay");
    let assert = Command::new(bin)
        .args([
            "validate",
            f.path().to_string_lossy().as_ref(),
            "--output",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("\"valid\":true"));
}

#[test]
fn yaml_documents_are_autodetected() {
    let doc = r#"
name: ping
requests:
  - name: ping
    url: https://example.com/ping
    order: 1
"#;
    let f = write_temp(doc);

    let bin = assert_cmd::cargo::cargo_bin!("relay");
    Command::new(bin)
        .args(["validate", f.path().to_string_lossy().as_ref()])
        .assert()
        .success();
}

#[test]
fn explicit_format_overrides_detection() {
    let doc = r#"
name: ping
requests:
  - name: ping
    url: https://example.com/ping
    order: 1
"#;
    let f = write_temp(doc);

    // A YAML document forced through the JSON parser cannot parse.
    let bin = assert_cmd::cargo::cargo_bin!("relay");
    Command::new(bin)
        .args([
            "validate",
            f.path().to_string_lossy().as_ref(),
            "--format",
            "json",
        ])
        .assert()
        .code(2); // VALIDATION_FAILED
}

#[test]
fn inspect_prints_the_request_plan() {
    let f = write_temp(VALID_DOC);

    let bin = assert_cmd::cargo::cargo_bin!("relay");
    let assert = Command::new(bin)
        .args(["inspect", f.path().to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Integration: user-flow"));
    assert!(stdout.contains("Mode: Sequential"));
    assert!(stdout.contains("1. create-user POST https://api.example.com/users"));
    assert!(stdout.contains("(after: create)"));
}

#[test]
fn inspect_rejects_invalid_documents() {
    let f = write_temp(r#"{"name": "empty", "requests": []}"#);

    let bin = assert_cmd::cargo::cargo_bin!("relay");
    Command::new(bin)
        .args(["inspect", f.path().to_string_lossy().as_ref()])
        .assert()
        .code(2); // VALIDATION_FAILED
}
