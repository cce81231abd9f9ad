//! Tests for the publish-wizard binary
//!
//! Each test writes a draft to a temporary file, runs one command and
//! checks exit status and output.

use serde_json::{Value, json};
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn draft_file(draft: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    write!(file, "{}", draft).expect("Should write draft");
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_publish-wizard"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Should run publish-wizard")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("Stdout should be JSON")
}

fn complete_draft() -> Value {
    json!({
        "localName": "Salón El Recreo",
        "descriptionMessage": "Casa de campo con piscina y zona de parrillas",
        "country": "Peru",
        "city": "Lima",
        "district": "Cieneguilla",
        "street": "Av. Nueva Toledo 800",
        "latitude": -12.11,
        "longitude": -76.81,
        "price": "180",
        "capacity": 150,
        "photoUrls": ["https://cdn.test/campo.jpg"],
        "features": ["piscina", "parrilla"],
        "localCategoryId": 2
    })
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn test_validate_complete_draft_succeeds() {
    let file = draft_file(&complete_draft());
    let output = run(&["validate", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("ready to publish"));
}

#[test]
fn test_validate_reports_field_errors() {
    let mut draft = complete_draft();
    draft["capacity"] = json!("3.5");
    draft["photoUrls"] = json!([]);
    let file = draft_file(&draft);

    let output = run(&["--json", "validate", file.path().to_str().unwrap()]);
    assert!(!output.status.success());

    let report = stdout_json(&output);
    assert_eq!(report["valid"], json!(false));
    assert_eq!(
        report["errors"],
        json!({
            "capacity": ["El aforo debe ser un numero entero"],
            "photoUrls": ["Debes agregar al menos una imagen"]
        })
    );
}

#[test]
fn test_validate_missing_file_fails() {
    let output = run(&["validate", "/nonexistent/draft.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read form"));
}

// =============================================================================
// step
// =============================================================================

#[test]
fn test_step_location_without_pin() {
    let mut draft = complete_draft();
    draft["latitude"] = Value::Null;
    draft["longitude"] = Value::Null;
    let file = draft_file(&draft);

    let output = run(&["step", "4", file.path().to_str().unwrap(), "--json"]);
    assert!(!output.status.success());

    let report = stdout_json(&output);
    assert_eq!(report["step"], json!(4));
    assert_eq!(report["gate"], json!(true));
    assert_eq!(report["valid"], json!(false));
    assert!(report["errors"]["latitude"].is_array());
    assert!(report["errors"]["longitude"].is_array());
}

#[test]
fn test_step_unknown_number_fails() {
    let file = draft_file(&complete_draft());
    let output = run(&["step", "11", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown wizard step: 11"));
}

// =============================================================================
// progress
// =============================================================================

#[test]
fn test_progress_json() {
    let file = draft_file(&json!({"localCategoryId": 3, "price": 75}));
    let output = run(&["progress", "--json", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({"completed": 2, "total": 5, "percentage": 40, "steps": [3, 9]})
    );
}

// =============================================================================
// request
// =============================================================================

#[test]
fn test_request_prints_payload() {
    let file = draft_file(&complete_draft());
    let output = run(&["request", file.path().to_str().unwrap(), "--user-id", "5"]);
    assert!(output.status.success());

    let payload = stdout_json(&output);
    assert_eq!(payload["userId"], json!(5));
    assert_eq!(payload["price"], json!(180.0));
    assert_eq!(payload["capacity"], json!(150));
    assert_eq!(payload["features"], json!("piscina,parrilla"));
}

#[test]
fn test_request_refuses_invalid_draft() {
    let mut draft = complete_draft();
    draft["localName"] = json!("Hi");
    let file = draft_file(&draft);

    let output = run(&["--json", "request", file.path().to_str().unwrap(), "-u", "5"]);
    assert!(!output.status.success());
    assert_eq!(
        stdout_json(&output)["errors"],
        json!([{
            "field": "localName",
            "message": "El nombre debe tener al menos 5 caracteres"
        }])
    );
}
