use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const GET_ARGS: [&str; 7] = [
    "--get-as-json",
    "sheet-id",
    "Sheet1",
    "A1:B2",
    "ROWS",
    "FORMATTED_VALUE",
    "SERIAL_NUMBER",
];

fn gsheets(log_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gsheets").unwrap();
    cmd.env("LOG_DIR", log_dir).env_remove("SA_SECRETS_FILE");
    cmd
}

fn read_log(log_dir: &Path) -> String {
    std::fs::read_to_string(log_dir.join("sheets.log")).unwrap_or_default()
}

#[test]
fn test_requires_an_operation() {
    let temp_dir = tempfile::tempdir().unwrap();

    gsheets(temp_dir.path())
        .arg("--debug")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("required"));

    // Rejected before logging is set up
    assert!(!temp_dir.path().join("sheets.log").exists());
}

#[test]
fn test_operations_are_mutually_exclusive() {
    let temp_dir = tempfile::tempdir().unwrap();

    gsheets(temp_dir.path())
        .env("SA_SECRETS_FILE", temp_dir.path().join("sa.json"))
        .args(GET_ARGS)
        .args(["--append-data", "sheet-id", "Sheet1", "A:B", "ROWS", "[]"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_wrong_number_of_values_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    gsheets(temp_dir.path())
        .args(["--append-data", "sheet-id", "Sheet1", "A:B", "ROWS"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_secrets_file_variable() {
    let temp_dir = tempfile::tempdir().unwrap();

    gsheets(temp_dir.path())
        .args(GET_ARGS)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Env var SA_SECRETS_FILE missing"));

    assert!(read_log(temp_dir.path()).contains("Env var SA_SECRETS_FILE missing"));
}

#[test]
fn test_malformed_append_payload() {
    let temp_dir = tempfile::tempdir().unwrap();

    gsheets(temp_dir.path())
        .env("SA_SECRETS_FILE", temp_dir.path().join("sa.json"))
        .args(["--append-data", "sheet-id", "Log", "A:B", "ROWS", r#"[["a", "b"]"#])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Parsing data for spreadsheet sheet-id sheet Log range A:B failed",
        ));
}

#[test]
fn test_unreadable_credentials() {
    let temp_dir = tempfile::tempdir().unwrap();
    let key_path = temp_dir.path().join("sa.json");
    std::fs::write(&key_path, "not a service account key").unwrap();

    gsheets(temp_dir.path())
        .env("SA_SECRETS_FILE", &key_path)
        .args(GET_ARGS)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to load service account credentials"));
}

#[test]
fn test_debug_logs_lifecycle_to_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let log_dir = temp_dir.path().join("nested").join("log");

    gsheets(&log_dir)
        .arg("--debug")
        .args(GET_ARGS)
        .assert()
        .code(1);

    let log = read_log(&log_dir);
    assert!(log.contains("gsheets / Google Sheets values"), "{}", log);
    assert!(log.contains("Starting"), "{}", log);
    assert!(log.contains("Settings: "), "{}", log);
    assert!(log.contains("Caught error on execution"), "{}", log);
    assert!(log.contains("Finished with errors"), "{}", log);
}

#[test]
fn test_default_level_logs_errors_only() {
    let temp_dir = tempfile::tempdir().unwrap();

    gsheets(temp_dir.path())
        .args(GET_ARGS)
        .assert()
        .code(1);

    let log = read_log(temp_dir.path());
    assert!(log.contains("ERROR"), "{}", log);
    assert!(!log.contains("Starting"), "{}", log);
}

#[cfg(unix)]
#[test]
fn test_non_unicode_environment_is_not_fatal() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = tempfile::tempdir().unwrap();

    // Unrelated variables are never read
    gsheets(temp_dir.path())
        .env("GSHEETS_JUNK", OsStr::from_bytes(b"\xff\xfe"))
        .args(GET_ARGS)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Env var SA_SECRETS_FILE missing"));

    gsheets(temp_dir.path())
        .env("SA_SECRETS_FILE", OsStr::from_bytes(b"/tmp/\xff\xfe.json"))
        .args(GET_ARGS)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Env var SA_SECRETS_FILE is not valid unicode"));
}
