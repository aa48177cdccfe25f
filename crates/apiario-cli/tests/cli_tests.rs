use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with plain output, pointed at a database and log file inside
/// `temp_dir` so tests never touch the user's data directory.
fn apiario_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("apiario").expect("Failed to find apiario binary");
    cmd.current_dir(temp_dir.path())
        .env("DB_NAME", temp_dir.path().join("cli_test.db"))
        .env("APIARIO_LOG_FILE", temp_dir.path().join("cli_test.log"))
        .env("RUST_LOG", "info")
        .arg("--no-color");
    cmd
}

#[test]
fn test_cli_exit_option() {
    let temp_dir = create_cli_test_environment();

    apiario_cmd(&temp_dir)
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Run a custom query"))
        .stdout(predicate::str::contains("4. Exit"));
}

#[test]
fn test_cli_end_of_input_exits_cleanly() {
    let temp_dir = create_cli_test_environment();

    apiario_cmd(&temp_dir)
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("Connection closed"));
}

#[test]
fn test_cli_invalid_option() {
    let temp_dir = create_cli_test_environment();

    apiario_cmd(&temp_dir)
        .write_stdin("7\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option '7'. Choose 1-4."));
}

#[test]
fn test_cli_add_beekeeper_persists() {
    let temp_dir = create_cli_test_environment();

    apiario_cmd(&temp_dir)
        .write_stdin("3\n1\nAna\nRuiz\n2\n1\nNorte\n10\nTandil\n\n\n2\n1\nSur\n5\nTandil\n\n\n11\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created beekeeper with ID: 1"))
        .stdout(predicate::str::contains("Created apiary with ID: 2"));

    // A second run sees the same data
    apiario_cmd(&temp_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("| Ana Ruiz | 2 | 15 |"));
}

#[test]
fn test_cli_list_beekeepers() {
    let temp_dir = create_cli_test_environment();

    apiario_cmd(&temp_dir)
        .write_stdin("3\n8\n1\nAna\nRuiz\n8\n11\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No beekeepers found."))
        .stdout(predicate::str::contains("| 1 | Ruiz | Ana |"));
}

#[test]
fn test_cli_custom_query() {
    let temp_dir = create_cli_test_environment();

    apiario_cmd(&temp_dir)
        .write_stdin("3\n7\nT-0001\n11\n1\nSELECT num_registro FROM tambor\nback\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("| num_registro |"))
        .stdout(predicate::str::contains("| T-0001 |"))
        .stdout(predicate::str::contains("1 rows"));
}

#[test]
fn test_cli_dashboards_on_empty_database() {
    let temp_dir = create_cli_test_environment();

    apiario_cmd(&temp_dir)
        .write_stdin("2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Hives per Beekeeper"))
        .stdout(predicate::str::contains("No data to chart."))
        .stdout(predicate::str::contains("No pending samples found."));
}

#[test]
fn test_cli_check() {
    let temp_dir = create_cli_test_environment();

    apiario_cmd(&temp_dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Success:** Connected to"))
        .stdout(predicate::str::contains("| apicultor | 0 |"))
        .stdout(predicate::str::contains("Foreign key enforcement: on"));
}

#[test]
fn test_cli_check_fails_on_invalid_database() {
    let temp_dir = create_cli_test_environment();
    let bogus = temp_dir.path().join("bogus.db");
    fs::write(&bogus, "definitely not sqlite\n".repeat(300)).expect("Failed to write file");

    apiario_cmd(&temp_dir)
        .env("DB_NAME", &bogus)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to"));
}

#[test]
fn test_cli_summary_on_empty_database() {
    let temp_dir = create_cli_test_environment();

    apiario_cmd(&temp_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Pending Samples"))
        .stdout(predicate::str::contains("No species found."));
}

#[test]
fn test_cli_writes_log_file() {
    let temp_dir = create_cli_test_environment();

    apiario_cmd(&temp_dir).write_stdin("4\n").assert().success();
    apiario_cmd(&temp_dir).write_stdin("4\n").assert().success();

    let log = fs::read_to_string(temp_dir.path().join("cli_test.log"))
        .expect("Log file should exist");
    assert_eq!(log.matches(" - INFO - Apiario started").count(), 2);
    assert!(log.contains(" - INFO - Connection closed"));
}

#[test]
fn test_cli_load_beekeepers_from_csv() {
    let temp_dir = create_cli_test_environment();
    let csv = temp_dir.path().join("apicultores.csv");
    fs::write(&csv, "nombre,apellido\nAna,Ruiz\nLuis,Alvarez\n").expect("Failed to write CSV");

    apiario_cmd(&temp_dir)
        .arg("load")
        .arg("apicultor")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 records"));

    apiario_cmd(&temp_dir)
        .write_stdin("3\n8\n11\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("| 2 | Alvarez | Luis |"));
}

#[test]
fn test_cli_load_rejects_malformed_csv() {
    let temp_dir = create_cli_test_environment();
    let csv = temp_dir.path().join("especies.csv");
    fs::write(&csv, "nombre_comun\nColza\n").expect("Failed to write CSV");

    apiario_cmd(&temp_dir)
        .arg("load")
        .arg("especies")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("CSV error"));
}

#[test]
fn test_cli_custom_query_refuses_pragma() {
    let temp_dir = create_cli_test_environment();

    apiario_cmd(&temp_dir)
        .write_stdin("1\nPRAGMA foreign_keys = OFF\nback\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Error:** Invalid input for field 'sql'"));
}

#[test]
fn test_cli_list_apiaries_of_beekeeper() {
    let temp_dir = create_cli_test_environment();

    apiario_cmd(&temp_dir)
        .write_stdin("3\n1\nAna\nRuiz\n2\n1\nNorte\n10\nTandil\n\n\n10\n1\n11\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Apiaries of Ana Ruiz"))
        .stdout(predicate::str::contains("**Total hives:** 10"));
}
