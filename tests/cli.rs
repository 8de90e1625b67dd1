use std::fs;

use assert_cmd::Command;
use chrono::{Datelike, Local};
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env_remove("EXPENSE_TRACKER_DATA_DIR")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

#[test]
fn menu_add_and_view_summary() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .write_stdin("1\nCoffee\n3.50\nFood\n1\nBus\n2.00\nTransport\n4\n5\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1     Coffee"))
        .stdout(predicate::str::contains("2     Bus"))
        .stdout(predicate::str::contains("Total Expenses: $5.50"));

    let stored = fs::read_to_string(data_dir.path().join("expenses.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(value[0]["description"], "Coffee");
    assert_eq!(value[0]["amount"], 3.5);
    assert_eq!(value[1]["category"], "Transport");
    assert!(stored.contains("\n    {"));
}

#[test]
fn subcommands_round_trip() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["add", "Coffee", "3.50", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense"));
    expenses(&data_dir)
        .args(["add", "Bus", "2", "Transport"])
        .assert()
        .success();

    expenses(&data_dir)
        .args(["update", "2", "--amount", "12.5"])
        .assert()
        .success();

    expenses(&data_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12.50"));

    expenses(&data_dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense: Coffee"));

    expenses(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: $12.50"));
}

#[test]
fn empty_summary_is_not_zero() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses to summarize"))
        .stdout(predicate::str::contains("0.00").not());
}

#[test]
fn invalid_input_fails_subcommand() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["add", "Coffee", "abc", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    expenses(&data_dir)
        .args(["month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));

    expenses(&data_dir)
        .args(["update", "999", "--description", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid index 999"));
}

#[test]
fn budget_check_against_current_year() {
    let data_dir = TempDir::new().unwrap();
    let year = Local::now().year();
    fs::write(
        data_dir.path().join("expenses.json"),
        format!(
            r#"[{{"description": "Rent", "amount": 100.0, "category": "Housing", "date": "{}-06-01 09:00:00"}}]"#,
            year
        ),
    )
    .unwrap();

    expenses(&data_dir)
        .args(["budget", "6", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("exceeded your budget for June {}", year)))
        .stdout(predicate::str::contains("Budget: $50.00"))
        .stdout(predicate::str::contains("Total Spent: $100.00"));

    expenses(&data_dir)
        .args(["budget", "6", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("within your budget"));
}

#[test]
fn corrupted_store_is_reported_and_preserved() {
    let data_dir = TempDir::new().unwrap();
    fs::write(data_dir.path().join("expenses.json"), "{ broken").unwrap();

    expenses(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Error: expenses.json is corrupted. Initializing with an empty list.",
        ))
        .stdout(predicate::str::contains("No expenses found"));

    expenses(&data_dir)
        .args(["add", "Coffee", "3.50", "Food"])
        .assert()
        .success();

    let preserved = fs::read_dir(data_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .any(|e| e.file_name().to_string_lossy().starts_with("expenses.json.corrupt-"));
    assert!(preserved);
}

#[test]
fn export_writes_csv() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses to export"));

    expenses(&data_dir)
        .args(["add", "Lunch, with team", "18", "Food"])
        .assert()
        .success();

    expenses(&data_dir)
        .write_stdin("8\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses exported to"));

    let csv = fs::read_to_string(data_dir.path().join("expenses.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("description,amount,category,date"));
    assert!(lines.next().unwrap().starts_with("\"Lunch, with team\",18.0,Food,"));
}

#[test]
fn export_failure_reports_io_message() {
    let data_dir = TempDir::new().unwrap();
    expenses(&data_dir)
        .args(["add", "Coffee", "3.50", "Food"])
        .assert()
        .success();
    fs::create_dir(data_dir.path().join("expenses.csv")).unwrap();

    expenses(&data_dir)
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to export expenses to CSV. Error: Is a directory",
        ));

    expenses(&data_dir)
        .write_stdin("8\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Failed to export expenses to CSV. Error: Is a directory",
        ));
}

#[test]
fn unreadable_store_is_fatal() {
    let data_dir = TempDir::new().unwrap();
    fs::create_dir(data_dir.path().join("expenses.json")).unwrap();

    expenses(&data_dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage error"))
        .stderr(predicate::str::contains("Is a directory"))
        .stderr(predicate::str::contains("corrupted").not());

    expenses(&data_dir)
        .write_stdin("4\n9\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Is a directory"));

    assert!(data_dir.path().join("expenses.json").is_dir());
}

#[test]
fn config_writes_default_settings() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema version:         1"))
        .stdout(predicate::str::contains("Currency symbol:        $"));

    assert!(data_dir.path().join("config.json").exists());
}
