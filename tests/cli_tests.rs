use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_CLI_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_expenses_and_exit_persists_store() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .write_stdin("1\n50.25\nGroceries\ngroceries\n1\n20.50\nDinner\nentertainment\n9\n11\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"))
        .stdout(predicate::str::contains("Total amount spent: ₹70.75"))
        .stdout(predicate::str::contains("Expense data saved. Exiting program."));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(data_dir.path().join("expenses.json")).unwrap())
            .unwrap();

    assert_eq!(
        saved,
        serde_json::json!({
            "categories": ["groceries", "entertainment"],
            "entries": [
                {"amount": 50.25, "description": "Groceries", "category": "groceries"},
                {"amount": 20.5, "description": "Dinner", "category": "entertainment"}
            ]
        })
    );
    assert!(data_dir.path().join("expenses.svg").exists());
}

#[test]
fn saved_store_is_loaded_on_next_run() {
    let data_dir = TempDir::new().unwrap();
    fs::write(
        data_dir.path().join("expenses.json"),
        r#"{"categories": ["groceries", "transportation"], "entries": [
            {"amount": 50.25, "description": "Groceries for the week", "category": "groceries"},
            {"amount": 15.75, "description": "Bus fare", "category": "transportation"}
        ]}"#,
    )
    .unwrap();

    expense(&data_dir)
        .write_stdin("3\n6\n7\n8\n11\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Amount: ₹50.25, Description: Groceries for the week, Category: groceries",
        ))
        .stdout(predicate::str::contains(
            "Expense Categories: groceries, transportation",
        ))
        .stdout(predicate::str::contains("Highest Expense: Amount: ₹50.25"))
        .stdout(predicate::str::contains("Lowest Expense: Amount: ₹15.75"));
}

#[test]
fn export_on_empty_store_reports_nothing_recorded() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .write_stdin("10\n11\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));

    assert!(!data_dir.path().join("expenses.xlsx").exists());
}

#[test]
fn export_writes_spreadsheet() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .write_stdin("1\n12\nBooks\neducation\n10\n11\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("exported to"));

    let exported = fs::read(data_dir.path().join("expenses.xlsx")).unwrap();
    assert!(exported.starts_with(b"PK"));
}

#[test]
fn export_command_writes_csv_from_saved_store() {
    let data_dir = TempDir::new().unwrap();
    fs::write(
        data_dir.path().join("expenses.json"),
        r#"{"categories": ["education"], "entries": [
            {"amount": 12.0, "description": "Books", "category": "education"}
        ]}"#,
    )
    .unwrap();

    expense(&data_dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses"));

    let exported = fs::read_to_string(data_dir.path().join("expenses.csv")).unwrap();
    assert_eq!(exported, "amount,description,category\n12.0,Books,education\n");
}

#[test]
fn undecodable_input_in_operation_keeps_session() {
    let data_dir = TempDir::new().unwrap();
    let mut input = b"1\n35\nFuel\ntransportation\n1\n".to_vec();
    input.extend_from_slice(&[0xff, 0xfe, b'\n']);
    input.extend_from_slice(b"3\n11\n");

    expense(&data_dir)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("An error occurred:"))
        .stdout(predicate::str::contains(
            "1. Amount: ₹35.0, Description: Fuel, Category: transportation",
        ))
        .stdout(predicate::str::contains("Expense data saved. Exiting program."));

    assert!(data_dir.path().join("expenses.json").exists());
}

#[test]
fn closing_input_exits_without_saving() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .write_stdin("4\ntravel\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting without saving."));

    assert!(!data_dir.path().join("expenses.json").exists());
}

#[test]
fn malformed_store_is_fatal() {
    let data_dir = TempDir::new().unwrap();
    fs::write(data_dir.path().join("expenses.json"), "{ not json").unwrap();

    expense(&data_dir)
        .write_stdin("11\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load"));
}

#[test]
fn config_command_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.json"))
        .stdout(predicate::str::contains("Currency symbol:   ₹"));
}
