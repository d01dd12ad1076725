//! End-to-end tests for the tally binary
//!
//! Each test points TALLY_DATA_DIR at its own temp directory so runs are
//! isolated from the user's real ledger and from each other.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn help_describes_the_tool() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("records income and expense transactions"));
}

#[test]
fn balance_on_empty_ledger_is_zero() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance: $0.00"));
}

#[test]
fn add_then_balance_round_trips_through_the_file() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["txn", "add", "100.00", "Salary", "--kind", "income", "--date", "2024-05-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income of $100.00 on 2024-05-01 added: Salary"));

    tally(&dir)
        .args(["txn", "add", "20.00", "Groceries", "--date", "2024-05-10"])
        .assert()
        .success();

    // A fresh process reads the persisted ledger
    tally(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance: $80.00"));

    assert!(dir.path().join("data").join("ledger.json").exists());
}

#[test]
fn transaction_list_shows_recorded_entries() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["txn", "add", "20.00", "Groceries", "--date", "2024-05-10"])
        .assert()
        .success();

    tally(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn monthly_report_filters_by_month() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["txn", "add", "20.00", "May groceries", "--date", "2024-05-10"])
        .assert()
        .success();
    tally(&dir)
        .args(["txn", "add", "30.00", "June rent", "--date", "2024-06-01"])
        .assert()
        .success();

    tally(&dir)
        .args(["report", "monthly", "5", "2024"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("May groceries")
                .and(predicate::str::contains("Total Expense for 5/2024: $20.00"))
                .and(predicate::str::contains("June rent").not()),
        );
}

#[test]
fn goal_set_and_add_savings() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["goal", "set", "Vacation", "1000", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal Set: Vacation - Save $1000.00 by 2025-06-01"));

    tally(&dir)
        .args(["goal", "add-savings", "Vacation", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current savings: $250.00"));

    tally(&dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vacation").and(predicate::str::contains("25.0%")));
}

#[test]
fn add_savings_to_unknown_goal_reports_and_changes_nothing() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["goal", "add-savings", "Boat", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No goal found with description 'Boat'"));

    tally(&dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No goals set."));
}

#[test]
fn chart_renders_net_change() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["txn", "add", "100.00", "Salary", "--kind", "income", "--date", "2024-05-01"])
        .assert()
        .success();
    tally(&dir)
        .args(["txn", "add", "30.00", "Rent", "--date", "2024-05-05"])
        .assert()
        .success();

    tally(&dir)
        .args(["report", "chart"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Income vs Expense Over Time")
                .and(predicate::str::contains("Net change: $70.00")),
        );
}

#[test]
fn menu_load_without_file_reports_missing_data() {
    let dir = TempDir::new().unwrap();

    // Choose Load (8), then Exit (9)
    tally(&dir)
        .write_stdin("8\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved data found."));
}

#[test]
fn menu_add_save_then_reload_in_new_session() {
    let dir = TempDir::new().unwrap();

    // Add a transaction, save, exit
    tally(&dir)
        .write_stdin("1\n50.00\n2024-05-01\nPaycheck\nincome\n7\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income of $50.00 on 2024-05-01 added: Paycheck"));

    // New session: load, check balance, exit
    tally(&dir)
        .write_stdin("8\n3\n9\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Data loaded from")
                .and(predicate::str::contains("Current Balance: $50.00")),
        );
}

#[test]
fn menu_invalid_choice_keeps_looping() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .write_stdin("42\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again."));
}

#[test]
fn menu_bad_date_aborts_operation_but_not_the_loop() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .write_stdin("1\n20.00\nnot-a-date\n3\n9\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid date format")
                .and(predicate::str::contains("Current Balance: $0.00")),
        );
}
