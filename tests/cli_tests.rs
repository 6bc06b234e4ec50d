//! CLI smoke tests
//!
//! Each test points FINTRACK_DATA_DIR at its own temp directory so runs are
//! isolated from one another and from any real data.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn config_shows_data_paths() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("transactions.json"))
        .stdout(predicate::str::contains("budget.txt"))
        .stdout(predicate::str::contains("notifications.log"));
}

#[test]
fn add_then_list_shows_the_transaction() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["add", "50000", "expense", "food", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction"));

    fintrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("1 transaction(s)"));
}

#[test]
fn add_rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["add", "-100", "expense", "food", "Bad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn budget_set_negative_is_rejected() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["budget", "set", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget must not be negative"));

    // Budget stays at the seeded default
    fintrack(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget: 2000000.00"));
}

#[test]
fn crossing_the_budget_warns_and_logs() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["budget", "set", "100000"])
        .assert()
        .success();

    // 60% of budget, silent
    fintrack(&dir)
        .args(["add", "60000", "expense", "shopping", "Shoes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BUDGET WARNING").not());

    // 120% of budget, warning on the terminal and in the log
    fintrack(&dir)
        .args(["add", "60000", "expense", "shopping", "More shoes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BUDGET WARNING"));

    fintrack(&dir)
        .arg("notifications")
        .assert()
        .success()
        .stdout(predicate::str::contains("BUDGET WARNING"));
}

#[test]
fn report_daily_runs_over_current_data() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["add", "25000", "expense", "transport", "Bus"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["report", "daily"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily Report"))
        .stdout(predicate::str::contains("Bus"));
}

#[test]
fn report_on_empty_ledger_prints_empty_message() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["report", "yearly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions this year"));
}

#[test]
fn unknown_category_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["add", "1000", "expense", "gadgets", "Thing"])
        .assert()
        .failure();
}
