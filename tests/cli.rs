use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DIR", dir.path());
    cmd
}

fn seed(dir: &TempDir) {
    for (amount, category, date) in [
        ("120", "Food", "2024-01-01"),
        ("45.50", "Transport", "2024-01-01"),
        ("30", "Food", "2024-01-02"),
    ] {
        expenses(dir)
            .args(["add", amount, category, "--date", date])
            .assert()
            .success()
            .stdout(predicate::str::contains("Expense added!"));
    }
}

#[test]
fn add_writes_data_file() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["add", "120", "Food", "--date", "2024-01-01"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"amount": 120.0, "category": "Food", "date": "2024-01-01"}])
    );
}

#[test]
fn summaries_over_scenario() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    expenses(&dir)
        .args(["summary", "category", "food"])
        .assert()
        .success()
        .stdout("Total spent on food: $150.00\n");

    expenses(&dir)
        .args(["summary", "total"])
        .assert()
        .success()
        .stdout("Total overall spending: $195.50\n");

    expenses(&dir)
        .args(["summary", "time", "daily"])
        .assert()
        .success()
        .stdout("2024-01-01: $165.50\n2024-01-02: $30.00\n");

    expenses(&dir)
        .args(["summary", "time", "weekly"])
        .assert()
        .success()
        .stdout("2024-W01: $195.50\n");
}

#[test]
fn unknown_time_bucket_fails() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["summary", "time", "hourly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid option"));
}

#[test]
fn rejected_amounts_are_not_saved() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "abc", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number"));

    expenses(&dir)
        .args(["add", "-5", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn list_and_delete() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));

    seed(&dir);

    expenses(&dir)
        .args(["delete", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid selection"));

    expenses(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense deleted!"));

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transport").and(predicate::str::contains("2 expense(s)")));
}

#[test]
fn edit_changes_only_given_fields() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    expenses(&dir)
        .args(["edit", "2", "--category", "Taxi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense updated!"));

    expenses(&dir)
        .args(["summary", "category", "taxi"])
        .assert()
        .success()
        .stdout("Total spent on taxi: $45.50\n");

    expenses(&dir)
        .args(["edit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made."));
}

#[test]
fn menu_exits_on_five() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Tracker Menu"));
}

#[test]
fn menu_adds_and_summarises() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("menu")
        .write_stdin("1\n19.99\nBooks\n2024-02-10\n2\n2\n5\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Expense added!")
                .and(predicate::str::contains("Total overall spending: $19.99")),
        );
}

#[test]
fn menu_stops_at_end_of_input() {
    let dir = TempDir::new().unwrap();
    expenses(&dir).write_stdin("").assert().success();
}

#[test]
fn corrupt_data_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("expenses.json"), "{ not a list").unwrap();

    expenses(&dir)
        .args(["summary", "total"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt data file"));
}

#[test]
fn export_to_stdout() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["add", "120", "Food", "--date", "2024-01-01"])
        .assert()
        .success();

    expenses(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout("amount,category,date\n120.00,Food,2024-01-01\n");
}

#[test]
fn history_lists_changes() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    expenses(&dir).args(["delete", "3"]).assert().success();

    expenses(&dir)
        .args(["history", "--limit", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Showing 2 of 4 entries")
                .and(predicate::str::contains("CREATE expense #3 (Food)"))
                .and(predicate::str::contains("DELETE expense #3 (Food)"))
                .and(predicate::str::contains("Transport").not()),
        );
}

#[test]
fn config_changes_currency() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    expenses(&dir)
        .args(["config", "--currency", "€"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."));

    expenses(&dir)
        .args(["summary", "total"])
        .assert()
        .success()
        .stdout("Total overall spending: €195.50\n");
}

#[test]
fn chart_with_no_expenses() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("chart")
        .assert()
        .success()
        .stdout("No expenses to chart.\n");
}

#[test]
fn loads_file_with_free_text_dates() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("expenses.json"),
        r#"[{"amount":5.0,"category":"Food","date":""},{"amount":2.0,"category":"Food","date":"01/02/2024"}]"#,
    )
    .unwrap();

    expenses(&dir)
        .args(["summary", "category", "food"])
        .assert()
        .success()
        .stdout("Total spent on food: $7.00\n");

    expenses(&dir)
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Tracker Menu"));
}

#[test]
fn edit_and_delete_use_configured_currency() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    expenses(&dir)
        .args(["config", "--currency", "€"])
        .assert()
        .success();

    expenses(&dir)
        .args(["edit", "1", "--amount", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("After:  2024-01-01 - Food: €99.00"));

    expenses(&dir)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2024-01-01 - Transport: €45.50")
                .and(predicate::str::contains("$").not()),
        );
}

#[test]
fn oversized_amount_rejected() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["add", "90000000000000000", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"));
}
