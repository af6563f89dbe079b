//! End-to-end tests driving the compiled binary over a scripted session.

use assert_cmd::Command;
use hoteldesk::db::Db;
use hoteldesk::test_utils::HOTEL_SCHEMA;
use tempfile::TempDir;

/// Creates a database file carrying the hotel schema and returns the
/// directory guard together with the database path.
fn schema_db() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("hotel.db");
    let path = path.to_str().expect("utf-8 path").to_string();
    let db = Db::open(&path).expect("create database");
    db.execute_batch(HOTEL_SCHEMA).expect("apply schema");
    (dir, path)
}

#[test]
fn wrong_argument_count_prints_usage_and_fails() {
    Command::cargo_bin("hoteldesk")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicates::str::contains("Usage: hoteldesk <database>"));
}

#[test]
fn exit_command_ends_the_session() {
    let (_dir, path) = schema_db();
    Command::cargo_bin("hoteldesk")
        .unwrap()
        .arg(&path)
        .write_stdin("17\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("MAIN MENU"))
        .stdout(predicates::str::contains("Bye!"));
}

#[test]
fn closed_input_stream_ends_the_session() {
    let (_dir, path) = schema_db();
    Command::cargo_bin("hoteldesk")
        .unwrap()
        .arg(&path)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicates::str::contains("Bye!"));
}

#[test]
fn out_of_range_choice_is_unrecognized_not_a_reprompt() {
    let (_dir, path) = schema_db();
    Command::cargo_bin("hoteldesk")
        .unwrap()
        .arg(&path)
        .write_stdin("99\n17\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Unrecognized choice!"));
}

#[test]
fn unparsable_choice_reprompts() {
    let (_dir, path) = schema_db();
    Command::cargo_bin("hoteldesk")
        .unwrap()
        .arg(&path)
        .write_stdin("first\n17\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Your input is invalid!"));
}

#[test]
fn command_failure_returns_to_the_menu() {
    let (_dir, path) = schema_db();
    // Booking for a customer that does not exist: the command fails, the
    // session continues to the exit command.
    let script = "5\n1\n2\nJane\nDoe\n2024-06-01\n2\n100\n17\n";
    Command::cargo_bin("hoteldesk")
        .unwrap()
        .arg(&path)
        .write_stdin(script)
        .assert()
        .success()
        .stderr(predicates::str::contains("no customer named Jane Doe"))
        .stdout(predicates::str::contains("Bye!"));
}

#[test]
fn add_then_report_prints_tab_separated_table() {
    let (_dir, path) = schema_db();
    let script = "\
1\nJane\nDoe\n12 Main St\n5551234\n1990-04-02\nFemale\n\
5\n3\n12\nJane\nDoe\n2024-06-15\n2\n240.5\n\
9\n3\n\
17\n";
    Command::cargo_bin("hoteldesk")
        .unwrap()
        .arg(&path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicates::str::contains("Added customer 1"))
        .stdout(predicates::str::contains("Added booking 1"))
        .stdout(predicates::str::contains("booked\n1"));
}
