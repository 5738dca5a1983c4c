//! Integration tests for the `chairside` CLI binary.
//!
//! Exercise the slots, check, and list subcommands through the actual
//! binary, including stdin piping, file input, exit codes, and input
//! validation at the form boundary.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the schedule.json fixture.
fn schedule_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/schedule.json")
}

/// Helper: read the schedule.json fixture as a string.
fn schedule_json() -> String {
    std::fs::read_to_string(schedule_path()).expect("schedule.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Slots subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn slots_from_file() {
    // 2024-01-10 is a Wednesday: dentist-1 works 09:00-17:00 with two
    // active half-hour bookings (09:00 and 12:00) and one cancelled one.
    let assert = Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "slots",
            "-i",
            schedule_path(),
            "--date",
            "2024-01-10",
            "--dentist",
            "dentist-1",
            "--duration",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("09:30-10:00"))
        .stdout(predicate::str::contains("12:00-12:30").not())
        .stdout(predicate::str::contains("14:00-14:30")); // cancelled booking frees its slot

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 14, "16-slot grid minus 2 active bookings");
}

#[test]
fn slots_from_stdin() {
    Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "slots",
            "--date",
            "2024-01-10",
            "--dentist",
            "dentist-2",
            "--duration",
            "60",
        ])
        .write_stdin(schedule_json())
        .assert()
        .success()
        // dentist-2 works 10:00-14:00 with 10:00-11:00 booked.
        .stdout(predicate::str::contains("11:00-12:00"))
        .stdout(predicate::str::contains("10:00-11:00").not());
}

#[test]
fn slots_respects_granularity() {
    let assert = Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "slots",
            "-i",
            schedule_path(),
            "--date",
            "2024-01-10",
            "--dentist",
            "dentist-1",
            "--duration",
            "30",
            "--granularity",
            "60",
        ])
        .assert()
        .success();

    // Hourly starts 09:00..16:00 = 8 candidates, minus the 09:00 and
    // 12:00 bookings.
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 6);
}

#[test]
fn slots_json_output() {
    Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "slots",
            "-i",
            schedule_path(),
            "--date",
            "2024-01-10",
            "--dentist",
            "dentist-1",
            "--duration",
            "30",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""start": "09:30""#));
}

#[test]
fn slots_empty_on_a_day_off() {
    // Tuesday: dentist-1 has no window.
    let assert = Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "slots",
            "-i",
            schedule_path(),
            "--date",
            "2024-01-09",
            "--dentist",
            "dentist-1",
            "--duration",
            "30",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.trim().is_empty(), "no window means no slots");
}

#[test]
fn slots_rejects_zero_duration() {
    Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "slots",
            "-i",
            schedule_path(),
            "--date",
            "2024-01-10",
            "--dentist",
            "dentist-1",
            "--duration",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_reports_free() {
    Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "check",
            "-i",
            schedule_path(),
            "--date",
            "2024-01-10",
            "--start",
            "09:30",
            "--end",
            "10:00",
            "--dentist",
            "dentist-1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("free"));
}

#[test]
fn check_reports_conflict_with_exit_code_1() {
    Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "check",
            "-i",
            schedule_path(),
            "--date",
            "2024-01-10",
            "--start",
            "09:15",
            "--end",
            "09:45",
            "--dentist",
            "dentist-1",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("conflict: apt-1"));
}

#[test]
fn check_exclude_permits_rescheduling() {
    Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "check",
            "-i",
            schedule_path(),
            "--date",
            "2024-01-10",
            "--start",
            "09:15",
            "--end",
            "09:45",
            "--dentist",
            "dentist-1",
            "--exclude",
            "apt-1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("free"));
}

#[test]
fn check_rejects_malformed_time_before_touching_the_engine() {
    Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "check",
            "-i",
            schedule_path(),
            "--date",
            "2024-01-10",
            "--start",
            "9:15",
            "--end",
            "09:45",
            "--dentist",
            "dentist-1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --start"));
}

#[test]
fn check_rejects_inverted_interval() {
    Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "check",
            "-i",
            schedule_path(),
            "--date",
            "2024-01-10",
            "--start",
            "10:00",
            "--end",
            "09:00",
            "--dentist",
            "dentist-1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid interval"));
}

// ─────────────────────────────────────────────────────────────────────────────
// List subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn list_by_dentist_sorted_by_date_and_start() {
    let assert = Command::cargo_bin("chairside")
        .unwrap()
        .args(["list", "-i", schedule_path(), "--dentist", "dentist-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apt-1"))
        .stdout(predicate::str::contains("apt-3"))
        .stdout(predicate::str::contains("apt-4").not());

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("apt-1"));
    assert!(lines[1].starts_with("apt-2"));
    assert!(lines[2].starts_with("apt-3"));
}

#[test]
fn list_by_patient() {
    Command::cargo_bin("chairside")
        .unwrap()
        .args(["list", "-i", schedule_path(), "--patient", "patient-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apt-1"))
        .stdout(predicate::str::contains("apt-3"))
        .stdout(predicate::str::contains("apt-2").not());
}

#[test]
fn list_requires_exactly_one_filter() {
    Command::cargo_bin("chairside")
        .unwrap()
        .args(["list", "-i", schedule_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one"));

    Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "list",
            "-i",
            schedule_path(),
            "--dentist",
            "dentist-1",
            "--patient",
            "patient-1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Schedule file validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn malformed_schedule_file_is_rejected() {
    Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "slots",
            "--date",
            "2024-01-10",
            "--dentist",
            "dentist-1",
            "--duration",
            "30",
        ])
        .write_stdin(r#"{ "appointments": [ { "id": "x" } ] }"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse schedule JSON"));
}

#[test]
fn inverted_interval_in_schedule_file_is_rejected() {
    let bad = r#"{
      "appointments": [{
        "id": "apt-1", "patient_id": "p", "dentist_id": "d",
        "interval": { "date": "2024-01-10", "start": "10:00", "end": "09:00" },
        "status": "scheduled", "type": "checkup"
      }]
    }"#;

    Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "slots",
            "--date",
            "2024-01-10",
            "--dentist",
            "d",
            "--duration",
            "30",
        ])
        .write_stdin(bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse schedule JSON"));
}

#[test]
fn malformed_date_is_rejected() {
    Command::cargo_bin("chairside")
        .unwrap()
        .args([
            "slots",
            "-i",
            schedule_path(),
            "--date",
            "01/10/2024",
            "--dentist",
            "dentist-1",
            "--duration",
            "30",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --date"));
}
